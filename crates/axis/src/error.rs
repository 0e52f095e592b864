use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AxisError {
    #[error("Malformed axis token in the navigational path: '{0}'")]
    MalformedToken(String),

    #[error("No recognized axis kind in token '{0}'")]
    UnknownAxisKind(String),

    #[error("Invalid positional offset in token '{0}'")]
    InvalidOffset(String),
}

impl AxisError {
    /// The offending token, regardless of which way it was malformed.
    pub fn token(&self) -> &str {
        match self {
            AxisError::MalformedToken(t) => t,
            AxisError::UnknownAxisKind(t) => t,
            AxisError::InvalidOffset(t) => t,
        }
    }
}
