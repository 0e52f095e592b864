use thiserror::Error;
use trawl_axis::AxisError;
use trawl_value::ValueError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Axis grammar error: {0}")]
    Grammar(#[from] AxisError),

    #[error("Type coercion error: {0}")]
    Value(#[from] ValueError),

    #[error("Bad data: {0}")]
    BadData(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Browser session already closed")]
    SessionClosed,
}

impl From<std::io::Error> for EngineError {
    fn from(e: std::io::Error) -> Self {
        EngineError::Io(e.to_string())
    }
}
