use crate::value::ValueKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("Cannot cast {from} as {to}")]
    Cast { from: ValueKind, to: ValueKind },

    #[error("Cannot interpret '{text}' as a number")]
    NumberParse { text: String },
}
