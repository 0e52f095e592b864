pub mod error;
pub mod parser;
pub mod token;

pub use error::AxisError;
pub use parser::{parse_path, parse_token, split_path};
pub use token::{AxisKind, AxisToken, NodeTest};
