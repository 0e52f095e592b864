pub mod error;
pub mod mock;
pub mod node;
pub mod provenance;
pub mod value;

pub use error::ValueError;
pub use node::PageNode;
pub use provenance::{NodeRef, Provenance};
pub use value::{EvalItem, PathValue, ValueKind};
