//! The grounded-expression engine: binds a navigational path template to a
//! concrete URL and drives it, step by step, against one browser session.

pub mod browser;
pub mod error;
pub mod grounded;
pub mod mock;
pub mod template;
pub mod walker;

pub use browser::{BrowserSession, ExtractionQuery, NextNavigator, Page};
pub use error::EngineError;
pub use grounded::{GroundedExpression, SOURCE_URL_ATTRIBUTE};
pub use template::PathTemplate;
pub use walker::walk;
