//! Trawl is the evaluation core of a declarative web-navigation-and-
//! extraction path language: an XPath-style path syntax extended with
//! action axes (click, follow-link, submit, ...) that both navigate a live
//! rendered page and mark sub-results for extraction.
//!
//! The workspace splits the core into three crates, re-exported here:
//!
//! - [`trawl_axis`]: the extended-axis token grammar.
//! - [`trawl_value`]: the typed-value model with XPath-style coercions and
//!   provenance-carrying node references.
//! - [`trawl_engine`]: the grounded-expression lifecycle over one browser
//!   session, including next-link pagination coordination.
//!
//! The browser engine, the extraction-query builder, and output formatting
//! are external collaborators behind the traits in [`trawl_engine`].

pub use trawl_axis::{AxisError, AxisKind, AxisToken, NodeTest, parse_path, parse_token, split_path};
pub use trawl_engine::{
    BrowserSession, EngineError, ExtractionQuery, GroundedExpression, NextNavigator, Page,
    PathTemplate, SOURCE_URL_ATTRIBUTE, walk,
};
pub use trawl_value::{
    EvalItem, NodeRef, PageNode, PathValue, Provenance, ValueError, ValueKind,
};
