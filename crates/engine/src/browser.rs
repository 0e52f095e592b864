//! The collaborator contracts the engine is written against: the browser
//! session and its rendered pages, the next-link navigator for paginated
//! result sets, and the extraction-query subsystem that formats output.
//!
//! The engine never owns a DOM. Everything behind these traits, page
//! loading and JavaScript execution included, belongs to the external
//! rendered-page engine.

use crate::error::EngineError;
use std::collections::BTreeMap;
use trawl_axis::AxisKind;
use trawl_value::{EvalItem, PageNode};

/// One browser session, exclusively owned by one grounded expression.
pub trait BrowserSession {
    type Page: Page;

    /// Fetches and renders the page behind `url`.
    fn open(&mut self, url: &str) -> Result<Self::Page, EngineError>;

    /// Releases every window/page the session holds.
    fn close_all(&mut self);
}

/// A rendered page and its DOM query surface.
pub trait Page: Sized {
    type Node: PageNode;

    /// The document node, the context every navigation step starts from.
    fn document(&self) -> Self::Node;

    /// Evaluates an XPath-like selector against a context node, returning
    /// the engine's heterogeneous result list.
    fn evaluate(
        &self,
        selector: &str,
        context: &Self::Node,
    ) -> Result<Vec<EvalItem<Self::Node>>, EngineError>;

    /// Performs the page-mutating action of an axis kind on a node,
    /// yielding the page the action leads to.
    fn perform(&self, kind: AxisKind, node: &Self::Node) -> Result<Self, EngineError>;
}

/// Advances through the pages of a paginated result set. Built from the
/// reached page and the declared next-link paths; iterated externally
/// during multi-page scraping.
pub trait NextNavigator<P: Page>: Sized {
    fn from_page(page: &P, next_paths: &[String]) -> Result<Self, EngineError>;

    /// The next page of results, or `None` when pagination is exhausted.
    fn next_page(&mut self) -> Result<Option<P>, EngineError>;
}

/// The extraction-query subsystem: consumes the named data paths plus the
/// attribute map and produces formatted output. The output schema is its
/// own concern.
pub trait ExtractionQuery<P: Page> {
    fn scrape(
        &mut self,
        page: &P,
        data_paths: &BTreeMap<String, String>,
        attributes: &BTreeMap<String, String>,
    ) -> Result<String, EngineError>;
}
