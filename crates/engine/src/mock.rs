//! In-memory browser collaborators, publicly available for testing this
//! crate and the crates downstream of it.

use crate::browser::{BrowserSession, ExtractionQuery, NextNavigator, Page};
use crate::error::EngineError;
use crate::walker;
use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;
use trawl_axis::AxisKind;
use trawl_value::mock::MockNode;
use trawl_value::{EvalItem, PageNode};

/// A rendered-page snapshot: a flat list of queryable nodes plus the pages
/// reachable by performing an action on one of them, keyed by the node's
/// `target` attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct MockPage {
    pub name: String,
    pub nodes: Vec<MockNode>,
    pub targets: BTreeMap<String, MockPage>,
}

impl MockPage {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            nodes: Vec::new(),
            targets: BTreeMap::new(),
        }
    }

    pub fn with_node(mut self, node: MockNode) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn with_target(mut self, key: &str, page: MockPage) -> Self {
        self.targets.insert(key.to_string(), page);
        self
    }
}

impl Page for MockPage {
    type Node = MockNode;

    fn document(&self) -> MockNode {
        MockNode::element("html", &self.name)
    }

    fn evaluate(
        &self,
        selector: &str,
        _context: &MockNode,
    ) -> Result<Vec<EvalItem<MockNode>>, EngineError> {
        // Understands the walker's `//tag` and `//*` selectors.
        let tag = selector.trim_start_matches('/');
        Ok(self
            .nodes
            .iter()
            .filter(|n| tag == "*" || n.tag == tag)
            .cloned()
            .map(EvalItem::Node)
            .collect())
    }

    fn perform(&self, kind: AxisKind, node: &MockNode) -> Result<MockPage, EngineError> {
        let key = node.attribute("target").ok_or_else(|| {
            EngineError::BadData(format!(
                "node <{}> has no action target for {}",
                node.tag, kind
            ))
        })?;
        self.targets
            .get(&key)
            .cloned()
            .ok_or_else(|| EngineError::Io(format!("no page behind target '{}'", key)))
    }
}

/// A browser session over a fixed url-to-page map, with observable open and
/// close counters.
#[derive(Debug, Clone, Default)]
pub struct MockSession {
    pages: BTreeMap<String, MockPage>,
    open_calls: Rc<Cell<usize>>,
    close_calls: Rc<Cell<usize>>,
}

impl MockSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, page: MockPage) -> Self {
        self.pages.insert(url.to_string(), page);
        self
    }

    /// A handle that keeps counting opens after the session is moved into
    /// a grounded expression.
    pub fn open_counter(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.open_calls)
    }

    /// Same, for `close_all` calls.
    pub fn close_counter(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.close_calls)
    }
}

impl BrowserSession for MockSession {
    type Page = MockPage;

    fn open(&mut self, url: &str) -> Result<MockPage, EngineError> {
        self.open_calls.set(self.open_calls.get() + 1);
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| EngineError::Io(format!("cannot fetch {}", url)))
    }

    fn close_all(&mut self) {
        self.close_calls.set(self.close_calls.get() + 1);
    }
}

/// Follows each declared next-link path once from the reached page and then
/// reports pagination exhausted.
pub struct MockNavigator {
    queue: Vec<MockPage>,
}

impl NextNavigator<MockPage> for MockNavigator {
    fn from_page(page: &MockPage, next_paths: &[String]) -> Result<Self, EngineError> {
        let mut queue = Vec::new();
        for path in next_paths {
            let steps = trawl_axis::parse_path(path)?;
            queue.push(walker::walk(page.clone(), &steps)?);
        }
        queue.reverse();
        Ok(Self { queue })
    }

    fn next_page(&mut self) -> Result<Option<MockPage>, EngineError> {
        Ok(self.queue.pop())
    }
}

/// Records every page handed to it and emits one summary line per page.
#[derive(Debug, Default)]
pub struct RecordingQuery {
    pub scraped: Vec<String>,
}

impl ExtractionQuery<MockPage> for RecordingQuery {
    fn scrape(
        &mut self,
        page: &MockPage,
        data_paths: &BTreeMap<String, String>,
        attributes: &BTreeMap<String, String>,
    ) -> Result<String, EngineError> {
        self.scraped.push(page.name.clone());
        let names: Vec<&str> = data_paths.keys().map(String::as_str).collect();
        Ok(format!(
            "{} [{}] ({} attrs)\n",
            page.name,
            names.join(","),
            attributes.len()
        ))
    }
}
