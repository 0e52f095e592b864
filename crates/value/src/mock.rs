//! In-memory node implementation, publicly available for testing this crate
//! and the crates downstream of it.

use crate::node::PageNode;
use std::collections::BTreeMap;

/// A detached element snapshot: tag name, text content, attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockNode {
    pub tag: String,
    pub text: String,
    pub attrs: BTreeMap<String, String>,
}

impl MockNode {
    pub fn element(tag: &str, text: &str) -> Self {
        Self {
            tag: tag.to_string(),
            text: text.to_string(),
            attrs: BTreeMap::new(),
        }
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }
}

impl PageNode for MockNode {
    fn string_value(&self) -> String {
        self.text.clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attrs.get(name).cloned()
    }
}
