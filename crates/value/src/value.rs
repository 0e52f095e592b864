//! The typed-value model of the path language: a closed sum type over
//! node-set, string, number, boolean, and null, with the loose rule-based
//! coercions of the XPath 1.0 value model.
//!
//! Unlike a standards-compliant XPath engine, an unsupported coercion here
//! is a hard error rather than a silent default: every cast site matches
//! all five variants exhaustively.

use crate::error::ValueError;
use crate::node::PageNode;
use crate::provenance::{NodeRef, Provenance};
use std::fmt;

/// The variant tag of a `PathValue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    NodeSet,
    String,
    Number,
    Boolean,
    Null,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::NodeSet => "node-set",
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::Null => "null",
        };
        write!(f, "{}", name)
    }
}

/// One element of the heterogeneous result list returned by the browser
/// engine's query surface.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalItem<N> {
    Node(N),
    String(String),
    Number(f64),
    Boolean(bool),
}

/// The result of one evaluation step. Exactly one payload is meaningful per
/// tag; mutation happens only through the whole-value `set_*` operations.
#[derive(Debug, Clone, PartialEq)]
pub enum PathValue<N> {
    NodeSet(Provenance<N>),
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
}

impl<N: PageNode> PathValue<N> {
    /// Builds a value from the engine's heterogeneous result list by
    /// inspecting the first element's shape. An empty list yields `Null`.
    pub fn from_items(items: Vec<EvalItem<N>>) -> Self {
        Self::build(items, None)
    }

    /// Like [`PathValue::from_items`], but annotates every node reference
    /// with the acting context's 1-based position and result-set size.
    pub fn from_items_with_context(items: Vec<EvalItem<N>>, position: usize, size: usize) -> Self {
        Self::build(items, Some((position, size)))
    }

    fn build(mut items: Vec<EvalItem<N>>, context: Option<(usize, usize)>) -> Self {
        if items.is_empty() {
            return PathValue::Null;
        }
        let wrap = |node: N| match context {
            Some((position, size)) => NodeRef::with_context(node, position, size),
            None => NodeRef::new(node),
        };
        match items.remove(0) {
            EvalItem::Node(first) => {
                // A DOM evaluation never mixes node and scalar results;
                // scalar stragglers are not representable in a node-set.
                let mut refs = Provenance::new();
                refs.push(wrap(first));
                for item in items {
                    if let EvalItem::Node(node) = item {
                        refs.push(wrap(node));
                    }
                }
                PathValue::NodeSet(refs)
            }
            EvalItem::String(s) => PathValue::String(s),
            EvalItem::Number(n) => PathValue::Number(n),
            EvalItem::Boolean(b) => PathValue::Boolean(b),
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            PathValue::NodeSet(_) => ValueKind::NodeSet,
            PathValue::String(_) => ValueKind::String,
            PathValue::Number(_) => ValueKind::Number,
            PathValue::Boolean(_) => ValueKind::Boolean,
            PathValue::Null => ValueKind::Null,
        }
    }

    fn cast_error(&self, to: ValueKind) -> ValueError {
        ValueError::Cast {
            from: self.kind(),
            to,
        }
    }

    /// A node-set view. Only a node-set can be viewed as one; casting from
    /// any scalar or from null fails.
    pub fn as_node_set(&self) -> Result<&Provenance<N>, ValueError> {
        match self {
            PathValue::NodeSet(nodes) => Ok(nodes),
            PathValue::String(_) | PathValue::Number(_) | PathValue::Boolean(_)
            | PathValue::Null => Err(self.cast_error(ValueKind::NodeSet)),
        }
    }

    /// Coerces to a string. An empty node-set yields the empty string; a
    /// non-empty one yields the string-value of its first node.
    pub fn as_string(&self) -> Result<String, ValueError> {
        match self {
            PathValue::NodeSet(nodes) => Ok(nodes
                .first()
                .map(|r| r.node().string_value())
                .unwrap_or_default()),
            PathValue::String(s) => Ok(s.clone()),
            PathValue::Number(n) => Ok(n.to_string()),
            PathValue::Boolean(b) => Ok(if *b { "true" } else { "false" }.to_string()),
            PathValue::Null => Err(self.cast_error(ValueKind::String)),
        }
    }

    /// Coerces to a number. The string literals `true` and `false` map to
    /// 1.0 and 0.0; any other string must parse as a decimal. A node-set
    /// contributes the string-value of its first node, and fails when empty.
    pub fn as_number(&self) -> Result<f64, ValueError> {
        match self {
            PathValue::NodeSet(nodes) => {
                let first = nodes.first().ok_or_else(|| self.cast_error(ValueKind::Number))?;
                parse_decimal(&first.node().string_value())
            }
            PathValue::String(s) => match s.as_str() {
                "true" => Ok(1.0),
                "false" => Ok(0.0),
                other => parse_decimal(other),
            },
            PathValue::Number(n) => Ok(*n),
            PathValue::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
            PathValue::Null => Err(self.cast_error(ValueKind::Number)),
        }
    }

    /// Coerces to a boolean: non-empty node-set, non-empty string (content
    /// irrelevant), non-zero number.
    pub fn as_bool(&self) -> Result<bool, ValueError> {
        match self {
            PathValue::NodeSet(nodes) => Ok(!nodes.is_empty()),
            PathValue::String(s) => Ok(!s.is_empty()),
            PathValue::Number(n) => Ok(*n != 0.0),
            PathValue::Boolean(b) => Ok(*b),
            PathValue::Null => Err(self.cast_error(ValueKind::Boolean)),
        }
    }

    // Whole-value replacement: tag and payload always change together.

    pub fn set_node_set(&mut self, nodes: Provenance<N>) {
        *self = PathValue::NodeSet(nodes);
    }

    pub fn set_string(&mut self, s: String) {
        *self = PathValue::String(s);
    }

    pub fn set_number(&mut self, n: f64) {
        *self = PathValue::Number(n);
    }

    pub fn set_bool(&mut self, b: bool) {
        *self = PathValue::Boolean(b);
    }

    pub fn set_null(&mut self) {
        *self = PathValue::Null;
    }
}

impl<N: PageNode> fmt::Display for PathValue<N> {
    /// The raw, untagged rendering used at serialization boundaries.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathValue::NodeSet(nodes) => write!(
                f,
                "{}",
                nodes
                    .first()
                    .map(|r| r.node().string_value())
                    .unwrap_or_default()
            ),
            PathValue::String(s) => write!(f, "{}", s),
            PathValue::Number(n) => write!(f, "{}", n),
            PathValue::Boolean(b) => write!(f, "{}", b),
            PathValue::Null => Ok(()),
        }
    }
}

fn parse_decimal(text: &str) -> Result<f64, ValueError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| ValueError::NumberParse {
            text: text.to_string(),
        })
}
