//! Defines the parsed representation of one extended-axis path segment.

use crate::error::AxisError;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A navigation/action directive beyond the standard tree axes. Each kind
/// carries a page-mutating action performed on the node the step selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisKind {
    /// Click the element that advances to the next page of a result set.
    NextClick,
    /// Click an element that triggers a download or detail view.
    DownloadClick,
    /// Follow a hyperlink to its target page.
    FollowLink,
    /// Submit the form the element belongs to.
    FormSubmit,
    /// Hover the element, triggering any hover-activated content.
    MouseOver,
    /// Fill a form field with its bound value.
    FieldFill,
}

impl AxisKind {
    pub const ALL: [AxisKind; 6] = [
        AxisKind::NextClick,
        AxisKind::DownloadClick,
        AxisKind::FollowLink,
        AxisKind::FormSubmit,
        AxisKind::MouseOver,
        AxisKind::FieldFill,
    ];

    /// The canonical marker string as it appears before `::` in a token.
    pub fn as_str(&self) -> &'static str {
        match self {
            AxisKind::NextClick => "next-click",
            AxisKind::DownloadClick => "download-click",
            AxisKind::FollowLink => "follow-link",
            AxisKind::FormSubmit => "form-submit",
            AxisKind::MouseOver => "mouse-over",
            AxisKind::FieldFill => "field-fill",
        }
    }

    /// Looks a marker string up in the fixed axis-kind table.
    pub fn from_marker(marker: &str) -> Option<AxisKind> {
        AxisKind::ALL.iter().copied().find(|k| k.as_str() == marker)
    }
}

impl FromStr for AxisKind {
    type Err = AxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AxisKind::from_marker(s).ok_or_else(|| AxisError::UnknownAxisKind(s.to_string()))
    }
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The node test of a segment: an element name or the wildcard `*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeTest {
    Name(String),
    Wildcard,
}

impl fmt::Display for NodeTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeTest::Name(name) => write!(f, "{}", name),
            NodeTest::Wildcard => write!(f, "*"),
        }
    }
}

/// One parsed extended-axis path segment. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisToken {
    pub kind: AxisKind,
    pub node_test: NodeTest,
    /// 1-based position among the matching nodes. Defaults to 1 (XPath
    /// counting starts at 1, so this is the first result).
    pub offset: usize,
    /// Required attribute values. Keys unique, order irrelevant.
    pub predicates: BTreeMap<String, String>,
}

impl fmt::Display for AxisToken {
    /// Renders the canonical unparenthesized form. Predicates appear in
    /// sorted key order; the offset bracket only when it is not the default.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}::{}", self.kind, self.node_test)?;
        for (name, value) in &self.predicates {
            write!(f, "[@{}='{}']", name, value)?;
        }
        if self.offset != 1 {
            write!(f, "[{}]", self.offset)?;
        }
        Ok(())
    }
}
