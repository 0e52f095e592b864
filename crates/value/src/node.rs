//! Defines the abstraction over DOM-node handles borrowed from the external
//! rendered-page engine.

/// The contract for a node handle produced by the browser engine's query
/// surface. The evaluation core is written exclusively against this trait;
/// it never owns the underlying DOM. A handle must not outlive the page or
/// session that produced it.
pub trait PageNode: std::fmt::Debug + Clone + PartialEq {
    /// The string value of the node under its own node-to-string rule
    /// (the XPath 1.0 `string()` semantics, delegated to the engine).
    fn string_value(&self) -> String;

    /// The value of the named attribute, if the node carries it.
    fn attribute(&self, name: &str) -> Option<String>;
}
