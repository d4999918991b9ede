//! Blank node like specified in [RDF](https://www.w3.org/TR/rdf11-primer/#section-blank-node).
//!

use std::fmt;
use std::sync::Arc;

/// An RDF blank node.
///
/// The label is kept without the leading `_:`,
/// and is never checked: it is the caller's job to keep labels unique
/// within a document.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlankNode(Arc<str>);

impl BlankNode {
    /// Return a new blank node with the given label.
    ///
    /// The label must not include the typical leading `_:`.
    pub fn new<V: Into<Arc<str>>>(label: V) -> Self {
        BlankNode(label.into())
    }

    /// The label of this blank node.
    ///
    /// _Note:_ The label does not have a leading `_:`.
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Writes the blank node to the `fmt::Write` using the N-Quads syntax.
    pub fn write_fmt<W>(&self, w: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        w.write_str("_:")?;
        w.write_str(&self.0)
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_fmt(f)
    }
}

impl AsRef<str> for BlankNode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
