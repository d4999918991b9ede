//! IRIs, called named nodes in RDF/JS.

use std::fmt;
use std::sync::Arc;

/// An RDF/JS named node, i.e. an IRI.
///
/// The IRI is not checked for validity;
/// the N-Quads grammar only requires a scheme followed by a colon.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamedNode(Arc<str>);

impl NamedNode {
    /// Return a new named node with the given IRI.
    pub fn new<V: Into<Arc<str>>>(iri: V) -> Self {
        NamedNode(iri.into())
    }

    /// The IRI of this named node.
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Writes the named node to the `fmt::Write` in angle brackets.
    pub fn write_fmt<W>(&self, w: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        w.write_char('<')?;
        w.write_str(&self.0)?;
        w.write_char('>')
    }
}

impl fmt::Display for NamedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_fmt(f)
    }
}

impl AsRef<str> for NamedNode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NamedNode {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for NamedNode {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}
