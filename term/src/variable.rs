//! Variables like used in SPARQL.
//!

use std::fmt;
use std::sync::Arc;

/// A variable as an RDF/JS term.
///
/// Variables only make sense in patterns or templates;
/// they are never part of ground data.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable(Arc<str>);

impl Variable {
    /// Return a new variable with the given name.
    ///
    /// The name must not include the leading `?`.
    pub fn new<V: Into<Arc<str>>>(name: V) -> Self {
        Variable(name.into())
    }

    /// The name of this variable, without the leading `?`.
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Writes the variable to the `fmt::Write` using the SPARQL syntax.
    pub fn write_fmt<W>(&self, w: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        w.write_char('?')?;
        w.write_str(&self.0)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_fmt(f)
    }
}

impl AsRef<str> for Variable {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
