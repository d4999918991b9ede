//! Quads, the statements of an RDF dataset.

use crate::{DefaultGraph, Term};
use std::fmt;

/// An RDF/JS quad: a subject, a predicate, an object and a graph.
///
/// Quads carry no identity besides their four terms:
/// two quads are equal if their terms are pairwise equal.
/// The position of terms is not validated
/// (e.g. a literal is accepted as subject).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Quad {
    subject: Term,
    predicate: Term,
    object: Term,
    graph: Term,
}

impl Quad {
    /// Build a new quad.
    ///
    /// If `graph` is `None`, the quad belongs to the [`DefaultGraph`].
    pub fn new(subject: Term, predicate: Term, object: Term, graph: Option<Term>) -> Self {
        Quad {
            subject,
            predicate,
            object,
            graph: graph.unwrap_or(Term::DefaultGraph(DefaultGraph)),
        }
    }

    /// The subject of this quad.
    pub fn subject(&self) -> &Term {
        &self.subject
    }

    /// The predicate of this quad.
    pub fn predicate(&self) -> &Term {
        &self.predicate
    }

    /// The object of this quad.
    pub fn object(&self) -> &Term {
        &self.object
    }

    /// The graph of this quad; [`Term::DefaultGraph`] if it belongs to no named graph.
    pub fn graph(&self) -> &Term {
        &self.graph
    }

    /// The four terms of this quad, in order.
    pub fn terms(&self) -> [&Term; 4] {
        [&self.subject, &self.predicate, &self.object, &self.graph]
    }

    /// Consume this quad into its four terms, in order.
    pub fn into_terms(self) -> [Term; 4] {
        [self.subject, self.predicate, self.object, self.graph]
    }

    /// Writes the quad to the `fmt::Write` as an N-Quads statement,
    /// without the trailing line break.
    ///
    /// The graph is omitted if it is the default graph.
    pub fn write_fmt<W>(&self, w: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        self.subject.write_fmt(w)?;
        w.write_char(' ')?;
        self.predicate.write_fmt(w)?;
        w.write_char(' ')?;
        self.object.write_fmt(w)?;
        if !self.graph.is_default_graph() {
            w.write_char(' ')?;
            self.graph.write_fmt(w)?;
        }
        w.write_str(" .")
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_fmt(f)
    }
}

impl From<[Term; 4]> for Quad {
    fn from([s, p, o, g]: [Term; 4]) -> Self {
        Quad::new(s, p, o, Some(g))
    }
}

impl From<([Term; 3], Option<Term>)> for Quad {
    fn from(([s, p, o], g): ([Term; 3], Option<Term>)) -> Self {
        Quad::new(s, p, o, g)
    }
}
