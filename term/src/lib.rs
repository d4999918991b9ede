//! This crate defines the RDF/JS term model:
//! * [`Term`], a closed enum over the five kinds of RDF/JS terms
//!   ([`NamedNode`], [`BlankNode`], [`Literal`], [`Variable`] and [`DefaultGraph`]);
//! * [`Quad`], the subject/predicate/object/graph tuple built from terms;
//! * the [`escape`] and [`unescape`] functions used by the N-Quads syntax.
//!
//! All terms keep their text in [`Arc<str>`](std::sync::Arc),
//! making them cheap to clone and thread-safe.
//!
//! With the `serde` feature, terms and quads also implement
//! `Serialize` and `Deserialize`, following the JSON shape of RDF/JS
//! (see [`repr`]).
#![deny(missing_docs)]

use std::fmt;

mod _error;
pub use _error::*;
mod blank_node;
pub use blank_node::*;
mod default_graph;
pub use default_graph::*;
mod escape;
pub use escape::*;
mod literal;
pub use literal::*;
mod named_node;
pub use named_node::*;
pub mod ns;
mod quad;
pub use quad::*;
#[cfg(feature = "serde")]
pub mod repr;
mod variable;
pub use variable::*;

/// The tag identifying each kind of [`Term`].
///
/// Its textual form is the `termType` of RDF/JS.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TermType {
    /// Tag of [`NamedNode`]
    NamedNode,
    /// Tag of [`BlankNode`]
    BlankNode,
    /// Tag of [`Literal`]
    Literal,
    /// Tag of [`Variable`]
    Variable,
    /// Tag of [`DefaultGraph`]
    DefaultGraph,
}

impl TermType {
    /// The `termType` string of RDF/JS.
    pub fn as_str(&self) -> &'static str {
        match self {
            TermType::NamedNode => "NamedNode",
            TermType::BlankNode => "BlankNode",
            TermType::Literal => "Literal",
            TermType::Variable => "Variable",
            TermType::DefaultGraph => "DefaultGraph",
        }
    }
}

impl fmt::Display for TermType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An RDF/JS term.
///
/// Two terms are equal if they have the same [`TermType`] and the same value;
/// literals must also agree on their language tag and on their
/// (effective) datatype.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Term {
    /// An IRI
    NamedNode(NamedNode),
    /// A blank node
    BlankNode(BlankNode),
    /// A literal
    Literal(Literal),
    /// A variable, only meaningful in patterns
    Variable(Variable),
    /// The default graph
    DefaultGraph(DefaultGraph),
}

impl Term {
    /// Build a named node term.
    pub fn named_node<V: Into<std::sync::Arc<str>>>(iri: V) -> Self {
        Term::NamedNode(NamedNode::new(iri))
    }

    /// Build a blank node term.
    pub fn blank_node<V: Into<std::sync::Arc<str>>>(label: V) -> Self {
        Term::BlankNode(BlankNode::new(label))
    }

    /// Build a simple literal term (with the implicit datatype `xsd:string`).
    pub fn literal<V: Into<std::sync::Arc<str>>>(value: V) -> Self {
        Term::Literal(Literal::new_simple(value))
    }

    /// Build a variable term.
    pub fn variable<V: Into<std::sync::Arc<str>>>(name: V) -> Self {
        Term::Variable(Variable::new(name))
    }

    /// The default graph term.
    pub fn default_graph() -> Self {
        Term::DefaultGraph(DefaultGraph)
    }

    /// The kind of this term.
    pub fn term_type(&self) -> TermType {
        match self {
            Term::NamedNode(_) => TermType::NamedNode,
            Term::BlankNode(_) => TermType::BlankNode,
            Term::Literal(_) => TermType::Literal,
            Term::Variable(_) => TermType::Variable,
            Term::DefaultGraph(_) => TermType::DefaultGraph,
        }
    }

    /// The value of this term.
    ///
    /// This is the IRI of a named node, the label of a blank node,
    /// the lexical form of a literal, the name of a variable,
    /// and the empty string for the default graph.
    pub fn value(&self) -> &str {
        match self {
            Term::NamedNode(n) => n.value(),
            Term::BlankNode(b) => b.value(),
            Term::Literal(l) => l.value(),
            Term::Variable(v) => v.value(),
            Term::DefaultGraph(g) => g.value(),
        }
    }

    /// Whether this term is the default graph.
    pub fn is_default_graph(&self) -> bool {
        matches!(self, Term::DefaultGraph(_))
    }

    /// Borrow this term as a named node, if it is one.
    pub fn as_named_node(&self) -> Option<&NamedNode> {
        match self {
            Term::NamedNode(n) => Some(n),
            _ => None,
        }
    }

    /// Borrow this term as a blank node, if it is one.
    pub fn as_blank_node(&self) -> Option<&BlankNode> {
        match self {
            Term::BlankNode(b) => Some(b),
            _ => None,
        }
    }

    /// Borrow this term as a literal, if it is one.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(l) => Some(l),
            _ => None,
        }
    }

    /// Borrow this term as a variable, if it is one.
    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Term::Variable(v) => Some(v),
            _ => None,
        }
    }

    /// Writes the term to the `fmt::Write` using the N-Quads syntax.
    ///
    /// The default graph is written as the empty string.
    pub fn write_fmt<W>(&self, w: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        match self {
            Term::NamedNode(n) => n.write_fmt(w),
            Term::BlankNode(b) => b.write_fmt(w),
            Term::Literal(l) => l.write_fmt(w),
            Term::Variable(v) => v.write_fmt(w),
            Term::DefaultGraph(_) => Ok(()),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_fmt(f)
    }
}

macro_rules! impl_variant_conversions {
    ($variant:ident) => {
        impl From<$variant> for Term {
            fn from(other: $variant) -> Self {
                Term::$variant(other)
            }
        }

        impl TryFrom<Term> for $variant {
            type Error = TermError;

            fn try_from(term: Term) -> Result<Self, Self::Error> {
                match term {
                    Term::$variant(inner) => Ok(inner),
                    _ => Err(TermError::mismatch(TermType::$variant, term.term_type())),
                }
            }
        }

        impl<'a> TryFrom<&'a Term> for &'a $variant {
            type Error = TermError;

            fn try_from(term: &'a Term) -> Result<Self, Self::Error> {
                match term {
                    Term::$variant(inner) => Ok(inner),
                    _ => Err(TermError::mismatch(TermType::$variant, term.term_type())),
                }
            }
        }
    };
}

impl_variant_conversions!(NamedNode);
impl_variant_conversions!(BlankNode);
impl_variant_conversions!(Literal);
impl_variant_conversions!(Variable);
impl_variant_conversions!(DefaultGraph);

#[cfg(test)]
mod test;
