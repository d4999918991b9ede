//! The RDF/JS JSON representation of terms and quads.
//!
//! Terms are objects tagged by their `termType`:
//! ```json
//! {"termType":"NamedNode","value":"http://example.org/"}
//! {"termType":"Literal","value":"chat","language":"fr","datatype":{"termType":"NamedNode","value":"http://www.w3.org/1999/02/22-rdf-syntax-ns#langString"}}
//! {"termType":"DefaultGraph"}
//! ```
//! and quads are objects with the keys `subject`, `predicate`, `object` and `graph`.
//!
//! [`TermRepr`] is the untyped form of a term, as it appears on the wire;
//! it converts into [`Term`] or any of its variants with `TryFrom`,
//! failing with [`TermError::TermTypeMismatch`] when the `termType` is not the expected one.

use crate::ns::rdf;
use crate::{
    BlankNode, DefaultGraph, Literal, NamedNode, Quad, Term, TermError, TermType, Variable,
};
use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

/// A term, as it appears in the RDF/JS JSON shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermRepr {
    /// The discriminator of the term
    pub term_type: TermType,
    /// The value of the term; absent for the default graph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// The language tag of a literal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// The explicit datatype of a literal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<Box<TermRepr>>,
}

impl TermRepr {
    fn check(&self, expected: TermType) -> Result<(), TermError> {
        if self.term_type == expected {
            Ok(())
        } else {
            Err(TermError::TermTypeMismatch {
                expected,
                found: self.term_type,
            })
        }
    }

    fn tagged(term_type: TermType, value: &str) -> Self {
        TermRepr {
            term_type,
            value: Some(value.to_string()),
            language: None,
            datatype: None,
        }
    }
}

impl From<&NamedNode> for TermRepr {
    fn from(other: &NamedNode) -> Self {
        TermRepr::tagged(TermType::NamedNode, other.value())
    }
}

impl From<&BlankNode> for TermRepr {
    fn from(other: &BlankNode) -> Self {
        TermRepr::tagged(TermType::BlankNode, other.value())
    }
}

impl From<&Variable> for TermRepr {
    fn from(other: &Variable) -> Self {
        TermRepr::tagged(TermType::Variable, other.value())
    }
}

impl From<&DefaultGraph> for TermRepr {
    fn from(_: &DefaultGraph) -> Self {
        TermRepr {
            term_type: TermType::DefaultGraph,
            value: None,
            language: None,
            datatype: None,
        }
    }
}

impl From<&Literal> for TermRepr {
    fn from(other: &Literal) -> Self {
        TermRepr {
            term_type: TermType::Literal,
            value: Some(other.value().to_string()),
            language: Some(other.language().to_string()),
            datatype: other
                .explicit_datatype()
                .map(|dt| Box::new(TermRepr::from(dt))),
        }
    }
}

impl From<&Term> for TermRepr {
    fn from(other: &Term) -> Self {
        match other {
            Term::NamedNode(n) => n.into(),
            Term::BlankNode(b) => b.into(),
            Term::Literal(l) => l.into(),
            Term::Variable(v) => v.into(),
            Term::DefaultGraph(g) => g.into(),
        }
    }
}

impl TryFrom<TermRepr> for NamedNode {
    type Error = TermError;

    fn try_from(repr: TermRepr) -> Result<Self, Self::Error> {
        repr.check(TermType::NamedNode)?;
        Ok(NamedNode::new(repr.value.unwrap_or_default()))
    }
}

impl TryFrom<TermRepr> for BlankNode {
    type Error = TermError;

    fn try_from(repr: TermRepr) -> Result<Self, Self::Error> {
        repr.check(TermType::BlankNode)?;
        Ok(BlankNode::new(repr.value.unwrap_or_default()))
    }
}

impl TryFrom<TermRepr> for Variable {
    type Error = TermError;

    fn try_from(repr: TermRepr) -> Result<Self, Self::Error> {
        repr.check(TermType::Variable)?;
        Ok(Variable::new(repr.value.unwrap_or_default()))
    }
}

impl TryFrom<TermRepr> for DefaultGraph {
    type Error = TermError;

    fn try_from(repr: TermRepr) -> Result<Self, Self::Error> {
        repr.check(TermType::DefaultGraph)?;
        Ok(DefaultGraph)
    }
}

impl TryFrom<TermRepr> for Literal {
    type Error = TermError;

    /// The language tag is only kept if the datatype is `rdf:langString`;
    /// without a datatype, the literal is a simple literal.
    fn try_from(repr: TermRepr) -> Result<Self, Self::Error> {
        repr.check(TermType::Literal)?;
        let value = repr.value.unwrap_or_default();
        match repr.datatype {
            None => Ok(Literal::new_simple(value)),
            Some(dt) => {
                let dt = NamedNode::try_from(*dt)?;
                if dt == *rdf::langString {
                    Ok(Literal::new_lang(value, repr.language.unwrap_or_default()))
                } else {
                    Ok(Literal::new_typed(value, dt))
                }
            }
        }
    }
}

impl TryFrom<TermRepr> for Term {
    type Error = TermError;

    fn try_from(repr: TermRepr) -> Result<Self, Self::Error> {
        Ok(match repr.term_type {
            TermType::NamedNode => Term::NamedNode(repr.try_into()?),
            TermType::BlankNode => Term::BlankNode(repr.try_into()?),
            TermType::Literal => Term::Literal(repr.try_into()?),
            TermType::Variable => Term::Variable(repr.try_into()?),
            TermType::DefaultGraph => Term::DefaultGraph(repr.try_into()?),
        })
    }
}

macro_rules! impl_serde {
    ($typ:ident) => {
        impl Serialize for $typ {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                TermRepr::from(self).serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $typ {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let repr = TermRepr::deserialize(deserializer)?;
                $typ::try_from(repr).map_err(D::Error::custom)
            }
        }
    };
}

impl_serde!(Term);
impl_serde!(NamedNode);
impl_serde!(BlankNode);
impl_serde!(Literal);
impl_serde!(Variable);
impl_serde!(DefaultGraph);

/// A quad, as it appears in the RDF/JS JSON shape.
///
/// A missing or `null` graph stands for the default graph.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuadRepr<T> {
    /// The subject of the quad
    pub subject: T,
    /// The predicate of the quad
    pub predicate: T,
    /// The object of the quad
    pub object: T,
    /// The graph of the quad
    pub graph: Option<T>,
}

impl Serialize for Quad {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let [subject, predicate, object, graph] = self.terms();
        QuadRepr {
            subject,
            predicate,
            object,
            graph: Some(graph),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Quad {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = QuadRepr::<Term>::deserialize(deserializer)?;
        Ok(Quad::new(repr.subject, repr.predicate, repr.object, repr.graph))
    }
}
