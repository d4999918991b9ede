//! A quad whose terms are decoded on demand.

use crate::{decode_term, Result};
use rdfjs_term::repr::QuadRepr;
use rdfjs_term::{Quad, Term};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use std::sync::OnceLock;

const SUBJECT: usize = 0;
const PREDICATE: usize = 1;
const OBJECT: usize = 2;
const GRAPH: usize = 3;

/// A JSON quad that keeps the raw JSON of each of its terms,
/// and decodes each term the first time it is accessed.
///
/// Decoding errors in the terms are therefore only reported by the accessors
/// ([`subject`](LazyQuad::subject), [`predicate`](LazyQuad::predicate), ...),
/// not when the `LazyQuad` is built.
/// Decoded terms are memoized, so a `LazyQuad` can be shared across threads.
///
/// ```
/// use rdfjs_json::LazyQuad;
///
/// let q = LazyQuad::from_slice(br#"{
///     "subject": {"termType":"NamedNode","value":"http://a"},
///     "predicate": {"termType":"NamedNode","value":"http://b"},
///     "object": {"termType":"Literal","datatype":{"termType":"BlankNode","value":"oops"}}
/// }"#).unwrap();
/// assert_eq!(q.subject().unwrap().value(), "http://a");
/// assert!(q.object().is_err());
/// assert!(q.graph().unwrap().is_default_graph());
/// ```
#[derive(Clone, Debug)]
pub struct LazyQuad {
    raw: [Option<Box<RawValue>>; 4],
    terms: [OnceLock<Term>; 4],
}

impl LazyQuad {
    /// Read a quad from a JSON object, without decoding its terms.
    ///
    /// # Error
    ///
    /// Only the structure of the quad is checked here:
    /// `bytes` must be a JSON object with (at least) the keys
    /// `subject`, `predicate` and `object`.
    /// A missing or `null` graph stands for the default graph.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// The subject of this quad, decoded on first access.
    pub fn subject(&self) -> Result<&Term> {
        self.term(SUBJECT)
    }

    /// The predicate of this quad, decoded on first access.
    pub fn predicate(&self) -> Result<&Term> {
        self.term(PREDICATE)
    }

    /// The object of this quad, decoded on first access.
    pub fn object(&self) -> Result<&Term> {
        self.term(OBJECT)
    }

    /// The graph of this quad, decoded on first access.
    pub fn graph(&self) -> Result<&Term> {
        self.term(GRAPH)
    }

    /// Decode all the terms of this quad.
    pub fn into_quad(self) -> Result<Quad> {
        Ok(Quad::new(
            self.subject()?.clone(),
            self.predicate()?.clone(),
            self.object()?.clone(),
            Some(self.graph()?.clone()),
        ))
    }

    fn term(&self, pos: usize) -> Result<&Term> {
        let cell = &self.terms[pos];
        if let Some(term) = cell.get() {
            return Ok(term);
        }
        let term = match &self.raw[pos] {
            None => Term::default_graph(),
            Some(raw) => decode_term(raw.get().as_bytes()).map_err(|err| {
                log::debug!("could not decode quad term {}: {}", raw.get(), err);
                err
            })?,
        };
        // another thread may have won the race; both decoded the same JSON
        Ok(cell.get_or_init(|| term))
    }
}

impl TryFrom<LazyQuad> for Quad {
    type Error = crate::JsonError;

    fn try_from(other: LazyQuad) -> Result<Self> {
        other.into_quad()
    }
}

impl<'de> Deserialize<'de> for LazyQuad {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = QuadRepr::<Box<RawValue>>::deserialize(deserializer)?;
        Ok(LazyQuad {
            raw: [
                Some(repr.subject),
                Some(repr.predicate),
                Some(repr.object),
                repr.graph,
            ],
            terms: Default::default(),
        })
    }
}

impl Serialize for LazyQuad {
    /// Write back the original JSON of each term,
    /// except for a missing graph which is written as the default graph.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Quad", 4)?;
        for (key, raw) in ["subject", "predicate", "object"].into_iter().zip(&self.raw) {
            s.serialize_field(key, raw)?;
        }
        match &self.raw[GRAPH] {
            Some(raw) => s.serialize_field("graph", raw)?,
            None => s.serialize_field("graph", &Term::default_graph())?,
        }
        s.end()
    }
}
