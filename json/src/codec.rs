//! Eager encoding and decoding of terms and quads.

use crate::Result;
use rdfjs_term::repr::{QuadRepr, TermRepr};
use rdfjs_term::{BlankNode, DefaultGraph, Literal, NamedNode, Quad, Term, TermError, Variable};

/// Decode a term of any kind, dispatching on its `termType`.
pub fn decode_term(bytes: &[u8]) -> Result<Term> {
    decode_as(bytes)
}

/// Decode a term of a specific kind.
///
/// # Error
///
/// [`TermError::TermTypeMismatch`] is raised (wrapped in [`JsonError::Term`](crate::JsonError::Term))
/// if the `termType` of the JSON object is not the one of `T`.
pub fn decode_as<T>(bytes: &[u8]) -> Result<T>
where
    T: TryFrom<TermRepr, Error = TermError>,
{
    let repr: TermRepr = serde_json::from_slice(bytes)?;
    Ok(T::try_from(repr)?)
}

/// Decode a [`NamedNode`].
pub fn decode_named_node(bytes: &[u8]) -> Result<NamedNode> {
    decode_as(bytes)
}

/// Decode a [`BlankNode`].
pub fn decode_blank_node(bytes: &[u8]) -> Result<BlankNode> {
    decode_as(bytes)
}

/// Decode a [`Literal`].
///
/// The `language` key is ignored unless the datatype is `rdf:langString`;
/// a missing datatype makes a simple literal.
pub fn decode_literal(bytes: &[u8]) -> Result<Literal> {
    decode_as(bytes)
}

/// Decode a [`Variable`].
pub fn decode_variable(bytes: &[u8]) -> Result<Variable> {
    decode_as(bytes)
}

/// Decode the [`DefaultGraph`].
pub fn decode_default_graph(bytes: &[u8]) -> Result<DefaultGraph> {
    decode_as(bytes)
}

/// Decode a JSON array of terms.
pub fn decode_terms(bytes: &[u8]) -> Result<Vec<Term>> {
    let reprs: Vec<TermRepr> = serde_json::from_slice(bytes)?;
    reprs
        .into_iter()
        .map(|repr| Ok(Term::try_from(repr)?))
        .collect()
}

/// Encode a term.
///
/// Literals always carry a `language` key (possibly empty),
/// and a `datatype` key only if their datatype was given explicitly.
pub fn encode_term(term: &Term) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(term)?)
}

/// Decode a quad, with all its terms.
///
/// A missing or `null` graph stands for the default graph.
pub fn decode_quad(bytes: &[u8]) -> Result<Quad> {
    let repr: QuadRepr<TermRepr> = serde_json::from_slice(bytes)?;
    let graph = repr.graph.map(Term::try_from).transpose()?;
    Ok(Quad::new(
        repr.subject.try_into()?,
        repr.predicate.try_into()?,
        repr.object.try_into()?,
        graph,
    ))
}

/// Encode a quad, with all its terms.
pub fn encode_quad(quad: &Quad) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(quad)?)
}
