//! Conversions between [`rdfjs_term`] values and [`rio_api::model`] values.
//!
//! Rio types borrow their text, so converting to Rio is cheap
//! and borrows from the converted term;
//! converting from Rio allocates new terms.
//!
//! Rio has no default graph term: at the term level,
//! the default graph is represented as a blank node with an empty id
//! (and such a blank node is read back as the default graph);
//! at the quad level, it is represented by the absence of a graph name.

use crate::{Position, Result, RioError};
use rdfjs_term::ns::xsd;
use rdfjs_term::{Literal, Quad, Term};
use rio_api::model::{
    BlankNode, GeneralizedQuad, GeneralizedTerm, GraphName, Literal as RioLiteral, NamedNode,
    Quad as RioQuad, Subject, Term as RioTerm, Variable,
};

/// Convert a term into a Rio generalized term.
pub fn to_rio_term(term: &Term) -> GeneralizedTerm<'_> {
    match term {
        Term::NamedNode(n) => GeneralizedTerm::NamedNode(NamedNode { iri: n.value() }),
        Term::BlankNode(b) => GeneralizedTerm::BlankNode(BlankNode { id: b.value() }),
        Term::Literal(l) => GeneralizedTerm::Literal(to_rio_literal(l)),
        Term::Variable(v) => GeneralizedTerm::Variable(Variable { name: v.value() }),
        Term::DefaultGraph(_) => GeneralizedTerm::BlankNode(BlankNode { id: "" }),
    }
}

/// Convert a literal into a Rio literal.
pub fn to_rio_literal(lit: &Literal) -> RioLiteral<'_> {
    let value = lit.value();
    let datatype = lit.datatype();
    if lit.is_language_tagged() {
        RioLiteral::LanguageTaggedString {
            value,
            language: lit.language(),
        }
    } else if *datatype == *xsd::string {
        RioLiteral::Simple { value }
    } else {
        RioLiteral::Typed {
            value,
            datatype: NamedNode {
                iri: datatype.value(),
            },
        }
    }
}

/// Convert a Rio generalized term into a term.
///
/// # Error
///
/// [`RioError::UnsupportedTriple`] is raised for quoted triples.
pub fn from_rio_term(term: GeneralizedTerm) -> Result<Term> {
    match term {
        GeneralizedTerm::NamedNode(n) => Ok(Term::named_node(n.iri)),
        GeneralizedTerm::BlankNode(b) => Ok(from_rio_blank_node(b)),
        GeneralizedTerm::Literal(l) => Ok(from_rio_literal(l).into()),
        GeneralizedTerm::Variable(v) => Ok(Term::variable(v.name)),
        GeneralizedTerm::Triple(_) => Err(RioError::UnsupportedTriple),
    }
}

/// Convert a Rio literal into a literal.
pub fn from_rio_literal(lit: RioLiteral) -> Literal {
    match lit {
        RioLiteral::Simple { value } => Literal::new_simple(value),
        RioLiteral::LanguageTaggedString { value, language } => Literal::new_lang(value, language),
        RioLiteral::Typed { value, datatype } => {
            Literal::new(value, "", Some(rdfjs_term::NamedNode::new(datatype.iri)))
        }
    }
}

fn from_rio_blank_node(b: BlankNode) -> Term {
    if b.id.is_empty() {
        Term::default_graph()
    } else {
        Term::blank_node(b.id)
    }
}

/// Convert a quad into a Rio generalized quad.
///
/// Quads in the default graph have no graph name.
pub fn to_rio_generalized_quad(quad: &Quad) -> GeneralizedQuad<'_> {
    let graph = quad.graph();
    GeneralizedQuad {
        subject: to_rio_term(quad.subject()),
        predicate: to_rio_term(quad.predicate()),
        object: to_rio_term(quad.object()),
        graph_name: (!graph.is_default_graph()).then(|| to_rio_term(graph)),
    }
}

/// Convert a Rio generalized quad into a quad.
pub fn from_rio_generalized_quad(quad: GeneralizedQuad) -> Result<Quad> {
    Ok(Quad::new(
        from_rio_term(quad.subject)?,
        from_rio_term(quad.predicate)?,
        from_rio_term(quad.object)?,
        quad.graph_name.map(from_rio_term).transpose()?,
    ))
}

/// Convert a quad into a strict RDF Rio quad.
///
/// # Error
///
/// [`RioError::InvalidPosition`] is raised for any term that strict RDF does not accept at its position:
/// a subject must be a named node or a blank node,
/// a predicate must be a named node,
/// an object must not be a variable or the default graph,
/// and a graph must be a named node, a blank node or the default graph.
pub fn to_rio_quad(quad: &Quad) -> Result<RioQuad<'_>> {
    let subject = match quad.subject() {
        Term::NamedNode(n) => Subject::NamedNode(NamedNode { iri: n.value() }),
        Term::BlankNode(b) => Subject::BlankNode(BlankNode { id: b.value() }),
        other => return Err(invalid(Position::Subject, other)),
    };
    let predicate = match quad.predicate() {
        Term::NamedNode(n) => NamedNode { iri: n.value() },
        other => return Err(invalid(Position::Predicate, other)),
    };
    let object = match quad.object() {
        Term::NamedNode(n) => RioTerm::NamedNode(NamedNode { iri: n.value() }),
        Term::BlankNode(b) => RioTerm::BlankNode(BlankNode { id: b.value() }),
        Term::Literal(l) => RioTerm::Literal(to_rio_literal(l)),
        other => return Err(invalid(Position::Object, other)),
    };
    let graph_name = match quad.graph() {
        Term::DefaultGraph(_) => None,
        Term::NamedNode(n) => Some(GraphName::NamedNode(NamedNode { iri: n.value() })),
        Term::BlankNode(b) => Some(GraphName::BlankNode(BlankNode { id: b.value() })),
        other => return Err(invalid(Position::Graph, other)),
    };
    Ok(RioQuad {
        subject,
        predicate,
        object,
        graph_name,
    })
}

fn invalid(position: Position, term: &Term) -> RioError {
    log::trace!("rejecting {} {} as {}", term.term_type(), term, position);
    RioError::InvalidPosition {
        position,
        term: term.clone(),
    }
}

/// Convert a strict RDF Rio quad into a quad.
///
/// # Error
///
/// [`RioError::UnsupportedTriple`] is raised for quoted triples.
pub fn from_rio_quad(quad: RioQuad) -> Result<Quad> {
    let subject = match quad.subject {
        Subject::NamedNode(n) => Term::named_node(n.iri),
        Subject::BlankNode(b) => from_rio_blank_node(b),
        Subject::Triple(_) => return Err(RioError::UnsupportedTriple),
    };
    let object = match quad.object {
        RioTerm::NamedNode(n) => Term::named_node(n.iri),
        RioTerm::BlankNode(b) => from_rio_blank_node(b),
        RioTerm::Literal(l) => from_rio_literal(l).into(),
        RioTerm::Triple(_) => return Err(RioError::UnsupportedTriple),
    };
    let graph = quad.graph_name.map(|g| match g {
        GraphName::NamedNode(n) => Term::named_node(n.iri),
        GraphName::BlankNode(b) => from_rio_blank_node(b),
    });
    Ok(Quad::new(
        subject,
        Term::named_node(quad.predicate.iri),
        object,
        graph,
    ))
}
