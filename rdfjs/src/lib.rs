//! This crate gathers the crates of the `rdfjs` workspace,
//! which implement the [RDF/JS] data model in Rust:
//! [terms](term::Term) and [quads](term::Quad),
//! with two concrete syntaxes,
//! [N-Quads](nquads) and the [RDF/JS JSON encoding](json).
//!
//! A [term](term::Term) is one of
//! a named node (an IRI), a blank node, a literal, a variable or the default graph.
//! A [quad](term::Quad) is made of four terms:
//! a subject, a predicate, an object and a graph
//! (the default graph if none is given).
//!
//! # Getting Started
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use rdfjs::prelude::*;
//!
//! let example = r#"
//!     <http://example.org/alice> <http://xmlns.com/foaf/0.1/name> "Alice" .
//!     <http://example.org/alice> <http://xmlns.com/foaf/0.1/knows> _:b <http://example.org/g> .
//! "#;
//! let quads = read_quads(example.as_bytes())?;
//! assert_eq!(quads.len(), 2);
//! assert_eq!(quads[0].object(), &Term::literal("Alice"));
//! assert!(quads[0].graph().is_default_graph());
//!
//! # #[cfg(feature = "json")] {
//! let json = encode_quad(&quads[1])?;
//! let lazy = LazyQuad::from_slice(&json)?;
//! assert_eq!(lazy.object()?.value(), "b");
//! # }
//! # Ok(())
//! # }
//! ```
//!
//! [RDF/JS]: https://rdf.js.org/data-model-spec/

pub use rdfjs_nquads as nquads;
pub use rdfjs_term as term;

#[cfg(feature = "json")]
pub use rdfjs_json as json;
#[cfg(feature = "rio")]
pub use rdfjs_rio as rio;

/// Re-export the most commonly used types and functions.
pub mod prelude {
    pub use rdfjs_nquads::{parse_quad, parse_term, read_quads, to_nquads_line, QuadReader};
    pub use rdfjs_term::ns::{rdf, xsd};
    pub use rdfjs_term::{
        BlankNode, DefaultGraph, Literal, NamedNode, Quad, Term, TermError, TermType, Variable,
    };

    #[cfg(feature = "json")]
    pub use rdfjs_json::{decode_quad, decode_term, encode_quad, encode_term, LazyQuad};
}
