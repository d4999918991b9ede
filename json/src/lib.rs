//! This crate is part of the `rdfjs` workspace.
//!
//! It implements the JSON encoding of terms and quads used by [RDF/JS],
//! where each term is an object tagged by its `termType`:
//!
//! ```
//! use rdfjs_json::{decode_term, encode_term};
//!
//! # fn main() -> Result<(), rdfjs_json::JsonError> {
//! let t = decode_term(br#"{"termType":"Literal","value":"chat","language":"fr",
//!     "datatype":{"termType":"NamedNode","value":"http://www.w3.org/1999/02/22-rdf-syntax-ns#langString"}}"#)?;
//! assert_eq!(t.to_string(), r#""chat"@fr"#);
//! assert_eq!(
//!     encode_term(&rdfjs_term::Term::default_graph())?,
//!     br#"{"termType":"DefaultGraph"}"#
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Quads can be decoded eagerly with [`decode_quad`],
//! or lazily with [`LazyQuad`].
//!
//! [RDF/JS]: https://rdf.js.org/data-model-spec/
#![deny(missing_docs)]

mod _error;
pub use _error::*;
mod codec;
pub use codec::*;
mod lazy;
pub use lazy::*;
