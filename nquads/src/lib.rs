//! This crate is part of the `rdfjs` workspace.
//!
//! It provides a regular-expression based grammar for [N-Quads],
//! parsing one term or one line at a time into [`rdfjs_term`] values,
//! as well as a line-oriented [reader](parser::QuadReader)
//! and a [serializer](serializer::NqSerializer).
//!
//! ```
//! use rdfjs_nquads::parse_quad;
//!
//! let q = parse_quad(r#"_:b1 <http://example.org/name> "Alice"@en ."#).unwrap();
//! assert_eq!(q.subject().value(), "b1");
//! assert!(q.graph().is_default_graph());
//! ```
//!
//! [N-Quads]: https://www.w3.org/TR/n-quads/
#![deny(missing_docs)]

mod _error;
pub use _error::*;
mod _grammar;
pub use _grammar::*;
pub mod parser;
pub use parser::{read_quads, NqConfig, QuadReader};
pub mod serializer;
pub use serializer::{to_nquads_line, write_quad, NqSerializer};

pub use rdfjs_term::{escape, unescape};
