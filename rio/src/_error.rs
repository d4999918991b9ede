//! I define [`RioError`].

use rdfjs_term::Term;
use std::fmt;

/// The position of a term in a quad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    /// Subject
    Subject,
    /// Predicate
    Predicate,
    /// Object
    Object,
    /// Graph name
    Graph,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Position::Subject => "subject",
            Position::Predicate => "predicate",
            Position::Object => "object",
            Position::Graph => "graph",
        })
    }
}

/// Error raised when converting from or to the Rio model.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum RioError {
    /// Quoted triples have no counterpart among terms
    #[error("Quoted triples are not supported")]
    UnsupportedTriple,
    /// A term that strict RDF does not accept at this position
    /// (e.g. a literal subject, or a variable anywhere)
    #[error("{} {term} is not allowed as {position}", .term.term_type())]
    InvalidPosition {
        /// Where the term was found
        position: Position,
        /// The offending term
        term: Term,
    },
}

/// Type alias for `Result` with default error [`RioError`].
pub type Result<T, E = RioError> = std::result::Result<T, E>;
