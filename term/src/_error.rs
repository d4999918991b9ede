use crate::TermType;
use thiserror::Error;

/// Type alias for `Result` with default error `TermError`.
///
/// Can be used like `std::result::Result` as well.
pub type Result<T, E = TermError> = std::result::Result<T, E>;

/// This error is raised when a term can not be built or converted.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TermError {
    /// A term of a given type was expected, but a term of another type was provided.
    ///
    /// Raised when a JSON discriminator does not match the decoder in use,
    /// or when converting a [`Term`](crate::Term) into one of its variants.
    #[error("Mismatching term types: expected {expected}, found {found}")]
    TermTypeMismatch {
        /// The term type that was expected.
        expected: TermType,
        /// The term type that was actually found.
        found: TermType,
    },
    /// The text does not match any of the term productions.
    #[error("Error parsing term '{0}'")]
    MalformedTerm(String),
}

impl TermError {
    pub(crate) fn mismatch(expected: TermType, found: TermType) -> Self {
        TermError::TermTypeMismatch { expected, found }
    }
}
