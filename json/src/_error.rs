//! I define [`JsonError`].

use rdfjs_term::TermError;

/// Error raised by the JSON codec.
#[derive(thiserror::Error, Debug)]
pub enum JsonError {
    /// The JSON is well formed, but does not describe the expected term
    #[error(transparent)]
    Term(#[from] TermError),
    /// The JSON is structurally invalid
    /// (including unknown `termType` values and missing keys)
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Type alias for `Result` with default error [`JsonError`].
pub type Result<T, E = JsonError> = std::result::Result<T, E>;
