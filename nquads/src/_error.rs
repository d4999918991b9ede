//! I define [`NqError`].

/// Error raised while reading N-Quads.
#[derive(thiserror::Error, Debug)]
pub enum NqError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// A line that is neither a quad, nor blank, nor a comment
    /// (only raised by strict readers).
    #[error("Invalid N-Quads at line {line}: {text:?}")]
    InvalidLine {
        /// The number of the line, starting from 1
        line: usize,
        /// The text of the line, without its line break
        text: String,
    },
}

impl NqError {
    /// The line number where this error was encountered, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            NqError::InvalidLine { line, .. } => Some(*line),
            NqError::Io(_) => None,
        }
    }
}

/// Type alias for `Result` with default error [`NqError`].
pub type Result<T, E = NqError> = std::result::Result<T, E>;
