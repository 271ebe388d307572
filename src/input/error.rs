use thiserror::Error;

/// Validation failure for user-supplied coordinate text
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Please enter polygon coordinates")]
    MissingInput,

    #[error("A polygon requires at least 3 points (got {found})")]
    InsufficientVertices { found: usize },

    #[error("Invalid coordinates format: {line}")]
    MalformedCoordinate { line: String },
}
