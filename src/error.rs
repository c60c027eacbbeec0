//! Error types for the sitemark library.

use thiserror::Error;

/// Result type alias for sitemark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during Markdown conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// A node constructor contract was violated.
    #[error("Invalid node: {0}")]
    InvalidNode(String),

    /// The document contains no top-level `# ` heading line.
    #[error("No h1 title found in document")]
    MissingTitle,

    /// An inline delimiter run is unbalanced (strict mode only).
    #[error("Unbalanced inline delimiter: {0}")]
    UnbalancedDelimiter(String),

    /// A page template is missing a required placeholder.
    #[error("Template is missing placeholder: {0}")]
    MissingPlaceholder(String),

    /// Error during rendering (HTML, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MissingTitle;
        assert_eq!(err.to_string(), "No h1 title found in document");

        let err = Error::InvalidNode("leaf requires text content".to_string());
        assert_eq!(err.to_string(), "Invalid node: leaf requires text content");

        let err = Error::UnbalancedDelimiter("**".to_string());
        assert_eq!(err.to_string(), "Unbalanced inline delimiter: **");
    }

    #[test]
    fn test_missing_placeholder_display() {
        let err = Error::MissingPlaceholder("{{ Title }}".to_string());
        assert_eq!(
            err.to_string(),
            "Template is missing placeholder: {{ Title }}"
        );
    }
}
