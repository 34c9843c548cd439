//! Error types for the listlayout plugin.
//!
//! The list model and the appearance controller have no recoverable failures;
//! the variants here cover the ambient concerns around them (theme loading,
//! configuration and trace file I/O). Broken preconditions on snapshots are
//! programmer errors and panic instead of producing one of these.

use thiserror::Error;

/// The main error type for listlayout operations.
#[derive(Debug, Error)]
pub enum ListLayoutError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, such as reading a
    /// theme file or writing trace output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    ///
    /// The string names the theme source and the parser's complaint.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A configuration value could not be interpreted.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for listlayout operations.
pub type Result<T> = std::result::Result<T, ListLayoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn read() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here/theme.toml")?)
        }

        let err = read().unwrap_err();
        assert!(matches!(err, ListLayoutError::Io(_)));
        assert!(err.to_string().starts_with("IO error:"));
    }

    #[test]
    fn display_includes_context() {
        let err = ListLayoutError::Config("initial_appearance must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: initial_appearance must not be empty"
        );
    }
}
