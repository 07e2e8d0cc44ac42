//! Error types for the color_share library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for color_share operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Coarse classification of an [`AnalysisError`], handed to result sinks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    CommandNotValid,
    EmptyArguments,
    InvalidPath,
    DecodeError,
    EmptyImage,
    DuplicateCommand,
    InvalidRange,
    ConfigError,
}

/// Error types for command dispatch and color analysis
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// No command is registered under this name
    #[error("Command not valid: '{command}'")]
    CommandNotValid { command: String },

    /// The command was invoked without any argument
    #[error("Command '{command}' requires at least one argument")]
    EmptyArguments { command: String },

    /// Argument does not point to a readable file
    #[error("Invalid path: '{}'", .path.display())]
    InvalidPath { path: PathBuf },

    /// Image file could not be opened or decoded
    #[error("Failed to decode image '{}': {message}", .path.display())]
    DecodeError {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Decoded image has no pixels
    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    /// Two commands were registered under the same name
    #[error("Command '{command}' is already registered")]
    DuplicateCommand { command: String },

    /// Channel range with lower bound above upper bound
    #[error("Invalid channel range: lower {lower} > upper {upper}")]
    InvalidRange { lower: u8, upper: u8 },

    /// Configuration could not be read, parsed or written
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AnalysisError {
    /// Create a decode error with context
    pub fn decode<E>(path: impl Into<PathBuf>, message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::DecodeError {
            path: path.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get the coarse kind reported to result sinks
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::CommandNotValid { .. } => ErrorKind::CommandNotValid,
            AnalysisError::EmptyArguments { .. } => ErrorKind::EmptyArguments,
            AnalysisError::InvalidPath { .. } => ErrorKind::InvalidPath,
            AnalysisError::DecodeError { .. } => ErrorKind::DecodeError,
            AnalysisError::EmptyImage { .. } => ErrorKind::EmptyImage,
            AnalysisError::DuplicateCommand { .. } => ErrorKind::DuplicateCommand,
            AnalysisError::InvalidRange { .. } => ErrorKind::InvalidRange,
            AnalysisError::ConfigError { .. } => ErrorKind::ConfigError,
        }
    }

    /// Check if the caller may re-prompt for input and try again
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AnalysisError::CommandNotValid { .. }
                | AnalysisError::EmptyArguments { .. }
                | AnalysisError::InvalidPath { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::CommandNotValid { command } => {
                format!("'{}' is not a known command. Run without arguments to list commands.", command)
            }
            AnalysisError::EmptyArguments { command } => {
                format!("'{}' needs an image path, e.g. `{} photo.png`.", command, command)
            }
            AnalysisError::InvalidPath { path } => {
                format!("Could not find '{}'. Please check the path and try again.", path.display())
            }
            AnalysisError::DecodeError { .. } => {
                "Could not decode the image. Please check the file format.".to_string()
            }
            AnalysisError::EmptyImage { .. } => "The image contains no pixels.".to_string(),
            _ => "The analyzer is misconfigured. Please check the configuration file.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_kinds() {
        assert!(AnalysisError::CommandNotValid { command: "bogus".into() }.is_recoverable());
        assert!(AnalysisError::EmptyArguments { command: "analyze".into() }.is_recoverable());
        assert!(AnalysisError::InvalidPath { path: "/no/such/file".into() }.is_recoverable());

        assert!(!AnalysisError::EmptyImage { width: 0, height: 3 }.is_recoverable());
        assert!(!AnalysisError::DuplicateCommand { command: "analyze".into() }.is_recoverable());
        let decode = AnalysisError::decode(
            "a.png",
            "truncated",
            std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof"),
        );
        assert!(!decode.is_recoverable());
    }

    #[test]
    fn test_messages_carry_offending_value() {
        let err = AnalysisError::CommandNotValid { command: "bogus".into() };
        assert!(err.to_string().contains("bogus"));

        let err = AnalysisError::InvalidPath { path: "/no/such/file".into() };
        assert!(err.to_string().contains("/no/such/file"));
        assert!(err.user_message().contains("/no/such/file"));
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            AnalysisError::EmptyImage { width: 0, height: 0 }.kind(),
            ErrorKind::EmptyImage
        );
        assert_eq!(
            AnalysisError::InvalidRange { lower: 9, upper: 1 }.kind(),
            ErrorKind::InvalidRange
        );
    }

    #[test]
    fn test_decode_error_keeps_source() {
        use std::error::Error;

        let err = AnalysisError::decode(
            "photo.png",
            "unsupported format",
            std::io::Error::new(std::io::ErrorKind::InvalidData, "bad magic"),
        );
        assert!(err.source().is_some());
        assert!(err.to_string().contains("photo.png"));
    }
}
