//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the rules content service
#[derive(Error, Debug)]
pub enum Error {
    /// A required file or directory could not be read
    #[error("cannot read '{path}': {source}")]
    File {
        /// Path that failed
        path: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Malformed YAML (or other structured) content
    #[error("parse error: {message}")]
    Parse {
        /// Description of the parse failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A content file that must exist is absent
    #[error("missing mandatory file: {file_name}")]
    MissingMandatoryFile {
        /// Name of the missing file, e.g. `metadata.yaml`
        file_name: String,
    },

    /// A field has a shape the parser does not accept
    #[error("invalid item '{item}': {message}")]
    InvalidItem {
        /// Field name
        item: String,
        /// What was wrong with it
        message: String,
    },

    /// Content that parsed but violates the rule schema
    #[error("invalid content: {message}")]
    InvalidContent {
        /// Description of the violation
        message: String,
    },

    /// Configuration-related error
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Encoding a response payload failed
    #[error("serialization error: {message}")]
    Serialization {
        /// Description of the failure
        message: String,
    },

    /// Internal system error
    #[error("internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Content error creation methods
impl Error {
    /// Create a file error for `path`
    pub fn file<P: AsRef<std::path::Path>>(path: P, source: std::io::Error) -> Self {
        Self::File {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    /// Create a parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
            source: None,
        }
    }

    /// Create a parse error with source
    pub fn parse_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Parse {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a missing mandatory file error
    pub fn missing_mandatory_file<S: Into<String>>(file_name: S) -> Self {
        Self::MissingMandatoryFile {
            file_name: file_name.into(),
        }
    }

    /// Create an invalid item error
    pub fn invalid_item<I: Into<String>, S: Into<String>>(item: I, message: S) -> Self {
        Self::InvalidItem {
            item: item.into(),
            message: message.into(),
        }
    }

    /// Create an invalid content error
    pub fn invalid_content<S: Into<String>>(message: S) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Internal error creation methods
impl Error {
    /// Create a serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether this error is an I/O failure on a path
    pub fn is_file_error(&self) -> bool {
        matches!(self, Self::File { .. })
    }
}
