//! Error handling for model loading and scene flattening

use thiserror::Error;

/// Result type alias for viewer core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading and flattening a model
#[derive(Error, Debug)]
pub enum Error {
    /// Import operation failed
    #[error("Import failed: {message}")]
    ImportFailed { message: String },

    /// Invalid file path or file not found
    #[error("File error: {message}")]
    FileError { message: String },

    /// Invalid parameters or configuration
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Unsupported file format
    #[error("Unsupported format: {format}")]
    UnsupportedFormat { format: String },

    /// The importer produced a node hierarchy that cannot be flattened
    #[error("Corrupt scene graph: {message}")]
    CorruptSceneGraph { message: String },

    /// Generic error with custom message
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a new import error
    pub fn import_failed<S: Into<String>>(message: S) -> Self {
        Self::ImportFailed {
            message: message.into(),
        }
    }

    /// Create a new file error
    pub fn file_error<S: Into<String>>(message: S) -> Self {
        Self::FileError {
            message: message.into(),
        }
    }

    /// Create a new invalid parameter error
    pub fn invalid_parameter<S: Into<String>>(message: S) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create a new unsupported format error
    pub fn unsupported_format<S: Into<String>>(format: S) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Create a new corrupt scene graph error
    pub fn corrupt_scene_graph<S: Into<String>>(message: S) -> Self {
        Self::CorruptSceneGraph {
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(message: S) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Whether this error reports malformed importer output rather than an I/O or format problem
    pub fn is_corrupt_scene_graph(&self) -> bool {
        matches!(self, Self::CorruptSceneGraph { .. })
    }
}

#[cfg(feature = "assimp")]
impl From<asset_importer::Error> for Error {
    fn from(err: asset_importer::Error) -> Self {
        Self::import_failed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = Error::import_failed("Test import error");
        assert!(matches!(error, Error::ImportFailed { .. }));
        assert_eq!(error.to_string(), "Import failed: Test import error");
    }

    #[test]
    fn test_corrupt_scene_graph_message() {
        let error = Error::corrupt_scene_graph("node 3 references parent 7");
        assert!(error.is_corrupt_scene_graph());
        assert_eq!(
            error.to_string(),
            "Corrupt scene graph: node 3 references parent 7"
        );
    }

    #[test]
    fn test_other_errors_are_not_graph_corruption() {
        assert!(!Error::file_error("missing").is_corrupt_scene_graph());
        assert!(!Error::unsupported_format("xyz").is_corrupt_scene_graph());
    }
}
