//! Error types for engine configuration, worker execution and output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all search and rendering operations
#[derive(Debug)]
pub enum QueensError {
    /// Board size or worker count out of range
    ///
    /// Raised before any task is dispatched, so no partial results exist.
    InvalidConfiguration {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The worker thread pool could not be started
    WorkerPool {
        /// Underlying pool construction error
        source: rayon::ThreadPoolBuildError,
    },

    /// A worker died mid-search, so the result collection is incomplete
    WorkerFailure {
        /// Panic message or other description of the failure
        reason: String,
    },

    /// A placement has two queens attacking each other
    InvalidPlacement {
        /// Rows of the rejected placement, by column
        placement: Vec<usize>,
        /// Conflicting columns (earlier, later)
        columns: (usize, usize),
    },

    /// Failed to save a rendered board to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system or terminal I/O failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for QueensError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration {
                parameter,
                value,
                reason,
            } => {
                write!(
                    f,
                    "Invalid configuration '{parameter}' = '{value}': {reason}"
                )
            }
            Self::WorkerPool { source } => {
                write!(f, "Failed to start worker pool: {source}")
            }
            Self::WorkerFailure { reason } => {
                write!(f, "Worker failed, search aborted: {reason}")
            }
            Self::InvalidPlacement { placement, columns } => {
                write!(
                    f,
                    "Invalid placement {placement:?}: columns {} and {} conflict",
                    columns.0, columns.1
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for QueensError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::WorkerPool { source } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for search results
pub type Result<T> = std::result::Result<T, QueensError>;

impl From<std::io::Error> for QueensError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<terminal>"),
            operation: "terminal I/O",
            source: err,
        }
    }
}

impl From<rayon::ThreadPoolBuildError> for QueensError {
    fn from(source: rayon::ThreadPoolBuildError) -> Self {
        Self::WorkerPool { source }
    }
}

/// Create an invalid configuration error
pub fn invalid_configuration(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> QueensError {
    QueensError::InvalidConfiguration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

impl QueensError {
    /// Whether this error was raised before any work was dispatched
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }
}
