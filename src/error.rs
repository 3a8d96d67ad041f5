//!
//! The deployment verifier error.
//!

use std::path::PathBuf;

///
/// The deployment verifier error.
///
#[derive(Debug)]
pub enum Error {
    /// The deployment directory cannot be listed.
    Listing {
        /// The network deployment directory.
        directory: PathBuf,
        /// The underlying I/O error.
        error: std::io::Error,
    },
    /// The file system error.
    FileSystem(std::io::Error),
    /// The deployment artifact is not valid JSON.
    Json(serde_json::Error),
    /// The double-encoded `metadata` field is not valid JSON.
    Metadata(serde_json::Error),
    /// The required artifact field is absent.
    MissingField(&'static str),
    /// The artifact field has an unexpected type.
    InvalidField {
        /// The field name.
        field: &'static str,
        /// The expected type description.
        expected: &'static str,
    },
    /// The `settings.compilationTarget` mapping is empty.
    EmptyCompilationTarget,
    /// The constructor arguments file cannot be written.
    ArgumentsFile {
        /// The arguments file path.
        path: PathBuf,
        /// The underlying I/O error.
        error: std::io::Error,
    },
    /// The verifier process cannot be launched.
    Spawn {
        /// The verifier executable.
        program: String,
        /// The underlying I/O error.
        error: std::io::Error,
    },
}

impl Error {
    ///
    /// A shortcut constructor.
    ///
    pub fn invalid_field(field: &'static str, expected: &'static str) -> Self {
        Self::InvalidField { field, expected }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Listing { error, .. } => Some(error),
            Self::FileSystem(error) => Some(error),
            Self::Json(error) => Some(error),
            Self::Metadata(error) => Some(error),
            Self::ArgumentsFile { error, .. } => Some(error),
            Self::Spawn { error, .. } => Some(error),
            Self::MissingField(_) | Self::InvalidField { .. } | Self::EmptyCompilationTarget => {
                None
            }
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Listing { directory, error } => {
                write!(f, "directory {:?} listing error: {}", directory, error)
            }
            Self::FileSystem(error) => write!(f, "{}", error),
            Self::Json(error) => write!(f, "artifact parsing error: {}", error),
            Self::Metadata(error) => write!(f, "metadata parsing error: {}", error),
            Self::MissingField(field) => write!(f, "field `{}` is missing", field),
            Self::InvalidField { field, expected } => {
                write!(f, "field `{}` must be {}", field, expected)
            }
            Self::EmptyCompilationTarget => {
                write!(f, "field `settings.compilationTarget` is empty")
            }
            Self::ArgumentsFile { path, error } => {
                write!(f, "file {:?} writing error: {}", path, error)
            }
            Self::Spawn { program, error } => {
                write!(f, "`{}` subprocess spawning error: {}", program, error)
            }
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::FileSystem(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}
