//! Error types for pkgbump modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from parsing or bumping a version string.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VersionError {
    #[error("Version '{value}' must have exactly three components (MAJOR.MINOR.PATCH), found {found}")]
    WrongComponentCount { value: String, found: usize },

    #[error("Version '{value}' has a non-numeric {component} component '{part}'")]
    InvalidComponent {
        value: String,
        component: &'static str,
        part: String,
    },

    #[error("Bumping the {component} component of '{value}' would overflow")]
    ComponentOverflow {
        value: String,
        component: &'static str,
    },
}

/// Broad classification of a [`ManifestError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The manifest could not be read, rendered or written.
    Io,
    /// The manifest is not valid JSON.
    Parse,
    /// The manifest is valid JSON but its shape or `version` is wrong.
    Schema,
}

/// Errors from manifest load, bump and save.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Manifest {} must be a JSON object at the top level", path.display())]
    NotAnObject { path: PathBuf },

    #[error("Manifest {} has no \"version\" field", path.display())]
    MissingVersion { path: PathBuf },

    #[error("The \"version\" field in {} must be a string", path.display())]
    VersionNotString { path: PathBuf },

    #[error("Invalid version in {}", path.display())]
    InvalidVersion {
        path: PathBuf,
        #[source]
        source: VersionError,
    },

    #[error("Failed to serialize {}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ManifestError {
    /// Classify the error as an I/O, parse or schema failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ManifestError::Read { .. }
            | ManifestError::Write { .. }
            | ManifestError::Serialize { .. } => ErrorKind::Io,
            ManifestError::Parse { .. } => ErrorKind::Parse,
            ManifestError::NotAnObject { .. }
            | ManifestError::MissingVersion { .. }
            | ManifestError::VersionNotString { .. }
            | ManifestError::InvalidVersion { .. } => ErrorKind::Schema,
        }
    }
}
