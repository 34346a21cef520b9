//! JSON manifest loading and saving.
//!
//! The document is kept as an ordered `serde_json` map so every field other
//! than `version` round-trips unchanged and in its original order.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ManifestError;
use crate::version::Version;

/// Default manifest file name, looked up in the working directory.
pub const DEFAULT_MANIFEST: &str = "package.json";

const VERSION_KEY: &str = "version";

/// A manifest document loaded from disk.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    document: Map<String, Value>,
}

impl Manifest {
    /// Read and parse the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let manifest = Self::from_str_at(path, &content)?;
        debug!(path = %path.display(), keys = manifest.document.len(), "loaded manifest");
        Ok(manifest)
    }

    /// Parse manifest text as if it had been read from `path`.
    pub fn from_str_at(path: &Path, content: &str) -> Result<Self, ManifestError> {
        let value: Value = serde_json::from_str(content).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        match value {
            Value::Object(document) => Ok(Self {
                path: path.to_path_buf(),
                document,
            }),
            _ => Err(ManifestError::NotAnObject {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The parsed `version` field.
    pub fn version(&self) -> Result<Version, ManifestError> {
        let raw = match self.document.get(VERSION_KEY) {
            Some(Value::String(s)) => s,
            Some(_) => {
                return Err(ManifestError::VersionNotString {
                    path: self.path.clone(),
                });
            }
            None => {
                return Err(ManifestError::MissingVersion {
                    path: self.path.clone(),
                });
            }
        };

        Version::parse(raw).map_err(|source| ManifestError::InvalidVersion {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the `version` field, keeping its position in the document.
    pub fn set_version(&mut self, version: &Version) {
        self.document
            .insert(VERSION_KEY.to_string(), Value::String(version.to_string()));
    }

    /// Render the document with 2-space indentation and a trailing newline.
    pub fn to_pretty_string(&self) -> Result<String, ManifestError> {
        let output =
            serde_json::to_string_pretty(&self.document).map_err(|source| {
                ManifestError::Serialize {
                    path: self.path.clone(),
                    source,
                }
            })?;

        // npm uses trailing newline
        Ok(format!("{}\n", output))
    }

    /// Overwrite the manifest in place.
    ///
    /// The existing file is truncated and rewritten, so its permissions are
    /// kept and a symlinked manifest updates the link target.
    pub fn save(&self) -> Result<(), ManifestError> {
        let content = self.to_pretty_string()?;

        std::fs::write(&self.path, &content).map_err(|source| ManifestError::Write {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), bytes = content.len(), "wrote manifest");
        Ok(())
    }
}
