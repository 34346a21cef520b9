//! The read, bump, write pipeline over a single manifest.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ManifestError;
use crate::manifest::{DEFAULT_MANIFEST, Manifest};
use crate::version::{BumpType, Version, apply_bump_to_version};

/// Configuration for a bump run, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct BumpConfig {
    pub manifest: PathBuf,
    pub bump: BumpType,
    pub dry_run: bool,
}

impl Default for BumpConfig {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            bump: BumpType::default(),
            dry_run: false,
        }
    }
}

/// Result of a successful bump run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    pub manifest: PathBuf,
    pub bump: BumpType,
    pub previous: Version,
    pub current: Version,
    /// `false` for dry runs.
    pub written: bool,
}

impl BumpOutcome {
    /// One-line confirmation for the terminal.
    pub fn summary(&self) -> String {
        if self.written {
            format!("{} version bumped to {}", self.bump, self.current)
        } else {
            format!(
                "{} version would be bumped {} -> {} (dry run, manifest not written)",
                self.bump, self.previous, self.current
            )
        }
    }
}

/// Bump the version in the manifest at `path` and write it back.
///
/// Returns the new version. Load, version and bump errors leave the manifest untouched.
pub fn bump(path: &Path, bump: BumpType) -> Result<Version, ManifestError> {
    let config = BumpConfig {
        manifest: path.to_path_buf(),
        bump,
        dry_run: false,
    };

    run_bump(&config).map(|outcome| outcome.current)
}

/// Run a bump as described by `config`.
pub fn run_bump(config: &BumpConfig) -> Result<BumpOutcome, ManifestError> {
    let mut manifest = Manifest::load(&config.manifest)?;
    let previous = manifest.version()?;

    let current =
        apply_bump_to_version(&previous, config.bump).map_err(|source| {
            ManifestError::InvalidVersion {
                path: config.manifest.clone(),
                source,
            }
        })?;

    debug!(
        bump = config.bump.as_str(),
        %previous,
        %current,
        "computed next version"
    );

    manifest.set_version(&current);

    if config.dry_run {
        debug!(path = %manifest.path().display(), "dry run, skipping write");
    } else {
        manifest.save()?;
    }

    Ok(BumpOutcome {
        manifest: config.manifest.clone(),
        bump: config.bump,
        previous,
        current,
        written: !config.dry_run,
    })
}
