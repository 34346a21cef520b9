//! Bump modes and how they advance a version.

use std::fmt;

use crate::error::VersionError;

use super::Version;

/// Type of version bump.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum BumpType {
    #[default]
    Patch,
    Minor,
    Major,
}

impl BumpType {
    /// Select the bump from CLI flags.
    ///
    /// `major` is checked first, then `minor`; with neither set the bump is a patch.
    pub fn from_flags(major: bool, minor: bool) -> Self {
        if major {
            BumpType::Major
        } else if minor {
            BumpType::Minor
        } else {
            BumpType::Patch
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BumpType::Patch => "patch",
            BumpType::Minor => "minor",
            BumpType::Major => "major",
        }
    }

    /// Capitalized name used in user-facing output ("Patch", "Minor", "Major").
    pub fn label(&self) -> &'static str {
        match self {
            BumpType::Patch => "Patch",
            BumpType::Minor => "Minor",
            BumpType::Major => "Major",
        }
    }
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Apply a bump to a version.
///
/// - Major: `a.b.c` -> `(a+1).0.0`
/// - Minor: `a.b.c` -> `a.(b+1).0`
/// - Patch: `a.b.c` -> `a.b.(c+1)`
pub fn apply_bump_to_version(version: &Version, bump: BumpType) -> Result<Version, VersionError> {
    let overflow = |component| VersionError::ComponentOverflow {
        value: version.to_string(),
        component,
    };

    let next = match bump {
        BumpType::Major => Version::new(
            version.major.checked_add(1).ok_or_else(|| overflow("major"))?,
            0,
            0,
        ),
        BumpType::Minor => Version::new(
            version.major,
            version.minor.checked_add(1).ok_or_else(|| overflow("minor"))?,
            0,
        ),
        BumpType::Patch => Version::new(
            version.major,
            version.minor,
            version.patch.checked_add(1).ok_or_else(|| overflow("patch"))?,
        ),
    };

    Ok(next)
}
