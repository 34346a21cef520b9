//! The three-component `MAJOR.MINOR.PATCH` version number.

use std::fmt;
use std::str::FromStr;

use crate::error::VersionError;

const COMPONENT_NAMES: [&str; 3] = ["major", "minor", "patch"];

/// A plain `MAJOR.MINOR.PATCH` version without pre-release or build tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a dot-joined version string.
    ///
    /// Each component must be a non-empty run of ASCII digits. Leading zeros
    /// are accepted and dropped, so `"01.2.3"` parses as `1.2.3`.
    pub fn parse(value: &str) -> Result<Self, VersionError> {
        let parts: Vec<&str> = value.split('.').collect();
        if parts.len() != 3 {
            return Err(VersionError::WrongComponentCount {
                value: value.to_string(),
                found: parts.len(),
            });
        }

        let mut components = [0u64; 3];
        for (slot, (part, name)) in components
            .iter_mut()
            .zip(parts.iter().zip(COMPONENT_NAMES))
        {
            *slot = parse_component(value, part, name)?;
        }

        let [major, minor, patch] = components;
        Ok(Self::new(major, minor, patch))
    }
}

fn parse_component(value: &str, part: &str, component: &'static str) -> Result<u64, VersionError> {
    let invalid = || VersionError::InvalidComponent {
        value: value.to_string(),
        component,
        part: part.to_string(),
    };

    // u64::from_str accepts a leading '+', which is not a bare numeral
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    part.parse::<u64>().map_err(|_| invalid())
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
