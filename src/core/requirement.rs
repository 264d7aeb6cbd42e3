//! Dependency requirements.

use std::fmt;
use std::str::FromStr;

use semver::Version;

use crate::errors::{Error, Result};

/// One dependency declaration: a name pinned to an exact version.
///
/// The textual form is `name/x.y.z`. Pins are exact, never ranges: the
/// resolver must fetch precisely this version or fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub name: String,
    pub version: Version,
}

impl Requirement {
    pub fn new(name: impl Into<String>, version: Version) -> Self {
        Requirement {
            name: name.into(),
            version,
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}

impl FromStr for Requirement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (name, version) = s.split_once('/').ok_or_else(|| Error::InvalidReference {
            reference: s.to_string(),
            source: None,
        })?;

        if name.is_empty() {
            return Err(Error::InvalidReference {
                reference: s.to_string(),
                source: None,
            });
        }

        let version = Version::parse(version).map_err(|e| Error::InvalidReference {
            reference: s.to_string(),
            source: Some(e),
        })?;

        Ok(Requirement {
            name: name.to_string(),
            version,
        })
    }
}
