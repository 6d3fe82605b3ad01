use crate::error::{Result, VersionError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which version field an advance targets
///
/// Variants are ordered by rank: advancing a field resets every lower ranked
/// field except `Build`, which never cascades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Major,
    Minor,
    Patch,
    Build,
}

impl Strategy {
    /// All strategies, highest rank first
    pub const ALL: [Strategy; 4] = [
        Strategy::Major,
        Strategy::Minor,
        Strategy::Patch,
        Strategy::Build,
    ];

    /// Keyword used for this strategy on the command line and in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Major => "major",
            Strategy::Minor => "minor",
            Strategy::Patch => "patch",
            Strategy::Build => "build",
        }
    }

    /// Check whether `input` is exactly one of the strategy keywords
    pub fn is_keyword(input: &str) -> bool {
        Strategy::ALL.iter().any(|s| s.as_str() == input)
    }
}

impl FromStr for Strategy {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| VersionError::UnknownStrategy(s.to_string()))
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
