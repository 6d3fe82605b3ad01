//! Version output templates
//!
//! A template is a plain string with placeholders that [`crate::domain::Version::format`]
//! substitutes:
//!
//! - `%M` major, `%m` minor, `%p` patch
//! - `%r` pre-release tag, `%b` build counter
//!
//! Unset fields render as empty strings. After substitution every `-.` is
//! collapsed to `.` and leading/trailing `+`, `.`, `-` are trimmed, so the
//! templates below degrade cleanly when the pre-release part is missing.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Release tag, e.g. `v1.2.3` or `v1.2.3-rc.2`
pub const TAG: &str = "v%M.%m.%p-%r.%b";

/// Plain version without prefix, e.g. `1.2.3-rc.2`
pub const SEMVER: &str = "%M.%m.%p-%r.%b";

/// Development build, e.g. `v1.2.x-dev.5`. The patch slot is a literal `x`.
pub const DEV: &str = "v%M.%m.x-%r.%b";

/// Named or custom output template
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Template {
    #[default]
    Tag,
    SemVer,
    Dev,
    Custom(String),
}

impl Template {
    /// The template string placeholders are substituted into
    pub fn as_str(&self) -> &str {
        match self {
            Template::Tag => TAG,
            Template::SemVer => SEMVER,
            Template::Dev => DEV,
            Template::Custom(template) => template,
        }
    }
}

impl From<String> for Template {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "tag" => Template::Tag,
            "semver" => Template::SemVer,
            "dev" => Template::Dev,
            _ => Template::Custom(value),
        }
    }
}

impl From<Template> for String {
    fn from(value: Template) -> Self {
        match value {
            Template::Tag => "tag".to_string(),
            Template::SemVer => "semver".to_string(),
            Template::Dev => "dev".to_string(),
            Template::Custom(template) => template,
        }
    }
}

impl FromStr for Template {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Template::from(s.to_string()))
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_templates() {
        assert_eq!("tag".parse::<Template>().unwrap(), Template::Tag);
        assert_eq!("SemVer".parse::<Template>().unwrap(), Template::SemVer);
        assert_eq!("dev".parse::<Template>().unwrap(), Template::Dev);
    }

    #[test]
    fn test_custom_template_is_kept_verbatim() {
        let template: Template = "release-%M.%m".parse().unwrap();
        assert_eq!(template, Template::Custom("release-%M.%m".to_string()));
        assert_eq!(template.as_str(), "release-%M.%m");
    }

    #[test]
    fn test_template_strings() {
        assert_eq!(Template::Tag.as_str(), "v%M.%m.%p-%r.%b");
        assert_eq!(Template::SemVer.as_str(), "%M.%m.%p-%r.%b");
        assert_eq!(Template::Dev.as_str(), "v%M.%m.x-%r.%b");
    }

    #[test]
    fn test_template_default_is_tag() {
        assert_eq!(Template::default(), Template::Tag);
    }
}
