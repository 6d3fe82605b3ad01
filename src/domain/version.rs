use crate::domain::compare::{compare_versions, Operator};
use crate::domain::template::{SEMVER, TAG};
use crate::domain::Strategy;
use crate::error::{Result, VersionError};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// `["v"] MAJOR "." MINOR ["." PATCH] [separator PRERELEASE] ["." BUILD]`
static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^v?(?P<major>[0-9]+)\.(?P<minor>[0-9]+)(?:\.(?P<patch>[0-9]+))?(?:[+.\-]+(?P<pre>[a-z][a-z0-9]*))?(?:\.(?P<build>[0-9]+))?$",
    )
    .expect("version pattern is valid")
});

/// Rule deciding which versions count as pre-releases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreReleaseRule {
    /// Only an explicit pre-release tag or a positive build counter
    #[default]
    Explicit,
    /// As [`PreReleaseRule::Explicit`], and additionally any `0.x` version
    ZeroMajor,
}

/// Version with optional fields
///
/// Every field may be unset, which is different from zero: unset fields are
/// left out when formatting. The all-unset value (see [`Version::is_empty`])
/// stands for "no version yet".
///
/// `build` is a pre-release iteration counter (`rc.2`), not SemVer build
/// metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Version {
    pub major: Option<u64>,
    pub minor: Option<u64>,
    pub patch: Option<u64>,
    pub build: Option<u64>,
    pub pre_release: Option<String>,
}

impl Version {
    /// Create a release version with all three numbers set
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major: Some(major),
            minor: Some(minor),
            patch: Some(patch),
            ..Version::default()
        }
    }

    /// Parse a version string
    ///
    /// An empty string and the strategy keywords (`major`, `minor`, `patch`,
    /// `build`) produce the empty version, so a single argument can carry
    /// either an exact version or a strategy.
    ///
    /// # Example
    /// ```
    /// use version_schema::domain::Version;
    ///
    /// let v = Version::parse("v1.1.0-alpha.1").unwrap();
    /// assert_eq!(v.minor, Some(1));
    /// assert_eq!(v.pre_release.as_deref(), Some("alpha"));
    /// assert!(Version::parse("major").unwrap().is_empty());
    /// assert!(Version::parse("not-a-version").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() || Strategy::is_keyword(input) {
            return Ok(Version::default());
        }

        let captures = VERSION_PATTERN
            .captures(input)
            .ok_or_else(|| VersionError::invalid(input))?;

        let number = |name: &str| -> Result<Option<u64>> {
            captures
                .name(name)
                .map(|m| m.as_str().parse::<u64>())
                .transpose()
                .map_err(|_| VersionError::invalid(input))
        };

        Ok(Version {
            major: number("major")?,
            minor: number("minor")?,
            patch: number("patch")?,
            build: number("build")?,
            pre_release: captures.name("pre").map(|m| m.as_str().to_string()),
        })
    }

    /// Parse an optional input, `None` being the empty version
    pub fn from_optional(input: Option<&str>) -> Result<Self> {
        input.map_or_else(|| Ok(Version::default()), Version::parse)
    }

    /// Check whether every field is unset
    pub fn is_empty(&self) -> bool {
        self == &Version::default()
    }

    /// Check for a pre-release tag or a positive build counter
    pub fn is_pre_release(&self) -> bool {
        self.is_pre_release_by(PreReleaseRule::Explicit)
    }

    /// Check for pre-release status under the given rule
    pub fn is_pre_release_by(&self, rule: PreReleaseRule) -> bool {
        let explicit = self.pre_release.is_some() || self.build.is_some_and(|b| b > 0);

        match rule {
            PreReleaseRule::Explicit => explicit,
            PreReleaseRule::ZeroMajor => explicit || self.major == Some(0),
        }
    }

    /// Render the version through a template
    ///
    /// See [`crate::domain::template`] for the placeholders.
    ///
    /// # Example
    /// ```
    /// use version_schema::domain::{Version, DEV, SEMVER, TAG};
    ///
    /// let v = Version::parse("v1.0.14").unwrap();
    /// assert_eq!(v.format(TAG), "v1.0.14");
    /// assert_eq!(v.format(SEMVER), "1.0.14");
    /// assert_eq!(v.format(DEV), "v1.0.x");
    /// ```
    pub fn format(&self, template: &str) -> String {
        let number = |field: Option<u64>| field.map(|n| n.to_string()).unwrap_or_default();

        let mut output = String::with_capacity(template.len() + 16);
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                output.push(c);
                continue;
            }

            let replacement = match chars.peek() {
                Some('M') => number(self.major),
                Some('m') => number(self.minor),
                Some('p') => number(self.patch),
                Some('b') => number(self.build),
                Some('r') => self.pre_release.clone().unwrap_or_default(),
                _ => {
                    output.push(c);
                    continue;
                }
            };

            chars.next();
            output.push_str(&replacement);
        }

        output
            .replace("-.", ".")
            .trim_matches(|c| matches!(c, '+' | '.' | '-'))
            .to_string()
    }

    fn field(&self, strategy: Strategy) -> Option<u64> {
        match strategy {
            Strategy::Major => self.major,
            Strategy::Minor => self.minor,
            Strategy::Patch => self.patch,
            Strategy::Build => self.build,
        }
    }

    fn set_field(&mut self, strategy: Strategy, value: Option<u64>) {
        match strategy {
            Strategy::Major => self.major = value,
            Strategy::Minor => self.minor = value,
            Strategy::Patch => self.patch = value,
            Strategy::Build => self.build = value,
        }
    }

    /// Advance the field named by `strategy`
    ///
    /// Rules, in order:
    /// 1. without a `pre_release` label, any strategy but `Build` drops the
    ///    current pre-release tag and build counter
    /// 2. the target field is incremented (unset counts as zero)
    /// 3. lower fields are reset: `Major` zeroes minor, `Major`/`Minor` zero
    ///    patch, `Major`/`Minor`/`Patch` unset build
    /// 4. a `pre_release` label that differs from the current one, or meets an
    ///    unset build counter, starts a new pre-release at build 1
    /// 5. `explicit_value` overwrites the target field with its absolute value
    ///
    /// An empty `pre_release` label counts as no label.
    ///
    /// # Example
    /// ```
    /// use version_schema::domain::{Strategy, Version};
    ///
    /// let v = Version::parse("v1.0.14").unwrap();
    /// let next = v.advance(Strategy::Minor, Some("alpha"), None);
    /// assert_eq!(next.to_string(), "v1.1.0-alpha.1");
    ///
    /// let dev = v.advance(Strategy::Build, Some("dev"), Some(3));
    /// assert_eq!(dev.to_string(), "v1.0.14-dev.3");
    /// ```
    #[must_use]
    pub fn advance(
        &self,
        strategy: Strategy,
        pre_release: Option<&str>,
        explicit_value: Option<i64>,
    ) -> Version {
        let pre_release = pre_release.filter(|label| !label.is_empty());
        let mut next = self.clone();

        if pre_release.is_none() && strategy != Strategy::Build {
            next.pre_release = None;
            next.build = None;
        }

        let incremented = next.field(strategy).unwrap_or(0).saturating_add(1);
        next.set_field(strategy, Some(incremented));

        if strategy == Strategy::Major {
            next.minor = Some(0);
        }
        if matches!(strategy, Strategy::Major | Strategy::Minor) {
            next.patch = Some(0);
        }
        if matches!(strategy, Strategy::Major | Strategy::Minor | Strategy::Patch) {
            next.build = None;
        }

        if let Some(label) = pre_release {
            if next.pre_release.as_deref() != Some(label) || next.build.is_none() {
                next.pre_release = Some(label.to_string());
                next.build = Some(1);
            }
        }

        if let Some(value) = explicit_value {
            next.set_field(strategy, Some(value.unsigned_abs()));
        }

        next
    }

    /// Advance without a pre-release label or explicit value
    #[must_use]
    pub fn bump(&self, strategy: Strategy) -> Version {
        self.advance(strategy, None, None)
    }

    /// Like [`Version::advance`], but refuses to advance the empty version
    pub fn try_advance(
        &self,
        strategy: Strategy,
        pre_release: Option<&str>,
        explicit_value: Option<i64>,
    ) -> Result<Version> {
        if self.is_empty() {
            return Err(VersionError::cannot_advance("", strategy));
        }
        if let Some(label) = pre_release.filter(|label| !is_valid_label(label)) {
            return Err(VersionError::invalid(label));
        }

        Ok(self.advance(strategy, pre_release, explicit_value))
    }

    /// Three-way comparison of both versions in their [`SEMVER`] form
    pub fn compare(&self, other: &Version) -> Ordering {
        self.compare_str(&other.format(SEMVER))
    }

    /// Compare against a raw version string
    pub fn compare_str(&self, other: &str) -> Ordering {
        compare_versions(&self.format(SEMVER), other)
    }

    /// Apply a comparison operator, e.g. `a.compare_with(&b, Operator::Greater)`
    pub fn compare_with(&self, other: &Version, operator: Operator) -> bool {
        operator.apply(self.compare(other))
    }

    /// Convert into a strict SemVer 2.0 value
    ///
    /// Unset numbers become `0`; the pre-release tag and build counter become
    /// the dot-separated pre-release identifier (`alpha.1`).
    pub fn to_semver(&self) -> Result<semver::Version> {
        let mut identifiers = Vec::new();
        if let Some(label) = &self.pre_release {
            identifiers.push(label.clone());
        }
        if let Some(build) = self.build {
            identifiers.push(build.to_string());
        }

        let mut version = semver::Version::new(
            self.major.unwrap_or(0),
            self.minor.unwrap_or(0),
            self.patch.unwrap_or(0),
        );

        if !identifiers.is_empty() {
            version.pre = semver::Prerelease::new(&identifiers.join("."))
                .map_err(|_| VersionError::invalid(self.format(SEMVER)))?;
        }

        Ok(version)
    }
}

/// Labels that survive a format/parse round trip: `[a-zA-Z][a-zA-Z0-9]*`, or empty
fn is_valid_label(label: &str) -> bool {
    let mut chars = label.chars();
    match chars.next() {
        None => true,
        Some(first) => first.is_ascii_alphabetic() && chars.all(|c| c.is_ascii_alphanumeric()),
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(TAG))
    }
}
