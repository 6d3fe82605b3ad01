use crate::domain::Strategy;
use thiserror::Error;

/// Unified error type for version-schema operations
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Invalid version \"{0}\" given")]
    VersionInvalid(String),

    #[error("Cannot advance \"{version}\" using \"{strategy}\" strategy, please use exact version")]
    CannotAdvance { version: String, strategy: Strategy },

    #[error("Version not found: {0}")]
    VersionNotFound(String),

    #[error("Unknown comparison operator: {0}")]
    UnknownOperator(String),

    #[error("Unknown advance strategy: {0}")]
    UnknownStrategy(String),

    #[error("Unable to read version metadata from file \"{path}\": {reason}")]
    Metadata { path: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in version-schema
pub type Result<T> = std::result::Result<T, VersionError>;

impl VersionError {
    /// Create an invalid version error for the given input
    pub fn invalid(input: impl Into<String>) -> Self {
        VersionError::VersionInvalid(input.into())
    }

    /// Create an error for advancing a version that does not exist
    pub fn cannot_advance(version: impl Into<String>, strategy: Strategy) -> Self {
        let version = version.into();
        let version = if version.is_empty() {
            "non-existing version".to_string()
        } else {
            version
        };

        VersionError::CannotAdvance { version, strategy }
    }

    /// Create a version-not-found error with context
    pub fn not_found(msg: impl Into<String>) -> Self {
        VersionError::VersionNotFound(msg.into())
    }

    /// Create a metadata error for the file at `path`
    pub fn metadata(path: impl Into<String>, reason: impl ToString) -> Self {
        VersionError::Metadata {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_version_display() {
        let err = VersionError::invalid("not-a-version");
        assert_eq!(err.to_string(), "Invalid version \"not-a-version\" given");
    }

    #[test]
    fn test_cannot_advance_empty_version() {
        let err = VersionError::cannot_advance("", Strategy::Minor);
        assert_eq!(
            err.to_string(),
            "Cannot advance \"non-existing version\" using \"minor\" strategy, please use exact version"
        );
    }

    #[test]
    fn test_cannot_advance_keeps_version() {
        let err = VersionError::cannot_advance("v1.0.0", Strategy::Build);
        assert!(err.to_string().contains("\"v1.0.0\""));
        assert!(err.to_string().contains("\"build\""));
    }

    #[test]
    fn test_metadata_error_display() {
        let err = VersionError::metadata("version.json", "missing field");
        assert_eq!(
            err.to_string(),
            "Unable to read version metadata from file \"version.json\": missing field"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: VersionError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (VersionError::config("x"), "Configuration error"),
            (VersionError::not_found("x"), "Version not found"),
            (VersionError::UnknownOperator("~".into()), "Unknown comparison operator"),
            (VersionError::UnknownStrategy("huge".into()), "Unknown advance strategy"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
