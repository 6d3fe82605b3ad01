pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod metadata;
pub mod ui;

pub use domain::{Strategy, Template, Version, DEV, SEMVER, TAG};
pub use error::{Result, VersionError};
pub use metadata::{resolve_from_metadata, RepositoryMetadata};
