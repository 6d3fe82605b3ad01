//! Command-line workflows, decoupled from argument parsing

pub mod commands;

pub use commands::{
    bump_version, collect, compare_versions, parse_version, resolve_version, BumpArgs,
    CollectArgs, VersionReport,
};
