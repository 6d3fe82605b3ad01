//! Domain logic - pure version rules independent of git and I/O

pub mod compare;
pub mod strategy;
pub mod template;
pub mod version;

pub use compare::{compare_versions, ordering_to_int, Operator};
pub use strategy::Strategy;
pub use template::{Template, DEV, SEMVER, TAG};
pub use version::{PreReleaseRule, Version};
