//! Pure formatting functions for UI output.
//!
//! Results go to stdout so they can be captured by scripts; diagnostics,
//! warnings and errors go to stderr.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::cli::VersionReport;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
///
/// # Arguments
/// * `warning` - The boundary warning to display
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Print a bare result line, e.g. a resolved version, for scripts to capture.
pub fn display_result(value: &str) {
    println!("{}", value);
}

/// Render the fields of a parsed version as aligned `key: value` lines.
///
/// Unset fields are shown as `-`.
pub fn format_version_report(report: &VersionReport) -> String {
    let number = |field: Option<u64>| field.map_or_else(|| "-".to_string(), |n| n.to_string());
    let version = &report.version;

    let rows = [
        ("major", number(version.major)),
        ("minor", number(version.minor)),
        ("patch", number(version.patch)),
        ("pre-release", version.pre_release.clone().unwrap_or_else(|| "-".to_string())),
        ("build", number(version.build)),
        ("tag", report.tag.clone()),
        ("semver", report.semver.clone()),
        ("is pre-release", report.is_pre_release.to_string()),
    ];

    rows.iter()
        .map(|(key, value)| format!("{:<15}{}", format!("{}:", key), value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Display a parsed version report.
pub fn display_version_report(report: &VersionReport) {
    println!("{}", style(format_version_report(report)).bold());
}
