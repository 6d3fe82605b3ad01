//! Terminal output and prompts
//!
//! - `formatter` renders reports, results and warnings
//! - this module asks the user before destructive actions (overwriting a
//!   metadata file)

use std::io::{self, Write};

use anyhow::Result;

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_error, display_result, display_status, display_success,
    display_version_report, format_version_report,
};

/// Ask a yes/no question on stderr, defaulting to no
///
/// stdout stays reserved for command results, so the prompt never ends up
/// in redirected output.
///
/// # Returns
/// * `Ok(true)` - The answer was `y` or `yes` in any case
/// * `Ok(false)` - Anything else, including an empty line
/// * `Err` - Reading stdin failed
pub fn confirm_action(prompt: &str) -> Result<bool> {
    eprint!("\n{} (y/N): ", prompt);
    io::stderr().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(is_confirmation(&input))
}

fn is_confirmation(input: &str) -> bool {
    let response = input.trim().to_lowercase();
    response == "y" || response == "yes"
}
