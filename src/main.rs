use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use version_schema::cli::{self, BumpArgs, CollectArgs};
use version_schema::config::{self, Config};
use version_schema::domain::{Operator, Strategy, Template};
use version_schema::ui;
use version_schema::VersionError;

#[derive(Parser)]
#[command(
    name = "version-schema",
    version,
    about = "Parse, bump, compare and resolve build versions"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Print debug diagnostics to stderr")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the fields of a version
    Parse {
        version: String,
    },

    /// Advance a version by major, minor, patch or build
    Bump {
        version: String,

        strategy: Strategy,

        #[arg(long = "pre", help = "Pre-release label to start or continue, e.g. alpha")]
        pre_release: Option<String>,

        #[arg(
            long,
            allow_negative_numbers = true,
            help = "Exact value for the advanced field"
        )]
        value: Option<i64>,

        #[arg(
            short,
            long,
            default_value = "tag",
            help = "Output template: tag, semver, dev or a custom template"
        )]
        format: Template,
    },

    /// Compare two versions, printing -1, 0 or 1
    Compare {
        left: String,

        right: String,

        #[arg(long, help = "Comparison operator, printing true or false instead")]
        op: Option<Operator>,
    },

    /// Resolve the version to report from a metadata file
    Resolve {
        #[arg(short, long, help = "Metadata file [default: from config]")]
        metadata: Option<PathBuf>,

        #[arg(short, long, help = "Template for a clean tag [default: from config]")]
        format: Option<Template>,

        #[arg(short, long, help = "Suppress warnings")]
        quiet: bool,
    },

    /// Collect metadata from a git checkout
    Collect {
        #[arg(short, long, default_value = ".", help = "Directory inside the repository")]
        path: PathBuf,

        #[arg(short, long, help = "Write metadata to this file instead of printing it")]
        output: Option<PathBuf>,

        #[arg(short, long, help = "Overwrite the output file without asking")]
        force: bool,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("version_schema=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())?;

    match args.command {
        Command::Parse { version } => {
            let rule = config.behavior.pre_release_rule();
            let report = cli::parse_version(&version, rule)?;
            ui::display_version_report(&report);
        }
        Command::Bump {
            version,
            strategy,
            pre_release,
            value,
            format,
        } => {
            let bumped = cli::bump_version(&BumpArgs {
                version,
                strategy,
                pre_release,
                value,
                format,
            })?;
            ui::display_result(&bumped);
        }
        Command::Compare { left, right, op } => {
            ui::display_result(&cli::compare_versions(&left, &right, op)?);
        }
        Command::Resolve {
            metadata,
            format,
            quiet,
        } => resolve(&config, metadata, format, quiet, args.verbose)?,
        Command::Collect {
            path,
            output,
            force,
        } => {
            if let Some(output) = &output {
                if output.exists()
                    && !force
                    && !ui::confirm_action(&format!("Overwrite {}?", output.display()))?
                {
                    ui::display_status("Collection cancelled by user.");
                    return Ok(());
                }
            }

            let metadata = cli::collect(&CollectArgs {
                path,
                output: output.clone(),
            })?;

            match output {
                Some(output) => {
                    ui::display_success(&format!("Wrote metadata to {}", output.display()))
                }
                None => ui::display_result(&serde_json::to_string_pretty(&metadata)?),
            }
        }
    }

    Ok(())
}

fn resolve(
    config: &Config,
    metadata: Option<PathBuf>,
    format: Option<Template>,
    quiet: bool,
    verbose: bool,
) -> Result<()> {
    let metadata = metadata.unwrap_or_else(|| config.resolve.metadata_file.clone());
    let format = format.unwrap_or_else(|| config.resolve.format.clone());

    let resolution = cli::resolve_version(&metadata, &format)?;

    if !quiet {
        for warning in &resolution.warnings {
            if verbose || !warning.is_expected() {
                ui::display_boundary_warning(warning);
            }
        }
    }

    match resolution.version {
        Some(version) => {
            ui::display_result(&version);
            Ok(())
        }
        None => Err(VersionError::not_found(format!(
            "nothing to report from {}",
            metadata.display()
        ))
        .into()),
    }
}
