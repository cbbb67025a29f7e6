//! Command-line interface components.

use crate::config::{FolderSpec, IntegrationConfig};
use crate::constants::DEFAULT_BASE_DIR;
use crate::models::{EntryOrder, MonthToken};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "period_integrator")]
#[command(about = "Combine year-grouped monthly CSV files into one period-tagged CSV")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Directory containing the year folders
    #[arg(short, long, default_value = DEFAULT_BASE_DIR)]
    pub base_dir: PathBuf,

    /// Output CSV file (defaults to <BASE_DIR>/Integrated_Data.csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Year folder to combine, optionally capped as NAME:LIMIT (repeatable, in output order)
    #[arg(short, long = "folder", value_name = "NAME[:LIMIT]")]
    pub folders: Vec<FolderSpec>,

    /// Visit files in directory listing order instead of sorted by name
    #[arg(long)]
    pub filesystem_order: bool,

    /// Fail on file names without an underscore instead of using the whole name as month
    #[arg(long)]
    pub strict_names: bool,

    /// Drop the trailing ".csv" from the month token
    #[arg(long)]
    pub strip_extension: bool,

    /// Enable verbose logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors, no progress bars
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Build the run configuration; unset options keep the standard layout
    pub fn to_config(&self) -> IntegrationConfig {
        let mut config = IntegrationConfig::for_base_dir(&self.base_dir)
            .with_entry_order(if self.filesystem_order {
                EntryOrder::Filesystem
            } else {
                EntryOrder::Sorted
            })
            .with_month_token(if self.strip_extension {
                MonthToken::Stem
            } else {
                MonthToken::Raw
            })
            .with_strict_names(self.strict_names)
            .with_progress(!self.quiet);

        if let Some(output) = &self.output {
            config = config.with_output_path(output);
        }
        if !self.folders.is_empty() {
            config = config.with_folders(self.folders.clone());
        }

        config
    }

    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

/// Set up structured logging to stderr; `RUST_LOG` overrides the CLI level
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("period_integrator={}", args.log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
