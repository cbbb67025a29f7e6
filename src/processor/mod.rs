//! Integration driver.
//!
//! Runs the folder combiner over each configured year folder in order,
//! stacks the per-folder frames and writes the result as one CSV file.
//! Nothing is written until every folder has been combined, so a failure
//! anywhere leaves no output behind.

pub mod combiner;
pub mod discovery;
pub mod writer;

#[cfg(test)]
pub mod tests;

use self::{
    combiner::{FolderCombiner, concat_frames},
    writer::CsvOutputWriter,
};

use crate::config::IntegrationConfig;
use crate::error::Result;
use crate::models::{FolderStats, IntegrationStats};

use colored::*;
use polars::prelude::DataFrame;
use std::time::Instant;
use tracing::{debug, info};

/// Combines all configured year folders into a single CSV file
#[derive(Debug)]
pub struct IntegrationProcessor {
    config: IntegrationConfig,
    combiner: FolderCombiner,
    writer: CsvOutputWriter,
}

impl IntegrationProcessor {
    /// Create a processor for a validated configuration
    pub fn new(config: IntegrationConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            combiner: FolderCombiner::from_config(&config),
            writer: CsvOutputWriter::new(config.output_path.clone()),
            config,
        })
    }

    pub fn config(&self) -> &IntegrationConfig {
        &self.config
    }

    /// Combine every configured folder, in order, without writing anything
    pub fn integrate(&self) -> Result<(DataFrame, Vec<FolderStats>)> {
        let mut frames = Vec::with_capacity(self.config.folders.len());
        let mut folder_stats = Vec::with_capacity(self.config.folders.len());

        for folder in &self.config.folders {
            let folder_path = self.config.folder_path(folder);
            info!(
                "Combining folder {} (limit: {})",
                folder_path.display(),
                folder.limit
            );

            let (frame, stats) = self.combiner.combine(&folder_path, folder.limit)?;
            debug!(
                "Folder {} contributed {} rows from {} files",
                folder.name, stats.rows, stats.files_combined
            );

            frames.push(frame);
            folder_stats.push(stats);
        }

        Ok((concat_frames(frames)?, folder_stats))
    }

    /// Main processing entry point: combine all folders and write the output
    pub fn process(&self) -> Result<IntegrationStats> {
        let start_time = Instant::now();

        let (mut combined, folders) = self.integrate()?;
        let total_rows = self.writer.write(&mut combined)?;

        info!(
            "Wrote {} rows to {}",
            total_rows,
            self.writer.output_path().display()
        );

        Ok(IntegrationStats {
            folders,
            total_rows,
            output_path: self.writer.output_path().to_path_buf(),
            processing_time_ms: start_time.elapsed().as_millis(),
        })
    }
}

/// Print a coloured run summary to stdout
pub fn print_summary(stats: &IntegrationStats) {
    println!("\n{}", "Integration Summary".bright_green().bold());
    for folder in &stats.folders {
        let capped = if folder.capped {
            " (capped)".bright_yellow().to_string()
        } else {
            String::new()
        };
        println!(
            "  {} {} files, {} rows{}",
            format!("{}:", folder.folder).bright_cyan(),
            folder.files_combined.to_string().bright_white(),
            folder.rows.to_string().bright_white(),
            capped
        );
    }
    println!(
        "  {} {}",
        "Files combined:".bright_cyan(),
        stats.files_combined().to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Total rows:".bright_cyan(),
        stats.total_rows.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Output:".bright_cyan(),
        stats.output_path.display()
    );
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        stats.processing_time_ms.to_string().bright_white()
    );
}
