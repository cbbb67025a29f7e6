//! CSV output for the integrated dataset
//!
//! Writes the final frame with a header row and no row-index column.

use crate::error::{IntegrationError, Result};

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writer for the combined CSV file
#[derive(Debug, Clone)]
pub struct CsvOutputWriter {
    output_path: PathBuf,
}

impl CsvOutputWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Write `frame` to the output path, returning the number of rows written
    pub fn write(&self, frame: &mut DataFrame) -> Result<usize> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file =
            File::create(&self.output_path).map_err(|e| IntegrationError::OutputWrite {
                path: self.output_path.clone(),
                reason: format!("Failed to create file: {}", e),
            })?;

        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(frame)
            .map_err(|e| IntegrationError::OutputWrite {
                path: self.output_path.clone(),
                reason: format!("Failed to write CSV: {}", e),
            })?;

        debug!(
            "Wrote {} rows x {} columns to {}",
            frame.height(),
            frame.width(),
            self.output_path.display()
        );

        Ok(frame.height())
    }
}
