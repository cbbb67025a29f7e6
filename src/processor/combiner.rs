//! Folder combining for monthly CSV exports
//!
//! Reads every CSV file of one year folder, tags each row with the period
//! derived from the file name and folder name, and stacks the results into a
//! single frame. Files are visited strictly one after another; the folder
//! limit stops the pass once exceeded.

use crate::config::IntegrationConfig;
use crate::constants::PERIOD_COLUMN;
use crate::error::{IntegrationError, Result};
use crate::models::{EntryOrder, FileLimit, FolderStats, MonthToken, Period, has_month_token};
use crate::processor::discovery::discover_csv_files;

use indicatif::{ProgressBar, ProgressStyle};
use polars::prelude::*;
use std::path::Path;
use tracing::{debug, info, warn};

/// Combine all CSV files in `folder_path` using the default naming rules.
///
/// Files are visited in sorted name order and the month token is kept raw
/// (`"sales_January.csv"` in `2018` gives `"January.csv 2018"`).
pub fn combine_files_in_folder(folder_path: &Path, max_files: FileLimit) -> Result<DataFrame> {
    let (frame, _) = FolderCombiner::default().combine(folder_path, max_files)?;
    Ok(frame)
}

/// Combines the CSV files of a single folder
#[derive(Debug, Clone, Default)]
pub struct FolderCombiner {
    entry_order: EntryOrder,
    month_token: MonthToken,
    strict_names: bool,
    show_progress: bool,
}

impl FolderCombiner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Combiner honouring the naming and ordering rules of `config`
    pub fn from_config(config: &IntegrationConfig) -> Self {
        Self {
            entry_order: config.entry_order,
            month_token: config.month_token,
            strict_names: config.strict_names,
            show_progress: config.show_progress,
        }
    }

    pub fn with_entry_order(mut self, entry_order: EntryOrder) -> Self {
        self.entry_order = entry_order;
        self
    }

    pub fn with_month_token(mut self, month_token: MonthToken) -> Self {
        self.month_token = month_token;
        self
    }

    pub fn with_strict_names(mut self, strict_names: bool) -> Self {
        self.strict_names = strict_names;
        self
    }

    /// Combine the folder, returning the stacked frame and what went into it
    pub fn combine(
        &self,
        folder_path: &Path,
        limit: FileLimit,
    ) -> Result<(DataFrame, FolderStats)> {
        let year = folder_name(folder_path);
        let files = discover_csv_files(folder_path, self.entry_order)?;

        let planned = match limit {
            FileLimit::Unlimited => files.len(),
            FileLimit::AtMost(max) => max.min(files.len()),
        };
        let pb = self.progress_bar(planned as u64, &year);

        let mut stats = FolderStats {
            folder: year.clone(),
            ..Default::default()
        };
        let mut frames = Vec::with_capacity(planned);
        let mut file_count = 0usize;

        for file_path in &files {
            file_count += 1;
            if !limit.allows(file_count) {
                debug!(
                    "File limit ({}) reached in {}, skipping remaining files",
                    limit,
                    folder_path.display()
                );
                stats.capped = true;
                break;
            }

            let file_name = file_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            pb.set_message(file_name.clone());

            let period = self.period_for(&file_name, &year)?;
            let mut frame = read_csv_file(file_path)?;
            tag_period(&mut frame, &period)?;

            info!(
                "Entries from {}: {} rows, period '{}'",
                file_name,
                frame.height(),
                period
            );

            stats.files_combined += 1;
            stats.rows += frame.height();
            frames.push(frame);

            info!("Total files combined: {}", stats.files_combined);
            pb.inc(1);
        }

        pb.finish_and_clear();

        let combined = concat_frames(frames)?;
        debug!(
            "Combined {} files from {} into {}x{} frame",
            stats.files_combined,
            folder_path.display(),
            combined.height(),
            combined.width()
        );

        Ok((combined, stats))
    }

    fn period_for(&self, file_name: &str, year: &str) -> Result<Period> {
        if !has_month_token(file_name) {
            if self.strict_names {
                return Err(IntegrationError::MissingMonthToken {
                    file: file_name.to_string(),
                });
            }
            warn!(
                "No '_' in file name {}, using the whole name as month",
                file_name
            );
        }
        Ok(Period::from_file_name(file_name, year, self.month_token))
    }

    fn progress_bar(&self, len: u64, year: &str) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} {prefix} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb.set_prefix(year.to_string());
        pb
    }
}

/// Base name of a folder, used as the year of its period labels
fn folder_name(folder_path: &Path) -> String {
    folder_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Read one CSV file with a header row, inferring the schema from all rows
pub fn read_csv_file(file_path: &Path) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .try_into_reader_with_file_path(Some(file_path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(|source| IntegrationError::CsvParse {
            path: file_path.to_path_buf(),
            source,
        })
}

/// Set the period column on every row, replacing any existing one
pub fn tag_period(frame: &mut DataFrame, period: &Period) -> Result<()> {
    let label = period.label();
    let column =
        StringChunked::full(PERIOD_COLUMN.into(), label.as_str(), frame.height()).into_series();
    frame.with_column(column)?;
    Ok(())
}

/// Stack frames in order, filling columns missing from some frames with nulls
pub(crate) fn concat_frames(frames: Vec<DataFrame>) -> Result<DataFrame> {
    let mut frames: Vec<DataFrame> = frames.into_iter().filter(|f| f.width() > 0).collect();
    if frames.len() <= 1 {
        return Ok(frames.pop().unwrap_or_else(DataFrame::empty));
    }

    let lazy_frames: Vec<LazyFrame> = frames.into_iter().map(|f| f.lazy()).collect();
    let combined = concat_lf_diagonal(
        lazy_frames,
        UnionArgs {
            rechunk: true,
            to_supertypes: true,
            ..Default::default()
        },
    )?
    .collect()?;

    Ok(combined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn period_values(frame: &DataFrame) -> Vec<String> {
        frame
            .column(PERIOD_COLUMN)
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .map(|v| v.unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_read_csv_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sales_January.csv");
        fs::write(&path, "store,amount\nnorth,10\nsouth,20\n").unwrap();

        let frame = read_csv_file(&path).unwrap();

        assert_eq!(frame.height(), 2);
        assert_eq!(frame.get_column_names_str(), vec!["store", "amount"]);
    }

    #[test]
    fn test_read_missing_csv_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing_May.csv");

        match read_csv_file(&path) {
            Err(IntegrationError::CsvParse { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("Expected CsvParse error, got {:?}", other),
        }
    }

    #[test]
    fn test_tag_period_sets_every_row() {
        let mut frame = df!("amount" => [1i64, 2, 3]).unwrap();

        tag_period(&mut frame, &Period::new("March.csv", "2017")).unwrap();

        assert_eq!(frame.width(), 2);
        assert_eq!(period_values(&frame), vec!["March.csv 2017"; 3]);
    }

    #[test]
    fn test_tag_period_replaces_existing_column() {
        let mut frame = df!(
            "amount" => [1i64, 2],
            "period" => ["old", "old"]
        )
        .unwrap();

        tag_period(&mut frame, &Period::new("June", "2016")).unwrap();

        assert_eq!(frame.width(), 2);
        assert_eq!(period_values(&frame), vec!["June 2016"; 2]);
    }

    #[test]
    fn test_concat_frames_unions_columns() {
        let first = df!("a" => [1i64, 2]).unwrap();
        let second = df!("a" => [3i64], "b" => ["x"]).unwrap();

        let combined = concat_frames(vec![first, second]).unwrap();

        assert_eq!(combined.height(), 3);
        assert_eq!(combined.get_column_names_str(), vec!["a", "b"]);
        assert_eq!(combined.column("b").unwrap().null_count(), 2);
    }

    #[test]
    fn test_concat_frames_empty_input() {
        let combined = concat_frames(Vec::new()).unwrap();
        assert_eq!(combined.height(), 0);
        assert_eq!(combined.width(), 0);
    }

    #[test]
    fn test_concat_frames_skips_zero_width_frames() {
        let first = DataFrame::empty();
        let second = df!("a" => [1i64, 2]).unwrap();

        let combined = concat_frames(vec![first, second]).unwrap();

        assert_eq!(combined.height(), 2);
        assert_eq!(combined.width(), 1);
    }

    #[test]
    fn test_strict_names_rejects_missing_underscore() {
        let temp_dir = TempDir::new().unwrap();
        let folder = temp_dir.path().join("2018");
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join("January.csv"), "amount\n1\n").unwrap();

        let result = FolderCombiner::new()
            .with_strict_names(true)
            .combine(&folder, FileLimit::Unlimited);

        match result {
            Err(IntegrationError::MissingMonthToken { file }) => assert_eq!(file, "January.csv"),
            other => panic!("Expected MissingMonthToken error, got {:?}", other),
        }
    }

    #[test]
    fn test_lenient_names_use_whole_file_name() {
        let temp_dir = TempDir::new().unwrap();
        let folder = temp_dir.path().join("2018");
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join("January.csv"), "amount\n1\n2\n").unwrap();

        let frame = combine_files_in_folder(&folder, FileLimit::Unlimited).unwrap();

        assert_eq!(period_values(&frame), vec!["January.csv 2018"; 2]);
    }
}
