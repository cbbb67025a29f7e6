//! Core data structures for period integration.
//!
//! Defines the period label derived per source file, the per-folder file
//! limit, and the statistics reported after a run.

use crate::constants::{CSV_SUFFIX, MONTH_SEPARATOR};
use std::fmt;
use std::path::PathBuf;

/// Upper bound on the number of CSV files combined from one folder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileLimit {
    /// Combine every CSV file in the folder
    #[default]
    Unlimited,
    /// Combine at most this many CSV files
    AtMost(usize),
}

impl FileLimit {
    /// Whether the `count`-th CSV file (1-based) may still be combined
    pub fn allows(&self, count: usize) -> bool {
        match self {
            FileLimit::Unlimited => true,
            FileLimit::AtMost(max) => count <= *max,
        }
    }
}

impl fmt::Display for FileLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileLimit::Unlimited => write!(f, "unlimited"),
            FileLimit::AtMost(max) => write!(f, "at most {}", max),
        }
    }
}

/// How the month token is taken from a file name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthToken {
    /// Everything after the last underscore, extension included ("January.csv")
    #[default]
    Raw,
    /// As `Raw`, with a trailing ".csv" removed ("January")
    Stem,
}

/// Order in which folder entries are visited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryOrder {
    /// Sorted by file name, stable across platforms and runs
    #[default]
    Sorted,
    /// Whatever order the filesystem returns from a directory listing
    Filesystem,
}

/// Period label attached to every row of a source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    month: String,
    year: String,
}

impl Period {
    pub fn new(month: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            year: year.into(),
        }
    }

    /// Derive the period for `file_name` found in the folder named `year`.
    ///
    /// A file name without an underscore yields the whole name as the month.
    pub fn from_file_name(file_name: &str, year: &str, token: MonthToken) -> Self {
        let raw = month_token(file_name);
        let month = match token {
            MonthToken::Raw => raw,
            MonthToken::Stem => raw.strip_suffix(CSV_SUFFIX).unwrap_or(raw),
        };
        Self::new(month, year)
    }

    pub fn month(&self) -> &str {
        &self.month
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    /// The "<month> <year>" label stored in the period column
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}

/// Substring after the last underscore, or the whole name if there is none
pub fn month_token(file_name: &str) -> &str {
    file_name
        .rsplit(MONTH_SEPARATOR)
        .next()
        .unwrap_or(file_name)
}

/// Whether a file name carries a month separator at all
pub fn has_month_token(file_name: &str) -> bool {
    file_name.contains(MONTH_SEPARATOR)
}

/// Per-folder outcome of a combine pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderStats {
    pub folder: String,
    pub files_combined: usize,
    pub rows: usize,
    /// Set when CSV files were left out because of the folder limit
    pub capped: bool,
}

/// Summary of a complete integration run
#[derive(Debug, Clone)]
pub struct IntegrationStats {
    pub folders: Vec<FolderStats>,
    pub total_rows: usize,
    pub output_path: PathBuf,
    pub processing_time_ms: u128,
}

impl IntegrationStats {
    pub fn files_combined(&self) -> usize {
        self.folders.iter().map(|f| f.files_combined).sum()
    }
}
