//! Period Integrator Library
//!
//! Combines monthly CSV exports, grouped into year-named folders, into a
//! single dataset. Every row is tagged with a `period` column built from the
//! month token of its file name and the year of its folder, and the combined
//! table is written to one CSV file.
//!
//! This library provides tools for:
//! - Discovering the CSV files of a year folder in a deterministic order
//! - Reading and tagging each file with its period label
//! - Stacking files and folders with a union of their columns
//! - Capping the number of files taken from a folder
//! - Writing the integrated table as CSV without an index column

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod processor;

pub use config::{FolderSpec, IntegrationConfig};
pub use error::{IntegrationError, Result};
pub use models::{EntryOrder, FileLimit, FolderStats, IntegrationStats, MonthToken, Period};
pub use processor::IntegrationProcessor;
pub use processor::combiner::combine_files_in_folder;
