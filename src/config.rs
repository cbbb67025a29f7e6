//! Configuration management and validation.
//!
//! Replaces fixed module-level paths with an explicit configuration passed
//! to the integration driver. The default configuration reproduces the
//! standard layout: `../input/{2018,2017,2016}` with the 2016 folder capped
//! at six files, written to `../input/Integrated_Data.csv`.

use crate::constants::{
    CAPPED_FOLDER, CAPPED_FOLDER_LIMIT, DEFAULT_BASE_DIR, DEFAULT_FOLDERS, default_output_path,
};
use crate::error::{IntegrationError, Result};
use crate::models::{EntryOrder, FileLimit, MonthToken};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// A year folder to combine, with its file limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderSpec {
    /// Folder name relative to the base directory; also the year in the period label
    pub name: String,
    pub limit: FileLimit,
}

impl FolderSpec {
    pub fn unlimited(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            limit: FileLimit::Unlimited,
        }
    }

    pub fn capped(name: impl Into<String>, max_files: usize) -> Self {
        Self {
            name: name.into(),
            limit: FileLimit::AtMost(max_files),
        }
    }
}

impl FromStr for FolderSpec {
    type Err = IntegrationError;

    /// Parse `NAME` or `NAME:LIMIT`
    fn from_str(s: &str) -> Result<Self> {
        let (name, limit) = match s.rsplit_once(':') {
            Some((name, limit)) => {
                let max = limit.trim().parse::<usize>().map_err(|e| {
                    IntegrationError::Configuration {
                        message: format!(
                            "Invalid file limit '{}' for folder '{}': {}",
                            limit, name, e
                        ),
                    }
                })?;
                (name, FileLimit::AtMost(max))
            }
            None => (s, FileLimit::Unlimited),
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(IntegrationError::Configuration {
                message: format!("Folder specification '{}' has an empty name", s),
            });
        }

        Ok(Self {
            name: name.to_string(),
            limit,
        })
    }
}

/// Main configuration for an integration run
#[derive(Debug, Clone)]
pub struct IntegrationConfig {
    /// Directory containing the year folders
    pub base_dir: PathBuf,

    /// Destination of the combined CSV
    pub output_path: PathBuf,

    /// Year folders in output order
    pub folders: Vec<FolderSpec>,

    /// Order in which files within a folder are visited
    pub entry_order: EntryOrder,

    /// How the month is taken from each file name
    pub month_token: MonthToken,

    /// Reject file names without an underscore instead of using the whole name
    pub strict_names: bool,

    /// Draw a progress bar per folder
    pub show_progress: bool,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        let base_dir = PathBuf::from(DEFAULT_BASE_DIR);
        let folders = DEFAULT_FOLDERS
            .iter()
            .map(|name| {
                if *name == CAPPED_FOLDER {
                    FolderSpec::capped(*name, CAPPED_FOLDER_LIMIT)
                } else {
                    FolderSpec::unlimited(*name)
                }
            })
            .collect();

        Self {
            output_path: default_output_path(&base_dir),
            base_dir,
            folders,
            entry_order: EntryOrder::default(),
            month_token: MonthToken::default(),
            strict_names: false,
            show_progress: false,
        }
    }
}

impl IntegrationConfig {
    /// Default layout rooted at `base_dir`, writing into it
    pub fn for_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        Self {
            output_path: default_output_path(&base_dir),
            base_dir,
            ..Default::default()
        }
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    pub fn with_folders(mut self, folders: Vec<FolderSpec>) -> Self {
        self.folders = folders;
        self
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

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Full path of a configured folder
    pub fn folder_path(&self, folder: &FolderSpec) -> PathBuf {
        self.base_dir.join(&folder.name)
    }

    /// Validate configuration before any file is read
    pub fn validate(&self) -> Result<()> {
        if self.folders.is_empty() {
            return Err(IntegrationError::Configuration {
                message: "At least one folder must be configured".to_string(),
            });
        }

        for folder in &self.folders {
            if folder.name.trim().is_empty() {
                return Err(IntegrationError::Configuration {
                    message: "Folder names must not be empty".to_string(),
                });
            }
            if Path::new(&folder.name).components().count() != 1 {
                return Err(IntegrationError::Configuration {
                    message: format!(
                        "Folder '{}' must be a single directory name under the base directory",
                        folder.name
                    ),
                });
            }
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(IntegrationError::Configuration {
                message: "Output path must not be empty".to_string(),
            });
        }

        debug!(
            "Configuration valid: {} folders under {}",
            self.folders.len(),
            self.base_dir.display()
        );
        Ok(())
    }
}
