//! File discovery for year folders
//!
//! Lists the monthly CSV exports directly inside a folder. Subdirectories
//! are not descended into; any entry whose name ends in `.csv` counts.

use crate::constants::is_csv_name;
use crate::error::{IntegrationError, Result};
use crate::models::EntryOrder;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Discover the CSV entries of `folder` in the requested order
pub fn discover_csv_files(folder: &Path, order: EntryOrder) -> Result<Vec<PathBuf>> {
    if !folder.exists() {
        return Err(IntegrationError::FolderNotFound {
            path: folder.to_path_buf(),
        });
    }

    let unreadable = |source| IntegrationError::FolderUnreadable {
        path: folder.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(folder).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let name = entry.file_name();
        if is_csv_name(&name.to_string_lossy()) {
            files.push(entry.path());
        }
    }

    if order == EntryOrder::Sorted {
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }

    debug!(
        "Found {} CSV files in {} ({:?} order)",
        files.len(),
        folder.display(),
        order
    );

    Ok(files)
}
