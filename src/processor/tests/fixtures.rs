//! Shared helpers for building year-folder layouts in temporary directories

use polars::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create `base/<year>` and return its path
pub fn year_folder(base: &Path, year: &str) -> PathBuf {
    let folder = base.join(year);
    fs::create_dir_all(&folder).unwrap();
    folder
}

/// Write a monthly export with `rows` data rows; `amount` counts up from `first_amount`
pub fn write_month_file(folder: &Path, file_name: &str, rows: usize, first_amount: usize) {
    let mut content = String::from("store,amount\n");
    for i in 0..rows {
        content.push_str(&format!("store{},{}\n", i, first_amount + i));
    }
    fs::write(folder.join(file_name), content).unwrap();
}

/// Base directory with 2018 (3 files), 2017 (2 files) and 2016 (8 files), 10 rows each
pub fn create_standard_layout(temp_dir: &TempDir) -> PathBuf {
    let base = temp_dir.path().join("input");

    let y2018 = year_folder(&base, "2018");
    for month in ["January", "February", "March"] {
        write_month_file(&y2018, &format!("sales_{}.csv", month), 10, 0);
    }

    let y2017 = year_folder(&base, "2017");
    for month in ["April", "May"] {
        write_month_file(&y2017, &format!("sales_{}.csv", month), 10, 0);
    }

    let y2016 = year_folder(&base, "2016");
    for month in ["m01", "m02", "m03", "m04", "m05", "m06", "m07", "m08"] {
        write_month_file(&y2016, &format!("sales_{}.csv", month), 10, 0);
    }

    base
}

/// All values of the period column, in row order
pub fn periods(frame: &DataFrame) -> Vec<String> {
    frame
        .column("period")
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap().to_string())
        .collect()
}

/// Row count per year, derived from the period labels
pub fn rows_for_year(frame: &DataFrame, year: &str) -> usize {
    periods(frame)
        .iter()
        .filter(|p| p.ends_with(&format!(" {}", year)))
        .count()
}
