//! Constants used throughout the period integrator.
//!
//! Default locations, the default folder layout and naming rules for the
//! monthly export files.

/// Default base directory holding the year folders
pub const DEFAULT_BASE_DIR: &str = "../input";

/// Name of the integrated output file, written inside the base directory by default
pub const OUTPUT_FILENAME: &str = "Integrated_Data.csv";

/// Year folders processed by default, in output order
pub const DEFAULT_FOLDERS: &[&str] = &["2018", "2017", "2016"];

/// Folder whose file count is capped in the default layout
pub const CAPPED_FOLDER: &str = "2016";

/// Number of files combined from the capped folder
pub const CAPPED_FOLDER_LIMIT: usize = 6;

/// Suffix an entry name must carry to be combined (case-sensitive)
pub const CSV_SUFFIX: &str = ".csv";

/// Separator between the file prefix and the month token
pub const MONTH_SEPARATOR: char = '_';

/// Name of the derived column appended to every row
pub const PERIOD_COLUMN: &str = "period";

/// Check whether an entry name qualifies as a monthly CSV export
pub fn is_csv_name(name: &str) -> bool {
    name.ends_with(CSV_SUFFIX)
}

/// Default output path for a given base directory
pub fn default_output_path(base_dir: &std::path::Path) -> std::path::PathBuf {
    base_dir.join(OUTPUT_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_csv_name_detection() {
        assert!(is_csv_name("sales_January.csv"));
        assert!(is_csv_name(".csv"));
        assert!(!is_csv_name("sales_January.CSV")); // Case sensitive
        assert!(!is_csv_name("sales_January.csv.bak"));
        assert!(!is_csv_name("notes.txt"));
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("../input")),
            Path::new("../input/Integrated_Data.csv")
        );
    }

    #[test]
    fn test_default_layout_caps_last_folder() {
        assert_eq!(DEFAULT_FOLDERS.last(), Some(&CAPPED_FOLDER));
    }
}
