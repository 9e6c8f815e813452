//! CSV result files

use crate::model::Table;
use crate::scrapers::Mode;
use chrono::{DateTime, Local};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Timestamp format used in result file names
pub const DATETIME_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// File name for a mode's results, e.g. `pep_2024-05-01_12-30-00.csv`
pub fn result_file_name(mode: Mode, now: DateTime<Local>) -> String {
    format!("{}_{}.csv", mode.name(), now.format(DATETIME_FORMAT))
}

/// Formats a table as CSV: every field quoted, quotes doubled, `\n` endings
pub fn format_csv(table: &Table) -> String {
    let mut out = String::new();
    for row in table.all_rows() {
        let line: Vec<String> = row
            .iter()
            .map(|field| format!("\"{}\"", field.replace('"', "\"\"")))
            .collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

/// Writes the table to `<results_dir>/<mode>_<timestamp>.csv`
///
/// The results directory is created when missing.
pub fn write_csv_file(table: &Table, mode: Mode, results_dir: &Path) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(results_dir)?;

    let path = results_dir.join(result_file_name(mode, Local::now()));
    let mut file = File::create(&path)?;
    file.write_all(format_csv(table).as_bytes())?;

    Ok(path)
}
