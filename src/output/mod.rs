//! Output module: renders result tables
//!
//! This module handles:
//! - Plain console output (default)
//! - Boxed ASCII tables (`pretty`)
//! - Timestamped CSV files under the results directory (`file`)

mod csv_file;
mod pretty;

pub use csv_file::{format_csv, result_file_name, write_csv_file, DATETIME_FORMAT};
pub use pretty::format_pretty_table;

use crate::config::OutputConfig;
use crate::model::Table;
use crate::scrapers::Mode;
use crate::ScrapeError;
use std::path::PathBuf;

/// Where a result table goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputMode {
    /// Boxed table on stdout
    Pretty,
    /// CSV file in the results directory
    File,
}

/// Plain console form: one line per row, fields separated by spaces
pub fn format_plain(table: &Table) -> String {
    let mut out = String::new();
    for row in table.all_rows() {
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}

/// Sends the table to the selected destination
///
/// # Returns
///
/// * `Ok(Some(path))` - The table was written to `path`
/// * `Ok(None)` - The table was printed
pub fn control_output(
    table: &Table,
    mode: Mode,
    destination: Option<OutputMode>,
    config: &OutputConfig,
) -> Result<Option<PathBuf>, ScrapeError> {
    match destination {
        Some(OutputMode::Pretty) => {
            print!("{}", format_pretty_table(table));
            Ok(None)
        }
        Some(OutputMode::File) => {
            let path = write_csv_file(table, mode, &config.results_path())?;
            tracing::info!("Results saved to: {}", path.display());
            Ok(Some(path))
        }
        None => {
            print!("{}", format_plain(table));
            Ok(None)
        }
    }
}
