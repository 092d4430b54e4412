//! Win-rate report export, format chosen by file extension

pub mod csv_writer;
pub mod xlsx_writer;

use crate::error::{Result, StatsError};
use crate::winrate::PlayerStat;
use std::path::Path;

pub use csv_writer::write_win_rates_to_csv;
pub use xlsx_writer::write_win_rates_to_xlsx;

/// Write the report to `path` as CSV or Excel
pub fn write_report(rates: &[PlayerStat], path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => write_win_rates_to_csv(rates, path),
        "xlsx" => write_win_rates_to_xlsx(rates, path),
        _ => Err(StatsError::UnsupportedFormat(ext)),
    }
}
