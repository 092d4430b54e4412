use crate::error::Result;
use crate::winrate::PlayerStat;
use csv::Writer;
use std::io;
use std::path::Path;

const HEADERS: [&str; 6] = ["Player", "Plays", "Wins", "Expected_Wins", "Luck", "Win_Pct"];

/// Write win rates to a CSV file
pub fn write_win_rates_to_csv(rates: &[PlayerStat], path: &Path) -> Result<()> {
    let writer = Writer::from_path(path)?;
    write_rows(writer, rates)?;
    log::info!("Wrote {} rows to {}", rates.len(), path.display());
    Ok(())
}

/// Write win rates as CSV to any writer
pub fn write_win_rates<W: io::Write>(out: W, rates: &[PlayerStat]) -> Result<()> {
    write_rows(Writer::from_writer(out), rates)
}

fn write_rows<W: io::Write>(mut writer: Writer<W>, rates: &[PlayerStat]) -> Result<()> {
    writer.write_record(HEADERS)?;

    for player in rates {
        writer.write_record(&[
            player.name.clone(),
            player.plays.to_string(),
            player.actual_wins.to_string(),
            format!("{:.4}", player.expected_wins),
            format!("{:.4}", player.luck()),
            format!("{:.2}", player.win_rate()),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
