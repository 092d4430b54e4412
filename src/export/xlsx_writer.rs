use crate::error::Result;
use crate::winrate::PlayerStat;
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use std::path::Path;

/// Write win rates to an Excel workbook with a single sheet
pub fn write_win_rates_to_xlsx(rates: &[PlayerStat], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let worksheet = workbook.add_worksheet();
    write_win_rates_sheet(worksheet, rates)?;

    workbook.save(path)?;
    log::info!("Wrote {} rows to {}", rates.len(), path.display());
    Ok(())
}

fn write_win_rates_sheet(sheet: &mut Worksheet, rates: &[PlayerStat]) -> Result<()> {
    sheet.set_name("Win Rates")?;

    sheet.set_column_width(0, 24)?; // Player
    sheet.set_column_width(1, 8)?; // Plays
    sheet.set_column_width(2, 8)?; // Wins
    sheet.set_column_width(3, 14)?; // Expected
    sheet.set_column_width(4, 10)?; // Luck
    sheet.set_column_width(5, 10)?; // Win %

    let header_format = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_border_bottom(FormatBorder::Thin);

    let headers = ["Player", "Plays", "Wins", "Expected", "Luck", "Win %"];
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    let center_format = Format::new().set_align(FormatAlign::Center);
    let decimal_format = Format::new()
        .set_align(FormatAlign::Center)
        .set_num_format("0.00");

    for (row_idx, player) in rates.iter().enumerate() {
        let row = (row_idx + 1) as u32;

        sheet.write_string(row, 0, &player.name)?;
        sheet.write_number_with_format(row, 1, player.plays as f64, &center_format)?;
        sheet.write_number_with_format(row, 2, player.actual_wins as f64, &center_format)?;
        sheet.write_number_with_format(row, 3, player.expected_wins, &decimal_format)?;
        sheet.write_number_with_format(row, 4, player.luck(), &decimal_format)?;
        sheet.write_number_with_format(row, 5, player.win_rate(), &decimal_format)?;
    }

    Ok(())
}
