//! Spreadsheet export.
//!
//! Writes a styled `.xlsx` workbook with a title block and one row per subnet.

use crate::models::Allocation;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::error::Error;
use std::path::{Path, PathBuf};

pub const DEFAULT_FILENAME: &str = "vlsm_results.xlsx";
pub const XLSX_EXTENSION: &str = ".xlsx";

const SHEET_NAME: &str = "VLSM Results";
const TITLE: &str = "VLSM Report - IP Addressing";
const HEADERS: [&str; 8] = [
    "Subnet",
    "Hosts needed",
    "Network address",
    "Mask",
    "First IP",
    "Last IP",
    "Broadcast",
    "Available hosts",
];
const HEADER_ROW: u32 = 4;
const COLUMN_WIDTH: f64 = 18.0;
const HEADER_COLOR: u32 = 0x4F81BD;

/// Turn the user's answer into an output path.
///
/// Empty input gives `default`; a missing `.xlsx` extension is appended.
pub fn resolve_filename(input: &str, default: &str) -> PathBuf {
    let input = input.trim();
    if input.is_empty() {
        PathBuf::from(default)
    } else if input.ends_with(XLSX_EXTENSION) {
        PathBuf::from(input)
    } else {
        PathBuf::from(format!("{input}{XLSX_EXTENSION}"))
    }
}

/// Write `allocation` to `path`.
///
/// # Arguments
/// * `allocation` - The allocation to export, rows follow its subnet order
/// * `base_label` - Base network as shown in the title block
/// * `path` - Output file
/// * `generated_at` - Timestamp shown in the title block
pub fn export_xlsx(
    allocation: &Allocation,
    base_label: &str,
    path: &Path,
    generated_at: &str,
) -> Result<(), Box<dyn Error>> {
    log::info!("#Start export_xlsx() to {}", path.display());

    let title_format = Format::new().set_bold().set_font_size(14);
    let plain_format = Format::new();
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_COLOR))
        .set_pattern(FormatPattern::Solid)
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin);
    let cell_format = Format::new().set_border(FormatBorder::Thin);

    let last_col = (HEADERS.len() - 1) as u16;

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    sheet.merge_range(0, 0, 0, last_col, TITLE, &title_format)?;
    sheet.merge_range(
        1,
        0,
        1,
        last_col,
        &format!("Base network: {base_label}"),
        &plain_format,
    )?;
    sheet.merge_range(
        2,
        0,
        2,
        last_col,
        &format!("Date: {generated_at}"),
        &plain_format,
    )?;

    for (col, header) in HEADERS.iter().enumerate() {
        sheet.write_string_with_format(HEADER_ROW, col as u16, *header, &header_format)?;
    }

    for (i, s) in allocation.subnets.iter().enumerate() {
        let row = HEADER_ROW + 1 + i as u32;
        sheet.write_string_with_format(row, 0, format!("Subnet {}", s.id), &cell_format)?;
        sheet.write_number_with_format(row, 1, s.hosts_needed, &cell_format)?;
        sheet.write_string_with_format(row, 2, s.network.to_string(), &cell_format)?;
        sheet.write_string_with_format(row, 3, s.mask.to_string(), &cell_format)?;
        sheet.write_string_with_format(row, 4, s.first_host.to_string(), &cell_format)?;
        sheet.write_string_with_format(row, 5, s.last_host.to_string(), &cell_format)?;
        sheet.write_string_with_format(row, 6, s.broadcast.to_string(), &cell_format)?;
        sheet.write_number_with_format(row, 7, s.available_hosts as f64, &cell_format)?;
    }

    for col in 0..=last_col {
        sheet.set_column_width(col, COLUMN_WIDTH)?;
    }

    workbook
        .save(path)
        .map_err(|e| format!("Error writing workbook {}: {e}", path.display()))?;
    log::info!("Workbook written: {}", path.display());
    Ok(())
}
