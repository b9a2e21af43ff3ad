//! Write the cleaned table and its summaries to a formatted workbook.
//!
//! Three sheets, always in the same order: the cleaned table, sales by
//! product, sales by month. Presentation is delegated to `rust_xlsxwriter`;
//! this module only decides what goes where: row 1 is the bold header row,
//! and every column is widened to the longest display string it contains
//! (header included) plus fixed padding.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::error::{ExportError, ExportResult};
use crate::models::{SaleRow, SummaryTable, CLEAN_COLUMNS, COL_TOTAL_SALE};

pub const SHEET_CLEANED: &str = "Cleaned Sales Data";
pub const SHEET_BY_PRODUCT: &str = "Sales by Product";
pub const SHEET_BY_MONTH: &str = "Sales by Month";

/// Extra character width added to every autofitted column.
const WIDTH_PADDING: usize = 2;

/// Write the workbook to `path`, overwriting any existing file.
pub fn export_workbook(
    path: &Path,
    clean: &[SaleRow],
    by_product: &SummaryTable,
    by_month: &SummaryTable,
) -> ExportResult<()> {
    write_workbook(path, clean, by_product, by_month).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn write_workbook(
    path: &Path,
    clean: &[SaleRow],
    by_product: &SummaryTable,
    by_month: &SummaryTable,
) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    write_clean_sheet(workbook.add_worksheet(), clean, &bold)?;
    write_summary_sheet(workbook.add_worksheet(), SHEET_BY_PRODUCT, by_product, &bold)?;
    write_summary_sheet(workbook.add_worksheet(), SHEET_BY_MONTH, by_month, &bold)?;

    workbook.save(path)
}

fn write_clean_sheet(sheet: &mut Worksheet, table: &[SaleRow], bold: &Format) -> Result<(), XlsxError> {
    sheet.set_name(SHEET_CLEANED)?;

    let mut widths = ColumnWidths::new(&CLEAN_COLUMNS);
    for (col, header) in CLEAN_COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, bold)?;
    }

    for (at, row) in table.iter().enumerate() {
        let excel_row = (at + 1) as u32;
        let date_text = row.date.format("%Y-%m-%d").to_string();

        sheet.write_string(excel_row, 0, date_text.as_str())?;
        sheet.write_string(excel_row, 1, row.product.as_str())?;
        sheet.write_number(excel_row, 2, row.quantity)?;
        sheet.write_number(excel_row, 3, row.price)?;
        sheet.write_number(excel_row, 4, row.total_sale)?;

        widths.track(0, &date_text);
        widths.track(1, &row.product);
        widths.track(2, &display_number(row.quantity));
        widths.track(3, &display_number(row.price));
        widths.track(4, &display_number(row.total_sale));
    }

    widths.apply(sheet)
}

fn write_summary_sheet(
    sheet: &mut Worksheet,
    name: &str,
    summary: &SummaryTable,
    bold: &Format,
) -> Result<(), XlsxError> {
    sheet.set_name(name)?;

    let headers = [summary.key_column.as_str(), COL_TOTAL_SALE];
    let mut widths = ColumnWidths::new(&headers);
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, bold)?;
    }

    for (at, row) in summary.rows.iter().enumerate() {
        let excel_row = (at + 1) as u32;
        sheet.write_string(excel_row, 0, row.key.as_str())?;
        sheet.write_number(excel_row, 1, row.total_sale)?;

        widths.track(0, &row.key);
        widths.track(1, &display_number(row.total_sale));
    }

    widths.apply(sheet)
}

/// Per-column running maximum of display lengths, seeded with the headers.
struct ColumnWidths(Vec<usize>);

impl ColumnWidths {
    fn new(headers: &[&str]) -> Self {
        Self(headers.iter().map(|h| h.chars().count()).collect())
    }

    fn track(&mut self, col: usize, text: &str) {
        let len = text.chars().count();
        if len > self.0[col] {
            self.0[col] = len;
        }
    }

    fn apply(&self, sheet: &mut Worksheet) -> Result<(), XlsxError> {
        for (col, width) in self.0.iter().enumerate() {
            sheet.set_column_width(col as u16, (width + WIDTH_PADDING) as f64)?;
        }
        Ok(())
    }
}

/// Display form of a numeric cell, as a spreadsheet shows it by default.
fn display_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
