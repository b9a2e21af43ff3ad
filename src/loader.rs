//! Load raw tabular input into a [`RawTable`].
//!
//! The format is chosen by file extension: `.csv` goes through the `csv`
//! crate, `.xls`/`.xlsx` through `calamine`. Any other extension is rejected
//! before the file is touched. Only the four required columns are captured;
//! additional source columns are dropped here.
//!
//! No value interpretation happens at this stage: every captured cell is an
//! `Option<String>`, with absent/empty/whitespace-only cells as `None`.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use csv::{ReaderBuilder, Trim};

use crate::error::{LoadError, LoadResult};
use crate::models::{RawRow, RawTable, COL_DATE, COL_PRICE, COL_PRODUCT, COL_QUANTITY};

/// Load the table at `path`, dispatching on the file extension.
pub fn load_table(path: &Path) -> LoadResult<RawTable> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase());

    match extension.as_deref() {
        Some("csv") => load_csv(path),
        Some("xls") | Some("xlsx") => load_spreadsheet(path),
        other => Err(LoadError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension: other.unwrap_or_default().to_string(),
        }),
    }
}

/// Positions of the four required columns within the source header row.
struct ColumnIndex {
    date: usize,
    product: usize,
    quantity: usize,
    price: usize,
}

impl ColumnIndex {
    fn find(headers: &[String]) -> LoadResult<Self> {
        let position = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            date: position(COL_DATE)?,
            product: position(COL_PRODUCT)?,
            quantity: position(COL_QUANTITY)?,
            price: position(COL_PRICE)?,
        })
    }
}

/// Normalize one header cell. Strips a UTF-8 BOM left over from exports.
fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_string()
}

/// Normalize one data cell: empty and whitespace-only become `None`.
fn normalize_cell(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn load_csv(path: &Path) -> LoadResult<RawTable> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();
    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(LoadError::EmptyFile);
    }
    let index = ColumnIndex::find(&headers)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = |i: usize| record.get(i).and_then(normalize_cell);
        rows.push(RawRow {
            date: field(index.date),
            product: field(index.product),
            quantity: field(index.quantity),
            price: field(index.price),
        });
    }

    Ok(RawTable { headers, rows })
}

fn load_spreadsheet(path: &Path) -> LoadResult<RawTable> {
    let mut workbook = open_workbook_auto(path)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(LoadError::NoSheets)?;
    let range = workbook.worksheet_range(&sheet_name)?;

    let mut row_iter = range.rows();
    let header_row = row_iter.next().ok_or(LoadError::EmptyFile)?;
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| normalize_header(&cell_to_string(cell).unwrap_or_default()))
        .collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(LoadError::EmptyFile);
    }
    let index = ColumnIndex::find(&headers)?;

    let mut rows = Vec::new();
    for row in row_iter {
        let field = |i: usize| row.get(i).and_then(cell_to_string);
        rows.push(RawRow {
            date: field(index.date),
            product: field(index.product),
            quantity: field(index.quantity),
            price: field(index.price),
        });
    }

    Ok(RawTable { headers, rows })
}

/// Render a spreadsheet cell to its raw string form.
///
/// Native date-time cells become `YYYY-MM-DD` so the Cleaner's date coercion
/// accepts them; error cells count as missing.
fn cell_to_string(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => normalize_cell(s),
        Data::Float(f) => Some(format_float(*f)),
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(dt) => Some(match dt.as_datetime() {
            Some(datetime) => datetime.date().format("%Y-%m-%d").to_string(),
            None => dt.as_f64().to_string(),
        }),
    }
}

/// Integral floats render without a decimal point, like the source files show them.
fn format_float(f: f64) -> String {
    if f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        format!("{}", f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_simple_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "sales.csv",
            "Date,Product,Quantity,Price\n2024-01-05,Widget,2,10.0\n2024-02-01,Gadget,1,20.0\n",
        );

        let table = load_table(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.headers, vec!["Date", "Product", "Quantity", "Price"]);
        assert_eq!(table.rows[0].product.as_deref(), Some("Widget"));
        assert_eq!(table.rows[1].price.as_deref(), Some("20.0"));
    }

    #[test]
    fn test_extra_columns_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "sales.csv",
            "Region,Date,Product,Quantity,Price,Notes\nEU,2024-01-05,Widget,2,10.0,rush order\n",
        );

        let table = load_table(&path).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows[0].date.as_deref(), Some("2024-01-05"));
        assert_eq!(table.rows[0].quantity.as_deref(), Some("2"));
    }

    #[test]
    fn test_empty_cells_become_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "sales.csv",
            "Date,Product,Quantity,Price\n2024-01-05,Widget,,10.0\n2024-01-06,   ,1,5.0\n",
        );

        let table = load_table(&path).unwrap();
        assert_eq!(table.rows[0].quantity, None);
        assert_eq!(table.rows[1].product, None);
    }

    #[test]
    fn test_short_rows_fill_with_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "sales.csv",
            "Date,Product,Quantity,Price\n2024-01-05,Widget\n",
        );

        let table = load_table(&path).unwrap();
        assert_eq!(table.rows[0].date.as_deref(), Some("2024-01-05"));
        assert_eq!(table.rows[0].quantity, None);
        assert_eq!(table.rows[0].price, None);
    }

    #[test]
    fn test_unsupported_extension_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "sales.txt", "Date,Product,Quantity,Price\n");

        let err = load_table(&path).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_missing_extension_rejected() {
        let err = load_table(Path::new("/tmp/no-extension")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_missing_column_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "sales.csv", "Date,Product,Quantity\n2024-01-05,Widget,2\n");

        let err = load_table(&path).unwrap_err();
        match err {
            LoadError::MissingColumn(name) => assert_eq!(name, "Price"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = load_table(Path::new("/nonexistent/sales.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn test_bom_stripped_from_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "sales.csv",
            "\u{feff}Date,Product,Quantity,Price\n2024-01-05,Widget,2,10.0\n",
        );

        let table = load_table(&path).unwrap();
        assert_eq!(table.headers[0], "Date");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(2.0), "2");
        assert_eq!(format_float(10.5), "10.5");
        assert_eq!(format_float(-3.0), "-3");
    }
}
