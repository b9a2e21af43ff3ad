//! High-level pipeline API: load, clean, summarize, export.
//!
//! # Example
//!
//! ```rust,ignore
//! use salescrub::clean_sales_data;
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = clean_sales_data(
//!         Path::new("raw_sales_data.csv"),
//!         Path::new("organized_sales_report.xlsx"),
//!     )?;
//!     println!("kept {} rows, dropped {}", report.clean.len(), report.dropped);
//!     Ok(())
//! }
//! ```

use std::path::Path;

use crate::aggregator::{summarize_by_month, summarize_by_product};
use crate::cleaner::{clean_table, CleanResult};
use crate::error::PipelineResult;
use crate::exporter::export_workbook;
use crate::loader::load_table;
use crate::models::{SaleRow, SummaryTable};

/// Everything a completed run produced, for display and testing.
#[derive(Debug, Clone)]
pub struct CleanReport {
    /// Rows read from the input file.
    pub loaded: usize,
    /// Rows removed by validation or type coercion.
    pub dropped: usize,
    /// The cleaned table, as written to the first sheet.
    pub clean: Vec<SaleRow>,
    pub by_product: SummaryTable,
    pub by_month: SummaryTable,
}

/// Run the full pipeline: read `input`, clean and summarize the data, and
/// write the three-sheet report workbook to `output`.
///
/// Stages run strictly in sequence; the first fatal error aborts the run and
/// nothing is written. Invalid rows are not errors, they are dropped and
/// counted in the report.
pub fn clean_sales_data(input: &Path, output: &Path) -> PipelineResult<CleanReport> {
    let raw = load_table(input)?;
    let loaded = raw.len();

    let CleanResult { table, dropped } = clean_table(&raw);
    let by_product = summarize_by_product(&table);
    let by_month = summarize_by_month(&table);

    export_workbook(output, &table, &by_product, &by_month)?;

    Ok(CleanReport {
        loaded,
        dropped,
        clean: table,
        by_product,
        by_month,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LoadError, PipelineError};
    use std::fs;

    const SCENARIO_CSV: &str = "\
Date,Product,Quantity,Price
2024-01-05,Widget,2,10.0
2024-01-05,Widget,,5.0
2024-02-01,Gadget,1,20.0
";

    fn run_scenario(dir: &tempfile::TempDir) -> CleanReport {
        let input = dir.path().join("sales.csv");
        fs::write(&input, SCENARIO_CSV).unwrap();
        let output = dir.path().join("report.xlsx");
        clean_sales_data(&input, &output).unwrap()
    }

    #[test]
    fn test_end_to_end_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let report = run_scenario(&dir);

        assert_eq!(report.loaded, 3);
        assert_eq!(report.dropped, 1);
        assert_eq!(report.clean.len(), 2);
        assert_eq!(report.by_product.get("Widget"), Some(20.0));
        assert_eq!(report.by_product.get("Gadget"), Some(20.0));
        assert_eq!(report.by_month.get("2024-01"), Some(20.0));
        assert_eq!(report.by_month.get("2024-02"), Some(20.0));
        assert!(dir.path().join("report.xlsx").exists());
    }

    #[test]
    fn test_summary_totals_match_clean_total() {
        let dir = tempfile::tempdir().unwrap();
        let report = run_scenario(&dir);

        let clean_total: f64 = report.clean.iter().map(|r| r.total_sale).sum();
        assert_eq!(report.by_product.total(), clean_total);
        assert_eq!(report.by_month.total(), clean_total);
    }

    #[test]
    fn test_rerun_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let first = run_scenario(&dir);
        let second = run_scenario(&dir);

        assert_eq!(first.clean, second.clean);
        assert_eq!(first.by_product.rows, second.by_product.rows);
        assert_eq!(first.by_month.rows, second.by_month.rows);
    }

    #[test]
    fn test_round_trip_through_cleaned_sheet() {
        // Reloading the written "Cleaned Sales Data" sheet and cleaning it
        // again must reproduce the same table.
        let dir = tempfile::tempdir().unwrap();
        let report = run_scenario(&dir);

        let reloaded = load_table(&dir.path().join("report.xlsx")).unwrap();
        assert_eq!(reloaded.len(), report.clean.len());

        let recleaned = clean_table(&reloaded);
        assert_eq!(recleaned.dropped, 0);
        assert_eq!(recleaned.table, report.clean);
    }

    #[test]
    fn test_unsupported_input_extension() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("sales.txt");
        fs::write(&input, SCENARIO_CSV).unwrap();
        let output = dir.path().join("report.xlsx");

        let err = clean_sales_data(&input, &output).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Load(LoadError::UnsupportedFormat { .. })
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_all_rows_invalid_still_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("sales.csv");
        fs::write(
            &input,
            "Date,Product,Quantity,Price\nnot-a-date,Widget,2,10.0\n2024-01-05,,1,5.0\n",
        )
        .unwrap();
        let output = dir.path().join("report.xlsx");

        let report = clean_sales_data(&input, &output).unwrap();
        assert_eq!(report.loaded, 2);
        assert_eq!(report.dropped, 2);
        assert!(report.clean.is_empty());
        assert!(report.by_product.rows.is_empty());
        assert!(output.exists());
    }

    #[test]
    fn test_missing_input_file_fails_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("report.xlsx");

        let err = clean_sales_data(&dir.path().join("absent.csv"), &output).unwrap_err();
        assert!(matches!(err, PipelineError::Load(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_xlsx_input_round_trip() {
        // Feed a written report back in as the input spreadsheet.
        let dir = tempfile::tempdir().unwrap();
        let first = run_scenario(&dir);

        let second_output = dir.path().join("report2.xlsx");
        let report = clean_sales_data(&dir.path().join("report.xlsx"), &second_output).unwrap();

        assert_eq!(report.clean, first.clean);
        assert_eq!(report.by_product.rows, first.by_product.rows);
    }
}
