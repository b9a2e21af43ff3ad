//! Error types for the salescrub pipeline.
//!
//! This module defines the error hierarchy for the pipeline:
//!
//! - [`LoadError`] - input file cannot be read or is structurally unusable
//! - [`ExportError`] - output workbook cannot be written
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.
//!
//! Row-level data-quality problems (missing fields, unparsable dates or
//! numbers) are never errors: the Cleaner filters those rows out and the
//! run still succeeds.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Load Errors
// =============================================================================

/// Errors while loading the input table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Input path has an extension we do not handle.
    #[error("unsupported file format '.{extension}' for '{}': use .csv, .xls or .xlsx", .path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// CSV reader failure (missing file, unreadable, malformed record).
    #[error("failed to read CSV input: {0}")]
    Csv(#[from] csv::Error),

    /// Spreadsheet reader failure (missing file, corrupt workbook).
    #[error("failed to read spreadsheet input: {0}")]
    Spreadsheet(#[from] calamine::Error),

    /// Input file has no header row at all.
    #[error("input file is empty")]
    EmptyFile,

    /// Spreadsheet contains no sheets.
    #[error("spreadsheet contains no sheets")]
    NoSheets,

    /// A required column is absent from the header row.
    #[error("missing required column: {0}")]
    MissingColumn(String),
}

// =============================================================================
// Export Errors
// =============================================================================

/// Errors while writing the output workbook.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Workbook serialization or file write failure.
    #[error("failed to write workbook to '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: rust_xlsxwriter::XlsxError,
    },
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline orchestration errors.
///
/// This is the main error type returned by [`crate::pipeline::clean_sales_data`].
/// All variants are fatal: the run aborts and no complete output file is left
/// behind.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input loading error.
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    /// Output writing error.
    #[error("export error: {0}")]
    Export(#[from] ExportError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for exporter operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
