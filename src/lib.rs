//! # salescrub - sales data cleaning and reporting
//!
//! salescrub turns a raw tabular sales file (CSV or Excel) into a cleaned,
//! summarized, formatted Excel report.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Input File  │────▶│   Loader    │────▶│   Cleaner   │────▶│ Aggregator  │
//! │ (csv/xlsx)  │     │ (raw table) │     │ (validate,  │     │ (sums by    │
//! └─────────────┘     └─────────────┘     │  coerce)    │     │  key)       │
//!                                         └─────────────┘     └──────┬──────┘
//!                                                                    ▼
//!                                                             ┌─────────────┐
//!                                                             │  Exporter   │
//!                                                             │ (3 sheets)  │
//!                                                             └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use salescrub::clean_sales_data;
//! use std::path::Path;
//!
//! fn main() {
//!     let report = clean_sales_data(
//!         Path::new("raw_sales_data.csv"),
//!         Path::new("organized_sales_report.xlsx"),
//!     ).unwrap();
//!     println!("kept {} rows", report.clean.len());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - error hierarchy
//! - [`models`] - domain models (raw rows, sale rows, summaries)
//! - [`loader`] - CSV/Excel input loading
//! - [`cleaner`] - validation and type coercion
//! - [`aggregator`] - grouped totals by product and month
//! - [`exporter`] - formatted workbook output
//! - [`pipeline`] - end-to-end orchestration

// Core modules
pub mod error;
pub mod models;

// Pipeline stages
pub mod aggregator;
pub mod cleaner;
pub mod exporter;
pub mod loader;

// Orchestration
pub mod pipeline;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ExportError, LoadError, PipelineError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{RawRow, RawTable, SaleRow, SummaryRow, SummaryTable};

// =============================================================================
// Re-exports - Stages
// =============================================================================

pub use aggregator::{month_key, summarize_by_month, summarize_by_product};
pub use cleaner::{clean_table, CleanResult};
pub use exporter::export_workbook;
pub use loader::load_table;

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use pipeline::{clean_sales_data, CleanReport};
