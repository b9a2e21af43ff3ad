//! Domain models for the salescrub pipeline.
//!
//! This module contains the core data structures passed between stages:
//!
//! - [`RawTable`] / [`RawRow`] - loaded input, every field still optional
//! - [`SaleRow`] - a fully validated, typed sales record
//! - [`SummaryTable`] / [`SummaryRow`] - grouped totals keyed by product or month
//!
//! Raw fields are `Option<String>` end-to-end: a missing or empty source cell
//! is `None`, never a sentinel value. The Cleaner is the only place where raw
//! fields become typed.

use chrono::NaiveDate;
use serde::Serialize;

// =============================================================================
// Column Names
// =============================================================================

pub const COL_DATE: &str = "Date";
pub const COL_PRODUCT: &str = "Product";
pub const COL_QUANTITY: &str = "Quantity";
pub const COL_PRICE: &str = "Price";
pub const COL_TOTAL_SALE: &str = "Total Sale";
pub const COL_MONTH: &str = "Month";

/// Columns the input file must provide. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = [COL_DATE, COL_PRODUCT, COL_QUANTITY, COL_PRICE];

/// Output schema of the cleaned table, in order.
pub const CLEAN_COLUMNS: [&str; 5] = [COL_DATE, COL_PRODUCT, COL_QUANTITY, COL_PRICE, COL_TOTAL_SALE];

// =============================================================================
// Raw Input
// =============================================================================

/// One input row, restricted to the four required columns.
///
/// `None` means the cell was absent, empty, or whitespace-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawRow {
    pub date: Option<String>,
    pub product: Option<String>,
    pub quantity: Option<String>,
    pub price: Option<String>,
}

impl RawRow {
    /// True when all four required fields carry a value.
    pub fn is_complete(&self) -> bool {
        self.date.is_some() && self.product.is_some() && self.quantity.is_some() && self.price.is_some()
    }
}

/// The Loader's output: raw rows plus the source header list.
#[derive(Debug, Clone, Serialize)]
pub struct RawTable {
    /// All headers found in the source file, in source order.
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// =============================================================================
// Cleaned Rows
// =============================================================================

/// A validated sales record with all types coerced.
///
/// Invariant: `total_sale == quantity * price`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleRow {
    pub date: NaiveDate,
    pub product: String,
    pub quantity: f64,
    pub price: f64,
    pub total_sale: f64,
}

// =============================================================================
// Summaries
// =============================================================================

/// One grouped total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub key: String,
    pub total_sale: f64,
}

/// Grouped totals in first-seen key order.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryTable {
    /// Header name of the key column (`Product` or `Month`).
    pub key_column: String,
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    /// Sum over all grouped totals.
    pub fn total(&self) -> f64 {
        self.rows.iter().map(|r| r.total_sale).sum()
    }

    /// Look up the total for a key.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.rows.iter().find(|r| r.key == key).map(|r| r.total_sale)
    }
}
