//! Validate and type-coerce raw rows into a clean sales table.
//!
//! Cleaning runs in two null-check passes, matching the nullable-field data
//! model: a row is first dropped when any raw field is missing, then the
//! survivors are coerced and dropped again when a coercion fails. A value
//! that cannot be parsed becomes `None`, it never raises.
//!
//! The output table carries the fixed five-column schema
//! (`Date, Product, Quantity, Price, Total Sale`) and is stably sorted by
//! date ascending, so rows with equal dates keep their source order.

use chrono::NaiveDate;

use crate::models::{RawTable, SaleRow};

/// Date formats accepted by coercion, tried in order. Month-first beats
/// day-first for ambiguous slash dates, matching the source data conventions.
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d/%m/%Y", "%d-%m-%Y"];

/// Outcome of a cleaning run.
#[derive(Debug, Clone)]
pub struct CleanResult {
    /// Surviving rows, sorted by date ascending.
    pub table: Vec<SaleRow>,
    /// Rows removed by either null-check pass.
    pub dropped: usize,
}

/// Clean the raw table: drop incomplete rows, coerce types, drop coercion
/// failures, compute `Total Sale`, and sort by date.
///
/// An input where every row is invalid yields an empty table, not an error.
pub fn clean_table(raw: &RawTable) -> CleanResult {
    let mut table = Vec::with_capacity(raw.len());
    let mut dropped = 0;

    for row in &raw.rows {
        // Pass 1: raw null-check on all four fields.
        let (Some(date_raw), Some(product), Some(quantity_raw), Some(price_raw)) =
            (&row.date, &row.product, &row.quantity, &row.price)
        else {
            dropped += 1;
            continue;
        };

        // Pass 2: coercion failures become null and are dropped here.
        let (Some(date), Some(quantity), Some(price)) = (
            coerce_date(date_raw),
            coerce_number(quantity_raw),
            coerce_number(price_raw),
        ) else {
            dropped += 1;
            continue;
        };

        table.push(SaleRow {
            date,
            product: product.clone(),
            quantity,
            price,
            total_sale: quantity * price,
        });
    }

    // Stable sort keeps source order among equal dates.
    table.sort_by_key(|row| row.date);

    CleanResult { table, dropped }
}

/// Coerce a raw value to a calendar date, or `None` when no format matches.
pub fn coerce_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Coerce a raw value to a finite number, or `None`.
pub fn coerce_number(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    value.is_finite().then_some(value)
}
