//! Group the cleaned table into summary tables.
//!
//! Two groupings over the same rows: by `Product` text and by the derived
//! `YYYY-MM` month key. Each is a running sum of `Total Sale` over an
//! insertion-ordered mapping, so summary rows come out in first-seen key
//! order. The cleaned table itself is never mutated; the month key exists
//! only inside the summaries.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{SaleRow, SummaryRow, SummaryTable, COL_MONTH, COL_PRODUCT};

/// Period key for a date: year and month as `YYYY-MM`.
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Total sales per product, keys in first-seen order.
pub fn summarize_by_product(table: &[SaleRow]) -> SummaryTable {
    summarize(table, COL_PRODUCT, |row| row.product.clone())
}

/// Total sales per month, keys in first-seen order.
///
/// The cleaned table is date-sorted, so first-seen here is chronological.
pub fn summarize_by_month(table: &[SaleRow]) -> SummaryTable {
    summarize(table, COL_MONTH, |row| month_key(row.date))
}

fn summarize<F>(table: &[SaleRow], key_column: &str, key_of: F) -> SummaryTable
where
    F: Fn(&SaleRow) -> String,
{
    let mut rows: Vec<SummaryRow> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in table {
        let key = key_of(row);
        match index.get(&key) {
            Some(&at) => rows[at].total_sale += row.total_sale,
            None => {
                index.insert(key.clone(), rows.len());
                rows.push(SummaryRow {
                    key,
                    total_sale: row.total_sale,
                });
            }
        }
    }

    SummaryTable {
        key_column: key_column.to_string(),
        rows,
    }
}
