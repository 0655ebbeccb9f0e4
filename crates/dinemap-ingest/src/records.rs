//! DataFrame rows to typed records.
//!
//! This is the only place structural validation happens: missing columns,
//! blank ids and non-numeric coordinates or ratings fail the load with the
//! offending row number (1-based, header excluded).

use polars::prelude::{AnyValue, Column, DataFrame};
use tracing::debug;

use dinemap_common::{cell_count, cell_f64, cell_text, cell_text_non_empty};
use dinemap_model::{BusinessRecord, OTHER_CATEGORY, ReviewRecord};

use crate::error::{IngestError, Result};
use crate::table::ColumnIndex;

/// Columns every business table must carry.
pub const BUSINESS_COLUMNS: [&str; 8] = [
    "business_id",
    "name",
    "address",
    "postal_code",
    "categories_grouped",
    "stars",
    "latitude",
    "longitude",
];

/// Columns every review table must carry.
pub const REVIEW_COLUMNS: [&str; 6] = ["business_id", "text", "stars", "funny", "useful", "cool"];

/// Convert a business frame into records, in row order. Duplicates are kept.
pub fn businesses_from_frame(df: &DataFrame, origin: &str) -> Result<Vec<BusinessRecord>> {
    let index = ColumnIndex::new(df, origin);
    index.require_all(&BUSINESS_COLUMNS)?;
    let id = index.column("business_id")?;
    let name = index.column("name")?;
    let address = index.column("address")?;
    let postal_code = index.column("postal_code")?;
    let category = index.column("categories_grouped")?;
    let stars = index.column("stars")?;
    let latitude = index.column("latitude")?;
    let longitude = index.column("longitude")?;

    let mut records = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let row = idx + 1;
        records.push(BusinessRecord {
            business_id: required_text(&index, id, "business_id", idx)?,
            name: text(name, idx),
            address: text(address, idx),
            postal_code: text(postal_code, idx),
            categories_grouped: cell_text_non_empty(cell(category, idx))
                .unwrap_or_else(|| OTHER_CATEGORY.to_string()),
            stars: number(&index, stars, "stars", idx)?,
            latitude: number(&index, latitude, "latitude", idx)?,
            longitude: number(&index, longitude, "longitude", idx)?,
        });
        if row % 10_000 == 0 {
            debug!(origin, rows = row, "business rows decoded");
        }
    }
    Ok(records)
}

/// Convert a review frame into records, in row order.
pub fn reviews_from_frame(df: &DataFrame, origin: &str) -> Result<Vec<ReviewRecord>> {
    let index = ColumnIndex::new(df, origin);
    index.require_all(&REVIEW_COLUMNS)?;
    let id = index.column("business_id")?;
    let body = index.column("text")?;
    let stars = index.column("stars")?;
    let funny = index.column("funny")?;
    let useful = index.column("useful")?;
    let cool = index.column("cool")?;

    let mut records = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        records.push(ReviewRecord {
            business_id: required_text(&index, id, "business_id", idx)?,
            text: text(body, idx),
            stars: number(&index, stars, "stars", idx)?,
            funny: count(&index, funny, "funny", idx)?,
            useful: count(&index, useful, "useful", idx)?,
            cool: count(&index, cool, "cool", idx)?,
        });
    }
    Ok(records)
}

fn cell(column: &Column, idx: usize) -> AnyValue<'_> {
    column.get(idx).unwrap_or(AnyValue::Null)
}

fn text(column: &Column, idx: usize) -> String {
    cell_text(cell(column, idx))
}

fn required_text(index: &ColumnIndex<'_>, column: &Column, name: &str, idx: usize) -> Result<String> {
    cell_text_non_empty(cell(column, idx)).ok_or_else(|| IngestError::MissingValue {
        column: name.to_string(),
        row: idx + 1,
        origin: index.origin().to_string(),
    })
}

fn number(index: &ColumnIndex<'_>, column: &Column, name: &str, idx: usize) -> Result<f64> {
    let value = cell(column, idx);
    let raw = cell_text(value.clone());
    if raw.is_empty() {
        return Err(IngestError::MissingValue {
            column: name.to_string(),
            row: idx + 1,
            origin: index.origin().to_string(),
        });
    }
    cell_f64(value).ok_or_else(|| IngestError::InvalidValue {
        column: name.to_string(),
        value: raw,
        row: idx + 1,
        origin: index.origin().to_string(),
    })
}

fn count(index: &ColumnIndex<'_>, column: &Column, name: &str, idx: usize) -> Result<u32> {
    let value = cell(column, idx);
    cell_count(value.clone()).ok_or_else(|| IngestError::InvalidValue {
        column: name.to_string(),
        value: cell_text(value),
        row: idx + 1,
        origin: index.origin().to_string(),
    })
}
