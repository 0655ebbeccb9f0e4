//! CSV payload to Polars DataFrame, with header lookup.

use std::io::Cursor;

use polars::prelude::{Column, CsvReadOptions, DataFrame, SerReader};

use dinemap_model::CaseInsensitiveSet;

use crate::error::{IngestError, Result};

/// Parse a CSV payload with a header row.
///
/// Every column is read as text (schema inference disabled) so numeric
/// validation happens in one place with row-level error messages.
///
/// A header-only payload yields a frame with zero rows.
pub fn read_csv_bytes(bytes: Vec<u8>, origin: &str) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
        .map_err(|e| IngestError::CsvParse {
            origin: origin.to_string(),
            message: e.to_string(),
        })
}

/// Resolves logical column names against a frame's header case-insensitively.
pub struct ColumnIndex<'a> {
    df: &'a DataFrame,
    names: CaseInsensitiveSet,
    origin: &'a str,
}

impl<'a> ColumnIndex<'a> {
    pub fn new(df: &'a DataFrame, origin: &'a str) -> Self {
        let names = CaseInsensitiveSet::new(df.get_column_names().iter().map(|n| n.as_str()));
        Self { df, names, origin }
    }

    /// Fail on the first of `columns` the header lacks.
    pub fn require_all(&self, columns: &[&str]) -> Result<()> {
        for column in columns {
            self.column(column)?;
        }
        Ok(())
    }

    /// The frame column for `name`.
    pub fn column(&self, name: &str) -> Result<&'a Column> {
        let actual = self
            .names
            .get(name)
            .ok_or_else(|| IngestError::MissingColumn {
                column: name.to_string(),
                origin: self.origin.to_string(),
            })?;
        Ok(self.df.column(actual)?)
    }

    pub fn origin(&self) -> &str {
        self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_quoted_multiline_cells() {
        let csv = "business_id,text\nb1,\"Great, really\nreally great\"\nb2,ok\n";
        let df = read_csv_bytes(csv.as_bytes().to_vec(), "reviews.csv").expect("parse");
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 2);
    }

    #[test]
    fn header_only_reads_zero_rows() {
        let df = read_csv_bytes(b"business_id,name\n".to_vec(), "b.csv").expect("parse");
        assert_eq!(df.height(), 0);
        assert!(ColumnIndex::new(&df, "b.csv").column("name").is_ok());
    }

    #[test]
    fn columns_resolve_case_insensitively() {
        let df = read_csv_bytes(b"Business_ID,Stars\nb1,4\n".to_vec(), "b.csv").expect("parse");
        let index = ColumnIndex::new(&df, "b.csv");
        assert!(index.column("business_id").is_ok());
        assert!(index.require_all(&["stars", "BUSINESS_ID"]).is_ok());
        let err = index.require_all(&["latitude"]).expect_err("missing");
        assert!(matches!(err, IngestError::MissingColumn { column, .. } if column == "latitude"));
    }
}
