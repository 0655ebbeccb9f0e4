//! CSV export of the restaurant table.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use dinemap_model::{TABLE_HEADERS, TableRow};

use crate::common::write_atomic;

/// Write `rows` as CSV with the display headers.
pub fn write_table_csv<W: Write>(writer: W, rows: &[TableRow]) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(TABLE_HEADERS).context("write CSV header")?;
    for row in rows {
        out.write_record(row.cells()).context("write CSV row")?;
    }
    out.flush().context("flush CSV")?;
    Ok(())
}

/// Write `rows` to `path`.
pub fn write_table_csv_file(path: &Path, rows: &[TableRow]) -> Result<()> {
    write_atomic(path, |writer| write_table_csv(writer, rows))
        .with_context(|| format!("write table CSV {}", path.display()))?;
    debug!(path = %path.display(), rows = rows.len(), "table CSV written");
    Ok(())
}
