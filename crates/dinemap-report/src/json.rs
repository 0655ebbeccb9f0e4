//! JSON export of a full dashboard view.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use dinemap_model::DashboardView;

use crate::common::write_atomic;

/// Pretty-printed JSON followed by a newline.
pub fn write_view_json<W: Write>(mut writer: W, view: &DashboardView) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, view).context("serialize view")?;
    writeln!(writer).context("write view JSON")?;
    Ok(())
}

pub fn write_view_json_file(path: &Path, view: &DashboardView) -> Result<()> {
    write_atomic(path, |writer| write_view_json(writer, view))
        .with_context(|| format!("write view JSON {}", path.display()))
}
