//! Shared utilities for dinemap crates.
//!
//! Loaded tables are read with every column typed as text, so the helpers
//! here turn Polars cells into the owned Rust values the record types need.

pub mod cells;

pub use cells::{
    cell_count, cell_f64, cell_text, cell_text_non_empty, format_stars, parse_count, parse_f64,
};
