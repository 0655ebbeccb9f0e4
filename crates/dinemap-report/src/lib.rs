//! Output generation for a dashboard view.
//!
//! - **Map**: self-contained Leaflet HTML page with glyph markers and popups
//! - **CSV**: the restaurant table with relabeled columns
//! - **JSON**: the full view for downstream tooling

mod common;
mod csv_table;
mod json;
mod map_html;

pub use common::write_atomic;
pub use csv_table::{write_table_csv, write_table_csv_file};
pub use json::{write_view_json, write_view_json_file};
pub use map_html::{
    MapHtmlOptions, OSM_ATTRIBUTION, OSM_TILES, marker_payload, popup_html, render_map_html,
    write_map_html,
};
