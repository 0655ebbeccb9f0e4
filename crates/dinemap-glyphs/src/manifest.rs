#![deny(unsafe_code)]

//! Serde shape of the glyph table TOML.

use serde::{Deserialize, Serialize};

/// Schema identifier every glyph table must declare.
pub const GLYPH_SCHEMA: &str = "dinemap.category-glyphs";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlyphManifest {
    pub table: TableHeader,
    pub default: DefaultGlyph,
    #[serde(default, rename = "category")]
    pub categories: Vec<CategoryGlyph>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableHeader {
    pub schema: String,
    pub version: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultGlyph {
    pub glyph: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryGlyph {
    pub label: String,
    pub glyph: String,
}
