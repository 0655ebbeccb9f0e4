#![deny(unsafe_code)]

pub mod error;
pub mod hash;
pub mod manifest;
pub mod table;

pub use crate::error::GlyphError;
pub use crate::table::{CANONICAL_TOML, GlyphEntry, GlyphTable, icon_for};
