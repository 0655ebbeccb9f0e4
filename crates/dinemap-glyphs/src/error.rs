#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GlyphError {
    #[error("failed to read glyph table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse glyph table: {source}")]
    Toml {
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported glyph table schema '{schema}' (expected '{expected}')")]
    UnsupportedSchema { schema: String, expected: String },

    #[error("glyph table has an empty default glyph")]
    EmptyDefault,

    #[error("category '{label}' has an empty glyph")]
    EmptyGlyph { label: String },

    #[error("category label is empty")]
    EmptyLabel,

    #[error("duplicate category label in glyph table: {label}")]
    DuplicateLabel { label: String },
}

impl GlyphError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
