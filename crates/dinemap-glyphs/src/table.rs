//! The category-to-glyph lookup table.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use tracing::{debug, error};

use crate::error::GlyphError;
use crate::hash::sha256_hex;
use crate::manifest::{GLYPH_SCHEMA, GlyphManifest};

/// The canonical table shipped with the crate.
pub const CANONICAL_TOML: &str = include_str!("../glyphs/categories.toml");

/// Glyph used if even the canonical table cannot be parsed.
const LAST_RESORT_GLYPH: &str = "📍";

static CANONICAL: OnceLock<GlyphTable> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphEntry {
    pub label: String,
    pub glyph: String,
}

/// A validated category-to-glyph mapping with an explicit default.
#[derive(Debug, Clone)]
pub struct GlyphTable {
    version: u32,
    fingerprint: String,
    default_glyph: String,
    entries: Vec<GlyphEntry>,
    by_label: HashMap<String, usize>,
    by_upper: HashMap<String, usize>,
}

impl GlyphTable {
    /// The table embedded at compile time, parsed once per process.
    pub fn canonical() -> &'static GlyphTable {
        CANONICAL.get_or_init(|| {
            Self::from_toml_str(CANONICAL_TOML).unwrap_or_else(|err| {
                error!(error = %err, "canonical glyph table is invalid");
                Self::last_resort()
            })
        })
    }

    /// Load and validate a table from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self, GlyphError> {
        let text = std::fs::read_to_string(path).map_err(|e| GlyphError::io(path, e))?;
        let table = Self::from_toml_str(&text)?;
        debug!(
            path = %path.display(),
            version = table.version,
            categories = table.len(),
            "loaded glyph table"
        );
        Ok(table)
    }

    /// Parse and validate a table from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, GlyphError> {
        let manifest: GlyphManifest =
            toml::from_str(text).map_err(|source| GlyphError::Toml { source })?;
        if manifest.table.schema != GLYPH_SCHEMA {
            return Err(GlyphError::UnsupportedSchema {
                schema: manifest.table.schema,
                expected: GLYPH_SCHEMA.to_string(),
            });
        }
        let default_glyph = manifest.default.glyph.trim().to_string();
        if default_glyph.is_empty() {
            return Err(GlyphError::EmptyDefault);
        }

        let mut entries = Vec::with_capacity(manifest.categories.len());
        let mut by_label = HashMap::new();
        let mut by_upper = HashMap::new();
        for category in manifest.categories {
            let label = category.label.trim().to_string();
            let glyph = category.glyph.trim().to_string();
            if label.is_empty() {
                return Err(GlyphError::EmptyLabel);
            }
            if glyph.is_empty() {
                return Err(GlyphError::EmptyGlyph { label });
            }
            if by_label.contains_key(&label) {
                return Err(GlyphError::DuplicateLabel { label });
            }
            let idx = entries.len();
            by_label.insert(label.clone(), idx);
            by_upper.entry(label.to_uppercase()).or_insert(idx);
            entries.push(GlyphEntry { label, glyph });
        }

        Ok(Self {
            version: manifest.table.version,
            fingerprint: sha256_hex(text.as_bytes()),
            default_glyph,
            entries,
            by_label,
            by_upper,
        })
    }

    fn last_resort() -> Self {
        Self {
            version: 0,
            fingerprint: String::new(),
            default_glyph: LAST_RESORT_GLYPH.to_string(),
            entries: Vec::new(),
            by_label: HashMap::new(),
            by_upper: HashMap::new(),
        }
    }

    /// Glyph for `category`; the default glyph when the label is unmapped.
    ///
    /// Exact label match first, then a case-insensitive match.
    pub fn icon_for(&self, category: &str) -> &str {
        self.lookup(category)
            .map_or(self.default_glyph.as_str(), |entry| entry.glyph.as_str())
    }

    /// The mapped entry for `category`, without falling back.
    pub fn lookup(&self, category: &str) -> Option<&GlyphEntry> {
        let key = category.trim();
        self.by_label
            .get(key)
            .or_else(|| self.by_upper.get(&key.to_uppercase()))
            .map(|&idx| &self.entries[idx])
    }

    pub fn default_glyph(&self) -> &str {
        &self.default_glyph
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// SHA-256 of the TOML source, hex-encoded. Empty for the last-resort table.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Entries in file order.
    pub fn entries(&self) -> &[GlyphEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Glyph for `category` from the canonical table.
pub fn icon_for(category: &str) -> &'static str {
    GlyphTable::canonical().icon_for(category)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"
[table]
schema = "dinemap.category-glyphs"
version = 1

[default]
glyph = "*"

[[category]]
label = "Pizza"
glyph = "P"
"#;

    #[test]
    fn small_table_lookups() {
        let table = GlyphTable::from_toml_str(SMALL).expect("parse");
        assert_eq!(table.version(), 1);
        assert_eq!(table.icon_for("Pizza"), "P");
        assert_eq!(table.icon_for("pizza"), "P");
        assert_eq!(table.icon_for("Tapas"), "*");
        assert_eq!(table.fingerprint(), sha256_hex(SMALL.as_bytes()));
    }

    #[test]
    fn rejects_wrong_schema() {
        let text = SMALL.replace("dinemap.category-glyphs", "something.else");
        let err = GlyphTable::from_toml_str(&text).expect_err("schema");
        assert!(matches!(err, GlyphError::UnsupportedSchema { .. }));
    }

    #[test]
    fn rejects_duplicate_labels() {
        let text = format!("{SMALL}\n[[category]]\nlabel = \"Pizza\"\nglyph = \"Q\"\n");
        let err = GlyphTable::from_toml_str(&text).expect_err("duplicate");
        assert!(matches!(err, GlyphError::DuplicateLabel { label } if label == "Pizza"));
    }

    #[test]
    fn rejects_empty_glyphs() {
        let text = SMALL.replace("glyph = \"P\"", "glyph = \"  \"");
        let err = GlyphTable::from_toml_str(&text).expect_err("empty glyph");
        assert!(matches!(err, GlyphError::EmptyGlyph { .. }));

        let text = SMALL.replace("glyph = \"*\"", "glyph = \"\"");
        let err = GlyphTable::from_toml_str(&text).expect_err("empty default");
        assert!(matches!(err, GlyphError::EmptyDefault));
    }
}
