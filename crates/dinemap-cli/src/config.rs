//! Layered settings: command-line flags, then environment, then `dinemap.toml`,
//! then built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::{debug, info};

use dinemap_core::DEFAULT_ZOOM;
use dinemap_ingest::{DataSource, DatasetSources};
use dinemap_report::OSM_TILES;

pub const CONFIG_ENV: &str = "DINEMAP_CONFIG";
pub const BUSINESSES_ENV: &str = "DINEMAP_BUSINESSES_URL";
pub const REVIEWS_ENV: &str = "DINEMAP_REVIEWS_URL";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "dinemap.toml";
pub const DEFAULT_BUSINESSES: &str = "ca_rest.csv";
pub const DEFAULT_REVIEWS: &str = "ca_reviews.csv";

/// Contents of `dinemap.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub data: DataConfig,
    pub map: MapConfig,
    pub glyphs: GlyphConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    pub businesses: Option<String>,
    pub reviews: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapConfig {
    pub zoom: Option<u8>,
    pub tiles: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlyphConfig {
    pub path: Option<PathBuf>,
}

impl ConfigFile {
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub businesses: Option<String>,
    pub reviews: Option<String>,
    pub zoom: Option<u8>,
    pub glyphs: Option<PathBuf>,
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub sources: DatasetSources,
    pub zoom: u8,
    pub tiles: String,
    /// Replacement glyph table; the embedded table when `None`.
    pub glyphs: Option<PathBuf>,
    /// The config file that was read, if any.
    pub config_file: Option<PathBuf>,
}

impl Settings {
    /// Resolve against the process environment and working directory.
    pub fn load(overrides: &Overrides) -> Result<Self> {
        Self::resolve(overrides, |name| std::env::var(name).ok(), Path::new("."))
    }

    /// Resolve with an explicit environment lookup and base directory.
    ///
    /// An explicitly named config file must exist; the default
    /// `dinemap.toml` in `cwd` is only read when present.
    pub fn resolve<E>(overrides: &Overrides, env: E, cwd: &Path) -> Result<Self>
    where
        E: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| env(name).filter(|value| !value.trim().is_empty());

        let explicit = overrides
            .config
            .clone()
            .or_else(|| lookup(CONFIG_ENV).map(PathBuf::from));
        let (file, config_file) = match explicit {
            Some(path) => {
                if !path.is_file() {
                    bail!("config file not found: {}", path.display());
                }
                (ConfigFile::from_path(&path)?, Some(path))
            }
            None => {
                let path = cwd.join(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    (ConfigFile::from_path(&path)?, Some(path))
                } else {
                    debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                    (ConfigFile::default(), None)
                }
            }
        };

        let businesses = overrides
            .businesses
            .clone()
            .or_else(|| lookup(BUSINESSES_ENV))
            .or(file.data.businesses)
            .unwrap_or_else(|| DEFAULT_BUSINESSES.to_string());
        let reviews = overrides
            .reviews
            .clone()
            .or_else(|| lookup(REVIEWS_ENV))
            .or(file.data.reviews)
            .unwrap_or_else(|| DEFAULT_REVIEWS.to_string());
        let zoom = overrides.zoom.or(file.map.zoom).unwrap_or(DEFAULT_ZOOM);
        if !(1..=19).contains(&zoom) {
            bail!("map zoom must be between 1 and 19, got {zoom}");
        }

        let settings = Self {
            sources: DatasetSources {
                businesses: DataSource::parse(&businesses),
                reviews: DataSource::parse(&reviews),
            },
            zoom,
            tiles: file.map.tiles.unwrap_or_else(|| OSM_TILES.to_string()),
            glyphs: overrides.glyphs.clone().or(file.glyphs.path),
            config_file,
        };
        info!(
            businesses = %settings.sources.businesses,
            reviews = %settings.sources.reviews,
            zoom = settings.zoom,
            "settings resolved"
        );
        Ok(settings)
    }
}
