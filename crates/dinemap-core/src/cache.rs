//! Load-once dataset cache.
//!
//! The dataset is fetched at most once per cache and never invalidated.
//! [`DatasetCache::global`] is the single process-wide initialization point;
//! the cached `Arc<Dataset>` is read-only and safe to share between readers.

use std::sync::{Arc, OnceLock};

use tracing::{debug, warn};

use dinemap_ingest::{DatasetSources, IngestError, RawTables, load_tables};

use crate::dataset::Dataset;
use crate::error::LoadError;

static PROCESS_CACHE: DatasetCache = DatasetCache::new();

struct Cached {
    sources: Option<DatasetSources>,
    dataset: Arc<Dataset>,
}

pub struct DatasetCache {
    cell: OnceLock<Cached>,
}

impl DatasetCache {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// The process-wide cache.
    pub fn global() -> &'static DatasetCache {
        &PROCESS_CACHE
    }

    /// The cached dataset, loading it from `sources` on first use.
    ///
    /// Later calls return the first dataset even if `sources` differ.
    pub fn get_or_load(&self, sources: &DatasetSources) -> Result<Arc<Dataset>, LoadError> {
        if let Some(cached) = self.cell.get() {
            if cached.sources.as_ref() != Some(sources) {
                warn!("dataset already cached from other sources; keeping the cached copy");
            }
            debug!("using cached dataset");
            return Ok(Arc::clone(&cached.dataset));
        }
        self.init(Some(sources.clone()), || load_tables(sources))
    }

    /// The cached dataset, building it from `load` on first use.
    pub fn get_or_init_with<F>(&self, load: F) -> Result<Arc<Dataset>, LoadError>
    where
        F: FnOnce() -> Result<RawTables, IngestError>,
    {
        if let Some(cached) = self.cell.get() {
            return Ok(Arc::clone(&cached.dataset));
        }
        self.init(None, load)
    }

    /// The dataset if it has been loaded.
    pub fn get(&self) -> Option<Arc<Dataset>> {
        self.cell.get().map(|cached| Arc::clone(&cached.dataset))
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    fn init<F>(&self, sources: Option<DatasetSources>, load: F) -> Result<Arc<Dataset>, LoadError>
    where
        F: FnOnce() -> Result<RawTables, IngestError>,
    {
        let dataset = Arc::new(Dataset::assemble(load()?)?);
        // A concurrent initializer may have won; its dataset is kept.
        let cached = self.cell.get_or_init(|| Cached { sources, dataset });
        Ok(Arc::clone(&cached.dataset))
    }
}

impl Default for DatasetCache {
    fn default() -> Self {
        Self::new()
    }
}
