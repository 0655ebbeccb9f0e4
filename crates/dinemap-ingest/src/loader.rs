//! Load both tables from their sources.

use std::time::Instant;

use tracing::{info, info_span};

use dinemap_model::{BusinessRecord, ReviewRecord};

use crate::error::Result;
use crate::http::HttpFetcher;
use crate::records::{businesses_from_frame, reviews_from_frame};
use crate::source::DataSource;
use crate::table::read_csv_bytes;

/// Locations of the business and review tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSources {
    pub businesses: DataSource,
    pub reviews: DataSource,
}

/// Both tables as loaded, before deduplication.
#[derive(Debug, Clone, Default)]
pub struct RawTables {
    pub businesses: Vec<BusinessRecord>,
    pub reviews: Vec<ReviewRecord>,
}

/// Fetch and decode both tables.
pub fn load_tables(sources: &DatasetSources) -> Result<RawTables> {
    let span = info_span!("load", businesses = %sources.businesses, reviews = %sources.reviews);
    let _guard = span.enter();
    let start = Instant::now();

    let fetcher = HttpFetcher::new()?;
    let businesses = load_businesses(&sources.businesses, &fetcher)?;
    let reviews = load_reviews(&sources.reviews, &fetcher)?;

    info!(
        businesses = businesses.len(),
        reviews = reviews.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "dataset loaded"
    );
    Ok(RawTables {
        businesses,
        reviews,
    })
}

/// Fetch and decode the business table.
pub fn load_businesses(source: &DataSource, fetcher: &HttpFetcher) -> Result<Vec<BusinessRecord>> {
    let origin = source.to_string();
    let df = read_csv_bytes(source.read_bytes(fetcher)?, &origin)?;
    businesses_from_frame(&df, &origin)
}

/// Fetch and decode the review table.
pub fn load_reviews(source: &DataSource, fetcher: &HttpFetcher) -> Result<Vec<ReviewRecord>> {
    let origin = source.to_string();
    let df = read_csv_bytes(source.read_bytes(fetcher)?, &origin)?;
    reviews_from_frame(&df, &origin)
}
