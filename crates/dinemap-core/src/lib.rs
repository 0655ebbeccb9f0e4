//! Restaurant explorer core.
//!
//! - **dedupe**: one business row per `business_id`, first occurrence wins
//! - **filter**: category + inclusive star-range conjunction
//! - **geo**: mean-coordinate map center with a full-dataset fallback
//! - **reviews**: per-restaurant review selection by star range
//! - **dataset**: the deduplicated, read-only tables plus derived bounds
//! - **cache**: process-wide load-once dataset cache
//! - **pipeline**: one pure function from (dataset, input) to a render-ready view

pub mod cache;
pub mod dataset;
pub mod dedupe;
pub mod error;
pub mod filter;
pub mod geo;
pub mod pipeline;
pub mod reviews;

pub use cache::DatasetCache;
pub use dataset::Dataset;
pub use dedupe::dedupe;
pub use error::LoadError;
pub use filter::{distinct_categories, filter, filter_with, star_bounds};
pub use geo::{center, center_or, mean_point};
pub use pipeline::{DEFAULT_ZOOM, PipelineOptions, run_pipeline};
pub use reviews::{find_business, reviews_for};
