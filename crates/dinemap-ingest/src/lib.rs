//! Dataset ingestion for the restaurant explorer.
//!
//! Fetches the business and review tables (URL or local path), parses them
//! with Polars and converts rows into typed records, validating structure
//! once at load time.
//!
//! # Example
//!
//! ```ignore
//! use dinemap_ingest::{DataSource, DatasetSources, load_tables};
//!
//! let sources = DatasetSources {
//!     businesses: DataSource::parse("data/ca_rest.csv"),
//!     reviews: DataSource::parse("https://example.org/ca_reviews.csv"),
//! };
//! let tables = load_tables(&sources)?;
//! ```

mod error;
mod http;
mod loader;
mod records;
mod source;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === Sources ===
pub use http::HttpFetcher;
pub use source::{DataSource, MAX_DATASET_BYTES};

// === Loading ===
pub use loader::{DatasetSources, RawTables, load_businesses, load_reviews, load_tables};

// === Decoding ===
pub use records::{BUSINESS_COLUMNS, REVIEW_COLUMNS, businesses_from_frame, reviews_from_frame};
pub use table::{ColumnIndex, read_csv_bytes};
