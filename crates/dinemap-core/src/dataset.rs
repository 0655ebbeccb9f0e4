//! The loaded, deduplicated tables and everything derived from them once.

use tracing::{info, info_span};

use dinemap_ingest::RawTables;
use dinemap_model::{
    BusinessRecord, CategoryCount, DashboardError, GeoPoint, ReviewRecord, StarBounds,
};

use crate::dedupe::dedupe;
use crate::filter::{distinct_categories, star_bounds};
use crate::geo::center;

/// Read-only tables shared by every interaction.
#[derive(Debug, Clone)]
pub struct Dataset {
    businesses: Vec<BusinessRecord>,
    reviews: Vec<ReviewRecord>,
    categories: Vec<CategoryCount>,
    star_bounds: StarBounds,
    review_star_bounds: StarBounds,
    fallback_center: GeoPoint,
    duplicates_dropped: usize,
}

impl Dataset {
    /// Deduplicate the business table and precompute bounds and the fallback center.
    ///
    /// Fails with [`DashboardError::DegenerateDataset`] when there are no
    /// businesses, since no map center exists.
    pub fn assemble(raw: RawTables) -> Result<Self, DashboardError> {
        let span = info_span!("dedupe", raw_businesses = raw.businesses.len());
        let _guard = span.enter();

        let businesses = dedupe(&raw.businesses);
        let duplicates_dropped = raw.businesses.len() - businesses.len();
        let fallback_center = center(&[], &businesses)?;
        let categories = distinct_categories(&businesses);
        let star_bounds = star_bounds(&businesses);
        let review_star_bounds = StarBounds::of_or_scale(raw.reviews.iter().map(|r| r.stars));

        info!(
            businesses = businesses.len(),
            duplicates_dropped,
            reviews = raw.reviews.len(),
            categories = categories.len(),
            center = %fallback_center,
            "dataset assembled"
        );
        Ok(Self {
            businesses,
            reviews: raw.reviews,
            categories,
            star_bounds,
            review_star_bounds,
            fallback_center,
            duplicates_dropped,
        })
    }

    /// Deduplicated businesses in first-occurrence order.
    pub fn businesses(&self) -> &[BusinessRecord] {
        &self.businesses
    }

    pub fn reviews(&self) -> &[ReviewRecord] {
        &self.reviews
    }

    /// Sorted distinct categories; the selectable set for the category input.
    pub fn categories(&self) -> &[CategoryCount] {
        &self.categories
    }

    pub fn star_bounds(&self) -> StarBounds {
        self.star_bounds
    }

    pub fn review_star_bounds(&self) -> StarBounds {
        self.review_star_bounds
    }

    /// Mean coordinate of every deduplicated business.
    pub fn fallback_center(&self) -> GeoPoint {
        self.fallback_center
    }

    pub fn duplicates_dropped(&self) -> usize {
        self.duplicates_dropped
    }

    /// Whether `category` is one of the loaded labels.
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c.category == category)
    }
}
