//! Row types loaded from the business and review tables.
//!
//! Both record types are created once at load time and never mutated;
//! filtering produces new vectors of clones.

use serde::{Deserialize, Serialize};

/// Category label used when a business row has no grouped category.
pub const OTHER_CATEGORY: &str = "Other";

/// One restaurant listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessRecord {
    /// Dedup and join key; never empty.
    pub business_id: String,
    pub name: String,
    pub address: String,
    pub postal_code: String,
    /// Grouped cuisine label, `"Other"` when the source cell is blank.
    pub categories_grouped: String,
    /// Aggregate rating in `[1.0, 5.0]`.
    pub stars: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl BusinessRecord {
    /// True when the record belongs to `category` and its rating is within `[min, max]`.
    pub fn matches(&self, category: &str, min: f64, max: f64) -> bool {
        self.categories_grouped == category && min <= self.stars && self.stars <= max
    }
}

/// One user review, tied to a business by `business_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub business_id: String,
    pub text: String,
    pub stars: f64,
    pub funny: u32,
    pub useful: u32,
    pub cool: u32,
}
