//! Review selection for the chosen restaurant.

use dinemap_model::{BusinessRecord, ReviewRecord};

/// Reviews of `business_id` rated within `[star_min, star_max]`, in input order.
pub fn reviews_for(
    reviews: &[ReviewRecord],
    business_id: &str,
    star_min: f64,
    star_max: f64,
) -> Vec<ReviewRecord> {
    reviews
        .iter()
        .filter(|review| review.business_id == business_id)
        .filter(|review| star_min <= review.stars && review.stars <= star_max)
        .cloned()
        .collect()
}

/// Resolve a restaurant selection within `records`.
///
/// Tries an exact `business_id`, then an exact name, then a case-insensitive
/// name. The first match in input order wins.
pub fn find_business<'a>(records: &'a [BusinessRecord], key: &str) -> Option<&'a BusinessRecord> {
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    records
        .iter()
        .find(|record| record.business_id == key)
        .or_else(|| records.iter().find(|record| record.name == key))
        .or_else(|| {
            records
                .iter()
                .find(|record| record.name.eq_ignore_ascii_case(key))
        })
}
