//! The filter engine.

use std::collections::BTreeMap;

use dinemap_model::{BusinessRecord, CategoryCount, FilterCriteria, StarBounds};

/// Records in `category` rated within `[star_min, star_max]`, in input order.
///
/// Category comparison is exact. A reversed range (`star_min > star_max`)
/// yields an empty result, as does a category nobody carries.
pub fn filter(
    records: &[BusinessRecord],
    category: &str,
    star_min: f64,
    star_max: f64,
) -> Vec<BusinessRecord> {
    records
        .iter()
        .filter(|record| record.matches(category, star_min, star_max))
        .cloned()
        .collect()
}

/// [`filter`] driven by a [`FilterCriteria`].
pub fn filter_with(records: &[BusinessRecord], criteria: &FilterCriteria) -> Vec<BusinessRecord> {
    filter(
        records,
        &criteria.category,
        criteria.star_range.min,
        criteria.star_range.max,
    )
}

/// Distinct category labels, sorted, with how many records carry each.
pub fn distinct_categories(records: &[BusinessRecord]) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.categories_grouped.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect()
}

/// Global star bounds of `records`, or the 1–5 rating scale when empty.
pub fn star_bounds(records: &[BusinessRecord]) -> StarBounds {
    StarBounds::of_or_scale(records.iter().map(|record| record.stars))
}
