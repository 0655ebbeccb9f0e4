//! One interaction: user input in, render-ready view out.

use tracing::{debug, info_span};

use dinemap_glyphs::GlyphTable;
use dinemap_model::{
    DashboardInput, DashboardView, FilterCriteria, MapMarker, MapView, PopupText, ReviewPanel,
    SelectedRestaurant, TableRow,
};

use crate::dataset::Dataset;
use crate::filter::filter_with;
use crate::geo::center_or;
use crate::reviews::{find_business, reviews_for};

/// Initial map zoom level.
pub const DEFAULT_ZOOM: u8 = 12;

/// Rendering knobs that do not come from the user's selection.
#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions<'a> {
    pub glyphs: &'a GlyphTable,
    pub zoom: u8,
}

impl Default for PipelineOptions<'static> {
    fn default() -> Self {
        Self {
            glyphs: GlyphTable::canonical(),
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// Run the whole filter-and-render pipeline against `dataset`.
///
/// Pure: the same dataset, input and options always yield an equal view.
/// A missing category selects the first category; a missing star range
/// selects the full bounds. Both ranges are clamped to their table's bounds.
pub fn run_pipeline(
    dataset: &Dataset,
    input: &DashboardInput,
    options: &PipelineOptions<'_>,
) -> DashboardView {
    let span = info_span!("pipeline");
    let _guard = span.enter();

    let bounds = dataset.star_bounds();
    let category = input
        .category
        .clone()
        .or_else(|| dataset.categories().first().map(|c| c.category.clone()))
        .unwrap_or_default();
    let star_range = input.star_range.unwrap_or_else(|| bounds.full_range());
    let criteria = FilterCriteria::new(category, star_range).clamped(bounds);

    let filtered = filter_with(dataset.businesses(), &criteria);
    let table = filtered.iter().map(TableRow::from).collect();
    let markers = filtered
        .iter()
        .map(|record| MapMarker {
            latitude: record.latitude,
            longitude: record.longitude,
            glyph: options.glyphs.icon_for(&record.categories_grouped).to_string(),
            popup: PopupText::from(record),
        })
        .collect();
    let map = MapView {
        center: center_or(&filtered, dataset.fallback_center()),
        zoom: options.zoom,
        markers,
    };

    let selected = input
        .restaurant
        .as_deref()
        .and_then(|key| find_business(&filtered, key))
        .map(|business| {
            let review_bounds = dataset.review_star_bounds();
            let review_range = input
                .review_star_range
                .unwrap_or_else(|| review_bounds.full_range())
                .clamp_to(review_bounds);
            let reviews = reviews_for(
                dataset.reviews(),
                &business.business_id,
                review_range.min,
                review_range.max,
            );
            SelectedRestaurant {
                business: business.clone(),
                review_range,
                reviews: ReviewPanel::from_reviews(&reviews),
            }
        });

    debug!(
        category = %criteria.category,
        range = %criteria.star_range,
        matches = filtered.len(),
        selected = selected.is_some(),
        "pipeline complete"
    );
    DashboardView {
        criteria,
        table,
        map,
        selected,
    }
}
