//! End-to-end pipeline scenarios against in-memory tables.

use dinemap_core::{
    Dataset, DEFAULT_ZOOM, PipelineOptions, dedupe, filter, reviews_for, run_pipeline,
};
use dinemap_glyphs::GlyphTable;
use dinemap_ingest::RawTables;
use dinemap_model::{
    BusinessRecord, DashboardError, DashboardInput, GeoPoint, ReviewPanel, ReviewRecord,
    StarRange,
};

fn business(id: &str, category: &str, stars: f64) -> BusinessRecord {
    BusinessRecord {
        business_id: id.to_string(),
        name: format!("Restaurant {id}"),
        address: format!("{id} State St"),
        postal_code: "93101".to_string(),
        categories_grouped: category.to_string(),
        stars,
        latitude: 34.42,
        longitude: -119.70,
    }
}

fn review(id: &str, stars: f64) -> ReviewRecord {
    ReviewRecord {
        business_id: id.to_string(),
        text: format!("{stars} stars for {id}"),
        stars,
        funny: 0,
        useful: 1,
        cool: 0,
    }
}

fn scenario_businesses() -> Vec<BusinessRecord> {
    let mut dup = business("1", "Italian", 4.0);
    dup.address = "dup".to_string();
    vec![business("1", "Italian", 4.0), dup, business("2", "Mexican", 3.0)]
}

fn scenario_reviews() -> Vec<ReviewRecord> {
    vec![review("1", 5.0), review("1", 2.0), review("2", 4.0)]
}

fn dataset() -> Dataset {
    Dataset::assemble(RawTables {
        businesses: scenario_businesses(),
        reviews: scenario_reviews(),
    })
    .expect("assemble")
}

#[test]
fn dedupe_then_filter_scenario() {
    let deduped = dedupe(&scenario_businesses());
    assert_eq!(deduped.len(), 2);
    assert_eq!(deduped[0].business_id, "1");
    assert_eq!(deduped[0].address, "1 State St");
    assert_eq!(deduped[1].business_id, "2");

    let italian = filter(&deduped, "Italian", 3.5, 5.0);
    assert_eq!(italian.len(), 1);
    assert_eq!(italian[0].business_id, "1");

    assert!(filter(&deduped, "Italian", 1.0, 2.0).is_empty());
}

#[test]
fn review_scenario() {
    let selected = reviews_for(&scenario_reviews(), "1", 3.0, 5.0);
    assert_eq!(selected, vec![review("1", 5.0)]);
}

#[test]
fn assemble_records_derived_state() {
    let dataset = dataset();
    assert_eq!(dataset.businesses().len(), 2);
    assert_eq!(dataset.duplicates_dropped(), 1);
    let labels: Vec<&str> = dataset
        .categories()
        .iter()
        .map(|c| c.category.as_str())
        .collect();
    assert_eq!(labels, vec!["Italian", "Mexican"]);
    assert_eq!(dataset.star_bounds().min, 3.0);
    assert_eq!(dataset.star_bounds().max, 4.0);
    assert_eq!(dataset.review_star_bounds().min, 2.0);
    assert_eq!(dataset.review_star_bounds().max, 5.0);
    assert!(dataset.has_category("Mexican"));
    assert!(!dataset.has_category("Thai"));
}

#[test]
fn assemble_rejects_empty_business_table() {
    let err = Dataset::assemble(RawTables {
        businesses: Vec::new(),
        reviews: scenario_reviews(),
    })
    .expect_err("degenerate");
    assert!(matches!(err, DashboardError::DegenerateDataset));
}

#[test]
fn empty_review_table_uses_rating_scale() {
    let dataset = Dataset::assemble(RawTables {
        businesses: scenario_businesses(),
        reviews: Vec::new(),
    })
    .expect("dataset");
    assert_eq!(dataset.review_star_bounds().min, 1.0);
    assert_eq!(dataset.review_star_bounds().max, 5.0);

    let input = DashboardInput {
        category: Some("Italian".to_string()),
        restaurant: Some("restaurant 1".to_string()),
        ..DashboardInput::default()
    };
    let view = run_pipeline(&dataset, &input, &PipelineOptions::default());
    let selected = view.selected.expect("restaurant selected");
    assert_eq!(selected.review_range, StarRange::new(1.0, 5.0));
    assert_eq!(selected.reviews, ReviewPanel::Empty);
}

#[test]
fn empty_selection_centers_on_full_dataset() {
    let dataset = dataset();
    let input = DashboardInput {
        category: Some("Thai".to_string()),
        ..DashboardInput::default()
    };
    let view = run_pipeline(&dataset, &input, &PipelineOptions::default());

    assert!(view.table.is_empty());
    assert!(view.map.markers.is_empty());
    assert!(view.map.center.is_finite());
    assert_eq!(view.map.center, GeoPoint::new(34.42, -119.70));
    assert_eq!(view.map.center, dataset.fallback_center());
}

#[test]
fn default_input_selects_first_category_and_full_range() {
    let dataset = dataset();
    let view = run_pipeline(&dataset, &DashboardInput::default(), &PipelineOptions::default());

    assert_eq!(view.criteria.category, "Italian");
    assert_eq!(view.criteria.star_range, StarRange::new(3.0, 4.0));
    assert_eq!(view.table.len(), 1);
    assert_eq!(view.table[0].name, "Restaurant 1");
    assert_eq!(view.map.zoom, DEFAULT_ZOOM);
    assert!(view.selected.is_none());
}

#[test]
fn star_range_is_clamped_to_bounds() {
    let dataset = dataset();
    let input = DashboardInput {
        category: Some("Mexican".to_string()),
        star_range: Some(StarRange::new(5.0, 0.0)),
        ..DashboardInput::default()
    };
    let view = run_pipeline(&dataset, &input, &PipelineOptions::default());
    assert_eq!(view.criteria.star_range, StarRange::new(3.0, 4.0));
    assert_eq!(view.table.len(), 1);
}

#[test]
fn markers_carry_glyph_and_fixed_popup() {
    let dataset = dataset();
    let glyphs = GlyphTable::canonical();
    let input = DashboardInput {
        category: Some("Mexican".to_string()),
        ..DashboardInput::default()
    };
    let view = run_pipeline(&dataset, &input, &PipelineOptions::default());

    let marker = &view.map.markers[0];
    assert_eq!(marker.glyph, glyphs.icon_for("Mexican"));
    assert_eq!(marker.popup.name, "Restaurant 2");
    assert_eq!(marker.popup.category, "Mexican");
    assert_eq!(marker.popup.address, "2 State St");
}

#[test]
fn selected_restaurant_reviews_by_name() {
    let dataset = dataset();
    let input = DashboardInput {
        category: Some("Italian".to_string()),
        restaurant: Some("restaurant 1".to_string()),
        review_star_range: Some(StarRange::new(3.0, 5.0)),
        ..DashboardInput::default()
    };
    let view = run_pipeline(&dataset, &input, &PipelineOptions::default());

    let selected = view.selected.expect("restaurant selected");
    assert_eq!(selected.business.business_id, "1");
    assert_eq!(selected.review_range, StarRange::new(3.0, 5.0));
    match selected.reviews {
        ReviewPanel::Reviews(reviews) => {
            assert_eq!(reviews.len(), 1);
            assert_eq!(reviews[0].stars, 5.0);
        }
        ReviewPanel::Empty => panic!("expected reviews"),
    }
}

#[test]
fn no_matching_reviews_is_explicit_empty_state() {
    let dataset = dataset();
    let input = DashboardInput {
        category: Some("Mexican".to_string()),
        restaurant: Some("2".to_string()),
        review_star_range: Some(StarRange::new(2.0, 3.0)),
        ..DashboardInput::default()
    };
    let view = run_pipeline(&dataset, &input, &PipelineOptions::default());
    let selected = view.selected.expect("restaurant selected");
    assert_eq!(selected.reviews, ReviewPanel::Empty);
}

#[test]
fn restaurant_outside_filtered_table_is_not_selected() {
    let dataset = dataset();
    let input = DashboardInput {
        category: Some("Mexican".to_string()),
        restaurant: Some("1".to_string()),
        ..DashboardInput::default()
    };
    let view = run_pipeline(&dataset, &input, &PipelineOptions::default());
    assert!(view.selected.is_none());
}

#[test]
fn pipeline_is_repeatable() {
    let dataset = dataset();
    let input = DashboardInput {
        category: Some("Italian".to_string()),
        star_range: Some(StarRange::new(3.5, 5.0)),
        restaurant: Some("1".to_string()),
        review_star_range: None,
    };
    let options = PipelineOptions::default();
    assert_eq!(
        run_pipeline(&dataset, &input, &options),
        run_pipeline(&dataset, &input, &options)
    );
}
