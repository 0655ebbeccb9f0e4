//! Render-ready output of one pipeline run.
//!
//! Every type here is plain data so that any presentation shell (terminal,
//! HTML, JSON) can consume it without touching the filter logic.

use serde::{Deserialize, Serialize};

use crate::criteria::{FilterCriteria, StarRange};
use crate::geo::GeoPoint;
use crate::record::{BusinessRecord, ReviewRecord};

/// Column labels of the restaurant table, in display order.
pub const TABLE_HEADERS: [&str; 4] = ["Name", "Address", "Postal Code", "Stars"];

/// A distinct category label and how many deduplicated businesses carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// One row of the restaurant table with relabeled columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Postal Code")]
    pub postal_code: String,
    #[serde(rename = "Stars")]
    pub stars: f64,
}

impl TableRow {
    /// Cells in [`TABLE_HEADERS`] order.
    pub fn cells(&self) -> [String; 4] {
        [
            self.name.clone(),
            self.address.clone(),
            self.postal_code.clone(),
            format!("{:.1}", self.stars),
        ]
    }
}

impl From<&BusinessRecord> for TableRow {
    fn from(record: &BusinessRecord) -> Self {
        Self {
            name: record.name.clone(),
            address: record.address.clone(),
            postal_code: record.postal_code.clone(),
            stars: record.stars,
        }
    }
}

/// Fixed popup content: name, category and address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupText {
    pub name: String,
    pub category: String,
    pub address: String,
}

impl PopupText {
    /// `(label, value)` pairs in display order.
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("Name", self.name.as_str()),
            ("Category", self.category.as_str()),
            ("Address", self.address.as_str()),
        ]
    }
}

impl From<&BusinessRecord> for PopupText {
    fn from(record: &BusinessRecord) -> Self {
        Self {
            name: record.name.clone(),
            category: record.categories_grouped.clone(),
            address: record.address.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub glyph: String,
    pub popup: PopupText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: GeoPoint,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
}

/// Review fields shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewDisplay {
    pub stars: f64,
    pub text: String,
    pub funny: u32,
    pub useful: u32,
    pub cool: u32,
}

impl From<&ReviewRecord> for ReviewDisplay {
    fn from(review: &ReviewRecord) -> Self {
        Self {
            stars: review.stars,
            text: review.text.clone(),
            funny: review.funny,
            useful: review.useful,
            cool: review.cool,
        }
    }
}

/// Reviews for the selected restaurant, or the explicit empty state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "reviews", rename_all = "snake_case")]
pub enum ReviewPanel {
    Reviews(Vec<ReviewDisplay>),
    Empty,
}

impl ReviewPanel {
    /// Message rendered for [`ReviewPanel::Empty`].
    pub const EMPTY_MESSAGE: &'static str = "No reviews match the selected rating range.";

    pub fn from_reviews(reviews: &[ReviewRecord]) -> Self {
        if reviews.is_empty() {
            Self::Empty
        } else {
            Self::Reviews(reviews.iter().map(ReviewDisplay::from).collect())
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Reviews(reviews) => reviews.len(),
            Self::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedRestaurant {
    pub business: BusinessRecord,
    pub review_range: StarRange,
    pub reviews: ReviewPanel,
}

/// Raw user input for one interaction.
///
/// Missing values fall back to what an untouched widget would show: the
/// first category, the full star range, no restaurant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardInput {
    pub category: Option<String>,
    pub star_range: Option<StarRange>,
    /// Business id or restaurant name from the filtered table.
    pub restaurant: Option<String>,
    pub review_star_range: Option<StarRange>,
}

/// Everything the presentation layer needs for one interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    /// Criteria after defaulting and clamping.
    pub criteria: FilterCriteria,
    pub table: Vec<TableRow>,
    pub map: MapView,
    pub selected: Option<SelectedRestaurant>,
}
