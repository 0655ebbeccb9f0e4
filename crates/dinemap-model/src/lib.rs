pub mod criteria;
pub mod error;
pub mod geo;
pub mod lookup;
pub mod record;
pub mod view;

pub use criteria::{FilterCriteria, StarBounds, StarRange};
pub use error::DashboardError;
pub use geo::GeoPoint;
pub use lookup::CaseInsensitiveSet;
pub use record::{BusinessRecord, OTHER_CATEGORY, ReviewRecord};
pub use view::{
    CategoryCount, DashboardInput, DashboardView, MapMarker, MapView, PopupText, ReviewDisplay,
    ReviewPanel, SelectedRestaurant, TABLE_HEADERS, TableRow,
};
