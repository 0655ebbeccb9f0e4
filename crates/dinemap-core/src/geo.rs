//! Map centering.

use dinemap_model::{BusinessRecord, DashboardError, GeoPoint};

/// Arithmetic mean of the coordinates in `records`; `None` when empty.
pub fn mean_point(records: &[BusinessRecord]) -> Option<GeoPoint> {
    if records.is_empty() {
        return None;
    }
    let count = records.len() as f64;
    let (lat_sum, lon_sum) = records.iter().fold((0.0, 0.0), |(lat, lon), record| {
        (lat + record.latitude, lon + record.longitude)
    });
    Some(GeoPoint::new(lat_sum / count, lon_sum / count))
}

/// Center of `records`, or of `fallback_records` when the selection is empty.
///
/// Only a fully empty pair is an error: there is nothing to average.
pub fn center(
    records: &[BusinessRecord],
    fallback_records: &[BusinessRecord],
) -> Result<GeoPoint, DashboardError> {
    mean_point(records)
        .or_else(|| mean_point(fallback_records))
        .ok_or(DashboardError::DegenerateDataset)
}

/// Center of `records`, or a precomputed fallback center when empty.
pub fn center_or(records: &[BusinessRecord], fallback: GeoPoint) -> GeoPoint {
    mean_point(records).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(latitude: f64, longitude: f64) -> BusinessRecord {
        BusinessRecord {
            business_id: format!("{latitude},{longitude}"),
            name: String::new(),
            address: String::new(),
            postal_code: String::new(),
            categories_grouped: "Other".to_string(),
            stars: 3.0,
            latitude,
            longitude,
        }
    }

    #[test]
    fn mean_of_selection() {
        let records = vec![at(34.0, -119.0), at(35.0, -120.0)];
        let point = center(&records, &[]).expect("center");
        assert!((point.latitude - 34.5).abs() < 1e-9);
        assert!((point.longitude + 119.5).abs() < 1e-9);
    }

    #[test]
    fn selection_ignores_fallback() {
        let records = vec![at(10.0, 10.0)];
        let fallback = vec![at(50.0, 50.0)];
        assert_eq!(center(&records, &fallback).expect("center"), GeoPoint::new(10.0, 10.0));
    }

    #[test]
    fn empty_selection_uses_fallback() {
        let fallback = vec![at(34.42, -119.70)];
        let point = center(&[], &fallback).expect("center");
        assert_eq!(point, GeoPoint::new(34.42, -119.70));
        assert!(point.is_finite());
    }

    #[test]
    fn both_empty_is_degenerate() {
        assert!(matches!(
            center(&[], &[]),
            Err(DashboardError::DegenerateDataset)
        ));
    }

    #[test]
    fn center_or_uses_precomputed_fallback() {
        let fallback = GeoPoint::new(1.0, 2.0);
        assert_eq!(center_or(&[], fallback), fallback);
        assert_eq!(center_or(&[at(3.0, 4.0)], fallback), GeoPoint::new(3.0, 4.0));
    }
}
