use std::collections::HashSet;

use tracing::debug;

use dinemap_model::BusinessRecord;

/// Collapse `records` to one row per `business_id`.
///
/// The first row for each id survives whole; later rows with the same id are
/// dropped without merging any of their fields. Output keeps the relative
/// order of first occurrences.
pub fn dedupe(records: &[BusinessRecord]) -> Vec<BusinessRecord> {
    let mut seen = HashSet::with_capacity(records.len());
    let kept: Vec<BusinessRecord> = records
        .iter()
        .filter(|record| seen.insert(record.business_id.as_str()))
        .cloned()
        .collect();
    let dropped = records.len() - kept.len();
    if dropped > 0 {
        debug!(kept = kept.len(), dropped, "dropped duplicate business rows");
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, address: &str) -> BusinessRecord {
        BusinessRecord {
            business_id: id.to_string(),
            name: format!("Business {id}"),
            address: address.to_string(),
            postal_code: "93101".to_string(),
            categories_grouped: "Italian".to_string(),
            stars: 4.0,
            latitude: 34.42,
            longitude: -119.70,
        }
    }

    #[test]
    fn first_occurrence_wins() {
        let records = vec![
            record("1", "first"),
            record("2", "only"),
            record("1", "dup"),
            record("3", "only"),
            record("2", "dup"),
        ];
        let out = dedupe(&records);
        let ids: Vec<&str> = out.iter().map(|r| r.business_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(out[0].address, "first");
        assert_eq!(out[1].address, "only");
    }

    #[test]
    fn empty_input() {
        assert!(dedupe(&[]).is_empty());
    }
}
