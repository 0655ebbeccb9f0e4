//! Polars `AnyValue` conversion helpers.

use polars::prelude::AnyValue;

/// Converts a cell to trimmed text; `Null` becomes an empty string.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use dinemap_common::cell_text;
///
/// assert_eq!(cell_text(AnyValue::Null), "");
/// assert_eq!(cell_text(AnyValue::String("  Pizza ")), "Pizza");
/// assert_eq!(cell_text(AnyValue::Int64(93101)), "93101");
/// ```
pub fn cell_text(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.trim().to_string(),
        AnyValue::StringOwned(s) => s.trim().to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_stars(f64::from(v)),
        AnyValue::Float64(v) => format_stars(v),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string().trim().to_string(),
    }
}

/// Like [`cell_text`] but `None` for blank cells.
pub fn cell_text_non_empty(value: AnyValue<'_>) -> Option<String> {
    let text = cell_text(value);
    if text.is_empty() { None } else { Some(text) }
}

/// Converts a numeric or numeric-looking text cell to `f64`.
///
/// Returns `None` for nulls, blanks, unparsable text and non-finite values.
pub fn cell_f64(value: AnyValue<'_>) -> Option<f64> {
    let number = match value {
        AnyValue::Null => None,
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

/// Converts a vote-count cell to `u32`. Blank cells count as zero.
///
/// Returns `None` only for negative or unparsable values.
pub fn cell_count(value: AnyValue<'_>) -> Option<u32> {
    match value {
        AnyValue::Null => Some(0),
        AnyValue::Int32(v) => u32::try_from(v).ok(),
        AnyValue::Int64(v) => u32::try_from(v).ok(),
        AnyValue::UInt32(v) => Some(v),
        AnyValue::UInt64(v) => u32::try_from(v).ok(),
        AnyValue::String(s) => parse_count(s),
        AnyValue::StringOwned(s) => parse_count(&s),
        _ => None,
    }
}

/// Parses a string as `f64`, returning `None` for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Parses a vote count. Blank is zero; exports sometimes write counts as `3.0`.
pub fn parse_count(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    if let Ok(count) = trimmed.parse::<u32>() {
        return Some(count);
    }
    let float = trimmed.parse::<f64>().ok()?;
    if float.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&float) {
        Some(float as u32)
    } else {
        None
    }
}

/// Formats a rating without trailing zeros.
///
/// # Examples
///
/// ```
/// use dinemap_common::format_stars;
///
/// assert_eq!(format_stars(4.0), "4");
/// assert_eq!(format_stars(3.5), "3.5");
/// assert_eq!(format_stars(0.0), "0");
/// ```
pub fn format_stars(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text_trims() {
        assert_eq!(cell_text(AnyValue::String(" Taco Bar ")), "Taco Bar");
        assert_eq!(cell_text(AnyValue::Null), "");
        assert_eq!(cell_text(AnyValue::Float64(4.5)), "4.5");
    }

    #[test]
    fn test_cell_text_non_empty() {
        assert_eq!(cell_text_non_empty(AnyValue::String("   ")), None);
        assert_eq!(
            cell_text_non_empty(AnyValue::String("Mexican")),
            Some("Mexican".to_string())
        );
    }

    #[test]
    fn test_cell_f64() {
        assert_eq!(cell_f64(AnyValue::String("34.42")), Some(34.42));
        assert_eq!(cell_f64(AnyValue::String("-119.7")), Some(-119.7));
        assert_eq!(cell_f64(AnyValue::Int64(4)), Some(4.0));
        assert_eq!(cell_f64(AnyValue::String("north")), None);
        assert_eq!(cell_f64(AnyValue::String("NaN")), None);
        assert_eq!(cell_f64(AnyValue::Null), None);
    }

    #[test]
    fn test_cell_count() {
        assert_eq!(cell_count(AnyValue::Null), Some(0));
        assert_eq!(cell_count(AnyValue::String("")), Some(0));
        assert_eq!(cell_count(AnyValue::String("7")), Some(7));
        assert_eq!(cell_count(AnyValue::String("3.0")), Some(3));
        assert_eq!(cell_count(AnyValue::String("2.5")), None);
        assert_eq!(cell_count(AnyValue::Int64(-1)), None);
    }

    #[test]
    fn test_format_stars() {
        assert_eq!(format_stars(5.0), "5");
        assert_eq!(format_stars(4.5), "4.5");
        assert_eq!(format_stars(10.0), "10");
    }
}
