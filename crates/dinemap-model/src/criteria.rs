//! Filter criteria rebuilt from user input on every interaction.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Inclusive star-rating interval.
///
/// A range with `min > max` is representable; it matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarRange {
    pub min: f64,
    pub max: f64,
}

impl StarRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, stars: f64) -> bool {
        self.min <= stars && stars <= self.max
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }

    /// Clamp both ends into `bounds`, swapping a reversed range first.
    ///
    /// The result always satisfies `bounds.min <= min <= max <= bounds.max`.
    /// NaN ends fall back to the matching bound.
    #[must_use]
    pub fn clamp_to(self, bounds: StarBounds) -> Self {
        let lo = if self.min.is_nan() { bounds.min } else { self.min };
        let hi = if self.max.is_nan() { bounds.max } else { self.max };
        let (lo, hi) = if lo > hi { (hi, lo) } else { (lo, hi) };
        Self {
            min: lo.clamp(bounds.min, bounds.max),
            max: hi.clamp(bounds.min, bounds.max),
        }
    }
}

impl fmt::Display for StarRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}–{:.1}", self.min, self.max)
    }
}

/// Global minimum and maximum of a table's `stars` column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarBounds {
    pub min: f64,
    pub max: f64,
}

impl StarBounds {
    /// The rating scale used when a table has no rows.
    pub const RATING_SCALE: Self = Self { min: 1.0, max: 5.0 };

    /// Bounds of `values`, ignoring NaN; `None` when nothing is left.
    pub fn of<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        values
            .into_iter()
            .filter(|value| !value.is_nan())
            .fold(None, |acc, value| match acc {
                None => Some(Self {
                    min: value,
                    max: value,
                }),
                Some(bounds) => Some(Self {
                    min: bounds.min.min(value),
                    max: bounds.max.max(value),
                }),
            })
    }

    /// Bounds of `values`, or [`StarBounds::RATING_SCALE`] for an empty table.
    pub fn of_or_scale<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        Self::of(values).unwrap_or(Self::RATING_SCALE)
    }

    /// The widest range these bounds allow.
    pub fn full_range(&self) -> StarRange {
        StarRange::new(self.min, self.max)
    }
}

/// Category plus star range, the conjunction applied by the filter engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub category: String,
    pub star_range: StarRange,
}

impl FilterCriteria {
    pub fn new(category: impl Into<String>, star_range: StarRange) -> Self {
        Self {
            category: category.into(),
            star_range,
        }
    }

    /// Same category with the star range clamped into `bounds`.
    #[must_use]
    pub fn clamped(&self, bounds: StarBounds) -> Self {
        Self {
            category: self.category.clone(),
            star_range: self.star_range.clamp_to(bounds),
        }
    }
}
