use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product identifier (UUID v4 content).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Product rating clamped to [0.0, 5.0].
/// Recomputed as the mean of all review ratings when a review lands.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(f64);

impl Rating {
    /// Upper bound of the rating scale.
    pub const MAX: f64 = 5.0;

    /// Create a new Rating, clamping to [0.0, 5.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, Self::MAX))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Total-order comparison for descending sorts. NaN cannot occur:
    /// the constructor clamps, and clamp of NaN is rejected at review intake.
    pub fn cmp_desc(self, other: Self) -> std::cmp::Ordering {
        other
            .0
            .partial_cmp(&self.0)
            .unwrap_or(std::cmp::Ordering::Equal)
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(0.0)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl From<f64> for Rating {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// A catalog product. The single `category` tag is what category-affinity
/// scoring keys on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Single string tag, e.g. "Electronics".
    pub category: String,
    pub price: f64,
    pub rating: Rating,
    /// Image URL served by the storefront.
    pub image: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_clamps_out_of_range_values() {
        assert_eq!(Rating::new(7.3).value(), 5.0);
        assert_eq!(Rating::new(-1.0).value(), 0.0);
        assert_eq!(Rating::new(4.2).value(), 4.2);
    }

    #[test]
    fn rating_desc_ordering() {
        let mut ratings = vec![Rating::new(3.0), Rating::new(5.0), Rating::new(4.1)];
        ratings.sort_by(|a, b| a.cmp_desc(*b));
        assert_eq!(ratings[0].value(), 5.0);
        assert_eq!(ratings[2].value(), 3.0);
    }

    #[test]
    fn product_id_display_round_trips() {
        let id = ProductId::from("p1");
        assert_eq!(id.to_string(), "p1");
    }
}
