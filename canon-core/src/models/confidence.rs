use std::fmt;

use serde::{Deserialize, Serialize};

/// Confidence score clamped to [0.0, 1.0].
///
/// Derived from the similarity margin between the top two retrieval hits;
/// signals how trustworthy a ranked result is.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Confidence(f64);

impl Confidence {
    /// High confidence threshold — results above this are considered reliable.
    pub const HIGH: f64 = 0.75;
    /// Low confidence threshold — results below this are advisory only.
    pub const LOW: f64 = 0.3;

    /// Create a new Confidence, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_high(self) -> bool {
        self.0 >= Self::HIGH
    }

    pub fn is_low(self) -> bool {
        self.0 < Self::LOW
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(0.0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_values() {
        assert_eq!(Confidence::new(1.7).value(), 1.0);
        assert_eq!(Confidence::new(-0.2).value(), 0.0);
    }

    #[test]
    fn thresholds() {
        assert!(Confidence::new(0.8).is_high());
        assert!(Confidence::new(0.1).is_low());
        assert!(!Confidence::new(0.5).is_low());
    }
}
