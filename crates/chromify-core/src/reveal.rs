//! Split-mode reveal position.
//!
//! The percentage boundary separating the visible original from the
//! colorized overlay. Only meaningful in split view. Out-of-range input
//! is rejected at construction so an invalid value can never reach the
//! renderer.

use serde::{Deserialize, Serialize};

/// A value outside the `[0, 100]` range (or not a finite number).
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("reveal position {0} is outside 0-100")]
pub struct OutOfRange(pub f64);

/// Reveal percentage in `[0, 100]`.
///
/// `0` shows only the original, `100` only the colorized result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealPosition(f64);

impl RevealPosition {
    /// Lower bound of the reveal range.
    pub const MIN: f64 = 0.0;
    /// Upper bound of the reveal range.
    pub const MAX: f64 = 100.0;
    /// Slider step granularity.
    pub const STEP: f64 = 0.1;

    /// Validate a percentage.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] for values below 0, above 100, or
    /// non-finite (`NaN`, infinities).
    pub fn new(percent: f64) -> Result<Self, OutOfRange> {
        if percent.is_finite() && (Self::MIN..=Self::MAX).contains(&percent) {
            Ok(Self(percent))
        } else {
            Err(OutOfRange(percent))
        }
    }

    /// The validated percentage.
    #[must_use]
    pub const fn percent(self) -> f64 {
        self.0
    }
}

impl Default for RevealPosition {
    /// The divider starts centered.
    fn default() -> Self {
        Self(50.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_centered() {
        let pos = RevealPosition::default();
        assert!((pos.percent() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn accepts_bounds_and_fractional_steps() {
        assert!(RevealPosition::new(0.0).is_ok());
        assert!(RevealPosition::new(100.0).is_ok());
        assert!(RevealPosition::new(33.3).is_ok());
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(RevealPosition::new(150.0), Err(OutOfRange(150.0)));
        assert_eq!(RevealPosition::new(-10.0), Err(OutOfRange(-10.0)));
        assert_eq!(RevealPosition::new(100.1), Err(OutOfRange(100.1)));
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(RevealPosition::new(f64::NAN).is_err());
        assert!(RevealPosition::new(f64::INFINITY).is_err());
        assert!(RevealPosition::new(f64::NEG_INFINITY).is_err());
    }
}
