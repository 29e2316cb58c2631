//! Bounds for point coordinates
//!
//! The feasible region is a box: every coordinate shares the same closed
//! interval `[min, max]`.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Closed interval applied to every coordinate of a point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
}

impl Bounds {
    /// Create new bounds
    ///
    /// # Panics
    /// Panics if min > max
    pub fn new(min: f64, max: f64) -> Self {
        assert!(
            min <= max,
            "Invalid bounds: min ({}) must be <= max ({})",
            min,
            max
        );
        Self { min, max }
    }

    /// Create symmetric bounds centered at 0
    pub fn symmetric(half_width: f64) -> Self {
        Self::new(-half_width, half_width)
    }

    /// Get the range (max - min)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Check that both ends are finite and ordered
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    /// Check if a value is within bounds
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a value to be within bounds
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Mirror a value across the bound it violates
    ///
    /// Only one reflection is applied, so an overshoot wider than the range
    /// lands outside the opposite bound.
    pub fn reflect(&self, value: f64) -> f64 {
        if value < self.min {
            2.0 * self.min - value
        } else if value > self.max {
            2.0 * self.max - value
        } else {
            value
        }
    }

    /// Denormalize a value from [0, 1] to bounds
    pub fn denormalize(&self, value: f64) -> f64 {
        self.min + value * self.range()
    }

    /// Draw a coordinate uniformly from `[min, max)`
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        self.denormalize(rng.gen::<f64>())
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::symmetric(5.12) // Rastrigin's conventional search box
    }
}
