//! Objective traits
//!
//! This module defines the objective-function abstraction minimized by the
//! search.

use crate::genome::point::Point;

/// A function to be minimized over the search box
///
/// Implementations must be pure: the same coordinates always produce the
/// same value, so the search may cache fitness alongside a point.
pub trait Objective: Send + Sync {
    /// Name of the objective
    fn name(&self) -> &'static str;

    /// Evaluate raw coordinates (lower is better)
    fn evaluate_raw(&self, x: &[f64]) -> f64;

    /// Evaluate a point (lower is better)
    fn evaluate(&self, point: &Point) -> f64 {
        self.evaluate_raw(point.coords())
    }
}

impl<O: Objective + ?Sized> Objective for &O {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn evaluate_raw(&self, x: &[f64]) -> f64 {
        (**self).evaluate_raw(x)
    }
}
