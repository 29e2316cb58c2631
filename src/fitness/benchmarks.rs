//! Benchmark objective functions
//!
//! This module provides the Rastrigin function the search is benchmarked
//! against, plus the Sphere function for sanity checks.

use std::f64::consts::PI;

use crate::fitness::traits::Objective;
use crate::genome::point::Point;

/// Rastrigin function: f(x) = 10n + Σ(xᵢ² - 10cos(2πxᵢ))
///
/// Highly multimodal with many local minima. Optimum 0 at the origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rastrigin;

impl Objective for Rastrigin {
    fn name(&self) -> &'static str {
        "Rastrigin"
    }

    fn evaluate_raw(&self, x: &[f64]) -> f64 {
        let a = 10.0;
        let n = x.len() as f64;
        a * n
            + x.iter()
                .map(|xi| xi * xi - a * (2.0 * PI * xi).cos())
                .sum::<f64>()
    }
}

/// Sphere function: f(x) = Σxᵢ²
///
/// Unimodal, convex, separable. Optimum at origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sphere;

impl Objective for Sphere {
    fn name(&self) -> &'static str {
        "Sphere"
    }

    fn evaluate_raw(&self, x: &[f64]) -> f64 {
        x.iter().map(|xi| xi * xi).sum()
    }
}

/// Rastrigin fitness of a point
///
/// Exposed so a harness can independently re-evaluate a returned result.
pub fn evaluate(point: &Point) -> f64 {
    Rastrigin.evaluate(point)
}
