//! Candidate points
//!
//! A `Point` is one location in the D-dimensional search space. Mutation
//! never edits a point; it always produces a new one.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GenomeError;
use crate::genome::bounds::Bounds;

/// Fixed-length real-valued location in the search space
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    coords: Vec<f64>,
}

impl Point {
    /// Create a new point with the given coordinates
    pub fn new(coords: Vec<f64>) -> Self {
        Self { coords }
    }

    /// Create the origin of the given dimension
    pub fn zeros(dimension: usize) -> Self {
        Self {
            coords: vec![0.0; dimension],
        }
    }

    /// Create a point with every coordinate set to `value`
    pub fn filled(dimension: usize, value: f64) -> Self {
        Self {
            coords: vec![value; dimension],
        }
    }

    /// Draw a point with every coordinate uniform in `bounds`
    pub fn random<R: Rng>(dimension: usize, bounds: &Bounds, rng: &mut R) -> Self {
        Self {
            coords: (0..dimension).map(|_| bounds.sample(rng)).collect(),
        }
    }

    /// Build a new point by mapping every coordinate
    pub fn map<F: FnMut(f64) -> f64>(&self, f: F) -> Self {
        Self {
            coords: self.coords.iter().copied().map(f).collect(),
        }
    }

    /// Number of coordinates
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    /// Coordinates as a slice
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Check if every coordinate lies in `bounds`
    pub fn is_within(&self, bounds: &Bounds) -> bool {
        self.coords.iter().all(|&c| bounds.contains(c))
    }

    /// Euclidean distance to another point of the same dimension
    pub fn distance(&self, other: &Self) -> Result<f64, GenomeError> {
        if self.coords.len() != other.coords.len() {
            return Err(GenomeError::DimensionMismatch {
                expected: self.coords.len(),
                actual: other.coords.len(),
            });
        }
        Ok(self
            .coords
            .iter()
            .zip(other.coords.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt())
    }
}

impl std::ops::Index<usize> for Point {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coords[index]
    }
}

impl From<Vec<f64>> for Point {
    fn from(coords: Vec<f64>) -> Self {
        Self { coords }
    }
}

impl From<Point> for Vec<f64> {
    fn from(point: Point) -> Self {
        point.coords
    }
}

impl<const N: usize> From<[f64; N]> for Point {
    fn from(arr: [f64; N]) -> Self {
        Self {
            coords: arr.to_vec(),
        }
    }
}

impl<'a> IntoIterator for &'a Point {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}
