//! Candidate wrapper type
//!
//! This module provides the Candidate type that pairs a point with its
//! fitness.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::fitness::traits::Objective;
use crate::genome::point::Point;

/// A point in the population together with its cached fitness
///
/// The fitness is computed once when the candidate is created. Objectives
/// are pure, so the cached value always equals a fresh evaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// The candidate's location
    pub point: Point,
    /// Objective value at `point` (lower is better)
    pub fitness: f64,
}

impl Candidate {
    /// Evaluate `point` and wrap it
    pub fn evaluated<O: Objective + ?Sized>(point: Point, objective: &O) -> Self {
        let fitness = objective.evaluate(&point);
        Self { point, fitness }
    }

    /// Create a candidate with a known fitness
    pub fn with_fitness(point: Point, fitness: f64) -> Self {
        Self { point, fitness }
    }

    /// Check if this candidate is strictly better than another
    ///
    /// A finite fitness beats NaN, matching `leftmost_min`.
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.fitness < other.fitness || (other.fitness.is_nan() && !self.fitness.is_nan())
    }

    /// Compare by fitness (lower first)
    pub fn cmp_by_fitness(&self, other: &Self) -> Ordering {
        self.fitness
            .partial_cmp(&other.fitness)
            .unwrap_or(Ordering::Equal)
    }
}
