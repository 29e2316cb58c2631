//! Population type
//!
//! This module provides the Population container type. A population has a
//! fixed size for the whole run; generations replace candidates in place and
//! never reorder them.

use rand::Rng;

use crate::error::{SearchError, SearchOutcome};
use crate::fitness::traits::Objective;
use crate::genome::bounds::Bounds;
use crate::genome::point::Point;
use crate::population::individual::Candidate;
use crate::population::reduction::leftmost_min;

/// An ordered population of evaluated candidates
#[derive(Clone, Debug, PartialEq)]
pub struct Population {
    candidates: Vec<Candidate>,
    generation: usize,
}

impl Population {
    /// Create a population from already evaluated candidates
    pub fn from_candidates(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates,
            generation: 0,
        }
    }

    /// Evaluate `points` and wrap them in a population
    pub fn from_points<O: Objective + ?Sized>(points: Vec<Point>, objective: &O) -> Self {
        Self::from_candidates(
            points
                .into_iter()
                .map(|p| Candidate::evaluated(p, objective))
                .collect(),
        )
    }

    /// Draw `size` points with every coordinate uniform in `bounds`
    pub fn random<O, R>(
        size: usize,
        dimensions: usize,
        bounds: &Bounds,
        objective: &O,
        rng: &mut R,
    ) -> Self
    where
        O: Objective + ?Sized,
        R: Rng,
    {
        let candidates = (0..size)
            .map(|_| Candidate::evaluated(Point::random(dimensions, bounds, rng), objective))
            .collect();
        Self::from_candidates(candidates)
    }

    /// Get the current generation
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Increment the generation counter
    pub fn increment_generation(&mut self) {
        self.generation += 1;
    }

    /// Get the population size
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Check if the population is empty
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Get a candidate by index
    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.candidates.get(index)
    }

    /// Get an iterator over the candidates
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    /// Get the underlying candidates
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Mutable access for in-place generation updates
    pub(crate) fn candidates_mut(&mut self) -> &mut [Candidate] {
        &mut self.candidates
    }

    /// The first candidate with minimal fitness
    pub fn best(&self) -> SearchOutcome<&Candidate> {
        leftmost_min(self.candidates.iter().map(|c| c.fitness))
            .map(|idx| &self.candidates[idx])
            .ok_or_else(|| SearchError::InvalidInput("population is empty".to_string()))
    }

    /// Take the first candidate with minimal fitness out of the population
    pub fn into_best(mut self) -> SearchOutcome<Candidate> {
        let idx = leftmost_min(self.candidates.iter().map(|c| c.fitness))
            .ok_or_else(|| SearchError::InvalidInput("population is empty".to_string()))?;
        Ok(self.candidates.swap_remove(idx))
    }

    /// Highest (worst) fitness
    pub fn worst_fitness(&self) -> Option<f64> {
        self.candidates
            .iter()
            .map(|c| c.fitness)
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Compute mean fitness
    pub fn mean_fitness(&self) -> Option<f64> {
        if self.candidates.is_empty() {
            None
        } else {
            Some(self.candidates.iter().map(|c| c.fitness).sum::<f64>() / self.len() as f64)
        }
    }

    /// Compute population diversity (average pairwise distance)
    pub fn diversity(&self) -> f64 {
        let mut total_distance = 0.0;
        let mut count = 0usize;

        for i in 0..self.len() {
            for j in (i + 1)..self.len() {
                if let Ok(d) = self.candidates[i].point.distance(&self.candidates[j].point) {
                    total_distance += d;
                    count += 1;
                }
            }
        }

        if count == 0 {
            0.0
        } else {
            total_distance / count as f64
        }
    }

    /// Check that every candidate has exactly `dimensions` coordinates
    pub fn has_dimension(&self, dimensions: usize) -> bool {
        self.candidates
            .iter()
            .all(|c| c.point.dimension() == dimensions)
    }
}
