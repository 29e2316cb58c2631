//! Diagnostics and statistics
//!
//! This module provides statistics collection for search runs. Everything
//! here is owned by a single run and returned with its result.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::genome::point::Point;
use crate::operators::boundary::BoundaryStats;
use crate::population::population::Population;

/// Statistics for a single generation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number (0 = initial population)
    pub generation: usize,
    /// Total objective evaluations so far
    pub evaluations: usize,
    /// Lowest fitness in this generation
    pub best_fitness: f64,
    /// Highest fitness in this generation
    pub worst_fitness: f64,
    /// Mean fitness
    pub mean_fitness: f64,
    /// Population diversity
    pub diversity: f64,
    /// Wall-clock time spent on this generation (ms)
    pub elapsed_ms: f64,
}

impl GenerationStats {
    /// Compute statistics from a population
    pub fn from_population(population: &Population, generation: usize, evaluations: usize) -> Self {
        Self {
            generation,
            evaluations,
            best_fitness: population.best().map_or(f64::INFINITY, |c| c.fitness),
            worst_fitness: population.worst_fitness().unwrap_or(f64::NEG_INFINITY),
            mean_fitness: population.mean_fitness().unwrap_or(0.0),
            diversity: population.diversity(),
            elapsed_ms: 0.0,
        }
    }

    /// Set the time spent on this generation
    pub fn with_elapsed(mut self, duration: Duration) -> Self {
        self.elapsed_ms = duration.as_secs_f64() * 1000.0;
        self
    }
}

/// Statistics collector for an entire run
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    /// Recorded generations
    pub generations: Vec<GenerationStats>,
    /// Total runtime in milliseconds
    pub total_runtime_ms: f64,
}

impl RunStats {
    /// Create a new stats collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generation's statistics
    pub fn record(&mut self, stats: GenerationStats) {
        self.generations.push(stats);
    }

    /// Get the number of generations recorded
    pub fn num_recorded(&self) -> usize {
        self.generations.len()
    }

    /// Get the lowest fitness across recorded generations
    pub fn best_fitness(&self) -> Option<f64> {
        self.generations
            .iter()
            .map(|g| g.best_fitness)
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Get the history of best fitness values
    pub fn best_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.best_fitness).collect()
    }

    /// Get the history of mean fitness values
    pub fn mean_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.mean_fitness).collect()
    }

    /// Set the total runtime
    pub fn set_runtime(&mut self, duration: Duration) {
        self.total_runtime_ms = duration.as_secs_f64() * 1000.0;
    }

    /// Get a summary of the run
    pub fn summary(&self) -> String {
        format!(
            "Search Summary:\n\
             - Recorded generations: {}\n\
             - Best fitness: {:.6}\n\
             - Runtime: {:.2}ms",
            self.num_recorded(),
            self.best_fitness().unwrap_or(f64::INFINITY),
            self.total_runtime_ms,
        )
    }
}

/// Result of a search run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// The best point in the final population
    pub best_point: Point,
    /// Its fitness
    pub best_fitness: f64,
    /// Number of generations completed
    pub generations: usize,
    /// Total objective evaluations
    pub evaluations: usize,
    /// Boundary-policy counters for the whole run
    pub boundary: BoundaryStats,
    /// Statistics for the run
    pub stats: RunStats,
}

impl RunReport {
    /// Create a new run report
    pub fn new(best_point: Point, best_fitness: f64, generations: usize, evaluations: usize) -> Self {
        Self {
            best_point,
            best_fitness,
            generations,
            evaluations,
            boundary: BoundaryStats::default(),
            stats: RunStats::new(),
        }
    }

    /// Attach boundary counters
    pub fn with_boundary(mut self, boundary: BoundaryStats) -> Self {
        self.boundary = boundary;
        self
    }

    /// Add statistics to the result
    pub fn with_stats(mut self, stats: RunStats) -> Self {
        self.stats = stats;
        self
    }

    /// Split into the `(point, fitness)` pair
    pub fn into_pair(self) -> (Point, f64) {
        (self.best_point, self.best_fitness)
    }
}

pub mod prelude {
    pub use super::{GenerationStats, RunReport, RunStats};
}
