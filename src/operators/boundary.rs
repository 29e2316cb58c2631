//! Boundary policies
//!
//! A boundary policy decides what happens to a mutated coordinate that left
//! the search box. Exactly one policy is active per run.

use std::ops::AddAssign;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{SearchError, SearchOutcome};
use crate::genome::bounds::Bounds;
use crate::operators::mutation::MutationOperator;

/// Minimum worst-case acceptance probability tolerated by unbounded
/// rejection-resampling
pub const MIN_ACCEPTANCE_PROBABILITY: f64 = 1e-3;

/// Rule mapping an out-of-range coordinate back into the box
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum BoundaryPolicy {
    /// Saturate to the nearest bound
    #[default]
    Clamp,
    /// Mirror the overshoot back across the violated bound (`2·min - v` or
    /// `2·max - v`)
    ///
    /// A single reflection is applied. An overshoot wider than the box lands
    /// outside the opposite bound and is returned as-is.
    Reflect,
    /// Redraw the mutation until it lands in range
    ///
    /// With `max_attempts: None` retries are unbounded; configuration
    /// validation refuses laws that could stall. With `Some(n)` the original
    /// coordinate is kept after `n` rejected draws.
    RejectResample {
        /// Draw budget per coordinate
        max_attempts: Option<usize>,
    },
}

impl BoundaryPolicy {
    /// Unbounded rejection-resampling
    pub fn reject_resample() -> Self {
        Self::RejectResample { max_attempts: None }
    }

    /// Rejection-resampling with at most `max_attempts` draws per coordinate
    pub fn reject_resample_bounded(max_attempts: usize) -> Self {
        Self::RejectResample {
            max_attempts: Some(max_attempts),
        }
    }

    /// Short name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            Self::Clamp => "clamp",
            Self::Reflect => "reflect",
            Self::RejectResample { .. } => "reject-resample",
        }
    }

    /// Bring a single, already drawn value back into `bounds`
    ///
    /// Records which bound was violated. Rejection-resampling cannot repair a
    /// finished draw, so under that policy the value is returned unchanged.
    pub fn repair(&self, value: f64, bounds: &Bounds, stats: &mut BoundaryStats) -> f64 {
        if value < bounds.min {
            stats.low += 1;
        } else if value > bounds.max {
            stats.high += 1;
        } else {
            return value;
        }
        match self {
            Self::Clamp => bounds.clamp(value),
            Self::Reflect => bounds.reflect(value),
            Self::RejectResample { .. } => value,
        }
    }

    /// Mutate one coordinate with `law` and enforce this policy
    pub fn apply<M, R>(
        &self,
        law: &M,
        value: f64,
        bounds: &Bounds,
        stats: &mut BoundaryStats,
        rng: &mut R,
    ) -> f64
    where
        M: MutationOperator + ?Sized,
        R: Rng,
    {
        match *self {
            Self::Clamp | Self::Reflect => self.repair(law.perturb(value, rng), bounds, stats),
            Self::RejectResample { max_attempts } => {
                let mut attempts = 0usize;
                loop {
                    let candidate = law.perturb(value, rng);
                    attempts += 1;
                    if bounds.contains(candidate) {
                        return candidate;
                    }
                    self.repair(candidate, bounds, stats);
                    stats.resamples += 1;
                    if max_attempts.is_some_and(|max| attempts >= max) {
                        stats.exhausted += 1;
                        return value;
                    }
                }
            }
        }
    }

    /// Check the policy's own parameters
    pub fn validate(&self) -> SearchOutcome<()> {
        if let Self::RejectResample {
            max_attempts: Some(0),
        } = self
        {
            return Err(SearchError::InvalidConfiguration(
                "rejection-resample budget must allow at least one draw".to_string(),
            ));
        }
        Ok(())
    }

    /// Refuse unbounded rejection-resampling combined with a law that would
    /// rarely land back in range
    pub fn check_termination<M: MutationOperator + ?Sized>(
        &self,
        law: &M,
        label: &'static str,
        bounds: &Bounds,
    ) -> SearchOutcome<()> {
        if let Self::RejectResample { max_attempts: None } = self {
            let acceptance = law.acceptance_lower_bound(bounds.range());
            if acceptance < MIN_ACCEPTANCE_PROBABILITY {
                return Err(SearchError::PotentialNonTermination {
                    law: label,
                    acceptance,
                });
            }
        }
        Ok(())
    }
}

/// Boundary diagnostics owned by one run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryStats {
    /// Draws that fell below the lower bound
    pub low: usize,
    /// Draws that rose above the upper bound
    pub high: usize,
    /// Rejected draws that were redrawn
    pub resamples: usize,
    /// Coordinates that ran out of redraw budget and kept their old value
    pub exhausted: usize,
}

impl BoundaryStats {
    /// Create empty counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Total bound violations
    pub fn violations(&self) -> usize {
        self.low + self.high
    }

    /// Fold another accumulator into this one
    pub fn merge(&mut self, other: &Self) {
        self.low += other.low;
        self.high += other.high;
        self.resamples += other.resamples;
        self.exhausted += other.exhausted;
    }
}

impl AddAssign for BoundaryStats {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}

impl std::iter::Sum for BoundaryStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut acc, s| {
            acc += s;
            acc
        })
    }
}
