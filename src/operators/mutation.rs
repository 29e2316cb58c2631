//! Mutation laws
//!
//! A mutation law moves a single coordinate by a random step. Points are
//! mutated componentwise: the law is applied to every coordinate
//! independently, then the boundary policy brings the result back into the
//! search box.

use std::f64::consts::PI;

use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

use crate::error::{SearchError, SearchOutcome};
use crate::genome::bounds::Bounds;
use crate::genome::point::Point;
use crate::operators::boundary::{BoundaryPolicy, BoundaryStats};

/// P(0 <= Z <= 1) for a standard normal Z
const STD_NORMAL_MASS_0_1: f64 = 0.341_344_746_068_542_9;

/// Standard normal density at 1
const STD_NORMAL_PDF_1: f64 = 0.241_970_724_519_143_37;

/// Mutation operator trait
///
/// Moves one coordinate to a new value. Unbounded: the boundary policy is
/// applied by [`MutationOperator::mutate`].
pub trait MutationOperator: Send + Sync {
    /// Draw a new value for one coordinate
    fn perturb<R: Rng>(&self, value: f64, rng: &mut R) -> f64;

    /// Lower bound on the probability that a single draw started from a
    /// coordinate sitting on a bound lands back inside a box of width `range`
    ///
    /// Used to refuse unbounded rejection-resampling that could stall. The
    /// default of 0 treats an unknown law as unsafe.
    fn acceptance_lower_bound(&self, _range: f64) -> f64 {
        0.0
    }

    /// Check the law's parameters
    fn validate(&self) -> SearchOutcome<()> {
        Ok(())
    }

    /// Mutate every coordinate of a point, enforcing `policy`
    fn mutate<R: Rng>(
        &self,
        point: &Point,
        bounds: &Bounds,
        policy: &BoundaryPolicy,
        stats: &mut BoundaryStats,
        rng: &mut R,
    ) -> Point
    where
        Self: Sized,
    {
        point.map(|value| policy.apply(self, value, bounds, stats, rng))
    }
}

/// Built-in random-step laws
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum MutationLaw {
    /// `x + Z·σ`, Z standard normal
    Gaussian {
        /// Standard deviation of the step
        sigma: f64,
    },
    /// `x + U·width`, U uniform in [0, 1)
    ///
    /// The step is never negative, so this law only pushes coordinates
    /// upwards. Kept one-sided on purpose; pair it with a symmetric distant
    /// law if a directional bias is not wanted.
    Uniform {
        /// Width of the step interval
        width: f64,
    },
    /// `x + γ·tan(π(U - 0.5))`, a heavy-tailed Cauchy jump
    Cauchy {
        /// Scale of the jump
        gamma: f64,
    },
}

impl MutationLaw {
    /// Gaussian law with standard deviation `sigma`
    pub fn gaussian(sigma: f64) -> Self {
        Self::Gaussian { sigma }
    }

    /// One-sided uniform law with step width `width`
    pub fn uniform(width: f64) -> Self {
        Self::Uniform { width }
    }

    /// Cauchy law with scale `gamma`
    pub fn cauchy(gamma: f64) -> Self {
        Self::Cauchy { gamma }
    }

    /// Short name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gaussian { .. } => "Normal",
            Self::Uniform { .. } => "Uniform",
            Self::Cauchy { .. } => "Cauchy",
        }
    }

    /// The law's strength parameter (σ, width or γ)
    pub fn strength(&self) -> f64 {
        match *self {
            Self::Gaussian { sigma } => sigma,
            Self::Uniform { width } => width,
            Self::Cauchy { gamma } => gamma,
        }
    }
}

impl MutationOperator for MutationLaw {
    fn perturb<R: Rng>(&self, value: f64, rng: &mut R) -> f64 {
        match *self {
            Self::Gaussian { sigma } => {
                let z: f64 = rng.sample(StandardNormal);
                value + z * sigma
            }
            Self::Uniform { width } => value + rng.gen::<f64>() * width,
            Self::Cauchy { gamma } => value + gamma * (PI * (rng.gen::<f64>() - 0.5)).tan(),
        }
    }

    fn acceptance_lower_bound(&self, range: f64) -> f64 {
        let strength = self.strength();
        if strength == 0.0 {
            return 1.0;
        }
        match self {
            Self::Gaussian { .. } => {
                let t = range / strength;
                if t >= 1.0 {
                    STD_NORMAL_MASS_0_1
                } else {
                    t * STD_NORMAL_PDF_1
                }
            }
            // From the upper bound only a zero step is accepted
            Self::Uniform { .. } => 0.0,
            Self::Cauchy { .. } => (range / strength).atan() / PI,
        }
    }

    fn validate(&self) -> SearchOutcome<()> {
        let strength = self.strength();
        if !strength.is_finite() || strength < 0.0 {
            return Err(SearchError::InvalidConfiguration(format!(
                "{} law strength must be finite and non-negative, got {}",
                self.name(),
                strength
            )));
        }
        Ok(())
    }
}
