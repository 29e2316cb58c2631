//! # small-world
//!
//! Small-world phenomenon local search for continuous black-box minimization.
//!
//! A fixed-size population of candidate points is improved in place. Each
//! generation, every candidate tries a "local" mutant (small steps) and/or a
//! "distant" mutant (large or heavy-tailed jumps) and keeps whichever is
//! better. The search is benchmarked against the Rastrigin function.
//!
//! ## Core Concepts
//!
//! - **Mutation laws**: Gaussian, one-sided uniform and Cauchy steps, applied
//!   per coordinate
//! - **Boundary policies**: clamp, reflect or rejection-resample, chosen per run
//! - **Selection variants**: three-way best-of or probabilistic strict improvement
//! - **Reproducibility**: the random generator is always passed in
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use small_world::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! let report = SmallWorldSearch::builder()
//!     .dimensions(3)
//!     .population_size(10)
//!     .iterations(1000)
//!     .local(MutationLaw::gaussian(1.0))
//!     .distant(MutationLaw::cauchy(0.05))
//!     .boundary_policy(BoundaryPolicy::Clamp)
//!     .selection(SelectionVariant::probabilistic(0.5))
//!     .build()?
//!     .run(&mut rng)?;
//!
//! assert_eq!(report.best_fitness, evaluate(&report.best_point));
//! ```

pub mod algorithms;
pub mod diagnostics;
pub mod error;
pub mod fitness;
pub mod genome;
pub mod operators;
pub mod population;

pub use algorithms::small_world::optimize;
pub use fitness::benchmarks::evaluate;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithms::prelude::*;
    pub use crate::diagnostics::prelude::*;
    pub use crate::error::*;
    pub use crate::fitness::prelude::*;
    pub use crate::genome::prelude::*;
    pub use crate::operators::prelude::*;
    pub use crate::population::prelude::*;
}
