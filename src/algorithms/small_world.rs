//! Small-world phenomenon search
//!
//! A population of candidates is improved in place. Every generation each
//! candidate is mutated with a "local" law (small steps, exploitation)
//! and/or a "distant" law (large or heavy-tailed jumps, exploration), and the
//! mutant replaces its parent only if it is better. Two selection variants
//! exist:
//!
//! - [`SelectionVariant::ThreeWay`]: draw one local and one distant mutant
//!   and keep the best of {current, local, distant}. Ties keep the earliest
//!   in that order.
//! - [`SelectionVariant::Probabilistic`]: draw u ~ U[0, 1); if
//!   `u <= local_search_probability` draw a local mutant, else a distant
//!   one; replace only on strict improvement.
//!
//! Candidates never read each other within a generation. Each candidate's
//! update runs on a private `StdRng` seeded from the caller's generator, so
//! sequential and parallel execution give bit-identical results.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::instrument;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::diagnostics::{GenerationStats, RunReport, RunStats};
use crate::error::{SearchError, SearchOutcome};
use crate::fitness::benchmarks::Rastrigin;
use crate::fitness::traits::Objective;
use crate::genome::bounds::Bounds;
use crate::genome::point::Point;
use crate::operators::boundary::{BoundaryPolicy, BoundaryStats};
use crate::operators::mutation::{MutationLaw, MutationOperator};
use crate::population::individual::Candidate;
use crate::population::population::Population;
use crate::population::reduction::leftmost_min;

/// Per-generation update rule
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum SelectionVariant {
    /// Best of {current, local mutant, distant mutant}
    ThreeWay,
    /// One mutant per candidate, law picked at random, strict improvement
    Probabilistic {
        /// Probability of trying the local law
        local_search_probability: f64,
    },
}

impl SelectionVariant {
    /// Probabilistic variant with the given local-search probability
    pub fn probabilistic(local_search_probability: f64) -> Self {
        Self::Probabilistic {
            local_search_probability,
        }
    }

    /// Objective evaluations one candidate costs per generation
    pub fn evaluations_per_candidate(&self) -> usize {
        match self {
            Self::ThreeWay => 2,
            Self::Probabilistic { .. } => 1,
        }
    }

    fn validate(&self) -> SearchOutcome<()> {
        if let Self::Probabilistic {
            local_search_probability: p,
        } = *self
        {
            if !(0.0..=1.0).contains(&p) {
                return Err(SearchError::InvalidConfiguration(format!(
                    "local_search_probability must be in [0, 1], got {}",
                    p
                )));
            }
        }
        Ok(())
    }
}

impl Default for SelectionVariant {
    fn default() -> Self {
        Self::probabilistic(0.5)
    }
}

/// Configuration for one search run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmallWorldConfig {
    /// Dimension D of every point
    pub dimensions: usize,
    /// Number of candidates N
    pub population_size: usize,
    /// Number of generations K
    pub iterations: usize,
    /// Search box shared by every coordinate
    pub bounds: Bounds,
    /// Law for local (exploitative) mutants
    pub local_law: MutationLaw,
    /// Law for distant (explorative) mutants
    pub distant_law: MutationLaw,
    /// How out-of-range coordinates are handled
    pub boundary_policy: BoundaryPolicy,
    /// Per-generation update rule
    pub selection: SelectionVariant,
    /// Update candidates on the rayon pool (ignored without the `parallel`
    /// feature)
    pub parallel: bool,
    /// Record statistics every n generations (0 disables recording)
    pub record_every: usize,
}

impl Default for SmallWorldConfig {
    fn default() -> Self {
        Self {
            dimensions: 3,
            population_size: 10,
            iterations: 1000,
            bounds: Bounds::default(),
            local_law: MutationLaw::gaussian(1.0),
            distant_law: MutationLaw::cauchy(0.05),
            boundary_policy: BoundaryPolicy::Clamp,
            selection: SelectionVariant::default(),
            parallel: false,
            record_every: 1,
        }
    }
}

impl SmallWorldConfig {
    /// Check every field and the law/policy combination
    pub fn validate(&self) -> SearchOutcome<()> {
        validate_run(
            self.dimensions,
            self.population_size,
            self.iterations,
            &self.bounds,
            &self.selection,
            &self.boundary_policy,
            &self.local_law,
            &self.distant_law,
        )
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> SearchOutcome<Self> {
        serde_json::from_str(json)
            .map_err(|e| SearchError::InvalidConfiguration(format!("malformed JSON: {}", e)))
    }

    /// Serialize the configuration to pretty JSON
    pub fn to_json(&self) -> SearchOutcome<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SearchError::InvalidConfiguration(format!("cannot serialize: {}", e)))
    }
}

#[allow(clippy::too_many_arguments)]
fn validate_run<L, D>(
    dimensions: usize,
    population_size: usize,
    iterations: usize,
    bounds: &Bounds,
    selection: &SelectionVariant,
    boundary_policy: &BoundaryPolicy,
    local: &L,
    distant: &D,
) -> SearchOutcome<()>
where
    L: MutationOperator,
    D: MutationOperator,
{
    if dimensions == 0 {
        return Err(SearchError::InvalidConfiguration(
            "dimensions must be positive".to_string(),
        ));
    }
    if population_size == 0 {
        return Err(SearchError::InvalidConfiguration(
            "population_size must be positive".to_string(),
        ));
    }
    if iterations == 0 {
        return Err(SearchError::InvalidConfiguration(
            "iterations must be positive".to_string(),
        ));
    }
    if !bounds.is_valid() {
        return Err(SearchError::InvalidConfiguration(format!(
            "bounds must be finite with min <= max, got [{}, {}]",
            bounds.min, bounds.max
        )));
    }
    selection.validate()?;
    boundary_policy.validate()?;
    local.validate()?;
    distant.validate()?;
    boundary_policy.check_termination(local, "local", bounds)?;
    boundary_policy.check_termination(distant, "distant", bounds)?;
    Ok(())
}

/// What one generation did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationOutcome {
    /// Boundary counters accumulated by this generation
    pub boundary: BoundaryStats,
    /// Objective evaluations spent
    pub evaluations: usize,
    /// Candidates replaced by a mutant
    pub replaced: usize,
}

impl GenerationOutcome {
    fn merge(mut self, other: Self) -> Self {
        self.boundary += other.boundary;
        self.evaluations += other.evaluations;
        self.replaced += other.replaced;
        self
    }
}

/// Builder for the small-world search
pub struct SmallWorldBuilder<L = MutationLaw, D = MutationLaw, O = Rastrigin> {
    dimensions: usize,
    population_size: usize,
    iterations: usize,
    bounds: Bounds,
    boundary_policy: BoundaryPolicy,
    selection: SelectionVariant,
    parallel: bool,
    record_every: usize,
    local: L,
    distant: D,
    objective: O,
}

impl SmallWorldBuilder {
    /// Create a new builder with the default configuration
    pub fn new() -> Self {
        Self::from_config(&SmallWorldConfig::default())
    }

    /// Start from an existing configuration
    pub fn from_config(config: &SmallWorldConfig) -> Self {
        Self {
            dimensions: config.dimensions,
            population_size: config.population_size,
            iterations: config.iterations,
            bounds: config.bounds,
            boundary_policy: config.boundary_policy,
            selection: config.selection,
            parallel: config.parallel,
            record_every: config.record_every,
            local: config.local_law,
            distant: config.distant_law,
            objective: Rastrigin,
        }
    }
}

impl Default for SmallWorldBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, D, O> SmallWorldBuilder<L, D, O>
where
    L: MutationOperator,
    D: MutationOperator,
    O: Objective,
{
    /// Set the dimension D
    pub fn dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Set the population size N
    pub fn population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Set the number of generations K
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the search box
    pub fn bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the boundary policy
    pub fn boundary_policy(mut self, policy: BoundaryPolicy) -> Self {
        self.boundary_policy = policy;
        self
    }

    /// Set the selection variant
    pub fn selection(mut self, selection: SelectionVariant) -> Self {
        self.selection = selection;
        self
    }

    /// Enable or disable parallel candidate updates
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Record statistics every n generations (0 disables recording)
    pub fn record_every(mut self, every: usize) -> Self {
        self.record_every = every;
        self
    }

    /// Set the local law
    pub fn local<NewL: MutationOperator>(self, local: NewL) -> SmallWorldBuilder<NewL, D, O> {
        SmallWorldBuilder {
            dimensions: self.dimensions,
            population_size: self.population_size,
            iterations: self.iterations,
            bounds: self.bounds,
            boundary_policy: self.boundary_policy,
            selection: self.selection,
            parallel: self.parallel,
            record_every: self.record_every,
            local,
            distant: self.distant,
            objective: self.objective,
        }
    }

    /// Set the distant law
    pub fn distant<NewD: MutationOperator>(self, distant: NewD) -> SmallWorldBuilder<L, NewD, O> {
        SmallWorldBuilder {
            dimensions: self.dimensions,
            population_size: self.population_size,
            iterations: self.iterations,
            bounds: self.bounds,
            boundary_policy: self.boundary_policy,
            selection: self.selection,
            parallel: self.parallel,
            record_every: self.record_every,
            local: self.local,
            distant,
            objective: self.objective,
        }
    }

    /// Set the objective to minimize
    pub fn objective<NewO: Objective>(self, objective: NewO) -> SmallWorldBuilder<L, D, NewO> {
        SmallWorldBuilder {
            dimensions: self.dimensions,
            population_size: self.population_size,
            iterations: self.iterations,
            bounds: self.bounds,
            boundary_policy: self.boundary_policy,
            selection: self.selection,
            parallel: self.parallel,
            record_every: self.record_every,
            local: self.local,
            distant: self.distant,
            objective,
        }
    }

    /// Validate and build the search
    pub fn build(self) -> SearchOutcome<SmallWorldSearch<L, D, O>> {
        validate_run(
            self.dimensions,
            self.population_size,
            self.iterations,
            &self.bounds,
            &self.selection,
            &self.boundary_policy,
            &self.local,
            &self.distant,
        )?;

        Ok(SmallWorldSearch {
            dimensions: self.dimensions,
            population_size: self.population_size,
            iterations: self.iterations,
            bounds: self.bounds,
            boundary_policy: self.boundary_policy,
            selection: self.selection,
            parallel: self.parallel,
            record_every: self.record_every,
            local: self.local,
            distant: self.distant,
            objective: self.objective,
        })
    }
}

/// A validated small-world search, ready to run
pub struct SmallWorldSearch<L = MutationLaw, D = MutationLaw, O = Rastrigin> {
    dimensions: usize,
    population_size: usize,
    iterations: usize,
    bounds: Bounds,
    boundary_policy: BoundaryPolicy,
    selection: SelectionVariant,
    parallel: bool,
    record_every: usize,
    local: L,
    distant: D,
    objective: O,
}

impl SmallWorldSearch {
    /// Create a builder for the search
    pub fn builder() -> SmallWorldBuilder {
        SmallWorldBuilder::new()
    }

    /// Validate `config` and build the search it describes
    pub fn from_config(config: &SmallWorldConfig) -> SearchOutcome<Self> {
        SmallWorldBuilder::from_config(config).build()
    }
}

impl<L, D, O> SmallWorldSearch<L, D, O>
where
    L: MutationOperator,
    D: MutationOperator,
    O: Objective,
{
    /// Draw the initial population: N points uniform in the bounds
    pub fn initialize<R: Rng>(&self, rng: &mut R) -> Population {
        Population::random(
            self.population_size,
            self.dimensions,
            &self.bounds,
            &self.objective,
            rng,
        )
    }

    /// Run one generation over the whole population
    ///
    /// Returns after every candidate has been updated.
    pub fn evolve_generation<R: Rng>(
        &self,
        population: &mut Population,
        rng: &mut R,
    ) -> GenerationOutcome {
        let seeds: Vec<u64> = (0..population.len()).map(|_| rng.gen()).collect();
        let outcome = self.update_all(population.candidates_mut(), &seeds);
        population.increment_generation();
        outcome
    }

    #[cfg(feature = "parallel")]
    fn update_all(&self, candidates: &mut [Candidate], seeds: &[u64]) -> GenerationOutcome {
        if self.parallel {
            candidates
                .par_iter_mut()
                .zip(seeds.par_iter())
                .map(|(candidate, &seed)| self.update_candidate(candidate, seed))
                .reduce(GenerationOutcome::default, GenerationOutcome::merge)
        } else {
            self.update_sequential(candidates, seeds)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn update_all(&self, candidates: &mut [Candidate], seeds: &[u64]) -> GenerationOutcome {
        self.update_sequential(candidates, seeds)
    }

    fn update_sequential(&self, candidates: &mut [Candidate], seeds: &[u64]) -> GenerationOutcome {
        candidates
            .iter_mut()
            .zip(seeds.iter())
            .map(|(candidate, &seed)| self.update_candidate(candidate, seed))
            .fold(GenerationOutcome::default(), GenerationOutcome::merge)
    }

    fn mutant<M: MutationOperator, R: Rng>(
        &self,
        law: &M,
        point: &Point,
        boundary: &mut BoundaryStats,
        rng: &mut R,
    ) -> Candidate {
        let point = law.mutate(point, &self.bounds, &self.boundary_policy, boundary, rng);
        Candidate::evaluated(point, &self.objective)
    }

    fn update_candidate(&self, candidate: &mut Candidate, seed: u64) -> GenerationOutcome {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut boundary = BoundaryStats::default();

        let replacement = match self.selection {
            SelectionVariant::ThreeWay => {
                let local = self.mutant(&self.local, &candidate.point, &mut boundary, &mut rng);
                let distant = self.mutant(&self.distant, &candidate.point, &mut boundary, &mut rng);
                match leftmost_min([candidate.fitness, local.fitness, distant.fitness]) {
                    Some(1) => Some(local),
                    Some(2) => Some(distant),
                    _ => None,
                }
            }
            SelectionVariant::Probabilistic {
                local_search_probability,
            } => {
                let u: f64 = rng.gen();
                let mutant = if u <= local_search_probability {
                    self.mutant(&self.local, &candidate.point, &mut boundary, &mut rng)
                } else {
                    self.mutant(&self.distant, &candidate.point, &mut boundary, &mut rng)
                };
                mutant.is_better_than(candidate).then_some(mutant)
            }
        };

        let replaced = match replacement {
            Some(better) => {
                *candidate = better;
                1
            }
            None => 0,
        };

        GenerationOutcome {
            boundary,
            evaluations: self.selection.evaluations_per_candidate(),
            replaced,
        }
    }

    /// Run the search and reduce the final population to its best member
    #[instrument(
        level = "debug",
        skip(self, rng),
        fields(
            dimensions = self.dimensions,
            population = self.population_size,
            iterations = self.iterations,
            boundary = self.boundary_policy.name(),
        )
    )]
    pub fn run<R: Rng>(&self, rng: &mut R) -> SearchOutcome<RunReport> {
        let start_time = Instant::now();

        let mut population = self.initialize(rng);
        let mut evaluations = population.len();
        let mut boundary = BoundaryStats::default();
        let mut stats = RunStats::new();

        if self.record_every > 0 {
            stats.record(GenerationStats::from_population(&population, 0, evaluations));
        }

        for generation in 1..=self.iterations {
            let gen_start = Instant::now();
            let outcome = self.evolve_generation(&mut population, rng);
            boundary += outcome.boundary;
            evaluations += outcome.evaluations;

            let due = self.record_every > 0
                && (generation % self.record_every == 0 || generation == self.iterations);
            if due {
                let gen_stats = GenerationStats::from_population(&population, generation, evaluations)
                    .with_elapsed(gen_start.elapsed());
                tracing::debug!(
                    generation,
                    best_fitness = gen_stats.best_fitness,
                    replaced = outcome.replaced,
                    "generation complete"
                );
                stats.record(gen_stats);
            }
        }

        if boundary.exhausted > 0 {
            tracing::warn!(
                exhausted = boundary.exhausted,
                "rejection-resample budget ran out; original coordinates were kept"
            );
        }

        let generations = population.generation();
        let best = population.into_best()?;
        stats.set_runtime(start_time.elapsed());

        tracing::info!(
            best_fitness = best.fitness,
            evaluations,
            low = boundary.low,
            high = boundary.high,
            resamples = boundary.resamples,
            runtime_ms = stats.total_runtime_ms,
            "search finished"
        );

        Ok(RunReport::new(best.point, best.fitness, generations, evaluations)
            .with_boundary(boundary)
            .with_stats(stats))
    }
}

/// Run the search described by `config` and return the best point and its
/// fitness
///
/// The configuration is validated before any random number is drawn.
/// Per-generation statistics are not recorded since only the pair is
/// returned; use [`SmallWorldSearch::run`] for the full report.
pub fn optimize<R: Rng>(config: &SmallWorldConfig, rng: &mut R) -> SearchOutcome<(Point, f64)> {
    let search = SmallWorldBuilder::from_config(config).record_every(0).build()?;
    Ok(search.run(rng)?.into_pair())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::benchmarks::{evaluate, Sphere};

    /// Law that returns the coordinate unchanged
    struct Identity;

    impl MutationOperator for Identity {
        fn perturb<R: Rng>(&self, value: f64, _rng: &mut R) -> f64 {
            value
        }

        fn acceptance_lower_bound(&self, _range: f64) -> f64 {
            1.0
        }
    }

    /// Law that flips the coordinate's sign; Rastrigin fitness is unchanged
    struct Mirror;

    impl MutationOperator for Mirror {
        fn perturb<R: Rng>(&self, value: f64, _rng: &mut R) -> f64 {
            -value
        }
    }

    /// Law that shrinks towards the origin; always improves Sphere off the origin
    struct Halve;

    impl MutationOperator for Halve {
        fn perturb<R: Rng>(&self, value: f64, _rng: &mut R) -> f64 {
            value * 0.5
        }
    }

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(SmallWorldConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_rejects_zero_sizes() {
        for config in [
            SmallWorldConfig {
                dimensions: 0,
                ..Default::default()
            },
            SmallWorldConfig {
                population_size: 0,
                ..Default::default()
            },
            SmallWorldConfig {
                iterations: 0,
                ..Default::default()
            },
        ] {
            assert!(matches!(
                config.validate(),
                Err(SearchError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn test_config_rejects_bad_probability() {
        for p in [-0.1, 1.1, f64::NAN] {
            let config = SmallWorldConfig {
                selection: SelectionVariant::probabilistic(p),
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(SearchError::InvalidConfiguration(_))
            ));
        }
        for p in [0.0, 1.0] {
            let config = SmallWorldConfig {
                selection: SelectionVariant::probabilistic(p),
                ..Default::default()
            };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_config_rejects_bad_bounds_and_laws() {
        let config = SmallWorldConfig {
            bounds: Bounds {
                min: 1.0,
                max: -1.0,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SmallWorldConfig {
            distant_law: MutationLaw::cauchy(-1.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_flags_potential_non_termination() {
        let config = SmallWorldConfig {
            local_law: MutationLaw::uniform(1.0),
            boundary_policy: BoundaryPolicy::reject_resample(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SearchError::PotentialNonTermination { law: "local", .. })
        ));

        let config = SmallWorldConfig {
            local_law: MutationLaw::uniform(1.0),
            boundary_policy: BoundaryPolicy::reject_resample_bounded(100),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_optimize_rejects_before_drawing() {
        let mut rng = seeded(1);
        let mut untouched = seeded(1);
        let config = SmallWorldConfig {
            iterations: 0,
            ..Default::default()
        };
        assert!(optimize(&config, &mut rng).is_err());
        assert_eq!(rng.gen::<u64>(), untouched.gen::<u64>());
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = SmallWorldConfig {
            selection: SelectionVariant::ThreeWay,
            boundary_policy: BoundaryPolicy::reject_resample_bounded(50),
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        let back = SmallWorldConfig::from_json(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_config_json_partial_uses_defaults() {
        let config = SmallWorldConfig::from_json(r#"{ "dimensions": 5 }"#).unwrap();
        assert_eq!(config.dimensions, 5);
        assert_eq!(config.population_size, 10);
        assert!(SmallWorldConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn test_probabilistic_identity_never_replaces() {
        let search = SmallWorldBuilder::new()
            .selection(SelectionVariant::probabilistic(0.5))
            .local(Identity)
            .distant(Identity)
            .build()
            .unwrap();

        let mut rng = seeded(7);
        let mut population = search.initialize(&mut rng);
        let initial = population.clone();

        for _ in 0..25 {
            let outcome = search.evolve_generation(&mut population, &mut rng);
            assert_eq!(outcome.replaced, 0);
        }
        assert_eq!(population.candidates(), initial.candidates());
    }

    #[test]
    fn test_probabilistic_probability_extremes() {
        let always_local = SmallWorldBuilder::new()
            .selection(SelectionVariant::probabilistic(1.0))
            .local(Halve)
            .distant(Identity)
            .objective(Sphere)
            .build()
            .unwrap();
        let mut rng = seeded(19);
        let mut population = always_local.initialize(&mut rng);
        let outcome = always_local.evolve_generation(&mut population, &mut rng);
        assert_eq!(outcome.replaced, population.len());

        let always_distant = SmallWorldBuilder::new()
            .selection(SelectionVariant::probabilistic(0.0))
            .local(Halve)
            .distant(Identity)
            .objective(Sphere)
            .build()
            .unwrap();
        let mut rng = seeded(19);
        let mut population = always_distant.initialize(&mut rng);
        let initial = population.clone();
        for _ in 0..10 {
            let outcome = always_distant.evolve_generation(&mut population, &mut rng);
            assert_eq!(outcome.replaced, 0);
        }
        assert_eq!(population.candidates(), initial.candidates());
    }

    #[test]
    fn test_three_way_tie_keeps_current() {
        let search = SmallWorldBuilder::new()
            .selection(SelectionVariant::ThreeWay)
            .local(Mirror)
            .distant(Identity)
            .build()
            .unwrap();

        let mut rng = seeded(3);
        let mut population = search.initialize(&mut rng);
        let initial = population.clone();

        let outcome = search.evolve_generation(&mut population, &mut rng);
        assert_eq!(outcome.replaced, 0);
        assert_eq!(outcome.evaluations, 2 * initial.len());
        assert_eq!(population.candidates(), initial.candidates());
    }

    #[test]
    fn test_three_way_takes_strictly_better_mutant() {
        let search = SmallWorldBuilder::new()
            .selection(SelectionVariant::ThreeWay)
            .local(Identity)
            .distant(Halve)
            .objective(Sphere)
            .build()
            .unwrap();

        let mut rng = seeded(5);
        let mut population = search.initialize(&mut rng);
        let before = population.clone();
        search.evolve_generation(&mut population, &mut rng);

        for (old, new) in before.iter().zip(population.iter()) {
            assert_eq!(new.point, old.point.map(|c| c * 0.5));
        }
    }

    #[test]
    fn test_population_shape_invariant() {
        for selection in [SelectionVariant::ThreeWay, SelectionVariant::probabilistic(0.3)] {
            let search = SmallWorldBuilder::new()
                .dimensions(4)
                .population_size(6)
                .selection(selection)
                .boundary_policy(BoundaryPolicy::Reflect)
                .build()
                .unwrap();

            let mut rng = seeded(11);
            let mut population = search.initialize(&mut rng);
            for _ in 0..50 {
                assert_eq!(population.len(), 6);
                assert!(population.has_dimension(4));
                search.evolve_generation(&mut population, &mut rng);
            }
            assert_eq!(population.len(), 6);
            assert!(population.has_dimension(4));
        }
    }

    #[test]
    fn test_fitness_never_increases() {
        let search = SmallWorldBuilder::new()
            .selection(SelectionVariant::probabilistic(0.5))
            .build()
            .unwrap();

        let mut rng = seeded(13);
        let mut population = search.initialize(&mut rng);
        for _ in 0..100 {
            let before: Vec<f64> = population.iter().map(|c| c.fitness).collect();
            search.evolve_generation(&mut population, &mut rng);
            for (old, new) in before.iter().zip(population.iter()) {
                assert!(new.fitness <= *old);
            }
        }
    }

    #[test]
    fn test_clamp_keeps_points_in_bounds() {
        let search = SmallWorldBuilder::new()
            .local(MutationLaw::gaussian(4.0))
            .distant(MutationLaw::cauchy(5.0))
            .boundary_policy(BoundaryPolicy::Clamp)
            .build()
            .unwrap();

        let bounds = Bounds::default();
        let mut rng = seeded(17);
        let mut population = search.initialize(&mut rng);
        let mut boundary = BoundaryStats::default();
        for _ in 0..50 {
            boundary += search.evolve_generation(&mut population, &mut rng).boundary;
            assert!(population.iter().all(|c| c.point.is_within(&bounds)));
        }
        assert!(boundary.violations() > 0);
    }

    #[test]
    fn test_run_is_deterministic() {
        let config = SmallWorldConfig {
            iterations: 200,
            ..Default::default()
        };
        let (p1, f1) = optimize(&config, &mut seeded(42)).unwrap();
        let (p2, f2) = optimize(&config, &mut seeded(42)).unwrap();
        assert_eq!(f1.to_bits(), f2.to_bits());
        for (a, b) in p1.coords().iter().zip(p2.coords()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_optimize_matches_recorded_run() {
        let config = SmallWorldConfig {
            iterations: 50,
            record_every: 1,
            ..Default::default()
        };
        let (point, fitness) = optimize(&config, &mut seeded(23)).unwrap();
        let report = SmallWorldSearch::from_config(&config)
            .unwrap()
            .run(&mut seeded(23))
            .unwrap();
        assert_eq!(report.stats.num_recorded(), 51);
        assert_eq!(point, report.best_point);
        assert_eq!(fitness.to_bits(), report.best_fitness.to_bits());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let base = SmallWorldConfig {
            iterations: 100,
            population_size: 16,
            selection: SelectionVariant::ThreeWay,
            ..Default::default()
        };
        let parallel = SmallWorldConfig {
            parallel: true,
            ..base.clone()
        };
        let a = SmallWorldSearch::from_config(&base)
            .unwrap()
            .run(&mut seeded(9))
            .unwrap();
        let b = SmallWorldSearch::from_config(&parallel)
            .unwrap()
            .run(&mut seeded(9))
            .unwrap();
        assert_eq!(a.best_point, b.best_point);
        assert_eq!(a.best_fitness.to_bits(), b.best_fitness.to_bits());
        assert_eq!(a.boundary, b.boundary);
        assert_eq!(a.evaluations, b.evaluations);
    }

    #[test]
    fn test_run_report_consistency() {
        let search = SmallWorldBuilder::new()
            .iterations(50)
            .population_size(8)
            .record_every(10)
            .selection(SelectionVariant::ThreeWay)
            .build()
            .unwrap();

        let report = search.run(&mut seeded(21)).unwrap();
        assert_eq!(report.generations, 50);
        assert_eq!(report.evaluations, 8 + 50 * 8 * 2);
        assert_eq!(report.best_fitness, evaluate(&report.best_point));
        // generation 0 plus every 10th
        assert_eq!(report.stats.num_recorded(), 6);
        let history = report.stats.best_fitness_history();
        assert!(history.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(history.last().copied(), Some(report.best_fitness));
    }

    #[test]
    fn test_recording_disabled() {
        let search = SmallWorldBuilder::new()
            .iterations(5)
            .record_every(0)
            .build()
            .unwrap();
        let report = search.run(&mut seeded(2)).unwrap();
        assert_eq!(report.stats.num_recorded(), 0);
    }

    #[test]
    fn test_search_improves_rastrigin() {
        let search = SmallWorldBuilder::new()
            .iterations(1000)
            .population_size(10)
            .build()
            .unwrap();

        let mut rng = seeded(12345);
        let initial_best = search.initialize(&mut rng.clone()).best().unwrap().fitness;
        let report = search.run(&mut rng).unwrap();
        assert!(report.best_fitness <= initial_best);
        assert!(
            report.best_fitness < 10.0,
            "expected fitness < 10, got {}",
            report.best_fitness
        );
    }

    #[test]
    fn test_reject_resample_run_stays_in_bounds() {
        let search = SmallWorldBuilder::new()
            .iterations(100)
            .boundary_policy(BoundaryPolicy::reject_resample())
            .selection(SelectionVariant::ThreeWay)
            .build()
            .unwrap();
        let report = search.run(&mut seeded(8)).unwrap();
        assert!(report.best_point.is_within(&Bounds::default()));
        assert_eq!(report.boundary.exhausted, 0);
    }
}
