//! Rastrigin Parameter Sweep
//!
//! This example sweeps the local/distant law strengths and the local-search
//! probability, runs the small-world search repeatedly for each law pairing,
//! and prints a Markdown table of average results and timings.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use small_world::prelude::*;
use tracing::Level;

struct Package {
    name: &'static str,
    local: MutationLaw,
    distant: MutationLaw,
}

struct Best {
    average: f64,
    local: f64,
    distant: f64,
    probability: f64,
}

/// Inclusive float range with a fixed step
fn sweep(start: f64, end: f64, step: f64) -> Vec<f64> {
    let steps = ((end - start) / step).round().max(0.0) as usize;
    (0..=steps).map(|i| start + i as f64 * step).collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(Level::WARN).init();

    const DIMENSIONS: usize = 3;
    const ITERATIONS: usize = 1000;
    const CANDIDATES: usize = 10;
    const TESTS: usize = 100;

    println!("Simulation Parameters:");
    println!("- Number of dimensions: {}", DIMENSIONS);
    println!("- Max iterations per test: {}", ITERATIONS);
    println!("- Number of candidate solutions: {}", CANDIDATES);
    println!("- Number of tests per algorithm: {}", TESTS);
    println!();

    let local_multipliers = sweep(1.0, 1.0, 0.01);
    let distant_multipliers = sweep(0.05, 0.05, 0.05);
    let probabilities = sweep(0.5, 0.5, 0.05);

    let mut rng = StdRng::seed_from_u64(12345);
    let mut best: BTreeMap<&'static str, Best> = BTreeMap::new();

    println!("| Algorithm | Local multiplier | Distant multiplier | Local Search Probability | Average Result | Average Time (ms) |");
    println!("|-|-|-|-|-|-|");

    for &probability in &probabilities {
        for &local in &local_multipliers {
            for &distant in &distant_multipliers {
                let packages = [
                    Package {
                        name: "Normal+Cauchy",
                        local: MutationLaw::gaussian(local),
                        distant: MutationLaw::cauchy(distant),
                    },
                    Package {
                        name: "Normal+Normal",
                        local: MutationLaw::gaussian(local),
                        distant: MutationLaw::gaussian(distant),
                    },
                    Package {
                        name: "Uniform+Cauchy",
                        local: MutationLaw::uniform(local),
                        distant: MutationLaw::cauchy(distant),
                    },
                ];

                for package in &packages {
                    let config = SmallWorldConfig {
                        dimensions: DIMENSIONS,
                        population_size: CANDIDATES,
                        iterations: ITERATIONS,
                        local_law: package.local,
                        distant_law: package.distant,
                        selection: SelectionVariant::probabilistic(probability),
                        record_every: 0,
                        ..Default::default()
                    };

                    let mut sum_results = 0.0;
                    let mut sum_time = Duration::ZERO;
                    for _ in 0..TESTS {
                        let start = Instant::now();
                        let (point, _) = optimize(&config, &mut rng)?;
                        sum_results += evaluate(&point);
                        sum_time += start.elapsed();
                    }

                    let average = sum_results / TESTS as f64;
                    println!(
                        "| {} | {:.2} | {:.2} | {:.2} | {:.4} | {} |",
                        package.name,
                        local,
                        distant,
                        probability,
                        average,
                        sum_time.as_millis() / TESTS as u128
                    );

                    let improved = best
                        .get(package.name)
                        .map_or(true, |b| average < b.average);
                    if improved {
                        best.insert(
                            package.name,
                            Best {
                                average,
                                local,
                                distant,
                                probability,
                            },
                        );
                    }
                }
            }
        }
    }

    println!("\nBest Parameters Found for Each Mutation Package:");
    for (name, b) in &best {
        println!("- {}:", name);
        println!("\t- Local Search Probability: {:.2}", b.probability);
        println!("\t- Local Multiplier: {:.2}", b.local);
        println!("\t- Distant Multiplier: {:.2}", b.distant);
        println!("\t- Average Result: {:.4}", b.average);
    }

    Ok(())
}
