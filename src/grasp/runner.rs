//! GRASP runner.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{debug, info};

use super::GraspConfig;
use crate::constructive::randomized_greedy;
use crate::local_search::swap_improve;
use crate::models::{Instance, Subset};

/// Terminal state of a GRASP run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraspStatus {
    /// An exact match was found.
    Solved,
    /// The iteration budget ran out; `best` is the closest subset seen.
    BestEffort,
}

/// Result of a GRASP run.
///
/// A [`GraspStatus::BestEffort`] result is the expected outcome on
/// unsolvable or hard instances, not an error; inspect `shortfall` to see
/// how close the search came.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraspResult {
    /// Closest-from-below subset found.
    pub best: Subset,
    /// Signed distance `target - sum(best)`.
    pub shortfall: i64,
    /// Number of iterations executed. A run that is exact from the start
    /// (target 0) still counts its first round. In parallel runs this is
    /// the number of rounds started before cancellation.
    pub iterations: usize,
    /// Whether the run ended on an exact match.
    pub status: GraspStatus,
}

impl GraspResult {
    /// Returns `true` if `best` sums exactly to the target.
    pub fn is_exact(&self) -> bool {
        self.status == GraspStatus::Solved
    }
}

/// Runs GRASP with the default configuration and the given iteration budget.
///
/// # Examples
///
/// ```
/// use u_subset_sum::models::Instance;
/// use u_subset_sum::grasp::{grasp, GraspStatus};
///
/// let inst = Instance::new(vec![10], 7).unwrap();
/// let result = grasp(&inst, 50);
/// assert_eq!(result.status, GraspStatus::BestEffort);
/// assert_eq!(result.shortfall, 7);
/// assert_eq!(result.iterations, 50);
/// ```
pub fn grasp(instance: &Instance, max_iterations: usize) -> GraspResult {
    GraspRunner::run(
        instance,
        &GraspConfig::default().with_max_iterations(max_iterations),
    )
}

/// Executes GRASP on a subset sum instance.
///
/// # Examples
///
/// ```
/// use u_subset_sum::models::Instance;
/// use u_subset_sum::grasp::{GraspConfig, GraspRunner};
///
/// let inst = Instance::new(vec![21, 17, 12, 9, 5, 2], 31).unwrap();
/// let config = GraspConfig::default().with_seed(42);
/// let result = GraspRunner::run(&inst, &config);
/// assert!(result.is_exact());
/// assert_eq!(result.best.sum(), 31);
/// ```
pub struct GraspRunner;

impl GraspRunner {
    /// Runs GRASP according to `config`.
    pub fn run(instance: &Instance, config: &GraspConfig) -> GraspResult {
        if config.parallel {
            let seed = config.seed.unwrap_or_else(|| rand::rng().random());
            return Self::run_parallel(instance, config.max_iterations, seed);
        }
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        Self::run_with_rng(instance, config.max_iterations, &mut rng)
    }

    /// Sequential GRASP driven by a caller-supplied RNG.
    pub fn run_with_rng<R: Rng + ?Sized>(
        instance: &Instance,
        max_iterations: usize,
        rng: &mut R,
    ) -> GraspResult {
        let start = Instant::now();
        info!(
            event = "grasp_start",
            size = instance.size(),
            target = instance.target(),
            max_iterations = max_iterations,
            parallel = false,
        );

        let mut best = Subset::new();
        let mut best_distance = instance.distance(&best);
        let mut iterations = 0;

        // Each round constructs and polishes before the exact-match check.
        while iterations < max_iterations {
            iterations += 1;
            let candidate = randomized_greedy(instance, rng);
            let improved = swap_improve(instance, &candidate.subset);
            let distance = instance.distance(&improved);
            if distance < best_distance {
                debug!(
                    event = "grasp_improved",
                    iteration = iterations,
                    shortfall = distance,
                    elements = ?improved.elements(),
                );
                best = improved;
                best_distance = distance;
            }
            if instance.is_solution(&best) {
                break;
            }
        }

        finish(instance, best, iterations, start)
    }

    /// Parallel GRASP over the rayon pool.
    ///
    /// Iteration `k` draws from ChaCha stream `k` of `seed`, so the set of
    /// candidates does not depend on scheduling. The first exact match
    /// raises a shared flag and iterations not yet started are skipped.
    /// Among the candidates evaluated, the smallest shortfall wins, with
    /// ties going to the lowest iteration index.
    pub fn run_parallel(instance: &Instance, max_iterations: usize, seed: u64) -> GraspResult {
        let start = Instant::now();
        info!(
            event = "grasp_start",
            size = instance.size(),
            target = instance.target(),
            max_iterations = max_iterations,
            parallel = true,
        );

        let solved = AtomicBool::new(false);
        let evaluated = AtomicUsize::new(0);

        let winner = (0..max_iterations)
            .into_par_iter()
            .filter_map(|iteration| {
                if solved.load(Ordering::Relaxed) {
                    return None;
                }
                evaluated.fetch_add(1, Ordering::Relaxed);

                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                rng.set_stream(iteration as u64);
                let candidate = randomized_greedy(instance, &mut rng);
                let improved = swap_improve(instance, &candidate.subset);
                if instance.is_solution(&improved) {
                    solved.store(true, Ordering::Relaxed);
                }
                Some((instance.distance(&improved), iteration, improved))
            })
            .min_by_key(|(distance, iteration, _)| (*distance, *iteration));

        let empty = Subset::new();
        let best = match winner {
            Some((distance, iteration, subset)) if distance < instance.distance(&empty) => {
                debug!(
                    event = "grasp_improved",
                    iteration = iteration + 1,
                    shortfall = distance,
                    elements = ?subset.elements(),
                );
                subset
            }
            _ => empty,
        };

        finish(instance, best, evaluated.into_inner(), start)
    }
}

fn finish(instance: &Instance, best: Subset, iterations: usize, start: Instant) -> GraspResult {
    let shortfall = instance.distance(&best);
    let status = if instance.is_solution(&best) {
        GraspStatus::Solved
    } else {
        GraspStatus::BestEffort
    };

    info!(
        event = "grasp_end",
        status = ?status,
        iterations = iterations,
        shortfall = shortfall,
        duration_ms = start.elapsed().as_millis() as u64,
    );

    GraspResult {
        best,
        shortfall,
        iterations,
        status,
    }
}
