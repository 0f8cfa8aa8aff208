//! Blind random sampling.
//!
//! Draws subsets of random size uniformly and stops at the first exact
//! match. There is no guidance toward the target, so this is only a
//! baseline for comparing the other heuristics against.

use rand::seq::index;
use rand::Rng;
use tracing::debug;

use crate::models::{Instance, Subset};

/// Samples up to `max_attempts` random subsets and returns the first whose
/// sum equals the target.
///
/// Each attempt picks a size uniformly in `[0, n]` and then that many
/// distinct values. Returns `None` if no attempt matched.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use u_subset_sum::models::Instance;
/// use u_subset_sum::constructive::random_sampling;
///
/// let inst = Instance::new(vec![5, 3, 2], 5).unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let found = random_sampling(&inst, &mut rng, 1000).unwrap();
/// assert_eq!(found.sum(), 5);
/// ```
pub fn random_sampling<R: Rng + ?Sized>(
    instance: &Instance,
    rng: &mut R,
    max_attempts: usize,
) -> Option<Subset> {
    let values = instance.values();
    let n = values.len();

    for attempt in 1..=max_attempts {
        let amount = rng.random_range(0..=n);
        let candidate = Subset::from_elements(
            index::sample(rng, n, amount)
                .into_iter()
                .map(|i| values[i])
                .collect(),
        );
        if instance.is_solution(&candidate) {
            debug!(event = "sampling_found", attempts = attempt, sum = candidate.sum());
            return Some(candidate);
        }
    }

    debug!(event = "sampling_exhausted", attempts = max_attempts);
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_sampling_finds_match() {
        let inst = Instance::new(vec![9, 7, 4, 1], 11).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let found = random_sampling(&inst, &mut rng, 10_000).unwrap();
        assert_eq!(found.sum(), 11);
        assert!(found.elements().iter().all(|v| inst.values().contains(v)));
    }

    #[test]
    fn test_sampling_no_instance() {
        let inst = Instance::new(vec![9, 7, 4, 1], 22).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!(random_sampling(&inst, &mut rng, 500).is_none());
    }

    #[test]
    fn test_sampling_zero_attempts() {
        let inst = Instance::new(vec![1], 1).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!(random_sampling(&inst, &mut rng, 0).is_none());
    }

    #[test]
    fn test_sampling_empty_instance() {
        let inst = Instance::new(vec![], 0).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let found = random_sampling(&inst, &mut rng, 1).unwrap();
        assert!(found.is_empty());
    }
}
