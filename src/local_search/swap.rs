//! Single-swap improvement.
//!
//! # Algorithm
//!
//! With shortfall `diff = target - sum(subset)`, look for a value `x` not in
//! the subset and a member `i` such that
//!
//! ```text
//! 0 <= x - i < diff
//! ```
//!
//! Replacing `i` by `x` raises the sum by `x - i`, which shrinks the
//! shortfall without overshooting the target. Values are scanned in stored
//! order, members in subset order, and the first qualifying pair is applied.
//! At most one swap is made (first-improvement, one step); GRASP restarts
//! supply the outer iteration.
//!
//! The bound is strict, so a swap alone never closes the gap exactly; exact
//! hits come from construction.
//!
//! # Complexity
//!
//! O(n·k) where k = subset size.

use std::collections::HashSet;

use crate::models::{Instance, Subset};

/// Applies at most one improving swap to `subset`.
///
/// Returns the subset unchanged if it already meets or exceeds the target,
/// or if no improving pair exists.
///
/// # Examples
///
/// ```
/// use u_subset_sum::models::{Instance, Subset};
/// use u_subset_sum::local_search::swap_improve;
///
/// let inst = Instance::new(vec![8, 5, 4], 10).unwrap();
/// let start = Subset::from_elements(vec![4]);
/// // shortfall 6, and 8 - 4 = 4 < 6
/// let improved = swap_improve(&inst, &start);
/// assert_eq!(improved.elements(), &[8]);
/// assert!(inst.distance(&improved) < inst.distance(&start));
/// ```
pub fn swap_improve(instance: &Instance, subset: &Subset) -> Subset {
    let diff = instance.distance(subset);
    let mut result = subset.clone();
    if diff <= 0 || subset.is_empty() {
        return result;
    }

    let members: HashSet<u64> = subset.elements().iter().copied().collect();

    for &x in instance.values() {
        if members.contains(&x) {
            continue;
        }
        for &i in subset.elements() {
            if x < i {
                continue;
            }
            if gain_below(x - i, diff) {
                result.replace(i, x);
                return result;
            }
        }
    }

    result
}

/// `gain < diff`, with `diff > 0`.
fn gain_below(gain: u64, diff: i64) -> bool {
    i64::try_from(gain).is_ok_and(|g| g < diff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::{greedy, randomized_greedy};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_swap_first_improving_pair() {
        let inst = Instance::new(vec![9, 6, 2], 10).unwrap();
        let start = Subset::from_elements(vec![2]);
        // x = 9: 9 - 2 = 7 < 8 -> accepted first.
        let improved = swap_improve(&inst, &start);
        assert_eq!(improved.elements(), &[9]);
        assert_eq!(inst.distance(&improved), 1);
    }

    #[test]
    fn test_swap_respects_strict_bound() {
        // shortfall 2; x - i must be 0 or 1, never exactly 2.
        let inst = Instance::new(vec![7, 5, 3], 10).unwrap();
        let start = Subset::from_elements(vec![5, 3]);
        let improved = swap_improve(&inst, &start);
        assert_eq!(improved, start);
    }

    #[test]
    fn test_swap_unit_step() {
        let inst = Instance::new(vec![8, 5, 4], 10).unwrap();
        let start = Subset::from_elements(vec![4]);
        // shortfall 6: 8 - 4 = 4 < 6 -> swap.
        let improved = swap_improve(&inst, &start);
        assert_eq!(improved.elements(), &[8]);
    }

    #[test]
    fn test_swap_exact_unchanged() {
        let inst = Instance::new(vec![5, 3, 2], 8).unwrap();
        let start = Subset::from_elements(vec![5, 3]);
        assert_eq!(swap_improve(&inst, &start), start);
    }

    #[test]
    fn test_swap_empty_subset_unchanged() {
        let inst = Instance::new(vec![10], 7).unwrap();
        let improved = swap_improve(&inst, &Subset::new());
        assert!(improved.is_empty());
    }

    #[test]
    fn test_swap_overshoot_unchanged() {
        let inst = Instance::new(vec![5, 3, 2], 4).unwrap();
        let start = Subset::from_elements(vec![5]);
        assert_eq!(swap_improve(&inst, &start), start);
    }

    #[test]
    fn test_swap_never_duplicates() {
        let inst = Instance::new(vec![6, 4, 3], 20).unwrap();
        let start = Subset::from_elements(vec![4, 3]);
        let improved = swap_improve(&inst, &start);
        // Only 6 is outside the subset; 6 - 4 = 2 < 13 -> replace 4.
        assert_eq!(improved.elements(), &[3, 6]);
    }

    proptest! {
        #[test]
        fn prop_swap_never_worsens_or_overshoots(
            values in prop::collection::hash_set(0u64..300, 0..25),
            target in 0u64..3000,
            seed in any::<u64>(),
        ) {
            let inst = Instance::new(values.into_iter().collect(), target).unwrap();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            for c in [greedy(&inst), randomized_greedy(&inst, &mut rng)] {
                let improved = swap_improve(&inst, &c.subset);
                prop_assert!(improved.sum() <= target);
                prop_assert!(inst.distance(&improved) <= inst.distance(&c.subset));
                prop_assert_eq!(improved.len(), c.subset.len());
                let unique: std::collections::HashSet<u64> =
                    improved.elements().iter().copied().collect();
                prop_assert_eq!(unique.len(), improved.len());
            }
        }
    }
}
