//! Greedy first-fit construction.
//!
//! Builds one subset by walking the values in a fixed order and including
//! every value that still fits under the target. A value that does not fit
//! at its turn never fits later (the running sum only grows), so a single
//! pass over a snapshot of the order is enough. Values above the target are
//! skipped by the same rule.
//!
//! The deterministic variant uses the stored order; the randomized variant
//! shuffles a copy first, which is what diversifies GRASP iterations.
//!
//! # Complexity
//!
//! O(n), plus O(n) for the shuffle.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Instance, Subset};

/// A constructed subset and its remaining distance to the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Construction {
    /// `target - sum(subset)`. Never negative; zero exactly on a match.
    pub shortfall: u64,
    /// The selected values, in inclusion order.
    pub subset: Subset,
}

impl Construction {
    /// Returns `true` if the subset sums exactly to the target.
    pub fn is_exact(&self) -> bool {
        self.shortfall == 0
    }
}

/// Greedy construction over the values in stored order.
///
/// # Examples
///
/// ```
/// use u_subset_sum::models::Instance;
/// use u_subset_sum::constructive::greedy;
///
/// let inst = Instance::new(vec![5, 3, 2], 7).unwrap();
/// let c = greedy(&inst);
/// assert_eq!(c.subset.elements(), &[5, 2]);
/// assert_eq!(c.shortfall, 0);
///
/// let inst = Instance::new(vec![10], 7).unwrap();
/// let c = greedy(&inst);
/// assert!(c.subset.is_empty());
/// assert_eq!(c.shortfall, 7);
/// ```
pub fn greedy(instance: &Instance) -> Construction {
    first_fit(instance.target(), instance.values().iter().copied())
}

/// Greedy construction over a uniformly shuffled copy of the values.
///
/// The RNG is supplied by the caller so runs can be seeded.
pub fn randomized_greedy<R: Rng + ?Sized>(instance: &Instance, rng: &mut R) -> Construction {
    let mut order = instance.values().to_vec();
    order.shuffle(rng);
    first_fit(instance.target(), order)
}

fn first_fit(target: u64, order: impl IntoIterator<Item = u64>) -> Construction {
    let mut subset = Subset::new();
    let mut remaining = target;

    for x in order {
        if remaining == 0 {
            break;
        }
        if x <= remaining {
            subset.push(x);
            remaining -= x;
        }
    }

    Construction {
        shortfall: remaining,
        subset,
    }
}
