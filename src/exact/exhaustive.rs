//! Exhaustive power-set search.
//!
//! # Algorithm
//!
//! Every integer `p` in `[0, 2ⁿ)` is read as a bit pattern of length `n`.
//! Value `k` (in stored order) is selected when bit `n-1-k` is set, so the
//! first value maps to the most significant bit and the empty subset comes
//! first. Each pattern's sum is compared with the target and the first
//! match in pattern order is returned.
//!
//! # Complexity
//!
//! O(2ⁿ·n) time, O(n) space. Patterns are `u64`, which caps `n` at
//! [`MAX_EXHAUSTIVE_SIZE`]; in practice anything beyond ~30 values is
//! already out of reach and callers are expected to use the dynamic solver.

use rayon::prelude::*;
use tracing::debug;

use crate::error::{Result, SubsetSumError};
use crate::models::{Instance, Subset};

/// Largest instance size whose power set can be indexed by a `u64` pattern.
pub const MAX_EXHAUSTIVE_SIZE: usize = 63;

/// Iterator over every subset of an instance's values, in pattern order.
///
/// # Examples
///
/// ```
/// use u_subset_sum::models::Instance;
/// use u_subset_sum::exact::PowerSet;
///
/// let inst = Instance::new(vec![5, 3], 0).unwrap();
/// let all: Vec<Vec<u64>> = PowerSet::new(&inst)
///     .unwrap()
///     .map(|s| s.elements().to_vec())
///     .collect();
/// assert_eq!(all, vec![vec![], vec![3], vec![5], vec![5, 3]]);
/// ```
#[derive(Debug, Clone)]
pub struct PowerSet<'a> {
    values: &'a [u64],
    next: u64,
    end: u64,
}

impl<'a> PowerSet<'a> {
    /// Creates the power-set iterator for an instance.
    ///
    /// # Errors
    ///
    /// [`SubsetSumError::InstanceTooLarge`] if the instance has more than
    /// [`MAX_EXHAUSTIVE_SIZE`] values.
    pub fn new(instance: &'a Instance) -> Result<Self> {
        let end = pattern_count(instance)?;
        Ok(Self {
            values: instance.values(),
            next: 0,
            end,
        })
    }
}

impl Iterator for PowerSet<'_> {
    type Item = Subset;

    fn next(&mut self) -> Option<Subset> {
        if self.next >= self.end {
            return None;
        }
        let subset = pattern_subset(self.values, self.next);
        self.next += 1;
        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.next).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

/// Searches the full power set for a subset summing to the target.
///
/// Returns the first match in pattern order, or `None` once every subset
/// has been tried. Absence of a match is a normal result.
///
/// # Errors
///
/// [`SubsetSumError::InstanceTooLarge`] if the instance has more than
/// [`MAX_EXHAUSTIVE_SIZE`] values.
///
/// # Examples
///
/// ```
/// use u_subset_sum::models::Instance;
/// use u_subset_sum::exact::exhaustive_search;
///
/// let inst = Instance::new(vec![5, 3, 2], 8).unwrap();
/// let found = exhaustive_search(&inst).unwrap().unwrap();
/// assert_eq!(found.sum(), 8);
///
/// let inst = Instance::new(vec![5, 3, 2], 11).unwrap();
/// assert!(exhaustive_search(&inst).unwrap().is_none());
/// ```
pub fn exhaustive_search(instance: &Instance) -> Result<Option<Subset>> {
    let end = pattern_count(instance)?;
    let values = instance.values();
    let target = instance.target();

    let found = (0..end).find(|&p| pattern_sum(values, p) == target);
    Ok(report(instance, found))
}

/// Parallel version of [`exhaustive_search`].
///
/// The pattern range is split across the rayon pool; the returned subset is
/// the first match in pattern order, identical to the sequential search.
pub fn exhaustive_search_parallel(instance: &Instance) -> Result<Option<Subset>> {
    let end = pattern_count(instance)?;
    let values = instance.values();
    let target = instance.target();

    let found = (0..end)
        .into_par_iter()
        .find_first(|&p| pattern_sum(values, p) == target);
    Ok(report(instance, found))
}

fn report(instance: &Instance, found: Option<u64>) -> Option<Subset> {
    match found {
        Some(pattern) => {
            let subset = pattern_subset(instance.values(), pattern);
            debug!(
                event = "exhaustive_found",
                pattern = pattern,
                elements = ?subset.elements(),
            );
            Some(subset)
        }
        None => {
            debug!(event = "exhaustive_exhausted", size = instance.size());
            None
        }
    }
}

fn pattern_count(instance: &Instance) -> Result<u64> {
    let n = instance.size();
    if n > MAX_EXHAUSTIVE_SIZE {
        return Err(SubsetSumError::InstanceTooLarge {
            size: n,
            max: MAX_EXHAUSTIVE_SIZE,
        });
    }
    Ok(1u64 << n)
}

fn is_selected(n: usize, k: usize, pattern: u64) -> bool {
    (pattern >> (n - 1 - k)) & 1 == 1
}

fn pattern_sum(values: &[u64], pattern: u64) -> u64 {
    let n = values.len();
    values
        .iter()
        .enumerate()
        .filter(|&(k, _)| is_selected(n, k, pattern))
        .map(|(_, &v)| v)
        .sum()
}

fn pattern_subset(values: &[u64], pattern: u64) -> Subset {
    let n = values.len();
    let elements = values
        .iter()
        .enumerate()
        .filter(|&(k, _)| is_selected(n, k, pattern))
        .map(|(_, &v)| v)
        .collect();
    Subset::from_elements(elements)
}
