//! Subset sum problem instance.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Subset;
use crate::error::{Result, SubsetSumError};

/// One subset sum problem: a set of distinct values and a target.
///
/// Values keep the order they were given in; solvers that enumerate
/// (exhaustive search, dynamic programming) walk this order. Instances are
/// read-only once built, and the total of all values is cached so that no
/// subset sum computed by a solver can overflow.
///
/// # Examples
///
/// ```
/// use u_subset_sum::models::Instance;
///
/// let inst = Instance::new(vec![5, 3, 2], 8).unwrap();
/// assert_eq!(inst.size(), 3);
/// assert_eq!(inst.target(), 8);
/// assert_eq!(inst.total(), 10);
///
/// assert!(Instance::new(vec![1, 1], 2).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInstance")]
pub struct Instance {
    values: Vec<u64>,
    target: u64,
    #[serde(skip_serializing)]
    total: u64,
}

#[derive(Deserialize)]
struct RawInstance {
    values: Vec<u64>,
    target: u64,
}

impl TryFrom<RawInstance> for Instance {
    type Error = SubsetSumError;

    fn try_from(raw: RawInstance) -> Result<Self> {
        Self::new(raw.values, raw.target)
    }
}

impl Instance {
    /// Creates an instance from an explicit value set and target.
    ///
    /// # Errors
    ///
    /// - [`SubsetSumError::DuplicateValue`] if a value repeats
    /// - [`SubsetSumError::SumOverflow`] if the values do not sum within `u64`
    pub fn new(values: Vec<u64>, target: u64) -> Result<Self> {
        let mut seen = HashSet::with_capacity(values.len());
        let mut total: u64 = 0;
        for &v in &values {
            if !seen.insert(v) {
                return Err(SubsetSumError::DuplicateValue(v));
            }
            total = total.checked_add(v).ok_or(SubsetSumError::SumOverflow)?;
        }
        Ok(Self {
            values,
            target,
            total,
        })
    }

    /// The value set, in stored order.
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// The target sum.
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Number of values.
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Sum of all values.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Signed distance `target - sum(subset)`.
    pub fn distance(&self, subset: &Subset) -> i64 {
        subset.shortfall(self.target)
    }

    /// Returns `true` if the subset sums exactly to the target.
    pub fn is_solution(&self, subset: &Subset) -> bool {
        subset.sum() == self.target
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SSP instance: S={:?}\tt={}", self.values, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_accessors() {
        let inst = Instance::new(vec![5, 3, 2], 8).unwrap();
        assert_eq!(inst.values(), &[5, 3, 2]);
        assert_eq!(inst.size(), 3);
        assert_eq!(inst.total(), 10);
    }

    #[test]
    fn test_instance_empty() {
        let inst = Instance::new(vec![], 0).unwrap();
        assert_eq!(inst.size(), 0);
        assert_eq!(inst.total(), 0);
    }

    #[test]
    fn test_instance_rejects_duplicates() {
        let err = Instance::new(vec![4, 7, 4], 11).unwrap_err();
        assert!(matches!(err, SubsetSumError::DuplicateValue(4)));
    }

    #[test]
    fn test_instance_rejects_overflow() {
        let err = Instance::new(vec![u64::MAX, 1], 0).unwrap_err();
        assert!(matches!(err, SubsetSumError::SumOverflow));
    }

    #[test]
    fn test_instance_distance() {
        let inst = Instance::new(vec![5, 3, 2], 8).unwrap();
        let s = Subset::from_elements(vec![5, 3]);
        assert_eq!(inst.distance(&s), 0);
        assert!(inst.is_solution(&s));
        assert_eq!(inst.distance(&Subset::from_elements(vec![5, 3, 2])), -2);
    }

    #[test]
    fn test_instance_display() {
        let inst = Instance::new(vec![5, 3], 8).unwrap();
        assert_eq!(inst.to_string(), "SSP instance: S=[5, 3]\tt=8");
    }

    #[test]
    fn test_instance_deserialize_validates() {
        let inst: Instance = toml::from_str("values = [5, 3, 2]\ntarget = 8").unwrap();
        assert_eq!(inst.total(), 10);

        let dup = toml::from_str::<Instance>("values = [5, 5]\ntarget = 8");
        assert!(dup.is_err());
    }
}
