//! Candidate subset type.

use serde::{Deserialize, Serialize};

/// A selection of values together with its sum.
///
/// Elements keep insertion order. The sum is maintained on every mutation,
/// so reading it is O(1). It saturates at `u64::MAX`; subsets drawn from an
/// [`Instance`](super::Instance) never reach that bound.
///
/// # Examples
///
/// ```
/// use u_subset_sum::models::Subset;
///
/// let mut s = Subset::new();
/// s.push(5);
/// s.push(3);
/// assert_eq!(s.sum(), 8);
/// assert_eq!(s.shortfall(10), 2);
/// assert_eq!(s.shortfall(6), -2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<u64>", into = "Vec<u64>")]
pub struct Subset {
    elements: Vec<u64>,
    sum: u64,
}

impl Subset {
    /// Creates an empty subset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a subset from the given elements.
    pub fn from_elements(elements: Vec<u64>) -> Self {
        let sum = elements.iter().fold(0u64, |acc, &v| acc.saturating_add(v));
        Self { elements, sum }
    }

    /// Adds a value to the subset.
    pub fn push(&mut self, value: u64) {
        self.elements.push(value);
        self.sum = self.sum.saturating_add(value);
    }

    /// Removes `old` and appends `new` in its place.
    ///
    /// Returns `false` (leaving the subset untouched) if `old` is not present.
    pub fn replace(&mut self, old: u64, new: u64) -> bool {
        match self.elements.iter().position(|&e| e == old) {
            Some(pos) => {
                self.elements.remove(pos);
                self.elements.push(new);
                self.sum = (self.sum - old).saturating_add(new);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if the subset contains `value`.
    pub fn contains(&self, value: u64) -> bool {
        self.elements.contains(&value)
    }

    /// Returns the selected values in insertion order.
    pub fn elements(&self) -> &[u64] {
        &self.elements
    }

    /// Sum of the selected values.
    pub fn sum(&self) -> u64 {
        self.sum
    }

    /// Number of selected values.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Signed distance `target - sum`. Negative when the subset overshoots.
    ///
    /// Saturates at the `i64` bounds.
    pub fn shortfall(&self, target: u64) -> i64 {
        if target >= self.sum {
            i64::try_from(target - self.sum).unwrap_or(i64::MAX)
        } else {
            i64::try_from(self.sum - target).map_or(i64::MIN, |d| -d)
        }
    }
}

impl From<Vec<u64>> for Subset {
    fn from(elements: Vec<u64>) -> Self {
        Self::from_elements(elements)
    }
}

impl From<Subset> for Vec<u64> {
    fn from(subset: Subset) -> Self {
        subset.elements
    }
}
