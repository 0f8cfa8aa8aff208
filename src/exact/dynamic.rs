//! Dynamic-programming reachability.
//!
//! # Algorithm
//!
//! Maintain the set `L` of sums in `[0, t]` reachable with the values seen
//! so far, starting from `L = {0}`. For each value `x` in stored order,
//! `L ← L ∪ { s + x : s ∈ L, s + x ≤ t }`, and stop as soon as `t ∈ L`.
//!
//! While `t + 1` bits fit in [`DENSE_WORD_LIMIT`] words, `L` is a bitset and
//! the union step is a word-wise shift-or. Larger targets switch to an
//! ordered sparse set holding only the sums actually reached.
//!
//! # Complexity
//!
//! Dense: O(n·t/64) time and O(t/64) words, at most 128 MiB.
//! Sparse: O(n·|L| log |L|) time and O(|L|) memory, where `|L| <= 2ⁿ`.
//! Targets above the sum of all values are answered without allocating.

use std::collections::BTreeSet;

use tracing::debug;

use crate::models::Instance;

/// Largest dense bitset, in 64-bit words (2²⁴ words = 128 MiB).
pub const DENSE_WORD_LIMIT: u64 = 1 << 24;

/// Outcome of a reachability scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reachability {
    /// Whether the target is attainable by some subset.
    pub reachable: bool,
    /// Sum of the reachable-set sizes before each processed value.
    pub work: u64,
    /// Number of values processed before the scan stopped.
    pub scanned: usize,
}

/// Returns `true` if some subset of the instance values sums to the target.
///
/// # Examples
///
/// ```
/// use u_subset_sum::models::Instance;
/// use u_subset_sum::exact::reachable;
///
/// assert!(reachable(&Instance::new(vec![5, 3, 2], 8).unwrap()));
/// assert!(!reachable(&Instance::new(vec![5, 3, 2], 11).unwrap()));
/// assert!(reachable(&Instance::new(vec![], 0).unwrap()));
/// ```
pub fn reachable(instance: &Instance) -> bool {
    reachability(instance).reachable
}

/// Runs the reachability scan and reports the work it took.
pub fn reachability(instance: &Instance) -> Reachability {
    let target = instance.target();

    if target == 0 {
        return finish(Reachability {
            reachable: true,
            work: 0,
            scanned: 0,
        });
    }
    if target > instance.total() {
        return finish(Reachability {
            reachable: false,
            work: 0,
            scanned: 0,
        });
    }

    scan(instance, SumSet::for_limit(target))
}

fn scan(instance: &Instance, mut sums: SumSet) -> Reachability {
    let target = instance.target();
    let mut work = 0u64;

    for (i, &x) in instance.values().iter().enumerate() {
        work += sums.len();
        sums.add_shifted(x);
        if sums.contains(target) {
            return finish(Reachability {
                reachable: true,
                work,
                scanned: i + 1,
            });
        }
    }

    finish(Reachability {
        reachable: false,
        work,
        scanned: instance.size(),
    })
}

fn finish(result: Reachability) -> Reachability {
    debug!(
        event = "dynamic_end",
        reachable = result.reachable,
        work = result.work,
        scanned = result.scanned,
    );
    result
}

/// Reachable sums over `[0, limit]`.
enum SumSet {
    Dense(DenseSums),
    Sparse(SparseSums),
}

impl SumSet {
    /// Creates `{0}`, dense when the bitset stays under [`DENSE_WORD_LIMIT`].
    fn for_limit(limit: u64) -> Self {
        if limit / 64 < DENSE_WORD_LIMIT {
            Self::Dense(DenseSums::new(limit as usize))
        } else {
            Self::Sparse(SparseSums::new(limit))
        }
    }

    fn contains(&self, sum: u64) -> bool {
        match self {
            Self::Dense(d) => usize::try_from(sum).is_ok_and(|s| d.contains(s)),
            Self::Sparse(s) => s.sums.contains(&sum),
        }
    }

    fn len(&self) -> u64 {
        match self {
            Self::Dense(d) => d.len(),
            Self::Sparse(s) => s.sums.len() as u64,
        }
    }

    fn add_shifted(&mut self, x: u64) {
        match self {
            Self::Dense(d) => d.add_shifted(x),
            Self::Sparse(s) => s.add_shifted(x),
        }
    }
}

/// Bitset over `[0, limit]`.
struct DenseSums {
    words: Vec<u64>,
    limit: usize,
}

impl DenseSums {
    /// Creates the set `{0}`.
    fn new(limit: usize) -> Self {
        let mut words = vec![0u64; limit / 64 + 1];
        words[0] = 1;
        Self { words, limit }
    }

    fn contains(&self, sum: usize) -> bool {
        sum <= self.limit && (self.words[sum / 64] >> (sum % 64)) & 1 == 1
    }

    fn len(&self) -> u64 {
        self.words.iter().map(|w| u64::from(w.count_ones())).sum()
    }

    /// `self ← self ∪ (self + x)`, discarding sums above the limit.
    fn add_shifted(&mut self, x: u64) {
        if x == 0 || x > self.limit as u64 {
            return;
        }
        let x = x as usize;
        let word_shift = x / 64;
        let bit_shift = x % 64;

        // High to low, so every source word is read before it is written.
        for i in (word_shift..self.words.len()).rev() {
            let src = i - word_shift;
            let mut shifted = self.words[src] << bit_shift;
            if bit_shift > 0 && src > 0 {
                shifted |= self.words[src - 1] >> (64 - bit_shift);
            }
            self.words[i] |= shifted;
        }

        let tail = self.limit % 64;
        if tail < 63 {
            let last = self.words.len() - 1;
            self.words[last] &= (1u64 << (tail + 1)) - 1;
        }
    }
}

/// Ordered set of reached sums in `[0, limit]`.
struct SparseSums {
    sums: BTreeSet<u64>,
    limit: u64,
}

impl SparseSums {
    fn new(limit: u64) -> Self {
        Self {
            sums: BTreeSet::from([0]),
            limit,
        }
    }

    /// `self ← self ∪ (self + x)`, discarding sums above the limit.
    fn add_shifted(&mut self, x: u64) {
        if x == 0 || x > self.limit {
            return;
        }
        let limit = self.limit;
        let shifted: Vec<u64> = self
            .sums
            .iter()
            .map_while(|&s| s.checked_add(x).filter(|&v| v <= limit))
            .collect();
        self.sums.extend(shifted);
    }
}
