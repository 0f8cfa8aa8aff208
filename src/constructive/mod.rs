//! Constructive heuristics for building candidate subsets.
//!
//! - [`greedy`] — first-fit inclusion in stored order, O(n)
//! - [`randomized_greedy`] — first-fit inclusion over a shuffled order, O(n)
//! - [`random_sampling`] — bounded blind sampling of random subsets

mod greedy;
mod sampling;

pub use greedy::{greedy, randomized_greedy, Construction};
pub use sampling::random_sampling;
