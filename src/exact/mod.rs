//! Exact solvers: they answer the decision question definitively.
//!
//! - [`exhaustive`] — power-set enumeration, O(2ⁿ·n); only for small n
//! - [`dynamic`] — reachable-sum set (bitset, or sparse for huge targets), pseudo-polynomial
//!
//! Both walk the instance values in stored order and agree on every instance.

mod dynamic;
mod exhaustive;

pub use dynamic::{reachability, reachable, Reachability, DENSE_WORD_LIMIT};
pub use exhaustive::{
    exhaustive_search, exhaustive_search_parallel, PowerSet, MAX_EXHAUSTIVE_SIZE,
};
