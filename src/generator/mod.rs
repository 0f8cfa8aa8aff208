//! Random instance generation.
//!
//! - [`random_instance`] — distinct values below `2^bitlength`, random target
//! - [`random_yes_instance`] — target is the sum of a random subset (solvable)
//! - [`random_no_instance`] — target is `sum(values) + 1` (unsolvable)

mod random;

pub use random::{random_instance, random_no_instance, random_yes_instance, MAX_BIT_LENGTH};
