//! Domain model types for subset sum problems.
//!
//! An [`Instance`] pairs a set of distinct values with a target; a
//! [`Subset`] is a candidate selection of those values with its cached sum.

mod instance;
mod subset;

pub use instance::Instance;
pub use subset::Subset;
