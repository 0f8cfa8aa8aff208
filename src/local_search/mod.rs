//! Local search operators for improving candidate subsets.
//!
//! - [`swap_improve`] — single first-improvement element swap

mod swap;

pub use swap::swap_improve;
