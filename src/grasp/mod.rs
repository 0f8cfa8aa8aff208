//! Greedy Randomized Adaptive Search Procedure (GRASP).
//!
//! Each iteration builds a candidate with randomized greedy construction and
//! polishes it with one swap of local search. The closest-from-below subset
//! seen so far is kept, and the search stops early on an exact match.
//!
//! Iterations are independent, so [`GraspRunner`] can also spread them over
//! the rayon pool with a shared cancellation flag for the early exit.
//!
//! # References
//!
//! Feo, T.A. & Resende, M.G.C. (1995). "Greedy Randomized Adaptive Search
//! Procedures", *Journal of Global Optimization* 6, 109-133.

mod config;
mod runner;

pub use config::GraspConfig;
pub use runner::{grasp, GraspResult, GraspRunner, GraspStatus};
