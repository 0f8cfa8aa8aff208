//! # u-subset-sum
//!
//! Subset sum solvers: given distinct non-negative integers `S` and a target
//! `t`, decide whether some subset of `S` sums to `t`, or find a subset as
//! close to `t` (from below) as possible.
//!
//! ## Modules
//!
//! - [`models`] — Problem types (Instance, Subset)
//! - [`generator`] — Seedable random yes/no instance generation
//! - [`constructive`] — Greedy construction and random sampling
//! - [`local_search`] — Single-swap improvement
//! - [`grasp`] — GRASP metaheuristic (sequential and rayon-parallel)
//! - [`exact`] — Exhaustive power-set search and DP reachability
//! - [`error`] — Error type and result alias

pub mod constructive;
pub mod error;
pub mod exact;
pub mod generator;
pub mod grasp;
pub mod local_search;
pub mod models;

pub use error::{Result, SubsetSumError};
