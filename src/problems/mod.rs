//! Search problems.
//!
//! Each one implements [`crate::problem::Problem`] over its own states,
//! actions and costs.

pub mod maze_2d;
