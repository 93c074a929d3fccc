//! Generic state-space search.
//!
//! Describe a problem by implementing [`problem::Problem`] and solve it with
//! breadth-first, depth-first or A* search through [`algorithms::search`].
//!
//! ```
//! use walk_search::algorithms::search;
//! use walk_search::config::SearchConfig;
//! use walk_search::problems::maze_2d::Maze2DHeuristic;
//! use walk_search::problems::maze_2d::Maze2DProblem;
//!
//! let problem = Maze2DProblem::try_from("######\n#T  P#\n######")
//!     .unwrap()
//!     .with_heuristic(Maze2DHeuristic::Manhattan);
//! let result = search(&problem, SearchConfig::astar()).unwrap();
//! assert!(result.found());
//! assert_eq!(result.len(), 3);
//! ```

use shadow_rs::shadow;

shadow!(build);

// Internals
// ---------
pub mod data_structures;
pub mod heap_primitives;
pub mod search;

// Search space and problems
// -------------------------
pub mod cost;
pub mod float_cost;
pub mod problem;
pub mod space;

// Problems
// --------
pub mod problems;

// Search
// ------
pub mod config;
pub mod error;
pub mod explored;
pub mod frontier;
pub mod result;
pub mod stats;

// Algorithms
// ----------
pub mod algorithms;
