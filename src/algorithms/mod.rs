//! Implementation of search algorithms.
//!
//! Breadth-first, depth-first and A* share a single search loop
//! ([`graph_search::GraphSearch`]) and only differ on their frontier.

pub mod astar;
pub mod breadth_first;
pub mod depth_first;
pub mod graph_search;

use crate::config::SearchConfig;
use crate::config::Strategy;
use crate::cost::Cost;
use crate::error::Result;
use crate::problem::Problem;
use crate::result::SearchResult;
use crate::space::Action;
use crate::space::State;

/// Runs the search described by `config` on `problem`.
pub fn search<P, St, A, C>(problem: &P, config: SearchConfig) -> Result<SearchResult<St, A, C>>
where
    P: Problem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    match config.strategy {
        Strategy::BreadthFirst => breadth_first::breadth_first_with(problem, config),
        Strategy::DepthFirst => depth_first::depth_first_with(problem, config),
        Strategy::AStar => astar::astar_with(problem, config),
    }
}
