use crate::algorithms::graph_search::GraphSearch;
use crate::config::SearchConfig;
use crate::config::Strategy;
use crate::cost::Cost;
use crate::error::Result;
use crate::frontier::LifoFrontier;
use crate::problem::Problem;
use crate::result::SearchResult;
use crate::space::Action;
use crate::space::State;

pub type DepthFirstSearch<'p, P, St, A, C> = GraphSearch<'p, P, LifoFrontier, St, A, C>;

/// Depth-first graph search.
///
/// Keeps memory low on deep spaces but returns whatever path it stumbles upon
/// first. Use [`depth_first_with`] and a step or depth limit on spaces that
/// may be infinite.
pub fn depth_first<P, St, A, C>(problem: &P) -> Result<SearchResult<St, A, C>>
where
    P: Problem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    DepthFirstSearch::new(problem, SearchConfig::depth_first())?.run()
}

/// Depth-first search with a custom configuration.
pub fn depth_first_with<P, St, A, C>(
    problem: &P,
    config: SearchConfig,
) -> Result<SearchResult<St, A, C>>
where
    P: Problem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    debug_assert_eq!(config.strategy, Strategy::DepthFirst);
    DepthFirstSearch::new(problem, config)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::breadth_first::breadth_first;
    use crate::error::SearchError;
    use crate::problems::maze_2d::Maze2DProblem;

    const OPEN_ROOM: &str = "######\n\
                             #T   #\n\
                             #    #\n\
                             #   P#\n\
                             ######";

    #[test]
    fn finds_a_valid_path() {
        let problem = Maze2DProblem::try_from(OPEN_ROOM).unwrap();

        let dfs = depth_first(&problem).unwrap();
        let bfs = breadth_first(&problem).unwrap();
        assert!(dfs.found());
        assert_eq!(dfs.start(), Some(problem.start()));
        assert_eq!(dfs.goal(), Some(problem.goal()));
        assert_eq!(dfs.recompute_cost(&problem), dfs.cost());
        assert!(dfs.len() >= bfs.len());
    }

    #[test]
    fn tree_search_needs_a_limit() {
        let problem = Maze2DProblem::try_from(OPEN_ROOM).unwrap();

        // Without a closed set it bounces between the first two cells.
        let config = SearchConfig::depth_first()
            .with_graph_search(false)
            .with_step_limit(1_000);
        assert_eq!(
            depth_first_with(&problem, config),
            Err(SearchError::StepLimitExhausted(1_000))
        );
    }

    #[test]
    fn depth_limit_bounds_tree_search() {
        let problem = Maze2DProblem::try_from(OPEN_ROOM).unwrap();

        // The goal is 5 actions away.
        let config = SearchConfig::depth_first()
            .with_graph_search(false)
            .with_depth_limit(4);
        let result = depth_first_with(&problem, config).unwrap();
        assert!(!result.found());
        assert!(result.stats().max_depth <= 4);

        let config = SearchConfig::depth_first()
            .with_graph_search(false)
            .with_depth_limit(5);
        let result = depth_first_with(&problem, config).unwrap();
        assert!(result.found());
        assert_eq!(result.len(), 5);
    }
}
