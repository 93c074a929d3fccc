use crate::algorithms::graph_search::GraphSearch;
use crate::config::SearchConfig;
use crate::config::Strategy;
use crate::cost::Cost;
use crate::error::Result;
use crate::frontier::FifoFrontier;
use crate::problem::Problem;
use crate::result::SearchResult;
use crate::space::Action;
use crate::space::State;

pub type BreadthFirstSearch<'p, P, St, A, C> = GraphSearch<'p, P, FifoFrontier, St, A, C>;

/// Breadth-first graph search.
///
/// Finds the path with the fewest actions, which is the cheapest one when all
/// actions cost the same.
pub fn breadth_first<P, St, A, C>(problem: &P) -> Result<SearchResult<St, A, C>>
where
    P: Problem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    BreadthFirstSearch::new(problem, SearchConfig::breadth_first())?.run()
}

/// Breadth-first search with a custom configuration.
pub fn breadth_first_with<P, St, A, C>(
    problem: &P,
    config: SearchConfig,
) -> Result<SearchResult<St, A, C>>
where
    P: Problem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    debug_assert_eq!(config.strategy, Strategy::BreadthFirst);
    BreadthFirstSearch::new(problem, config)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::maze_2d::Maze2DAction;
    use crate::problems::maze_2d::Maze2DCost;
    use crate::problems::maze_2d::Maze2DProblem;

    #[test]
    fn fewest_actions() {
        let problem = Maze2DProblem::try_from(
            "#######\n\
             #T    #\n\
             # ### #\n\
             #    P#\n\
             #######",
        )
        .unwrap();

        let result = breadth_first(&problem).unwrap();
        assert!(result.found());
        assert_eq!(result.len(), 6);
        assert_eq!(result.cost(), Maze2DCost::new(6.0));
    }

    #[test]
    fn prefers_earlier_actions_on_ties() {
        // Both ways around the pillar take 4 actions.
        let problem = Maze2DProblem::try_from(
            "#####\n\
             #T  #\n\
             # # #\n\
             #  P#\n\
             #####",
        )
        .unwrap();

        let result = breadth_first(&problem).unwrap();
        assert_eq!(result.len(), 4);
        // Actions are generated as Up, Down, Right, Left.
        assert_eq!(result.actions().next(), Some(Maze2DAction::Down));
    }

    #[test]
    fn tree_search_finds_the_same_length() {
        let problem = Maze2DProblem::try_from(
            "#####\n\
             #T  #\n\
             # # #\n\
             #  P#\n\
             #####",
        )
        .unwrap();

        let graph = breadth_first(&problem).unwrap();
        let tree =
            breadth_first_with(&problem, SearchConfig::breadth_first().with_graph_search(false))
                .unwrap();
        assert_eq!(tree.len(), graph.len());
        assert!(tree.stats().nodes_expanded >= graph.stats().nodes_expanded);
    }
}
