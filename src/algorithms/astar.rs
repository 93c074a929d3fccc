use crate::algorithms::graph_search::GraphSearch;
use crate::config::SearchConfig;
use crate::config::Strategy;
use crate::cost::Cost;
use crate::error::Result;
use crate::frontier::PriorityFrontier;
use crate::problem::Problem;
use crate::result::SearchResult;
use crate::space::Action;
use crate::space::State;

pub type AStarSearch<'p, P, St, A, C> = GraphSearch<'p, P, PriorityFrontier<C>, St, A, C>;

/// A* graph search.
///
/// Expands the node with the lowest `g + h` first, breaking ties in favour of
/// the node queued first. Returns a cheapest path when
/// [`Problem::heuristic`] is consistent. With the default zero heuristic it
/// behaves like uniform-cost search.
pub fn astar<P, St, A, C>(problem: &P) -> Result<SearchResult<St, A, C>>
where
    P: Problem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    AStarSearch::new(problem, SearchConfig::astar())?.run()
}

/// A* with a custom configuration.
pub fn astar_with<P, St, A, C>(problem: &P, config: SearchConfig) -> Result<SearchResult<St, A, C>>
where
    P: Problem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    debug_assert_eq!(config.strategy, Strategy::AStar);
    AStarSearch::new(problem, config)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeuristicPolicy;
    use crate::error::SearchError;
    use crate::float_cost::FloatCost;
    use crate::space::Actions;

    type Weight = FloatCost<f64>;

    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    struct Vertex(char);
    impl State for Vertex {}

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    struct Edge(char);
    impl Action for Edge {}

    /// ```text
    ///       1     1
    ///   S ──── A ──── C ──── G
    ///   │             │  10
    ///   └──── B ──────┘
    ///      1      3
    /// ```
    ///
    /// The cheapest path is S-A-C-G (12). Overestimating `h(A)` while staying
    /// admissible makes A* settle C through B first.
    #[derive(Debug)]
    struct Detour {
        h_a: f64,
    }

    impl Detour {
        const EDGES: [(char, char, f64); 5] = [
            ('S', 'A', 1.0),
            ('S', 'B', 1.0),
            ('A', 'C', 1.0),
            ('B', 'C', 3.0),
            ('C', 'G', 10.0),
        ];
    }

    impl Problem<Vertex, Edge, Weight> for Detour {
        fn initial_state(&self) -> Vertex {
            Vertex('S')
        }
        fn actions(&self, s: &Vertex) -> Actions<Edge> {
            Self::EDGES
                .iter()
                .filter(|(from, _, _)| *from == s.0)
                .map(|(_, to, _)| Edge(*to))
                .collect()
        }
        fn result(&self, _s: &Vertex, a: &Edge) -> Vertex {
            Vertex(a.0)
        }
        fn is_goal(&self, s: &Vertex) -> bool {
            s.0 == 'G'
        }
        fn cost(&self, s: &Vertex, a: &Edge, _next: &Vertex) -> Weight {
            Self::EDGES
                .iter()
                .find(|(from, to, _)| *from == s.0 && *to == a.0)
                .map(|(_, _, w)| Weight::new(*w))
                .unwrap_or_else(|| Weight::new(f64::INFINITY))
        }
        fn heuristic(&self, s: &Vertex) -> Weight {
            match s.0 {
                'A' => Weight::new(self.h_a),
                _ => Weight::new(0.0),
            }
        }
    }

    fn vertices(result: &SearchResult<Vertex, Edge, Weight>) -> String {
        result.states().map(|v| v.0).collect()
    }

    #[test]
    fn zero_heuristic_is_uniform_cost() {
        let result = astar(&Detour { h_a: 0.0 }).unwrap();
        assert_eq!(vertices(&result), "SACG");
        assert_eq!(result.cost(), Weight::new(12.0));
        assert_eq!(result.recompute_cost(&Detour { h_a: 0.0 }), result.cost());
    }

    #[test]
    fn closed_set_keeps_the_first_path() {
        let result = astar(&Detour { h_a: 5.0 }).unwrap();
        assert_eq!(vertices(&result), "SBCG");
        assert_eq!(result.cost(), Weight::new(14.0));
    }

    #[test]
    fn reopening_recovers_the_cheapest_path() {
        let config = SearchConfig::astar().with_reopen_cheaper(true);
        let result = astar_with(&Detour { h_a: 5.0 }, config).unwrap();
        assert_eq!(vertices(&result), "SACG");
        assert_eq!(result.cost(), Weight::new(12.0));
    }

    #[test]
    fn negative_heuristic_is_clamped() {
        let problem = Detour { h_a: -3.0 };
        let result = astar(&problem).unwrap();
        assert_eq!(vertices(&result), "SACG");
        assert_eq!(result.cost(), Weight::new(12.0));
    }

    #[test]
    fn negative_heuristic_is_fatal_when_strict() {
        let problem = Detour { h_a: -3.0 };
        let config = SearchConfig::astar().with_heuristic_policy(HeuristicPolicy::Strict);
        assert!(matches!(
            astar_with(&problem, config),
            Err(SearchError::InvalidHeuristic { .. })
        ));
    }

    #[test]
    fn negative_costs_are_rejected() {
        #[derive(Debug)]
        struct Downhill;
        impl Problem<Vertex, Edge, Weight> for Downhill {
            fn initial_state(&self) -> Vertex {
                Vertex('S')
            }
            fn actions(&self, _s: &Vertex) -> Actions<Edge> {
                Actions::from_slice(&[Edge('G')])
            }
            fn result(&self, _s: &Vertex, a: &Edge) -> Vertex {
                Vertex(a.0)
            }
            fn is_goal(&self, s: &Vertex) -> bool {
                s.0 == 'G'
            }
            fn cost(&self, _s: &Vertex, _a: &Edge, _next: &Vertex) -> Weight {
                Weight::new(-1.0)
            }
        }

        assert!(matches!(
            astar(&Downhill),
            Err(SearchError::NegativeCost { .. })
        ));
    }
}
