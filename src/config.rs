use derive_more::Display;

/// Order in which the frontier hands out nodes.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Strategy {
    /// Shallowest node first. Optimal on uniform costs.
    #[display("Breadth-first")]
    BreadthFirst,
    /// Deepest node first. No optimality guarantee.
    #[display("Depth-first")]
    DepthFirst,
    /// Lowest `g + h` first. Optimal with consistent heuristics.
    #[display("A*")]
    AStar,
}

/// What to do when a heuristic estimate is negative.
#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Eq, clap::ValueEnum)]
pub enum HeuristicPolicy {
    /// Use zero instead, warning through `log`.
    #[default]
    #[display("clamp")]
    Clamp,
    /// Abort the search with `SearchError::InvalidHeuristic`.
    #[display("strict")]
    Strict,
}

/// How to run a search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub strategy: Strategy,
    /// Skip states that were already expanded.
    ///
    /// Without it (tree search) states may be expanded many times, and
    /// depth-first search can run forever on cyclic spaces unless bounded.
    pub graph_search: bool,
    pub heuristic_policy: HeuristicPolicy,
    /// Maximum number of nodes taken from the frontier.
    pub step_limit: Option<usize>,
    /// Nodes this deep are goal-checked but not expanded.
    ///
    /// In graph search a state reached through a shallower path than the one
    /// it was expanded through gets expanded again.
    pub depth_limit: Option<usize>,
    /// Lets A* expand a state again when it's reached through a strictly
    /// cheaper path after being expanded.
    ///
    /// Off by default: the closed set then discards any re-encountered state,
    /// which can miss the optimal path on graphs with varying edge costs and
    /// inconsistent heuristics.
    pub reopen_cheaper: bool,
}

impl SearchConfig {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            graph_search: true,
            heuristic_policy: HeuristicPolicy::default(),
            step_limit: None,
            depth_limit: None,
            reopen_cheaper: false,
        }
    }

    pub fn breadth_first() -> Self {
        Self::new(Strategy::BreadthFirst)
    }
    pub fn depth_first() -> Self {
        Self::new(Strategy::DepthFirst)
    }
    pub fn astar() -> Self {
        Self::new(Strategy::AStar)
    }

    #[must_use]
    pub fn with_graph_search(mut self, graph_search: bool) -> Self {
        self.graph_search = graph_search;
        self
    }
    #[must_use]
    pub fn with_heuristic_policy(mut self, policy: HeuristicPolicy) -> Self {
        self.heuristic_policy = policy;
        self
    }
    #[must_use]
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }
    #[must_use]
    pub fn with_depth_limit(mut self, limit: usize) -> Self {
        self.depth_limit = Some(limit);
        self
    }
    #[must_use]
    pub fn with_reopen_cheaper(mut self, reopen: bool) -> Self {
        self.reopen_cheaper = reopen;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::astar()
    }
}
