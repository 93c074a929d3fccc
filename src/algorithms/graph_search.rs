use std::fmt::Debug;
use std::marker::PhantomData;

use crate::config::HeuristicPolicy;
use crate::config::SearchConfig;
use crate::cost::Cost;
use crate::error::Result;
use crate::error::SearchError;
use crate::explored::Closed;
use crate::explored::ExploredSet;
use crate::frontier::Frontier;
use crate::problem::Problem;
use crate::result::SearchResult;
use crate::search::SearchTree;
use crate::search::SearchTreeIndex;
use crate::search::SearchTreeNode;
use crate::space::Action;
use crate::space::State;
use crate::stats::SearchStats;

/// The search loop shared by every strategy.
///
/// The frontier `F` decides which node is expanded next. Everything else
/// (goal checks, duplicate detection, statistics, limits) lives here.
#[derive(Debug)]
pub struct GraphSearch<'p, P, F, St, A, C>
where
    P: Problem<St, A, C>,
    F: Frontier<C>,
    St: State,
    A: Action,
    C: Cost,
{
    problem: &'p P,
    config: SearchConfig,

    /// All the Search Nodes. Each one points to its parent, forming a tree
    /// rooted at the initial state.
    search_tree: SearchTree<St, A, C>,

    /// Nodes waiting to be expanded.
    frontier: F,

    /// States already expanded. Unused when running as a tree search.
    explored: ExploredSet<St, C>,

    stats: SearchStats,

    _phantom_action: PhantomData<A>,
}

impl<'p, P, F, St, A, C> GraphSearch<'p, P, F, St, A, C>
where
    P: Problem<St, A, C>,
    F: Frontier<C>,
    St: State,
    A: Action,
    C: Cost,
{
    /// Sets up a search rooted at the problem's initial state.
    ///
    /// Fails only when the heuristic rejects the initial state under
    /// [`HeuristicPolicy::Strict`].
    pub fn new(problem: &'p P, config: SearchConfig) -> Result<Self> {
        let mut search = Self {
            problem,
            config,
            search_tree: SearchTree::new(),
            frontier: F::default(),
            explored: ExploredSet::new(),
            stats: SearchStats::default(),
            _phantom_action: PhantomData,
        };

        let s = problem.initial_state();
        let f = if F::USES_PRIORITY {
            search.h(&s)?
        } else {
            C::zero()
        };
        let root = search.search_tree.push(SearchTreeNode::new_root(s));
        search.frontier.push(root, f);
        search.stats.observe_frontier(search.frontier.len());

        Ok(search)
    }

    /// Runs the search until it finds a goal or runs out of nodes.
    ///
    /// Running out of nodes is a normal outcome, reported as a result without
    /// a solution. The search is left in place for inspection.
    pub fn run(&mut self) -> Result<SearchResult<St, A, C>> {
        log::debug!(
            "Starting {} search from {:?} ({:?})",
            self.config.strategy,
            self.problem.initial_state(),
            self.config
        );

        loop {
            if self.frontier.is_empty() {
                log::debug!("Frontier exhausted without reaching a goal");
                return Ok(SearchResult::unsolved(self.stats));
            }
            if let Some(limit) = self.config.step_limit {
                if self.stats.iterations >= limit {
                    log::warn!("Giving up after {limit} steps");
                    return Err(SearchError::StepLimitExhausted(self.stats.iterations));
                }
            }

            if let Some(goal_index) = self.step()? {
                self.stats.found = true;
                let steps = self.search_tree.steps(goal_index);
                let result = SearchResult::solved(self.problem, steps, self.stats);
                debug_assert!(
                    result.cost() == self.search_tree[goal_index].g(),
                    "Re-walked cost {} differs from search cost {}",
                    result.cost(),
                    self.search_tree[goal_index].g()
                );
                log::debug!(
                    "Reached goal {:?} with cost {} after {} iterations",
                    result.goal(),
                    result.cost(),
                    self.stats.iterations
                );
                return Ok(result);
            }
        }
    }

    /// Takes one node out of the frontier and expands it.
    ///
    /// Returns the node when it's a goal.
    fn step(&mut self) -> Result<Option<SearchTreeIndex>> {
        #[cfg(feature = "coz_profile")]
        coz::scope!("NodeExpansion");

        let node_index = self.frontier.pop()?;
        self.stats.iterations += 1;

        let node = &self.search_tree[node_index];
        let state = *node.state();
        let g = node.g();
        let depth = node.depth();

        if self.problem.is_goal(&state) {
            return Ok(Some(node_index));
        }

        if self.config.graph_search && self.is_closed(&state, g, depth) {
            return Ok(None);
        }

        // Nodes past the limit are not expanded, so they don't close their state.
        if self.config.depth_limit.is_some_and(|limit| depth >= limit) {
            return Ok(None);
        }

        if self.config.graph_search {
            self.explored.insert(state, g, depth);
        }

        log::trace!("Expanding {state:?} (g={g}, depth={depth})");
        self.stats.nodes_expanded += 1;

        for a in self.problem.actions(&state) {
            let next = self.problem.result(&state, &a);
            let c = self.problem.cost(&state, &a, &next);
            if c.is_negative() {
                return Err(SearchError::NegativeCost {
                    value: c.to_string(),
                    state: format!("{state:?}"),
                    action: format!("{a:?}"),
                });
            }
            let next_g = g.saturating_add(&c);

            // A* doesn't bother queueing states that are already settled.
            if F::USES_PRIORITY
                && self.config.graph_search
                && self.is_closed(&next, next_g, depth + 1)
            {
                continue;
            }

            let f = if F::USES_PRIORITY {
                next_g.saturating_add(&self.h(&next)?)
            } else {
                next_g
            };

            let child = self.search_tree.push(SearchTreeNode::new_child(
                next,
                (node_index, a),
                next_g,
                depth + 1,
            ));
            self.frontier.push(child, f);
            self.stats.nodes_generated += 1;
            self.stats.observe_depth(depth + 1);
        }
        self.stats.observe_frontier(self.frontier.len());

        Ok(None)
    }

    /// Whether reaching `s` with cost `g` at `depth` adds nothing to the
    /// closed set.
    ///
    /// Under a depth limit a shallower path may reach further, so it re-opens
    /// the state. With `reopen_cheaper` so does a cheaper one.
    #[inline(always)]
    fn is_closed(&self, s: &St, g: C, depth: usize) -> bool {
        let Some(closed) = self.explored.get(s) else {
            return false;
        };
        let cheap_enough = !self.config.reopen_cheaper || closed.g <= g;
        let shallow_enough = self.config.depth_limit.is_none() || closed.depth <= depth;
        cheap_enough && shallow_enough
    }

    /// The heuristic, guarded against negative estimates.
    #[inline(always)]
    fn h(&self, s: &St) -> Result<C> {
        let h = self.problem.heuristic(s);
        if !h.is_negative() {
            return Ok(h);
        }

        match self.config.heuristic_policy {
            HeuristicPolicy::Clamp => {
                log::warn!("Heuristic returned {h} for {s:?}. Using 0 instead");
                Ok(C::zero())
            }
            HeuristicPolicy::Strict => Err(SearchError::InvalidHeuristic {
                value: h.to_string(),
                state: format!("{s:?}"),
            }),
        }
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn write_memory_stats<W: std::io::Write>(&self, mut out: W) -> std::io::Result<()> {
        use size::Size;
        use std::mem::size_of;
        use thousands::Separable;

        writeln!(out, "{} Search Stats:", self.config.strategy)?;
        let s = size_of::<SearchTreeNode<St, A, C>>();
        let l = self.search_tree.len();
        let c = self.search_tree.capacity();
        writeln!(
            out,
            "  - |Nodes|:    {} ({})",
            l.separate_with_commas(),
            Size::from_bytes(l * s)
        )?;
        writeln!(
            out,
            "  - |Nodes|*:   {} ({})",
            c.separate_with_commas(),
            Size::from_bytes(c * s)
        )?;

        let l = self.frontier.len();
        let c = self.frontier.capacity();
        writeln!(out, "  - |Frontier|:  {}", l.separate_with_commas())?;
        writeln!(out, "  - |Frontier|*: {}", c.separate_with_commas())?;

        let s = size_of::<(St, Closed<C>)>();
        let l = self.explored.len();
        let c = self.explored.capacity();
        writeln!(
            out,
            "  - |Explored|:  {} ({})",
            l.separate_with_commas(),
            Size::from_bytes(l * s)
        )?;
        writeln!(
            out,
            "  - |Explored|*: {} ({})",
            c.separate_with_commas(),
            Size::from_bytes(c * s)
        )?;

        writeln!(
            out,
            "  - Expanded nodes: {}",
            self.stats.nodes_expanded.separate_with_commas()
        )?;

        Ok(())
    }
}
