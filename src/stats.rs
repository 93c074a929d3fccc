use thousands::Separable;

/// Counters collected while searching.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SearchStats {
    /// Nodes taken out of the frontier.
    pub iterations: usize,
    /// Nodes whose successors were generated.
    pub nodes_expanded: usize,
    /// Child nodes created.
    pub nodes_generated: usize,
    /// Largest frontier observed.
    pub max_frontier_size: usize,
    /// Deepest node created.
    pub max_depth: usize,
    /// Whether a goal was reached.
    pub found: bool,
}

impl SearchStats {
    #[inline(always)]
    pub(crate) fn observe_frontier(&mut self, len: usize) {
        self.max_frontier_size = self.max_frontier_size.max(len);
    }

    #[inline(always)]
    pub(crate) fn observe_depth(&mut self, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
    }
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Solution found: {}", self.found)?;
        writeln!(f, "Iterations: {}", self.iterations.separate_with_commas())?;
        writeln!(
            f,
            "Nodes expanded: {}",
            self.nodes_expanded.separate_with_commas()
        )?;
        writeln!(
            f,
            "Nodes generated: {}",
            self.nodes_generated.separate_with_commas()
        )?;
        writeln!(
            f,
            "Max frontier size: {}",
            self.max_frontier_size.separate_with_commas()
        )?;
        write!(f, "Max depth: {}", self.max_depth.separate_with_commas())
    }
}
