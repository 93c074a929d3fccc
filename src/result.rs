use crate::cost::Cost;
use crate::problem::Problem;
use crate::space::Action;
use crate::space::State;
use crate::stats::SearchStats;

const MAX_ELEMENTS_DISPLAYED: usize = 20;

/// What a search hands back.
///
/// On success it holds the path from the initial state to the goal as
/// `(action, state)` pairs, the first pair having no action. Without a
/// solution the path is empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    steps: Vec<(Option<A>, St)>,
    cost: C,
    stats: SearchStats,
}

impl<St, A, C> SearchResult<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    /// Builds a solved result, re-computing the path cost edge by edge.
    pub(crate) fn solved<P>(problem: &P, steps: Vec<(Option<A>, St)>, stats: SearchStats) -> Self
    where
        P: Problem<St, A, C>,
    {
        debug_assert!(stats.found);
        debug_assert!(matches!(steps.first(), Some((None, _))));
        let cost = path_cost(problem, &steps);
        Self { steps, cost, stats }
    }

    pub(crate) fn unsolved(stats: SearchStats) -> Self {
        debug_assert!(!stats.found);
        Self {
            steps: vec![],
            cost: C::zero(),
            stats,
        }
    }

    #[inline(always)]
    pub fn found(&self) -> bool {
        self.stats.found
    }

    /// The `(action, state)` pairs from start to goal.
    #[inline(always)]
    pub fn path(&self) -> &[(Option<A>, St)] {
        &self.steps
    }

    /// Number of actions on the path.
    ///
    /// Zero both when the start is a goal and when there's no solution; use
    /// [`Self::found`] to tell them apart.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn actions(&self) -> impl Iterator<Item = A> + '_ {
        self.steps.iter().filter_map(|(a, _)| *a)
    }

    pub fn states(&self) -> impl Iterator<Item = St> + '_ {
        self.steps.iter().map(|(_, s)| *s)
    }

    pub fn start(&self) -> Option<St> {
        self.steps.first().map(|(_, s)| *s)
    }

    pub fn goal(&self) -> Option<St> {
        self.steps.last().map(|(_, s)| *s)
    }

    #[inline(always)]
    pub fn cost(&self) -> C {
        self.cost
    }

    #[inline(always)]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Sums the cost of every edge of the path again.
    ///
    /// Matches [`Self::cost`] as long as `problem` is the one that was searched.
    pub fn recompute_cost<P>(&self, problem: &P) -> C
    where
        P: Problem<St, A, C>,
    {
        path_cost(problem, &self.steps)
    }

    /// Human readable summary of the solution and its statistics.
    pub fn summary(&self) -> String {
        format!(
            "Total length of solution: {}\nTotal cost of solution: {}\n{}",
            self.len(),
            self.cost,
            self.stats
        )
    }
}

fn path_cost<P, St, A, C>(problem: &P, steps: &[(Option<A>, St)]) -> C
where
    P: Problem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    let mut cost = C::zero();
    for pair in steps.windows(2) {
        let (_, from) = &pair[0];
        if let (Some(a), to) = &pair[1] {
            cost = cost.saturating_add(&problem.cost(from, a, to));
        }
    }
    cost
}

impl<St, A, C> std::fmt::Display for SearchResult<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (self.start(), self.goal()) {
            (Some(start), Some(goal)) => write!(
                f,
                "Path({}, {:?}:{:?}:{:?})",
                self.cost,
                start,
                self.actions()
                    .take(MAX_ELEMENTS_DISPLAYED)
                    .collect::<Vec<_>>(),
                goal
            ),
            _ => write!(f, "NoPath()"),
        }
    }
}
