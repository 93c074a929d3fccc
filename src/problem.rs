use crate::cost::Cost;
use crate::space::Action;
use crate::space::Actions;
use crate::space::State;

/// A search problem.
///
/// Problems are only ever borrowed immutably by a search, so a single problem
/// can back several independent searches, even across threads when it is
/// `Sync`.
pub trait Problem<St, A, C>: std::fmt::Debug
where
    St: State,
    A: Action,
    C: Cost,
{
    fn initial_state(&self) -> St;

    /// The actions that can be taken from `s`.
    ///
    /// Only valid actions are returned. No actions means `s` is a dead end.
    fn actions(&self, s: &St) -> Actions<A>;

    /// Applies `a` on `s`.
    ///
    /// Must be pure and deterministic.
    fn result(&self, s: &St, a: &A) -> St;

    fn is_goal(&self, s: &St) -> bool;

    /// The cost of taking `a` from `s` to land on `next`.
    ///
    /// Must not be negative.
    fn cost(&self, _s: &St, _a: &A, _next: &St) -> C {
        C::one()
    }

    /// An estimate of the cost remaining to reach a goal from `s`.
    ///
    /// A* only returns optimal paths when this never overestimates. That is
    /// the implementor's responsibility; the search only guards against
    /// negative values (see [`crate::config::HeuristicPolicy`]).
    fn heuristic(&self, _s: &St) -> C {
        C::zero()
    }
}
