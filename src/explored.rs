use rustc_hash::FxHashMap;

use crate::cost::Cost;
use crate::space::State;

/// How a state was expanded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Closed<C> {
    pub g: C,
    pub depth: usize,
}

/// The "Closed Set" of a graph search.
///
/// Remembers every expanded state together with the cost and depth it was
/// expanded at. The cost lets A* re-open states reached through cheaper paths
/// when asked to, and the depth lets a depth-limited search re-open states
/// reached through shallower ones.
#[derive(Debug)]
pub struct ExploredSet<St, C>
where
    St: State,
    C: Cost,
{
    closed: FxHashMap<St, Closed<C>>,
}

impl<St, C> ExploredSet<St, C>
where
    St: State,
    C: Cost,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            closed: FxHashMap::default(),
        }
    }

    #[inline(always)]
    pub fn get(&self, s: &St) -> Option<&Closed<C>> {
        self.closed.get(s)
    }

    /// Marks `s` as expanded at cost `g` and `depth`.
    ///
    /// Returns whether the state was new. Expanding a state again needs a
    /// cheaper or a shallower path.
    #[inline(always)]
    pub fn insert(&mut self, s: St, g: C, depth: usize) -> bool {
        match self.closed.insert(s, Closed { g, depth }) {
            Some(old) => {
                debug_assert!(
                    g < old.g || depth < old.depth,
                    "Re-opened {s:?} without a cheaper or shallower path"
                );
                false
            }
            None => true,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.closed.len()
    }
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.closed.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.closed.capacity()
    }
}

impl<St, C> Default for ExploredSet<St, C>
where
    St: State,
    C: Cost,
{
    fn default() -> Self {
        Self::new()
    }
}
