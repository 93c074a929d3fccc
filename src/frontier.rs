//! Frontiers hold the search nodes waiting to be expanded.
//!
//! The order in which they hand nodes back is what tells breadth-first,
//! depth-first and A* apart; the rest of the search loop is shared.

use std::collections::VecDeque;

use crate::cost::Cost;
use crate::data_structures::heap::MinHeap;
use crate::error::Result;
use crate::error::SearchError;
use crate::search::SearchTreeIndex;

pub trait Frontier<C: Cost>: std::fmt::Debug + Default {
    /// Whether `push` looks at the priority.
    ///
    /// Lets the search skip heuristic evaluations nobody will read.
    const USES_PRIORITY: bool;

    /// Adds a node with a given priority `f`.
    ///
    /// Frontiers without priorities ignore `f`.
    fn push(&mut self, node_index: SearchTreeIndex, f: C);

    /// Takes the next node out.
    ///
    /// Fails with [`SearchError::EmptyFrontier`] when there are no nodes left.
    fn pop(&mut self) -> Result<SearchTreeIndex>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn capacity(&self) -> usize;
}

/// First-in first-out frontier, for Breadth-first search.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<SearchTreeIndex>,
}

impl<C: Cost> Frontier<C> for FifoFrontier {
    const USES_PRIORITY: bool = false;

    #[inline(always)]
    fn push(&mut self, node_index: SearchTreeIndex, _f: C) {
        self.queue.push_back(node_index);
    }
    #[inline(always)]
    fn pop(&mut self) -> Result<SearchTreeIndex> {
        self.queue.pop_front().ok_or(SearchError::EmptyFrontier)
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.queue.len()
    }
    fn capacity(&self) -> usize {
        self.queue.capacity()
    }
}

/// Last-in first-out frontier, for Depth-first search.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<SearchTreeIndex>,
}

impl<C: Cost> Frontier<C> for LifoFrontier {
    const USES_PRIORITY: bool = false;

    #[inline(always)]
    fn push(&mut self, node_index: SearchTreeIndex, _f: C) {
        self.stack.push(node_index);
    }
    #[inline(always)]
    fn pop(&mut self) -> Result<SearchTreeIndex> {
        self.stack.pop().ok_or(SearchError::EmptyFrontier)
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.stack.len()
    }
    fn capacity(&self) -> usize {
        self.stack.capacity()
    }
}

/// The ranking tuple for A*
///
/// We prefer better f-values, and tie break on insertion order, so the first
/// node pushed among equals is the first one popped.
///
/// ```
/// use walk_search::frontier::AStarRank;
///
/// assert!(AStarRank::new(2u32, 0) < AStarRank::new(3u32, 0));
/// assert!(AStarRank::new(2u32, 0) < AStarRank::new(2u32, 1));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct AStarRank<C: Cost> {
    f: C,
    seq: u64,
}
impl<C> AStarRank<C>
where
    C: Cost,
{
    pub fn new(f: C, seq: u64) -> Self {
        Self { f, seq }
    }
}

#[derive(Debug)]
pub struct AStarHeapNode<C>
where
    C: Cost,
{
    /// The rank of this node that defines how good it is.
    pub rank: AStarRank<C>,
    /// The index of this node in the Search Tree
    pub node_index: SearchTreeIndex,
}

impl<C: Cost> PartialEq for AStarHeapNode<C> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.rank.eq(&other.rank)
    }
}
impl<C: Cost> Eq for AStarHeapNode<C> {}

impl<C: Cost> PartialOrd for AStarHeapNode<C> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl<C: Cost> Ord for AStarHeapNode<C> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank.cmp(&other.rank)
    }
}

/// Lowest `f = g + h` first frontier, for A*.
#[derive(Debug)]
pub struct PriorityFrontier<C: Cost> {
    open: MinHeap<AStarHeapNode<C>>,
    /// Insertion counter used for FIFO tie-breaking.
    pushed: u64,
}

impl<C: Cost> Default for PriorityFrontier<C> {
    fn default() -> Self {
        Self {
            open: MinHeap::with_capacity(2048),
            pushed: 0,
        }
    }
}

impl<C: Cost> Frontier<C> for PriorityFrontier<C> {
    const USES_PRIORITY: bool = true;

    #[inline(always)]
    fn push(&mut self, node_index: SearchTreeIndex, f: C) {
        let rank = AStarRank::new(f, self.pushed);
        self.pushed += 1;
        self.open.push(AStarHeapNode { rank, node_index });
    }
    #[inline(always)]
    fn pop(&mut self) -> Result<SearchTreeIndex> {
        self.open
            .pop()
            .map(|n| n.node_index)
            .ok_or(SearchError::EmptyFrontier)
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.open.len()
    }
    fn capacity(&self) -> usize {
        self.open.capacity()
    }
}
