use std::fmt::Debug;

use nonmax::NonMaxUsize;

use crate::cost::Cost;
use crate::space::Action;
use crate::space::State;

/// A reference to a `SearchTreeNode<St, A, C>`.
///
/// Nodes live in the `SearchTree` arena and point to their parents with these
/// indices instead of references, so the tree can't hold ownership cycles.
///
/// `NonMaxUsize` keeps `Option<(SearchTreeIndex, A)>` as small as the pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SearchTreeIndex {
    index: NonMaxUsize,
}

impl SearchTreeIndex {
    #[inline(always)]
    fn new(index: usize) -> Option<Self> {
        Some(Self {
            index: NonMaxUsize::new(index)?,
        })
    }

    #[inline(always)]
    pub fn get(&self) -> usize {
        self.index.get()
    }
}

#[derive(Debug, Clone)]
pub struct SearchTreeNode<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    pub(crate) parent: Option<(SearchTreeIndex, A)>,
    pub(crate) state: St,
    pub(crate) g: C,
    pub(crate) depth: usize,
}

impl<St, A, C> SearchTreeNode<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    pub fn new_root(s: St) -> Self {
        Self {
            parent: None,
            state: s,
            g: C::zero(),
            depth: 0,
        }
    }

    pub fn new_child(s: St, parent: (SearchTreeIndex, A), g: C, depth: usize) -> Self {
        Self {
            parent: Some(parent),
            state: s,
            g,
            depth,
        }
    }

    #[inline(always)]
    pub fn state(&self) -> &St {
        &self.state
    }
    #[inline(always)]
    pub fn g(&self) -> C {
        self.g
    }
    #[inline(always)]
    pub fn depth(&self) -> usize {
        self.depth
    }
    #[inline(always)]
    pub fn parent(&self) -> Option<(SearchTreeIndex, A)> {
        self.parent
    }
}

/// All the nodes created by a search.
///
/// Only grows. Nodes stay addressable until the tree is dropped, which
/// happens when the search that owns it goes away.
pub struct SearchTree<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    nodes: Vec<SearchTreeNode<St, A, C>>,
}

impl<St, A, C> SearchTree<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    #[inline(always)]
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: vec![] }
    }

    #[inline(always)]
    pub fn push(&mut self, node: SearchTreeNode<St, A, C>) -> SearchTreeIndex {
        debug_assert!(
            node.parent.is_none_or(|(p, _)| p.get() < self.nodes.len()),
            "Parents must be created before their children"
        );
        let index = SearchTreeIndex::new(self.nodes.len())
            .unwrap_or_else(|| unreachable!("Search tree outgrew the address space"));
        self.nodes.push(node);
        index
    }

    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline(always)]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Walks up from `node_index` to the root.
    ///
    /// Returns the `(action, state)` pairs from the root to `node_index`. The
    /// root has no action.
    #[must_use]
    pub fn steps(&self, mut node_index: SearchTreeIndex) -> Vec<(Option<A>, St)> {
        #[cfg(feature = "coz_profile")]
        coz::scope!("PathReconstruction");

        let mut steps = Vec::with_capacity(self[node_index].depth + 1);
        loop {
            let node = &self[node_index];
            match node.parent {
                Some((parent_index, a)) => {
                    steps.push((Some(a), node.state));
                    // Parents are always older, so the walk can't loop.
                    debug_assert!(parent_index.get() < node_index.get());
                    node_index = parent_index;
                }
                None => {
                    steps.push((None, node.state));
                    break;
                }
            }
        }

        steps.reverse();
        steps
    }
}

impl<St, A, C> Default for SearchTree<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<St, A, C> std::ops::Index<SearchTreeIndex> for SearchTree<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    type Output = SearchTreeNode<St, A, C>;

    #[inline(always)]
    fn index(&self, index: SearchTreeIndex) -> &Self::Output {
        &self.nodes[index.get()]
    }
}

impl<St, A, C> std::fmt::Debug for SearchTree<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "SearchTree{{({} nodes)}}", self.len())
    }
}
