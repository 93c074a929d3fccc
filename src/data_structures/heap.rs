use std::cmp::min;
use std::fmt::Debug;

type HeapIndex = usize;

const HEAP_ARITY: usize = 4usize;
#[inline(always)]
#[must_use]
fn up(i: usize) -> usize {
    crate::heap_primitives::index_parent::<HEAP_ARITY>(i)
}
#[inline(always)]
#[must_use]
fn down_left(i: usize) -> usize {
    crate::heap_primitives::index_first_children::<HEAP_ARITY>(i)
}
#[inline(always)]
#[must_use]
fn down_right(i: usize) -> usize {
    crate::heap_primitives::index_last_children::<HEAP_ARITY>(i)
}

/// Index of the smallest element, keeping the first one on ties.
#[inline(always)]
#[must_use]
fn min_index<T: Ord>(a: &[T]) -> usize {
    debug_assert!(!a.is_empty());
    let mut best = 0usize;
    for i in 1..a.len() {
        if a[i] < a[best] {
            best = i;
        }
    }
    best
}

/// A d-ary min-heap.
///
/// Pops the smallest element first. Elements that compare equal come out in
/// no particular order, so callers that need stable ordering must make their
/// elements unique (see `AStarRank`).
#[derive(Debug, Clone)]
pub struct MinHeap<N>
where
    N: Debug + Ord,
{
    heap: Vec<N>,
}

impl<N> MinHeap<N>
where
    N: Debug + Ord,
{
    pub fn new() -> Self {
        Self { heap: vec![] }
    }
    pub fn with_capacity(s: HeapIndex) -> Self {
        Self {
            heap: Vec::with_capacity(s),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
    pub fn len(&self) -> usize {
        self.heap.len()
    }
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    pub fn push(&mut self, n: N) {
        self.verify_heap();
        self.heap.push(n);
        self.sift_up(self.heap.len() - 1);
        self.verify_heap();
    }

    pub fn pop(&mut self) -> Option<N> {
        #[cfg(feature = "coz_profile")]
        coz::scope!("Pop");

        self.verify_heap();
        if self.heap.len() <= 1 {
            return self.heap.pop();
        }

        // Move the last element to the root and let it sink.
        let top = self.heap.swap_remove(0);
        self.sift_down(0);

        self.verify_heap();
        Some(top)
    }

    #[inline(always)]
    #[cfg(not(feature = "verify"))]
    pub(crate) fn verify_heap(&self) {
        // All good... (hopefully)
    }

    #[inline(always)]
    #[cfg(feature = "verify")]
    pub(crate) fn verify_heap(&self) {
        for i in 1..self.heap.len() {
            let p = up(i);
            assert!(
                self.heap[p] <= self.heap[i],
                "Node[{p}]={:?} !<= child [{i}]={:?}. Out of heap of len={}",
                self.heap[p],
                self.heap[i],
                self.heap.len(),
            );
        }
    }

    /// Raises a node
    #[inline(always)]
    fn sift_up(&mut self, mut pos: usize) {
        debug_assert!(pos < self.heap.len(), "Index out of bounds");

        while pos > 0 {
            let parent = up(pos);
            if self.heap[parent] <= self.heap[pos] {
                break;
            }
            self.heap.swap(parent, pos);
            pos = parent;
        }
    }

    /// Lowers a node
    #[inline(always)]
    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        debug_assert!(pos < len || len == 0, "Index out of bounds");

        loop {
            let first = down_left(pos);
            if first >= len {
                break;
            }

            debug_assert_eq!(first + HEAP_ARITY, down_right(pos) + 1);
            let child = first + min_index(&self.heap[first..min(first + HEAP_ARITY, len)]);

            if self.heap[pos] <= self.heap[child] {
                break;
            }

            self.heap.swap(pos, child);
            pos = child;
        }
    }
}

impl<N> Default for MinHeap<N>
where
    N: Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
