use std::fmt::Debug;
use std::hash::Hash;

use smallvec::SmallVec;

/// Something that moves a [`State`] into another one.
pub trait Action: Copy + Clone + Debug + PartialEq + Eq {}

/// A state of the search space.
///
/// The search never looks inside states; it only compares and hashes them.
pub trait State: Copy + Clone + Debug + PartialEq + Eq + Hash {}

/// Inline capacity of [`Actions`].
///
/// Enough for 8-connected grids without spilling to the heap.
pub const INLINE_ACTIONS: usize = 8;

/// The actions applicable on a state.
pub type Actions<A> = SmallVec<[A; INLINE_ACTIONS]>;
