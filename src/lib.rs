//! # An ordered multiset on a plain binary search tree
//!
//! `unbalanced-collections` provides [`BinarySearchTree`], a sorted
//! collection that keeps duplicate values.  It is a textbook binary search
//! tree: no rotations, no rebalancing, and the shape is decided entirely by the
//! order of insertions.  In exchange the structure stays simple enough to
//! follow by hand.
//!
//! Each node links to its parent as well as its children.  Iterators and
//! [`Cursor`]s walk the tree through those links alone, without a stack, and
//! the tree caches where its least and greatest elements are.
//!
//! Sorted (or reverse-sorted) input degenerates the tree into a list, so
//! lookups and updates cost O(n) in the worst case.  Prefer
//! [`std::collections::BTreeMap`] when that matters.

mod bst;
pub use bst::BinarySearchTree;
pub use bst::{Cursor, CursorMut, IntoIter, Iter};

pub mod error;
pub use error::TreeError;
