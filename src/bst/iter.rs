use super::BinarySearchTree;
use generational_arena::Index;
use std::fmt::{Debug, Formatter};
use std::iter::FusedIterator;

/// Borrowing iterator over a [`BinarySearchTree`], in ascending order.
///
/// Created by [`BinarySearchTree::iter`].
pub struct Iter<'a, T> {
    tree: &'a BinarySearchTree<T>,
    front: Option<Index>,
    back: Option<Index>,
    // the front and back meet once len reaches zero
    len: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(tree: &'a BinarySearchTree<T>) -> Self {
        Iter {
            tree,
            front: tree.first,
            back: tree.last,
            len: tree.len,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let tree = self.tree;
        let idx = self.front?;
        self.len -= 1;
        self.front = tree.next_node(idx);
        Some(&tree.nodes[idx].value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let tree = self.tree;
        let idx = self.back?;
        self.len -= 1;
        self.back = tree.prev_node(idx);
        Some(&tree.nodes[idx].value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

// Lists the elements not yet yielded from either end.
impl<T: Debug> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

/// Owning iterator over a [`BinarySearchTree`], in ascending order.
///
/// Each step removes the least (or, from the back, greatest) remaining
/// element from the tree it consumed.
pub struct IntoIter<T> {
    tree: BinarySearchTree<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(tree: BinarySearchTree<T>) -> Self {
        IntoIter { tree }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.tree.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.tree.len(), Some(self.tree.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tree.pop_last()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.tree.iter().collect::<Vec<_>>()).finish()
    }
}
