use super::BinarySearchTree;
use generational_arena::Index;
use std::fmt::{Debug, Formatter};

// Shared stepping for both cursor kinds.  Stepping off either end is a
// caller bug, reported by panicking.
impl<T> BinarySearchTree<T> {
    fn step_next(&self, node: Option<Index>) -> Option<Index> {
        match node {
            Some(idx) => self.next_node(idx),
            None => panic!("cursor moved forward from the end position"),
        }
    }

    fn step_prev(&self, node: Option<Index>) -> Option<Index> {
        let prev = match node {
            None => self.last,
            Some(idx) => self.prev_node(idx),
        };

        if prev.is_none() {
            panic!("cursor moved back from the first position");
        }
        prev
    }
}

/// A position in a [`BinarySearchTree`]: either an element or the end
/// position, which sits one past the greatest element.
///
/// A cursor only looks at the links of the node it is on, so moving it costs
/// O(height) in the worst case and O(1) amortized over a full traversal.
///
/// Two cursors are equal when they are at the same position of the same tree.
/// Cursors into different trees are never equal, even if the trees are
/// clones of each other.
///
/// # Examples
/// ```
/// use unbalanced_collections::BinarySearchTree;
///
/// let t = BinarySearchTree::from([20, 10, 30]);
/// let mut c = t.find(&10);
/// c.move_next();
/// assert_eq!(c.get(), Some(&20));
/// c.move_next();
/// c.move_next();
/// assert_eq!(c, t.cursor_end());
/// ```
pub struct Cursor<'a, T> {
    tree: &'a BinarySearchTree<T>,
    node: Option<Index>,
}

impl<'a, T> Cursor<'a, T> {
    pub(super) fn new(tree: &'a BinarySearchTree<T>, node: Option<Index>) -> Self {
        Cursor { tree, node }
    }

    /// Returns the element at the cursor, or `None` at the end position.
    pub fn get(&self) -> Option<&'a T> {
        let tree = self.tree;
        self.node.map(|idx| &tree.nodes[idx].value)
    }

    /// Tests if the cursor is at the end position.
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Moves to the next element in order, or to the end position from the
    /// greatest element.
    ///
    /// # Panics
    /// Panics if the cursor is at the end position.
    pub fn move_next(&mut self) {
        self.node = self.tree.step_next(self.node);
    }

    /// Moves to the previous element in order.  From the end position this
    /// is the greatest element.
    ///
    /// # Panics
    /// Panics if the cursor is at the least element, or at the end position
    /// of an empty tree.
    pub fn move_prev(&mut self) {
        self.node = self.tree.step_prev(self.node);
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.node == other.node
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T: Debug> Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Cursor").field(&self.get()).finish()
    }
}

/// A cursor that can also remove the element it points at.
///
/// It holds the tree mutably, so no other cursor or iterator can observe the
/// tree while elements are being removed.
///
/// # Examples
/// ```
/// use unbalanced_collections::BinarySearchTree;
///
/// let mut t = BinarySearchTree::from([1, 2, 3, 4, 5, 6]);
///
/// // remove every even element
/// let mut c = t.cursor_first_mut();
/// while let Some(&v) = c.get() {
///     if v % 2 == 0 {
///         c.remove_current();
///     } else {
///         c.move_next();
///     }
/// }
/// assert_eq!(t.to_vec(), vec![1, 3, 5]);
/// ```
pub struct CursorMut<'a, T> {
    tree: &'a mut BinarySearchTree<T>,
    node: Option<Index>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(super) fn new(tree: &'a mut BinarySearchTree<T>, node: Option<Index>) -> Self {
        CursorMut { tree, node }
    }

    /// Returns the element at the cursor, or `None` at the end position.
    pub fn get(&self) -> Option<&T> {
        self.node.map(|idx| &self.tree.nodes[idx].value)
    }

    /// Tests if the cursor is at the end position.
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Moves to the next element in order.
    ///
    /// # Panics
    /// Panics if the cursor is at the end position.
    pub fn move_next(&mut self) {
        self.node = self.tree.step_next(self.node);
    }

    /// Moves to the previous element in order.
    ///
    /// # Panics
    /// Panics if the cursor is at the least element, or at the end position
    /// of an empty tree.
    pub fn move_prev(&mut self) {
        self.node = self.tree.step_prev(self.node);
    }

    /// Returns a read-only cursor at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.tree, self.node)
    }

    /// Removes the element at the cursor and returns it.  The cursor moves to
    /// the element that followed the removed one (or the end position).
    ///
    /// At the end position nothing is removed and `None` is returned.
    pub fn remove_current(&mut self) -> Option<T> {
        let idx = self.node?;
        self.node = self.tree.next_node(idx);
        let removed = self.tree.remove_node(idx);
        chk_links!(self.tree);
        removed
    }
}

impl<T: Debug> Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CursorMut").field(&self.get()).finish()
    }
}
