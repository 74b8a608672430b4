#![warn(missing_docs)]
use generational_arena::{Arena, Index};
use std::borrow::Borrow;
use std::cmp::Ordering::*;
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use tracing::trace;

use crate::error::{Result, TreeError};

#[cfg(test)]
macro_rules! chk_tree {
    ( $x:expr ) => {{
        if let Err(e) = $x.check() {
            panic!("tree invariant violated: {}", e);
        }
    }};
}

#[cfg(not(test))]
macro_rules! chk_tree {
    ( $x:expr ) => {{}};
}

// Like chk_tree!, but skips the value ordering so it also works where T is
// not known to be Ord.
#[cfg(test)]
macro_rules! chk_links {
    ( $x:expr ) => {{
        if let Err(e) = $x.check_links() {
            panic!("tree invariant violated: {}", e);
        }
    }};
}

#[cfg(not(test))]
macro_rules! chk_links {
    ( $x:expr ) => {{}};
}

mod cursor;
mod iter;
#[cfg(feature = "serde")]
mod serde;

pub use cursor::{Cursor, CursorMut};
pub use iter::{IntoIter, Iter};

struct Node<T> {
    value: T,
    parent: Option<Index>,
    left: Option<Index>,
    right: Option<Index>,
}

impl<T> Node<T> {
    fn new(value: T, parent: Option<Index>) -> Self {
        Node {
            value,
            parent,
            left: None,
            right: None,
        }
    }
}

// Progress marker for the stackless copy walk: whether we just arrived at a
// node from above or are climbing back out of one of its subtrees.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Step {
    Down,
    FromLeft,
    FromRight,
}

/// An ordered collection that keeps duplicates, stored in a plain binary
/// search tree.
///
/// The tree is never rebalanced.  Its shape follows the insertion order, so
/// inserting already-sorted values produces a tree as deep as it is long.
/// Equal values are placed to the right of each other, which keeps them in
/// insertion order along the right spine of the first one.
///
/// Every node records its parent, so both iteration and the [`Cursor`] types
/// step through the tree using only the links stored in the nodes.  The
/// positions of the smallest and greatest elements are cached, which makes
/// [`first`](#method.first), [`last`](#method.last) and starting an iteration
/// from either end O(1).
///
/// # Examples
/// ```
/// use unbalanced_collections::BinarySearchTree;
///
/// let mut t = BinarySearchTree::from([7, 2, 5, 3, 1, 4, 6]);
/// assert_eq!(t.to_vec(), vec![1, 2, 3, 4, 5, 6, 7]);
///
/// t.remove(&4);
/// assert_eq!(t.to_vec(), vec![1, 2, 3, 5, 6, 7]);
///
/// t.find_mut(&3).remove_current();
/// assert_eq!(t.to_vec(), vec![1, 2, 5, 6, 7]);
/// ```
pub struct BinarySearchTree<T> {
    nodes: Arena<Node<T>>,
    root: Option<Index>,
    first: Option<Index>,
    last: Option<Index>,
    len: usize,
}

impl<T> BinarySearchTree<T> {
    /// Creates a new, empty tree.
    /// # Examples
    /// ```
    /// use unbalanced_collections::BinarySearchTree;
    /// let t: BinarySearchTree<u32> = BinarySearchTree::new();
    /// assert!(t.is_empty());
    /// ```
    pub fn new() -> Self {
        BinarySearchTree {
            nodes: Arena::new(),
            root: None,
            first: None,
            last: None,
            len: 0,
        }
    }

    /// Returns the number of elements, counting each duplicate.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the least element.  If the least value occurs several times,
    /// this is the one inserted first.
    ///
    /// # Examples
    /// ```
    /// use unbalanced_collections::BinarySearchTree;
    ///
    /// let t = BinarySearchTree::from([5, 1, 9]);
    /// assert_eq!(t.first(), Some(&1));
    /// ```
    pub fn first(&self) -> Option<&T> {
        self.first.map(|idx| &self.nodes[idx].value)
    }

    /// Returns the greatest element.
    ///
    /// # Examples
    /// ```
    /// use unbalanced_collections::BinarySearchTree;
    ///
    /// let t = BinarySearchTree::from([5, 1, 9]);
    /// assert_eq!(t.last(), Some(&9));
    /// ```
    pub fn last(&self) -> Option<&T> {
        self.last.map(|idx| &self.nodes[idx].value)
    }

    /// Returns the number of nodes on the longest path from the root to a
    /// leaf, or 0 for an empty tree.
    ///
    /// # Examples
    /// ```
    /// use unbalanced_collections::BinarySearchTree;
    ///
    /// let balanced = BinarySearchTree::from([2, 1, 3]);
    /// assert_eq!(balanced.height(), 2);
    ///
    /// let skewed = BinarySearchTree::from([1, 2, 3]);
    /// assert_eq!(skewed.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        let mut tallest = 0;
        let mut work: Vec<(Index, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((idx, depth)) = work.pop() {
            tallest = tallest.max(depth);
            let n = &self.nodes[idx];
            work.extend(n.left.map(|c| (c, depth + 1)));
            work.extend(n.right.map(|c| (c, depth + 1)));
        }
        tallest
    }

    /// Drops all elements from the tree.
    pub fn clear(&mut self) {
        let released = match self.root.take() {
            Some(root) => self.release_subtree(root),
            None => 0,
        };
        trace!(released, "cleared tree");

        self.first = None;
        self.last = None;
        self.len = 0;
        chk_links!(self);
    }

    /// Creates an iterator over the elements in ascending order.
    ///
    /// The iterator steps from node to node through the parent and child
    /// links, so it needs no extra memory.  It is double-ended: the back
    /// starts at the greatest element.
    ///
    /// # Examples
    /// ```
    /// use unbalanced_collections::BinarySearchTree;
    ///
    /// let t = BinarySearchTree::from([3, 1, 2, 1]);
    /// assert!(t.iter().eq([1, 1, 2, 3].iter()));
    /// assert!(t.iter().rev().eq([3, 2, 1, 1].iter()));
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns a cursor at the least element, or at the end position if the
    /// tree is empty.
    pub fn cursor_first(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.first)
    }

    /// Returns a cursor at the end position, one past the greatest element.
    ///
    /// # Examples
    /// ```
    /// use unbalanced_collections::BinarySearchTree;
    ///
    /// let t = BinarySearchTree::from([1, 2, 3]);
    /// let mut c = t.cursor_end();
    /// assert!(c.is_end());
    /// c.move_prev();
    /// assert_eq!(c.get(), Some(&3));
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, None)
    }

    /// Returns a mutable cursor at the least element, or at the end position
    /// if the tree is empty.
    pub fn cursor_first_mut(&mut self) -> CursorMut<'_, T> {
        let first = self.first;
        CursorMut::new(self, first)
    }

    /// Removes and returns the least element.
    ///
    /// # Examples
    /// ```
    /// use unbalanced_collections::BinarySearchTree;
    ///
    /// let mut t = BinarySearchTree::from([2, 1, 1]);
    /// assert_eq!(t.pop_first(), Some(1));
    /// assert_eq!(t.pop_first(), Some(1));
    /// assert_eq!(t.pop_first(), Some(2));
    /// assert_eq!(t.pop_first(), None);
    /// ```
    pub fn pop_first(&mut self) -> Option<T> {
        let first = self.first?;
        let removed = self.remove_node(first);
        chk_links!(self);
        removed
    }

    /// Removes and returns the greatest element.
    pub fn pop_last(&mut self) -> Option<T> {
        let last = self.last?;
        let removed = self.remove_node(last);
        chk_links!(self);
        removed
    }

    fn leftmost(&self, mut idx: Index) -> Index {
        while let Some(left) = self.nodes[idx].left {
            idx = left;
        }
        idx
    }

    fn rightmost(&self, mut idx: Index) -> Index {
        while let Some(right) = self.nodes[idx].right {
            idx = right;
        }
        idx
    }

    // In-order successor: the left-most node of the right subtree, or else
    // the first ancestor reached by climbing out of a left subtree.
    fn next_node(&self, idx: Index) -> Option<Index> {
        if let Some(right) = self.nodes[idx].right {
            return Some(self.leftmost(right));
        }

        let mut curr = idx;
        while let Some(parent) = self.nodes[curr].parent {
            if self.nodes[parent].left == Some(curr) {
                return Some(parent);
            }
            curr = parent;
        }
        None
    }

    // Mirror image of next_node.
    fn prev_node(&self, idx: Index) -> Option<Index> {
        if let Some(left) = self.nodes[idx].left {
            return Some(self.rightmost(left));
        }

        let mut curr = idx;
        while let Some(parent) = self.nodes[curr].parent {
            if self.nodes[parent].right == Some(curr) {
                return Some(parent);
            }
            curr = parent;
        }
        None
    }

    // Unlinks the node, frees its slot and hands back its value.
    fn remove_node(&mut self, idx: Index) -> Option<T> {
        self.len -= 1;
        self.detach(idx);
        self.nodes.remove(idx).map(|n| n.value)
    }

    // Takes the node out of the tree structure, keeping every invariant for
    // the remaining nodes.  The detached node's own links are left stale.
    fn detach(&mut self, idx: Index) {
        let node = &self.nodes[idx];
        match (node.left, node.right) {
            (None, None) => self.detach_leaf(idx),
            (Some(left), None) => self.detach_with_left(idx, left),
            (None, Some(right)) => self.detach_with_right(idx, right),
            (Some(_), Some(right)) => self.detach_with_both(idx, right),
        }
    }

    fn detach_leaf(&mut self, idx: Index) {
        trace!(case = "leaf", "detaching node");
        let parent = self.nodes[idx].parent;
        if self.first == Some(idx) {
            self.first = parent;
        }
        if self.last == Some(idx) {
            self.last = parent;
        }
        self.replace_child(parent, idx, None);
    }

    fn detach_with_left(&mut self, idx: Index, left: Index) {
        trace!(case = "left-only", "detaching node");
        if self.last == Some(idx) {
            self.last = self.prev_node(idx);
        }
        let parent = self.nodes[idx].parent;
        self.replace_child(parent, idx, Some(left));
    }

    fn detach_with_right(&mut self, idx: Index, right: Index) {
        trace!(case = "right-only", "detaching node");
        if self.first == Some(idx) {
            self.first = self.next_node(idx);
        }
        let parent = self.nodes[idx].parent;
        self.replace_child(parent, idx, Some(right));
    }

    fn detach_with_both(&mut self, idx: Index, right: Index) {
        trace!(case = "both", "detaching node");

        // The successor has no left child, so detaching it takes one of the
        // simpler paths.  If it was idx's right child, idx.right now holds the
        // successor's old right subtree.
        let succ = self.leftmost(right);
        self.detach(succ);

        let (parent, left, right) = {
            let n = &self.nodes[idx];
            (n.parent, n.left, n.right)
        };

        let s = &mut self.nodes[succ];
        s.left = left;
        s.right = right;
        for child in [left, right].into_iter().flatten() {
            self.nodes[child].parent = Some(succ);
        }
        self.replace_child(parent, idx, Some(succ));

        // a leaf successor that was also the last node left `last` on idx
        if self.last == Some(idx) {
            self.last = Some(succ);
        }
    }

    // Points the slot that held `old` (a child of `parent`, or the root slot
    // when there is no parent) at `new`, and re-parents `new`.
    fn replace_child(&mut self, parent: Option<Index>, old: Index, new: Option<Index>) {
        match parent {
            None => self.root = new,
            Some(p) => {
                let pn = &mut self.nodes[p];
                if pn.left == Some(old) {
                    pn.left = new;
                } else {
                    pn.right = new;
                }
            }
        }

        if let Some(n) = new {
            self.nodes[n].parent = parent;
        }
    }

    // Frees every node under `top`, children before parents, by climbing back
    // through the parent edges.  The caller is responsible for the slot that
    // points at `top`.  Returns the number of nodes freed.
    fn release_subtree(&mut self, top: Index) -> usize {
        let mut released = 0;
        let mut curr = Some(top);
        while let Some(idx) = curr {
            let node = &self.nodes[idx];
            if let Some(child) = node.left.or(node.right) {
                curr = Some(child);
                continue;
            }

            let parent = node.parent;
            self.nodes.remove(idx);
            released += 1;
            if idx == top {
                break;
            }

            if let Some(p) = parent {
                let pn = &mut self.nodes[p];
                if pn.left == Some(idx) {
                    pn.left = None;
                } else {
                    pn.right = None;
                }
            }
            curr = parent;
        }
        released
    }

    // Copies the structure of `source` node for node into self, which must be
    // empty.  Walks both trees in lock-step through the parent edges.
    fn copy_from(&mut self, source: &Self)
    where
        T: Clone,
    {
        let Some(src_root) = source.root else {
            return;
        };

        let dst_root = self
            .nodes
            .insert(Node::new(source.nodes[src_root].value.clone(), None));

        let (mut src, mut dst) = (src_root, dst_root);
        let mut step = Step::Down;
        loop {
            let s = &source.nodes[src];
            match (step, s.left, s.right) {
                (Step::Down, Some(left), _) => {
                    let value = source.nodes[left].value.clone();
                    let child = self.nodes.insert(Node::new(value, Some(dst)));
                    self.nodes[dst].left = Some(child);
                    src = left;
                    dst = child;
                }

                (Step::Down | Step::FromLeft, _, Some(right)) => {
                    let value = source.nodes[right].value.clone();
                    let child = self.nodes.insert(Node::new(value, Some(dst)));
                    self.nodes[dst].right = Some(child);
                    src = right;
                    dst = child;
                    step = Step::Down;
                }

                _ => match (src == src_root, s.parent, self.nodes[dst].parent) {
                    (false, Some(src_parent), Some(dst_parent)) => {
                        step = if source.nodes[src_parent].left == Some(src) {
                            Step::FromLeft
                        } else {
                            Step::FromRight
                        };
                        src = src_parent;
                        dst = dst_parent;
                    }

                    _ => break,
                },
            }
        }

        self.root = Some(dst_root);
        self.first = Some(self.leftmost(dst_root));
        self.last = Some(self.rightmost(dst_root));
        self.len = source.len;
        trace!(copied = self.len, "copied tree");
    }

    // Every part of check() except value ordering: edges, parent links, the
    // length and the cached ends.
    fn check_links(&self) -> Result<()> {
        let Some(root) = self.root else {
            if self.first.is_some() {
                return Err(TreeError::StaleFirst);
            }
            if self.last.is_some() {
                return Err(TreeError::StaleLast);
            }
            if self.len != 0 {
                return Err(TreeError::LengthMismatch {
                    recorded: self.len,
                    reachable: 0,
                });
            }
            if !self.nodes.is_empty() {
                return Err(TreeError::LeakedNodes {
                    live: self.nodes.len(),
                    reachable: 0,
                });
            }
            return Ok(());
        };

        match self.nodes.get(root) {
            None => return Err(TreeError::DanglingEdge),
            Some(n) if n.parent.is_some() => return Err(TreeError::RootHasParent),
            Some(_) => (),
        }

        let mut work = vec![root];
        let mut reachable = 0;
        while let Some(idx) = work.pop() {
            reachable += 1;
            let n = self.nodes.get(idx).ok_or(TreeError::DanglingEdge)?;
            for child in [n.left, n.right].into_iter().flatten() {
                let c = self.nodes.get(child).ok_or(TreeError::DanglingEdge)?;
                if c.parent != Some(idx) {
                    return Err(TreeError::BrokenParentLink);
                }
                work.push(child);
            }
        }

        if reachable != self.len {
            return Err(TreeError::LengthMismatch {
                recorded: self.len,
                reachable,
            });
        }
        if reachable != self.nodes.len() {
            return Err(TreeError::LeakedNodes {
                live: self.nodes.len(),
                reachable,
            });
        }
        if self.first != Some(self.leftmost(root)) {
            return Err(TreeError::StaleFirst);
        }
        if self.last != Some(self.rightmost(root)) {
            return Err(TreeError::StaleLast);
        }

        Ok(())
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Adds a value to the tree.  Values equal to ones already present are
    /// kept and placed after them.
    ///
    /// # Examples
    /// ```
    /// use unbalanced_collections::BinarySearchTree;
    ///
    /// let mut t = BinarySearchTree::new();
    /// t.insert(4);
    /// t.insert(2);
    /// t.insert(4);
    /// assert_eq!(t.to_vec(), vec![2, 4, 4]);
    /// ```
    pub fn insert(&mut self, value: T) {
        let mut parent = None;
        let mut goes_left = false;
        let mut curr = self.root;
        while let Some(idx) = curr {
            let n = &self.nodes[idx];
            parent = Some(idx);
            goes_left = value < n.value;
            curr = if goes_left { n.left } else { n.right };
        }

        let added = self.nodes.insert(Node::new(value, parent));

        match parent {
            None => {
                self.root = Some(added);
                self.first = Some(added);
                self.last = Some(added);
            }

            Some(p) if goes_left => {
                self.nodes[p].left = Some(added);
                if self.first == Some(p) {
                    self.first = Some(added);
                }
            }

            Some(p) => {
                self.nodes[p].right = Some(added);
                if self.last == Some(p) {
                    self.last = Some(added);
                }
            }
        }

        self.len += 1;
        chk_tree!(self);
    }

    /// Constructs an element from `args` and inserts it.
    ///
    /// # Examples
    /// ```
    /// use unbalanced_collections::BinarySearchTree;
    ///
    /// let mut t: BinarySearchTree<String> = BinarySearchTree::new();
    /// t.emplace("b");
    /// t.emplace('a');
    /// assert_eq!(t.to_vec(), vec!["a".to_string(), "b".to_string()]);
    /// ```
    pub fn emplace<A: Into<T>>(&mut self, args: A) {
        self.insert(args.into());
    }

    // Descends to some node equal to `value`.  Which one is unspecified when
    // there are duplicates.
    fn find_node<Q>(&self, value: &Q) -> Option<Index>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut curr = self.root;
        while let Some(idx) = curr {
            let n = &self.nodes[idx];
            match value.cmp(n.value.borrow()) {
                Less => curr = n.left,
                Equal => return Some(idx),
                Greater => curr = n.right,
            }
        }
        None
    }

    /// Returns a cursor at an element equal to `value`, or at the end
    /// position if there is none.
    ///
    /// # Examples
    /// ```
    /// use unbalanced_collections::BinarySearchTree;
    ///
    /// let t = BinarySearchTree::from([3, 1, 2]);
    /// assert_eq!(t.find(&2).get(), Some(&2));
    /// assert_eq!(t.find(&7), t.cursor_end());
    /// ```
    pub fn find<Q>(&self, value: &Q) -> Cursor<'_, T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Cursor::new(self, self.find_node(value))
    }

    /// Like [`find`](#method.find), but the returned cursor can remove the
    /// element it points at.
    pub fn find_mut<Q>(&mut self, value: &Q) -> CursorMut<'_, T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = self.find_node(value);
        CursorMut::new(self, node)
    }

    /// Returns a reference to an element equal to `value`, if any.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(value).map(|idx| &self.nodes[idx].value)
    }

    /// Tests if the tree holds an element equal to `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(value).is_some()
    }

    /// Counts the elements equal to `value`.
    ///
    /// # Examples
    /// ```
    /// use unbalanced_collections::BinarySearchTree;
    ///
    /// let t = BinarySearchTree::from([1, 1, 2, 3, 7, 4, 4, 2, 4]);
    /// assert_eq!(t.count(&4), 3);
    /// assert_eq!(t.count(&9), 0);
    /// ```
    pub fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        // Equal values only ever go right of each other, so below a node
        // that is not greater than `value` every further match is in its
        // right subtree.  This depends on insert sending ties right.
        let mut total = 0;
        let mut curr = self.root;
        while let Some(idx) = curr {
            let n = &self.nodes[idx];
            match value.cmp(n.value.borrow()) {
                Less => curr = n.left,
                Equal => {
                    total += 1;
                    curr = n.right;
                }
                Greater => curr = n.right,
            }
        }
        total
    }

    /// Removes one element equal to `value`.  Returns whether an element was
    /// removed; a missing value leaves the tree untouched.
    ///
    /// # Examples
    /// ```
    /// use unbalanced_collections::BinarySearchTree;
    ///
    /// let mut t = BinarySearchTree::from([5, 5, 1]);
    /// assert!(t.remove(&5));
    /// assert!(t.remove(&5));
    /// assert!(!t.remove(&5));
    /// assert_eq!(t.to_vec(), vec![1]);
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(value).is_some()
    }

    /// Removes one element equal to `value` and returns it.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let idx = self.find_node(value)?;
        let removed = self.remove_node(idx);
        chk_tree!(self);
        removed
    }

    /// Moves all elements from other into self and leaves other empty.
    ///
    /// # Examples
    /// ```
    /// use unbalanced_collections::BinarySearchTree;
    ///
    /// let mut t1 = BinarySearchTree::from([0, 2]);
    /// let mut t2 = BinarySearchTree::from([1, 2]);
    /// t1.append(&mut t2);
    /// assert_eq!(t1.to_vec(), vec![0, 1, 2, 2]);
    /// assert!(t2.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        self.extend(std::mem::take(other));
    }

    /// Validates the tree structure: ordering, parent links, the cached first
    /// and last positions and the length.
    ///
    /// A tree built through the public API always passes.  The check walks
    /// every node, so it costs O(n) time and O(height) memory.
    pub fn check(&self) -> Result<()> {
        self.check_links()?;

        let Some(root) = self.root else {
            return Ok(());
        };

        // (node, inclusive lower bound, exclusive upper bound)
        let mut work: Vec<(Index, Option<&T>, Option<&T>)> = vec![(root, None, None)];
        while let Some((idx, lower, upper)) = work.pop() {
            let n = &self.nodes[idx];

            if lower.is_some_and(|lo| n.value < *lo) || upper.is_some_and(|hi| n.value >= *hi) {
                return Err(TreeError::OutOfOrder);
            }

            if let Some(left) = n.left {
                work.push((left, lower, Some(&n.value)));
            }
            if let Some(right) = n.right {
                work.push((right, Some(&n.value), upper));
            }
        }

        Ok(())
    }
}

impl<T: Clone> BinarySearchTree<T> {
    /// Returns the elements in ascending order.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Clone> Clone for BinarySearchTree<T> {
    /// Deep-copies the tree.  The copy has the same shape as the original.
    fn clone(&self) -> Self {
        let mut copy = BinarySearchTree::new();
        copy.copy_from(self);
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.copy_from(source);
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Prints one subtree as `(value left right)`, with `.` for a missing child.
// Pending output is kept on a work list rather than the call stack, since a
// subtree can be as deep as it is long.
struct SubtreeFmt<'a, T> {
    tree: &'a BinarySearchTree<T>,
    idx: Index,
}

enum Emit {
    Open(Index),
    Text(&'static str),
}

impl Emit {
    fn child(link: Option<Index>) -> Self {
        link.map_or(Emit::Text("."), Emit::Open)
    }
}

impl<T: Debug> Debug for SubtreeFmt<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut work = vec![Emit::Open(self.idx)];
        while let Some(item) = work.pop() {
            match item {
                Emit::Text(s) => f.write_str(s)?,
                Emit::Open(idx) => {
                    let n = &self.tree.nodes[idx];
                    f.write_fmt(format_args!("({:?} ", n.value))?;

                    // pushed in reverse of the order they print
                    work.push(Emit::Text(")"));
                    work.push(Emit::child(n.right));
                    work.push(Emit::Text(" "));
                    work.push(Emit::child(n.left));
                }
            }
        }
        Ok(())
    }
}

impl<T: Debug> Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.root {
            None => f.write_str("BinarySearchTree(EMPTY)"),
            Some(idx) => f.write_fmt(format_args!(
                "BinarySearchTree(#{}, {:?})",
                self.len,
                SubtreeFmt { tree: self, idx }
            )),
        }
    }
}

impl<T: PartialEq> PartialEq for BinarySearchTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(x, y)| x == y)
    }
}

impl<T: Eq> Eq for BinarySearchTree<T> {}

impl<T: PartialOrd> PartialOrd for BinarySearchTree<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for BinarySearchTree<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for BinarySearchTree<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for v in self.iter() {
            v.hash(state);
        }
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.insert(x);
        }
    }
}

impl<'a, T: Clone + Ord> Extend<&'a T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for x in iter {
            self.insert(x.clone());
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for BinarySearchTree<T> {
    fn from(value: [T; N]) -> Self {
        Self::from_iter(value)
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut t = BinarySearchTree::new();
        t.extend(iter);
        t
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for BinarySearchTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
