//! Errors reported by [`BinarySearchTree::check`](crate::BinarySearchTree::check).
//!
//! None of the container operations fail.  These errors only describe a
//! violated structural invariant found while validating a tree, which means
//! a bug in the tree engine itself.

use thiserror::Error;

/// A structural invariant that does not hold.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A value sits on the wrong side of one of its ancestors.  Left subtrees
    /// must hold strictly smaller values, right subtrees values that are
    /// greater or equal.
    #[error("value out of order with an ancestor")]
    OutOfOrder,

    /// A child's parent edge does not point back at the node holding it.
    #[error("child node does not link back to its parent")]
    BrokenParentLink,

    /// An edge names an arena slot that holds no node.
    #[error("edge points at a released node")]
    DanglingEdge,

    /// The root node has a parent edge.
    #[error("root node has a parent")]
    RootHasParent,

    /// The cached first position is not the left-most node.
    #[error("cached first node is not the left-most node")]
    StaleFirst,

    /// The cached last position is not the right-most node.
    #[error("cached last node is not the right-most node")]
    StaleLast,

    /// The recorded length differs from the number of reachable nodes.
    #[error("recorded length {recorded} but {reachable} nodes are reachable")]
    LengthMismatch {
        /// the length the tree reports
        recorded: usize,
        /// the nodes found by walking from the root
        reachable: usize,
    },

    /// The arena holds nodes that cannot be reached from the root.
    #[error("{live} live nodes but only {reachable} are reachable")]
    LeakedNodes {
        /// the number of occupied arena slots
        live: usize,
        /// the nodes found by walking from the root
        reachable: usize,
    },
}

/// Result of validating a tree.
pub type Result<T> = std::result::Result<T, TreeError>;
