//! This crate exposes an owned, unbalanced Binary Search Tree with deep
//! copies and a stack based in-order iterator.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure built recursively out of nodes.
//! Each node stores a value and may have a left and a right child node. The
//! most important invariants of a BST are:
//!
//! 1. For every node, all the nodes in its left subtree have a value less
//!    than its own value.
//! 2. For every node, all the nodes in its right subtree have a value
//!    greater than its own value.
//!
//! > Note that some nodes have no children. These nodes are called "leaf nodes".
//!
//! Here a [`Tree`] is always a node - it is created from its first value and
//! never shrinks. Inserting a value that is already present is refused.
//! Nothing rebalances the tree, so inserting sorted values produces a tree
//! as tall as it is long.
//!
//! BSTs naturally support sorted iteration by visiting the left subtree,
//! then the subtree root, then the right subtree. [`Iter`] does this without
//! recursion by keeping a stack of the nodes still waiting to be visited.
//!
//! # Examples
//!
//! ```
//! use inorder_bst::Tree;
//!
//! let mut tree = Tree::new(5);
//! tree.insert(3);
//! let copy = tree.clone();
//! tree.insert(7);
//!
//! assert_eq!(tree.to_string(), "3 5 7");
//! assert_eq!(copy.to_string(), "3 5");
//! assert_eq!(tree.iter().collect::<Vec<_>>(), [&3, &5, &7]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod iter;
mod tree;

pub use error::{IterError, IterResult};
pub use iter::Iter;
pub use tree::Tree;
