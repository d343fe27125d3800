//! In-order iteration over a [`Tree`].
//!
//! [`Iter`] is both a regular [`Iterator`] and a cursor: [`Iter::get`]
//! peeks at the current value and [`Iter::advance`] steps past it. Two
//! iterators are equal when they point at the same node (not merely an
//! equal value) or when both are exhausted.
//!
//! Design based on <https://medium.com/algorithm-problems/binary-search-tree-iterator-19615ec585a>
//!
//! # Examples
//!
//! ```
//! use inorder_bst::{IterError, Tree};
//!
//! let mut tree = Tree::new(5);
//! tree.extend([3, 7]);
//!
//! let values: Vec<_> = tree.iter().copied().collect();
//! assert_eq!(values, [3, 5, 7]);
//!
//! let mut it = tree.begin();
//! assert_eq!(it.try_get(), Ok(&3));
//! it.advance();
//! it.advance();
//! it.advance();
//! assert_eq!(it, tree.end());
//! assert!(matches!(it.try_get(), Err(IterError::Exhausted { .. })));
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::ptr;

use crate::error::{IterError, IterResult};
use crate::tree::Tree;

/// Iterator over a [`Tree`], yielding values in ascending order.
pub struct Iter<'a, T> {
    /// Stack of nodes that have the current node in their left subtree.
    /// Equivalently, the path from the root to the current node, skipping
    /// nodes that have already been seen. The current node is on top and an
    /// empty stack means the iterator is exhausted.
    nodes: Vec<&'a Tree<T>>,
}

impl<'a, T> Iter<'a, T> {
    /// Creates an iterator pointing at the leftmost (least) node of `root`.
    pub(crate) fn new(root: &'a Tree<T>) -> Self {
        let mut iter = Self::default();
        iter.fill_left(Some(root));
        iter
    }

    /// Pushes `node` and then its left child, its left child's left child
    /// and so on until a node has no left child.
    fn fill_left(&mut self, mut node: Option<&'a Tree<T>>) {
        while let Some(n) = node {
            self.nodes.push(n);
            node = n.left.as_deref();
        }
    }

    /// The value the iterator currently points at, or `None` once it is
    /// exhausted.
    pub fn get(&self) -> Option<&'a T> {
        self.nodes.last().map(|&node| &node.value)
    }

    /// Moves to the next value in order. The current node is popped and
    /// replaced by the path to the leftmost node of its right subtree. With
    /// no right subtree the next node is whatever was below it on the stack.
    ///
    /// Advancing an exhausted iterator does nothing. Use
    /// [`Iter::try_advance`] to have that reported.
    pub fn advance(&mut self) {
        if let Some(node) = self.nodes.pop() {
            self.fill_left(node.right.as_deref());
        }
    }

    /// Like [`Iter::get`] but reports an exhausted iterator as an error.
    pub fn try_get(&self) -> IterResult<&'a T> {
        self.get().ok_or(IterError::Exhausted {
            operation: "dereference",
        })
    }

    /// Like [`Iter::advance`] but reports an exhausted iterator as an error.
    pub fn try_advance(&mut self) -> IterResult<()> {
        if self.is_end() {
            return Err(IterError::Exhausted { operation: "advance" });
        }
        self.advance();
        Ok(())
    }

    /// `true` once every value has been visited.
    pub fn is_end(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// The exhausted iterator.
impl<T> Default for Iter<'_, T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

// Manual impl so `T` doesn't need to be `Clone`.
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("current", &self.get())
            .field("pending", &self.nodes.len())
            .finish()
    }
}

/// Iterators are equal when both are exhausted or both point at the very
/// same node. Equal values in different trees don't count.
impl<T> PartialEq for Iter<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.nodes.last(), other.nodes.last()) {
            (None, None) => true,
            (Some(&a), Some(&b)) => ptr::eq(a, b),
            _ => false,
        }
    }
}

impl<T> Eq for Iter<'_, T> {}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Returns the current value and moves past it.
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.pop()?;
        self.fill_left(node.right.as_deref());
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Everything on the stack is still to be visited.
        (self.nodes.len(), None)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
