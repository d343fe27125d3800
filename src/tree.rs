//! An owned, unbalanced Binary Search Tree. Every `Tree` is a node: it
//! always holds a value and exclusively owns up to two child subtrees.
//! There is no empty tree.
//!
//! Cloning a `Tree` is deep - the clone shares no nodes with the
//! original, so inserting into one never shows up in the other.
//!
//! # Examples
//!
//! ```
//! use inorder_bst::Tree;
//!
//! let mut tree = Tree::new(5);
//! assert!(tree.insert(3));
//!
//! // A snapshot taken now won't see later inserts.
//! let snapshot = tree.clone();
//! assert!(tree.insert(7));
//!
//! // Duplicates are rejected.
//! assert!(!tree.insert(5));
//!
//! assert_eq!(tree.to_string(), "3 5 7");
//! assert_eq!(snapshot.to_string(), "3 5");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::trace;

use crate::iter::Iter;

/// A child slot. `None` marks an empty subtree.
pub(crate) type Subtree<T> = Option<Box<Tree<T>>>;

/// A Binary Search Tree node with element type `T`.
///
/// Every value in `left` is less than `value` and every value in `right`
/// is greater than `value`.
pub struct Tree<T> {
    pub(crate) value: T,
    pub(crate) left: Subtree<T>,
    pub(crate) right: Subtree<T>,
}

// There is no empty tree so `len` has no `is_empty` partner.
#[allow(clippy::len_without_is_empty)]
impl<T> Tree<T> {
    /// Creates a leaf holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored at the root.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Inserts `value` in its sorted position. Returns `true` if a new node
    /// was added or `false` if an equal value was already present, in which
    /// case the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use inorder_bst::Tree;
    ///
    /// let mut tree = Tree::new(5);
    ///
    /// assert!(tree.insert(3));
    /// assert!(!tree.insert(5));
    /// assert!(!tree.insert(3));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut current = self;
        let mut depth = 1;

        loop {
            // Equal values have to be caught here. Otherwise they'd keep
            // routing right and land as a second copy.
            let slot = match value.cmp(&current.value) {
                Ordering::Equal => {
                    trace!("rejected duplicate value at depth {}", depth);
                    return false;
                }
                Ordering::Less => &mut current.left,
                Ordering::Greater => &mut current.right,
            };
            depth += 1;

            match slot {
                Some(child) => current = &mut **child,
                None => {
                    *slot = Some(Box::new(Self::new(value)));
                    trace!("inserted new leaf at depth {}", depth);
                    return true;
                }
            }
        }
    }

    /// Returns `true` if a value equal to `value` is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use inorder_bst::Tree;
    ///
    /// let mut tree = Tree::new(5);
    /// tree.insert(3);
    ///
    /// assert!(tree.contains(&3));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = Some(self);
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }

        false
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> &T {
        let mut current = self;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        &current.value
    }

    /// The largest value in the tree.
    pub fn max(&self) -> &T {
        let mut current = self;
        while let Some(right) = current.right.as_deref() {
            current = right;
        }
        &current.value
    }

    /// Number of values in the tree. Never zero.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Number of levels on the longest path from the root to a leaf. A
    /// single node has a height of 1.
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            pending.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }

        deepest
    }

    /// Gets the iterator for this tree, starting at the least value.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Same as [`Tree::iter`]. Pairs with [`Tree::end`] for cursor style
    /// loops.
    pub fn begin(&self) -> Iter<'_, T> {
        self.iter()
    }

    /// An exhausted iterator. Every iterator over this tree compares equal
    /// to it once it has moved past the largest value.
    ///
    /// # Examples
    ///
    /// ```
    /// use inorder_bst::Tree;
    ///
    /// let mut tree = Tree::new(5);
    /// tree.insert(3);
    ///
    /// let mut seen = Vec::new();
    /// let mut it = tree.begin();
    /// while it != tree.end() {
    ///     seen.push(*it.get().unwrap());
    ///     it.advance();
    /// }
    /// assert_eq!(seen, [3, 5]);
    /// ```
    pub fn end(&self) -> Iter<'_, T> {
        Iter::default()
    }

    /// Moves `source`'s value and subtrees into `self` without allocating.
    /// Whatever `self` owned before is dropped, except its old value which
    /// is handed to `source`. `source` is left as a leaf.
    pub fn move_from(&mut self, source: &mut Self) {
        mem::swap(&mut self.value, &mut source.value);
        self.left = source.left.take();
        self.right = source.right.take();
        trace!("moved subtrees into tree");
    }

}

/// A pending piece of work in [`clone_subtree`].
enum CloneStep<'a, T> {
    /// Copy this subtree and push the copy onto the output stack.
    Copy(Option<&'a Tree<T>>),
    /// Both children of this node have been copied. Pop them and push the
    /// copied node.
    Assemble(&'a Tree<T>),
}

/// Either `None` or a freshly allocated deep copy of `subtree`, along with
/// the number of nodes copied.
///
/// Copies bottom up from a heap stack so the depth of the tree doesn't
/// matter.
fn clone_subtree<T: Clone>(subtree: &Subtree<T>) -> (Subtree<T>, usize) {
    let mut steps = vec![CloneStep::Copy(subtree.as_deref())];
    let mut copied: Vec<Subtree<T>> = Vec::new();
    let mut count = 0;

    while let Some(step) = steps.pop() {
        match step {
            CloneStep::Copy(None) => copied.push(None),
            CloneStep::Copy(Some(node)) => {
                // Left is popped first so its copy lands below the right's.
                steps.push(CloneStep::Assemble(node));
                steps.push(CloneStep::Copy(node.right.as_deref()));
                steps.push(CloneStep::Copy(node.left.as_deref()));
            }
            CloneStep::Assemble(node) => {
                let right = copied.pop().flatten();
                let left = copied.pop().flatten();
                copied.push(Some(Box::new(Tree {
                    value: node.value.clone(),
                    left,
                    right,
                })));
                count += 1;
            }
        }
    }

    (copied.pop().flatten(), count)
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        let (left, left_count) = clone_subtree(&self.left);
        let (right, right_count) = clone_subtree(&self.right);
        trace!("deep cloned tree of {} values", left_count + right_count + 1);

        Self {
            value: self.value.clone(),
            left,
            right,
        }
    }

    /// Replaces `self` with a deep copy of `source`. `source.left` and
    /// `source.right` are cloned into the matching slots of `self`, and the
    /// subtrees `self` used to own are freed.
    ///
    /// `&mut self` and `&source` can never alias so assigning a tree to
    /// itself can't reach this. `tree = tree.clone()` is the only way to
    /// spell it and it leaves `tree` unchanged.
    fn clone_from(&mut self, source: &Self) {
        let (left, left_count) = clone_subtree(&source.left);
        let (right, right_count) = clone_subtree(&source.right);
        trace!("deep cloned tree of {} values in place", left_count + right_count + 1);

        self.value.clone_from(&source.value);
        self.left = left;
        self.right = right;
    }
}

impl<T> Drop for Tree<T> {
    // Unbalanced trees can be as deep as they are long, so children are
    // torn down from a heap stack rather than by recursing.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Tree<T>>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Prints a space-separated in-order traversal of the tree.
impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.iter();
        if let Some(first) = values.next() {
            write!(f, "{}", first)?;
        }
        for value in values {
            write!(f, " {}", value)?;
        }
        Ok(())
    }
}

/// Shows the values in order, e.g. `{3, 5, 7}`.
impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Trees are equal when they have the same shape and the same value at
/// every position. Two trees holding the same values in different shapes
/// are not equal.
impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.value != b.value {
                return false;
            }
            let children = [
                (a.left.as_deref(), b.left.as_deref()),
                (a.right.as_deref(), b.right.as_deref()),
            ];
            for pair in children {
                match pair {
                    (Some(a), Some(b)) => pending.push((a, b)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }

        true
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
