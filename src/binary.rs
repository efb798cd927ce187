//! A minimal rooted binary tree with no ordering assumption.
//!
//! Unlike [`bst::Tree`](crate::bst::Tree), nothing constrains where a value
//! may sit: callers assemble whatever shape they want out of [`Node`]s and
//! hang it on the tree. Because there is no ordering to steer by, searching
//! has to be exhaustive: [`Tree::find`] is a depth-first walk that checks
//! the current node, then the entire left subtree, then the right, and
//! returns the first match in that order. That is `O(n)`, but it is correct
//! for *any* shape, which an ordered search is not.

use std::cmp::Ordering;
use std::fmt;

use crate::compare::{Comparator, Natural};

/// A node of a [`Tree`]: one value and two optional owned children.
#[derive(Debug, Clone)]
pub struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// Creates a leaf node holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Returns a reference to the stored value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns a mutable reference to the stored value.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Consumes the node and returns its value, dropping both subtrees.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Returns the left child, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// Returns the right child, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Hangs `child` as the left subtree, dropping whatever was there.
    pub fn set_left(&mut self, child: Node<T>) {
        self.left = Some(Box::new(child));
    }

    /// Hangs `child` as the right subtree, dropping whatever was there.
    pub fn set_right(&mut self, child: Node<T>) {
        self.right = Some(Box::new(child));
    }

    /// Detaches and returns the left subtree.
    pub fn take_left(&mut self) -> Option<Node<T>> {
        self.left.take().map(|boxed| *boxed)
    }

    /// Detaches and returns the right subtree.
    pub fn take_right(&mut self) -> Option<Node<T>> {
        self.right.take().map(|boxed| *boxed)
    }
}

/// A rooted binary tree over caller-assembled [`Node`]s.
///
/// The comparator is only consulted for equality during [`find`](Self::find);
/// it never steers the walk.
///
/// # Examples
///
/// ```
/// use chains::binary::{Node, Tree};
///
/// //     1
/// //    / \
/// //   7   3   (deliberately unordered)
/// let mut root = Node::new(1);
/// root.set_left(Node::new(7));
/// root.set_right(Node::new(3));
///
/// let mut tree = Tree::new();
/// tree.set_root(root);
///
/// assert_eq!(tree.find(&7), Some(&7));
/// assert_eq!(tree.find(&2), None);
/// ```
pub struct Tree<T, C = Natural> {
    root: Option<Box<Node<T>>>,
    comparator: C,
}

impl<T: Ord> Tree<T> {
    /// Generates a new, empty `Tree` that checks equality through the
    /// type's natural ordering.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T: Ord> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>> Tree<T, C> {
    /// Generates a new, empty `Tree` bound to the given comparator.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
        }
    }

    /// Returns `true` if the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Replaces the root with the given node, dropping any previous tree.
    /// No validation is done on the node's shape.
    pub fn set_root(&mut self, node: Node<T>) {
        self.root = Some(Box::new(node));
    }

    /// Returns the root node, if any.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Returns the root node mutably, if any.
    pub fn root_mut(&mut self) -> Option<&mut Node<T>> {
        self.root.as_deref_mut()
    }

    /// Detaches and returns the whole tree, leaving this one empty.
    pub fn take_root(&mut self) -> Option<Node<T>> {
        self.root.take().map(|boxed| *boxed)
    }

    /// Searches the whole tree for a value comparing equal to `target`.
    ///
    /// The walk is depth-first, current node before left subtree before
    /// right subtree, and the first match in that order wins. Absence is
    /// `None`, not an error.
    pub fn find(&self, target: &T) -> Option<&T> {
        self.root
            .as_deref()
            .and_then(|root| self.find_in(root, target))
    }

    fn find_in<'a>(&self, node: &'a Node<T>, target: &T) -> Option<&'a T> {
        if self.comparator.compare(&node.value, target) == Ordering::Equal {
            return Some(&node.value);
        }
        node.left
            .as_deref()
            .and_then(|left| self.find_in(left, target))
            .or_else(|| {
                node.right
                    .as_deref()
                    .and_then(|right| self.find_in(right, target))
            })
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Tree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_in_unordered_tree() {
        //       5
        //      / \
        //     9   1
        //    /     \
        //   4       8
        let mut root = Node::new(5);
        let mut left = Node::new(9);
        left.set_left(Node::new(4));
        let mut right = Node::new(1);
        right.set_right(Node::new(8));
        root.set_left(left);
        root.set_right(right);

        let mut tree = Tree::new();
        tree.set_root(root);

        for present in [5, 9, 1, 4, 8] {
            assert_eq!(tree.find(&present), Some(&present));
        }
        assert_eq!(tree.find(&7), None);
    }

    #[test]
    fn test_empty_tree_finds_nothing() {
        let tree = Tree::<i32>::new();
        assert!(tree.is_empty());
        assert_eq!(tree.find(&1), None);
    }

    #[test]
    fn test_left_subtree_wins_over_right() {
        // Two nodes compare equal under a key-only comparator; the one in
        // the left subtree must be returned.
        let mut root = Node::new((1, "root"));
        root.set_left(Node::new((2, "left")));
        root.set_right(Node::new((2, "right")));

        let mut tree =
            Tree::with_comparator(|a: &(i32, &str), b: &(i32, &str)| a.0.cmp(&b.0));
        tree.set_root(root);

        assert_eq!(tree.find(&(2, "")), Some(&(2, "left")));
    }

    #[test]
    fn test_node_accessors() {
        let mut node = Node::new(1);
        node.set_left(Node::new(2));
        node.set_right(Node::new(3));

        *node.value_mut() = 10;
        assert_eq!(node.value(), &10);
        assert_eq!(node.left().map(Node::value), Some(&2));

        let detached = node.take_right().map(Node::into_value);
        assert_eq!(detached, Some(3));
        assert!(node.right().is_none());
    }

    #[test]
    fn test_take_root_empties_the_tree() {
        let mut tree = Tree::new();
        tree.set_root(Node::new(1));

        assert_eq!(tree.take_root().map(Node::into_value), Some(1));
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
    }
}
