//! Orderings for the tree containers.
//!
//! A [`Comparator`] decides how two values of the same type order relative
//! to each other. It is bound to a tree once, at construction time, and
//! stays with the tree for its whole lifetime. That is deliberate: a search
//! tree built under one ordering and then searched under another silently
//! returns garbage, so the ordering travels with the tree instead of being
//! picked again at every call site.

use std::cmp::Ordering;

/// A total, consistent three-way ordering over values of type `T`.
///
/// "Total and consistent" means the usual things: antisymmetric and
/// transitive for every pair of values ever given to the same tree. The
/// containers don't (and can't) check this; a comparator that disagrees
/// with itself breaks the search invariant, not memory safety.
///
/// Any closure of type `Fn(&T, &T) -> Ordering` is a `Comparator`, so most
/// callers never implement this trait by hand:
///
/// ```
/// use chains::bst::Tree;
///
/// // Order strings by length instead of lexicographically.
/// let mut tree = Tree::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// tree.insert("hi");
/// tree.insert("hello");
///
/// assert_eq!(tree.find(&"xx"), Some(&"hi")); // same length, compares equal
/// assert_eq!(tree.find(&"xxx"), None);
/// ```
pub trait Comparator<T> {
    /// Compares `a` against `b`, returning where `a` orders relative to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The natural ordering of a type, as defined by its [`Ord`] impl.
///
/// This is the comparator the trees use when built with `Tree::new`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Natural;

impl<T: Ord> Comparator<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}
