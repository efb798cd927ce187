//! A singly linked sequence. Every node links forward to its successor,
//! so the list only ever walks forward from the head.
//!
//! # Examples
//!
//! ```
//! use chains::singly::List;
//!
//! let mut list = List::new();
//! list.push_back(1);
//! list.push_back(2);
//! list.push_back(3);
//!
//! assert_eq!(list.get(1), Ok(&2));
//!
//! // Removal returns the detached value.
//! assert_eq!(list.remove(1), Ok(2));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 3]);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::{Error, Result};

struct Node<T> {
    value: T,
    next: Option<NonNull<Node<T>>>,
}

/// A singly linked list with `O(1)` append and `O(index)` indexed access.
///
/// The list owns every node reachable from `head`; nodes are allocated on
/// push and reclaimed on removal (or when the list drops). The tail is an
/// alias to the last node so that appending doesn't have to walk the
/// chain; removal keeps it accurate, including when the last node is the
/// one removed.
pub struct List<T> {
    head: Option<NonNull<Node<T>>>,
    // Aliases the last node of the chain. `None` iff the list is empty.
    tail: Option<NonNull<Node<T>>>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> {
    /// Generates a new, empty `List`.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
        }
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Counts the elements in the list.
    ///
    /// The singly linked list keeps no length counter, so this walks the
    /// whole chain in `O(n)`. See [`doubly::List`](crate::doubly::List) for
    /// the variant that tracks its length.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Appends a value at the tail of the list in `O(1)`.
    pub fn push_back(&mut self, value: T) {
        let node = NonNull::from(Box::leak(Box::new(Node { value, next: None })));
        match self.tail {
            // SAFETY: `tail` always points at the live last node of the
            // chain, and we hold `&mut self`, so no other reference to it
            // exists while we link in its successor.
            Some(mut tail) => unsafe { tail.as_mut() }.next = Some(node),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
    }

    /// Returns a reference to the element at `index`, walking from the
    /// head in `O(index)`.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the list has no elements, [`Error::OutOfBounds`]
    /// if the chain ends before `index` is reached.
    ///
    /// # Examples
    ///
    /// ```
    /// use chains::{singly::List, Error};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.get(0), Err(Error::Empty));
    ///
    /// list.push_back("a");
    /// list.push_back("b");
    /// assert_eq!(list.get(1), Ok(&"b"));
    /// assert_eq!(list.get(2), Err(Error::OutOfBounds(2)));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        let mut current = self.head.ok_or(Error::Empty)?;
        for _ in 0..index {
            // SAFETY: the walk only follows links between live nodes of
            // the chain, and `&self` keeps all of them from being freed
            // or mutated while we read.
            current = unsafe { current.as_ref() }
                .next
                .ok_or(Error::OutOfBounds(index))?;
        }
        // SAFETY: as above; the reference borrows `self`, so the node
        // outlives it.
        Ok(unsafe { &current.as_ref().value })
    }

    /// Returns a reference to the first element, or `None` if the list is
    /// empty.
    pub fn front(&self) -> Option<&T> {
        // SAFETY: `head` is either `None` or points at a live node owned
        // by this list, which `&self` keeps alive.
        self.head.map(|node| unsafe { &node.as_ref().value })
    }

    /// Returns a reference to the last element, or `None` if the list is
    /// empty.
    pub fn back(&self) -> Option<&T> {
        // SAFETY: `tail` is either `None` or points at the live last node
        // of the chain, which `&self` keeps alive.
        self.tail.map(|node| unsafe { &node.as_ref().value })
    }

    /// Detaches the element at `index` and returns its value.
    ///
    /// Removing the head just advances `head`; removing any other element
    /// relinks its predecessor's forward pointer to skip it. Either way the
    /// tail alias stays accurate, so a later [`push_back`](Self::push_back)
    /// extends the list correctly even right after the last element was
    /// removed.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the list has no elements, [`Error::OutOfBounds`]
    /// if `index` is past the last element.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index == 0 {
            let head = self.head.ok_or(Error::Empty)?;
            // SAFETY: `head` was leaked from a `Box` in `push_back` and
            // nothing else points at it once we advance `self.head` past
            // it, so reclaiming it here frees it exactly once.
            let node = unsafe { Box::from_raw(head.as_ptr()) };
            self.head = node.next;
            if self.head.is_none() {
                self.tail = None;
            }
            return Ok(node.value);
        }

        // Walk to the node preceding the target.
        let mut prev = self.head.ok_or(Error::Empty)?;
        for _ in 1..index {
            // SAFETY: the walk stays on live nodes of the chain; we hold
            // `&mut self`, so nothing else touches them.
            prev = unsafe { prev.as_ref() }
                .next
                .ok_or(Error::OutOfBounds(index))?;
        }

        // SAFETY: `prev` is a live node and we hold the only access path
        // to the chain.
        let target = unsafe { prev.as_ref() }
            .next
            .ok_or(Error::OutOfBounds(index))?;
        // SAFETY: `target` was leaked from a `Box` in `push_back`; after
        // the relink below, no link points at it, so it is freed exactly
        // once when `node` drops.
        let node = unsafe { Box::from_raw(target.as_ptr()) };
        unsafe { prev.as_mut() }.next = node.next;
        if node.next.is_none() {
            // The target was the last node, so its predecessor is the new
            // tail. Leaving the alias pointing at the detached node would
            // dangle as soon as `node` drops.
            self.tail = Some(prev);
        }
        Ok(node.value)
    }

    /// Returns a forward iterator over the list.
    ///
    /// Traversal is pull-based: values are produced one at a time as the
    /// caller asks for them, and dropping the iterator early needs no
    /// cleanup. Each call starts a fresh walk from the head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            marker: PhantomData,
        }
    }
}

impl<T> Drop for List<T> {
    // Reclaim every node the pushes leaked, one at a time so dropping a
    // long list doesn't nest a stack frame per element.
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(ptr) = current {
            // SAFETY: each node was leaked from a `Box` in `push_back` and
            // is reclaimed exactly once as the walk passes it.
            let node = unsafe { Box::from_raw(ptr.as_ptr()) };
            current = node.next;
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A forward iterator over a [`List`]. Created by [`List::iter`].
pub struct Iter<'a, T> {
    next: Option<NonNull<Node<T>>>,
    marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        // SAFETY: the iterator borrows the list for `'a`, so every node of
        // the chain stays alive and unmutated for at least that long.
        let node = unsafe { current.as_ref() };
        self.next = node.next;
        Some(&node.value)
    }
}
