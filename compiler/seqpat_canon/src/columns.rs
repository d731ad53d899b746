//! Persistent column lists for the usefulness matrix.
//!
//! Specializing a row replaces its head column with the constructor's
//! fields and keeps every other column. Sharing the tail makes that
//! `O(arity)` instead of `O(width)`, so wide list patterns stay linear.

use std::rc::Rc;

/// One entry per column, head first.
pub(crate) struct Columns<T>(Option<Rc<Node<T>>>);

struct Node<T> {
    head: T,
    tail: Columns<T>,
}

impl<T> Columns<T> {
    pub(crate) const fn empty() -> Self {
        Columns(None)
    }

    pub(crate) fn first(&self) -> Option<&T> {
        self.0.as_deref().map(|node| &node.head)
    }

    /// Every column after the first; empty when there are none.
    pub(crate) fn tail(&self) -> Self {
        self.0
            .as_deref()
            .map_or_else(Columns::empty, |node| node.tail.clone())
    }

    /// `items`, in order, followed by these columns.
    pub(crate) fn prepend(&self, items: impl DoubleEndedIterator<Item = T>) -> Self {
        items.rev().fold(self.clone(), |tail, head| {
            Columns(Some(Rc::new(Node { head, tail })))
        })
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::successors(self.0.as_deref(), |node| node.tail.0.as_deref())
            .map(|node| &node.head)
    }

    pub(crate) fn len(&self) -> usize {
        self.iter().count()
    }
}

impl<T> Clone for Columns<T> {
    fn clone(&self) -> Self {
        Columns(self.0.clone())
    }
}

// Unlink iteratively: a wide row is a long chain of nodes.
impl<T> Drop for Columns<T> {
    fn drop(&mut self) {
        let mut next = self.0.take();
        while let Some(node) = next {
            next = match Rc::try_unwrap(node) {
                Ok(mut node) => node.tail.0.take(),
                Err(_) => None,
            };
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Columns<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
