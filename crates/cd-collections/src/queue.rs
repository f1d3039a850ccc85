//! `Queue<T>` — first-in, first-out view over an [`OrderedSequence`].

use std::fmt;

use crate::sequence::{Iter, OrderedSequence};

/// A FIFO queue.  Elements enter at the back and leave from the front.
#[derive(Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: OrderedSequence<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self { items: OrderedSequence::new() }
    }

    /// Append `value` at the back.
    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Remove and return the front element, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Borrow the front element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.get(0)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Elements in dequeue order.  Does not modify the queue.
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue").field("front_first", &self.items).finish()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item     = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
