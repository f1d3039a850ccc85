//! `Stack<T>` — last-in, first-out view over an [`OrderedSequence`].

use std::fmt;

use crate::sequence::{Iter, OrderedSequence};

/// A LIFO stack.  The top of the stack is the front of the inner sequence.
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: OrderedSequence<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: OrderedSequence::new() }
    }

    /// Place `value` on top.
    pub fn push(&mut self, value: T) {
        self.items.push_front(value);
    }

    /// Remove and return the top element, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Borrow the top element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.get(0)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Elements in pop order (top first).  Does not modify the stack.
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack").field("top_first", &self.items).finish()
    }
}

/// Pushes in iteration order, so the last item yielded ends up on top.
impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item     = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
