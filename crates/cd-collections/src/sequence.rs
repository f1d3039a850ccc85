//! `OrderedSequence<T>` — a doubly linked list with index access.
//!
//! # Data layout
//!
//! Nodes live in a slot arena (`Vec<Option<Node<T>>>`) and refer to their
//! neighbours by slot index.  A node knows only its immediate `prev` and
//! `next`; it has no back-reference to the sequence.  Slots vacated by a
//! removal go on a free list and are reused by the next insertion, so a long
//! run of push/pop pairs does not grow the arena.
//!
//! ```text
//! head ─► [3] ⇄ [0] ⇄ [5] ◄─ tail        (numbers are slot indices)
//! ```
//!
//! # Invariants
//!
//! - `len` equals the number of nodes reachable from `head` via `next`.
//! - `head.is_none() == tail.is_none() == (len == 0)`.
//! - Every index stored in `head`, `tail`, `prev` or `next` names an
//!   occupied slot.
//!
//! Index lookups (`get`, `remove`) walk from whichever end is nearer, so
//! their cost is `O(min(i, len - 1 - i))`.

use std::fmt;
use std::iter::FusedIterator;

// ── Node ──────────────────────────────────────────────────────────────────────

#[derive(Clone)]
struct Node<T> {
    value: T,
    prev:  Option<usize>,
    next:  Option<usize>,
}

// ── OrderedSequence ───────────────────────────────────────────────────────────

/// A doubly linked sequence supporting O(1) insertion and removal at both
/// ends and nearest-end index access.
#[derive(Clone)]
pub struct OrderedSequence<T> {
    slots: Vec<Option<Node<T>>>,
    free:  Vec<usize>,
    head:  Option<usize>,
    tail:  Option<usize>,
    len:   usize,
}

impl<T> OrderedSequence<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free:  Vec::new(),
            head:  None,
            tail:  None,
            len:   0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // ── Insertion ─────────────────────────────────────────────────────────

    /// Insert `value` before the current first element.
    pub fn push_front(&mut self, value: T) {
        let old_head = self.head;
        let idx = self.alloc(Node { value, prev: None, next: old_head });
        match old_head {
            Some(h) => {
                if let Some(node) = self.node_mut(h) {
                    node.prev = Some(idx);
                }
            }
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
    }

    /// Insert `value` after the current last element.
    pub fn push_back(&mut self, value: T) {
        let old_tail = self.tail;
        let idx = self.alloc(Node { value, prev: old_tail, next: None });
        match old_tail {
            Some(t) => {
                if let Some(node) = self.node_mut(t) {
                    node.next = Some(idx);
                }
            }
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    // ── Removal ───────────────────────────────────────────────────────────

    /// Remove and return the first element, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        self.unlink(head)
    }

    /// Remove and return the last element, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        self.unlink(tail)
    }

    /// Remove and return the element at `index`.
    ///
    /// Returns `None` (and leaves the sequence untouched) when
    /// `index >= len`.  Surviving elements keep their relative order; those
    /// after `index` shift down by one.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let slot = self.locate(index)?;
        self.unlink(slot)
    }

    /// Drop every element.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Remove elements from the front as the returned iterator is advanced
    /// (or from the back via `next_back`).  Elements not consumed are
    /// dropped when the iterator is dropped.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { seq: self }
    }

    // ── Access ────────────────────────────────────────────────────────────

    /// Borrow the element at `index`, or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        let slot = self.locate(index)?;
        self.node(slot).map(|n| &n.value)
    }

    /// Mutably borrow the element at `index`, or `None` if out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let slot = self.locate(index)?;
        self.node_mut(slot).map(|n| &mut n.value)
    }

    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|h| self.node(h)).map(|n| &n.value)
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|t| self.node(t)).map(|n| &n.value)
    }

    /// Front-to-back traversal.  Each call starts a fresh walk from `head`.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            seq:       self,
            front:     self.head,
            back:      self.tail,
            remaining: self.len,
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn node(&self, slot: usize) -> Option<&Node<T>> {
        self.slots.get(slot)?.as_ref()
    }

    fn node_mut(&mut self, slot: usize) -> Option<&mut Node<T>> {
        self.slots.get_mut(slot)?.as_mut()
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                slot
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    /// Slot index of the element at logical position `index`, walking from
    /// the nearer end.
    fn locate(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        if index < self.len / 2 {
            let mut cur = self.head?;
            for _ in 0..index {
                cur = self.node(cur)?.next?;
            }
            Some(cur)
        } else {
            let mut cur = self.tail?;
            for _ in 0..(self.len - 1 - index) {
                cur = self.node(cur)?.prev?;
            }
            Some(cur)
        }
    }

    /// Detach the node in `slot`, splice its neighbours together, and
    /// return its value.
    fn unlink(&mut self, slot: usize) -> Option<T> {
        let node = self.slots.get_mut(slot)?.take()?;
        self.free.push(slot);

        match node.prev {
            Some(p) => self.node_mut(p)?.next = node.next,
            None    => self.head = node.next,
        }
        match node.next {
            Some(n) => self.node_mut(n)?.prev = node.prev,
            None    => self.tail = node.prev,
        }
        self.len -= 1;

        if self.len == 0 {
            // Last node gone: release the arena so slot indices restart at 0.
            self.slots.clear();
            self.free.clear();
        }
        Some(node.value)
    }
}

impl<T> Default for OrderedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for OrderedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for OrderedSequence<T> {}

impl<T> FromIterator<T> for OrderedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<T> Extend<T> for OrderedSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedSequence<T> {
    type Item     = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for OrderedSequence<T> {
    type Item     = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { seq: self }
    }
}

// ── Iterators ─────────────────────────────────────────────────────────────────

/// Borrowing front-to-back iterator returned by [`OrderedSequence::iter`].
pub struct Iter<'a, T> {
    seq:       &'a OrderedSequence<T>,
    front:     Option<usize>,
    back:      Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.seq.node(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.seq.node(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

/// Owning iterator returned by `OrderedSequence::into_iter`.
pub struct IntoIter<T> {
    seq: OrderedSequence<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.seq.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.seq.len, Some(self.seq.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.seq.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

/// Draining iterator returned by [`OrderedSequence::drain`].
pub struct Drain<'a, T> {
    seq: &'a mut OrderedSequence<T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.seq.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.seq.len, Some(self.seq.len))
    }
}

impl<T> DoubleEndedIterator for Drain<'_, T> {
    fn next_back(&mut self) -> Option<T> {
        self.seq.pop_back()
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}
impl<T> FusedIterator for Drain<'_, T> {}

impl<T> Drop for Drain<'_, T> {
    fn drop(&mut self) {
        self.seq.clear();
    }
}
