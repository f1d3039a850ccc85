//! `cd-collections` — the ordered containers every other `cd-*` crate is
//! built on.
//!
//! This crate has no `cd-*` dependencies and no external runtime ones.
//!
//! # What lives here
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`sequence`]  | `OrderedSequence<T>` — doubly linked, index-addressable   |
//! | [`stack`]     | `Stack<T>` — LIFO view (package inventory)                |
//! | [`queue`]     | `Queue<T>` — FIFO view (vehicle inventory)                |
//!
//! `Stack` and `Queue` each wrap one private `OrderedSequence`; they expose
//! only the operations their discipline allows.  Every operation on an empty
//! container returns `None` rather than failing.

pub mod queue;
pub mod sequence;
pub mod stack;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use queue::Queue;
pub use sequence::{Drain, IntoIter, Iter, OrderedSequence};
pub use stack::Stack;
