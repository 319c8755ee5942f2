//! This crate provides a doubly-linked sequence of integers with owned nodes,
//! and the classic algorithms over it: in-place reversal, stable merge sort
//! and cycle detection.
//!
//! The [`Sequence`] allows inserting and removing values at any 0-based
//! position. Positions never fail: [`insert_at`] clamps an out-of-range
//! position to the front or the back, and [`delete_at`] ignores one.
//!
//! Here is a quick example showing how the sequence works.
//!
//! ```
//! use linked_sequence::Sequence;
//!
//! let mut seq = Sequence::new();
//! seq.push_back(1);
//! seq.push_back(3);
//! seq.push_back(2);
//!
//! seq.insert_at(1, 10);
//! assert_eq!(seq.to_vec(), vec![1, 10, 3, 2]);
//!
//! seq.delete_at(0);
//! assert_eq!(seq.to_vec(), vec![10, 3, 2]);
//!
//! seq.sort();
//! assert_eq!(seq.to_vec(), vec![2, 3, 10]);
//!
//! seq.reverse();
//! assert_eq!(seq.to_vec(), vec![10, 3, 2]);
//! assert!(!seq.has_cycle());
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the sequence is like the following graph:
//! ```text
//!    ╔═══════════╗           ╔═══════════╗                        ╔═══════════╗
//!    ║   next    ║ ━━━━━━━━→ ║   next    ║ ━━━━━━━━→ ┄┄ ━━━━━━━━→ ║   next    ║ ──→ None
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ╟───────────╢
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── ║   prev    ║
//! │  ╟───────────╢           ╟───────────╢                        ╟───────────╢
//! │  ║ value i32 ║           ║ value i32 ║                        ║ value i32 ║
//! │  ╚═══════════╝           ╚═══════════╝                        ╚═══════════╝
//! ↓      Node 0 ↑                Node 1                              Node n - 1
//! None          │
//! ╔═══════════╗ │
//! ║   head    ║ ┘
//! ╚═══════════╝
//!   Sequence
//! ```
//! The `Sequence` contains only the pointer `head` to the first node, or `None`
//! if it is empty. There is no tail pointer and no length field.
//!
//! Each node is allocated on heap, and contains:
//! - the `next` pointer (thick arrows) that points to the next node, or `None`
//!   for the last node. It is the owning link: a node is released exactly once,
//!   either when it is deleted or when the whole chain is torn down;
//! - the `prev` pointer that points to the previous node, or `None` for the
//!   first node. It is only used to walk backwards and to splice;
//! - the value.
//!
//! # Iteration
//!
//! [`Iter`] walks the `next` links from the head, [`IterRev`] walks the `prev`
//! links from the last node, and [`IterMut`] hands out the values mutably
//! (but never the links).
//!
//! ## Examples
//!
//! ```
//! use linked_sequence::Sequence;
//!
//! let mut seq = Sequence::from([1, 2, 3]);
//! let mut iter = seq.iter();
//! assert_eq!(iter.next(), Some(1));
//! assert_eq!(iter.next(), Some(2));
//! assert_eq!(iter.next(), Some(3));
//! assert_eq!(iter.next(), None);
//!
//! seq.iter_mut().for_each(|value| *value *= 2);
//! assert_eq!(seq.iter_rev().collect::<Vec<_>>(), vec![6, 4, 2]);
//! ```
//!
//! # Algorithms
//!
//! - [`reverse`]: swaps the links of every node in one pass;
//! - [`sort`], [`sort_by`], [`sort_by_key`]: a stable merge sort that relinks
//!   the existing nodes;
//! - [`has_cycle`]: Floyd's tortoise-and-hare walk, a read-only check for
//!   corrupted links.
//!
//! # Allocation Failure
//!
//! The plain insertion methods abort the process when a node cannot be
//! allocated, like the standard collections do. The `try_*` variants return
//! [`AllocError`] instead and leave the sequence untouched.
//!
//! # Logging
//!
//! Mutations are reported as `tracing` events at `TRACE` level, and a detected
//! cycle at `WARN` level. The crate never installs a subscriber.
//!
//! [`Sequence`]: crate::Sequence
//! [`Iter`]: crate::Iter
//! [`IterRev`]: crate::IterRev
//! [`IterMut`]: crate::IterMut
//! [`AllocError`]: crate::AllocError
//! [`insert_at`]: crate::Sequence::insert_at
//! [`delete_at`]: crate::Sequence::delete_at
//! [`reverse`]: crate::Sequence::reverse
//! [`sort`]: crate::Sequence::sort
//! [`sort_by`]: crate::Sequence::sort_by
//! [`sort_by_key`]: crate::Sequence::sort_by_key
//! [`has_cycle`]: crate::Sequence::has_cycle

#[doc(inline)]
pub use error::AllocError;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut, IterRev};
#[doc(inline)]
pub use list::Sequence;

pub mod error;
pub mod list;
