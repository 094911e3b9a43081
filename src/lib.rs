//! This crate provides a singly-linked list with owned nodes, implemented as
//! an owned chain.
//!
//! The [`List`] allows inserting and removing elements at the front in
//! constant time. Reaching any other position takes *O*(*n*) time, and the
//! list supports the classic chain algorithms — reversal, stable merge sort
//! and merging two sorted lists — as pure relinking, without copying nodes.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use chain_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([15, 10, 5, 20, 25]);
//!
//! assert_eq!(list.remove_first(&10), Some(10)); // delete by key
//! assert!(list.contains(&15)); // search
//!
//! list.reverse();
//! assert_eq!(list.to_vec(), vec![25, 20, 5, 15]);
//!
//! list.sort();
//! assert_eq!(list.to_vec(), vec![5, 15, 20, 25]);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//! ╔═══════════╗      ╔═══════════╗      ╔═══════════╗           ╔═══════════╗
//! ║   head    ║ ───→ ║   next    ║ ───→ ║   next    ║ ─┄┄ ────→ ║   next    ║ ───→ ∅
//! ╟───────────╢      ╟───────────╢      ╟───────────╢           ╟───────────╢
//! ║   (len)   ║      ║ payload T ║      ║ payload T ║           ║ payload T ║
//! ╚═══════════╝      ╚═══════════╝      ╚═══════════╝           ╚═══════════╝
//!     List               Node 0             Node 1                Node n - 1
//! ```
//! The `List` contains:
//! - a link `head` that owns the first node, or nothing if the list is empty;
//! - a length field `len` indicating the length of the list. It can be
//!   disabled by disabling the `length` feature in your `Cargo.toml`:
//! ```text
//! [dependencies]
//! chain_list = { default-features = false }
//! ```
//!
//! Each node of the list `List<T>` is allocated on the heap and contains:
//! - the `next` link that exclusively owns the following node (or nothing if
//!   it is the last element in the list);
//! - the actual payload `T`.
//!
//! Every node has exactly one owner — either the list's `head` link or the
//! `next` link of its predecessor — so the chain is acyclic and finite by
//! construction, and dropping the list releases the whole chain.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These
//! are forward iterators and iterate the list like an array (fused,
//! front-to-back). [`IterMut`] provides mutability of the elements (but not
//! the linked structure of the list).
//!
//! ## Examples
//!
//! ```
//! use chain_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! The cursors [`Cursor`] and [`CursorMut`] stand for "a reference to a node
//! of this list". They move forward over the chain, and [`CursorMut`] can
//! splice in a new node after the current one or unlink the current node.
//! [`List::find`] and [`List::find_mut`] return a cursor parked on the first
//! matching node, so search-then-edit runs without rescanning.
//!
//! ## Examples
//!
//! ```
//! use chain_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 4]);
//!
//! let mut cursor = list.find_mut(&2).unwrap();
//! assert_eq!(cursor.current(), Some(&2));
//!
//! // Splice a new node after the found one.
//! assert_eq!(cursor.insert_after(3), Ok(()));
//! assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
//!
//! // A cursor past the last node has no target to insert after;
//! // the element is handed back instead.
//! let mut cursor = list.cursor_start_mut();
//! while cursor.current().is_some() {
//!     cursor.move_next().ok();
//! }
//! assert_eq!(cursor.insert_after(5), Err(5));
//! ```
//!
//! # Algorithms
//!
//! [`List::reverse`] relinks the chain in place in one pass. [`List::sort`]
//! (with the [`sort_by`] and [`sort_by_key`] variants) is a recursive merge
//! sort over the chain: split at the midpoint with a slow/fast pointer walk,
//! sort the halves, merge. [`List::merge`] consumes two individually sorted
//! lists and relinks them into one sorted list. All of them move nodes
//! instead of copying elements, and both the sort and the merge are stable.
//!
//! ## Examples
//!
//! ```
//! use chain_list::List;
//! use std::iter::FromIterator;
//!
//! let a = List::from_iter([1, 4, 7]);
//! let b = List::from_iter([2, 3, 6, 8]);
//! assert_eq!(a.merge(b).into_vec(), vec![1, 2, 3, 4, 6, 7, 8]);
//! ```
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`sort_by`]: crate::List::sort_by
//! [`sort_by_key`]: crate::List::sort_by_key

#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod list;

mod experiments;
