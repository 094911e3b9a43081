//! An experimental arena-backed rendition of the chain.
//!
//! Instead of giving every node its own heap allocation, the nodes live in a
//! [`bumpalo::Bump`] arena and hold shared references into it, with interior
//! mutability for the links. The whole chain is freed at once when the arena
//! is dropped, so there is no per-node `Drop` and no recursion hazard.
//!
//! Not exported for now. The owned chain in [`crate::list`] remains the
//! supported implementation.

#![allow(dead_code)]

use bumpalo::Bump;
use std::cell::Cell;

struct Node<'bump, T> {
    next: Cell<Option<&'bump Node<'bump, T>>>,
    element: T,
}

pub(crate) struct List<'bump, T> {
    head: Cell<Option<&'bump Node<'bump, T>>>,
    bump: &'bump Bump,
}

impl<'bump, T> List<'bump, T> {
    pub(crate) fn new(bump: &'bump Bump) -> Self {
        Self {
            head: Cell::new(None),
            bump,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.head.get().is_none()
    }

    /// Allocates the node in the arena and links it in front of the chain.
    /// Takes `&self`: the links are cells, so no exclusive borrow is needed.
    pub(crate) fn push_front(&self, element: T) {
        let node = self.bump.alloc(Node {
            next: Cell::new(self.head.get()),
            element,
        });
        self.head.set(Some(node));
    }

    /// Reverses the chain in place by retargeting the link cells.
    pub(crate) fn reverse(&self) {
        let mut reversed = None;
        let mut current = self.head.get();
        while let Some(node) = current {
            current = node.next.get();
            node.next.set(reversed);
            reversed = Some(node);
        }
        self.head.set(reversed);
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &'bump T> {
        let mut node = self.head.get();
        std::iter::from_fn(move || {
            let current = node?;
            node = current.next.get();
            Some(&current.element)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::List;
    use bumpalo::Bump;

    #[test]
    fn arena_list() {
        let bump = Bump::new();
        let list = List::new(&bump);
        assert!(list.is_empty());

        list.push_front(3);
        list.push_front(2);
        list.push_front(1);
        assert!(!list.is_empty());
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);

        list.reverse();
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    }
}
