use std::fmt::{Debug, Formatter};

use crate::list::cursor::{Cursor, CursorMut};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// The `List` is a singly-linked list with owned nodes, implemented as an
/// owned chain. It allows inserting and removing elements at the front in
/// constant time. Accessing or mutating elements at any other position takes
/// *O*(*n*) time.
///
/// The `List` contains:
/// - a link `head` that owns the first node, or nothing if the list is empty;
/// - a length field `len` indicating the length of the list. It can be
///   disabled by disabling the `length` feature in your `Cargo.toml`:
/// ```text
/// [dependencies]
/// chain_list = { default-features = false }
/// ```
///
/// # Naming Conventions
///
/// - `link`: an owning slot for a node — either `head` or the `next` field of
///   a node; following links from `head` always reaches the terminal `None`
///   in finitely many steps.
/// - `chain`: the sequence of nodes reachable from some link.
pub struct List<T> {
    pub(crate) head: Link<T>,
    #[cfg(feature = "length")]
    /// the length of the list
    pub(crate) len: usize,
}

/// An owning link to a node: exactly one `Link` owns any given node, so the
/// chain can never alias or form a cycle.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) next: Link<T>,
    pub(crate) element: T,
}

// private methods
impl<T> List<T> {
    /// Walk to the terminal link of the chain (the `next` of the last node,
    /// or `head` itself when the list is empty).
    pub(crate) fn tail_link(&mut self) -> &mut Link<T> {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        link
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use chain_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            #[cfg(feature = "length")]
            len: 0,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the length of the `List`. Enabled by `feature = "length"`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[cfg(feature = "length")]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// #[cfg(feature = "length")]
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.front(), Some(&1));
    ///
    /// list.clear();
    /// #[cfg(feature = "length")]
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.element)
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    ///
    /// if let Some(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Some(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.element)
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time — the chain has no
    /// back link.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front().unwrap(), &2);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front().unwrap(), &1);
    /// ```
    pub fn push_front(&mut self, elt: T) {
        self.head = Some(Node::new(elt, self.head.take()));
        #[cfg(feature = "length")]
        {
            self.len += 1;
        }
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|mut node| {
            self.head = node.next.take();
            #[cfg(feature = "length")]
            {
                self.len -= 1;
            }
            node.into_element()
        })
    }

    /// Appends an element to the back of a list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time — it walks to the last
    /// node and attaches there.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back().unwrap(), &3);
    /// ```
    pub fn push_back(&mut self, elt: T) {
        *self.tail_link() = Some(Node::new(elt, None));
        #[cfg(feature = "length")]
        {
            self.len += 1;
        }
    }

    /// Splices a new element after the first node whose element equals `key`.
    ///
    /// If no node matches, the list is not mutated and the element is handed
    /// back as `Err`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 4]);
    ///
    /// assert_eq!(list.insert_after(&2, 3), Ok(()));
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
    ///
    /// assert_eq!(list.insert_after(&99, 7), Err(7));
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
    /// ```
    pub fn insert_after(&mut self, key: &T, elt: T) -> Result<(), T>
    where
        T: PartialEq,
    {
        match self.find_mut(key) {
            Some(mut cursor) => cursor.insert_after(elt),
            None => Err(elt),
        }
    }

    /// Removes the first node whose element equals `key` and returns its
    /// element, relinking the predecessor to the successor.
    ///
    /// If no node matches, the list is unchanged and `None` is returned —
    /// a missing key is not an error.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([15, 10, 5, 10]);
    ///
    /// assert_eq!(list.remove_first(&10), Some(10));
    /// assert_eq!(list.to_vec(), vec![15, 5, 10]);
    ///
    /// assert_eq!(list.remove_first(&42), None);
    /// assert_eq!(list.to_vec(), vec![15, 5, 10]);
    /// ```
    pub fn remove_first(&mut self, key: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let mut cursor = self.cursor_start_mut();
        loop {
            let matched = match cursor.current() {
                Some(elt) => *elt == *key,
                None => return None,
            };
            if matched {
                return cursor.remove();
            }
            cursor.move_next().ok();
        }
    }

    /// Reverses the list in place, in one pass over the chain.
    ///
    /// Each node is relinked to its former predecessor; no nodes are
    /// allocated or copied.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// list.reverse();
    /// assert_eq!(list.to_vec(), vec![3, 2, 1]);
    ///
    /// list.reverse();
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn reverse(&mut self) {
        let mut reversed = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
    }

    /// Provides a cursor at the first node, or at the end position if the
    /// list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_start();
    /// assert_eq!(cursor.current(), Some(&1));
    /// ```
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    /// Provides a cursor with editing operations at the first node, or at
    /// the end position if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&5));
    /// ```
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self)
    }

    /// Performs a linear scan from the head and returns a cursor parked on
    /// the first node whose element equals `key`, or `None` if no node
    /// matches.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([15, 5, 20]);
    ///
    /// let cursor = list.find(&5).unwrap();
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// assert!(list.find(&42).is_none());
    /// ```
    pub fn find(&self, key: &T) -> Option<Cursor<'_, T>>
    where
        T: PartialEq,
    {
        let mut cursor = self.cursor_start();
        loop {
            let matched = match cursor.current() {
                Some(elt) => *elt == *key,
                None => return None,
            };
            if matched {
                return Some(cursor);
            }
            cursor.move_next().ok();
        }
    }

    /// Like [`List::find`], but the returned cursor can edit the list at the
    /// found node.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([15, 5, 20]);
    ///
    /// let mut cursor = list.find_mut(&5).unwrap();
    /// assert_eq!(cursor.remove(), Some(5));
    /// assert_eq!(list.to_vec(), vec![15, 20]);
    /// ```
    pub fn find_mut(&mut self, key: &T) -> Option<CursorMut<'_, T>>
    where
        T: PartialEq,
    {
        let mut cursor = self.cursor_start_mut();
        loop {
            let matched = match cursor.current() {
                Some(elt) => *elt == *key,
                None => return None,
            };
            if matched {
                return Some(cursor);
            }
            cursor.move_next().ok();
        }
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&10));
    /// assert_eq!(iter.next(), Some(&11));
    /// assert_eq!(iter.next(), Some(&12));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    pub(crate) fn new(element: T, next: Link<T>) -> Box<Self> {
        Box::new(Node { next, element })
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

impl<T> Drop for List<T> {
    /// Pops the nodes one by one so that dropping a long list cannot
    /// recurse through the chain of boxes.
    fn drop(&mut self) {
        self.clear();
    }
}

// Ensure that `List` and its read-only iterators are covariant in their type
// parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}
