use crate::list::{Link, List, Node};
use std::ptr::NonNull;

/// A cursor over a `List`.
///
/// A `Cursor` is like an iterator, except that it keeps its position and can
/// be handed around as "a reference to this node of the list". It is the
/// result type of [`List::find`].
///
/// In a list with length *n*, there are *n* + 1 valid locations for the
/// cursor: one on each node, and one *end position* past the last node,
/// where [`current`] returns `None`.
///
/// # Examples
///
/// ```
/// use chain_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter(['A', 'B', 'C']);
///
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.current(), Some(&'B'));
///
/// assert!(cursor.move_next().is_ok());
/// assert!(cursor.move_next().is_ok());
///
/// // The cursor is now at the end position.
/// assert_eq!(cursor.current(), None);
/// assert!(cursor.move_next().is_err());
/// ```
///
/// [`current`]: Cursor::current
#[derive(Clone)]
pub struct Cursor<'a, T: 'a> {
    #[cfg(feature = "length")]
    index: usize,
    node: Option<&'a Node<T>>,
}

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            #[cfg(feature = "length")]
            index: 0,
            node: list.head.as_deref(),
        }
    }

    /// Return the index of the cursor. Enabled by `feature = "length"`.
    #[cfg(feature = "length")]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Provides a reference to the element at the cursor, or `None` if the
    /// cursor is at the end position.
    ///
    /// The reference borrows from the list, not from the cursor, so it may
    /// outlive the cursor itself.
    pub fn current(&self) -> Option<&'a T> {
        self.node.map(|node| &node.element)
    }

    /// Move the cursor to the next position, or return an error if it is
    /// already at the end position.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2]);
    /// let mut cursor = list.cursor_start();
    ///
    /// assert!(cursor.move_next().is_ok());
    /// assert_eq!(cursor.current(), Some(&2));
    ///
    /// assert!(cursor.move_next().is_ok());
    /// assert!(cursor.move_next().is_err());
    /// assert_eq!(cursor.current(), None);
    /// ```
    pub fn move_next(&mut self) -> Result<(), &'static str> {
        match self.node {
            Some(node) => {
                self.node = node.next.as_deref();
                #[cfg(feature = "length")]
                {
                    self.index += 1;
                }
                Ok(())
            }
            None => Err("`move_next` beyond the end of the list"),
        }
    }
}

/// A cursor over a `List` with editing operations.
///
/// A `CursorMut` can mutate the element it is parked on, splice a new node
/// in after it, or unlink it from the chain. It is the result type of
/// [`List::find_mut`]. Because it exclusively borrows the list, a
/// `CursorMut` can only ever point at a node of that list — there is no
/// "node from another list" case to defend against.
///
/// Internally the cursor tracks the *link that owns the current node* (the
/// list's `head`, or the `next` field of the predecessor), so unlinking the
/// current node needs no second traversal.
///
/// # Examples
///
/// ```
/// use chain_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 4]);
///
/// let mut cursor = list.cursor_start_mut();
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.insert_after(3), Ok(()));
///
/// assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
/// ```
pub struct CursorMut<'a, T: 'a> {
    #[cfg(feature = "length")]
    index: usize,
    /// Always points at the `head` link of the borrowed list or at the
    /// `next` link of one of its nodes.
    link: NonNull<Link<T>>,
    list: &'a mut List<T>,
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        let link = NonNull::from(&mut list.head);
        Self {
            #[cfg(feature = "length")]
            index: 0,
            link,
            list,
        }
    }

    /// The link owning the node at the cursor.
    ///
    /// SAFETY: `link` points into the chain of the exclusively borrowed
    /// list, and the returned reference is the only live access to it.
    fn link_mut(&mut self) -> &mut Link<T> {
        unsafe { &mut *self.link.as_ptr() }
    }

    fn link_ref(&self) -> &Link<T> {
        // SAFETY: see `link_mut`.
        unsafe { &*self.link.as_ptr() }
    }

    /// Return the index of the cursor. Enabled by `feature = "length"`.
    #[cfg(feature = "length")]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Provides a temporary immutable view of the underlying list.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2]);
    /// let mut cursor = list.cursor_start_mut();
    /// cursor.insert_after(3).ok();
    /// assert_eq!(cursor.view().to_vec(), vec![1, 3, 2]);
    /// ```
    pub fn view(&self) -> &List<T> {
        self.list
    }

    /// Provides a reference to the element at the cursor, or `None` if the
    /// cursor is at the end position.
    pub fn current(&self) -> Option<&T> {
        self.link_ref().as_deref().map(|node| &node.element)
    }

    /// Provides a mutable reference to the element at the cursor, or `None`
    /// if the cursor is at the end position.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.link_mut().as_deref_mut().map(|node| &mut node.element)
    }

    /// Move the cursor to the next position, or return an error if it is
    /// already at the end position.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn move_next(&mut self) -> Result<(), &'static str> {
        // SAFETY: see `link_mut`; the pointer taken from the node is a link
        // of the same chain.
        match unsafe { &mut *self.link.as_ptr() } {
            Some(node) => {
                self.link = NonNull::from(&mut node.next);
                #[cfg(feature = "length")]
                {
                    self.index += 1;
                }
                Ok(())
            }
            None => Err("`move_next` beyond the end of the list"),
        }
    }

    /// Splices a new element in directly after the node at the cursor.
    ///
    /// If the cursor is at the end position there is no node to insert
    /// after: the list is not mutated and the element is handed back as
    /// `Err`.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 3]);
    ///
    /// let mut cursor = list.cursor_start_mut();
    /// assert_eq!(cursor.insert_after(2), Ok(()));
    /// // The cursor stays on its node.
    /// assert_eq!(cursor.current(), Some(&1));
    ///
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn insert_after(&mut self, elt: T) -> Result<(), T> {
        // SAFETY: see `link_mut`.
        match unsafe { &mut *self.link.as_ptr() } {
            Some(node) => {
                let next = node.next.take();
                node.next = Some(Node::new(elt, next));
                #[cfg(feature = "length")]
                {
                    self.list.len += 1;
                }
                Ok(())
            }
            None => Err(elt),
        }
    }

    /// Unlinks the node at the cursor and returns its element, or `None` if
    /// the cursor is at the end position.
    ///
    /// The cursor ends up on the successor of the removed node (or at the
    /// end position), keeping its index.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// let mut cursor = list.cursor_start_mut();
    /// assert!(cursor.move_next().is_ok());
    ///
    /// assert_eq!(cursor.remove(), Some(2));
    /// assert_eq!(cursor.current(), Some(&3));
    ///
    /// assert_eq!(list.to_vec(), vec![1, 3]);
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        let link = self.link_mut();
        let mut node = link.take()?;
        *link = node.next.take();
        #[cfg(feature = "length")]
        {
            self.list.len -= 1;
        }
        Some(node.into_element())
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::iter::FromIterator;

    #[test]
    fn cursor_walk() {
        let list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_start();
        #[cfg(feature = "length")]
        assert_eq!(cursor.index(), 0);

        assert_eq!(cursor.current(), Some(&1));
        assert!(cursor.move_next().is_ok());
        assert_eq!(cursor.current(), Some(&2));
        assert!(cursor.move_next().is_ok());
        assert_eq!(cursor.current(), Some(&3));
        assert!(cursor.move_next().is_ok());
        #[cfg(feature = "length")]
        assert_eq!(cursor.index(), 3);

        assert_eq!(cursor.current(), None);
        assert!(cursor.move_next().is_err());
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn cursor_current_outlives_cursor() {
        let list = List::from_iter([1, 2, 3]);
        let element = {
            let cursor = list.cursor_start();
            cursor.current()
        };
        assert_eq!(element, Some(&1));
    }

    #[test]
    fn cursor_mut_edit() {
        let mut list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_start_mut();

        if let Some(elt) = cursor.current_mut() {
            *elt = 10;
        }
        assert!(cursor.move_next().is_ok());
        assert_eq!(cursor.current(), Some(&2));
        #[cfg(feature = "length")]
        assert_eq!(cursor.index(), 1);

        assert_eq!(list.to_vec(), vec![10, 2, 3]);
    }

    #[test]
    fn cursor_mut_insert_after() {
        let mut list = List::from_iter([1, 3]);
        let mut cursor = list.cursor_start_mut();

        assert_eq!(cursor.insert_after(2), Ok(()));
        assert_eq!(cursor.current(), Some(&1));

        // walk onto the freshly spliced node
        assert!(cursor.move_next().is_ok());
        assert_eq!(cursor.current(), Some(&2));

        // move to the end position: no target node there
        assert!(cursor.move_next().is_ok());
        assert!(cursor.move_next().is_ok());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.insert_after(4), Err(4));

        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        #[cfg(feature = "length")]
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn cursor_mut_remove() {
        let mut list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_start_mut();

        assert_eq!(cursor.remove(), Some(1));
        assert_eq!(cursor.current(), Some(&2));
        assert!(cursor.move_next().is_ok());
        assert_eq!(cursor.remove(), Some(3));
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.remove(), None);

        assert_eq!(list.to_vec(), vec![2]);
        #[cfg(feature = "length")]
        assert_eq!(list.len(), 1);
    }
}
