use crate::list::{List, Node};
use std::fmt;
use std::iter::{FromIterator, FusedIterator};

/// An iterator over the elements of a `List`.
///
/// It walks the chain through shared references, starting at the head.
///
/// # Examples
///
/// ```compile_fail
/// use chain_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.push_front(4);
/// println!("{:?}", iter.next());
/// ```
#[derive(Clone)]
pub struct Iter<'a, T: 'a> {
    node: Option<&'a Node<T>>,
    #[cfg(feature = "length")]
    len: usize,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            node: list.head.as_deref(),
            #[cfg(feature = "length")]
            len: list.len(),
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("Iter");
        let mut node = self.node;
        while let Some(current) = node {
            f.field(&current.element);
            node = current.next.as_deref();
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Return the current element and advance to its successor, or return
    /// `None` at the end of the chain.
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.node?;
        self.node = current.next.as_deref();
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(&current.element)
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

#[cfg(feature = "length")]
impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of a `List`.
///
/// It yields mutable references to the elements, but never to the linked
/// structure itself.
///
/// # Examples
///
/// `List` is not readable after an `IterMut` is created.
/// ```compile_fail
/// use chain_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut iter = list.iter_mut();
/// println!("{:?}", list.front());
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    node: Option<&'a mut Node<T>>,
    #[cfg(feature = "length")]
    len: usize,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        Self {
            #[cfg(feature = "length")]
            len: list.len(),
            node: list.head.as_deref_mut(),
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("IterMut");
        let mut node = self.node.as_deref();
        while let Some(current) = node {
            f.field(&current.element);
            node = current.next.as_deref();
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    /// Return the current element and advance to its successor, or return
    /// `None` at the end of the chain.
    fn next(&mut self) -> Option<Self::Item> {
        self.node.take().map(|current| {
            self.node = current.next.as_deref_mut();
            #[cfg(feature = "length")]
            {
                self.len -= 1;
            }
            &mut current.element
        })
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

#[cfg(feature = "length")]
impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

/// An owning iterator over the elements of a `List`.
///
/// This `struct` is created by the [`into_iter`] method on [`List`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// [`into_iter`]: List::into_iter
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("list", &self.list)
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len;
        (len, Some(len))
    }
}

#[cfg(feature = "length")]
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    /// Appends the elements to the back of the list with a single walk to
    /// the tail, so extending by *m* elements costs *O*(*n* + *m*) rather
    /// than *m* repeated tail walks.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        #[cfg(feature = "length")]
        let mut appended = 0;
        let mut tail = self.tail_link();
        for element in iter {
            tail = &mut tail.insert(Node::new(element, None)).next;
            #[cfg(feature = "length")]
            {
                appended += 1;
            }
        }
        #[cfg(feature = "length")]
        {
            self.len += appended;
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::iter::FromIterator;

    #[test]
    fn test_iter() {
        let list = List::from_iter(0..10);
        let mut iter = list.iter();
        for i in 0..10 {
            #[cfg(feature = "length")]
            assert_eq!(iter.len(), 10 - i);
            assert_eq!(iter.next(), Some(&i));
        }
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        #[cfg(feature = "length")]
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn test_iter_mut() {
        let mut list = List::from_iter(0..5);
        for element in list.iter_mut() {
            *element *= 10;
        }
        assert_eq!(list.to_vec(), vec![0, 10, 20, 30, 40]);

        let mut iter = list.iter_mut();
        #[cfg(feature = "length")]
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(&mut 0));
        #[cfg(feature = "length")]
        assert_eq!(iter.len(), 4);
    }

    #[test]
    fn test_into_iter() {
        let list = List::from_iter(0..5);
        let mut iter = list.into_iter();
        #[cfg(feature = "length")]
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(0));
        assert_eq!(Vec::from_iter(iter), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_from_iter_and_extend() {
        let mut list = List::from_iter(0..3);
        assert_eq!(list.to_vec(), vec![0, 1, 2]);

        list.extend(3..6);
        assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 4, 5]);
        #[cfg(feature = "length")]
        assert_eq!(list.len(), 6);

        // extending from references of `Copy` elements
        list.extend(&[6, 7]);
        assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 4, 5, 6, 7]);

        let empty: List<i32> = List::from_iter(None);
        assert!(empty.is_empty());
    }
}
