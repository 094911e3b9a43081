//! Chain algorithms of the list: reversal lives in the main module; this
//! module hosts the merge sort, the merge of sorted lists, and the
//! comparison-based trait implementations.
//!
//! All of the algorithms here relink the existing nodes. They never allocate
//! new nodes and never copy or clone elements.

use crate::list::{Link, List, Node};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ptr::NonNull;

impl<T> List<T> {
    /// Returns `true` if the list contains an element equal to the given
    /// value.
    ///
    /// # Complexity
    ///
    /// This operation should compute linearly in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([15, 5, 20]);
    /// assert!(list.contains(&5));
    /// assert!(!list.contains(&42));
    /// ```
    pub fn contains(&self, key: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|elt| elt == key)
    }

    /// Copies the elements of the list, front to back, into a new `Vec`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Consumes the list and moves its elements, front to back, into a new
    /// `Vec`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.into_vec(), vec![1, 2, 3]);
    /// ```
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Sorts the list.
    ///
    /// This sort is stable (i.e., does not reorder equal elements). It is a
    /// recursive merge sort over the chain: split at the midpoint with a
    /// slow/fast pointer walk, sort the halves, merge them back. Nodes are
    /// relinked, never reallocated, so elements are not moved in memory.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* log *n*) time and
    /// *O*(log *n*) memory for the recursion.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([5, 2, 4, 3, 1]);
    /// list.sort();
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(|a, b| a.cmp(b));
    }

    /// Sorts the list with a comparator function.
    ///
    /// The comparator function must define a total ordering for the elements
    /// in the list. The sort is stable.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([5, 2, 4, 3, 1]);
    /// list.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(list.to_vec(), vec![5, 4, 3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut less = |a: &T, b: &T| compare(a, b) == Ordering::Less;
        self.head = sort_chain(self.head.take(), &mut less);
    }

    /// Sorts the list with a key extraction function.
    ///
    /// The sort is stable.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(["hello", "to", "the", "world"]);
    /// list.sort_by_key(|s| s.len());
    /// assert_eq!(list.to_vec(), vec!["to", "the", "hello", "world"]);
    /// ```
    pub fn sort_by_key<K, F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        self.sort_by(|a, b| f(a).cmp(&f(b)));
    }

    /// Merges two sorted lists into one sorted list, consuming both.
    ///
    /// Both input lists must already be sorted; the merge walks them front
    /// to back and relinks their nodes, so an unsorted input yields some
    /// interleaving of the two chains rather than a sorted result. The merge
    /// is stable: equal elements keep their relative order, and ties go to
    /// the element from `self`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* + *m*) time and *O*(1)
    /// memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let a = List::from_iter([1, 4, 7]);
    /// let b = List::from_iter([2, 3, 6, 8]);
    ///
    /// let merged = List::merge(a, b);
    /// assert_eq!(merged.into_vec(), vec![1, 2, 3, 4, 6, 7, 8]);
    /// ```
    pub fn merge(self, other: Self) -> Self
    where
        T: Ord,
    {
        self.merge_by(other, |a, b| a.lt(b))
    }

    /// Merges two sorted lists into one, consuming both, with `less` as the
    /// strict order. Ties go to the element from `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let a = List::from_iter([7, 4, 1]);
    /// let b = List::from_iter([8, 6, 3, 2]);
    ///
    /// let merged = a.merge_by(b, |a, b| a > b);
    /// assert_eq!(merged.into_vec(), vec![8, 7, 6, 4, 3, 2, 1]);
    /// ```
    pub fn merge_by<F>(mut self, mut other: Self, mut less: F) -> Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        #[cfg(feature = "length")]
        let len = self.len + other.len;
        List {
            head: merge_chains(self.head.take(), other.head.take(), &mut less),
            #[cfg(feature = "length")]
            len,
        }
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        #[cfg(feature = "length")]
        if self.len != other.len {
            return false;
        }
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for List<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        #[cfg(feature = "length")]
        self.len().hash(state);
        #[cfg(not(feature = "length"))]
        self.iter().count().hash(state);
        for elt in self.iter() {
            elt.hash(state);
        }
    }
}

/// Sorts a detached chain by recursive merge sort and returns its new first
/// link.
fn sort_chain<T, F>(mut chain: Link<T>, less: &mut F) -> Link<T>
where
    F: FnMut(&T, &T) -> bool,
{
    // A chain of zero or one node is already sorted.
    let right = match chain.as_deref_mut() {
        Some(first) if first.next.is_some() => split_chain(first),
        _ => return chain,
    };
    let left = sort_chain(chain, less);
    let right = sort_chain(right, less);
    merge_chains(left, right, less)
}

/// Cuts a chain of at least two nodes after its midpoint and returns the
/// detached right half. The left half keeps the extra node when the chain
/// has odd length.
///
/// The midpoint is located with a slow/fast pointer walk: `fast` advances
/// two links for each link `slow` advances, so `slow` halts on the last
/// node of the left half.
fn split_chain<T>(first: &mut Node<T>) -> Link<T> {
    let mut slow = NonNull::from(first);
    // SAFETY: `slow` and `fast` only ever point at nodes of the exclusively
    // borrowed chain, and `slow` is the only pointer dereferenced mutably,
    // once, after the walk has finished.
    unsafe {
        let mut fast = next_of(slow);
        while let Some(ahead) = fast.and_then(|node| next_of(node)) {
            fast = next_of(ahead);
            if let Some(next) = next_of(slow) {
                slow = next;
            }
        }
        slow.as_mut().next.take()
    }
}

/// The successor of a node, as a pointer.
///
/// SAFETY: `node` must point at a live node.
unsafe fn next_of<T>(node: NonNull<Node<T>>) -> Option<NonNull<Node<T>>> {
    node.as_ref().next.as_deref().map(NonNull::from)
}

/// Merges two sorted chains into one by relinking, with `less` as the
/// strict order. Ties go to the node from chain `a`, which keeps the merge
/// stable when `a` is the earlier half.
fn merge_chains<T, F>(mut a: Link<T>, mut b: Link<T>, less: &mut F) -> Link<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut merged: Link<T> = None;
    let mut tail = &mut merged;
    loop {
        match (a, b) {
            (Some(mut x), Some(y)) if !less(&y.element, &x.element) => {
                a = x.next.take();
                b = Some(y);
                *tail = Some(x);
            }
            (rest, Some(mut y)) => {
                b = y.next.take();
                a = rest;
                *tail = Some(y);
            }
            // One chain is exhausted; the other is sorted, link it whole.
            (rest, None) => {
                *tail = rest;
                break;
            }
        }
        if let Some(node) = tail {
            tail = &mut node.next;
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::iter::FromIterator;

    #[test]
    fn sort_basics() {
        let mut list = List::<i32>::new();
        list.sort();
        assert!(list.is_empty());

        let mut list = List::from_iter([1]);
        list.sort();
        assert_eq!(list.to_vec(), vec![1]);

        let mut list = List::from_iter([5, 2, 4, 3, 1]);
        list.sort();
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);
        #[cfg(feature = "length")]
        assert_eq!(list.len(), 5);

        // already sorted, reverse sorted, duplicates
        let mut list = List::from_iter([1, 2, 3, 4]);
        list.sort();
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);

        let mut list = List::from_iter([4, 3, 2, 1]);
        list.sort();
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);

        let mut list = List::from_iter([2, 1, 2, 1, 2]);
        list.sort();
        assert_eq!(list.to_vec(), vec![1, 1, 2, 2, 2]);
    }

    #[test]
    fn sort_matches_vec_sort() {
        use rand::prelude::*;
        use rand_chacha::ChaCha20Rng;

        let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);
        for len in [0, 1, 2, 3, 10, 100, 1000] {
            let mut expected: Vec<u32> = (&mut rng)
                .sample_iter(rand::distributions::Uniform::new(0, 50))
                .take(len)
                .collect();
            let mut list = List::from_iter(expected.iter().copied());
            expected.sort();
            list.sort();
            assert_eq!(list.into_vec(), expected);
        }
    }

    #[test]
    fn sort_is_stable() {
        // sort by key only; the payload records the original order
        let mut list = List::from_iter([(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (2, 'e')]);
        list.sort_by_key(|&(key, _)| key);
        assert_eq!(
            list.to_vec(),
            vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c'), (2, 'e')]
        );
    }

    #[test]
    fn sort_by_comparator() {
        let mut list = List::from_iter([3, 1, 2]);
        list.sort_by(|a, b| b.cmp(a));
        assert_eq!(list.to_vec(), vec![3, 2, 1]);
    }

    #[test]
    fn merge_two_sorted_lists() {
        let a = List::from_iter([1, 4, 7]);
        let b = List::from_iter([2, 3, 6, 8]);
        let merged = List::merge(a, b);
        assert_eq!(merged.to_vec(), vec![1, 2, 3, 4, 6, 7, 8]);
        #[cfg(feature = "length")]
        assert_eq!(merged.len(), 7);
    }

    #[test]
    fn merge_with_empty() {
        let a = List::from_iter([1, 2, 3]);
        let empty = List::new();
        assert_eq!(List::merge(a, empty).to_vec(), vec![1, 2, 3]);

        let empty = List::new();
        let b = List::from_iter([1, 2, 3]);
        assert_eq!(List::merge(empty, b).to_vec(), vec![1, 2, 3]);

        let merged = List::<i32>::merge(List::new(), List::new());
        assert!(merged.is_empty());
    }

    #[test]
    fn merge_is_stable() {
        // ties must come from the first list first
        let a = List::from_iter([(1, 'a'), (2, 'a'), (2, 'a')]);
        let b = List::from_iter([(1, 'b'), (2, 'b'), (3, 'b')]);
        let merged = a.merge_by(b, |x, y| x.0 < y.0);
        assert_eq!(
            merged.into_vec(),
            vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'a'), (2, 'b'), (3, 'b')]
        );
    }

    #[test]
    fn list_comparisons() {
        let a = List::from_iter([1, 2, 3]);
        let b = a.clone();
        assert_eq!(a, b);
        assert!(a <= b);

        let c = List::from_iter([1, 2, 4]);
        assert_ne!(a, c);
        assert!(a < c);

        let shorter = List::from_iter([1, 2]);
        assert_ne!(a, shorter);
        assert!(shorter < a);
    }
}
