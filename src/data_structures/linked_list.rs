use std::fmt;
use std::hash::{Hash, Hasher};
use std::io;
use std::iter::FusedIterator;
use std::mem;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cursor::{Cursor, CursorMut};
use crate::{Error, Result};

/// An owning link to the rest of a chain
pub(super) type Link<T> = Option<Box<Node<T>>>;

/// A single storage cell of a [`LinkedList`]
///
/// Each node exclusively owns the remainder of the chain through `next`.
/// Nodes never outlive the list that owns them and are not exposed publicly.
#[derive(Debug)]
pub(super) struct Node<T> {
    /// The element stored in this cell
    pub(super) data: T,

    /// The next cell, or `None` at the tail
    pub(super) next: Link<T>,
}

impl<T> Node<T> {
    fn boxed(data: T) -> Box<Self> {
        Box::new(Node { data, next: None })
    }
}

/// Walks `index` links forward, stopping early at the end of the chain
fn nth_link<T>(mut link: &mut Link<T>, index: usize) -> &mut Link<T> {
    for _ in 0..index {
        match link {
            Some(node) => link = &mut node.next,
            None => break,
        }
    }
    link
}

/// Returns the empty link just past the last node
fn tail_link<T>(mut link: &mut Link<T>) -> &mut Link<T> {
    while let Some(node) = link {
        link = &mut node.next;
    }
    link
}

/// A generic singly linked list with a cached length
///
/// The list owns its head node, which owns the next node, and so on. The
/// cached `size` always equals the number of nodes reachable from `head`.
///
/// Positions are `usize`. A caller that converts a negative signed number
/// with `as usize` gets a very large position, which every index-based
/// operation reports as [`Error::IndexOutOfRange`]. There is no separate
/// "negative index" error.
///
/// All chain walks are loops, so neither the operations nor dropping a list
/// recurse once per node.
///
/// The list is single-threaded and non-reentrant in the ordinary Rust sense:
/// iterators and cursors borrow it, so a structural mutation (insert, remove,
/// clear, reverse) cannot happen while one of them is alive.
pub struct LinkedList<T> {
    /// First node of the chain, `None` if and only if `size == 0`
    head: Link<T>,

    /// Number of nodes in the chain
    size: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new empty list
    pub fn new() -> Self {
        LinkedList { head: None, size: 0 }
    }

    /// Creates a list holding exactly one value
    pub fn singleton(value: T) -> Self {
        LinkedList {
            head: Some(Node::boxed(value)),
            size: 1,
        }
    }

    /// Returns the number of elements in the list
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns the number of elements in the list
    pub fn size(&self) -> usize {
        self.size
    }

    /// An alias for [`LinkedList::size`]
    pub fn length(&self) -> usize {
        self.size()
    }

    /// Checks if the list is empty
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns a reference to the first element
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.data)
    }

    /// Returns a mutable reference to the first element
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.data)
    }

    /// Adds a value at the front of the list in O(1)
    pub fn push_front(&mut self, value: T) {
        let mut node = Node::boxed(value);
        node.next = self.head.take();
        self.head = Some(node);
        self.size += 1;
    }

    /// Removes and returns the first element in O(1)
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|mut node| {
            self.head = node.next.take();
            self.size -= 1;
            node.data
        })
    }

    /// Adds a value to the end of the list
    ///
    /// The list keeps no tail pointer, so this walks the whole chain: O(n).
    pub fn append(&mut self, value: T) {
        *tail_link(&mut self.head) = Some(Node::boxed(value));
        self.size += 1;
    }

    /// Appends a copy of every element of `other`, preserving order
    pub fn extend_from_list(&mut self, other: &LinkedList<T>)
    where
        T: Clone,
    {
        self.extend(other.iter().cloned());
    }

    /// Appends a copy of every element of `values`, preserving order
    pub fn extend_from_slice(&mut self, values: &[T])
    where
        T: Clone,
    {
        self.extend(values.iter().cloned());
    }

    /// Inserts `value` so that afterwards `self[index] == value`
    ///
    /// Legal positions are `0..=len`; `index == len` appends. Any larger
    /// index fails with [`Error::IndexOutOfRange`] and leaves the list as it
    /// was. Index 0 is legal on an empty list.
    pub fn insert(&mut self, value: T, index: usize) -> Result<()> {
        self.check_insert_index(index)?;

        let link = nth_link(&mut self.head, index);
        let mut node = Node::boxed(value);
        node.next = link.take();
        *link = Some(node);
        self.size += 1;
        Ok(())
    }

    /// Inserts every value of `values`, in order, starting at `index`
    ///
    /// Follows the same position rule as [`LinkedList::insert`]. The first
    /// inserted value ends up at `index`, the last one right before the
    /// element that used to be there.
    pub fn insert_multiple<I>(&mut self, values: I, index: usize) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        self.check_insert_index(index)?;

        let mut link = nth_link(&mut self.head, index);
        let tail = link.take();
        for value in values {
            link = &mut link.insert(Node::boxed(value)).next;
            self.size += 1;
        }
        *link = tail;
        Ok(())
    }

    /// Removes and returns the element at `index`
    ///
    /// Fails with [`Error::IndexOutOfRange`] when `index >= len`, which
    /// includes every index on an empty list.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.size {
            return Err(self.out_of_range(index));
        }

        let link = nth_link(&mut self.head, index);
        match link.take() {
            Some(mut node) => {
                *link = node.next.take();
                self.size -= 1;
                Ok(node.data)
            }
            None => Err(Error::IndexOutOfRange { index, len: self.size }),
        }
    }

    /// Removes every element between `index1` and `index2`, both inclusive
    ///
    /// The bounds may be given in either order. A range reaching past the
    /// end is tolerated: only the elements that exist are removed. The
    /// starting position itself must name an existing element, otherwise
    /// (including on an empty list) this fails with
    /// [`Error::IndexOutOfRange`] and nothing is removed.
    ///
    /// Returns the number of elements removed.
    pub fn remove_range(&mut self, index1: usize, index2: usize) -> Result<usize> {
        let (first, last) = (index1.min(index2), index1.max(index2));
        if first >= self.size {
            return Err(self.out_of_range(first));
        }

        let count = last.min(self.size - 1) - first + 1;
        let link = nth_link(&mut self.head, first);
        let mut removed = 0;
        while removed < count {
            match link.take() {
                Some(mut node) => *link = node.next.take(),
                None => break,
            }
            removed += 1;
        }
        self.size -= removed;
        Ok(removed)
    }

    /// Drops every node. Calling this on an empty list does nothing.
    pub fn clear(&mut self) {
        // Unlink one node at a time so dropping a long chain never recurses
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.size = 0;
    }

    /// Reverses the order of the nodes in place by relinking them
    pub fn reverse(&mut self) {
        let mut reversed: Link<T> = None;
        let mut remaining = self.head.take();
        while let Some(mut node) = remaining {
            remaining = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
    }

    /// Exchanges the contents of two lists in O(1)
    pub fn swap(&mut self, other: &mut LinkedList<T>) {
        mem::swap(&mut self.head, &mut other.head);
        mem::swap(&mut self.size, &mut other.size);
    }

    /// Moves the whole chain out, leaving this list empty
    pub fn take(&mut self) -> LinkedList<T> {
        mem::take(self)
    }

    /// Returns the position of the first element equal to `value`
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|element| element == value)
    }

    /// Returns a reference to the element at `index` in O(n)
    pub fn get(&self, index: usize) -> Result<&T> {
        if index >= self.size {
            return Err(self.out_of_range(index));
        }
        let len = self.size;
        self.iter()
            .nth(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Returns a mutable reference to the element at `index` in O(n)
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        if index >= self.size {
            return Err(self.out_of_range(index));
        }
        let len = self.size;
        self.iter_mut()
            .nth(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Replaces every element, in order, with `f` applied to it
    pub fn map<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> T,
    {
        for element in self.iter_mut() {
            let mapped = f(element);
            *element = mapped;
        }
    }

    /// Returns a new list holding, in order, the elements accepted by `predicate`
    ///
    /// The source list is not modified.
    pub fn filter<F>(&self, mut predicate: F) -> LinkedList<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.iter()
            .filter(|&element| predicate(element))
            .cloned()
            .collect()
    }

    /// Combines all elements with `f`, nested from the right
    ///
    /// For elements `e0, e1, ..., en` this computes
    /// `f(e0, f(e1, ... f(en-1, en)))`. The order matters for combiners that
    /// are not associative or not commutative; see [`LinkedList::fold_left`]
    /// for the conventional left-to-right order.
    ///
    /// An empty list yields `T::default()` instead of an error.
    ///
    /// Runs in O(n) time and, to walk the chain from the back without
    /// recursion, O(n) extra space for one reference per element.
    pub fn reduce<F>(&self, mut f: F) -> T
    where
        T: Clone + Default,
        F: FnMut(T, T) -> T,
    {
        let elements: Vec<&T> = self.iter().collect();
        let mut from_back = elements.into_iter().rev();
        match from_back.next() {
            Some(last) => from_back.fold(last.clone(), |acc, element| f(element.clone(), acc)),
            None => T::default(),
        }
    }

    /// Folds the elements from front to back, starting from `init`
    pub fn fold_left<B, F>(&self, init: B, f: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(init, f)
    }

    /// Copies the elements, in order, into a `Vec`
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Writes the elements separated by `", "`, without brackets or a
    /// trailing separator
    pub fn print<W: io::Write>(&self, stream: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
    {
        write!(stream, "{}", self)
    }

    /// Returns an iterator over references to the elements
    ///
    /// The iterator borrows the list, so structural changes have to wait
    /// until it is no longer used:
    ///
    /// ```compile_fail
    /// use algorithms::LinkedList;
    ///
    /// let mut list = LinkedList::from([1, 2, 3]);
    /// let mut iter = list.iter();
    /// list.push_front(0);
    /// assert_eq!(iter.next(), Some(&1));
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.size,
        }
    }

    /// Returns an iterator over mutable references to the elements
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
            remaining: self.size,
        }
    }

    /// Returns a cursor positioned at the first node, or at the end when empty
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self.head.as_deref())
    }

    /// Returns the end cursor
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(None)
    }

    /// Returns a mutable cursor positioned at the first node
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self.head.as_deref_mut())
    }

    fn check_insert_index(&self, index: usize) -> Result<()> {
        if index > self.size {
            return Err(self.out_of_range(index));
        }
        Ok(())
    }

    fn out_of_range(&self, index: usize) -> Error {
        Error::IndexOutOfRange {
            index,
            len: self.size,
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        LinkedList::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend(source.iter().cloned());
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Find the tail once, then keep linking after the newest node
        let mut link = tail_link(&mut self.head);
        for value in iter {
            link = &mut link.insert(Node::boxed(value)).next;
            self.size += 1;
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for LinkedList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.size);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, element) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", element)?;
        }
        Ok(())
    }
}

/// Panicking counterpart of [`LinkedList::get`]
impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(element) => element,
            Err(err) => panic!("{}", err),
        }
    }
}

/// Panicking counterpart of [`LinkedList::get_mut`]
impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(element) => element,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: Serialize> Serialize for LinkedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for LinkedList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(LinkedList::from)
    }
}

/// Borrowing iterator over a [`LinkedList`]
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.data
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            next: self.next,
            remaining: self.remaining,
        }
    }
}

/// Mutably borrowing iterator over a [`LinkedList`]
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            self.remaining -= 1;
            &mut node.data
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over a [`LinkedList`]
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.size, Some(self.list.size))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
