use std::fmt;
use std::ptr;

use super::linked_list::Node;

/// A read-only position inside a [`LinkedList`](super::LinkedList)
///
/// A cursor is either positioned at a node or at the end. Cursors are cheap
/// copies, so several may walk the same list at once. Two cursors compare
/// equal when they refer to the same node (or are both at the end); the
/// element values are never compared.
///
/// A cursor borrows the list it came from, so the list cannot be
/// structurally mutated while any cursor into it is alive:
///
/// ```compile_fail
/// use algorithms::LinkedList;
///
/// let mut list = LinkedList::from([1, 2, 3]);
/// let cursor = list.begin();
/// list.clear();
/// assert_eq!(cursor.current(), Some(&1));
/// ```
pub struct Cursor<'a, T> {
    current: Option<&'a Node<T>>,
}

impl<'a, T> Cursor<'a, T> {
    pub(super) fn new(current: Option<&'a Node<T>>) -> Self {
        Cursor { current }
    }

    /// Returns the element under the cursor, or `None` at the end
    pub fn current(&self) -> Option<&'a T> {
        self.current.map(|node| &node.data)
    }

    /// Returns the element after the one under the cursor
    pub fn peek_next(&self) -> Option<&'a T> {
        self.current
            .and_then(|node| node.next.as_deref())
            .map(|node| &node.data)
    }

    /// Checks if the cursor is at the end
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Advances to the next node. At the end, this stays at the end.
    pub fn move_next(&mut self) -> &mut Self {
        self.current = self.current.and_then(|node| node.next.as_deref());
        self
    }

    /// Advances to the next node and returns the position held before
    pub fn fetch_next(&mut self) -> Self {
        let previous = *self;
        self.move_next();
        previous
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.current, other.current) {
            (Some(a), Some(b)) => ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.current()).finish()
    }
}

/// A position inside a [`LinkedList`](super::LinkedList) that can modify the
/// element under it
///
/// Only one `CursorMut` can exist per list at a time. It edits element
/// values in place but never adds or removes nodes.
///
/// ```compile_fail
/// use algorithms::LinkedList;
///
/// let mut list = LinkedList::from([1, 2, 3]);
/// let mut cursor = list.cursor_mut();
/// list.remove(0).unwrap();
/// cursor.move_next();
/// ```
pub struct CursorMut<'a, T> {
    current: Option<&'a mut Node<T>>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(super) fn new(current: Option<&'a mut Node<T>>) -> Self {
        CursorMut { current }
    }

    /// Returns the element under the cursor, or `None` at the end
    pub fn current(&self) -> Option<&T> {
        self.current.as_deref().map(|node| &node.data)
    }

    /// Returns a mutable reference to the element under the cursor
    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.current.as_deref_mut().map(|node| &mut node.data)
    }

    /// Checks if the cursor is at the end
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Advances to the next node. At the end, this stays at the end.
    pub fn move_next(&mut self) -> &mut Self {
        self.current = self
            .current
            .take()
            .and_then(|node| node.next.as_deref_mut());
        self
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut").field(&self.current()).finish()
    }
}
