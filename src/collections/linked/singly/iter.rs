use std::iter::FusedIterator;

use super::{Node, SinglyLinkedList};

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// An owned iterator over a list's elements, draining them from the front. Anything left
/// unconsumed is released with the wrapped list.
pub struct IntoIter<T> {
    pub(crate) list: SinglyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.try_pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            curr: self.sentinel.next.as_deref(),
            index: 0,
            len: self.len(),
        }
    }
}

/// A borrowed iterator over a list's elements, front to back.
pub struct Iter<'a, T> {
    pub(crate) curr: Option<&'a Node<T>>,
    pub(crate) index: usize,
    pub(crate) len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr.take().map(|node| {
            self.curr = node.next.as_deref();
            self.index += 1;
            // SAFETY: Nodes past the sentinel always hold a value.
            unsafe { node.value() }
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let len = self.len();
        IterMut {
            curr: self.sentinel.next.as_deref_mut(),
            index: 0,
            len,
        }
    }
}

/// A mutable borrowed iterator over a list's elements, front to back.
pub struct IterMut<'a, T> {
    pub(crate) curr: Option<&'a mut Node<T>>,
    pub(crate) index: usize,
    pub(crate) len: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr.take().map(|node| {
            // Destructuring splits the borrow of the node between its value and its successor.
            let Node { value, next } = node;
            self.curr = next.as_deref_mut();
            self.index += 1;
            // SAFETY: Nodes past the sentinel always hold a value.
            unsafe { value.as_mut().unwrap_unchecked() }
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}
