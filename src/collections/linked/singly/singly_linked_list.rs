use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Index, IndexMut};
use std::ptr::NonNull;

use super::{Iter, IterMut, Link, Node};
use crate::collections::traits::LinkedList;
#[doc(inline)]
pub use crate::util::error::{EmptyCollection, IndexOutOfBounds, ListError};
use crate::util::result::ResultExtension;

/// A list with links in one direction, anchored by a sentinel node and holding a non-owning
/// pointer to its last node for `O(1)` appends.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SinglyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `prepend/append` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `pop_back` | `O(n)` |
/// | `get` | `O(i)` |
/// | `insert_at` | `O(i)` |
/// | `remove_at` | `O(i)` |
/// | `set` | `O(i)` |
/// | `find` | `O(n)` |
/// | `merge` | `O(1)` |
/// | `reverse` | `O(n)` |
///
/// The `O(n)` `pop_back` is the structural cost of holding no back-links: the node preceding
/// the tail can only be found by walking from the front. A doubly linked variant behind the
/// same [`LinkedList`] trait would make it `O(1)` at the price of a second pointer per node.
pub struct SinglyLinkedList<T> {
    pub(crate) sentinel: Box<Node<T>>,
    pub(crate) tail: NonNull<Node<T>>,
    pub(crate) len: usize,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new SinglyLinkedList with no elements.
    pub fn new() -> SinglyLinkedList<T> {
        let mut sentinel = Box::new(Node::sentinel());
        let tail = NonNull::from(sentinel.as_mut());
        SinglyLinkedList {
            sentinel,
            tail,
            len: 0,
        }
    }

    /// Returns the length of the SinglyLinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the SinglyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.sentinel.next.as_deref().map(|node| {
            // SAFETY: Nodes past the sentinel always hold a value.
            unsafe { node.value() }
        })
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.sentinel.next.as_deref_mut().map(|node| {
            // SAFETY: Nodes past the sentinel always hold a value.
            unsafe { node.value_mut() }
        })
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        match self.len {
            0 => None,
            // SAFETY: When the list is non-empty, tail points at the last real node, which is
            // owned by the chain and lives as long as this borrow of the list.
            _ => Some(unsafe { self.tail.as_ref().value() }),
        }
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.len {
            0 => None,
            // SAFETY: When the list is non-empty, tail points at the last real node, and
            // &mut self grants exclusive access to the chain that owns it.
            _ => Some(unsafe { self.tail.as_mut().value_mut() }),
        }
    }

    /// Adds the provided element to the front of the list. The sentinel makes this a single
    /// link rewrite whether or not the list is empty.
    pub fn prepend(&mut self, value: T) {
        let mut node = Box::new(Node::real(value, self.sentinel.next.take()));
        if self.len == 0 {
            self.tail = NonNull::from(node.as_mut());
        }
        self.sentinel.next = Some(node);
        self.len += 1;
    }

    /// Adds the provided element to the back of the list.
    pub fn append(&mut self, value: T) {
        let mut node = Box::new(Node::real(value, None));
        let new_tail = NonNull::from(node.as_mut());
        // SAFETY: Tail always points into the chain owned by this list (the sentinel when
        // empty), and &mut self grants exclusive access to it.
        unsafe { self.tail.as_mut().next = Some(node) };
        self.tail = new_tail;
        self.len += 1;
    }

    /// Removes the first element from the list and returns it, returning an [`Err`] if the
    /// list is empty.
    pub fn try_pop_front(&mut self) -> Result<T, EmptyCollection> {
        let mut head = self.sentinel.next.take().ok_or(EmptyCollection)?;
        self.sentinel.next = head.next.take();
        self.len -= 1;
        if self.len == 0 {
            self.tail = NonNull::from(self.sentinel.as_mut());
        }
        // SAFETY: Nodes past the sentinel always hold a value.
        Ok(unsafe { (*head).into_value() })
    }

    /// Removes the first element from the list and returns it, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn pop_front(&mut self) -> T {
        self.try_pop_front().throw()
    }

    /// Removes the last element from the list and returns it, returning an [`Err`] if the
    /// list is empty. Costs a full traversal to find the node preceding the tail.
    pub fn try_pop_back(&mut self) -> Result<T, EmptyCollection> {
        if self.len == 0 {
            return Err(EmptyCollection);
        }

        let prev = self.seek_before_mut(self.len - 1);
        // SAFETY: prev precedes the last element, so its successor exists.
        let node = unsafe { prev.next.take().unwrap_unchecked() };
        let new_tail = NonNull::from(prev);
        self.tail = new_tail;
        self.len -= 1;

        // SAFETY: Nodes past the sentinel always hold a value.
        Ok(unsafe { (*node).into_value() })
    }

    /// Removes the last element from the list and returns it, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn pop_back(&mut self) -> T {
        self.try_pop_back().throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.checked_index(index)?;
        // SAFETY: Nodes past the sentinel always hold a value.
        Ok(unsafe { self.seek(index).value() })
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an
    /// [`Err`] on a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.checked_index(index)?;
        // SAFETY: Nodes past the sentinel always hold a value.
        Ok(unsafe { self.seek_mut(index).value_mut() })
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a
    /// failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Inserts the provided element at `index`, shifting all later elements back by one.
    /// `index` may equal the length, in which case the element is appended.
    ///
    /// Insertions at the ends delegate to [`prepend`](SinglyLinkedList::prepend) and
    /// [`append`](SinglyLinkedList::append) to stay `O(1)` there.
    pub fn try_insert_at(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }

        if index == 0 {
            self.prepend(value);
        } else if index == self.len {
            self.append(value);
        } else {
            let prev = self.seek_before_mut(index);
            prev.next = Some(Box::new(Node::real(value, prev.next.take())));
            self.len += 1;
        }
        Ok(())
    }

    /// Inserts the provided element at `index`, panicking on a failure. See
    /// [`try_insert_at`](SinglyLinkedList::try_insert_at).
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the list.
    pub fn insert_at(&mut self, index: usize, value: T) {
        self.try_insert_at(index, value).throw()
    }

    /// Replaces the element at the provided `index`, returning the displaced value, or an
    /// [`Err`] if `index` is out of bounds.
    pub fn try_set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        self.checked_index(index)?;
        // SAFETY: Nodes past the sentinel always hold a value.
        Ok(mem::replace(unsafe { self.seek_mut(index).value_mut() }, value))
    }

    /// Replaces the element at the provided `index`, returning the displaced value and
    /// panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn set(&mut self, index: usize, value: T) -> T {
        self.try_set(index, value).throw()
    }

    /// Removes and returns the element at `index`, shifting all later elements forward by
    /// one, or returns an [`Err`] if `index` is out of bounds.
    ///
    /// Removals at the ends delegate to [`try_pop_front`](SinglyLinkedList::try_pop_front)
    /// and [`try_pop_back`](SinglyLinkedList::try_pop_back).
    pub fn try_remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.checked_index(index)?;

        if index == 0 {
            // SAFETY: The list is non-empty once the index check passes.
            Ok(unsafe { self.try_pop_front().unwrap_unchecked() })
        } else if index == self.len - 1 {
            // SAFETY: The list is non-empty once the index check passes.
            Ok(unsafe { self.try_pop_back().unwrap_unchecked() })
        } else {
            let prev = self.seek_before_mut(index);
            // SAFETY: index is in bounds and not the last element, so both the node and its
            // successor exist.
            let mut node = unsafe { prev.next.take().unwrap_unchecked() };
            prev.next = node.next.take();
            self.len -= 1;
            // SAFETY: Nodes past the sentinel always hold a value.
            Ok(unsafe { (*node).into_value() })
        }
    }

    /// Removes and returns the element at `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn remove_at(&mut self, index: usize) -> T {
        self.try_remove_at(index).throw()
    }

    /// Moves all elements of `other` onto the back of `self` in a single splice, leaving
    /// `other` empty.
    pub fn merge(&mut self, mut other: SinglyLinkedList<T>) {
        if other.len == 0 {
            return;
        }

        let head = other.sentinel.next.take();
        // SAFETY: Tail always points into the chain owned by this list, and &mut self grants
        // exclusive access to it.
        unsafe { self.tail.as_mut().next = head };
        self.tail = other.tail;
        self.len += other.len;

        other.len = 0;
        other.tail = NonNull::from(other.sentinel.as_mut());
    }

    /// Reverses the order of the elements in place, in one pass.
    pub fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }

        let mut curr = self.sentinel.next.take();
        // The old first node becomes the tail. Its heap slot is stable while the boxes are
        // relinked below.
        if let Some(first) = curr.as_deref_mut() {
            self.tail = NonNull::from(first);
        }

        let mut prev: Link<T> = None;
        while let Some(mut node) = curr {
            curr = node.next.take();
            node.next = prev;
            prev = Some(node);
        }
        self.sentinel.next = prev;
    }

    /// Removes every element from the list, releasing each node without recursing.
    pub fn clear(&mut self) {
        let mut curr = self.sentinel.next.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
        self.tail = NonNull::from(self.sentinel.as_mut());
        self.len = 0;
    }

    /// Returns a mutable iterator over all elements in the list, as references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over all elements in the list, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Returns the index of the first element equal to `value`, or [`None`] if the list
    /// contains no such element.
    pub fn find(&self, value: &T) -> Option<usize> {
        for (index, element) in self.iter().enumerate() {
            if element == value {
                return Some(index);
            }
        }
        None
    }

    /// Returns true if the list contains an element equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Removes and returns the first element equal to `value`, or [`None`] if the list
    /// contains no such element.
    pub fn remove_value(&mut self, value: &T) -> Option<T> {
        let index = self.find(value)?;
        // `find` just returned an in-bounds index, so the removal cannot fail.
        Some(self.try_remove_at(index).throw())
    }
}

impl<T> SinglyLinkedList<T> {
    pub(crate) const fn checked_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }

    /// Walks to the node holding element `index`. The caller must have checked `index < len`.
    pub(crate) fn seek(&self, index: usize) -> &Node<T> {
        let mut curr = self.sentinel.as_ref();
        for _ in 0..=index {
            // SAFETY: The caller guarantees index < len, so every step lands on a real node.
            curr = unsafe { curr.next.as_deref().unwrap_unchecked() };
        }
        curr
    }

    /// Walks to the node holding element `index`. The caller must have checked `index < len`.
    pub(crate) fn seek_mut(&mut self, index: usize) -> &mut Node<T> {
        let mut curr = self.sentinel.as_mut();
        for _ in 0..=index {
            // SAFETY: The caller guarantees index < len, so every step lands on a real node.
            curr = unsafe { curr.next.as_deref_mut().unwrap_unchecked() };
        }
        curr
    }

    /// Walks to the node preceding element `index` (the sentinel for index 0). The caller
    /// must have checked `index <= len`.
    pub(crate) fn seek_before_mut(&mut self, index: usize) -> &mut Node<T> {
        let mut curr = self.sentinel.as_mut();
        for _ in 0..index {
            // SAFETY: The caller guarantees index <= len, so every step lands on a real node.
            curr = unsafe { curr.next.as_deref_mut().unwrap_unchecked() };
        }
        curr
    }
}

impl<T> LinkedList<T> for SinglyLinkedList<T> {
    type Iter<'a> = Iter<'a, T> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        SinglyLinkedList::len(self)
    }

    fn front(&self) -> Option<&T> {
        SinglyLinkedList::front(self)
    }

    fn back(&self) -> Option<&T> {
        SinglyLinkedList::back(self)
    }

    fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        SinglyLinkedList::try_get(self, index)
    }

    fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        SinglyLinkedList::find(self, value)
    }

    fn prepend(&mut self, value: T) {
        SinglyLinkedList::prepend(self, value)
    }

    fn append(&mut self, value: T) {
        SinglyLinkedList::append(self, value)
    }

    fn try_insert_at(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        SinglyLinkedList::try_insert_at(self, index, value)
    }

    fn try_set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        SinglyLinkedList::try_set(self, index, value)
    }

    fn try_pop_front(&mut self) -> Result<T, EmptyCollection> {
        SinglyLinkedList::try_pop_front(self)
    }

    fn try_pop_back(&mut self) -> Result<T, EmptyCollection> {
        SinglyLinkedList::try_pop_back(self)
    }

    fn try_remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        SinglyLinkedList::try_remove_at(self, index)
    }

    fn merge(&mut self, other: Self) {
        SinglyLinkedList::merge(self, other)
    }

    fn reverse(&mut self) {
        SinglyLinkedList::reverse(self)
    }

    fn clear(&mut self) {
        SinglyLinkedList::clear(self)
    }

    fn iter<'a>(&'a self) -> Iter<'a, T> {
        SinglyLinkedList::iter(self)
    }
}

impl<T> Index<usize> for SinglyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for SinglyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Hash> Hash for SinglyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Prefix with the length so that concatenations of the same elements hash apart.
        self.len.hash(state);
        for element in self.iter() {
            element.hash(state);
        }
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglyLinkedList")
            .field_with("contents", |f| f.debug_list().entries(self.iter()).finish())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first:?}")?;
        }
        for element in iter {
            write!(f, " -> {element:?}")?;
        }
        f.write_str(" ]")
    }
}
