use crate::util::error::{EmptyCollection, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// The operation set shared by every linked list variant: an ordered, index-addressable
/// sequence with `O(1)` operations at the ends and `O(n)` operations elsewhere.
///
/// Fallible operations are required in their `try_` form; panicking twins are provided on top
/// of them, as are the equality-based algorithms ([`contains`](LinkedList::contains) and
/// [`remove_value`](LinkedList::remove_value)). Borrowed iteration is exposed through the
/// [`Iter`](LinkedList::Iter) associated type and owned iteration through the [`IntoIterator`]
/// supertrait; both traverse front to back.
pub trait LinkedList<T>: IntoIterator<Item = T> + Sized {
    /// The borrowed iterator type, yielding references to elements front to back.
    type Iter<'a>: Iterator<Item = &'a T> where Self: 'a, T: 'a;

    /// Returns the number of elements in the list.
    fn len(&self) -> usize;

    /// Returns true if the list contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the first element, if it exists.
    fn front(&self) -> Option<&T>;

    /// Returns a reference to the last element, if it exists.
    fn back(&self) -> Option<&T>;

    /// Returns a reference to the element at `index`, or an [`Err`] if `index` is out of
    /// bounds.
    fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds>;

    /// Returns the index of the first element equal to `value`, or [`None`] if the list
    /// contains no such element.
    fn find(&self, value: &T) -> Option<usize> where T: PartialEq;

    /// Adds the provided element to the front of the list.
    fn prepend(&mut self, value: T);

    /// Adds the provided element to the back of the list.
    fn append(&mut self, value: T);

    /// Inserts the provided element at `index`, shifting all later elements back by one.
    /// `index` may equal the length, in which case this is equivalent to
    /// [`append`](LinkedList::append).
    fn try_insert_at(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds>;

    /// Replaces the element at `index`, returning the displaced value.
    fn try_set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds>;

    /// Removes and returns the first element, or an [`Err`] if the list is empty.
    fn try_pop_front(&mut self) -> Result<T, EmptyCollection>;

    /// Removes and returns the last element, or an [`Err`] if the list is empty.
    fn try_pop_back(&mut self) -> Result<T, EmptyCollection>;

    /// Removes and returns the element at `index`, shifting all later elements forward by one.
    fn try_remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds>;

    /// Moves all elements of `other` onto the back of `self`, leaving `other` empty.
    fn merge(&mut self, other: Self);

    /// Reverses the order of the elements in place.
    fn reverse(&mut self);

    /// Removes every element from the list.
    fn clear(&mut self);

    /// Returns an iterator over all elements in the list, as references.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;

    /// Returns true if the list contains an element equal to `value`.
    fn contains(&self, value: &T) -> bool where T: PartialEq {
        self.find(value).is_some()
    }

    /// Removes and returns the first element equal to `value`, or [`None`] if the list
    /// contains no such element.
    fn remove_value(&mut self, value: &T) -> Option<T> where T: PartialEq {
        let index = self.find(value)?;
        // `find` just returned an in-bounds index, so the removal cannot fail.
        Some(self.try_remove_at(index).throw())
    }

    /// Returns a reference to the element at `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Inserts the provided element at `index`, panicking on a failure. See
    /// [`try_insert_at`](LinkedList::try_insert_at).
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the list.
    fn insert_at(&mut self, index: usize, value: T) {
        self.try_insert_at(index, value).throw()
    }

    /// Replaces the element at `index`, returning the displaced value and panicking on a
    /// failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    fn set(&mut self, index: usize, value: T) -> T {
        self.try_set(index, value).throw()
    }

    /// Removes and returns the first element, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the list is empty.
    fn pop_front(&mut self) -> T {
        self.try_pop_front().throw()
    }

    /// Removes and returns the last element, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the list is empty.
    fn pop_back(&mut self) -> T {
        self.try_pop_back().throw()
    }

    /// Removes and returns the element at `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    fn remove_at(&mut self, index: usize) -> T {
        self.try_remove_at(index).throw()
    }
}
