#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::cell::Cell;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::rc::Rc;

use super::*;
use crate::collections::traits::LinkedList;
use crate::util::error::ListError;
use crate::util::panic::assert_panics;

/// A payload that bumps a shared counter when dropped.
#[derive(Clone)]
struct CountedDrop(Rc<Cell<usize>>);

impl CountedDrop {
    fn new() -> (Rc<Cell<usize>>, CountedDrop) {
        let counter = Rc::new(Cell::new(0));
        (counter.clone(), CountedDrop(counter))
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn test_append_order() {
    let mut list = SinglyLinkedList::new();
    for i in 0..10 {
        list.append(i);
        assert_eq!(list.len(), i + 1, "Length should track the number of appends.");
    }

    for i in 0..10 {
        assert_eq!(
            *list.get(i),
            i,
            "Elements should be retrievable in the order they were appended."
        );
        assert_eq!(list[i], i, "The Index operator should agree with get.");
    }
}

#[test]
fn test_prepend_pop_front() {
    let mut list = SinglyLinkedList::from_iter([2, 3]);

    list.prepend(1);
    assert_eq!(list.len(), 3);
    assert_eq!(list.front(), Some(&1), "Prepending should place the element at index 0.");

    assert_eq!(
        list.try_pop_front(),
        Ok(1),
        "Popping the front should return the most recently prepended element."
    );
    assert_eq!(list.len(), 2, "A prepend followed by a pop_front should restore the length.");
    assert_eq!(list.front(), Some(&2));
}

#[test]
fn test_append_pop_back() {
    // Length 1: the tail must collapse back onto the sentinel.
    let mut list = SinglyLinkedList::new();
    list.append(7);
    assert_eq!(list.try_pop_back(), Ok(7));
    assert!(list.is_empty());
    list.append(8);
    assert_eq!(
        (list.front(), list.back()),
        (Some(&8), Some(&8)),
        "The tail should be usable again after popping the only element."
    );

    // Length 2: the tail must step back onto the remaining element.
    list.append(9);
    assert_eq!(list.try_pop_back(), Ok(9));
    assert_eq!(list.len(), 1);
    assert_eq!(list.back(), Some(&8), "The tail should point at the surviving element.");
}

#[test]
fn test_find() {
    let empty = SinglyLinkedList::<u32>::new();
    assert_eq!(empty.find(&1), None, "Nothing can be found in an empty list.");

    let list = SinglyLinkedList::from_iter([1, 2, 2, 3]);
    assert_eq!(
        list.find(&2),
        Some(1),
        "find should return the index of the first match when duplicates are present."
    );
    assert_eq!(list.find(&3), Some(3));
    assert_eq!(list.find(&9), None, "An absent value should not be found.");
    assert!(list.contains(&1));
    assert!(!list.contains(&9));
}

#[test]
fn test_insert_at_bounds_delegation() {
    let mut by_insert = SinglyLinkedList::from_iter([2, 3]);
    let mut by_ends = SinglyLinkedList::from_iter([2, 3]);

    by_insert.insert_at(0, 1);
    by_ends.prepend(1);
    assert_eq!(by_insert, by_ends, "insert_at(0, v) should be equivalent to prepend(v).");

    by_insert.insert_at(by_insert.len(), 4);
    by_ends.append(4);
    assert_eq!(by_insert, by_ends, "insert_at(len, v) should be equivalent to append(v).");

    by_insert.insert_at(2, 10);
    assert_eq!(
        by_insert.iter().copied().collect::<Vec<_>>(),
        [1, 2, 10, 3, 4],
        "A middle insertion should shift all later elements back by one."
    );
    assert_eq!(by_insert.back(), Some(&4), "A middle insertion should not move the tail.");
}

#[test]
fn test_remove_at_bounds_delegation() {
    let mut by_remove = SinglyLinkedList::from_iter([1, 2, 3, 4]);
    let mut by_ends = SinglyLinkedList::from_iter([1, 2, 3, 4]);

    assert_eq!(by_remove.remove_at(0), by_ends.pop_front());
    assert_eq!(by_remove, by_ends, "remove_at(0) should be equivalent to pop_front.");

    assert_eq!(by_remove.remove_at(by_remove.len() - 1), by_ends.pop_back());
    assert_eq!(by_remove, by_ends, "remove_at(len - 1) should be equivalent to pop_back.");

    let mut list = SinglyLinkedList::from_iter([1, 2, 3]);
    assert_eq!(list.try_remove_at(1), Ok(2), "A middle removal should return the element.");
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        [1, 3],
        "A middle removal should relink around the removed node."
    );
}

#[test]
fn test_drain_round_trip() {
    let mut list = SinglyLinkedList::from_iter(0..5);
    let mut drained = Vec::new();
    while let Ok(value) = list.try_pop_front() {
        drained.push(value);
    }
    assert_eq!(
        drained,
        [0, 1, 2, 3, 4],
        "Draining from the front should yield the appended order."
    );
    assert!(list.is_empty());

    let mut list = SinglyLinkedList::from_iter(0..5);
    let mut drained = Vec::new();
    while let Ok(value) = list.try_pop_back() {
        drained.push(value);
    }
    assert_eq!(
        drained,
        [4, 3, 2, 1, 0],
        "Draining from the back should yield the appended order reversed."
    );
    assert!(list.is_empty());
}

#[test]
fn test_out_of_bounds() {
    let mut empty = SinglyLinkedList::<u32>::new();
    assert_eq!(empty.try_get(0), Err(IndexOutOfBounds { index: 0, len: 0 }));
    assert_eq!(empty.try_set(0, 1), Err(IndexOutOfBounds { index: 0, len: 0 }));
    assert_eq!(empty.try_remove_at(0), Err(IndexOutOfBounds { index: 0, len: 0 }));
    assert_eq!(
        empty.try_insert_at(1, 1),
        Err(IndexOutOfBounds { index: 1, len: 0 }),
        "Inserting anywhere past the length should fail, even on an empty list."
    );
    assert_eq!(empty.try_insert_at(0, 1), Ok(()), "Inserting at the length should succeed.");

    let mut list = SinglyLinkedList::from_iter([1, 2, 3]);
    assert_eq!(list.try_get(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(list.try_get_mut(3).unwrap_err(), IndexOutOfBounds { index: 3, len: 3 });
    assert_eq!(list.try_set(3, 9), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(list.try_remove_at(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(list.try_insert_at(4, 9), Err(IndexOutOfBounds { index: 4, len: 3 }));
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        [1, 2, 3],
        "A failed operation should leave the list unchanged."
    );

    assert_panics!(
        {
            let list = SinglyLinkedList::from_iter([1, 2, 3]);
            *list.get(3)
        },
        "The panicking twin should panic on an out of bounds index."
    );
    assert_panics!({
        let mut list = SinglyLinkedList::from_iter([1, 2, 3]);
        list.remove_at(3)
    });
}

#[test]
fn test_pop_empty() {
    let mut empty = SinglyLinkedList::<u32>::new();
    assert_eq!(empty.try_pop_front(), Err(EmptyCollection));
    assert_eq!(empty.try_pop_back(), Err(EmptyCollection));
    assert_eq!(empty.len(), 0, "A failed pop should leave the length unchanged.");

    assert_panics!(
        { SinglyLinkedList::<u32>::new().pop_front() },
        "The panicking twin should panic on an empty list."
    );
    assert_panics!({ SinglyLinkedList::<u32>::new().pop_back() });
}

#[test]
fn test_display() {
    let mut list = SinglyLinkedList::new();
    assert_eq!(format!("{list}"), "[  ]", "An empty list renders as an empty frame.");

    list.append(1);
    list.append(2);
    list.append(3);
    assert_eq!(format!("{list}"), "[ 1 -> 2 -> 3 ]");
    assert_eq!(list.len(), 3);

    assert_eq!(list.pop_back(), 3);
    assert_eq!(format!("{list}"), "[ 1 -> 2 ]");
}

#[test]
fn test_debug() {
    let list = SinglyLinkedList::from_iter([1, 2]);
    assert_eq!(format!("{list:?}"), "SinglyLinkedList { contents: [1, 2], len: 2 }");
}

#[test]
fn test_iteration() {
    let mut list = SinglyLinkedList::from_iter([1, 2, 3]);

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        [1, 2, 3],
        "Borrowed iteration should be restartable."
    );
    assert_eq!(list.iter().len(), 3, "The iterator should know how many elements remain.");

    for element in list.iter_mut() {
        *element *= 10;
    }
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        [10, 20, 30],
        "Mutations through iter_mut should be visible in the list."
    );

    let mut owned = list.into_iter();
    assert_eq!(owned.size_hint(), (3, Some(3)));
    assert_eq!(owned.next(), Some(10), "Owned iteration should drain from the front.");
    assert_eq!(owned.next(), Some(20));
    assert_eq!(owned.next(), Some(30));
    assert_eq!(owned.next(), None);
    assert_eq!(owned.next(), None, "The iterator should stay exhausted.");
}

#[test]
fn test_set() {
    let mut list = SinglyLinkedList::from_iter([1, 2, 3]);
    assert_eq!(list.set(1, 20), 2, "set should return the displaced value.");
    assert_eq!(list.try_set(2, 30), Ok(3));
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 20, 30]);
    assert_eq!(list.len(), 3, "Replacing an element should not change the length.");
}

#[test]
fn test_front_back() {
    let mut list = SinglyLinkedList::new();
    assert_eq!(list.front(), None, "An empty list has no front, which is not an error.");
    assert_eq!(list.back(), None);

    list.append(1);
    list.append(2);
    assert_eq!((list.front(), list.back()), (Some(&1), Some(&2)));

    *list.front_mut().unwrap() = 10;
    *list.back_mut().unwrap() = 20;
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        [10, 20],
        "Mutations through front_mut and back_mut should be visible."
    );
}

#[test]
fn test_reverse() {
    let mut list = SinglyLinkedList::<u32>::new();
    list.reverse();
    assert!(list.is_empty(), "Reversing an empty list is a no-op.");

    let mut list = SinglyLinkedList::from_iter([1, 2, 3, 4, 5]);
    list.reverse();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [5, 4, 3, 2, 1]);

    list.append(0);
    assert_eq!(
        list.back(),
        Some(&0),
        "The tail should point at the old first element after a reverse."
    );
    assert_eq!(list.len(), 6);
}

#[test]
fn test_merge() {
    let mut list = SinglyLinkedList::from_iter([1, 2]);
    let other = SinglyLinkedList::from_iter([3, 4]);
    list.merge(other);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);

    list.append(5);
    assert_eq!(list.back(), Some(&5), "The tail should follow the spliced-in chain.");

    let mut empty = SinglyLinkedList::new();
    empty.merge(SinglyLinkedList::from_iter([7]));
    assert_eq!(
        empty.iter().copied().collect::<Vec<_>>(),
        [7],
        "Merging into an empty list should adopt the donor's elements."
    );

    let mut list = SinglyLinkedList::from_iter([1]);
    list.merge(SinglyLinkedList::new());
    assert_eq!(list.len(), 1, "Merging an empty donor should change nothing.");
}

#[test]
fn test_merge_empties_donor() {
    let mut list = SinglyLinkedList::from_iter([1]);
    let mut other = SinglyLinkedList::from_iter([2, 3, 4]);
    list.merge(std::mem::take(&mut other));
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
    assert!(other.is_empty(), "The donor should be left empty after a merge.");
    other.append(9);
    assert_eq!(other.back(), Some(&9), "The drained donor should remain usable.");
}

#[test]
fn test_clear_and_drop_release_nodes() {
    let (counter, payload) = CountedDrop::new();
    let mut list = SinglyLinkedList::new();
    for _ in 0..10 {
        list.append(payload.clone());
    }

    list.clear();
    assert_eq!(counter.get(), 10, "clear should release every node's payload.");
    assert!(list.is_empty());
    list.append(payload.clone());
    assert_eq!(list.len(), 1, "The list should be reusable after clear.");

    drop(list);
    assert_eq!(counter.get(), 11, "Dropping the list should release the remaining payloads.");
}

#[test]
fn test_remove_value() {
    let mut list = SinglyLinkedList::from_iter([1, 2, 2, 3]);
    assert_eq!(
        list.remove_value(&2),
        Some(2),
        "remove_value should remove the first match only."
    );
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(list.remove_value(&9), None, "An absent value removes nothing.");
    assert_eq!(list.len(), 3);

    assert_eq!(list.remove_value(&3), Some(3));
    list.append(4);
    assert_eq!(list.back(), Some(&4), "Removing the tail by value should re-point the tail.");
}

#[test]
fn test_eq_and_hash() {
    let a = SinglyLinkedList::from_iter([1, 2, 3]);
    let b = SinglyLinkedList::from_iter([1, 2, 3]);
    let c = SinglyLinkedList::from_iter([1, 2]);
    assert_eq!(a, b);
    assert_ne!(a, c, "Lists of different lengths should not be equal.");
    assert_ne!(b, SinglyLinkedList::from_iter([1, 2, 4]));

    let hash = |list: &SinglyLinkedList<u32>| {
        let mut hasher = DefaultHasher::new();
        list.hash(&mut hasher);
        hasher.finish()
    };
    assert_eq!(hash(&a), hash(&b), "Equal lists should hash identically.");
}

#[test]
fn test_extend() {
    let mut list = SinglyLinkedList::from_iter(0..3);
    list.extend(3..6);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 4, 5]);
    assert_eq!(list.back(), Some(&5));
}

// The capability trait has exactly one conforming variant for now, so exercise it through a
// generic function the way a future second variant would be.
fn reverse_via_trait<L: LinkedList<u32>>(list: &mut L) {
    let mut index = 0;
    while index < list.len() {
        let value = list.remove_at(list.len() - 1);
        list.insert_at(index, value);
        index += 1;
    }
}

#[test]
fn test_trait_generic_code() {
    let mut list = SinglyLinkedList::from_iter([1, 2, 3, 4]);
    reverse_via_trait(&mut list);
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        [4, 3, 2, 1],
        "Generic code written against the trait should work on the singly linked variant."
    );

    fn sum_via_trait<L: LinkedList<u32>>(list: &L) -> u32 {
        LinkedList::iter(list).sum()
    }
    assert_eq!(sum_via_trait(&list), 10);
    assert!(LinkedList::contains(&list, &4));
    assert_eq!(LinkedList::remove_value(&mut list, &3), Some(3));
}

#[test]
fn test_list_error_union() {
    let index_err = ListError::from(IndexOutOfBounds { index: 5, len: 2 });
    assert!(index_err.is_index_out_of_bounds());
    assert_eq!(
        format!("{index_err}"),
        "Index 5 out of bounds for collection with 2 elements!"
    );

    let empty_err = ListError::from(EmptyCollection);
    assert!(empty_err.is_empty_collection());

    let recovered = IndexOutOfBounds::try_from(index_err);
    assert_eq!(recovered.ok(), Some(IndexOutOfBounds { index: 5, len: 2 }));
    assert!(
        IndexOutOfBounds::try_from(empty_err).is_err(),
        "Converting to the wrong variant should fail."
    );
}
