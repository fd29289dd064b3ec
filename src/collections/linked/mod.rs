//! Linked collection types. Currently revolves around [`SinglyLinkedList`], the one conforming
//! variant of the [`LinkedList`](crate::collections::traits::LinkedList) trait.

pub mod singly;

#[doc(inline)]
pub use singly::SinglyLinkedList;
