//! Capability traits describing the operation sets of each collection family.

pub mod list;

#[doc(inline)]
pub use list::LinkedList;
