pub(crate) type Link<T> = Option<Box<Node<T>>>;

// NOTE: Nodes are chained through Box rather than raw pointers, so that each node exclusively
// owns its successor. The only non-owning pointer in the structure is the list's tail.

pub(crate) struct Node<T> {
    pub value: Option<T>,
    pub next: Link<T>,
}

impl<T> Node<T> {
    /// Creates the anchor node that precedes all real elements. Its value is permanently absent.
    pub const fn sentinel() -> Node<T> {
        Node {
            value: None,
            next: None,
        }
    }

    /// Creates a node holding a real element.
    pub fn real(value: T, next: Link<T>) -> Node<T> {
        Node {
            value: Some(value),
            next,
        }
    }

    /// # Safety
    /// Must only be called on a node past the sentinel, as those are the only nodes guaranteed
    /// to hold a value.
    pub const unsafe fn value(&self) -> &T {
        // SAFETY: Guaranteed by the caller.
        unsafe { self.value.as_ref().unwrap_unchecked() }
    }

    /// # Safety
    /// Must only be called on a node past the sentinel, as those are the only nodes guaranteed
    /// to hold a value.
    pub const unsafe fn value_mut(&mut self) -> &mut T {
        // SAFETY: Guaranteed by the caller.
        unsafe { self.value.as_mut().unwrap_unchecked() }
    }

    /// # Safety
    /// Must only be called on a node past the sentinel, as those are the only nodes guaranteed
    /// to hold a value.
    pub unsafe fn into_value(self) -> T {
        // SAFETY: Guaranteed by the caller.
        unsafe { self.value.unwrap_unchecked() }
    }
}
