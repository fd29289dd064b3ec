//! Classic data structures, written from scratch as a learning exercise.
//!
//! # Purpose
//! This crate is a practice ground for implementing sequential containers by hand, with no
//! expectation of production use. Writing the pointer-manipulation logic myself (rather than
//! reaching for [`std::collections`]) is the whole point: every structure here exists to be
//! understood, not just used.
//!
//! # Method
//! Each collection family gets a capability trait under [`collections::traits`] describing its
//! operation set, with concrete variants implementing it. Right now the only family is
//! [`collections::linked`], whose single variant is
//! [`SinglyLinkedList`](collections::linked::SinglyLinkedList); a doubly linked variant could
//! slot in behind the same trait later.
//!
//! # Error Handling
//! Fallible operations come in pairs: a `try_` method returning a strongly typed [`Result`]
//! (enums for unions, structs implementing [`Error`](std::error::Error) for the individual
//! kinds), and a panicking twin for callers who have already validated their arguments.
//! Failures are precondition violations and never leave a collection partially mutated.
//!
//! # Dependencies
//! This crate doesn't use [`Vec`] or any other `std` collection internally. It does depend on
//! some derive macros because they remove the need for very repetitive error-plumbing code.
#![feature(debug_closure_helpers)]

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
