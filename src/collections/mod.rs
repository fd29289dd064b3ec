//! General-purpose collection types and the capability traits they conform to.
//!
//! # Purpose
//! Each submodule is one family of data structures. A family's operation set lives in
//! [`traits`], so that generic code can be written against the interface rather than a
//! concrete variant.

pub mod linked;
pub mod traits;
