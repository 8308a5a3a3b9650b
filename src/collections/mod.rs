//! Various general-purpose collection types.
//!
//! # Purpose
//! I wrote these types to learn about the data structures themselves, but also concepts such as
//! pointers, allocations, element lifetimes and iterators.
//!
//! # Method
//! Allocation and element construction are kept strictly separate: a raw buffer owns memory,
//! while the collection built on top of it decides which slots currently hold live values and is
//! responsible for running their destructors.

#[cfg(feature = "circ")]
pub mod circ;
