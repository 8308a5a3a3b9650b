//! This crate is my attempt at writing a queue the hard way: one contiguous buffer, reused
//! circularly, grown on demand.
//!
//! # Purpose
//! This repo / crate is a project that I'm working on as a learning experience, with no expectation
//! for it to be used in production. Most of the textbook containers (lists, stacks, heaps) are a
//! pointer or an index away from writing themselves; the one that isn't is a growable ring-buffer
//! queue, so that's the one that gets the full treatment here. Writing it properly means dealing
//! with wrapped index arithmetic, a buffer whose slots are mostly uninitialized memory, and a
//! relocation algorithm that has to preserve FIFO order across the wrap point.
//!
//! # Method
//! All data structures here are written based on my existing understanding and problem solving. I'm
//! not following any guides or copying from the standard library but neither am I restricting my
//! self from looking things up or referring to existing crates, especially their APIs. This crate
//! isn't intended to copy [`VecDeque`](std::collections::VecDeque) but it obviously occupies the
//! same niche; in fact, this library doesn't use [`Vec`] or
//! [`VecDeque`](std::collections::VecDeque) at all.
//!
//! Although I'm not writing this for production use, I intend to write it to a level where it
//! could be. I've been relatively cautious about unsafe code and panics, although there are almost
//! certainly some mistakes.
//!
//! # Error Handling
//! Queues are unusual among collections in that their headline operation has an obvious failure
//! mode: taking from an empty queue. Rather than panicking or handing back garbage, the access
//! methods here return strongly typed errors, using enums for static dispatch rather than dynamic,
//! with structs (often ZSTs) that implement [`Error`](std::error::Error). Growth has fallible
//! twins (`try_` methods) for callers that want to survive allocation failure; the plain methods
//! follow the usual collection convention of treating it as fatal.
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming. Everything else is `std`.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
