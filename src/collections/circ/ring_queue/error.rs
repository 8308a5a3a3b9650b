use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

use crate::util::error::{AllocFailure, CapacityOverflow};

/// The error produced when taking or peeking from a queue with no live elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyQueue;

impl Display for EmptyQueue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Queue is empty, no elements left!")
    }
}

impl Error for EmptyQueue {}

/// The reasons a queue can fail to obtain a larger buffer. On either variant the queue is left
/// exactly as it was before the attempt.
#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum GrowError {
    CapacityOverflow(CapacityOverflow),
    AllocFailure(AllocFailure),
}
