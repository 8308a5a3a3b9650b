use std::cell::Cell;
use std::rc::Rc;

/// A unit type for checking collection behavior when elements occupy no space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSizedType;

/// Records a drop through a shared counter, for asserting that collections run element
/// destructors exactly once. Clones share the counter, so a batch of clones can be handed to a
/// collection and accounted for together.
#[derive(Debug, Default, Clone)]
pub struct CountedDrop(Rc<Cell<usize>>);

impl CountedDrop {
    pub fn new() -> CountedDrop {
        CountedDrop::default()
    }

    /// Returns the number of drops recorded so far and resets the counter.
    pub fn take(&self) -> usize {
        self.0.take()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
