use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::NonNull;

use super::ring_queue::GrowError;
use crate::util::error::{AllocFailure, CapacityOverflow};

/// An owned region of raw storage for `cap` slots of `T`, none of which are assumed to be
/// initialized.
///
/// This type only manages memory: it allocates on creation and deallocates exactly once on drop.
/// Deciding which slots hold live values, constructing into them and running their destructors is
/// entirely the owning collection's problem. Keeping the two lifetimes separate is what allows a
/// relocation to move values between buffers without reallocating per element.
pub(crate) struct RawBuf<T> {
    pub(crate) ptr: NonNull<MaybeUninit<T>>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> RawBuf<T> {
    /// Creates a buffer with no slots and no allocation behind it.
    pub(crate) const fn new() -> RawBuf<T> {
        RawBuf {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of slots in the buffer.
    pub(crate) const fn cap(&self) -> usize {
        self.cap
    }

    /// Allocates a buffer with `cap` uninitialized slots.
    ///
    /// # Panics
    /// Panics if the memory layout of the buffer would have a size that exceeds [`isize::MAX`].
    pub(crate) fn alloc(cap: usize) -> RawBuf<T> {
        let layout = Self::make_layout(cap);
        let ptr = Self::make_ptr(layout);

        RawBuf {
            ptr,
            cap,
            _phantom: PhantomData,
        }
    }

    /// The fallible counterpart to [`RawBuf::alloc`]. Nothing is allocated on failure.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the layout size would exceed [`isize::MAX`], or
    /// [`AllocFailure`] if the global allocator declines the request.
    pub(crate) fn try_alloc(cap: usize) -> Result<RawBuf<T>, GrowError> {
        let layout = Layout::array::<MaybeUninit<T>>(cap).map_err(|_| CapacityOverflow)?;

        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).ok_or(AllocFailure)?
        };

        Ok(RawBuf {
            ptr,
            cap,
            _phantom: PhantomData,
        })
    }

    /// A helper function to create a [`Layout`] for `cap` slots of `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(cap: usize) -> Layout {
        Layout::array::<MaybeUninit<T>>(cap).expect("Capacity overflow!")
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<MaybeUninit<T>> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        let layout = Self::make_layout(self.cap);

        if layout.size() != 0 {
            // SAFETY: ptr was allocated in the global allocator with this exact layout. Zero-sized
            // layouts aren't allocated and are guarded against deallocation. The slots are
            // MaybeUninit, so no element destructors run here; any live values must have been
            // dropped (or moved out) by the owning collection already.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), layout)
            }
        }
    }
}
