// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw slot storage: an owned, uninitialized block sized for a fixed number
//! of element slots.

use alloc::alloc::{alloc, dealloc};
use core::alloc::Layout;
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

use crate::error::StorageError;

/// An owned block of uninitialized memory holding up to `capacity` slots of
/// `T`.
///
/// `RawStorage` never constructs or drops a `T`. Slot lifetimes are entirely
/// the caller's responsibility: dropping a `RawStorage` releases the block
/// without running any destructor, so the owner must destroy (or relocate
/// out) every live element first.
///
/// Zero capacity and zero-sized element types are represented without an
/// allocation; the pointer is dangling but well-aligned.
pub struct RawStorage<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _owns: PhantomData<T>,
}

impl<T> RawStorage<T> {
    /// Creates storage with no block and zero capacity. Never allocates.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _owns: PhantomData,
        }
    }

    /// Allocates a block for exactly `capacity` slots of `T`.
    ///
    /// A `capacity` of 0, or a zero-sized `T`, produces the no-block
    /// representation and always succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::CapacityOverflow`] if `capacity` slots do not
    /// fit in a single allocation request, and [`StorageError::OutOfMemory`]
    /// if the global allocator returns no block.
    pub fn allocate(capacity: usize) -> Result<Self, StorageError> {
        if capacity == 0 || mem::size_of::<T>() == 0 {
            let mut storage = Self::new();
            storage.capacity = capacity;
            return Ok(storage);
        }

        let layout = Layout::array::<T>(capacity).map_err(|_| StorageError::CapacityOverflow)?;

        // SAFETY: the layout has non-zero size (capacity > 0 and T is not
        // zero-sized).
        let block = unsafe { alloc(layout) };

        let Some(ptr) = NonNull::new(block.cast::<T>()) else {
            return Err(StorageError::OutOfMemory);
        };

        Ok(Self {
            ptr,
            capacity,
            _owns: PhantomData,
        })
    }

    /// Returns the number of slots the block can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the base address of the block.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Returns the mutable base address of the block.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns the address of slot `offset`.
    ///
    /// `offset == capacity` is legal and yields the one-past-end address for
    /// pointer arithmetic; it must never be read as a `T`.
    ///
    /// # Safety
    ///
    /// `offset <= capacity`.
    #[inline]
    pub unsafe fn slot(&self, offset: usize) -> *const T {
        debug_assert!(offset <= self.capacity);

        // SAFETY (PRECONDITIONS ARE MET): offset is within the block, or one
        // past its end, per the caller's contract.
        unsafe { self.ptr.as_ptr().add(offset) }
    }

    /// Returns the mutable address of slot `offset`.
    ///
    /// # Safety
    ///
    /// `offset <= capacity`, as for [`RawStorage::slot`].
    #[inline]
    pub unsafe fn slot_mut(&mut self, offset: usize) -> *mut T {
        debug_assert!(offset <= self.capacity);

        // SAFETY (PRECONDITIONS ARE MET): offset is within the block, or one
        // past its end, per the caller's contract.
        unsafe { self.ptr.as_ptr().add(offset) }
    }

    /// Exchanges block and capacity with `other` in O(1). Never fails.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.capacity, &mut other.capacity);
    }
}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) {
        if self.capacity == 0 || mem::size_of::<T>() == 0 {
            return;
        }

        // SAFETY: the block was obtained from `allocate` with this exact
        // layout; the array size arithmetic was validated there.
        unsafe {
            let layout = Layout::from_size_align_unchecked(
                mem::size_of::<T>() * self.capacity,
                mem::align_of::<T>(),
            );
            dealloc(self.ptr.as_ptr().cast(), layout);
        }
    }
}

impl<T> Default for RawStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for RawStorage<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawStorage")
            .field("capacity", &self.capacity)
            .finish()
    }
}

// SAFETY: RawStorage owns its block exclusively; sending or sharing it across
// threads is as safe as doing so with the element type itself.
unsafe impl<T: Send> Send for RawStorage<T> {}
unsafe impl<T: Sync> Sync for RawStorage<T> {}
