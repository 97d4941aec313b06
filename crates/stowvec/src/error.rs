// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for stowvec.

use thiserror::Error;

/// Error type for storage allocation and vector growth.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum StorageError {
    /// The requested slot count cannot be expressed as an allocation size.
    ///
    /// Raised when `capacity * size_of::<T>()` exceeds `isize::MAX`, or when
    /// doubling an already-huge capacity overflows `usize`.
    #[error("Capacity overflow: allocation size exceeds isize::MAX")]
    CapacityOverflow,

    /// The global allocator could not provide the requested block.
    ///
    /// The container that requested the growth is left exactly as it was
    /// before the call.
    #[error("Out of memory: the allocator returned no block")]
    OutOfMemory,
}
