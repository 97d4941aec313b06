// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous vector built from raw storage, with panic-safe
//! reallocation.
//!
//! `StowVec<T>` is a from-scratch dynamic array: an untyped block owner
//! ([`RawStorage`]) layered under a logical-length manager ([`StowVec`])
//! that constructs, destroys and relocates elements inside that block by
//! hand. [`RawStorage`] never runs element code; [`StowVec`] never touches
//! bytes it has not constructed.
//!
//! # Core Guarantees
//!
//! - **Fallible growth**: every operation that may allocate returns
//!   `Result`; on [`StorageError`] the vector is exactly as it was before
//!   the call.
//! - **No lifetime leaks**: element constructors that panic (`T::default`,
//!   `T::clone`, emplacement closures) never leak already-constructed slots
//!   and never corrupt the vector.
//! - **Relocation cannot fail**: growth moves elements bitwise, so the only
//!   element code that runs during an insertion is the one new
//!   constructor — before any existing element is disturbed.
//! - **Amortized O(1) append**: capacity doubles (0 → 1 → 2 → 4 → …).
//!
//! # Example
//!
//! ```rust
//! use stowvec::{StorageError, StowVec};
//!
//! fn example() -> Result<(), StorageError> {
//!     let mut vec = StowVec::new();
//!     vec.push(1u32)?;
//!     vec.push(2)?;
//!     vec.push(3)?;
//!
//!     vec.insert(1, 9)?;
//!     assert_eq!(vec.as_slice(), &[1, 9, 2, 3]);
//!
//!     assert_eq!(vec.remove(0), 1);
//!     assert_eq!(vec.pop(), Some(3));
//!     assert_eq!(vec.as_slice(), &[9, 2]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Element type requirements
//!
//! None. `T` needs no trait at all for push/insert/remove/pop; `T: Default`
//! enables [`StowVec::with_len`] and [`StowVec::resize`], and `T: Clone`
//! enables [`StowVec::try_clone`] and [`StowVec::try_clone_from`].
//! Zero-sized types are supported and never allocate.
//!
//! # Preconditions
//!
//! Out-of-range indices are explicit panics: slice indexing through
//! `Deref`, [`StowVec::insert`] with `index > len` and [`StowVec::remove`]
//! with `index >= len` all panic with the offending index in the message.
//! [`StowVec::pop`] on an empty vector returns `None`.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod error;
mod raw_storage;
mod stow_vec;

#[cfg(test)]
mod tests;

pub use error::StorageError;
pub use raw_storage::RawStorage;
pub use stow_vec::StowVec;
