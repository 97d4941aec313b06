// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for stowvec crates.
//!
//! Instrumented element types for exercising container lifetime handling:
//! [`DropProbe`] counts constructions and destructions through a shared
//! [`ProbeCounter`], and [`FuseClone`] panics once its [`CloneFuse`] burns
//! out, driving the unwind paths of clone-based operations.

mod probe;

pub use probe::{CloneFuse, DropProbe, FuseClone, ProbeCounter};
