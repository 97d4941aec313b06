// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared live-instance counter for [`DropProbe`] elements.
///
/// Cloning the counter clones the handle, not the counts; every probe
/// created from any clone reports to the same totals.
#[derive(Clone, Default)]
pub struct ProbeCounter {
    live: Arc<AtomicUsize>,
    drops: Arc<AtomicUsize>,
}

impl ProbeCounter {
    /// Creates a counter with zero live probes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of probes currently alive.
    pub fn live(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    /// Total number of probe drops observed.
    pub fn drops(&self) -> usize {
        self.drops.load(Ordering::SeqCst)
    }

    /// Creates a probe carrying `value`, tracked by this counter.
    pub fn probe(&self, value: u32) -> DropProbe {
        self.live.fetch_add(1, Ordering::SeqCst);
        DropProbe {
            value,
            counter: self.clone(),
        }
    }
}

/// Element type that reports cloning and destruction to its
/// [`ProbeCounter`].
///
/// Every construction (including clones) raises the live count by one;
/// every drop lowers it. A container that neither leaks nor double-drops
/// leaves the live count equal to the number of elements it still holds.
#[derive(Debug)]
pub struct DropProbe {
    value: u32,
    counter: ProbeCounter,
}

impl DropProbe {
    /// The payload this probe carries.
    pub fn value(&self) -> u32 {
        self.value
    }
}

impl Clone for DropProbe {
    fn clone(&self) -> Self {
        self.counter.probe(self.value)
    }
}

impl Drop for DropProbe {
    fn drop(&mut self) {
        self.counter.live.fetch_sub(1, Ordering::SeqCst);
        self.counter.drops.fetch_add(1, Ordering::SeqCst);
    }
}

impl PartialEq for DropProbe {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl core::fmt::Debug for ProbeCounter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProbeCounter")
            .field("live", &self.live())
            .field("drops", &self.drops())
            .finish()
    }
}

/// Budget of successful clones handed out to [`FuseClone`] elements.
///
/// Each successful clone burns one unit; the clone attempted once the
/// budget is exhausted panics. Drop accounting runs through the embedded
/// [`ProbeCounter`], so unwind paths can be checked for leaks.
#[derive(Clone)]
pub struct CloneFuse {
    remaining: Arc<AtomicUsize>,
    counter: ProbeCounter,
}

impl CloneFuse {
    /// Allows `allowed` successful clones before the fuse burns out.
    pub fn new(allowed: usize) -> Self {
        Self {
            remaining: Arc::new(AtomicUsize::new(allowed)),
            counter: ProbeCounter::new(),
        }
    }

    /// The probe counter shared by every element armed from this fuse.
    pub fn counter(&self) -> &ProbeCounter {
        &self.counter
    }

    /// Creates an element carrying `value`, tracked by this fuse.
    pub fn armed(&self, value: u32) -> FuseClone {
        FuseClone {
            remaining: self.remaining.clone(),
            probe: self.counter.probe(value),
        }
    }
}

/// Element type whose `clone` panics once its [`CloneFuse`] runs out.
#[derive(Debug)]
pub struct FuseClone {
    remaining: Arc<AtomicUsize>,
    probe: DropProbe,
}

impl FuseClone {
    /// The payload this element carries.
    pub fn value(&self) -> u32 {
        self.probe.value()
    }
}

impl Clone for FuseClone {
    fn clone(&self) -> Self {
        let remaining = self.remaining.load(Ordering::SeqCst);
        if remaining == 0 {
            panic!("clone fuse burned out");
        }
        self.remaining.store(remaining - 1, Ordering::SeqCst);

        Self {
            remaining: self.remaining.clone(),
            probe: self.probe.clone(),
        }
    }
}
