// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! A [`RegisterBus`] backed by plain memory that records every access.
//!
//! Intended for tests of chip adapters and policies: register contents can be
//! seeded and inspected, and the access log shows exactly which addresses
//! were read and written, in order.
//!
//! The log holds at most [`ACCESS_LOG_LEN`] entries. Any access beyond that
//! panics rather than silently dropping history, so a test driving more
//! accesses than that must call [`FakeBus::clear_log`] between steps.

use core::cell::Cell;

use crate::bus::RegisterBus;

/// Maximum number of accesses a [`FakeBus`] records before
/// [`FakeBus::clear_log`] must be called.
pub const ACCESS_LOG_LEN: usize = 64;

/// One recorded bus access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Read { address: usize, value: u32 },
    Write { address: usize, value: u32 },
}

impl Access {
    pub const fn address(&self) -> usize {
        match *self {
            Access::Read { address, .. } | Access::Write { address, .. } => address,
        }
    }
}

/// Fake bus with `R` registers.
///
/// # Panics
///
/// Reads and writes panic once [`ACCESS_LOG_LEN`] accesses have been
/// recorded since creation or the last [`FakeBus::clear_log`], and on any
/// address that is not one of the `R` registers.
pub struct FakeBus<const R: usize> {
    addresses: [usize; R],
    values: [Cell<u32>; R],
    log: [Cell<Option<Access>>; ACCESS_LOG_LEN],
    log_len: Cell<usize>,
}

impl<const R: usize> FakeBus<R> {
    /// Create a bus modelling the given `(address, initial value)` registers.
    pub fn new(registers: [(usize, u32); R]) -> FakeBus<R> {
        FakeBus {
            addresses: registers.map(|(address, _)| address),
            values: registers.map(|(_, value)| Cell::new(value)),
            log: [const { Cell::new(None) }; ACCESS_LOG_LEN],
            log_len: Cell::new(0),
        }
    }

    fn slot(&self, address: usize) -> &Cell<u32> {
        match self.addresses.iter().position(|a| *a == address) {
            Some(index) => &self.values[index],
            None => panic!("FakeBus: no register at {:#010x}", address),
        }
    }

    fn record(&self, access: Access) {
        let len = self.log_len.get();
        if len >= ACCESS_LOG_LEN {
            panic!("FakeBus: access log full");
        }
        self.log[len].set(Some(access));
        self.log_len.set(len + 1);
    }

    /// Current contents of the register at `address`, without logging.
    pub fn value(&self, address: usize) -> u32 {
        self.slot(address).get()
    }

    /// Overwrite the register at `address`, without logging.
    pub fn set_value(&self, address: usize, value: u32) {
        self.slot(address).set(value);
    }

    /// Recorded accesses, oldest first.
    pub fn accesses(&self) -> impl Iterator<Item = Access> + '_ {
        self.log[..self.log_len.get()].iter().filter_map(Cell::get)
    }

    pub fn access_count(&self) -> usize {
        self.log_len.get()
    }

    /// Number of reads and writes that touched `address`.
    pub fn accesses_to(&self, address: usize) -> usize {
        self.accesses().filter(|a| a.address() == address).count()
    }

    /// Number of writes to `address`.
    pub fn writes_to(&self, address: usize) -> usize {
        self.accesses()
            .filter(|a| matches!(a, Access::Write { address: w, .. } if *w == address))
            .count()
    }

    /// Forget every recorded access, making room for [`ACCESS_LOG_LEN`]
    /// more. Register contents are kept.
    pub fn clear_log(&self) {
        for entry in self.log.iter() {
            entry.set(None);
        }
        self.log_len.set(0);
    }
}

impl<const R: usize> RegisterBus for FakeBus<R> {
    unsafe fn read(&self, address: usize) -> u32 {
        let value = self.slot(address).get();
        self.record(Access::Read { address, value });
        value
    }

    unsafe fn write(&self, address: usize, value: u32) {
        self.slot(address).set(value);
        self.record(Access::Write { address, value });
    }
}
