// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Access to the clock-enable registers.

use tock_registers::interfaces::{Readable, Writeable};
use tock_registers::registers::ReadWrite;

/// Volatile 32-bit register access by address.
///
/// The mutator only ever goes through this trait, so a chip adapter can swap
/// real memory-mapped I/O for a recording double in tests.
pub trait RegisterBus {
    /// Read the register at `address`.
    ///
    /// # Safety
    ///
    /// `address` must name a readable register on this bus.
    unsafe fn read(&self, address: usize) -> u32;

    /// Write `value` to the register at `address`.
    ///
    /// # Safety
    ///
    /// `address` must name a writable register on this bus, and the write
    /// must not violate invariants that other code relies on.
    unsafe fn write(&self, address: usize, value: u32);
}

/// Memory-mapped register access.
///
/// Every access is a single volatile load or store, so the compiler never
/// merges, reorders or drops them.
#[derive(Clone, Copy, Debug, Default)]
pub struct MmioBus;

impl MmioBus {
    pub const fn new() -> MmioBus {
        MmioBus
    }

    unsafe fn register(address: usize) -> &'static ReadWrite<u32> {
        unsafe { &*(address as *const ReadWrite<u32>) }
    }
}

impl RegisterBus for MmioBus {
    #[inline(always)]
    unsafe fn read(&self, address: usize) -> u32 {
        unsafe { Self::register(address).get() }
    }

    #[inline(always)]
    unsafe fn write(&self, address: usize, value: u32) {
        unsafe { Self::register(address).set(value) }
    }
}

impl<B: RegisterBus + ?Sized> RegisterBus for &B {
    #[inline(always)]
    unsafe fn read(&self, address: usize) -> u32 {
        unsafe { (**self).read(address) }
    }

    #[inline(always)]
    unsafe fn write(&self, address: usize, value: u32) {
        unsafe { (**self).write(address, value) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mmio_bus_reads_and_writes_memory() {
        // A plain word stands in for a memory-mapped register.
        let mut word: u32 = 0x0000_0101;
        let address = core::ptr::addr_of_mut!(word) as usize;
        let bus = MmioBus::new();

        unsafe {
            assert_eq!(bus.read(address), 0x0000_0101);
            bus.write(address, 0x4000_0008);
            assert_eq!(bus.read(address), 0x4000_0008);
        }
        assert_eq!(word, 0x4000_0008);
    }
}
