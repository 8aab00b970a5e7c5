// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Masked read-modify-write of the clock-enable registers.

use crate::bus::RegisterBus;
use crate::config::CONFIG;
use crate::debug;
use crate::sequence::{AddressTable, ValueSequence};

/// Apply `set` and `reset` to the registers in `addresses`.
///
/// For each position `i` with a non-zero `set[i]` or `reset[i]`, the register
/// at `addresses[i]` is read once and written once:
///
/// ```text
/// reg = (reg & !reset[i]) | set[i]
/// ```
///
/// Positions where both masks are zero are skipped, so that register is not
/// accessed at all. A bit present in both masks ends up set.
///
/// When the masks are constants, as they are for every policy in
/// [`PowerControl`](crate::PowerControl), the skip decisions fold away at
/// compile time and only the loads and stores for touched registers remain.
///
/// # Safety
///
/// Every address in `addresses` whose position is touched must be a valid,
/// readable and writable register on `bus`.
#[inline(always)]
pub unsafe fn modify_registers<B: RegisterBus + ?Sized, const N: usize>(
    bus: &B,
    set: &ValueSequence<N>,
    reset: &ValueSequence<N>,
    addresses: &AddressTable<N>,
) {
    for i in 0..N {
        let set = set.get(i);
        let reset = reset.get(i);
        if set == 0 && reset == 0 {
            continue;
        }

        let address = addresses.address(i);
        let old = unsafe { bus.read(address) };
        let new = (old & !reset) | set;
        unsafe { bus.write(address, new) };

        if CONFIG.trace_register_writes {
            debug!("clock gate: {:#010x}: {:#010x} -> {:#010x}", address, old, new);
        }
    }
}
