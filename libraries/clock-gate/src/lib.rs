// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Compile-time peripheral clock gating.
//!
//! Peripherals declare which bits they need in each of a chip's clock-enable
//! registers as a [`ValueSequence`], one element per register. Policies
//! ([`PowerControl::enable`], [`PowerControl::disable_except`], ...) combine
//! these descriptors termwise into a pair of set/reset masks, and the
//! [`mutator`] applies them with one read-modify-write per register that has
//! something to change.
//!
//! All combination happens in `const` evaluation. At run time only the final
//! masked register writes remain.
//!
//! ```rust
//! use clock_gate::{AddressTable, FakeBus, PeripheralPower, PowerAdapter, PowerControl, ValueSequence};
//!
//! struct Chip {
//!     bus: FakeBus<2>,
//! }
//!
//! unsafe impl PowerAdapter<2> for Chip {
//!     type Bus = FakeBus<2>;
//!     const ADDRESSES: AddressTable<2> = AddressTable::new([0x1000, 0x1004]);
//!     fn bus(&self) -> &FakeBus<2> {
//!         &self.bus
//!     }
//! }
//!
//! struct Timer;
//! impl PeripheralPower<2> for Timer {
//!     const POWER: ValueSequence<2> = ValueSequence::from_values([0, 0x10]);
//! }
//!
//! let chip = Chip { bus: FakeBus::new([(0x1000, 0), (0x1004, 0)]) };
//! chip.enable::<Timer>();
//! assert_eq!(chip.bus.value(0x1004), 0x10);
//! assert_eq!(chip.bus.accesses_to(0x1000), 0);
//! ```
//!
//! Policy calls are not atomic with respect to interrupts. If interrupt
//! handlers also modify the clock-enable registers, the caller must mask
//! interrupts around each call.

#![no_std]

pub mod bus;
pub mod debug;
pub mod fake_bus;
pub mod mutator;
pub mod policy;
pub mod power;
pub mod sequence;
pub mod termwise;

mod config;

pub use crate::bus::{MmioBus, RegisterBus};
pub use crate::fake_bus::{Access, FakeBus};
pub use crate::policy::{FromPeripherals, PeripheralPower, PolicyResult};
pub use crate::power::{ClockInterface, PeripheralClock, PowerAdapter, PowerControl};
pub use crate::sequence::{AddressTable, ValueSequence};
pub use crate::termwise::Termwise;
