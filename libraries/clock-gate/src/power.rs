// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Chip adapters and the clock gating control interface.
//!
//! A chip crate implements [`PowerAdapter`] once, naming its clock-enable
//! registers and the bus used to reach them. [`PowerControl`] is then
//! available on the adapter and provides the policies:
//!
//! ```rust,ignore
//! type Boot = FromPeripherals<(Spi<2>, Usart<1>)>;
//! type Sleep = FromPeripherals<(Spi<2>,)>;
//! type Wake = FromPeripherals<(Usart<1>,)>;
//!
//! let power = Power::new();
//! power.enable::<Boot>();
//! power.disable_except::<Sleep, Wake>();
//! // sleep
//! power.enable_except::<Sleep, Wake>();
//! ```
//!
//! Every policy computes its masks in an inline `const` block, so the only
//! code generated for a call is the read-modify-write of each register the
//! policy actually changes.

use core::marker::PhantomData;

use crate::bus::RegisterBus;
use crate::mutator;
use crate::policy::{PeripheralPower, PolicyResult};
use crate::sequence::AddressTable;

/// Chip-specific half of clock gating: where the `N` clock-enable registers
/// are and how to reach them.
///
/// # Safety
///
/// Every address in `ADDRESSES` must be a readable and writable 32-bit
/// clock-enable register on the bus returned by `bus()`. Masked writes to
/// these registers must not break memory safety.
pub unsafe trait PowerAdapter<const N: usize> {
    type Bus: RegisterBus;

    /// Clock-enable register addresses, in descriptor order.
    const ADDRESSES: AddressTable<N>;

    fn bus(&self) -> &Self::Bus;
}

/// Clock gating policies, available on every [`PowerAdapter`].
///
/// Policy calls are not atomic. If interrupt handlers also touch the
/// clock-enable registers, the caller must mask interrupts around each call.
///
/// An empty peripheral list is not a descriptor, so it fails to build:
///
/// ```rust,compile_fail
/// use clock_gate::{AddressTable, FakeBus, PowerAdapter, PowerControl};
///
/// struct Chip {
///     bus: FakeBus<1>,
/// }
///
/// unsafe impl PowerAdapter<1> for Chip {
///     type Bus = FakeBus<1>;
///     const ADDRESSES: AddressTable<1> = AddressTable::new([0x1000]);
///     fn bus(&self) -> &FakeBus<1> {
///         &self.bus
///     }
/// }
///
/// let chip = Chip { bus: FakeBus::new([(0x1000, 0)]) };
/// chip.enable::<()>();
/// ```
///
/// Neither does a descriptor written for a chip with a different number of
/// clock-enable registers:
///
/// ```rust,compile_fail
/// use clock_gate::{AddressTable, FakeBus, PeripheralPower, PowerAdapter, PowerControl, ValueSequence};
///
/// struct Chip {
///     bus: FakeBus<3>,
/// }
///
/// unsafe impl PowerAdapter<3> for Chip {
///     type Bus = FakeBus<3>;
///     const ADDRESSES: AddressTable<3> = AddressTable::new([0x1000, 0x1004, 0x1008]);
///     fn bus(&self) -> &FakeBus<3> {
///         &self.bus
///     }
/// }
///
/// struct TwoRegisterTimer;
/// impl PeripheralPower<2> for TwoRegisterTimer {
///     const POWER: ValueSequence<2> = ValueSequence::from_values([1, 0]);
/// }
///
/// let chip = Chip { bus: FakeBus::new([(0x1000, 0), (0x1004, 0), (0x1008, 0)]) };
/// chip.enable::<TwoRegisterTimer>();
/// ```
pub trait PowerControl<const N: usize>: PowerAdapter<N> {
    /// Apply a precomputed set/reset pair.
    #[inline(always)]
    fn apply(&self, result: &PolicyResult<N>) {
        // Safety: `PowerAdapter` guarantees `ADDRESSES` are valid registers on
        // `bus()`.
        unsafe { mutator::modify_registers(self.bus(), &result.set, &result.reset, &Self::ADDRESSES) }
    }

    /// Enable the clocks of every peripheral in `P`.
    ///
    /// Bits are only ever added; nothing is cleared.
    #[inline(always)]
    fn enable<P: PeripheralPower<N>>(&self) {
        self.apply(&const { PolicyResult::enable(P::POWER) });
    }

    /// Disable the clocks of every peripheral in `P`.
    #[inline(always)]
    fn disable<P: PeripheralPower<N>>(&self) {
        self.apply(&const { PolicyResult::disable(P::POWER) });
    }

    /// Enable the clocks in `E`, except the bits also required by `X`, which
    /// are left as they are.
    #[inline(always)]
    fn enable_except<E: PeripheralPower<N>, X: PeripheralPower<N>>(&self) {
        self.apply(&const { PolicyResult::enable_except(E::POWER, X::POWER) });
    }

    /// Disable the clocks in `D`, except the bits also required by `X`, which
    /// are left as they are.
    #[inline(always)]
    fn disable_except<D: PeripheralPower<N>, X: PeripheralPower<N>>(&self) {
        self.apply(&const { PolicyResult::disable_except(D::POWER, X::POWER) });
    }

    /// Enable the clocks only in `E` and disable the clocks only in `D`. Bits
    /// required by both are left as they are.
    #[inline(always)]
    fn keep<E: PeripheralPower<N>, D: PeripheralPower<N>>(&self) {
        self.apply(&const { PolicyResult::keep(E::POWER, D::POWER) });
    }
}

impl<A: PowerAdapter<N>, const N: usize> PowerControl<N> for A {}

/// Generic operations that clock-like things are expected to support.
pub trait ClockInterface {
    fn is_enabled(&self) -> bool;
    fn enable(&self);
    fn disable(&self);
}

/// Clock control for a single peripheral (or group) `P` through adapter `A`.
///
/// Lets a peripheral driver that expects a [`ClockInterface`] switch its own
/// clocks without knowing the chip's register layout.
pub struct PeripheralClock<'a, A, P, const N: usize> {
    power: &'a A,
    _peripheral: PhantomData<P>,
}

impl<'a, A: PowerAdapter<N>, P: PeripheralPower<N>, const N: usize> PeripheralClock<'a, A, P, N> {
    pub const fn new(power: &'a A) -> Self {
        PeripheralClock {
            power,
            _peripheral: PhantomData,
        }
    }
}

impl<A: PowerAdapter<N>, P: PeripheralPower<N>, const N: usize> ClockInterface
    for PeripheralClock<'_, A, P, N>
{
    /// Returns `true` if every bit required by `P` is currently set.
    ///
    /// Registers in which `P` has no bits are not read.
    fn is_enabled(&self) -> bool {
        let power = const { P::POWER };
        for i in 0..N {
            let mask = power.get(i);
            if mask == 0 {
                continue;
            }
            // Safety: `PowerAdapter` guarantees `ADDRESSES` are valid
            // registers on `bus()`.
            let value = unsafe { self.power.bus().read(A::ADDRESSES.address(i)) };
            if value & mask != mask {
                return false;
            }
        }
        true
    }

    fn enable(&self) {
        PowerControl::<N>::enable::<P>(self.power);
    }

    fn disable(&self) {
        PowerControl::<N>::disable::<P>(self.power);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake_bus::FakeBus;
    use crate::sequence::ValueSequence;
    use crate::FromPeripherals;

    struct TestChip {
        bus: FakeBus<3>,
    }

    impl TestChip {
        fn new(values: [u32; 3]) -> TestChip {
            TestChip {
                bus: FakeBus::new([
                    (0x1000, values[0]),
                    (0x1004, values[1]),
                    (0x1008, values[2]),
                ]),
            }
        }

        fn registers(&self) -> [u32; 3] {
            [
                self.bus.value(0x1000),
                self.bus.value(0x1004),
                self.bus.value(0x1008),
            ]
        }
    }

    unsafe impl PowerAdapter<3> for TestChip {
        type Bus = FakeBus<3>;
        const ADDRESSES: AddressTable<3> = AddressTable::new([0x1000, 0x1004, 0x1008]);

        fn bus(&self) -> &FakeBus<3> {
            &self.bus
        }
    }

    struct PeripheralA;
    impl PeripheralPower<3> for PeripheralA {
        const POWER: ValueSequence<3> = ValueSequence::from_values([1, 0x4000, 8]);
    }

    struct PeripheralB;
    impl PeripheralPower<3> for PeripheralB {
        const POWER: ValueSequence<3> = ValueSequence::from_values([0, 0, 0x4000 | 4]);
    }

    struct OnlySecond;
    impl PeripheralPower<3> for OnlySecond {
        const POWER: ValueSequence<3> = ValueSequence::from_values([0, 0x20, 0]);
    }

    #[test]
    fn test_enable_two_peripherals() {
        let chip = TestChip::new([0x8000_0000, 0x2, 0]);
        chip.enable::<(PeripheralA, PeripheralB)>();

        assert_eq!(chip.registers(), [0x8000_0001, 0x4002, 0x400c]);
        assert_eq!(chip.bus.writes_to(0x1000), 1);
        assert_eq!(chip.bus.writes_to(0x1004), 1);
        assert_eq!(chip.bus.writes_to(0x1008), 1);
    }

    #[test]
    fn test_enable_only_adds_bits() {
        let before = [0xffff_0000, 0x0000_ffff, 0x1234_5678];
        let chip = TestChip::new(before);
        chip.enable::<PeripheralA>();

        let after = chip.registers();
        for i in 0..3 {
            assert_eq!(after[i], before[i] | PeripheralA::POWER.get(i));
        }
    }

    #[test]
    fn test_disable() {
        let chip = TestChip::new([0xff, 0xffff, 0xffff]);
        chip.disable::<PeripheralA>();

        assert_eq!(chip.registers(), [0xfe, 0xbfff, 0xfff7]);
    }

    #[test]
    fn test_untouched_registers_are_not_accessed() {
        let chip = TestChip::new([0, 0, 0]);
        chip.enable::<OnlySecond>();

        assert_eq!(chip.bus.accesses_to(0x1000), 0);
        assert_eq!(chip.bus.accesses_to(0x1004), 2);
        assert_eq!(chip.bus.accesses_to(0x1008), 0);
    }

    #[test]
    fn test_disable_except_keeps_excepted_peripheral() {
        let chip = TestChip::new([0, 0, 0]);
        chip.enable::<(PeripheralA, PeripheralB)>();
        chip.bus.clear_log();

        chip.disable_except::<FromPeripherals<(PeripheralA, PeripheralB)>, FromPeripherals<(PeripheralB,)>>();

        assert_eq!(chip.registers(), [0, 0, 0x4004]);
    }

    #[test]
    fn test_enable_except_identical_is_noop() {
        let chip = TestChip::new([0, 0, 0]);
        chip.enable_except::<PeripheralA, PeripheralA>();

        assert_eq!(chip.registers(), [0, 0, 0]);
        assert_eq!(chip.bus.access_count(), 0);
    }

    #[test]
    fn test_enable_except() {
        let chip = TestChip::new([0, 0, 0]);
        chip.enable_except::<(PeripheralA, PeripheralB), PeripheralB>();

        assert_eq!(chip.registers(), [1, 0x4000, 8]);
    }

    #[test]
    fn test_keep() {
        let chip = TestChip::new([0, 0x20, 0x4004]);
        chip.keep::<(PeripheralA, OnlySecond), (OnlySecond, PeripheralB)>();

        // A is forced on, B forced off, the shared bit is left as it was.
        assert_eq!(chip.registers(), [1, 0x4020, 8]);
    }

    #[test]
    fn test_apply_precomputed_result() {
        const SLEEP: PolicyResult<3> = PolicyResult::disable(PeripheralB::POWER);

        let chip = TestChip::new([0, 0, 0xffff]);
        chip.apply(&SLEEP);

        assert_eq!(chip.registers(), [0, 0, 0xbffb]);
        assert_eq!(chip.bus.access_count(), 2);
    }

    #[test]
    fn test_peripheral_clock() {
        let chip = TestChip::new([0, 0, 0]);
        let clock: PeripheralClock<'_, TestChip, PeripheralA, 3> = PeripheralClock::new(&chip);

        assert!(!clock.is_enabled());
        clock.enable();
        assert!(clock.is_enabled());
        assert_eq!(chip.registers(), [1, 0x4000, 8]);

        // Partially enabled is not enabled.
        chip.bus.set_value(0x1004, 0);
        assert!(!clock.is_enabled());

        clock.enable();
        clock.disable();
        assert!(!clock.is_enabled());
        assert_eq!(chip.registers(), [0, 0, 0]);
    }

    #[test]
    fn test_peripheral_clock_reads_only_used_registers() {
        let chip = TestChip::new([0, 0x20, 0]);
        let clock: PeripheralClock<'_, TestChip, OnlySecond, 3> = PeripheralClock::new(&chip);

        assert!(clock.is_enabled());
        assert_eq!(chip.bus.access_count(), 1);
        assert_eq!(chip.bus.accesses_to(0x1004), 1);
    }
}
