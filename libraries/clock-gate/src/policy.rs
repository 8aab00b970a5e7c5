// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Peripheral power descriptors and the policies that combine them.
//!
//! A peripheral opts in to clock gating by implementing [`PeripheralPower`]:
//! its `POWER` constant holds, for each clock-enable register, the bits that
//! must be set for the peripheral to run. Tuples of peripherals are
//! descriptors too, standing for the OR of their members, and
//! [`FromPeripherals`] gives such a group a name.
//!
//! Each policy turns descriptors into a [`PolicyResult`]:
//!
//! | Policy                    | set             | reset           |
//! |---------------------------|-----------------|-----------------|
//! | `enable(P)`               | `P`             | 0               |
//! | `disable(P)`              | 0               | `P`             |
//! | `enable_except(E, X)`     | `E & (E ^ X)`   | 0               |
//! | `disable_except(D, X)`    | 0               | `D & (D ^ X)`   |
//! | `keep(E, D)`              | `E & (E ^ D)`   | `D & (E ^ D)`   |
//!
//! A bit named in both lists of a two-list policy cancels out and is left
//! alone.

use core::marker::PhantomData;

use crate::sequence::ValueSequence;
use crate::termwise::Termwise;

/// Clock-enable bits a peripheral needs, one mask per control register.
///
/// `N` is the number of control registers of the chip; a descriptor built for
/// another chip does not type-check. The engine trusts these bits and never
/// validates them against the hardware.
pub trait PeripheralPower<const N: usize> {
    const POWER: ValueSequence<N>;
}

/// A named group of peripherals whose descriptor is the OR of its members.
///
/// ```rust
/// # use clock_gate::{FromPeripherals, PeripheralPower, ValueSequence};
/// # struct Spi;
/// # impl PeripheralPower<2> for Spi { const POWER: ValueSequence<2> = ValueSequence::from_values([1, 0]); }
/// # struct Uart;
/// # impl PeripheralPower<2> for Uart { const POWER: ValueSequence<2> = ValueSequence::from_values([1, 4]); }
/// type BootSet = FromPeripherals<(Spi, Uart)>;
///
/// assert_eq!(<BootSet as PeripheralPower<2>>::POWER.as_array(), &[1, 4]);
/// ```
pub struct FromPeripherals<T>(PhantomData<T>);

impl<T: PeripheralPower<N>, const N: usize> PeripheralPower<N> for FromPeripherals<T> {
    const POWER: ValueSequence<N> = T::POWER;
}

macro_rules! peripheral_power_for_tuple {
    ($($name:ident),+) => {
        impl<$($name: PeripheralPower<N>,)+ const N: usize> PeripheralPower<N> for ($($name,)+) {
            const POWER: ValueSequence<N> = Termwise::Or.combine_n(&[$($name::POWER),+]);
        }
    };
}

peripheral_power_for_tuple!(P1);
peripheral_power_for_tuple!(P1, P2);
peripheral_power_for_tuple!(P1, P2, P3);
peripheral_power_for_tuple!(P1, P2, P3, P4);
peripheral_power_for_tuple!(P1, P2, P3, P4, P5);
peripheral_power_for_tuple!(P1, P2, P3, P4, P5, P6);
peripheral_power_for_tuple!(P1, P2, P3, P4, P5, P6, P7);
peripheral_power_for_tuple!(P1, P2, P3, P4, P5, P6, P7, P8);

/// The bits a policy sets and the bits it clears, per control register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolicyResult<const N: usize> {
    pub set: ValueSequence<N>,
    pub reset: ValueSequence<N>,
}

impl<const N: usize> PolicyResult<N> {
    pub const fn new(set: ValueSequence<N>, reset: ValueSequence<N>) -> Self {
        PolicyResult { set, reset }
    }

    /// Turn on every bit in `power`.
    pub const fn enable(power: ValueSequence<N>) -> Self {
        PolicyResult::new(power, ValueSequence::zero())
    }

    /// Turn off every bit in `power`.
    pub const fn disable(power: ValueSequence<N>) -> Self {
        PolicyResult::new(ValueSequence::zero(), power)
    }

    /// Turn on the bits of `enable` that are not also in `except`.
    pub const fn enable_except(enable: ValueSequence<N>, except: ValueSequence<N>) -> Self {
        PolicyResult::new(enable.and(&enable.xor(&except)), ValueSequence::zero())
    }

    /// Turn off the bits of `disable` that are not also in `except`.
    pub const fn disable_except(disable: ValueSequence<N>, except: ValueSequence<N>) -> Self {
        PolicyResult::new(ValueSequence::zero(), disable.and(&disable.xor(&except)))
    }

    /// Turn on bits only in `enable`, turn off bits only in `disable`, and
    /// leave bits in both alone.
    pub const fn keep(enable: ValueSequence<N>, disable: ValueSequence<N>) -> Self {
        let differ = enable.xor(&disable);
        PolicyResult::new(enable.and(&differ), disable.and(&differ))
    }

    /// Returns `true` if applying this result would not touch any register.
    pub const fn is_noop(&self) -> bool {
        self.set.is_zero() && self.reset.is_zero()
    }
}
