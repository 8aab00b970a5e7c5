// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Fixed-length sequences of register values and register addresses.
//!
//! Position `i` of every sequence refers to clock-enable register `i` of the
//! chip. Sequences are never modified in place: every operation returns a new
//! sequence, and every operation is a `const fn` so that descriptors can be
//! built and combined in `const` items.
//!
//! Operations that change the length take the result length as a const
//! generic parameter and check it at build time:
//!
//! ```rust
//! use clock_gate::ValueSequence;
//!
//! const REGS: ValueSequence<3> = ValueSequence::from_values([1, 2, 3]);
//! const TAIL: ValueSequence<2> = REGS.pop_front();
//! const MORE: ValueSequence<4> = REGS.push_back(4);
//!
//! assert_eq!(REGS.front(), 1);
//! assert_eq!(TAIL.as_array(), &[2, 3]);
//! assert_eq!(MORE.as_array(), &[1, 2, 3, 4]);
//! ```

use core::fmt;

/// An ordered, immutable sequence of `N` register values.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueSequence<const N: usize> {
    values: [u32; N],
}

impl<const N: usize> ValueSequence<N> {
    pub const fn from_values(values: [u32; N]) -> Self {
        ValueSequence { values }
    }

    /// The sequence with every position zero, which touches no bits.
    pub const fn zero() -> Self {
        ValueSequence { values: [0; N] }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Value at position `index`.
    ///
    /// Positions past the end read as zero, matching how shorter sequences
    /// are padded when combined.
    pub const fn get(&self, index: usize) -> u32 {
        if index < N {
            self.values[index]
        } else {
            0
        }
    }

    pub const fn as_array(&self) -> &[u32; N] {
        &self.values
    }

    /// Returns `true` if no position has any bit set.
    pub const fn is_zero(&self) -> bool {
        let mut i = 0;
        while i < N {
            if self.values[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// First value of the sequence. Fails to build for an empty sequence:
    ///
    /// ```rust,compile_fail
    /// use clock_gate::ValueSequence;
    ///
    /// let first = ValueSequence::<0>::zero().front();
    /// ```
    pub const fn front(&self) -> u32 {
        const { assert!(N > 0, "front() of an empty ValueSequence") };
        self.values[0]
    }

    /// The sequence without its first value. `M` must be `N - 1`.
    ///
    /// ```rust,compile_fail
    /// use clock_gate::ValueSequence;
    ///
    /// let tail: ValueSequence<3> = ValueSequence::from_values([1, 2, 3]).pop_front();
    /// ```
    pub const fn pop_front<const M: usize>(&self) -> ValueSequence<M> {
        const { assert!(N > 0 && M + 1 == N, "pop_front() must drop exactly one value") };
        let mut values = [0; M];
        let mut i = 0;
        while i < M {
            values[i] = self.values[i + 1];
            i += 1;
        }
        ValueSequence { values }
    }

    /// The sequence with `value` prepended. `M` must be `N + 1`.
    ///
    /// ```rust,compile_fail
    /// use clock_gate::ValueSequence;
    ///
    /// let longer: ValueSequence<2> = ValueSequence::from_values([1, 2]).push_front(0);
    /// ```
    pub const fn push_front<const M: usize>(&self, value: u32) -> ValueSequence<M> {
        const { assert!(M == N + 1, "push_front() must add exactly one value") };
        let mut values = [0; M];
        values[0] = value;
        let mut i = 0;
        while i < N {
            values[i + 1] = self.values[i];
            i += 1;
        }
        ValueSequence { values }
    }

    /// The sequence with `value` appended. `M` must be `N + 1`.
    ///
    /// ```rust,compile_fail
    /// use clock_gate::ValueSequence;
    ///
    /// let longer: ValueSequence<5> = ValueSequence::from_values([1, 2]).push_back(3);
    /// ```
    pub const fn push_back<const M: usize>(&self, value: u32) -> ValueSequence<M> {
        const { assert!(M == N + 1, "push_back() must add exactly one value") };
        let mut values = [0; M];
        let mut i = 0;
        while i < N {
            values[i] = self.values[i];
            i += 1;
        }
        values[N] = value;
        ValueSequence { values }
    }
}

impl<const N: usize> Default for ValueSequence<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> fmt::Debug for ValueSequence<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:#x}", value)?;
        }
        f.write_str("]")
    }
}

/// Addresses of the chip's `N` clock-enable registers.
///
/// Parallel to every [`ValueSequence<N>`] handed to the mutator: position `i`
/// of a value sequence is written to `address(i)`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct AddressTable<const N: usize> {
    addresses: [usize; N],
}

impl<const N: usize> AddressTable<N> {
    pub const fn new(addresses: [usize; N]) -> Self {
        AddressTable { addresses }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn address(&self, index: usize) -> usize {
        self.addresses[index]
    }

    pub const fn as_array(&self) -> &[usize; N] {
        &self.addresses
    }
}

impl<const N: usize> fmt::Debug for AddressTable<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list()
            .entries(self.addresses.iter().map(|a| DebugAddress(*a)))
            .finish()
    }
}

struct DebugAddress(usize);

impl fmt::Debug for DebugAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}
