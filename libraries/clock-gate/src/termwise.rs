// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Termwise boolean combination of value sequences.
//!
//! ```text
//!   a        = [1, 4,   8, 16]
//!   b        = [1, 5,  96, 17]
//!
//!   a AND b  = [1, 4,   0, 16]
//!   a OR  b  = [1, 5, 104, 17]
//!   a XOR b  = [0, 1, 104,  1]
//! ```
//!
//! Sequences of different lengths are combined as if the shorter one were
//! padded with zeros, so the result is as long as the longer input.

use crate::sequence::ValueSequence;

/// Boolean operator applied to each position independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termwise {
    And,
    Or,
    Xor,
}

impl Termwise {
    pub const fn apply(self, a: u32, b: u32) -> u32 {
        match self {
            Termwise::And => a & b,
            Termwise::Or => a | b,
            Termwise::Xor => a ^ b,
        }
    }

    /// Combine two sequences position by position.
    ///
    /// `M` must equal the longer of `A` and `B`; anything else fails to
    /// build:
    ///
    /// ```rust,compile_fail
    /// use clock_gate::{Termwise, ValueSequence};
    ///
    /// let a = ValueSequence::from_values([1, 2]);
    /// let b = ValueSequence::from_values([1, 2, 3]);
    /// let short: ValueSequence<2> = Termwise::And.combine(&a, &b);
    /// ```
    pub const fn combine<const A: usize, const B: usize, const M: usize>(
        self,
        a: &ValueSequence<A>,
        b: &ValueSequence<B>,
    ) -> ValueSequence<M> {
        const {
            assert!(
                M == if A > B { A } else { B },
                "termwise result must be as long as the longer input"
            )
        };
        let mut values = [0; M];
        let mut i = 0;
        while i < M {
            // `get` reads missing trailing positions as zero.
            values[i] = self.apply(a.get(i), b.get(i));
            i += 1;
        }
        ValueSequence::from_values(values)
    }

    /// Left fold of [`Termwise::combine`] across `sequences`.
    ///
    /// All sequences must have the same length `N`. To fold sequences of
    /// different lengths, chain [`Termwise::combine`], which zero-pads the
    /// shorter input.
    ///
    /// A single sequence is returned unchanged. An empty slice panics, which
    /// is a build error when evaluated in a `const` item.
    pub const fn combine_n<const N: usize>(self, sequences: &[ValueSequence<N>]) -> ValueSequence<N> {
        assert!(!sequences.is_empty(), "combine_n() needs at least one sequence");
        let mut result = sequences[0];
        let mut i = 1;
        while i < sequences.len() {
            result = self.combine(&result, &sequences[i]);
            i += 1;
        }
        result
    }
}

impl<const N: usize> ValueSequence<N> {
    pub const fn and(&self, other: &ValueSequence<N>) -> ValueSequence<N> {
        Termwise::And.combine(self, other)
    }

    pub const fn or(&self, other: &ValueSequence<N>) -> ValueSequence<N> {
        Termwise::Or.combine(self, other)
    }

    pub const fn xor(&self, other: &ValueSequence<N>) -> ValueSequence<N> {
        Termwise::Xor.combine(self, other)
    }
}
