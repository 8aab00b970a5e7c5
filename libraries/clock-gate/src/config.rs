// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Compile-time configuration options for the clock gating engine.
//!
//! Options live in a `const` object instead of being `#[cfg]` switches so that
//! disabled code paths are still type-checked. Once checked, the constant
//! conditions fold away and a disabled option costs nothing in the binary.

/// Data structure holding compile-time configuration options.
pub(crate) struct Config {
    /// Whether every register modification should be traced to the debug
    /// output.
    ///
    /// If enabled, the mutator prints the register address together with the
    /// value read and the value written for each register it touches. This
    /// adds a formatted write per register, so it is meant for bring-up of a
    /// new chip adapter rather than for production images.
    pub(crate) trace_register_writes: bool,
}

/// The only location in this crate where `#[cfg(x)]` on Cargo features is
/// permitted.
pub(crate) const CONFIG: Config = Config {
    trace_register_writes: cfg!(feature = "trace_register_writes"),
};
