// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Peripheral clock gating for the STM32F1xx MCU.
//!
//! STM32F103: <https://www.st.com/en/microcontrollers-microprocessors/stm32f103.html>
//!
//! The RCC has three peripheral clock-enable registers, AHBENR, APB1ENR and
//! APB2ENR. Every power descriptor on this chip is a sequence of three masks
//! in that order.

#![crate_name = "stm32f1xx"]
#![crate_type = "rlib"]
#![no_std]

pub mod power;
pub mod rcc;

// Peripherals
pub mod spi;
pub mod usart;

pub use crate::power::{FromValues, Power};
