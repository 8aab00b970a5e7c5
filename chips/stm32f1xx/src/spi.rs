// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Serial peripheral interface (SPI) clock requirements.
//!
//! Only the power descriptor is defined here; transfers are handled by the
//! SPI driver.

use clock_gate::{PeripheralPower, ValueSequence};

use crate::rcc::{AHBENR, APB1ENR, APB2ENR, ENABLE_REGISTER_COUNT};

/// SPI instance `INSTANCE` (1 or 2).
///
/// Each instance needs DMA1 for transfers and the GPIO port its default pins
/// are on. Only instances that exist on the chip have a descriptor:
///
/// ```rust,compile_fail
/// use clock_gate::PeripheralPower;
/// use stm32f1xx::spi::Spi;
///
/// let power = <Spi<3> as PeripheralPower<3>>::POWER;
/// ```
pub struct Spi<const INSTANCE: u8>;

/// SPI1 on APB2, pins on port A.
impl PeripheralPower<ENABLE_REGISTER_COUNT> for Spi<1> {
    const POWER: ValueSequence<ENABLE_REGISTER_COUNT> = ValueSequence::from_values([
        AHBENR::DMA1EN::SET.value,
        0,
        APB2ENR::SPI1EN::SET.value | APB2ENR::IOPAEN::SET.value,
    ]);
}

/// SPI2 on APB1, pins on port B.
impl PeripheralPower<ENABLE_REGISTER_COUNT> for Spi<2> {
    const POWER: ValueSequence<ENABLE_REGISTER_COUNT> = ValueSequence::from_values([
        AHBENR::DMA1EN::SET.value,
        APB1ENR::SPI2EN::SET.value,
        APB2ENR::IOPBEN::SET.value,
    ]);
}
