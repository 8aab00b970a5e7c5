// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Universal synchronous asynchronous receiver transmitter (USART) clock
//! requirements.

use clock_gate::{PeripheralPower, ValueSequence};

use crate::rcc::{AHBENR, APB1ENR, APB2ENR, ENABLE_REGISTER_COUNT};

/// USART instance `INSTANCE` (1, 2 or 3).
pub struct Usart<const INSTANCE: u8>;

/// USART1 on APB2, TX/RX on PA9/PA10.
impl PeripheralPower<ENABLE_REGISTER_COUNT> for Usart<1> {
    const POWER: ValueSequence<ENABLE_REGISTER_COUNT> = ValueSequence::from_values([
        AHBENR::DMA1EN::SET.value,
        0,
        APB2ENR::USART1EN::SET.value | APB2ENR::IOPAEN::SET.value,
    ]);
}

/// USART2 on APB1, TX/RX on PA2/PA3.
impl PeripheralPower<ENABLE_REGISTER_COUNT> for Usart<2> {
    const POWER: ValueSequence<ENABLE_REGISTER_COUNT> = ValueSequence::from_values([
        AHBENR::DMA1EN::SET.value,
        APB1ENR::USART2EN::SET.value,
        APB2ENR::IOPAEN::SET.value,
    ]);
}

/// USART3 on APB1, TX/RX on PB10/PB11.
impl PeripheralPower<ENABLE_REGISTER_COUNT> for Usart<3> {
    const POWER: ValueSequence<ENABLE_REGISTER_COUNT> = ValueSequence::from_values([
        AHBENR::DMA1EN::SET.value,
        APB1ENR::USART3EN::SET.value,
        APB2ENR::IOPBEN::SET.value,
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clock_gate::FromPeripherals;

    #[test]
    fn test_usart1_power() {
        assert_eq!(Usart::<1>::POWER.as_array(), &[1, 0, 0x4004]);
    }

    #[test]
    fn test_all_usarts() {
        type All = FromPeripherals<(Usart<1>, Usart<2>, Usart<3>)>;
        assert_eq!(
            <All as PeripheralPower<ENABLE_REGISTER_COUNT>>::POWER.as_array(),
            &[1, 0x0006_0000, 0x400c]
        );
    }
}
