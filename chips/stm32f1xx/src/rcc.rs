// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Reset and clock control (RCC) peripheral clock-enable registers.

use clock_gate::AddressTable;
use tock_registers::register_bitfields;

/// RCC base address.
pub const RCC_BASE: usize = 0x4002_1000;

/// AHB peripheral clock enable register
pub const AHBENR_ADDRESS: usize = RCC_BASE + 0x14;
/// APB2 peripheral clock enable register
pub const APB2ENR_ADDRESS: usize = RCC_BASE + 0x18;
/// APB1 peripheral clock enable register
pub const APB1ENR_ADDRESS: usize = RCC_BASE + 0x1C;

/// Number of clock-enable registers, and so the length of every power
/// descriptor on this chip.
pub const ENABLE_REGISTER_COUNT: usize = 3;

/// Clock-enable registers in descriptor order. This is not the order they
/// appear in memory.
pub const ENABLE_REGISTERS: AddressTable<ENABLE_REGISTER_COUNT> =
    AddressTable::new([AHBENR_ADDRESS, APB1ENR_ADDRESS, APB2ENR_ADDRESS]);

register_bitfields![u32,
    pub AHBENR [
        /// CRC clock enable
        CRCEN OFFSET(6) NUMBITS(1) [],
        /// FLITF clock enable
        FLITFEN OFFSET(4) NUMBITS(1) [],
        /// SRAM interface clock enable
        SRAMEN OFFSET(2) NUMBITS(1) [],
        /// DMA2 clock enable
        DMA2EN OFFSET(1) NUMBITS(1) [],
        /// DMA1 clock enable
        DMA1EN OFFSET(0) NUMBITS(1) []
    ],
    pub APB2ENR [
        /// USART1 clock enable
        USART1EN OFFSET(14) NUMBITS(1) [],
        /// SPI1 clock enable
        SPI1EN OFFSET(12) NUMBITS(1) [],
        /// TIM1 timer clock enable
        TIM1EN OFFSET(11) NUMBITS(1) [],
        /// ADC2 interface clock enable
        ADC2EN OFFSET(10) NUMBITS(1) [],
        /// ADC1 interface clock enable
        ADC1EN OFFSET(9) NUMBITS(1) [],
        /// I/O port E clock enable
        IOPEEN OFFSET(6) NUMBITS(1) [],
        /// I/O port D clock enable
        IOPDEN OFFSET(5) NUMBITS(1) [],
        /// I/O port C clock enable
        IOPCEN OFFSET(4) NUMBITS(1) [],
        /// I/O port B clock enable
        IOPBEN OFFSET(3) NUMBITS(1) [],
        /// I/O port A clock enable
        IOPAEN OFFSET(2) NUMBITS(1) [],
        /// Alternate function I/O clock enable
        AFIOEN OFFSET(0) NUMBITS(1) []
    ],
    pub APB1ENR [
        /// DAC interface clock enable
        DACEN OFFSET(29) NUMBITS(1) [],
        /// Power interface clock enable
        PWREN OFFSET(28) NUMBITS(1) [],
        /// Backup interface clock enable
        BKPEN OFFSET(27) NUMBITS(1) [],
        /// CAN clock enable
        CANEN OFFSET(25) NUMBITS(1) [],
        /// USB clock enable
        USBEN OFFSET(23) NUMBITS(1) [],
        /// I2C 2 clock enable
        I2C2EN OFFSET(22) NUMBITS(1) [],
        /// I2C 1 clock enable
        I2C1EN OFFSET(21) NUMBITS(1) [],
        /// USART 3 clock enable
        USART3EN OFFSET(18) NUMBITS(1) [],
        /// USART 2 clock enable
        USART2EN OFFSET(17) NUMBITS(1) [],
        /// SPI 2 clock enable
        SPI2EN OFFSET(14) NUMBITS(1) [],
        /// Window watchdog clock enable
        WWDGEN OFFSET(11) NUMBITS(1) [],
        /// Timer 4 clock enable
        TIM4EN OFFSET(2) NUMBITS(1) [],
        /// Timer 3 clock enable
        TIM3EN OFFSET(1) NUMBITS(1) [],
        /// Timer 2 clock enable
        TIM2EN OFFSET(0) NUMBITS(1) []
    ]
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_addresses() {
        assert_eq!(ENABLE_REGISTERS.as_array(), &[0x4002_1014, 0x4002_101C, 0x4002_1018]);
    }

    #[test]
    fn test_enable_bits() {
        assert_eq!(AHBENR::DMA1EN::SET.value, 1);
        assert_eq!(APB1ENR::SPI2EN::SET.value, 0x4000);
        assert_eq!(APB2ENR::IOPAEN::SET.value, 4);
        assert_eq!(APB2ENR::IOPBEN::SET.value, 8);
        assert_eq!(APB2ENR::USART1EN::SET.value, 0x4000);
    }
}
