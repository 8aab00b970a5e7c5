// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Clock gating adapter for the RCC enable registers.
//!
//! ```rust,ignore
//! use clock_gate::{FromPeripherals, PowerControl};
//! use stm32f1xx::{spi::Spi, usart::Usart, Power};
//!
//! type PowerInit = FromPeripherals<(Spi<2>, Usart<1>)>;
//! type PowerDown = FromPeripherals<(Spi<2>,)>;
//! type PowerWake = FromPeripherals<(Usart<1>,)>;
//!
//! let power = Power::new();
//! power.enable::<PowerInit>();
//! power.disable_except::<PowerDown, PowerWake>();
//! ```

use clock_gate::{AddressTable, MmioBus, PeripheralPower, PowerAdapter, RegisterBus, ValueSequence};

use crate::rcc;

/// Clock gating for the STM32F1 RCC.
///
/// Uses memory-mapped I/O by default. Tests construct it over a
/// [`FakeBus`](clock_gate::FakeBus) with [`Power::with_bus`].
pub struct Power<B: RegisterBus = MmioBus> {
    bus: B,
}

impl Power<MmioBus> {
    pub const fn new() -> Self {
        Power { bus: MmioBus::new() }
    }
}

impl<B: RegisterBus> Power<B> {
    pub const fn with_bus(bus: B) -> Self {
        Power { bus }
    }
}

// Safety: `ENABLE_REGISTERS` are the RCC clock-enable registers, which are
// always mapped, readable and writable, and only gate peripheral clocks.
unsafe impl<B: RegisterBus> PowerAdapter<{ rcc::ENABLE_REGISTER_COUNT }> for Power<B> {
    type Bus = B;

    const ADDRESSES: AddressTable<{ rcc::ENABLE_REGISTER_COUNT }> = rcc::ENABLE_REGISTERS;

    fn bus(&self) -> &B {
        &self.bus
    }
}

/// Descriptor built from explicit register values, for combinations not tied
/// to a peripheral driver.
///
/// ```rust
/// use clock_gate::PeripheralPower;
/// use stm32f1xx::FromValues;
///
/// type Backup = FromValues<0, 0x1800_0000>;
/// assert_eq!(<Backup as PeripheralPower<3>>::POWER.as_array(), &[0, 0x1800_0000, 0]);
/// ```
pub struct FromValues<const AHBENR: u32 = 0, const APB1ENR: u32 = 0, const APB2ENR: u32 = 0>;

impl<const AHBENR: u32, const APB1ENR: u32, const APB2ENR: u32>
    PeripheralPower<{ rcc::ENABLE_REGISTER_COUNT }> for FromValues<AHBENR, APB1ENR, APB2ENR>
{
    const POWER: ValueSequence<{ rcc::ENABLE_REGISTER_COUNT }> =
        ValueSequence::from_values([AHBENR, APB1ENR, APB2ENR]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rcc::{AHBENR_ADDRESS, APB1ENR_ADDRESS, APB2ENR_ADDRESS};
    use crate::spi::Spi;
    use crate::usart::Usart;
    use clock_gate::{Access, ClockInterface, FakeBus, FromPeripherals, PeripheralClock, PowerControl};

    type PowerInit = FromPeripherals<(Spi<2>, Usart<1>)>;
    type PowerDown = FromPeripherals<(Spi<2>,)>;
    type PowerWake = FromPeripherals<(Usart<1>,)>;

    // Reset values: SRAM and FLITF clocks are on after reset.
    const AHBENR_RESET: u32 = 0x14;

    fn power() -> Power<FakeBus<3>> {
        Power::with_bus(FakeBus::new([
            (AHBENR_ADDRESS, AHBENR_RESET),
            (APB1ENR_ADDRESS, 0),
            (APB2ENR_ADDRESS, 0),
        ]))
    }

    fn registers(power: &Power<FakeBus<3>>) -> [u32; 3] {
        [
            power.bus().value(AHBENR_ADDRESS),
            power.bus().value(APB1ENR_ADDRESS),
            power.bus().value(APB2ENR_ADDRESS),
        ]
    }

    #[test]
    fn test_boot_sleep_wake() {
        let power = power();

        power.enable::<PowerInit>();
        assert_eq!(registers(&power), [AHBENR_RESET | 1, 0x4000, 0x400c]);

        // DMA1 is shared with the wake set, so it stays on.
        power.disable_except::<PowerDown, PowerWake>();
        assert_eq!(registers(&power), [AHBENR_RESET | 1, 0, 0x4004]);

        power.enable_except::<PowerDown, PowerWake>();
        assert_eq!(registers(&power), [AHBENR_RESET | 1, 0x4000, 0x400c]);
    }

    #[test]
    fn test_shared_bits_skip_registers() {
        let power = power();

        // SPI2 and USART1 only share DMA1, so nothing is written to AHBENR.
        power.disable_except::<PowerDown, PowerWake>();

        assert_eq!(power.bus().accesses_to(AHBENR_ADDRESS), 0);
        let writes: [Access; 2] = [
            Access::Write {
                address: APB1ENR_ADDRESS,
                value: 0,
            },
            Access::Write {
                address: APB2ENR_ADDRESS,
                value: 0,
            },
        ];
        for write in writes {
            assert!(power.bus().accesses().any(|a| a == write));
        }
        assert_eq!(power.bus().access_count(), 4);
    }

    #[test]
    fn test_from_values() {
        let power = power();

        power.enable::<FromValues<0, { rcc::APB1ENR::PWREN::SET.value }>>();
        assert_eq!(registers(&power), [AHBENR_RESET, 0x1000_0000, 0]);
        assert_eq!(power.bus().access_count(), 2);

        // A default `FromValues` touches nothing.
        power.bus().clear_log();
        power.keep::<FromValues, FromValues>();
        assert_eq!(power.bus().access_count(), 0);
    }

    #[test]
    fn test_keep() {
        let power = power();
        power.enable::<Spi<2>>();

        // USART1 on, SPI2 off, the DMA1 bit they share untouched.
        power.keep::<Usart<1>, Spi<2>>();
        assert_eq!(registers(&power), [AHBENR_RESET | 1, 0, 0x4004]);
    }

    #[test]
    fn test_peripheral_clock() {
        let power = power();
        let spi = PeripheralClock::<_, Spi<2>, 3>::new(&power);
        let usart = PeripheralClock::<_, Usart<1>, 3>::new(&power);

        spi.enable();
        assert!(spi.is_enabled());
        assert!(!usart.is_enabled());

        usart.enable();
        spi.disable();
        assert!(!spi.is_enabled());
        // Disabling SPI2 also cleared DMA1, which USART1 needs.
        assert!(!usart.is_enabled());
    }
}
