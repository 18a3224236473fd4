// Licensed under the Apache-2.0 license

//! The fixed table of known UART instances.
//!
//! Each entry describes one on-chip UART/USART peripheral and the DMA
//! controller/channel wiring the drivers use for it. Supporting a new
//! instance means adding a table entry, not changing the algorithm.

use anyhow::{bail, Result};

/// One numbered UART/USART hardware instance and its DMA channel wiring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UartInstance {
    /// Peripheral name as the LL drivers spell it (`USART1`..`UART5`).
    pub name: &'static str,
    /// Peripheral number.
    pub uart: u32,
    /// DMA controller number.
    pub dma: u32,
    /// DMA receive channel number.
    pub dma_ch_rx: u32,
    /// DMA transmit channel number.
    pub dma_ch_tx: u32,
}

const UART_INSTANCES: &[UartInstance] = &[
    UartInstance {
        name: "USART1",
        uart: 1,
        dma: 1,
        dma_ch_rx: 1,
        dma_ch_tx: 2,
    },
    UartInstance {
        name: "USART2",
        uart: 2,
        dma: 1,
        dma_ch_rx: 3,
        dma_ch_tx: 4,
    },
    UartInstance {
        name: "USART3",
        uart: 3,
        dma: 1,
        dma_ch_rx: 5,
        dma_ch_tx: 6,
    },
    UartInstance {
        name: "UART4",
        uart: 4,
        dma: 1,
        dma_ch_rx: 7,
        dma_ch_tx: 8,
    },
    UartInstance {
        name: "UART5",
        uart: 5,
        dma: 2,
        dma_ch_rx: 1,
        dma_ch_tx: 2,
    },
];

impl UartInstance {
    /// Look up an instance by its identifier.
    ///
    /// Fails if the identifier is not in the table; the known set is 1-5.
    pub fn lookup(id: u32) -> Result<&'static UartInstance> {
        match UART_INSTANCES.iter().find(|instance| instance.uart == id) {
            Some(instance) => Ok(instance),
            None => bail!("no such UART instance: {id}"),
        }
    }

    /// The full LL clock-enable invocation for this peripheral.
    ///
    /// USART1 sits on APB2; USART2/3 and UART4/5 are on APB1.
    pub fn clock_enable(&self) -> &'static str {
        match self.uart {
            1 => "LL_APB2_GRP1_EnableClock(LL_APB2_GRP1_PERIPH_USART1)",
            2 => "LL_APB1_GRP1_EnableClock(LL_APB1_GRP1_PERIPH_USART2)",
            3 => "LL_APB1_GRP1_EnableClock(LL_APB1_GRP1_PERIPH_USART3)",
            4 => "LL_APB1_GRP1_EnableClock(LL_APB1_GRP1_PERIPH_UART4)",
            5 => "LL_APB1_GRP1_EnableClock(LL_APB1_GRP1_PERIPH_UART5)",
            n => unreachable!("no clock-enable entry for peripheral {n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_instances() {
        for id in 1..=5 {
            let instance = UartInstance::lookup(id).unwrap();
            assert_eq!(instance.uart, id);
        }
        assert_eq!(UartInstance::lookup(1).unwrap().name, "USART1");
        assert_eq!(UartInstance::lookup(3).unwrap().name, "USART3");
        assert_eq!(UartInstance::lookup(4).unwrap().name, "UART4");
        assert_eq!(UartInstance::lookup(5).unwrap().name, "UART5");
    }

    #[test]
    fn test_lookup_unknown_instance() {
        for id in [0, 6, 99] {
            let err = UartInstance::lookup(id).unwrap_err();
            assert!(err.to_string().contains(&id.to_string()));
        }
    }

    #[test]
    fn test_clock_enable_groups() {
        // USART1 is the only peripheral on APB2.
        assert_eq!(
            UartInstance::lookup(1).unwrap().clock_enable(),
            "LL_APB2_GRP1_EnableClock(LL_APB2_GRP1_PERIPH_USART1)"
        );
        for id in 2..=5 {
            let clock = UartInstance::lookup(id).unwrap().clock_enable();
            assert!(clock.starts_with("LL_APB1_GRP1_EnableClock("));
        }
        // The naming exception carries into the peripheral constants.
        assert!(UartInstance::lookup(4)
            .unwrap()
            .clock_enable()
            .ends_with("LL_APB1_GRP1_PERIPH_UART4)"));
        assert!(UartInstance::lookup(5)
            .unwrap()
            .clock_enable()
            .ends_with("LL_APB1_GRP1_PERIPH_UART5)"));
    }

    #[test]
    fn test_only_uart5_uses_dma2() {
        for id in 1..=4 {
            assert_eq!(UartInstance::lookup(id).unwrap().dma, 1);
        }
        assert_eq!(UartInstance::lookup(5).unwrap().dma, 2);
    }
}
