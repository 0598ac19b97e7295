//! Status lines over USART2, which the Nucleo routes to the ST-LINK virtual COM port.

use core::fmt;

use nb::block;
use stm32f4xx_hal::{pac, prelude::*, serial::Tx};

/// Blocking text sink on the USART2 transmitter.
pub struct SerialLog {
    tx: Tx<pac::USART2>,
}

impl SerialLog {
    pub fn new(tx: Tx<pac::USART2>) -> Self {
        SerialLog { tx }
    }
}

impl fmt::Write for SerialLog {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            // Wait until the transmit register is free.
            block!(self.tx.write(byte)).map_err(|_| fmt::Error)?;
        }
        Ok(())
    }
}
