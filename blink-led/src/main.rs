#![no_std]
#![no_main]

mod serial_log;

use core::fmt;

use blinker::{Blinker, Led};
use cortex_m_rt::entry;
use panic_halt as _;
use stm32f4xx_hal::{
    gpio::{Output, PB2, PushPull},
    pac,
    prelude::*,
    serial::{Serial, config::Config},
    timer::SysDelay,
};

use crate::serial_log::SerialLog;

/// Pin number of the LED. Port A's pin 2 carries USART2 TX on the Nucleo,
/// so the LED sits on PB2.
const LED_PIN: u8 = 2;
/// Baud rate of the ST-LINK virtual COM port.
const LOG_BAUD: u32 = 115_200;

type Firmware = Blinker<PB2<Output<PushPull>>, SysDelay, SerialLog>;

#[derive(Debug)]
enum StartupError {
    PeripheralsTaken,
    CorePeripheralsTaken,
    Serial,
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::PeripheralsTaken => f.write_str("device peripherals already taken"),
            StartupError::CorePeripheralsTaken => f.write_str("core peripherals already taken"),
            StartupError::Serial => f.write_str("invalid USART2 configuration"),
        }
    }
}

#[entry]
fn main() -> ! {
    match init() {
        Ok(blinker) => blinker.run(),
        // panic-halt parks the core; nothing runs without the pin.
        Err(e) => panic!("startup failed: {}", e),
    }
}

fn init() -> Result<Firmware, StartupError> {
    let dp = pac::Peripherals::take().ok_or(StartupError::PeripheralsTaken)?;
    let cp = cortex_m::Peripherals::take().ok_or(StartupError::CorePeripheralsTaken)?;

    // Default HSI clock, 16 MHz
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();

    let gpioa = dp.GPIOA.split();
    let gpiob = dp.GPIOB.split();

    // PA2 = TX, PA3 = RX
    let tx_pin = gpioa.pa2.into_alternate();
    let rx_pin = gpioa.pa3.into_alternate();
    let uart = Serial::new(
        dp.USART2,
        (tx_pin, rx_pin),
        Config::default().baudrate(LOG_BAUD.bps()),
        &clocks,
    )
    .map_err(|_| StartupError::Serial)?;
    let (tx, _rx) = uart.split();

    let led = Led::new(LED_PIN, gpiob.pb2.into_push_pull_output());
    let delay = cp.SYST.delay(&clocks);

    Ok(Blinker::new(led, delay, SerialLog::new(tx)))
}
