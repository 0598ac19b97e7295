//! The blink loop itself.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::{Error, INTERVAL_MS, Led, Light, RETRY_MESSAGE};

/// Drives one [`Led`] through `On`/`Off` forever.
///
/// Every transition is the same fixed sequence: set the pin, write the
/// state's line to `log`, block on `delay` for one interval, advance.
/// The pin level and the log line therefore always agree and strictly
/// alternate, starting with [`Light::INITIAL`].
pub struct Blinker<P, D, W> {
    led: Led<P>,
    delay: D,
    log: W,
    state: Light,
    interval_ms: u32,
}

impl<P, D, W> Blinker<P, D, W>
where
    P: OutputPin,
    D: DelayNs,
    W: Write,
{
    pub fn new(led: Led<P>, delay: D, log: W) -> Self {
        Blinker {
            led,
            delay,
            log,
            state: Light::INITIAL,
            interval_ms: INTERVAL_MS,
        }
    }

    /// Overrides the time spent in each state.
    pub fn with_interval(mut self, ms: u32) -> Self {
        self.interval_ms = ms;
        self
    }

    /// The state the next transition will enter.
    pub fn state(&self) -> Light {
        self.state
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn led(&self) -> &Led<P> {
        &self.led
    }

    /// Performs one transition and returns the state it entered.
    ///
    /// A pin error returns before anything is logged or delayed, and the
    /// state is left as is. A log error is returned only after the delay
    /// and the advance, so the pin sequence is unaffected by it.
    pub fn step(&mut self) -> Result<Light, Error<P::Error>> {
        let entered = self.state;
        self.led.set(entered.level()).map_err(Error::Pin)?;

        let logged = write!(self.log, "{}\r\n", entered.message());
        self.delay.delay_ms(self.interval_ms);
        self.state = entered.next();

        logged?;
        Ok(entered)
    }

    /// One iteration of [`run`](Self::run): a transition, or on a pin
    /// failure a retry notice and one interval of back-off.
    ///
    /// Returns the state entered, `None` if the transition has to be retried.
    pub fn tick(&mut self) -> Option<Light> {
        match self.step() {
            Ok(entered) => Some(entered),
            // Best effort: the transition itself went through.
            Err(Error::Log) => Some(self.state.next()),
            Err(Error::Pin(_)) => {
                let _ = write!(self.log, "{}\r\n", RETRY_MESSAGE);
                self.delay.delay_ms(self.interval_ms);
                None
            }
        }
    }

    pub fn run(mut self) -> ! {
        loop {
            self.tick();
        }
    }

    pub fn release(self) -> (Led<P>, D, W) {
        (self.led, self.delay, self.log)
    }
}

#[cfg(test)]
mod tests {
    use core::fmt;

    use embedded_hal::digital::PinState;

    use super::*;
    use crate::led::mock::{MockPin, PinFault};

    /// Records every requested delay in milliseconds.
    #[derive(Debug, Default)]
    struct MockDelay {
        calls: Vec<u32>,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.calls.push(ns / 1_000_000);
        }

        fn delay_ms(&mut self, ms: u32) {
            self.calls.push(ms);
        }
    }

    struct BrokenLog;

    impl fmt::Write for BrokenLog {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    fn blinker(pin: MockPin) -> Blinker<MockPin, MockDelay, String> {
        Blinker::new(Led::new(2, pin), MockDelay::default(), String::new())
    }

    #[test]
    fn defaults() {
        let b = blinker(MockPin::default());
        assert_eq!(b.state(), Light::On);
        assert_eq!(b.interval_ms(), 1_000);
        assert_eq!(b.led().id(), 2);
        assert_eq!(b.led().level(), None);
    }

    #[test]
    fn step_sets_logs_delays_advances() {
        let mut b = blinker(MockPin::default());

        assert_eq!(b.step(), Ok(Light::On));
        assert!(b.led().is_on());
        assert_eq!(b.state(), Light::Off);

        assert_eq!(b.step(), Ok(Light::Off));
        assert_eq!(b.led().level(), Some(PinState::Low));
        assert_eq!(b.state(), Light::On);

        let (led, delay, log) = b.release();
        assert_eq!(log, "light on\r\nlight off\r\n");
        assert_eq!(delay.calls, [1_000, 1_000]);
        assert_eq!(led.release().writes, 2);
    }

    #[test]
    fn custom_interval() {
        let mut b = blinker(MockPin::default()).with_interval(250);
        b.step().unwrap();
        let (_, delay, _) = b.release();
        assert_eq!(delay.calls, [250]);
    }

    #[test]
    fn pin_error_leaves_state_alone() {
        let pin = MockPin {
            failures: 1,
            ..Default::default()
        };
        let mut b = blinker(pin);

        assert_eq!(b.step(), Err(Error::Pin(PinFault)));
        assert_eq!(b.state(), Light::On);

        let (_, delay, log) = b.release();
        assert!(log.is_empty());
        assert!(delay.calls.is_empty());
    }

    #[test]
    fn log_error_still_toggles_and_waits() {
        let led = Led::new(2, MockPin::default());
        let mut b = Blinker::new(led, MockDelay::default(), BrokenLog);

        assert_eq!(b.step(), Err(Error::Log));
        assert!(b.led().is_on());
        assert_eq!(b.state(), Light::Off);

        assert_eq!(b.tick(), Some(Light::Off));
        assert_eq!(b.led().level(), Some(PinState::Low));
        assert_eq!(b.state(), Light::On);

        let (_, delay, _) = b.release();
        assert_eq!(delay.calls, [1_000, 1_000]);
    }

    #[test]
    fn tick_retries_after_pin_error() {
        let pin = MockPin {
            failures: 2,
            ..Default::default()
        };
        let mut b = blinker(pin);

        assert_eq!(b.tick(), None);
        assert_eq!(b.tick(), None);
        assert_eq!(b.tick(), Some(Light::On));
        assert_eq!(b.tick(), Some(Light::Off));

        let (led, delay, log) = b.release();
        assert_eq!(
            log,
            "pin write failed, retrying\r\n\
             pin write failed, retrying\r\n\
             light on\r\n\
             light off\r\n"
        );
        assert_eq!(delay.calls, [1_000; 4]);
        assert_eq!(led.release().writes, 2);
    }
}
