//! The one output pin the firmware drives.

use embedded_hal::digital::{OutputPin, PinState};

/// An LED on a digital output line.
///
/// Owning `P` is what makes the line exclusive; the direction is fixed by
/// `P` being an `OutputPin` at all. `level` is the last level the hardware
/// accepted, `None` before the first write.
#[derive(Debug)]
pub struct Led<P> {
    id: u8,
    pin: P,
    level: Option<PinState>,
}

impl<P: OutputPin> Led<P> {
    /// Takes ownership of `pin`. The hardware is not touched until the first `set`.
    pub fn new(id: u8, pin: P) -> Self {
        Led {
            id,
            pin,
            level: None,
        }
    }

    pub fn set(&mut self, level: PinState) -> Result<(), P::Error> {
        self.pin.set_state(level)?;
        self.level = Some(level);
        Ok(())
    }

    /// Hardware pin number.
    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn level(&self) -> Option<PinState> {
        self.level
    }

    pub fn is_on(&self) -> bool {
        self.level == Some(PinState::High)
    }

    /// Gives the pin back.
    pub fn release(self) -> P {
        self.pin
    }
}
