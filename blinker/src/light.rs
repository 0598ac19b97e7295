use embedded_hal::digital::PinState;

/// The two states of the blink loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Light {
    On,
    Off,
}

impl Light {
    /// State entered first after reset.
    pub const INITIAL: Light = Light::On;

    /// The state that follows this one.
    pub fn next(self) -> Light {
        match self {
            Light::On => Light::Off,
            Light::Off => Light::On,
        }
    }

    /// Pin level that represents this state.
    pub fn level(self) -> PinState {
        match self {
            Light::On => PinState::High,
            Light::Off => PinState::Low,
        }
    }

    /// Status line logged on entering this state.
    pub fn message(self) -> &'static str {
        match self {
            Light::On => "light on",
            Light::Off => "light off",
        }
    }
}
