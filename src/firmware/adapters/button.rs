use core::convert::Infallible;

use esp_hal::gpio::Input;
use spellcast::LevelInput;

/// Trigger button wired to ground with the internal pull-up enabled.
pub(crate) struct ButtonLevel<'d> {
    pin: Input<'d>,
}

impl<'d> ButtonLevel<'d> {
    pub(crate) fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }
}

impl LevelInput for ButtonLevel<'_> {
    type Error = Infallible;

    fn is_active(&mut self) -> Result<bool, Self::Error> {
        Ok(self.pin.is_low())
    }
}
