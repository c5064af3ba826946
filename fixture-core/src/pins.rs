//! Pin-Modus Helfer für ganze Pin-Bündel

use crate::traits::{PinController, PinError};
use crate::types::{PinId, PinMode};

/// Setzt alle Pins eines Bündels auf dieselbe Betriebsart
///
/// Bricht beim ersten Fehler ab; bereits gesetzte Pins bleiben gesetzt.
pub fn set_pins_mode<P: PinController>(
    pins: &mut P,
    bundle: &[PinId],
    mode: PinMode,
) -> Result<(), PinError> {
    for &pin in bundle {
        pins.set_mode(pin, mode)?;
    }
    Ok(())
}

/// Setzt alle Pins auf Input mit Pull-Up
///
/// ```
/// # use fixture_core::{PinController, PinError, PinMode, Level, PinId, set_pins_pull_up};
/// # struct Recorder(Vec<(PinId, PinMode)>);
/// # impl PinController for Recorder {
/// #     fn set_mode(&mut self, pin: PinId, mode: PinMode) -> Result<(), PinError> { self.0.push((pin, mode)); Ok(()) }
/// #     fn write(&mut self, _: PinId, _: Level) -> Result<(), PinError> { Ok(()) }
/// #     fn read(&mut self, _: PinId) -> Result<Level, PinError> { Ok(Level::High) }
/// # }
/// let mut pins = Recorder(Vec::new());
/// set_pins_pull_up(&mut pins, &[4, 5]).unwrap();
/// assert_eq!(pins.0, [(4, PinMode::InputPullUp), (5, PinMode::InputPullUp)]);
/// ```
pub fn set_pins_pull_up<P: PinController>(pins: &mut P, bundle: &[PinId]) -> Result<(), PinError> {
    set_pins_mode(pins, bundle, PinMode::InputPullUp)
}

/// Setzt alle Pins auf Input mit Pull-Down
pub fn set_pins_pull_down<P: PinController>(
    pins: &mut P,
    bundle: &[PinId],
) -> Result<(), PinError> {
    set_pins_mode(pins, bundle, PinMode::InputPullDown)
}

/// Setzt alle Pins auf Output
pub fn set_pins_output<P: PinController>(pins: &mut P, bundle: &[PinId]) -> Result<(), PinError> {
    set_pins_mode(pins, bundle, PinMode::Output)
}
