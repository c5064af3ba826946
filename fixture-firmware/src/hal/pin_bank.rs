// PinController Implementierung für ESP32-C6 GPIOs
//
// Jeder Pin des Adapters wird als `Flex` gehalten, damit er zur Laufzeit
// zwischen Output und Input mit Pull-Up/Pull-Down umgeschaltet werden kann.

use esp_hal::gpio::{Flex, InputConfig, OutputConfig, Pull};
use fixture_core::{Level, PinController, PinError, PinId, PinMode};

/// Pin-Bank: ordnet Pin-Nummern den Flex-GPIOs zu
///
/// # Parameter
/// - `N`: Anzahl der verwalteten Pins (Kabelbaum + LEDs)
pub struct EspPinBank<'d, const N: usize> {
    pins: [(PinId, Flex<'d>); N],
}

impl<'d, const N: usize> EspPinBank<'d, N> {
    /// Erstellt eine Pin-Bank aus (Pin-Nummer, Flex) Paaren
    ///
    /// Die Pin-Nummer sollte der GPIO-Nummer des Flex-Pins entsprechen.
    pub fn new(pins: [(PinId, Flex<'d>); N]) -> Self {
        Self { pins }
    }

    /// Prüft ob alle Pins bekannt sind
    pub fn contains_all(&self, mut ids: impl Iterator<Item = PinId>) -> bool {
        ids.all(|id| self.pins.iter().any(|(pin, _)| *pin == id))
    }

    fn flex(&mut self, id: PinId) -> Result<&mut Flex<'d>, PinError> {
        self.pins
            .iter_mut()
            .find(|(pin, _)| *pin == id)
            .map(|(_, flex)| flex)
            .ok_or(PinError::UnknownPin(id))
    }
}

impl<const N: usize> PinController for EspPinBank<'_, N> {
    fn set_mode(&mut self, pin: PinId, mode: PinMode) -> Result<(), PinError> {
        let flex = self.flex(pin)?;
        match mode {
            PinMode::Output => {
                flex.apply_output_config(&OutputConfig::default());
                flex.set_output_enable(true);
                // Input bleibt aktiv, damit der getriebene Pegel lesbar ist
                flex.set_input_enable(true);
            }
            PinMode::InputPullUp | PinMode::InputPullDown => {
                let pull = if mode == PinMode::InputPullUp {
                    Pull::Up
                } else {
                    Pull::Down
                };
                flex.set_output_enable(false);
                flex.apply_input_config(&InputConfig::default().with_pull(pull));
                flex.set_input_enable(true);
            }
        }
        Ok(())
    }

    fn write(&mut self, pin: PinId, level: Level) -> Result<(), PinError> {
        let flex = self.flex(pin)?;
        flex.set_level(match level {
            Level::Low => esp_hal::gpio::Level::Low,
            Level::High => esp_hal::gpio::Level::High,
        });
        Ok(())
    }

    fn read(&mut self, pin: PinId) -> Result<Level, PinError> {
        let flex = self.flex(pin)?;
        Ok(Level::from(flex.is_high()))
    }
}
