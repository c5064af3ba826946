//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für GPIO-Zugriff
//! ohne konkrete Implementierung.

use crate::types::{Level, PinId, PinMode};

/// Fehler-Typ für Pin-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinError {
    /// Pin-Nummer ist dem Controller nicht bekannt
    UnknownPin(PinId),
    ModeChangeFailed,
    WriteFailed,
    ReadFailed,
}

impl core::fmt::Display for PinError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PinError::UnknownPin(pin) => write!(f, "unknown pin {}", pin),
            PinError::ModeChangeFailed => f.write_str("pin mode change failed"),
            PinError::WriteFailed => f.write_str("pin write failed"),
            PinError::ReadFailed => f.write_str("pin read failed"),
        }
    }
}

impl core::error::Error for PinError {}

#[cfg(feature = "defmt")]
impl defmt::Format for PinError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PinError::UnknownPin(pin) => defmt::write!(fmt, "UnknownPin({})", pin),
            PinError::ModeChangeFailed => defmt::write!(fmt, "ModeChangeFailed"),
            PinError::WriteFailed => defmt::write!(fmt, "WriteFailed"),
            PinError::ReadFailed => defmt::write!(fmt, "ReadFailed"),
        }
    }
}

/// Trait für GPIO-Zugriff über Pin-Nummern
///
/// Abstrahiert `pinMode()`/`digitalWrite()`/`digitalRead()` so dass die
/// Prüflogik ohne echte Hardware getestet werden kann.
///
/// # Implementierungen
/// - **Production:** EspPinBank (ESP32-C6 `Flex` GPIOs)
/// - **Testing:** SimulatedFixture (Netze + Pull-Widerstände im Speicher)
pub trait PinController {
    /// Setzt die Betriebsart eines Pins
    fn set_mode(&mut self, pin: PinId, mode: PinMode) -> Result<(), PinError>;

    /// Treibt einen Pegel auf einen Pin
    ///
    /// Nur sinnvoll wenn der Pin in `PinMode::Output` ist.
    fn write(&mut self, pin: PinId, level: Level) -> Result<(), PinError>;

    /// Liest den aktuellen Pegel eines Pins
    fn read(&mut self, pin: PinId) -> Result<Level, PinError>;
}

impl<T: PinController + ?Sized> PinController for &mut T {
    fn set_mode(&mut self, pin: PinId, mode: PinMode) -> Result<(), PinError> {
        (**self).set_mode(pin, mode)
    }

    fn write(&mut self, pin: PinId, level: Level) -> Result<(), PinError> {
        (**self).write(pin, level)
    }

    fn read(&mut self, pin: PinId) -> Result<Level, PinError> {
        (**self).read(pin)
    }
}
