//! Core Types für den Prüfadapter
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// GPIO-Nummer laut Board-Nummerierung
pub type PinId = u8;

/// Betriebsart eines Pins
///
/// `Output` treibt einen Pegel, die beiden Input-Varianten tasten mit
/// internem Pull-Widerstand ab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PinMode {
    Output,
    InputPullUp,
    InputPullDown,
}

impl PinMode {
    /// `true` für beide Input-Varianten (Sense-Modus)
    pub fn is_sense(self) -> bool {
        !matches!(self, PinMode::Output)
    }
}

/// Logischer Pegel eines Pins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Level {
    Low,
    High,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }
}

impl core::ops::Not for Level {
    type Output = Level;

    fn not(self) -> Level {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

/// Ergebnis einer Durchgangsprüfung
///
/// Wird pro Aufruf neu berechnet und nicht gespeichert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    /// Numerischer Rückgabecode wie im alten Prüfprogramm (Pass = 0, Fail = 1)
    pub fn code(self) -> u8 {
        match self {
            Verdict::Pass => 0,
            Verdict::Fail => 1,
        }
    }

    pub fn is_pass(self) -> bool {
        self == Verdict::Pass
    }
}

/// Terminaler Zustand nach `set_error_leds()`
///
/// Die Bibliothek blockiert nie selbst. Der Aufrufer (Firmware-Hauptschleife)
/// entscheidet, wie angehalten wird, normalerweise über `park()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "the fixture must stop after the error state was signalled"]
pub struct Halt;

impl Halt {
    /// Hält die CPU für immer an (nur Reset/Power-Cycle hilft)
    pub fn park(self) -> ! {
        loop {
            core::hint::spin_loop();
        }
    }
}

/// Art der Prüfung in einem Prüfplan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CheckKind {
    /// Bündel muss komplett verbunden sein (`shorts_confirm`)
    Shorts,
    /// Bündel darf keine Verbindung haben (`nc_confirm`)
    NoConnect,
}

/// Erste fehlgeschlagene Prüfung eines Prüflaufs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FailedCheck {
    pub kind: CheckKind,
    /// Index des Bündels innerhalb von `FixturePlan::shorted` bzw. `::isolated`
    pub bundle: usize,
}

/// Gesamtergebnis eines Prüflaufs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FixtureReport {
    Pass,
    Fail(FailedCheck),
}

impl FixtureReport {
    pub fn verdict(&self) -> Verdict {
        match self {
            FixtureReport::Pass => Verdict::Pass,
            FixtureReport::Fail(_) => Verdict::Fail,
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for PinMode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PinMode::Output => defmt::write!(fmt, "Output"),
            PinMode::InputPullUp => defmt::write!(fmt, "InputPullUp"),
            PinMode::InputPullDown => defmt::write!(fmt, "InputPullDown"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Level {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Level::Low => defmt::write!(fmt, "Low"),
            Level::High => defmt::write!(fmt, "High"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Verdict {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Verdict::Pass => defmt::write!(fmt, "Pass"),
            Verdict::Fail => defmt::write!(fmt, "Fail"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FixtureReport {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            FixtureReport::Pass => defmt::write!(fmt, "Pass"),
            FixtureReport::Fail(failed) => {
                let kind = match failed.kind {
                    CheckKind::Shorts => "Shorts",
                    CheckKind::NoConnect => "NoConnect",
                };
                defmt::write!(fmt, "Fail {{ kind: {}, bundle: {} }}", kind, failed.bundle)
            }
        }
    }
}
