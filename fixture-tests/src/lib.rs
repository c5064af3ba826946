//! Test-Doubles für die Prüflogik
//!
//! Diese Mocks laufen auf dem Host (x86_64) und ersetzen GPIOs und Delay:
//! - `SimulatedFixture`: Kabelbaum als Netze verbundener Pins mit Pull-Widerständen
//! - `MockDelay`: zählt Wartezeiten statt zu schlafen

use embedded_hal::delay::DelayNs;
use fixture_core::{Level, PinController, PinError, PinId, PinMode};

// ============================================================================
// Simulated Fixture
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct SimPin {
    id: PinId,
    mode: PinMode,
    driven: Level,
    net: usize,
}

/// Simulierter Kabelbaum
///
/// Jeder Pin gehört zu genau einem Netz. Pins im selben Netz sind elektrisch
/// verbunden. Gelesen wird:
/// - der Pegel eines Output-Pins im Netz (Low gewinnt bei mehreren Treibern)
/// - sonst der eigene Pull-Widerstand (Pull-Up = High, Pull-Down = Low)
///
/// Neue Pins starten als `InputPullDown`, damit das Zurücksetzen auf
/// Pull-Up in Tests sichtbar ist.
#[derive(Debug, Default)]
pub struct SimulatedFixture {
    pins: Vec<SimPin>,
    next_net: usize,
    /// Alle `set_mode()` Aufrufe in Reihenfolge
    pub mode_log: Vec<(PinId, PinMode)>,
    /// Alle `write()` Aufrufe in Reihenfolge
    pub write_log: Vec<(PinId, Level)>,
    /// Anzahl der `read()` Aufrufe
    pub read_count: usize,
    /// Höchste Anzahl gleichzeitig getriebener Pins
    pub max_outputs: usize,
    /// Simuliere Lesefehler auf diesem Pin
    pub fail_read_on: Option<PinId>,
    /// Simuliere Fehler beim Umschalten dieses Pins auf diesen Modus
    pub fail_mode_on: Option<(PinId, PinMode)>,
}

impl SimulatedFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jeder Pin in einem eigenen Netz
    pub fn isolated(ids: &[PinId]) -> Self {
        let mut sim = Self::new();
        for &id in ids {
            sim.add_pin(id);
        }
        sim
    }

    /// Alle Pins in einem gemeinsamen Netz
    pub fn joined(ids: &[PinId]) -> Self {
        let mut sim = Self::isolated(ids);
        for pair in ids.windows(2) {
            sim.join(pair[0], pair[1]);
        }
        sim
    }

    /// Fügt einen Pin in einem eigenen Netz hinzu
    pub fn add_pin(&mut self, id: PinId) {
        let net = self.fresh_net();
        self.pins.push(SimPin {
            id,
            mode: PinMode::InputPullDown,
            driven: Level::Low,
            net,
        });
    }

    /// Verbindet die Netze zweier Pins
    pub fn join(&mut self, a: PinId, b: PinId) {
        let target = self.pin(a).net;
        let merged = self.pin(b).net;
        for pin in &mut self.pins {
            if pin.net == merged {
                pin.net = target;
            }
        }
    }

    /// Trennt einen Pin von seinem Netz
    pub fn isolate(&mut self, id: PinId) {
        let net = self.fresh_net();
        self.pin_mut(id).net = net;
    }

    pub fn mode(&self, id: PinId) -> PinMode {
        self.pin(id).mode
    }

    /// Zuletzt geschriebener Pegel eines Pins
    pub fn driven_level(&self, id: PinId) -> Level {
        self.pin(id).driven
    }

    /// Anzahl der Pins, die gerade in `PinMode::Output` sind
    pub fn outputs(&self) -> usize {
        self.pins
            .iter()
            .filter(|pin| pin.mode == PinMode::Output)
            .count()
    }

    pub fn all_in_mode(&self, ids: &[PinId], mode: PinMode) -> bool {
        ids.iter().all(|&id| self.mode(id) == mode)
    }

    fn fresh_net(&mut self) -> usize {
        let net = self.next_net;
        self.next_net += 1;
        net
    }

    fn pin(&self, id: PinId) -> &SimPin {
        self.pins
            .iter()
            .find(|pin| pin.id == id)
            .unwrap_or_else(|| panic!("pin {} not simulated", id))
    }

    fn pin_mut(&mut self, id: PinId) -> &mut SimPin {
        self.pins
            .iter_mut()
            .find(|pin| pin.id == id)
            .unwrap_or_else(|| panic!("pin {} not simulated", id))
    }

    fn index_of(&self, id: PinId) -> Result<usize, PinError> {
        self.pins
            .iter()
            .position(|pin| pin.id == id)
            .ok_or(PinError::UnknownPin(id))
    }
}

impl PinController for SimulatedFixture {
    fn set_mode(&mut self, pin: PinId, mode: PinMode) -> Result<(), PinError> {
        let index = self.index_of(pin)?;
        if self.fail_mode_on == Some((pin, mode)) {
            return Err(PinError::ModeChangeFailed);
        }

        self.pins[index].mode = mode;
        self.mode_log.push((pin, mode));
        self.max_outputs = self.max_outputs.max(self.outputs());
        Ok(())
    }

    fn write(&mut self, pin: PinId, level: Level) -> Result<(), PinError> {
        let index = self.index_of(pin)?;
        self.pins[index].driven = level;
        self.write_log.push((pin, level));
        Ok(())
    }

    fn read(&mut self, pin: PinId) -> Result<Level, PinError> {
        let index = self.index_of(pin)?;
        if self.fail_read_on == Some(pin) {
            return Err(PinError::ReadFailed);
        }
        self.read_count += 1;

        let this = self.pins[index];
        let mut drivers = self
            .pins
            .iter()
            .filter(|other| other.net == this.net && other.mode == PinMode::Output)
            .map(|other| other.driven)
            .peekable();

        if drivers.peek().is_some() {
            // Low gewinnt bei mehreren Treibern
            return Ok(if drivers.any(|level| level == Level::Low) {
                Level::Low
            } else {
                Level::High
            });
        }

        Ok(match this.mode {
            PinMode::InputPullUp => Level::High,
            PinMode::InputPullDown => Level::Low,
            PinMode::Output => this.driven,
        })
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Delay ohne Wanduhr: summiert nur die angeforderten Wartezeiten
#[derive(Debug, Default)]
pub struct MockDelay {
    pub total_ns: u64,
    /// Alle `delay_ms()` Aufrufe in Reihenfolge
    pub ms_calls: Vec<u32>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }

    fn delay_us(&mut self, us: u32) {
        self.total_ns += u64::from(us) * 1_000;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.ms_calls.push(ms);
        self.total_ns += u64::from(ms) * 1_000_000;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isolated_pins_read_their_pull() {
        let mut sim = SimulatedFixture::isolated(&[1, 2]);
        sim.set_mode(1, PinMode::InputPullUp).unwrap();
        assert_eq!(sim.read(1), Ok(Level::High));
        assert_eq!(sim.read(2), Ok(Level::Low));
    }

    #[test]
    fn test_joined_pin_follows_driver() {
        let mut sim = SimulatedFixture::joined(&[1, 2, 3]);
        sim.set_mode(1, PinMode::Output).unwrap();
        sim.write(1, Level::Low).unwrap();
        sim.set_mode(3, PinMode::InputPullUp).unwrap();
        assert_eq!(sim.read(3), Ok(Level::Low));

        sim.write(1, Level::High).unwrap();
        assert_eq!(sim.read(3), Ok(Level::High));
    }

    #[test]
    fn test_isolate_splits_net() {
        let mut sim = SimulatedFixture::joined(&[1, 2]);
        sim.isolate(2);
        sim.set_mode(1, PinMode::Output).unwrap();
        sim.write(1, Level::Low).unwrap();
        sim.set_mode(2, PinMode::InputPullUp).unwrap();
        assert_eq!(sim.read(2), Ok(Level::High));
    }

    #[test]
    fn test_unknown_pin() {
        let mut sim = SimulatedFixture::isolated(&[1]);
        assert_eq!(sim.read(9), Err(PinError::UnknownPin(9)));
    }

    #[test]
    fn test_mock_delay_sums_ms() {
        let mut delay = MockDelay::new();
        delay.delay_ms(70);
        delay.delay_ms(300);
        assert_eq!(delay.total_ms(), 370);
        assert_eq!(delay.ms_calls, vec![70, 300]);
    }
}
