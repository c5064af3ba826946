//! Prüfablauf - Testbare Ablauflogik ohne Hardware-Abhängigkeit
//!
//! Fasst Durchgangsprüfungen und LED-Rückmeldung zu einem Prüflauf zusammen.
//! Die Firmware ruft nur noch `run_fixture()` und `signal_report()` auf.

use embedded_hal::delay::DelayNs;

use crate::connectivity::{nc_confirm, shorts_confirm};
use crate::feedback::{StatusLeds, set_error_leds, set_pass_leds};
use crate::pins::set_pins_pull_up;
use crate::traits::{PinController, PinError};
use crate::types::{CheckKind, FailedCheck, FixtureReport, Halt, PinId, Verdict};

/// Prüfplan eines Kabelbaums
///
/// - `shorted`: Bündel, deren Pins alle verbunden sein müssen
/// - `isolated`: Bündel, deren Pins keine Verbindung haben dürfen
#[derive(Debug, Clone, Copy)]
pub struct FixturePlan<'a> {
    pub shorted: &'a [&'a [PinId]],
    pub isolated: &'a [&'a [PinId]],
}

impl FixturePlan<'_> {
    /// Alle Pins aller Bündel (mit möglichen Duplikaten)
    pub fn all_pins(&self) -> impl Iterator<Item = PinId> + '_ {
        self.shorted
            .iter()
            .chain(self.isolated.iter())
            .flat_map(|bundle| bundle.iter().copied())
    }
}

/// Führt alle Prüfungen des Plans aus
///
/// Ablauf:
/// 1. alle Bündel-Pins auf Pull-Up (Ruhezustand)
/// 2. `shorts_confirm()` für jedes `shorted` Bündel
/// 3. `nc_confirm()` für jedes `isolated` Bündel
///
/// Stoppt bei der ersten fehlgeschlagenen Prüfung.
pub fn run_fixture<P, D>(
    pins: &mut P,
    delay: &mut D,
    plan: &FixturePlan<'_>,
) -> Result<FixtureReport, PinError>
where
    P: PinController,
    D: DelayNs,
{
    for bundle in plan.shorted.iter().chain(plan.isolated.iter()) {
        set_pins_pull_up(pins, bundle)?;
    }

    for (index, bundle) in plan.shorted.iter().enumerate() {
        if shorts_confirm(pins, delay, bundle)? == Verdict::Fail {
            return Ok(failed(CheckKind::Shorts, index));
        }
    }

    for (index, bundle) in plan.isolated.iter().enumerate() {
        if nc_confirm(pins, delay, bundle)? == Verdict::Fail {
            return Ok(failed(CheckKind::NoConnect, index));
        }
    }

    #[cfg(feature = "defmt")]
    defmt::info!(
        "Fixture passed ({} shorted, {} isolated bundles)",
        plan.shorted.len(),
        plan.isolated.len()
    );

    Ok(FixtureReport::Pass)
}

fn failed(kind: CheckKind, bundle: usize) -> FixtureReport {
    let report = FixtureReport::Fail(FailedCheck { kind, bundle });

    #[cfg(feature = "defmt")]
    defmt::warn!("Fixture failed: {}", report);

    report
}

/// Zeigt das Ergebnis auf den Status-LEDs an
///
/// - Pass: Pass-LED blinkt, Rückgabe `None`
/// - Fail: Error-LED an, Rückgabe `Some(Halt)`
pub fn signal_report<P, D>(
    pins: &mut P,
    delay: &mut D,
    report: &FixtureReport,
    leds: StatusLeds,
) -> Result<Option<Halt>, PinError>
where
    P: PinController,
    D: DelayNs,
{
    match report {
        FixtureReport::Pass => {
            set_pass_leds(pins, delay, leds)?;
            Ok(None)
        }
        FixtureReport::Fail(_) => set_error_leds(pins, leds).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_pins_chains_both_groups() {
        let shorted: [&[PinId]; 2] = [&[1, 2], &[3]];
        let isolated: [&[PinId]; 1] = [&[4, 5]];
        let plan = FixturePlan {
            shorted: &shorted,
            isolated: &isolated,
        };

        let mut seen = [0u8; 5];
        for (slot, pin) in seen.iter_mut().zip(plan.all_pins()) {
            *slot = pin;
        }
        assert_eq!(seen, [1, 2, 3, 4, 5]);
        assert_eq!(plan.all_pins().count(), 5);
    }
}
