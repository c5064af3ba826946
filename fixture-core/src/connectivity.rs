//! Paarweise Durchgangsprüfung für Pin-Bündel
//!
//! Es wird immer genau ein Pin getrieben (Low), alle anderen Pins des Bündels
//! tasten mit Pull-Up ab. Aus den gelesenen Pegeln folgt, ob die Pins
//! elektrisch verbunden sind.
//!
//! - `shorts_confirm()`: Bündel muss komplett verbunden sein. Ein abgetasteter
//!   Pin auf High (Pull-Up gewinnt) bedeutet "Kurzschluss nicht gefunden".
//! - `nc_confirm()`: Bündel darf keine Verbindung haben. Ein abgetasteter Pin
//!   auf Low bedeutet "Kurzschluss gefunden".
//!
//! Nach jedem Aufruf stehen alle Pins des Bündels auf `InputPullUp`,
//! unabhängig vom Ergebnis.

use embedded_hal::delay::DelayNs;

use crate::traits::{PinController, PinError};
use crate::types::{Level, PinId, PinMode, Verdict};

/// Wartezeit nach jedem Modus-/Pegelwechsel in Millisekunden
pub const SETTLE_DELAY_MS: u32 = 1;

/// Erwartete Verbindung innerhalb des Bündels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expectation {
    /// Alle Pins verbunden
    Joined,
    /// Kein Pin verbunden
    Isolated,
}

impl Expectation {
    /// Pegel eines abgetasteten Pins, der die Prüfung fehlschlagen lässt
    fn failing_level(self) -> Level {
        match self {
            Expectation::Joined => Level::High,
            Expectation::Isolated => Level::Low,
        }
    }
}

/// Bestätigt, dass alle Pins des Bündels miteinander verbunden sind
///
/// Rückgabe `Verdict::Fail` sobald beim Treiben eines Pins ein anderer Pin
/// High liest; `Verdict::Pass` wenn das ganze Bündel durchläuft.
/// Ein leeres Bündel besteht.
pub fn shorts_confirm<P, D>(
    pins: &mut P,
    delay: &mut D,
    bundle: &[PinId],
) -> Result<Verdict, PinError>
where
    P: PinController,
    D: DelayNs,
{
    confirm(pins, delay, bundle, Expectation::Joined)
}

/// Bestätigt, dass kein Pin des Bündels mit einem anderen verbunden ist
///
/// Rückgabe `Verdict::Fail` sobald beim Treiben eines Pins ein anderer Pin
/// Low liest; `Verdict::Pass` wenn das ganze Bündel durchläuft.
/// Ohne Fehler wird der getriebene Pin vor dem Freigeben kurz High getrieben.
pub fn nc_confirm<P, D>(pins: &mut P, delay: &mut D, bundle: &[PinId]) -> Result<Verdict, PinError>
where
    P: PinController,
    D: DelayNs,
{
    confirm(pins, delay, bundle, Expectation::Isolated)
}

fn confirm<P, D>(
    pins: &mut P,
    delay: &mut D,
    bundle: &[PinId],
    expect: Expectation,
) -> Result<Verdict, PinError>
where
    P: PinController,
    D: DelayNs,
{
    for index in 0..bundle.len() {
        match drive_and_sense(pins, delay, bundle, index, expect) {
            Ok(Verdict::Pass) => {}
            Ok(Verdict::Fail) => return Ok(Verdict::Fail),
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Pin error {} while driving pin {}", e, bundle[index]);

                // Best effort: Bündel wieder in den Ruhezustand bringen,
                // der ursprüngliche Fehler gewinnt
                for &pin in bundle {
                    let _ = pins.set_mode(pin, PinMode::InputPullUp);
                }
                return Err(e);
            }
        }
    }
    Ok(Verdict::Pass)
}

/// Ein Durchlauf: Pin `index` treiben, alle anderen abtasten
fn drive_and_sense<P, D>(
    pins: &mut P,
    delay: &mut D,
    bundle: &[PinId],
    index: usize,
    expect: Expectation,
) -> Result<Verdict, PinError>
where
    P: PinController,
    D: DelayNs,
{
    let driven = bundle[index];

    pins.set_mode(driven, PinMode::Output)?;
    pins.write(driven, Level::Low)?;
    delay.delay_ms(SETTLE_DELAY_MS);

    for (j, &sensed) in bundle.iter().enumerate() {
        if j != index {
            pins.set_mode(sensed, PinMode::InputPullUp)?;
        }
    }
    delay.delay_ms(SETTLE_DELAY_MS);

    let failing = expect.failing_level();
    for (j, &sensed) in bundle.iter().enumerate() {
        if j == index {
            continue;
        }
        if pins.read(sensed)? == failing {
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "Pin {} reads {} while pin {} driven low",
                sensed,
                failing,
                driven
            );

            release(pins, delay, driven)?;
            return Ok(Verdict::Fail);
        }
    }

    if expect == Expectation::Isolated {
        pins.write(driven, Level::High)?;
        delay.delay_ms(SETTLE_DELAY_MS);
    }
    release(pins, delay, driven)?;
    Ok(Verdict::Pass)
}

/// Getriebenen Pin zurück auf Pull-Up
fn release<P, D>(pins: &mut P, delay: &mut D, pin: PinId) -> Result<(), PinError>
where
    P: PinController,
    D: DelayNs,
{
    pins.set_mode(pin, PinMode::InputPullUp)?;
    delay.delay_ms(SETTLE_DELAY_MS);
    Ok(())
}
