//! LED-Rückmeldung: Blinkmuster und Pass/Error-Zustand

use embedded_hal::delay::DelayNs;

use crate::traits::{PinController, PinError};
use crate::types::{Halt, Level, PinId};

/// Halbe Periode beim schnellen Blinken (ms)
pub const FAST_BLINK_MS: u32 = 70;

/// Halbe Periode beim langsamen Blinken (ms)
pub const SLOW_BLINK_MS: u32 = 300;

/// Halbe Periode beim Pass-Blinken (ms)
pub const PASS_BLINK_MS: u32 = 500;

/// Anzahl der Pass-Blinkzyklen
pub const PASS_BLINK_COUNT: u32 = 5;

/// Blink-Geschwindigkeit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkSpeed {
    Fast,
    Slow,
}

impl BlinkSpeed {
    pub fn half_period_ms(self) -> u32 {
        match self {
            BlinkSpeed::Fast => FAST_BLINK_MS,
            BlinkSpeed::Slow => SLOW_BLINK_MS,
        }
    }
}

/// LED-Beschaltung
///
/// `Normal`: High = an. `Inverted`: Low = an (LED gegen VCC).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Normal,
    Inverted,
}

impl Polarity {
    fn on_level(self) -> Level {
        match self {
            Polarity::Normal => Level::High,
            Polarity::Inverted => Level::Low,
        }
    }
}

/// Pins der beiden Status-LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLeds {
    pub error: PinId,
    pub pass: PinId,
}

/// Blinkt eine LED `times` Mal (AN, warten, AUS, warten)
///
/// Blockiert für `times * 2 * speed.half_period_ms()` Millisekunden.
pub fn blink<P, D>(
    pins: &mut P,
    delay: &mut D,
    pin: PinId,
    times: u32,
    speed: BlinkSpeed,
    polarity: Polarity,
) -> Result<(), PinError>
where
    P: PinController,
    D: DelayNs,
{
    let on = polarity.on_level();
    let half_period = speed.half_period_ms();

    for _ in 0..times {
        pins.write(pin, on)?;
        delay.delay_ms(half_period);
        pins.write(pin, !on)?;
        delay.delay_ms(half_period);
    }
    Ok(())
}

/// Schnelles Blinken (70 ms), nicht invertiert
pub fn blink_fast<P: PinController, D: DelayNs>(
    pins: &mut P,
    delay: &mut D,
    pin: PinId,
    times: u32,
) -> Result<(), PinError> {
    blink(pins, delay, pin, times, BlinkSpeed::Fast, Polarity::Normal)
}

/// Langsames Blinken (300 ms), nicht invertiert
pub fn blink_slow<P: PinController, D: DelayNs>(
    pins: &mut P,
    delay: &mut D,
    pin: PinId,
    times: u32,
) -> Result<(), PinError> {
    blink(pins, delay, pin, times, BlinkSpeed::Slow, Polarity::Normal)
}

/// Schnelles Blinken (70 ms), invertiert
pub fn blink_fast_inv<P: PinController, D: DelayNs>(
    pins: &mut P,
    delay: &mut D,
    pin: PinId,
    times: u32,
) -> Result<(), PinError> {
    blink(pins, delay, pin, times, BlinkSpeed::Fast, Polarity::Inverted)
}

/// Langsames Blinken (300 ms), invertiert
pub fn blink_slow_inv<P: PinController, D: DelayNs>(
    pins: &mut P,
    delay: &mut D,
    pin: PinId,
    times: u32,
) -> Result<(), PinError> {
    blink(pins, delay, pin, times, BlinkSpeed::Slow, Polarity::Inverted)
}

/// Error-Zustand: Pass-LED aus, Error-LED an
///
/// Gibt `Halt` zurück. Der Aufrufer muss danach anhalten (`Halt::park()`).
pub fn set_error_leds<P: PinController>(pins: &mut P, leds: StatusLeds) -> Result<Halt, PinError> {
    pins.write(leds.pass, Level::Low)?;
    pins.write(leds.error, Level::High)?;
    Ok(Halt)
}

/// Pass-Zustand: Error-LED aus, Pass-LED blinkt 5x mit 500 ms
pub fn set_pass_leds<P, D>(pins: &mut P, delay: &mut D, leds: StatusLeds) -> Result<(), PinError>
where
    P: PinController,
    D: DelayNs,
{
    pins.write(leds.error, Level::Low)?;
    for _ in 0..PASS_BLINK_COUNT {
        pins.write(leds.pass, Level::High)?;
        delay.delay_ms(PASS_BLINK_MS);
        pins.write(leds.pass, Level::Low)?;
        delay.delay_ms(PASS_BLINK_MS);
    }
    Ok(())
}
