// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use fixture_core::{FixturePlan, PinId, StatusLeds};

// ============================================================================
// Status-LEDs
// ============================================================================

/// GPIO-Pin der roten Error-LED
pub const ERROR_LED_PIN: PinId = 18;

/// GPIO-Pin der grünen Pass-LED
pub const PASS_LED_PIN: PinId = 19;

pub const STATUS_LEDS: StatusLeds = StatusLeds {
    error: ERROR_LED_PIN,
    pass: PASS_LED_PIN,
};

/// Kurzes Blinken beider LEDs beim Start (Lampentest)
pub const STARTUP_BLINK_COUNT: u32 = 2;

// ============================================================================
// Kabelbaum
// ============================================================================
//
// Pin-Belegung des Prüfadapters (ESP32-C6 DevKit):
// - GPIO8/9 sind Strapping-Pins, GPIO12/13 USB, GPIO16/17 UART0 → nicht benutzt
// - GPIO0/1 sind ADC1 Kanäle für die Versorgungsmessung

/// Masse-Bündel: alle Pins müssen miteinander verbunden sein
pub const GROUND_BUNDLE: [PinId; 2] = [2, 3];

/// Versorgungs-Bündel: alle Pins müssen miteinander verbunden sein
pub const SUPPLY_BUNDLE: [PinId; 2] = [4, 5];

/// Signal-Leitungen: keine darf mit einer anderen verbunden sein
pub const SIGNAL_BUNDLE: [PinId; 4] = [6, 7, 10, 11];

/// Bündel für `shorts_confirm()`
pub const SHORTED_BUNDLES: [&[PinId]; 2] = [&GROUND_BUNDLE, &SUPPLY_BUNDLE];

/// Bündel für `nc_confirm()`
pub const ISOLATED_BUNDLES: [&[PinId]; 1] = [&SIGNAL_BUNDLE];

/// Prüfplan des Adapters
pub const FIXTURE_PLAN: FixturePlan<'static> = FixturePlan {
    shorted: &SHORTED_BUNDLES,
    isolated: &ISOLATED_BUNDLES,
};

/// Anzahl der GPIOs in der Pin-Bank (Kabelbaum + Status-LEDs)
pub const PIN_BANK_SIZE: usize = 10;

// ============================================================================
// Versorgungsmessung
// ============================================================================

/// ADC-Rohwert → Millivolt (12 Bit, 11 dB Dämpfung, Spannungsteiler 1:2)
pub const SUPPLY_VOLTAGE_SCALE: f32 = 2.0 * 3300.0 / 4095.0;

/// ADC-Rohwert → Milliampere (Shunt 0.1 Ohm, Verstärkung 50)
pub const SUPPLY_CURRENT_SCALE: f32 = 3300.0 / 4095.0 / (0.1 * 50.0);

/// Leerlauf-Intervall nach bestandener Prüfung in Millisekunden
pub const IDLE_INTERVAL_MS: u32 = 1000;
