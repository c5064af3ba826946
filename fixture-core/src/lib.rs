//! Fixture Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert nur Traits und die Prüflogik des Adapters:
//! Pin-Modus Helfer, Durchgangsprüfung, LED-Rückmeldung und Skalierung.

#![no_std]

pub mod connectivity;
pub mod feedback;
pub mod fixture;
pub mod pins;
pub mod scale;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use connectivity::{SETTLE_DELAY_MS, nc_confirm, shorts_confirm};
pub use feedback::{
    BlinkSpeed, Polarity, StatusLeds, blink, blink_fast, blink_fast_inv, blink_slow,
    blink_slow_inv, set_error_leds, set_pass_leds,
};
pub use fixture::{FixturePlan, run_fixture, signal_report};
pub use pins::{set_pins_mode, set_pins_output, set_pins_pull_down, set_pins_pull_up};
pub use scale::{current_scale, voltage_scale};
pub use traits::{PinController, PinError};
pub use types::{CheckKind, FailedCheck, FixtureReport, Halt, Level, PinId, PinMode, Verdict};
