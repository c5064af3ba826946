//! Lineare Skalierung von ADC-Messwerten
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use core::fmt::Write;

/// Diagnose-Text bei negativem Ergebnis
pub const NEGATIVE_VALUE_MESSAGE: &str = "Error calculated value cannot be negative number";

/// Skaliert einen Spannungs-Messwert: `measured * scale_factor`
///
/// Negative Ergebnisse werden auf 0.0 begrenzt und über `diag` gemeldet.
///
/// # Beispiele
///
/// ```
/// # use fixture_core::voltage_scale;
/// let mut diag = String::new();
/// assert_eq!(voltage_scale(2.0, 100, &mut diag), 200.0);
/// assert!(diag.is_empty());
/// ```
pub fn voltage_scale<W: Write>(scale_factor: f32, measured: u16, diag: &mut W) -> f32 {
    scale_clamped(scale_factor, measured, diag)
}

/// Skaliert einen Strom-Messwert: `measured * scale_factor`
///
/// Gleiche Formel und gleiche Begrenzung wie `voltage_scale()`.
pub fn current_scale<W: Write>(scale_factor: f32, measured: u16, diag: &mut W) -> f32 {
    scale_clamped(scale_factor, measured, diag)
}

fn scale_clamped<W: Write>(scale_factor: f32, measured: u16, diag: &mut W) -> f32 {
    let value = f32::from(measured) * scale_factor;
    if value < 0.0 {
        // Diagnose ist best effort, ein Schreibfehler ändert das Ergebnis nicht
        let _ = diag.write_str(NEGATIVE_VALUE_MESSAGE);

        #[cfg(feature = "defmt")]
        defmt::warn!("Negative scaled value clamped to 0.0");

        return 0.0;
    }
    value
}
