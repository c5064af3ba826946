// Diagnose-Ausgabe über defmt
//
// Die Skalierungs-Funktionen melden Probleme über `core::fmt::Write`.
// Dieser Writer leitet jeden Text als defmt-Warnung weiter.

use core::fmt;

/// `fmt::Write` Senke, die in defmt loggt
#[derive(Default)]
pub struct DefmtDiagnostics;

impl fmt::Write for DefmtDiagnostics {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        defmt::warn!("{=str}", s);
        Ok(())
    }
}
