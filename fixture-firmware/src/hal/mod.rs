// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter den Traits aus fixture-core,
// damit die Prüflogik ohne ESP32 getestet werden kann.

pub mod diagnostics;
pub mod pin_bank;

pub use diagnostics::DefmtDiagnostics;
pub use pin_bank::EspPinBank;
