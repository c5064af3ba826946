// Library-Root: Hardware-Anbindung des Prüfadapters
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod measurement;

// Re-exports von fixture-core
pub use fixture_core::{
    FixtureReport, Halt, PinController, PinError, Verdict, run_fixture, signal_report,
};

// ============================================================================
// Testing-Strategie
// ============================================================================
//
// Diese Crate kompiliert nur für riscv32imac-unknown-none-elf.
// Die komplette Prüflogik liegt deshalb in fixture-core und wird dort bzw.
// in fixture-tests gegen einen simulierten Kabelbaum getestet.
// Hier bleibt nur dünner Glue-Code: GPIO-Zuordnung, ADC und Logging.
