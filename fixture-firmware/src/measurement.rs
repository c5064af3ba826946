// Versorgungsmessung über ADC1
//
// Liest Spannung und Strom des Prüflings als ADC-Rohwerte und skaliert sie
// mit `voltage_scale()` / `current_scale()` aus fixture-core.

use esp_hal::Blocking;
use esp_hal::analog::adc::{Adc, AdcConfig, AdcPin, Attenuation};
use esp_hal::peripherals::{ADC1, GPIO0, GPIO1};
use fixture_core::{current_scale, voltage_scale};

use crate::config::{SUPPLY_CURRENT_SCALE, SUPPLY_VOLTAGE_SCALE};
use crate::hal::DefmtDiagnostics;

/// Skalierte Versorgungswerte
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupplyReading {
    pub millivolts: f32,
    pub milliamps: f32,
}

/// ADC1 mit Spannungs- (GPIO0) und Strom-Kanal (GPIO1)
pub struct SupplyMonitor<'d> {
    adc: Adc<'d, ADC1<'d>, Blocking>,
    voltage_pin: AdcPin<GPIO0<'d>, ADC1<'d>>,
    current_pin: AdcPin<GPIO1<'d>, ADC1<'d>>,
}

impl<'d> SupplyMonitor<'d> {
    pub fn new(adc1: ADC1<'d>, voltage: GPIO0<'d>, current: GPIO1<'d>) -> Self {
        let mut config = AdcConfig::new();
        let voltage_pin = config.enable_pin(voltage, Attenuation::_11dB);
        let current_pin = config.enable_pin(current, Attenuation::_11dB);
        let adc = Adc::new(adc1, config);

        Self {
            adc,
            voltage_pin,
            current_pin,
        }
    }

    /// Einmal messen (Oneshot, blockierend)
    ///
    /// Gibt `None` zurück wenn der ADC einen Fehler meldet.
    pub fn read(&mut self) -> Option<SupplyReading> {
        let raw_voltage: u16 = nb::block!(self.adc.read_oneshot(&mut self.voltage_pin)).ok()?;
        let raw_current: u16 = nb::block!(self.adc.read_oneshot(&mut self.current_pin)).ok()?;

        let mut diag = DefmtDiagnostics;
        Some(SupplyReading {
            millivolts: voltage_scale(SUPPLY_VOLTAGE_SCALE, raw_voltage, &mut diag),
            milliamps: current_scale(SUPPLY_CURRENT_SCALE, raw_current, &mut diag),
        })
    }
}
