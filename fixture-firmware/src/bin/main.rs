// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_hal bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

use defmt::{error, info, warn};
use embedded_hal::delay::DelayNs;

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use esp_hal::gpio::Flex;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

use fixture_core::{blink_fast, set_pins_output};
use pin_fixture::config::{
    ERROR_LED_PIN, FIXTURE_PLAN, IDLE_INTERVAL_MS, PASS_LED_PIN, PIN_BANK_SIZE,
    STARTUP_BLINK_COUNT, STATUS_LEDS,
};
use pin_fixture::hal::EspPinBank;
use pin_fixture::measurement::SupplyMonitor;
use pin_fixture::{Verdict, run_fixture, signal_report};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert GPIOs, führt einen Prüflauf aus und zeigt das Ergebnis an.
/// Alles läuft blockierend in einem Thread - kein Executor.
#[esp_hal::main]
fn main() -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let mut delay = Delay::new();

    // Pin-Bank: Reihenfolge egal, Zuordnung über GPIO-Nummer
    let mut pins: EspPinBank<'_, PIN_BANK_SIZE> = EspPinBank::new([
        (2, Flex::new(peripherals.GPIO2)),
        (3, Flex::new(peripherals.GPIO3)),
        (4, Flex::new(peripherals.GPIO4)),
        (5, Flex::new(peripherals.GPIO5)),
        (6, Flex::new(peripherals.GPIO6)),
        (7, Flex::new(peripherals.GPIO7)),
        (10, Flex::new(peripherals.GPIO10)),
        (11, Flex::new(peripherals.GPIO11)),
        (ERROR_LED_PIN, Flex::new(peripherals.GPIO18)),
        (PASS_LED_PIN, Flex::new(peripherals.GPIO19)),
    ]);

    // Konfiguration gegen Bank prüfen - fehlende Pins sind ein Build-Fehler im Adapter
    if !pins.contains_all(FIXTURE_PLAN.all_pins()) {
        panic!("Fixture plan references pins that are not in the pin bank");
    }

    // Status-LEDs als Output, kurzer Lampentest
    let leds = [ERROR_LED_PIN, PASS_LED_PIN];
    if let Err(e) = set_pins_output(&mut pins, &leds) {
        error!("Failed to configure status LEDs: {}", e);
    }
    for led in leds {
        if let Err(e) = blink_fast(&mut pins, &mut delay, led, STARTUP_BLINK_COUNT) {
            warn!("Lamp test failed on pin {}: {}", led, e);
        }
    }

    // Versorgung des Prüflings messen (nur Info, kein Prüfkriterium)
    let mut supply = SupplyMonitor::new(peripherals.ADC1, peripherals.GPIO0, peripherals.GPIO1);
    match supply.read() {
        Some(reading) => info!(
            "Supply: {} mV, {} mA",
            reading.millivolts, reading.milliamps
        ),
        None => warn!("Supply measurement failed"),
    }

    info!("Starting fixture run");
    let report = match run_fixture(&mut pins, &mut delay, &FIXTURE_PLAN) {
        Ok(report) => report,
        Err(e) => {
            error!("Pin error during fixture run: {}", e);
            // Hardware-Fehler wie Fail behandeln: Error-LED und anhalten
            let halt = fixture_core::set_error_leds(&mut pins, STATUS_LEDS);
            match halt {
                Ok(halt) => halt.park(),
                Err(_) => panic!("Status LEDs unavailable"),
            }
        }
    };

    match report.verdict() {
        Verdict::Pass => info!("Fixture result: {}", report),
        Verdict::Fail => error!("Fixture result: {}", report),
    }

    match signal_report(&mut pins, &mut delay, &report, STATUS_LEDS) {
        Ok(Some(halt)) => halt.park(),
        Ok(None) => {}
        Err(e) => error!("Failed to signal result: {}", e),
    }

    // Bestanden: warten auf Reset für den nächsten Kabelbaum
    info!("Fixture idle - reset for next harness");
    loop {
        delay.delay_ms(IDLE_INTERVAL_MS);
    }
}
