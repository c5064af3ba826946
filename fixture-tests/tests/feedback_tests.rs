//! Integration Tests für LED-Rückmeldung
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen SimulatedFixture + MockDelay

use fixture_core::{
    BlinkSpeed, Halt, Level, PinError, Polarity, StatusLeds, blink, blink_fast, blink_fast_inv,
    blink_slow, blink_slow_inv, set_error_leds, set_pass_leds,
};
use fixture_tests::{MockDelay, SimulatedFixture};

const LED: u8 = 12;
const LEDS: StatusLeds = StatusLeds {
    error: 10,
    pass: 11,
};

fn led_fixture() -> SimulatedFixture {
    SimulatedFixture::isolated(&[LEDS.error, LEDS.pass, LED])
}

// ============================================================================
// Tests: Blinken
// ============================================================================

#[test]
fn test_blink_fast_timing_and_levels() {
    let mut sim = led_fixture();
    let mut delay = MockDelay::new();

    blink_fast(&mut sim, &mut delay, LED, 3).unwrap();

    assert_eq!(sim.write_log.len(), 6);
    assert_eq!(sim.write_log[0], (LED, Level::High));
    assert_eq!(sim.write_log[1], (LED, Level::Low));
    assert_eq!(delay.ms_calls, vec![70; 6]);
    assert_eq!(delay.total_ms(), 420);
    assert_eq!(sim.driven_level(LED), Level::Low);
}

#[test]
fn test_blink_slow_timing() {
    let mut sim = led_fixture();
    let mut delay = MockDelay::new();

    blink_slow(&mut sim, &mut delay, LED, 2).unwrap();

    assert_eq!(delay.ms_calls, vec![300; 4]);
    assert_eq!(delay.total_ms(), 1200);
}

#[test]
fn test_blink_inverted_ends_high() {
    let mut sim = led_fixture();
    let mut delay = MockDelay::new();

    blink_fast_inv(&mut sim, &mut delay, LED, 1).unwrap();
    assert_eq!(sim.write_log, vec![(LED, Level::Low), (LED, Level::High)]);

    blink_slow_inv(&mut sim, &mut delay, LED, 1).unwrap();
    assert_eq!(sim.driven_level(LED), Level::High);
    assert_eq!(delay.ms_calls, vec![70, 70, 300, 300]);
}

#[test]
fn test_blink_zero_times_does_nothing() {
    let mut sim = led_fixture();
    let mut delay = MockDelay::new();

    blink(&mut sim, &mut delay, LED, 0, BlinkSpeed::Slow, Polarity::Normal).unwrap();

    assert!(sim.write_log.is_empty());
    assert_eq!(delay.total_ns, 0);
}

#[test]
fn test_blink_unknown_pin() {
    let mut sim = led_fixture();
    let mut delay = MockDelay::new();

    let result = blink_fast(&mut sim, &mut delay, 99, 1);
    assert_eq!(result, Err(PinError::UnknownPin(99)));
    assert_eq!(delay.total_ns, 0);
}

// ============================================================================
// Tests: Pass/Error-Zustand
// ============================================================================

#[test]
fn test_set_error_leds_returns_halt() {
    let mut sim = led_fixture();

    let halt = set_error_leds(&mut sim, LEDS).unwrap();

    assert_eq!(halt, Halt);
    assert_eq!(
        sim.write_log,
        vec![(LEDS.pass, Level::Low), (LEDS.error, Level::High)]
    );
}

#[test]
fn test_set_pass_leds_blinks_five_times() {
    let mut sim = led_fixture();
    let mut delay = MockDelay::new();

    set_pass_leds(&mut sim, &mut delay, LEDS).unwrap();

    assert_eq!(sim.write_log[0], (LEDS.error, Level::Low));
    let pass_writes: Vec<Level> = sim
        .write_log
        .iter()
        .filter(|(pin, _)| *pin == LEDS.pass)
        .map(|(_, level)| *level)
        .collect();
    assert_eq!(pass_writes.len(), 10);
    assert_eq!(pass_writes.first(), Some(&Level::High));
    assert_eq!(pass_writes.last(), Some(&Level::Low));

    assert_eq!(delay.ms_calls, vec![500; 10]);
    assert_eq!(delay.total_ms(), 5000);
}
