//! Integration Tests für den kompletten Prüflauf

use fixture_core::{
    CheckKind, FailedCheck, FixturePlan, FixtureReport, Halt, Level, PinError, PinId, PinMode,
    StatusLeds, Verdict, run_fixture, set_pins_output, set_pins_pull_down, set_pins_pull_up,
    signal_report,
};
use fixture_tests::{MockDelay, SimulatedFixture};

const HARNESS_A: [PinId; 3] = [2, 3, 4];
const HARNESS_B: [PinId; 2] = [5, 6];
const SIGNALS: [PinId; 3] = [15, 16, 17];
const LEDS: StatusLeds = StatusLeds {
    error: 20,
    pass: 21,
};

/// Kabelbaum in Ordnung: A und B jeweils verbunden, Signale isoliert
fn good_harness() -> SimulatedFixture {
    let mut sim = SimulatedFixture::new();
    for pin in HARNESS_A
        .iter()
        .chain(HARNESS_B.iter())
        .chain(SIGNALS.iter())
        .chain([LEDS.error, LEDS.pass].iter())
    {
        sim.add_pin(*pin);
    }
    sim.join(2, 3);
    sim.join(3, 4);
    sim.join(5, 6);
    sim
}

fn plan<'a>(shorted: &'a [&'a [PinId]], isolated: &'a [&'a [PinId]]) -> FixturePlan<'a> {
    FixturePlan { shorted, isolated }
}

#[test]
fn test_good_harness_passes() {
    let mut sim = good_harness();
    let mut delay = MockDelay::new();
    let shorted: [&[PinId]; 2] = [&HARNESS_A, &HARNESS_B];
    let isolated: [&[PinId]; 1] = [&SIGNALS];

    let report = run_fixture(&mut sim, &mut delay, &plan(&shorted, &isolated)).unwrap();

    assert_eq!(report, FixtureReport::Pass);
    assert_eq!(report.verdict(), Verdict::Pass);
    assert_eq!(sim.max_outputs, 1);
}

#[test]
fn test_open_wire_in_second_harness() {
    let mut sim = good_harness();
    sim.isolate(6);
    let mut delay = MockDelay::new();
    let shorted: [&[PinId]; 2] = [&HARNESS_A, &HARNESS_B];
    let isolated: [&[PinId]; 1] = [&SIGNALS];

    let report = run_fixture(&mut sim, &mut delay, &plan(&shorted, &isolated)).unwrap();

    assert_eq!(
        report,
        FixtureReport::Fail(FailedCheck {
            kind: CheckKind::Shorts,
            bundle: 1,
        })
    );
    // Signale wurden nie getrieben
    assert!(!sim.write_log.iter().any(|(pin, _)| SIGNALS.contains(pin)));
}

#[test]
fn test_short_between_signals() {
    let mut sim = good_harness();
    sim.join(16, 17);
    let mut delay = MockDelay::new();
    let shorted: [&[PinId]; 1] = [&HARNESS_A];
    let isolated: [&[PinId]; 1] = [&SIGNALS];

    let report = run_fixture(&mut sim, &mut delay, &plan(&shorted, &isolated)).unwrap();

    assert_eq!(
        report,
        FixtureReport::Fail(FailedCheck {
            kind: CheckKind::NoConnect,
            bundle: 0,
        })
    );
}

#[test]
fn test_all_bundles_pulled_up_first() {
    let mut sim = good_harness();
    let mut delay = MockDelay::new();
    let shorted: [&[PinId]; 1] = [&HARNESS_B];
    let isolated: [&[PinId]; 1] = [&SIGNALS];

    run_fixture(&mut sim, &mut delay, &plan(&shorted, &isolated)).unwrap();

    let first_five: Vec<(PinId, PinMode)> = sim.mode_log.iter().take(5).copied().collect();
    assert_eq!(
        first_five,
        vec![
            (5, PinMode::InputPullUp),
            (6, PinMode::InputPullUp),
            (15, PinMode::InputPullUp),
            (16, PinMode::InputPullUp),
            (17, PinMode::InputPullUp),
        ]
    );
}

#[test]
fn test_empty_plan_passes() {
    let mut sim = SimulatedFixture::new();
    let mut delay = MockDelay::new();

    let report = run_fixture(&mut sim, &mut delay, &plan(&[], &[])).unwrap();
    assert_eq!(report, FixtureReport::Pass);
}

#[test]
fn test_unknown_pin_in_plan() {
    let mut sim = good_harness();
    let mut delay = MockDelay::new();
    let shorted: [&[PinId]; 1] = [&[2, 3, 30]];

    let result = run_fixture(&mut sim, &mut delay, &plan(&shorted, &[]));
    assert_eq!(result, Err(PinError::UnknownPin(30)));
}

// ============================================================================
// Tests: signal_report()
// ============================================================================

#[test]
fn test_signal_pass_report() {
    let mut sim = good_harness();
    let mut delay = MockDelay::new();

    let halt = signal_report(&mut sim, &mut delay, &FixtureReport::Pass, LEDS).unwrap();

    assert_eq!(halt, None);
    assert_eq!(sim.driven_level(LEDS.error), Level::Low);
    assert_eq!(delay.total_ms(), 5000);
}

#[test]
fn test_signal_fail_report_halts() {
    let mut sim = good_harness();
    let mut delay = MockDelay::new();
    let report = FixtureReport::Fail(FailedCheck {
        kind: CheckKind::Shorts,
        bundle: 0,
    });

    let halt = signal_report(&mut sim, &mut delay, &report, LEDS).unwrap();

    assert_eq!(halt, Some(Halt));
    assert_eq!(sim.driven_level(LEDS.error), Level::High);
    assert_eq!(sim.driven_level(LEDS.pass), Level::Low);
    assert_eq!(delay.total_ns, 0);
}

// ============================================================================
// Tests: Pin-Modus Helfer
// ============================================================================

#[test]
fn test_set_pins_modes() {
    let mut sim = good_harness();

    set_pins_output(&mut sim, &SIGNALS).unwrap();
    assert!(sim.all_in_mode(&SIGNALS, PinMode::Output));

    set_pins_pull_up(&mut sim, &SIGNALS).unwrap();
    assert!(sim.all_in_mode(&SIGNALS, PinMode::InputPullUp));

    set_pins_pull_down(&mut sim, &SIGNALS).unwrap();
    assert!(sim.all_in_mode(&SIGNALS, PinMode::InputPullDown));
}

#[test]
fn test_set_pins_stops_at_first_error() {
    let mut sim = good_harness();
    sim.fail_mode_on = Some((16, PinMode::Output));

    let result = set_pins_output(&mut sim, &SIGNALS);

    assert_eq!(result, Err(PinError::ModeChangeFailed));
    assert_eq!(sim.mode(15), PinMode::Output);
    assert_eq!(sim.mode(16), PinMode::InputPullDown);
    assert_eq!(sim.mode(17), PinMode::InputPullDown);
}
