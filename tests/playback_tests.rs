use std::time::Duration;

use barrace_rs::api::{RaceEngine, RaceEngineConfig};
use barrace_rs::core::{TradeTimeSeries, Viewport};
use barrace_rs::render::NullRenderer;

const THREE_YEARS: &str = r#"{
  "years": [2019, 2020, 2021],
  "data": [
    {"year": 2019, "products": [{"k": 10101, "v": 5.0}, {"k": 10102, "v": 12.5}]},
    {"year": 2020, "products": [{"k": 10101, "v": 7.0}, {"k": 10103, "v": 3.0}]},
    {"year": 2021, "products": [{"k": 10102, "v": 9.0}]}
  ]
}"#;

const TICK: Duration = Duration::from_millis(900);

fn engine() -> RaceEngine<NullRenderer> {
    let series = TradeTimeSeries::from_json_str(THREE_YEARS).expect("series");
    let config = RaceEngineConfig::new(Viewport::new(1280, 720));
    RaceEngine::new(NullRenderer::default(), series, config).expect("engine init")
}

#[test]
fn engine_starts_paused_at_the_first_year() {
    let engine = engine();
    assert_eq!(engine.year_index(), 0);
    assert_eq!(engine.current_year(), Some(2019));
    assert!(!engine.is_playing());
}

#[test]
fn playback_advances_one_year_per_tick_and_auto_pauses_at_the_end() {
    let mut engine = engine();
    engine.play();
    assert!(engine.is_playing());

    engine.step(TICK).expect("step");
    assert_eq!(engine.year_index(), 1);

    engine.step(TICK).expect("step");
    assert_eq!(engine.year_index(), 2);
    assert!(engine.is_playing());

    // The tick that would step past the last year pauses instead of
    // wrapping.
    engine.step(TICK).expect("step");
    assert_eq!(engine.year_index(), 2);
    assert!(!engine.is_playing());
}

#[test]
fn playing_at_the_last_year_pauses_on_the_first_tick() {
    let mut engine = engine();
    engine.scrub_to(2).expect("scrub");
    engine.play();
    engine.step(TICK).expect("step");
    assert_eq!(engine.year_index(), 2);
    assert!(!engine.is_playing());
}

#[test]
fn a_partial_interval_does_not_advance_the_year() {
    let mut engine = engine();
    engine.play();
    engine.step(TICK / 2).expect("step");
    assert_eq!(engine.year_index(), 0);
    assert!(engine.is_playing());
}

#[test]
fn scrubbing_pauses_regardless_of_timer_phase() {
    let mut engine = engine();
    engine.play();
    engine.step(TICK / 3).expect("step");

    engine.scrub_to(1).expect("scrub");
    assert_eq!(engine.year_index(), 1);
    assert!(!engine.is_playing());

    // Timer phase was released with the Playing state: another partial
    // step must not advance anything.
    engine.step(TICK).expect("step");
    assert_eq!(engine.year_index(), 1);
}

#[test]
fn scrub_indices_are_clamped_to_the_year_range() {
    let mut engine = engine();
    engine.scrub_to(99).expect("scrub");
    assert_eq!(engine.year_index(), 2);
}

#[test]
fn changing_top_n_keeps_playback_running() {
    let mut engine = engine();
    engine.play();
    engine.set_top_n_input(Some("5")).expect("top n");
    assert!(engine.is_playing());
    assert_eq!(engine.top_n(), 5);

    engine.pause();
    engine.set_top_n_input(Some("oops")).expect("top n");
    assert!(!engine.is_playing());
    assert_eq!(engine.top_n(), 30);
}

#[test]
fn playback_snapshot_mirrors_button_enabled_state() {
    let mut engine = engine();
    let snapshot = engine.playback_snapshot();
    assert!(snapshot.can_play);
    assert!(!snapshot.can_pause);

    engine.play();
    let snapshot = engine.playback_snapshot();
    assert!(!snapshot.can_play);
    assert!(snapshot.can_pause);
}
