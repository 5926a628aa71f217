// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_constants_are_consistent() {
    assert!(PARTICLES_NARROW < PARTICLES_WIDE);
    assert!(SPEED_HALF_RANGE > 0.0);
    assert!(RADIUS_MIN > 0.0 && RADIUS_SPAN > 0.0);

    // Fresh particles start strictly inside the oscillation band
    assert!(OPACITY_INIT_MIN > OPACITY_LOW);
    assert!(OPACITY_INIT_MIN + OPACITY_INIT_SPAN <= OPACITY_HIGH);
    assert!(OPACITY_LOW < OPACITY_HIGH);

    // A single pulse step is small relative to the band
    assert!(PULSE_STEP_MIN > 0.0);
    assert!(PULSE_STEP_MIN + PULSE_STEP_SPAN < OPACITY_HIGH - OPACITY_LOW);

    assert!(HUE_MIN >= 0.0 && HUE_MIN + HUE_SPAN <= 360.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn connection_constants_are_consistent() {
    assert!(CONNECT_RADIUS > 0.0);
    // Connection lines stay fainter than any particle
    assert!(CONNECT_ALPHA_SCALE <= OPACITY_LOW);
    assert!(CONNECT_LINE_WIDTH > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fireworks_constants_are_consistent() {
    assert!(BURSTS_NARROW < BURSTS_WIDE);
    assert!(BURST_REGION_MIN_PCT + BURST_REGION_SPAN_PCT <= 100.0);
    assert!(BURST_DURATION_MIN_SEC > 0.0 && BURST_DURATION_SPAN_SEC > 0.0);

    // Spark fan wraps the circle exactly once
    assert_eq!(SPARKS_PER_BURST as f32 * SPARK_ANGLE_STEP_DEG, 360.0);

    // Every burst spawns inside the active window; lifetimes may spill
    // past it (accepted tail-off).
    let last_spawn_ms = (BURSTS_WIDE - 1) as f64 * BURST_STAGGER_SEC as f64 * 1000.0;
    assert!(last_spawn_ms < ACTIVE_WINDOW_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tone_constants_are_consistent() {
    // Ascending chime
    for pair in TONE_FREQUENCIES_HZ.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    // All four tones finish inside the active window
    let last_tone_end_ms = 3.0 * TONE_STAGGER_MS as f64 + TONE_DURATION_SEC * 1000.0;
    assert!(last_tone_end_ms < ACTIVE_WINDOW_MS);

    assert!(TONE_GAIN_FLOOR > 0.0, "exponential ramps cannot reach zero");
    assert!(TONE_GAIN_FLOOR < TONE_GAIN_START);
}
