// Host-side tests for the fireworks sequencer core.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod fireworks {
    include!("../src/core/fireworks.rs");
}

use constants::*;
use fireworks::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn tone_schedule_is_the_fixed_rising_chime() {
    let tones = tone_schedule();
    assert_eq!(tones.len(), 4);
    let expected_freqs = [440.0, 554.0, 659.0, 880.0];
    let expected_offsets = [0, 200, 400, 600];
    for (i, tone) in tones.iter().enumerate() {
        assert_eq!(tone.frequency_hz, expected_freqs[i]);
        assert_eq!(tone.start_offset_ms, expected_offsets[i]);
        assert_eq!(tone.duration_sec, 0.5);
    }
}

#[test]
fn burst_count_follows_viewport_width() {
    assert_eq!(burst_count_for(375.0), BURSTS_NARROW);
    assert_eq!(burst_count_for(768.0), BURSTS_WIDE);

    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(plan_bursts(375.0, &mut rng).len(), 10);
    assert_eq!(plan_bursts(1440.0, &mut rng).len(), 20);
}

#[test]
fn bursts_spawn_in_the_central_region_with_staggered_delays() {
    let mut rng = StdRng::seed_from_u64(5);
    let bursts = plan_bursts(1440.0, &mut rng);
    for (i, b) in bursts.iter().enumerate() {
        assert!(b.left_pct >= 10.0 && b.left_pct < 90.0);
        assert!(b.top_pct >= 10.0 && b.top_pct < 90.0);
        assert!((b.delay_sec - i as f32 * 0.15).abs() < 1e-6);
        assert!(b.duration_sec >= 2.0 && b.duration_sec < 3.0);
    }
}

#[test]
fn spark_fan_covers_the_full_circle() {
    let sparks = spark_layout();
    assert_eq!(sparks.len(), 8);
    for (j, s) in sparks.iter().enumerate() {
        assert!((s.angle_deg - j as f32 * 45.0).abs() < 1e-6);
        assert!((s.reveal_delay_sec - (0.5 + j as f32 * 0.1)).abs() < 1e-6);
    }
    // Eight 45-degree steps wrap exactly once
    assert_eq!(
        sparks.len() as f32 * SPARK_ANGLE_STEP_DEG,
        360.0
    );
}

#[test]
fn trigger_opens_the_window_immediately_and_closes_at_4000ms() {
    let mut seq = Sequencer::new();
    assert!(!seq.is_active(0.0));

    seq.trigger(1000.0);
    assert!(seq.is_active(1000.0));
    assert!(seq.is_active(4999.9));
    assert!(!seq.is_active(5000.0));
}

#[test]
fn expire_only_fires_once_the_deadline_passes() {
    let mut seq = Sequencer::new();
    seq.trigger(0.0);
    assert!(!seq.expire(3999.9));
    assert!(seq.is_active(3999.9));
    assert!(seq.expire(4000.0));
    assert!(!seq.is_active(4000.0));
    // Already cleared; a duplicate timer is a no-op.
    assert!(!seq.expire(9000.0));
}

#[test]
fn retrigger_rearms_the_window_from_the_new_trigger_time() {
    let mut seq = Sequencer::new();
    seq.trigger(0.0);
    seq.trigger(2000.0);

    // The first trigger's timer fires at 4000ms and must not clear the
    // re-armed window.
    assert!(!seq.expire(4000.0));
    assert!(seq.is_active(5999.9));

    // The second trigger's timer closes it at 6000ms.
    assert!(seq.expire(6000.0));
    assert!(!seq.is_active(6000.0));
}
