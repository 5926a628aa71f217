// Fireworks sequencing: the tone schedule, the burst/spark layout and
// the active-window state machine. The browser side only executes what
// is planned here. Plain `//` headers keep the file include!-able from
// the host-side tests.

use super::constants::*;
use rand::Rng;
use smallvec::SmallVec;

/// One scheduled audio pulse tied to a trigger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TonePlan {
    pub frequency_hz: f32,
    pub start_offset_ms: i32,
    pub duration_sec: f64,
}

/// The fixed four-tone rising chime played on every trigger.
pub fn tone_schedule() -> [TonePlan; 4] {
    std::array::from_fn(|i| TonePlan {
        frequency_hz: TONE_FREQUENCIES_HZ[i],
        start_offset_ms: i as i32 * TONE_STAGGER_MS,
        duration_sec: TONE_DURATION_SEC,
    })
}

/// One spawned firework visual, placed in viewport percent so the DOM
/// layer can position it without knowing pixel sizes.
#[derive(Clone, Copy, Debug)]
pub struct BurstPlan {
    pub left_pct: f32,
    pub top_pct: f32,
    pub delay_sec: f32,
    pub duration_sec: f32,
}

/// One of the eight radial sparks every burst carries.
#[derive(Clone, Copy, Debug)]
pub struct SparkPlan {
    pub angle_deg: f32,
    pub reveal_delay_sec: f32,
}

#[inline]
pub fn burst_count_for(viewport_width: f32) -> usize {
    if viewport_width < NARROW_VIEWPORT_PX {
        BURSTS_NARROW
    } else {
        BURSTS_WIDE
    }
}

/// Lay out one trigger's worth of bursts: random origins inside the
/// central region, staggered spawn delays, randomized lifetimes.
pub fn plan_bursts<R: Rng>(viewport_width: f32, rng: &mut R) -> SmallVec<[BurstPlan; BURSTS_WIDE]> {
    (0..burst_count_for(viewport_width))
        .map(|i| BurstPlan {
            left_pct: BURST_REGION_MIN_PCT + rng.gen::<f32>() * BURST_REGION_SPAN_PCT,
            top_pct: BURST_REGION_MIN_PCT + rng.gen::<f32>() * BURST_REGION_SPAN_PCT,
            delay_sec: i as f32 * BURST_STAGGER_SEC,
            duration_sec: BURST_DURATION_MIN_SEC + rng.gen::<f32>() * BURST_DURATION_SPAN_SEC,
        })
        .collect()
}

/// The spark fan is identical for every burst: 45° increments, each
/// spark revealed a beat after the previous one.
pub fn spark_layout() -> [SparkPlan; SPARKS_PER_BURST] {
    std::array::from_fn(|j| SparkPlan {
        angle_deg: j as f32 * SPARK_ANGLE_STEP_DEG,
        reveal_delay_sec: SPARK_BASE_DELAY_SEC + j as f32 * SPARK_STAGGER_SEC,
    })
}

/// Active-window state for the burst layer.
///
/// `trigger` re-arms the deadline unconditionally, so triggering while a
/// window is already open restarts the full 4 s from that moment. The
/// end-of-window action calls `expire`, which refuses to clear the flag
/// while a later trigger's deadline is still pending; a stale timer
/// therefore never cuts a re-armed show short.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sequencer {
    active_until_ms: Option<f64>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&mut self, now_ms: f64) {
        self.active_until_ms = Some(now_ms + ACTIVE_WINDOW_MS);
    }

    pub fn is_active(&self, now_ms: f64) -> bool {
        self.active_until_ms.is_some_and(|t| now_ms < t)
    }

    /// Clear the flag once the current deadline has passed. Returns true
    /// when the caller should tear the burst layer down.
    pub fn expire(&mut self, now_ms: f64) -> bool {
        match self.active_until_ms {
            Some(t) if now_ms >= t => {
                self.active_until_ms = None;
                true
            }
            _ => false,
        }
    }
}
