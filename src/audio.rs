//! Optional WebAudio tone backend. The context is created lazily on the
//! first trigger (a user gesture, so autoplay policy allows it) and its
//! absence is never an error: every tone simply no-ops.

use crate::core::constants::{TONE_GAIN_FLOOR, TONE_GAIN_START};
use web_sys as web;

#[derive(Default)]
pub struct AudioHandle {
    ctx: Option<web::AudioContext>,
    attempted: bool,
}

impl AudioHandle {
    pub fn new() -> Self {
        Self::default()
    }

    fn context(&mut self) -> Option<&web::AudioContext> {
        if !self.attempted {
            self.attempted = true;
            match web::AudioContext::new() {
                Ok(ctx) => {
                    _ = ctx.resume();
                    self.ctx = Some(ctx);
                }
                Err(e) => {
                    log::warn!("AudioContext unavailable, tones disabled: {:?}", e);
                }
            }
        }
        self.ctx.as_ref()
    }

    /// Fire one decaying sine pulse. Any node or scheduling failure is
    /// discarded; the visuals never depend on audio succeeding.
    pub fn play_tone(&mut self, frequency_hz: f32, duration_sec: f64) {
        let Some(ctx) = self.context() else {
            return;
        };
        let Ok(osc) = web::OscillatorNode::new(ctx) else {
            return;
        };
        osc.set_type(web::OscillatorType::Sine);
        osc.frequency().set_value(frequency_hz);

        let Ok(gain) = web::GainNode::new(ctx) else {
            return;
        };
        let now = ctx.current_time();
        _ = gain.gain().set_value_at_time(TONE_GAIN_START, now);
        _ = gain
            .gain()
            .exponential_ramp_to_value_at_time(TONE_GAIN_FLOOR, now + duration_sec);

        _ = osc.connect_with_audio_node(&gain);
        _ = gain.connect_with_audio_node(&ctx.destination());
        _ = osc.start_with_when(now);
        _ = osc.stop_with_when(now + duration_sec);
    }
}
