//! Audio feedback
//!
//! Each game event maps to a short square-wave beep. Playback is
//! fire-and-forget: nothing here can fail back into the simulation.

use crate::sim::GameEvent;

/// A single beep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub freq_hz: f32,
    pub duration_ms: u32,
}

impl Tone {
    pub const WALL: Tone = Tone {
        freq_hz: 220.0,
        duration_ms: 50,
    };
    pub const PADDLE: Tone = Tone {
        freq_hz: 440.0,
        duration_ms: 50,
    };
    /// Long and low, to rattle whoever just lost the point
    pub const SCORE: Tone = Tone {
        freq_hz: 110.0,
        duration_ms: 500,
    };

    pub fn for_event(event: GameEvent) -> Self {
        match event {
            GameEvent::WallBounce => Self::WALL,
            GameEvent::PaddleHit => Self::PADDLE,
            GameEvent::Score => Self::SCORE,
        }
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_ms as f64 / 1000.0
    }
}

/// Anything that can make a noise for a game event
pub trait AudioFeedback {
    fn play(&self, event: GameEvent);
}

/// No sound at all
#[derive(Debug, Default)]
pub struct SilentAudio;

impl AudioFeedback for SilentAudio {
    fn play(&self, _event: GameEvent) {}
}

/// Writes tones to the log instead of a speaker (native builds)
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioFeedback for LogAudio {
    fn play(&self, event: GameEvent) {
        let tone = Tone::for_event(event);
        log::debug!(
            "beep {:?}: {} Hz for {} ms",
            event,
            tone.freq_hz,
            tone.duration_ms
        );
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudio;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{AudioFeedback, Tone};
    use crate::settings::Settings;
    use crate::sim::GameEvent;

    /// Web Audio output
    pub struct WebAudio {
        ctx: Option<AudioContext>,
        volume: f32,
        muted: bool,
    }

    impl WebAudio {
        pub fn new(settings: &Settings) -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                volume: settings.effective_volume(),
                muted: false,
            }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        /// Temporary mute on top of the configured volume (window blur)
        pub fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }

        pub fn apply_settings(&mut self, settings: &Settings) {
            self.volume = settings.effective_volume();
        }

        fn create_osc(&self, ctx: &AudioContext, freq: f32) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(OscillatorType::Square);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }
    }

    impl AudioFeedback for WebAudio {
        fn play(&self, event: GameEvent) {
            if self.muted || self.volume <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };

            let tone = Tone::for_event(event);
            let Some((osc, gain)) = self.create_osc(ctx, tone.freq_hz) else {
                log::warn!("Could not build oscillator for {:?}", event);
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(self.volume, t).ok();
            osc.start().ok();
            osc.stop_with_when(t + tone.duration_secs()).ok();
        }
    }
}
