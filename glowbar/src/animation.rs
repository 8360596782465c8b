//! Progress animation state machine.
//!
//! `Filling` → `Glowing` → `Done`. The machine never reads a clock: the host
//! feeds it the seconds elapsed since the run started, once per frame, and
//! gets back everything it needs to draw that frame.

use serde::Serialize;
use tracing::debug;

use crate::color::{lerp, Color};
use crate::config::AnimationConfig;

/// Slack when comparing the glow clock against its duration. The clock is a
/// difference of two f32 timestamps, so 6.2 - 5.0 lands just under 1.2.
const CLOCK_EPSILON: f32 = 1e-4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// The bar is filling up.
    Filling,
    /// Progress reached 100%; the completion glow is playing.
    Glowing,
    /// Glow elapsed. The host draws blank frames from here on.
    Done,
}

/// Everything the host needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VisualParameters {
    pub phase: Phase,
    /// Fill ratio in [0, 1].
    pub progress: f32,
    pub fill_width: f32,
    /// Highlight left edge relative to the track's left edge, wobble included.
    pub highlight_offset: f32,
    /// The highlight is only drawn once the fill is wider than it.
    pub highlight_visible: bool,
    pub pulse_radius: f32,
    /// Pulse centre relative to the track's left edge.
    pub pulse_x: f32,
    /// 0 outside the glow phase.
    pub glow_mix: f32,
    pub fill_color: Color,
    pub bloom_alpha: u8,
    pub bloom_scale: (f32, f32),
    /// `round(progress * 100)`, what the percentage label shows.
    pub percent: i32,
}

impl VisualParameters {
    pub fn is_blank(&self) -> bool {
        self.phase == Phase::Done
    }
}

/// Mutable per-run animation state.
#[derive(Clone, Debug)]
pub struct AnimationState {
    config: AnimationConfig,
    elapsed_seconds: f32,
    progress: f32,
    finished: bool,
    glow_active: bool,
    glow_started_at: f32,
    glow_elapsed_seconds: f32,
    done: bool,
}

impl AnimationState {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            elapsed_seconds: 0.0,
            progress: 0.0,
            finished: false,
            glow_active: false,
            glow_started_at: 0.0,
            glow_elapsed_seconds: 0.0,
            done: false,
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed_seconds
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn glow_active(&self) -> bool {
        self.glow_active
    }

    /// Seconds since the glow started. Only meaningful while glowing.
    pub fn glow_elapsed_seconds(&self) -> f32 {
        self.glow_elapsed_seconds
    }

    pub fn done(&self) -> bool {
        self.done
    }

    pub fn phase(&self) -> Phase {
        if self.done {
            Phase::Done
        } else if self.glow_active {
            Phase::Glowing
        } else {
            Phase::Filling
        }
    }

    /// Advance to `elapsed` seconds since the run started.
    ///
    /// `elapsed` is expected to be non-decreasing between calls. Once the
    /// machine is `Done` the state is frozen and every call returns a blank
    /// frame.
    pub fn advance(&mut self, elapsed: f32) -> VisualParameters {
        if self.done {
            return self.snapshot(0.0);
        }
        self.elapsed_seconds = elapsed;

        if !self.finished {
            self.progress = fill_ratio(elapsed, self.config.fill_duration);
            if self.progress >= 1.0 {
                self.finished = true;
                self.glow_active = true;
                self.glow_started_at = elapsed;
                debug!(elapsed, "progress complete, glow started");
            }
        }

        let mut glow_mix = 0.0;
        if self.glow_active {
            self.glow_elapsed_seconds = (elapsed - self.glow_started_at).max(0.0);
            glow_mix = self.glow_mix();
            if self.glow_elapsed_seconds >= self.config.glow_duration - CLOCK_EPSILON {
                self.glow_active = false;
                self.done = true;
                debug!(elapsed, glow = self.glow_elapsed_seconds, "glow finished");
            }
        }

        self.snapshot(glow_mix)
    }

    /// `max(linear ramp, 0.5 + 0.5 sin(t * rate))` over the glow clock.
    fn glow_mix(&self) -> f32 {
        let t = self.glow_elapsed_seconds;
        let ramp = if self.config.glow_duration > 0.0 {
            (t / self.config.glow_duration).min(1.0)
        } else {
            1.0
        };
        let oscillation = 0.5 + 0.5 * (t * self.config.glow_oscillation_rate).sin();
        ramp.max(oscillation).clamp(0.0, 1.0)
    }

    /// Wobble and pulse run on the glow clock from the glow start on, on the
    /// run clock before it. The oscillation phase jumps when the glow starts.
    fn animation_time(&self) -> f32 {
        if self.glow_active || self.done {
            self.glow_elapsed_seconds
        } else {
            self.elapsed_seconds
        }
    }

    fn snapshot(&self, glow_mix: f32) -> VisualParameters {
        let cfg = &self.config;
        let progress = self.progress.clamp(0.0, 1.0);
        let t = self.animation_time();

        let fill_width = cfg.track_width * progress;
        let base_offset = (fill_width - cfg.highlight_width).clamp(0.0, cfg.highlight_travel());
        let wobble = cfg.wobble_amplitude * (t * cfg.wobble_frequency).sin();
        let pulse_radius = cfg.pulse_base_radius + cfg.pulse_amplitude * (t * cfg.pulse_frequency).sin();

        // A frame that flips to Done still carries the glow look of its last
        // glowing instant; the host blanks it anyway.
        let glowing = self.glow_active || (self.done && glow_mix > 0.0);
        let fill_color = if glowing {
            lerp(cfg.base_fill, cfg.glow_fill, glow_mix)
        } else {
            cfg.base_fill
        };
        let bloom_alpha = if glowing {
            (cfg.max_bloom_alpha * glow_mix).clamp(0.0, 255.0) as u8
        } else {
            0
        };
        let bloom_scale = (
            cfg.bloom_base_scale.0 + cfg.bloom_scale_growth.0 * glow_mix,
            cfg.bloom_base_scale.1 + cfg.bloom_scale_growth.1 * glow_mix,
        );

        VisualParameters {
            phase: self.phase(),
            progress,
            fill_width,
            highlight_offset: base_offset + wobble,
            highlight_visible: fill_width > cfg.highlight_width,
            pulse_radius,
            pulse_x: fill_width,
            glow_mix,
            fill_color,
            bloom_alpha,
            bloom_scale,
            percent: (progress * 100.0 + 0.5) as i32,
        }
    }
}

/// `min(elapsed / duration, 1)`, clamped below at 0. A non-positive duration
/// counts as already complete.
pub fn fill_ratio(elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    if elapsed.is_nan() {
        return 0.0;
    }
    (elapsed / duration).clamp(0.0, 1.0)
}
