//! Fixed animation and glyph constants.
//!
//! Both structures are built once at startup and handed to the state machine
//! and the glyph renderer by reference. `Default` reproduces the stock look of
//! the progress card; tests construct their own (e.g. very short durations).

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Timing, geometry and palette of the progress animation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Seconds from 0% to 100%.
    pub fill_duration: f32,
    /// Seconds the completion glow lasts before the frame goes blank.
    pub glow_duration: f32,

    pub track_width: f32,
    pub track_height: f32,
    pub highlight_width: f32,
    pub highlight_height: f32,

    /// Horizontal highlight wobble, pixels and rad/s.
    pub wobble_amplitude: f32,
    pub wobble_frequency: f32,

    pub pulse_base_radius: f32,
    pub pulse_amplitude: f32,
    pub pulse_frequency: f32,

    /// Angular rate of the glow-mix oscillation, rad/s.
    pub glow_oscillation_rate: f32,

    pub base_fill: Color,
    pub glow_fill: Color,

    /// Bloom alpha at full glow mix.
    pub max_bloom_alpha: f32,
    /// Bloom (x, y) scale at zero glow mix.
    pub bloom_base_scale: (f32, f32),
    /// Added to the bloom scale at full glow mix.
    pub bloom_scale_growth: (f32, f32),
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            fill_duration: 5.0,
            glow_duration: 1.2,
            track_width: 420.0,
            track_height: 30.0,
            highlight_width: 110.0,
            highlight_height: 24.0,
            wobble_amplitude: 12.0,
            wobble_frequency: 2.4,
            pulse_base_radius: 14.0,
            pulse_amplitude: 5.0,
            pulse_frequency: 6.0,
            glow_oscillation_rate: 4.5,
            base_fill: Color::rgb(82, 198, 151),
            glow_fill: Color::rgb(196, 255, 228),
            max_bloom_alpha: 180.0,
            bloom_base_scale: (1.0, 1.2),
            bloom_scale_growth: (0.2, 0.35),
        }
    }
}

impl AnimationConfig {
    /// Same look, different timing.
    pub fn with_durations(fill_duration: f32, glow_duration: f32) -> Self {
        Self {
            fill_duration,
            glow_duration,
            ..Self::default()
        }
    }

    /// Horizontal room the highlight can travel inside the track.
    pub fn highlight_travel(&self) -> f32 {
        (self.track_width - self.highlight_width).max(0.0)
    }
}

/// Cell geometry for the bitmap percentage glyphs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlyphConfig {
    /// Cell side at scale 1.0.
    pub base_pixel_unit: f32,
    /// Gap between cells as a fraction of the cell side.
    pub gap_ratio: f32,
    /// Space between glyphs as a fraction of the cell side.
    pub spacing_ratio: f32,
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            base_pixel_unit: 6.0,
            gap_ratio: 0.22,
            spacing_ratio: 1.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_card() {
        let cfg = AnimationConfig::default();
        assert_eq!(cfg.fill_duration, 5.0);
        assert_eq!(cfg.glow_duration, 1.2);
        assert_eq!(cfg.highlight_travel(), 310.0);
        assert_eq!(cfg.highlight_height, cfg.track_height - 6.0);
    }

    #[test]
    fn travel_never_negative() {
        let cfg = AnimationConfig {
            highlight_width: 500.0,
            ..AnimationConfig::default()
        };
        assert_eq!(cfg.highlight_travel(), 0.0);
    }

    #[test]
    fn config_round_trips_through_json() {
        let cfg = AnimationConfig::with_durations(0.5, 0.25);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: AnimationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
