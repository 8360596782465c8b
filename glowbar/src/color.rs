//! 8-bit RGBA color and channel interpolation.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Blend towards `other` by `t` (clamped to [0, 1]).
    pub fn blend(self, other: Color, t: f32) -> Color {
        lerp(self, other, t)
    }
}

/// Interpolate every channel of `a` towards `b`.
///
/// `t` is clamped to [0, 1]; NaN is treated as 0. Each channel is rounded to
/// the nearest integer and saturated to 0..=255.
pub fn lerp(a: Color, b: Color, t: f32) -> Color {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    Color {
        r: channel(a.r, b.r, t),
        g: channel(a.g, b.g, t),
        b: channel(a.b, b.b, t),
        a: channel(a.a, b.a, t),
    }
}

fn channel(start: u8, end: u8, t: f32) -> u8 {
    let start = start as f32;
    let v = (start + (end as f32 - start) * t).round();
    // `as` saturates float-to-int casts
    v as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: Color = Color::rgb(82, 198, 151);
    const GLOW: Color = Color::rgb(196, 255, 228);

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(lerp(BASE, GLOW, 0.0), BASE);
        assert_eq!(lerp(BASE, GLOW, 1.0), GLOW);
        let clear = Color::rgba(10, 250, 0, 0);
        assert_eq!(lerp(clear, Color::WHITE, 1.0), Color::WHITE);
        assert_eq!(lerp(Color::WHITE, clear, 1.0), clear);
    }

    #[test]
    fn t_is_clamped() {
        assert_eq!(lerp(BASE, GLOW, -3.0), BASE);
        assert_eq!(lerp(BASE, GLOW, 7.5), GLOW);
        assert_eq!(lerp(BASE, GLOW, f32::NAN), BASE);
    }

    #[test]
    fn midpoint_rounds_to_nearest() {
        let c = lerp(Color::rgba(0, 0, 0, 0), Color::rgba(255, 1, 3, 255), 0.5);
        // 127.5 rounds away from zero, 0.5 too, 1.5 -> 2
        assert_eq!(c, Color::rgba(128, 1, 2, 128));
    }

    #[test]
    fn decreasing_channels_interpolate_down() {
        let c = lerp(Color::rgb(200, 100, 50), Color::rgb(100, 50, 0), 0.5);
        assert_eq!(c, Color::rgb(150, 75, 25));
    }

    #[test]
    fn monotonic_when_target_is_brighter() {
        let mut prev = BASE;
        for i in 0..=100 {
            let c = lerp(BASE, GLOW, i as f32 / 100.0);
            assert!(c.r >= prev.r && c.g >= prev.g && c.b >= prev.b && c.a >= prev.a);
            prev = c;
        }
        assert_eq!(prev, GLOW);
    }

    #[test]
    fn with_alpha_keeps_rgb() {
        assert_eq!(GLOW.with_alpha(40), Color::rgba(196, 255, 228, 40));
    }
}
