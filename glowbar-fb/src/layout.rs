/// Card layout: every rectangle of the progress card, centred on screen.

use glowbar::AnimationConfig;

use crate::theme;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn centered(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self {
            x: cx - w / 2.0,
            y: cy - h / 2.0,
            w,
            h,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// Static geometry of the card. Computed once per screen size.
#[derive(Clone, Debug, PartialEq)]
pub struct CardLayout {
    pub card: Rect,
    pub shadow: Rect,
    pub track: Rect,
    pub highlight_size: (f32, f32),
    /// Anchor of the percentage label (horizontal centre, vertical origin).
    pub percent_anchor: (f32, f32),
    pub title_center: (f32, f32),
    pub caption_center: (f32, f32),
}

impl CardLayout {
    pub fn new(screen_width: u32, screen_height: u32, anim: &AnimationConfig) -> Self {
        let sw = screen_width as f32;
        let sh = screen_height as f32;
        let (cx, cy) = (sw / 2.0, sh / 2.0);

        let card = Rect::centered(cx, cy, theme::CARD_WIDTH, theme::CARD_HEIGHT);
        let shadow = Rect {
            y: card.y + theme::SHADOW_OFFSET,
            ..card
        };
        let track = Rect::centered(cx, cy + theme::TRACK_OFFSET_Y, anim.track_width, anim.track_height);

        Self {
            card,
            shadow,
            track,
            highlight_size: (anim.highlight_width, anim.highlight_height),
            percent_anchor: (cx, cy + theme::PERCENT_OFFSET_Y),
            title_center: (cx, cy + theme::TITLE_OFFSET_Y),
            caption_center: (cx, cy + theme::CAPTION_OFFSET_Y),
        }
    }

    /// Bloom halo around the track, grown by `scale` about the track centre.
    pub fn bloom(&self, scale: (f32, f32)) -> Rect {
        let (cx, cy) = self.track.center();
        Rect::centered(
            cx,
            cy,
            (self.track.w + theme::BLOOM_PADDING.0) * scale.0,
            (self.track.h + theme::BLOOM_PADDING.1) * scale.1,
        )
    }

    pub fn fill(&self, fill_width: f32) -> Rect {
        Rect {
            w: fill_width.max(0.0),
            ..self.track
        }
    }

    /// Highlight rect with its left edge `offset` px into the track.
    pub fn highlight(&self, offset: f32) -> Rect {
        let (_, cy) = self.track.center();
        let (w, h) = self.highlight_size;
        Rect {
            x: self.track.x + offset,
            y: cy - h / 2.0,
            w,
            h,
        }
    }

    /// The wider, fainter copy behind the highlight.
    pub fn highlight_soft(&self, offset: f32) -> Rect {
        let (_, cy) = self.track.center();
        let (sx, sy) = theme::HIGHLIGHT_SOFT_SCALE;
        let (w, h) = (self.highlight_size.0 * sx, self.highlight_size.1 * sy);
        Rect {
            x: self.track.x + offset - theme::HIGHLIGHT_SOFT_SHIFT,
            y: cy - h / 2.0,
            w,
            h,
        }
    }

    /// Pulse centre for a pulse `pulse_x` px into the track.
    pub fn pulse_center(&self, pulse_x: f32) -> (f32, f32) {
        (self.track.x + pulse_x, self.track.center().1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock() -> CardLayout {
        CardLayout::new(640, 360, &AnimationConfig::default())
    }

    #[test]
    fn card_and_track_are_centred() {
        let l = stock();
        assert_eq!(l.card, Rect { x: 70.0, y: 80.0, w: 500.0, h: 200.0 });
        assert_eq!(l.shadow.y, 90.0);
        assert_eq!(l.track, Rect { x: 110.0, y: 189.0, w: 420.0, h: 30.0 });
        assert_eq!(l.percent_anchor, (320.0, 170.0));
    }

    #[test]
    fn bloom_scales_about_track_centre() {
        let l = stock();
        let b = l.bloom((1.0, 1.0));
        assert_eq!(b.center(), l.track.center());
        assert_eq!((b.w, b.h), (480.0, 60.0));
        let grown = l.bloom((1.2, 1.55));
        let (gx, gy) = grown.center();
        assert!((gx - 320.0).abs() < 1e-3 && (gy - 204.0).abs() < 1e-3);
        assert!(grown.w > b.w && grown.h > b.h);
    }

    #[test]
    fn overlays_sit_on_track_midline() {
        let l = stock();
        let (_, cy) = l.track.center();
        assert_eq!(l.highlight(50.0).center().1, cy);
        assert_eq!(l.highlight(50.0).x, 160.0);
        assert_eq!(l.highlight_soft(50.0).x, 150.0);
        assert_eq!(l.pulse_center(420.0), (530.0, cy));
        assert_eq!(l.fill(-3.0).w, 0.0);
    }
}
