/// Progress card palette and geometry.

pub use glowbar::Color;

/// Conversion into tiny-skia's float color.
pub trait ToSkia {
    fn to_skia(self) -> tiny_skia::Color;
}

impl ToSkia for Color {
    fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

// Background
pub const BG_TOP: Color = Color::rgb(24, 26, 38);
pub const BG_BOTTOM: Color = Color::rgb(30, 34, 48);
pub const BLANK: Color = Color::BLACK;

// Card
pub const CARD: Color = Color::rgba(36, 39, 52, 235);
pub const CARD_BORDER: Color = Color::rgba(70, 90, 120, 140);
pub const CARD_SHADOW: Color = Color::rgba(10, 10, 20, 110);

// Track and overlays
pub const TRACK: Color = Color::rgb(48, 53, 68);
pub const TRACK_BORDER: Color = Color::rgb(70, 80, 100);
pub const HIGHLIGHT: Color = Color::rgba(0xFF, 0xFF, 0xFF, 60);
pub const HIGHLIGHT_SOFT: Color = Color::rgba(0xFF, 0xFF, 0xFF, 24);
pub const PULSE: Color = Color::rgba(0xFF, 0xFF, 0xFF, 45);
pub const BLOOM: Color = Color::WHITE;

// Text
pub const TEXT_TITLE: Color = Color::rgb(198, 206, 224);
pub const TEXT_CAPTION: Color = Color::rgba(150, 160, 185, 200);
pub const TEXT_PERCENT: Color = Color::rgb(236, 243, 255);

pub const TITLE: &str = "Preparing Assets";
pub const CAPTION: &str = "Hang tight while we finish setting things up.";

// Font sizes
pub const FONT_SIZE_TITLE: f32 = 20.0;
pub const FONT_SIZE_CAPTION: f32 = 14.0;
pub const FONT_SIZE_PERCENT: f32 = 42.0;
/// Scale of the bitmap percentage glyphs when no font is loaded.
pub const BITMAP_PERCENT_SCALE: f32 = 1.6;

// Layout
pub const CARD_WIDTH: f32 = 500.0;
pub const CARD_HEIGHT: f32 = 200.0;
pub const CARD_OUTLINE: f32 = 1.2;
pub const SHADOW_OFFSET: f32 = 10.0;
pub const TRACK_OFFSET_Y: f32 = 24.0;
pub const TRACK_OUTLINE: f32 = 1.5;
pub const BLOOM_PADDING: (f32, f32) = (60.0, 30.0);
pub const HIGHLIGHT_SOFT_SCALE: (f32, f32) = (1.12, 1.35);
pub const HIGHLIGHT_SOFT_SHIFT: f32 = 10.0;
pub const PERCENT_OFFSET_Y: f32 = -10.0;
pub const TITLE_OFFSET_Y: f32 = -68.0;
pub const CAPTION_OFFSET_Y: f32 = 70.0;
