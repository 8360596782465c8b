use glowbar::glyph::{GlyphMetrics, Symbol};
use glowbar::{layout_percentage, measure_percentage, render_percentage, Color, FillTarget, GlyphConfig};

#[derive(Default)]
struct Canvas {
    rects: Vec<(f32, f32, f32, f32, Color)>,
}

impl FillTarget for Canvas {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.rects.push((x, y, w, h, color));
    }
}

fn draw(value: i32) -> Canvas {
    let mut canvas = Canvas::default();
    render_percentage(&mut canvas, (320.0, 170.0), value, 1.6, Color::WHITE, &GlyphConfig::default());
    canvas
}

#[test]
fn zero_is_digit_then_percent_centred() {
    let cfg = GlyphConfig::default();
    let layout = layout_percentage((320.0, 170.0), 0, 1.6, &cfg);
    let symbols: Vec<Symbol> = layout.glyphs.iter().map(|(s, _)| *s).collect();
    assert_eq!(symbols, vec![Symbol::Digit(0), Symbol::Percent]);

    let m = layout.metrics;
    let left = layout.glyphs[0].1;
    let right = layout.glyphs[1].1 + m.glyph_width;
    assert!(((left + right) / 2.0 - 320.0).abs() < 1e-3);

    let canvas = draw(0);
    // 12 cells for "0", 5 for "%"
    assert_eq!(canvas.rects.len(), 17);
    assert!(canvas.rects.iter().all(|r| r.2 == m.pixel_size && r.3 == m.pixel_size));
    assert!(canvas.rects.iter().all(|r| r.1 >= 170.0));
}

#[test]
fn hundred_uses_three_digits_and_documented_width() {
    let cfg = GlyphConfig::default();
    let layout = layout_percentage((0.0, 0.0), 100, 2.0, &cfg);
    let symbols: Vec<Symbol> = layout.glyphs.iter().map(|(s, _)| *s).collect();
    assert_eq!(
        symbols,
        vec![Symbol::Digit(1), Symbol::Digit(0), Symbol::Digit(0), Symbol::Percent]
    );

    let m = GlyphMetrics::new(2.0, &cfg);
    let expected = 3.0 * (m.glyph_width + m.spacing) + m.glyph_width;
    assert!((layout.total_width - expected).abs() < 1e-4);
    assert_eq!(measure_percentage(100, 2.0, &cfg), layout.total_width);
    assert!((layout.glyphs[0].1 + expected / 2.0).abs() < 1e-4);
    for pair in layout.glyphs.windows(2) {
        assert!((pair[1].1 - pair[0].1 - m.advance()).abs() < 1e-4);
    }

    // 5 + 12 + 12 + 5
    let mut canvas = Canvas::default();
    render_percentage(&mut canvas, (0.0, 0.0), 100, 2.0, Color::WHITE, &cfg);
    assert_eq!(canvas.rects.len(), 34);
}

#[test]
fn out_of_range_values_are_clamped() {
    assert_eq!(draw(-5).rects, draw(0).rects);
    assert_eq!(draw(150).rects, draw(100).rects);
    assert_eq!(draw(i32::MIN).rects, draw(0).rects);
}

#[test]
fn colour_is_passed_through() {
    let teal = Color::rgba(1, 2, 3, 4);
    let mut canvas = Canvas::default();
    render_percentage(&mut canvas, (10.0, 10.0), 57, 1.0, teal, &GlyphConfig::default());
    assert!(!canvas.rects.is_empty());
    assert!(canvas.rects.iter().all(|r| r.4 == teal));
}
