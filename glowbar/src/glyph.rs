//! Bitmap percentage glyphs.
//!
//! Digits and `%` as fixed 3×5 cell patterns, drawn as filled squares on any
//! [`FillTarget`]. Used when no font is available.

use crate::color::Color;
use crate::config::GlyphConfig;

pub const GLYPH_ROWS: usize = 5;
pub const GLYPH_COLS: usize = 3;

/// Anything that can fill an axis-aligned rectangle.
pub trait FillTarget {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
}

/// A drawable symbol of the percentage label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    /// 0..=9
    Digit(u8),
    Percent,
}

/// 5 rows × 3 columns of filled/blank cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern([[bool; GLYPH_COLS]; GLYPH_ROWS]);

impl Pattern {
    /// Parse `X` (filled) and anything else (blank).
    const fn parse(rows: [&[u8; GLYPH_COLS]; GLYPH_ROWS]) -> Self {
        let mut grid = [[false; GLYPH_COLS]; GLYPH_ROWS];
        let mut r = 0;
        while r < GLYPH_ROWS {
            let mut c = 0;
            while c < GLYPH_COLS {
                grid[r][c] = rows[r][c] == b'X';
                c += 1;
            }
            r += 1;
        }
        Pattern(grid)
    }

    pub fn rows(&self) -> &[[bool; GLYPH_COLS]; GLYPH_ROWS] {
        &self.0
    }

    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.0
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Filled cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, filled)| **filled)
                .map(move |(c, _)| (r, c))
        })
    }
}

static DIGITS: [Pattern; 10] = [
    Pattern::parse([b"XXX", b"X X", b"X X", b"X X", b"XXX"]),
    Pattern::parse([b"  X", b"  X", b"  X", b"  X", b"  X"]),
    Pattern::parse([b"XXX", b"  X", b"XXX", b"X  ", b"XXX"]),
    Pattern::parse([b"XXX", b"  X", b"XXX", b"  X", b"XXX"]),
    Pattern::parse([b"X X", b"X X", b"XXX", b"  X", b"  X"]),
    Pattern::parse([b"XXX", b"X  ", b"XXX", b"  X", b"XXX"]),
    Pattern::parse([b"XXX", b"X  ", b"XXX", b"X X", b"XXX"]),
    Pattern::parse([b"XXX", b"  X", b"  X", b"  X", b"  X"]),
    Pattern::parse([b"XXX", b"X X", b"XXX", b"X X", b"XXX"]),
    Pattern::parse([b"XXX", b"X X", b"XXX", b"  X", b"XXX"]),
];

static PERCENT: Pattern = Pattern::parse([b"X  ", b"  X", b" X ", b"X  ", b"  X"]);

impl Symbol {
    pub fn pattern(self) -> &'static Pattern {
        match self {
            // Digit values come from `digits_of`, always < 10.
            Symbol::Digit(d) => &DIGITS[(d % 10) as usize],
            Symbol::Percent => &PERCENT,
        }
    }
}

/// Cell and glyph sizes at a given scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphMetrics {
    pub pixel_size: f32,
    pub gap: f32,
    pub glyph_width: f32,
    pub spacing: f32,
}

impl GlyphMetrics {
    pub fn new(scale: f32, cfg: &GlyphConfig) -> Self {
        let pixel_size = cfg.base_pixel_unit * scale;
        let gap = pixel_size * cfg.gap_ratio;
        Self {
            pixel_size,
            gap,
            glyph_width: GLYPH_COLS as f32 * (pixel_size + gap),
            spacing: pixel_size * cfg.spacing_ratio,
        }
    }

    /// Horizontal distance between the origins of neighbouring glyphs.
    pub fn advance(&self) -> f32 {
        self.glyph_width + self.spacing
    }
}

/// Up to three decimal digits of a clamped percentage.
#[derive(Clone, Copy, Debug)]
struct Digits {
    buf: [u8; 3],
    len: usize,
}

impl Digits {
    fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

fn digits_of(value: i32) -> Digits {
    let mut v = value.clamp(0, 100) as u32;
    let mut buf = [0u8; 3];
    let mut len = 0;
    loop {
        buf[len] = (v % 10) as u8;
        len += 1;
        v /= 10;
        if v == 0 {
            break;
        }
    }
    buf[..len].reverse();
    Digits { buf, len }
}

/// Where each symbol of a percentage label goes.
#[derive(Clone, Debug, PartialEq)]
pub struct PercentLayout {
    /// Symbols left to right with their x origin.
    pub glyphs: Vec<(Symbol, f32)>,
    pub y: f32,
    pub total_width: f32,
    pub metrics: GlyphMetrics,
}

/// Lay out `value%` (value clamped to 0..=100) centred horizontally on
/// `anchor`.
///
/// Total width is `digits * (glyph_width + spacing) + glyph_width`: the `%`
/// glyph closes the row without trailing spacing.
pub fn layout_percentage(anchor: (f32, f32), value: i32, scale: f32, cfg: &GlyphConfig) -> PercentLayout {
    let metrics = GlyphMetrics::new(scale, cfg);
    let digits = digits_of(value);
    let total_width = label_width(digits.len, &metrics);

    let mut x = anchor.0 - total_width / 2.0;
    let mut glyphs = Vec::with_capacity(digits.len + 1);
    for &d in digits.as_slice() {
        glyphs.push((Symbol::Digit(d), x));
        x += metrics.advance();
    }
    glyphs.push((Symbol::Percent, x));

    PercentLayout {
        glyphs,
        y: anchor.1,
        total_width,
        metrics,
    }
}

pub fn measure_percentage(value: i32, scale: f32, cfg: &GlyphConfig) -> f32 {
    label_width(digits_of(value).len, &GlyphMetrics::new(scale, cfg))
}

fn label_width(digits: usize, metrics: &GlyphMetrics) -> f32 {
    digits as f32 * metrics.advance() + metrics.glyph_width
}

/// Draw one pattern with its top-left cell at `origin`.
pub fn draw_pattern<T: FillTarget + ?Sized>(
    target: &mut T,
    origin: (f32, f32),
    pattern: &Pattern,
    metrics: &GlyphMetrics,
    color: Color,
) {
    let step = metrics.pixel_size + metrics.gap;
    for (r, c) in pattern.cells() {
        target.fill_rect(
            origin.0 + c as f32 * step,
            origin.1 + r as f32 * step,
            metrics.pixel_size,
            metrics.pixel_size,
            color,
        );
    }
}

/// Draw `value%` as bitmap glyphs centred horizontally on `anchor`. The
/// value is clamped to 0..=100; `anchor.1` is the top of the glyph row.
pub fn render_percentage<T: FillTarget + ?Sized>(
    target: &mut T,
    anchor: (f32, f32),
    value: i32,
    scale: f32,
    color: Color,
    cfg: &GlyphConfig,
) {
    let metrics = GlyphMetrics::new(scale, cfg);
    let digits = digits_of(value);
    let mut x = anchor.0 - label_width(digits.len, &metrics) / 2.0;
    for &d in digits.as_slice() {
        draw_pattern(target, (x, anchor.1), Symbol::Digit(d).pattern(), &metrics, color);
        x += metrics.advance();
    }
    draw_pattern(target, (x, anchor.1), Symbol::Percent.pattern(), &metrics, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        rects: Vec<(f32, f32, f32, f32)>,
    }

    impl FillTarget for Recorder {
        fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, _color: Color) {
            self.rects.push((x, y, w, h));
        }
    }

    #[test]
    fn table_has_expected_cell_counts() {
        let counts: Vec<usize> = (0..10).map(|d| Symbol::Digit(d).pattern().cells().count()).collect();
        assert_eq!(counts, vec![12, 5, 11, 11, 9, 11, 12, 7, 13, 12]);
        assert_eq!(Symbol::Percent.pattern().cells().count(), 5);
    }

    #[test]
    fn one_is_right_column_only() {
        let one = Symbol::Digit(1).pattern();
        for row in one.rows() {
            assert_eq!(row, &[false, false, true]);
        }
        assert!(!one.is_filled(7, 0));
    }

    #[test]
    fn digits_of_clamps() {
        assert_eq!(digits_of(0).as_slice(), &[0]);
        assert_eq!(digits_of(7).as_slice(), &[7]);
        assert_eq!(digits_of(42).as_slice(), &[4, 2]);
        assert_eq!(digits_of(100).as_slice(), &[1, 0, 0]);
        assert_eq!(digits_of(-5).as_slice(), &[0]);
        assert_eq!(digits_of(i32::MAX).as_slice(), &[1, 0, 0]);
    }

    #[test]
    fn metrics_at_unit_scale() {
        let m = GlyphMetrics::new(1.0, &GlyphConfig::default());
        assert_eq!(m.pixel_size, 6.0);
        assert!((m.gap - 1.32).abs() < 1e-5);
        assert!((m.glyph_width - 21.96).abs() < 1e-4);
        assert!((m.spacing - 7.2).abs() < 1e-5);
    }

    #[test]
    fn render_draws_where_layout_places_glyphs() {
        let cfg = GlyphConfig::default();
        for value in [-3, 0, 7, 42, 100, 250] {
            let mut drawn = Recorder::default();
            render_percentage(&mut drawn, (160.0, 40.0), value, 1.6, Color::WHITE, &cfg);

            let layout = layout_percentage((160.0, 40.0), value, 1.6, &cfg);
            let mut expected = Recorder::default();
            for &(symbol, x) in &layout.glyphs {
                draw_pattern(&mut expected, (x, layout.y), symbol.pattern(), &layout.metrics, Color::WHITE);
            }
            assert_eq!(drawn.rects, expected.rects, "value {value}");
        }
    }

    #[test]
    fn cells_land_on_grid() {
        let cfg = GlyphConfig {
            base_pixel_unit: 10.0,
            gap_ratio: 0.5,
            spacing_ratio: 1.0,
        };
        let metrics = GlyphMetrics::new(1.0, &cfg);
        let mut rec = Recorder::default();
        draw_pattern(&mut rec, (100.0, 50.0), Symbol::Percent.pattern(), &metrics, Color::WHITE);
        assert_eq!(
            rec.rects,
            vec![
                (100.0, 50.0, 10.0, 10.0),
                (130.0, 65.0, 10.0, 10.0),
                (115.0, 80.0, 10.0, 10.0),
                (100.0, 95.0, 10.0, 10.0),
                (130.0, 110.0, 10.0, 10.0),
            ]
        );
    }
}
