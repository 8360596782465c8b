/// Label rendering: a fontdue font when one loads, bitmap glyphs otherwise.

use std::path::{Path, PathBuf};

use fontdue::{Font, FontSettings};
use tracing::{debug, info, warn};

use glowbar::{render_percentage, GlyphConfig};

use crate::error::{HostError, Result};
use crate::renderer::Renderer;
use crate::theme::{self, Color};

pub struct FontText {
    font: Font,
}

impl FontText {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| HostError::Font {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let font = Font::from_bytes(bytes, FontSettings::default()).map_err(|reason| HostError::Font {
            path: path.display().to_string(),
            reason: reason.to_string(),
        })?;
        Ok(Self { font })
    }

    /// Render a single line of text with its top-left at (x, y).
    /// Returns the width of the rendered text in pixels.
    pub fn draw(&self, renderer: &mut Renderer, text: &str, x: f32, y: f32, size: f32, color: Color) -> f32 {
        let pw = renderer.pixmap.width() as i32;
        let ph = renderer.pixmap.height() as i32;
        let mut cursor_x = x;
        for ch in text.chars() {
            let (metrics, bitmap) = self.font.rasterize(ch, size);
            if bitmap.is_empty() {
                cursor_x += metrics.advance_width;
                continue;
            }

            let gx = cursor_x as i32 + metrics.xmin;
            let gy = y as i32 + (size as i32 - metrics.height as i32 - metrics.ymin);

            // Blend coverage straight into the pixmap
            let pm = renderer.pixmap.data_mut();

            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    let coverage = bitmap[row * metrics.width + col];
                    if coverage == 0 {
                        continue;
                    }
                    let px = gx + col as i32;
                    let py = gy + row as i32;
                    if px < 0 || py < 0 || px >= pw || py >= ph {
                        continue;
                    }
                    let idx = (py as usize * pw as usize + px as usize) * 4;
                    if idx + 3 >= pm.len() {
                        continue;
                    }
                    let a = coverage as f32 / 255.0 * color.a as f32 / 255.0;
                    let inv = 1.0 - a;
                    pm[idx] = (pm[idx] as f32 * inv + color.r as f32 * a) as u8;
                    pm[idx + 1] = (pm[idx + 1] as f32 * inv + color.g as f32 * a) as u8;
                    pm[idx + 2] = (pm[idx + 2] as f32 * inv + color.b as f32 * a) as u8;
                    pm[idx + 3] = 255;
                }
            }

            cursor_x += metrics.advance_width;
        }
        cursor_x - x
    }

    /// Measure the width of text at a given font size.
    pub fn measure(&self, text: &str, size: f32) -> f32 {
        text.chars()
            .map(|ch| self.font.metrics(ch, size).advance_width)
            .sum()
    }

    /// Draw text centred on (cx, cy).
    pub fn draw_centered(&self, renderer: &mut Renderer, text: &str, center: (f32, f32), size: f32, color: Color) {
        let w = self.measure(text, size);
        self.draw(renderer, text, center.0 - w / 2.0, center.1 - size / 2.0, size, color);
    }
}

/// How the card draws its labels. Picked once at startup.
pub enum TextBackend {
    /// Title, caption and a font-rendered percentage.
    Font(FontText),
    /// Percentage only, as bitmap glyphs.
    Bitmap(GlyphConfig),
}

impl TextBackend {
    /// First font in `candidates` that loads, else bitmap glyphs.
    pub fn select(candidates: &[PathBuf]) -> Self {
        for path in candidates {
            if !path.exists() {
                debug!(path = %path.display(), "font not present");
                continue;
            }
            match FontText::load(path) {
                Ok(font) => {
                    info!(path = %path.display(), "using font labels");
                    return TextBackend::Font(font);
                }
                Err(e) => warn!("{e}"),
            }
        }
        info!("no usable font, falling back to bitmap percentage");
        TextBackend::Bitmap(GlyphConfig::default())
    }

    pub fn is_font(&self) -> bool {
        matches!(self, TextBackend::Font(_))
    }

    /// Title and caption. Bitmap mode has no glyphs for them.
    pub fn draw_labels(&self, renderer: &mut Renderer, title: (f32, f32), caption: (f32, f32)) {
        if let TextBackend::Font(font) = self {
            font.draw_centered(renderer, theme::TITLE, title, theme::FONT_SIZE_TITLE, theme::TEXT_TITLE);
            font.draw_centered(renderer, theme::CAPTION, caption, theme::FONT_SIZE_CAPTION, theme::TEXT_CAPTION);
        }
    }

    /// `percent%` anchored at `anchor`: font text is centred on it, bitmap
    /// glyphs are centred horizontally with their top row at `anchor.1`.
    pub fn draw_percent(&self, renderer: &mut Renderer, anchor: (f32, f32), percent: i32) {
        match self {
            TextBackend::Font(font) => {
                let label = format!("{}%", percent.clamp(0, 100));
                font.draw_centered(renderer, &label, anchor, theme::FONT_SIZE_PERCENT, theme::TEXT_PERCENT);
            }
            TextBackend::Bitmap(glyphs) => render_percentage(
                renderer,
                anchor,
                percent,
                theme::BITMAP_PERCENT_SCALE,
                theme::TEXT_PERCENT,
                glyphs,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fonts_fall_back_to_bitmap() {
        let backend = TextBackend::select(&[PathBuf::from("/nonexistent/glowbar/font.ttf")]);
        assert!(!backend.is_font());
        assert!(!TextBackend::select(&[]).is_font());
    }

    #[test]
    fn unreadable_font_is_an_error() {
        let dir = std::env::temp_dir().join(format!("glowbar-font-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let bogus = dir.join("bogus.ttf");
        std::fs::write(&bogus, b"not a font").unwrap();
        assert!(matches!(FontText::load(&bogus), Err(HostError::Font { .. })));
        assert!(!TextBackend::select(&[bogus]).is_font());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn bitmap_percent_draws_inside_anchor_box() {
        let mut r = Renderer::new(200, 100).unwrap();
        r.clear(Color::BLACK);
        TextBackend::Bitmap(GlyphConfig::default()).draw_percent(&mut r, (100.0, 20.0), 0);
        // "0" lights its left column and "%" its right, so the lit span is
        // the whole label minus one trailing gap
        let lit = (0..100u32)
            .flat_map(|y| (0..200u32).map(move |x| (x, y)))
            .filter(|&(x, y)| r.pixel(x, y) != Some(Color::BLACK))
            .collect::<Vec<_>>();
        assert!(!lit.is_empty());
        assert!(lit.iter().all(|&(_, y)| y >= 20));
        let min_x = lit.iter().map(|p| p.0).min().unwrap();
        let max_x = lit.iter().map(|p| p.0).max().unwrap();
        assert!(((min_x + max_x) as f32 / 2.0 - 100.0).abs() < 3.0);
    }
}
