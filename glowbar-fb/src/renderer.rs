/// 2D rendering wrapper around tiny-skia.

use std::path::Path;

use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use glowbar::FillTarget;

use crate::error::{HostError, Result};
use crate::layout::Rect;
use crate::theme::{Color, ToSkia};

pub struct Renderer {
    pub pixmap: Pixmap,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(HostError::Pixmap(width, height))?;
        Ok(Self { pixmap })
    }

    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(color.to_skia());
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Premultiplied RGBA, `width * 4` bytes per row.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Demultiplied pixel, `None` outside the pixmap.
    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            Color::rgba(c.red(), c.green(), c.blue(), c.alpha())
        })
    }

    pub fn save_png(&self, path: &Path, index: u64) -> Result<()> {
        self.pixmap.save_png(path).map_err(|e| HostError::Png {
            index,
            reason: e.to_string(),
        })
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let mut paint = Paint::default();
        paint.set_color(color.to_skia());
        paint.anti_alias = false;

        let rect = tiny_skia::Rect::from_xywh(x, y, w, h);
        if let Some(rect) = rect {
            self.pixmap.fill_rect(rect, &paint, Transform::identity(), None);
        }
    }

    pub fn fill(&mut self, rect: Rect, color: Color) {
        self.fill_rect(rect.x, rect.y, rect.w, rect.h, color);
    }

    /// Outline drawn centred on the rect edge.
    pub fn stroke(&mut self, rect: Rect, color: Color, width: f32) {
        let mut paint = Paint::default();
        paint.set_color(color.to_skia());
        paint.anti_alias = true;

        let mut stroke = Stroke::default();
        stroke.width = width;

        if let Some(r) = tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.w, rect.h) {
            let path = PathBuilder::from_rect(r);
            self.pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }

    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }
        let mut paint = Paint::default();
        paint.set_color(color.to_skia());
        paint.anti_alias = true;

        if let Some(path) = PathBuilder::from_circle(cx, cy, radius) {
            self.pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }

    /// Vertical gradient over the whole pixmap.
    pub fn fill_gradient_v(&mut self, from: Color, to: Color) {
        // Approximate with thin horizontal strips
        let h = self.height() as f32;
        let w = self.width() as f32;
        let steps = (h as u32).clamp(1, 64);
        let strip_h = h / steps as f32;
        for i in 0..steps {
            let t = i as f32 / (steps - 1).max(1) as f32;
            let c = from.blend(to, t);
            self.fill_rect(0.0, i as f32 * strip_h, w, strip_h + 1.0, c);
        }
    }
}

impl FillTarget for Renderer {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        Renderer::fill_rect(self, x, y, w, h, color);
    }
}
