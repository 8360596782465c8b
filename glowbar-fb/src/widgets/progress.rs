/// Progress bar widget: track, completion bloom, fill, moving highlight and
/// the pulse at the fill edge.

use glowbar::{Phase, VisualParameters};

use crate::layout::CardLayout;
use crate::renderer::Renderer;
use crate::theme;

/// Draw the bar for one animation frame, back to front.
pub fn draw_progress_bar(renderer: &mut Renderer, layout: &CardLayout, frame: &VisualParameters) {
    renderer.fill(layout.track, theme::TRACK);
    renderer.stroke(layout.track, theme::TRACK_BORDER, theme::TRACK_OUTLINE);

    if frame.phase == Phase::Glowing {
        let bloom = layout.bloom(frame.bloom_scale);
        renderer.fill(bloom, theme::BLOOM.with_alpha(frame.bloom_alpha));
    }

    if frame.fill_width <= 0.0 {
        return;
    }
    renderer.fill(layout.fill(frame.fill_width), frame.fill_color);

    if frame.highlight_visible {
        renderer.fill(layout.highlight_soft(frame.highlight_offset), theme::HIGHLIGHT_SOFT);
        renderer.fill(layout.highlight(frame.highlight_offset), theme::HIGHLIGHT);
    }

    let (px, py) = layout.pulse_center(frame.pulse_x);
    renderer.fill_circle(px, py, frame.pulse_radius, theme::PULSE);
}
