/// Card widget: drop shadow, translucent body and outline.

use crate::layout::CardLayout;
use crate::renderer::Renderer;
use crate::theme;

pub fn draw_card(renderer: &mut Renderer, layout: &CardLayout) {
    renderer.fill(layout.shadow, theme::CARD_SHADOW);
    renderer.fill(layout.card, theme::CARD);
    renderer.stroke(layout.card, theme::CARD_BORDER, theme::CARD_OUTLINE);
}
