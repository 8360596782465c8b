/// Progress card: fills, glows, then hands over to the blank screen.

use glowbar::{AnimationConfig, AnimationState, VisualParameters};
use tracing::info;

use crate::input::InputEvent;
use crate::layout::CardLayout;
use crate::renderer::Renderer;
use crate::scene::{Scene, Transition};
use crate::text::TextBackend;
use crate::theme;
use crate::widgets;

pub struct ProgressScene {
    state: AnimationState,
    layout: CardLayout,
    frame: Option<VisualParameters>,
}

impl ProgressScene {
    pub fn new(config: AnimationConfig, layout: CardLayout) -> Self {
        Self {
            state: AnimationState::new(config),
            layout,
            frame: None,
        }
    }
}

impl Scene for ProgressScene {
    fn update(&mut self, elapsed: f32) -> Transition {
        let was_finished = self.state.finished();
        let frame = self.state.advance(elapsed);
        if !was_finished && self.state.finished() {
            info!(elapsed, "progress reached 100%");
        }

        if frame.is_blank() {
            info!(elapsed, "progress run complete");
            return Transition::Replace(Box::new(super::blank::BlankScene));
        }
        self.frame = Some(frame);
        Transition::None
    }

    fn draw(&self, renderer: &mut Renderer, text: &TextBackend) {
        let Some(frame) = &self.frame else {
            return;
        };

        renderer.fill_gradient_v(theme::BG_TOP, theme::BG_BOTTOM);
        widgets::card::draw_card(renderer, &self.layout);
        widgets::progress::draw_progress_bar(renderer, &self.layout, frame);

        text.draw_labels(renderer, self.layout.title_center, self.layout.caption_center);
        text.draw_percent(renderer, self.layout.percent_anchor, frame.percent);
    }

    fn handle_input(&mut self, event: InputEvent) -> Transition {
        if event.is_quit() {
            Transition::Pop
        } else {
            Transition::None
        }
    }

    fn frame(&self) -> Option<&VisualParameters> {
        self.frame.as_ref()
    }
}
