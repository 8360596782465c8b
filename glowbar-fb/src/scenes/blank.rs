/// Blank screen shown once the progress run is over.

use crate::input::InputEvent;
use crate::renderer::Renderer;
use crate::scene::{Scene, Transition};
use crate::text::TextBackend;
use crate::theme;

pub struct BlankScene;

impl Scene for BlankScene {
    fn update(&mut self, _elapsed: f32) -> Transition {
        Transition::None
    }

    fn draw(&self, renderer: &mut Renderer, _text: &TextBackend) {
        renderer.clear(theme::BLANK);
    }

    fn handle_input(&mut self, event: InputEvent) -> Transition {
        if event.is_quit() {
            Transition::Pop
        } else {
            Transition::None
        }
    }
}
