/// Scene system: Scene trait and SceneManager with stack-based transitions.

use glowbar::VisualParameters;

use crate::input::InputEvent;
use crate::renderer::Renderer;
use crate::text::TextBackend;

/// Transition instruction returned by scenes.
pub enum Transition {
    None,
    Replace(Box<dyn Scene>),
    Pop,
}

/// A single screen of the host.
pub trait Scene {
    /// Update logic. `elapsed` is seconds since the run started.
    fn update(&mut self, elapsed: f32) -> Transition;
    /// Draw the scene to the renderer.
    fn draw(&self, renderer: &mut Renderer, text: &TextBackend);
    /// Handle an input event.
    fn handle_input(&mut self, event: InputEvent) -> Transition;
    /// Animation state behind the last update, if the scene animates.
    fn frame(&self) -> Option<&VisualParameters> {
        None
    }
}

/// Manages a stack of scenes.
pub struct SceneManager {
    stack: Vec<Box<dyn Scene>>,
}

impl SceneManager {
    pub fn new(initial: Box<dyn Scene>) -> Self {
        Self {
            stack: vec![initial],
        }
    }

    pub fn update(&mut self, elapsed: f32) {
        let transition = if let Some(scene) = self.stack.last_mut() {
            scene.update(elapsed)
        } else {
            return;
        };
        self.apply(transition);
    }

    pub fn draw(&self, renderer: &mut Renderer, text: &TextBackend) {
        if let Some(scene) = self.stack.last() {
            scene.draw(renderer, text);
        }
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        let transition = if let Some(scene) = self.stack.last_mut() {
            scene.handle_input(event)
        } else {
            return;
        };
        self.apply(transition);
    }

    pub fn frame(&self) -> Option<&VisualParameters> {
        self.stack.last().and_then(|scene| scene.frame())
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::None => {}
            Transition::Replace(scene) => {
                self.stack.pop();
                self.stack.push(scene);
            }
            Transition::Pop => {
                self.stack.pop();
            }
        }
    }
}
