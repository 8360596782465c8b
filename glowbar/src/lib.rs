//! Glowbar core: the progress animation state machine, color interpolation
//! and the bitmap percentage glyphs.
//!
//! Nothing here reads a clock or touches a display. Hosts call
//! [`AnimationState::advance`] once per frame with the elapsed run time and
//! draw the returned [`VisualParameters`]; when no font is available they draw
//! the percentage with [`render_percentage`] onto any [`FillTarget`].

pub mod animation;
pub mod color;
pub mod config;
pub mod glyph;

pub use animation::{AnimationState, Phase, VisualParameters};
pub use color::{lerp, Color};
pub use config::{AnimationConfig, GlyphConfig};
pub use glyph::{layout_percentage, measure_percentage, render_percentage, FillTarget, Symbol};
