/// Glowbar: animated progress card on the Linux framebuffer.
/// Renders to /dev/fb0 at native resolution, or to PNG frames when headless.

mod clock;
mod config;
mod error;
mod fb;
mod input;
mod layout;
mod output;
mod renderer;
mod scene;
mod scenes;
mod text;
mod theme;
mod widgets;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use glowbar::AnimationConfig;

use crate::clock::FrameClock;
use crate::config::HostConfig;
use crate::input::{InputEvent, InputReader};
use crate::layout::CardLayout;
use crate::output::Output;
use crate::renderer::Renderer;
use crate::scene::SceneManager;
use crate::scenes::progress::ProgressScene;
use crate::text::TextBackend;

/// Blank frames a headless run records after the animation ends.
const HEADLESS_BLANK_TAIL: u32 = 3;

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config::log_level_from_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cfg = HostConfig::from_env();
    info!(version = env!("CARGO_PKG_VERSION"), "starting glowbar");

    let mut output = Output::open(&cfg.output).context("open output")?;
    let (width, height) = output.size();
    info!(width, height, fps = cfg.fps, "output ready");

    let mut render = Renderer::new(width, height)?;
    let text = TextBackend::select(&cfg.fonts);
    info!(font = text.is_font(), "labels ready");

    let anim = AnimationConfig::default();
    let layout = CardLayout::new(width, height, &anim);
    let mut scenes = SceneManager::new(Box::new(ProgressScene::new(anim, layout)));

    let (mut input, mut clock) = if output.is_realtime() {
        let input = match InputReader::new() {
            Ok(reader) => Some(reader),
            Err(e) => {
                warn!("{e}; continuing without keyboard input");
                None
            }
        };
        (input, FrameClock::realtime(cfg.fps))
    } else {
        (None, FrameClock::fixed(cfg.fps))
    };

    let mut blank_frames = 0;
    loop {
        if let Some(reader) = input.as_mut() {
            let event = reader.poll();
            if event != InputEvent::None {
                scenes.handle_input(event);
            }
        }

        let elapsed = clock.elapsed();
        scenes.update(elapsed);
        if scenes.is_empty() {
            info!("quit requested");
            break;
        }

        scenes.draw(&mut render, &text);
        output.present(&render, elapsed, scenes.frame())?;

        if !output.is_realtime() && scenes.frame().is_none() {
            blank_frames += 1;
            if blank_frames >= HEADLESS_BLANK_TAIL {
                break;
            }
        }

        clock.finish_frame();
    }

    output.finish()?;
    info!("exiting");
    Ok(())
}
