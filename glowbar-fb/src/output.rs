/// Frame sinks: the Linux framebuffer, or a directory of PNG frames with a
/// JSON-lines trace of the animation state.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info};

use glowbar::VisualParameters;

use crate::config::OutputTarget;
use crate::error::Result;
use crate::fb::Framebuffer;
use crate::renderer::Renderer;

pub enum Output {
    Framebuffer(Framebuffer),
    Headless(PngSequence),
}

impl Output {
    pub fn open(target: &OutputTarget) -> Result<Self> {
        match target {
            OutputTarget::Framebuffer(path) => Ok(Output::Framebuffer(Framebuffer::open(path)?)),
            OutputTarget::Headless { dir, width, height } => {
                Ok(Output::Headless(PngSequence::create(dir.clone(), *width, *height)?))
            }
        }
    }

    pub fn size(&self) -> (u32, u32) {
        match self {
            Output::Framebuffer(fb) => (fb.width(), fb.height()),
            Output::Headless(seq) => (seq.width, seq.height),
        }
    }

    /// Live outputs pace frames on wall time and take keyboard input.
    pub fn is_realtime(&self) -> bool {
        matches!(self, Output::Framebuffer(_))
    }

    pub fn present(&mut self, renderer: &Renderer, elapsed: f32, frame: Option<&VisualParameters>) -> Result<()> {
        match self {
            Output::Framebuffer(fb) => {
                fb.present(renderer.data());
                Ok(())
            }
            Output::Headless(seq) => seq.write(renderer, elapsed, frame),
        }
    }

    pub fn finish(self) -> Result<()> {
        match self {
            Output::Framebuffer(_) => Ok(()),
            Output::Headless(seq) => seq.finish(),
        }
    }
}

#[derive(Serialize)]
struct TraceLine<'a> {
    frame: u64,
    elapsed: f32,
    /// `None` once the run is over and frames are blank.
    params: Option<&'a VisualParameters>,
}

pub struct PngSequence {
    dir: PathBuf,
    width: u32,
    height: u32,
    index: u64,
    trace: BufWriter<File>,
}

impl PngSequence {
    pub const TRACE_FILE: &'static str = "frames.jsonl";

    pub fn create(dir: PathBuf, width: u32, height: u32) -> Result<Self> {
        std::fs::create_dir_all(&dir)?;
        let trace = BufWriter::new(File::create(dir.join(Self::TRACE_FILE))?);
        info!(dir = %dir.display(), width, height, "writing headless frames");
        Ok(Self {
            dir,
            width,
            height,
            index: 0,
            trace,
        })
    }

    pub fn frame_path(&self, index: u64) -> PathBuf {
        self.dir.join(format!("frame_{index:05}.png"))
    }

    fn write(&mut self, renderer: &Renderer, elapsed: f32, params: Option<&VisualParameters>) -> Result<()> {
        let path = self.frame_path(self.index);
        renderer.save_png(&path, self.index)?;

        let line = TraceLine {
            frame: self.index,
            elapsed,
            params,
        };
        serde_json::to_writer(&mut self.trace, &line)?;
        self.trace.write_all(b"\n")?;

        debug!(frame = self.index, elapsed, "frame written");
        self.index += 1;
        Ok(())
    }

    fn finish(mut self) -> Result<()> {
        self.trace.flush()?;
        info!(frames = self.index, dir = %self.dir.display(), "headless run written");
        Ok(())
    }
}
