/// Host settings from the environment.
///
/// `GLOWBAR_FB`            framebuffer device (default `/dev/fb0`)
/// `GLOWBAR_FONT`          font file for the labels (default: first match in
///                         [`DEFAULT_FONTS`])
/// `GLOWBAR_HEADLESS_DIR`  write PNG frames here instead of the framebuffer
/// `GLOWBAR_FPS`           target frame rate (default 60)
/// `GLOWBAR_WIDTH`/`GLOWBAR_HEIGHT`  headless frame size (default 640x360)
/// `GLOWBAR_LOG`           log level (default `info`)

use std::path::PathBuf;

use tracing::{warn, Level};

pub const DEFAULT_FONTS: &[&str] = &[
    "/System/Library/Fonts/SFNSRounded.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
];

#[derive(Clone, Debug, PartialEq)]
pub enum OutputTarget {
    Framebuffer(PathBuf),
    Headless {
        dir: PathBuf,
        width: u32,
        height: u32,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct HostConfig {
    pub output: OutputTarget,
    /// Candidate font files, tried in order.
    pub fonts: Vec<PathBuf>,
    pub fps: u32,
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let fps = parse_or(&get, "GLOWBAR_FPS", 60).clamp(1, 240);

        let output = match get("GLOWBAR_HEADLESS_DIR") {
            Some(dir) if !dir.is_empty() => OutputTarget::Headless {
                dir: PathBuf::from(dir),
                width: parse_or(&get, "GLOWBAR_WIDTH", 640).max(1),
                height: parse_or(&get, "GLOWBAR_HEIGHT", 360).max(1),
            },
            _ => OutputTarget::Framebuffer(PathBuf::from(
                get("GLOWBAR_FB").unwrap_or_else(|| "/dev/fb0".to_string()),
            )),
        };

        let fonts = match get("GLOWBAR_FONT") {
            Some(path) if !path.is_empty() => vec![PathBuf::from(path)],
            _ => DEFAULT_FONTS.iter().map(PathBuf::from).collect(),
        };

        Self { output, fonts, fps }
    }
}

/// Read before the subscriber exists, so bad values fall back silently.
pub fn log_level_from_env() -> Level {
    parse_level(std::env::var("GLOWBAR_LOG").ok())
}

fn parse_level(raw: Option<String>) -> Level {
    raw.and_then(|level| level.trim().parse().ok())
        .unwrap_or(Level::INFO)
}

fn parse_or(get: &impl Fn(&str) -> Option<String>, key: &str, default: u32) -> u32 {
    match get(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{key}={raw:?} is not a number, using {default}");
            default
        }),
        None => default,
    }
}
