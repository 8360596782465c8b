/// Host error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{request} failed: {source}")]
    Ioctl {
        request: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("mmap framebuffer: {0}")]
    Mmap(#[from] nix::Error),

    #[error("framebuffer reports zero size")]
    EmptyFramebuffer,

    #[error("unsupported framebuffer depth: {0} bpp (need 32)")]
    UnsupportedDepth(u32),

    #[error("cannot allocate a {0}x{1} pixmap")]
    Pixmap(u32, u32),

    #[error("load font {path}: {reason}")]
    Font { path: String, reason: String },

    #[error("encode frame {index}: {reason}")]
    Png { index: u64, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("serialize frame trace: {0}")]
    Trace(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HostError>;
