/// Keyboard from the console tty in raw, non-blocking mode.

use std::io::Read;
use std::os::unix::io::AsRawFd;

use tracing::debug;

use crate::error::{HostError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Char(char),
    Escape,
    Enter,
    None,
}

impl InputEvent {
    /// `q`, `Q`, Escape or Ctrl-C: the fbdev stand-in for closing a window.
    pub fn is_quit(self) -> bool {
        matches!(self, InputEvent::Escape | InputEvent::Char('q' | 'Q' | '\u{3}'))
    }
}

/// Console first, then the controlling terminal.
const TTY_PATHS: &[&str] = &["/dev/tty0", "/dev/tty"];

/// Open the first path that opens read-write. On failure the error names
/// the last path tried.
fn open_tty(paths: &[&str]) -> Result<std::fs::File> {
    let mut last = None;
    for &path in paths {
        match std::fs::OpenOptions::new().read(true).write(true).open(path) {
            Ok(file) => return Ok(file),
            Err(source) => {
                debug!(path, error = %source, "tty open failed");
                last = Some(HostError::Open {
                    path: path.to_string(),
                    source,
                });
            }
        }
    }
    Err(last.unwrap_or_else(|| HostError::Open {
        path: String::new(),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    }))
}

pub struct InputReader {
    tty: std::fs::File,
    saved_termios: Option<libc::termios>,
}

impl InputReader {
    pub fn new() -> Result<Self> {
        let tty = open_tty(TTY_PATHS)?;

        let fd = tty.as_raw_fd();

        // Save and set raw mode
        let mut termios: libc::termios = unsafe { std::mem::zeroed() };
        let ret = unsafe { libc::tcgetattr(fd, &mut termios) };
        let saved = if ret == 0 { Some(termios) } else { None };

        if ret == 0 {
            let mut raw = termios;
            raw.c_lflag &= !(libc::ECHO | libc::ICANON | libc::ISIG | libc::IEXTEN);
            raw.c_iflag &= !(libc::IXON | libc::ICRNL | libc::BRKINT | libc::INPCK | libc::ISTRIP);
            raw.c_cc[libc::VMIN] = 0;
            raw.c_cc[libc::VTIME] = 0; // non-blocking
            unsafe { libc::tcsetattr(fd, libc::TCSANOW, &raw) };
        } else {
            debug!("tty is not a terminal, polling with O_NONBLOCK");
            unsafe {
                let flags = libc::fcntl(fd, libc::F_GETFL);
                libc::fcntl(fd, libc::F_SETFL, flags | libc::O_NONBLOCK);
            }
        }

        Ok(Self {
            tty,
            saved_termios: saved,
        })
    }

    /// Non-blocking read of one input event.
    pub fn poll(&mut self) -> InputEvent {
        let mut buf = [0u8; 8];

        let n = match self.tty.read(&mut buf) {
            Ok(n) => n,
            Err(_) => return InputEvent::None,
        };
        parse(&buf[..n])
    }
}

fn parse(bytes: &[u8]) -> InputEvent {
    match bytes {
        [0x1b] => InputEvent::Escape,
        [0x0d] | [0x0a] => InputEvent::Enter,
        [b] if *b < 0x7f => InputEvent::Char(*b as char),
        _ => InputEvent::None,
    }
}

impl Drop for InputReader {
    fn drop(&mut self) {
        if let Some(termios) = self.saved_termios {
            let fd = self.tty.as_raw_fd();
            unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
        }
    }
}
