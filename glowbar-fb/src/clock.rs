/// Frame clock: wall time for live output, a fixed step for headless runs.

use std::time::{Duration, Instant};

pub enum FrameClock {
    Realtime {
        start: Instant,
        frame_start: Instant,
        frame_duration: Duration,
    },
    Fixed {
        frame: u64,
        fps: u32,
    },
}

impl FrameClock {
    pub fn realtime(fps: u32) -> Self {
        let now = Instant::now();
        FrameClock::Realtime {
            start: now,
            frame_start: now,
            frame_duration: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
        }
    }

    pub fn fixed(fps: u32) -> Self {
        FrameClock::Fixed {
            frame: 0,
            fps: fps.max(1),
        }
    }

    /// Seconds since the run started, as seen by the current frame.
    pub fn elapsed(&self) -> f32 {
        match self {
            FrameClock::Realtime { start, frame_start, .. } => frame_start.duration_since(*start).as_secs_f32(),
            FrameClock::Fixed { frame, fps } => (*frame as f64 / *fps as f64) as f32,
        }
    }

    /// Close the current frame: sleep off the rest of the frame budget, or
    /// step the synthetic clock.
    pub fn finish_frame(&mut self) {
        match self {
            FrameClock::Realtime {
                frame_start,
                frame_duration,
                ..
            } => {
                let spent = frame_start.elapsed();
                if spent < *frame_duration {
                    std::thread::sleep(*frame_duration - spent);
                }
                *frame_start = Instant::now();
            }
            FrameClock::Fixed { frame, .. } => *frame += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_steps_by_frame() {
        let mut clock = FrameClock::fixed(60);
        assert_eq!(clock.elapsed(), 0.0);
        for _ in 0..150 {
            clock.finish_frame();
        }
        assert_eq!(clock.elapsed(), 2.5);
    }

    #[test]
    fn realtime_clock_is_monotonic() {
        let mut clock = FrameClock::realtime(240);
        let a = clock.elapsed();
        clock.finish_frame();
        let b = clock.elapsed();
        assert!(b > a);
    }
}
