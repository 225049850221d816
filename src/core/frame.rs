use super::clock::Clock;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

#[derive(Debug)]
enum Timing {
    Fixed(f32),
    Realtime(Clock),
}

/// Infinite iterator that yields frame information
///
/// Use `fixed` for deterministic headless runs and `realtime` to follow the
/// wall clock. Bound it with `take(n)`.
#[derive(Debug)]
pub struct FrameIterator {
    frame_number: u64,
    time: f32,
    timing: Timing,
}

impl FrameIterator {
    pub fn fixed(delta: f32) -> Self {
        Self {
            frame_number: 0,
            time: 0.0,
            timing: Timing::Fixed(delta),
        }
    }

    pub fn realtime() -> Self {
        Self {
            frame_number: 0,
            time: 0.0,
            timing: Timing::Realtime(Clock::new()),
        }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    pub fn time(&self) -> f32 {
        self.time
    }
}

impl Iterator for FrameIterator {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let delta = match &mut self.timing {
            Timing::Fixed(delta) => *delta,
            Timing::Realtime(clock) => clock.tick(),
        };
        self.time += delta;

        let info = FrameInfo::new(self.frame_number, self.time, delta);
        self.frame_number += 1;

        Some(info)
    }
}
