use std::time::{Duration, Instant};

/// Keeps successive frames `target_delta_time` apart, time spent producing a frame included.
pub struct Sleeper {
    pub target_delta_time: Duration,
    pub last_instant: Option<Instant>,
}

impl Sleeper {
    pub fn new(target_delta_time: Duration) -> Self {
        Self {
            target_delta_time,
            last_instant: None,
        }
    }

    /// Sleeps out whatever is left of the current frame. Returns false if the frame was late.
    pub fn sleep(&mut self) -> bool {
        let remaining = self.remaining();

        if let Some(remaining) = remaining {
            spin_sleep::sleep(remaining);
        }

        self.last_instant = Some(Instant::now());
        remaining.is_some()
    }

    /// Time left until the next frame is due, `None` if it's due already.
    pub fn remaining(&self) -> Option<Duration> {
        // The first frame is never late, it gets the full interval.
        let Some(last_instant) = self.last_instant else {
            return Some(self.target_delta_time);
        };

        self.target_delta_time
            .checked_sub(last_instant.elapsed())
            .filter(|remaining| !remaining.is_zero())
    }
}
