use std::time::Instant;

/// Wall-clock timer for a single chat turn.
pub struct TurnTimer {
    start: Instant,
}

impl TurnTimer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }
}

impl Default for TurnTimer {
    fn default() -> Self {
        Self::start()
    }
}
