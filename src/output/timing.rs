//! Elapsed-time progress messages

use colored::Colorize;
use std::time::{Duration, Instant};

/// Prints messages tagged with the time since the clock started
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    start: Instant,
}

impl Clock {
    #[must_use]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Format `message` with the elapsed seconds, e.g. `matrix built (1.23s)`
    #[must_use]
    pub fn stamp(&self, message: &str) -> String {
        format!(
            "{message} {}",
            format!("({:.2}s)", self.elapsed().as_secs_f64()).bright_black()
        )
    }

    pub fn log(&self, message: &str) {
        println!("{}", self.stamp(message));
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamp_includes_message_and_seconds() {
        colored::control::set_override(false);
        let clock = Clock::start();
        let line = clock.stamp("matrix built");
        assert!(line.starts_with("matrix built ("));
        assert!(line.ends_with("s)"));
    }

    #[test]
    fn elapsed_grows() {
        let clock = Clock::start();
        let first = clock.elapsed();
        std::thread::sleep(Duration::from_millis(2));
        assert!(clock.elapsed() > first);
    }
}
