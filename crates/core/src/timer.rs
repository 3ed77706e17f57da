//! Stopwatch - the free-running game clock
//!
//! The clock is advanced by the same fixed-timestep `tick` that drives the rest
//! of the game, so it needs no thread and no callback handle. Every full period
//! it reports a fresh `HH:MM:SS` string for the display.

use std::fmt;
use std::time::Duration;

use crate::types::TIMER_PERIOD_MS;

/// Text shown while no game clock has run yet.
pub const ZERO_TIME: &str = "00:00:00";

/// Format a duration as zero-padded `HH:MM:SS`. Hours are not wrapped at 24.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use memory_match_core::timer::format_hms;
///
/// assert_eq!(format_hms(Duration::from_secs(0)), "00:00:00");
/// assert_eq!(format_hms(Duration::from_secs(3_725)), "01:02:05");
/// assert_eq!(format_hms(Duration::from_secs(100 * 3600)), "100:00:00");
/// ```
pub fn format_hms(elapsed: Duration) -> String {
    ElapsedTime(elapsed).to_string()
}

/// Elapsed game time with an `HH:MM:SS` display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ElapsedTime(pub Duration);

impl ElapsedTime {
    pub fn as_millis(self) -> u64 {
        self.0.as_millis() as u64
    }
}

impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.0.as_secs();
        write!(
            f,
            "{:02}:{:02}:{:02}",
            secs / 3600,
            (secs / 60) % 60,
            secs % 60
        )
    }
}

/// Start/stop/reset stopwatch with a periodic display tick.
#[derive(Debug, Clone)]
pub struct Stopwatch {
    running: bool,
    elapsed_ms: u64,
    since_tick_ms: u32,
    period_ms: u32,
    /// Increments on every successful start.
    session: u32,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::with_period(TIMER_PERIOD_MS)
    }

    pub fn with_period(period_ms: u32) -> Self {
        Self {
            running: false,
            elapsed_ms: 0,
            since_tick_ms: 0,
            period_ms: period_ms.max(1),
            session: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn session(&self) -> u32 {
        self.session
    }

    pub fn elapsed(&self) -> ElapsedTime {
        ElapsedTime(Duration::from_millis(self.elapsed_ms))
    }

    /// Start counting from zero.
    ///
    /// Returns the initial display text, or `None` if the clock is already
    /// running (a second start never creates a second clock).
    pub fn start(&mut self) -> Option<String> {
        if self.running {
            return None;
        }
        self.running = true;
        self.elapsed_ms = 0;
        self.since_tick_ms = 0;
        self.session = self.session.wrapping_add(1);
        Some(self.elapsed().to_string())
    }

    /// Halt ticking, keeping the elapsed value.
    pub fn stop(&mut self) {
        self.running = false;
        self.since_tick_ms = 0;
    }

    /// Halt ticking and clear the elapsed value.
    pub fn reset(&mut self) -> &'static str {
        self.running = false;
        self.elapsed_ms = 0;
        self.since_tick_ms = 0;
        ZERO_TIME
    }

    /// Advance the clock.
    ///
    /// Returns the refreshed display text when at least one full period has
    /// passed since the last refresh. Several periods in one call produce a
    /// single refresh.
    pub fn advance(&mut self, elapsed_ms: u32) -> Option<String> {
        if !self.running {
            return None;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms as u64);
        self.since_tick_ms = self.since_tick_ms.saturating_add(elapsed_ms);
        if self.since_tick_ms < self.period_ms {
            return None;
        }
        self.since_tick_ms %= self.period_ms;
        Some(self.elapsed().to_string())
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}
