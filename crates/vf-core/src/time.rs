//! Simulated time model.
//!
//! # Design
//!
//! Simulated time is a continuous `f64` count of seconds since the run
//! started.  Each tick advances it by the real frame delta multiplied by the
//! configured time scale:
//!
//!   sim_dt = real_dt * time_scale
//!
//! Ticks are also counted so observers can tell frames apart even when two
//! consecutive frames report the same simulated time (a zero-length first
//! frame, or a paused host).

use std::fmt;

/// Tracks elapsed simulated seconds and the number of ticks processed.
///
/// `SimClock` is cheap to copy and holds no heap data.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Simulated seconds since the run started.
    pub elapsed_secs: f64,
    /// Ticks processed since the run started.
    pub tick: u64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one tick covering `real_dt` real seconds.
    ///
    /// Negative or non-finite deltas count as zero so a misbehaving host
    /// clock can never move simulated time backwards.  Returns the simulated
    /// delta that was applied.
    pub fn advance(&mut self, real_dt: f64, time_scale: f64) -> f64 {
        let real_dt = if real_dt.is_finite() { real_dt.max(0.0) } else { 0.0 };
        let sim_dt = real_dt * time_scale;
        self.elapsed_secs += sim_dt;
        self.tick += 1;
        sim_dt
    }

    /// Back to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{} ({})", self.tick, format_clock(self.elapsed_secs))
    }
}

/// Format a duration in seconds as `m:ss` (minutes are not wrapped at 60).
///
/// ```
/// assert_eq!(vf_core::time::format_clock(125.9), "2:05");
/// ```
pub fn format_clock(secs: f64) -> String {
    let (m, s) = split_minutes(secs);
    format!("{m}:{s:02}")
}

fn split_minutes(secs: f64) -> (u64, u32) {
    let total = if secs.is_finite() { secs.max(0.0).floor() as u64 } else { 0 };
    (total / 60, (total % 60) as u32)
}
