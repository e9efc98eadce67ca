//! Process uptime clock.
//!
//! The start instant is captured once per process and only read afterwards,
//! so handlers can report uptime without synchronization.

use std::sync::OnceLock;
use std::time::{Duration, Instant};

static PROCESS_START: OnceLock<Instant> = OnceLock::new();

/// Record the process start instant. Later calls keep the first value.
pub fn mark_process_start() -> Instant {
    *PROCESS_START.get_or_init(Instant::now)
}

/// Time elapsed since the process start was recorded.
///
/// If startup never called [`mark_process_start`], the clock starts on first read.
pub fn process_uptime() -> Duration {
    mark_process_start().elapsed()
}

/// Uptime in fractional seconds.
pub fn process_uptime_secs() -> f64 {
    process_uptime().as_secs_f64()
}
