// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Progress reporting for the sampling passes.  The sampler calls the
//! collaborator after every sample and leaves it to decide whether
//! anything is worth saying, so the numerical code never looks at a
//! clock.

use itertools::Itertools;
use std::time::{Duration, Instant};

/// Receives "samples taken out of total" updates for a channel.
pub trait Progress {
    /// Called once when a channel's pass starts.
    fn begin(&mut self, _channel: &str, _total: u64) {}

    /// Called before each seed is drawn.  `taken` counts the samples
    /// finished so far, so the first call sees 0.
    fn sampled(&mut self, channel: &str, taken: u64, total: u64);
}

/// Says nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct Quiet;

impl Progress for Quiet {
    #[inline]
    fn sampled(&mut self, _channel: &str, _taken: u64, _total: u64) {}
}

/// Logs a status line at `info` level: first after a short delay, and
/// after that at a longer interval.  Every pass gets the short delay
/// again.
#[derive(Debug)]
pub struct TimedProgress {
    next: Instant,
    first: Duration,
    interval: Duration,
}

impl TimedProgress {
    /// First report after `first`, then every `interval`.
    pub fn new(first: Duration, interval: Duration) -> Self {
        TimedProgress {
            next: Instant::now() + first,
            first,
            interval,
        }
    }

    /// Restarts the short first delay from `now`.
    pub fn restart(&mut self, now: Instant) {
        self.next = now + self.first;
    }

    /// Whether a report is due at `now`.  If so, schedules the next one.
    pub fn due(&mut self, now: Instant) -> bool {
        if now > self.next {
            self.next = now + self.interval;
            true
        } else {
            false
        }
    }
}

impl Default for TimedProgress {
    fn default() -> Self {
        TimedProgress::new(Duration::from_secs(5), Duration::from_secs(30))
    }
}

impl Progress for TimedProgress {
    fn begin(&mut self, _channel: &str, _total: u64) {
        self.restart(Instant::now());
    }

    fn sampled(&mut self, channel: &str, taken: u64, total: u64) {
        if self.due(Instant::now()) {
            info!("{}: Samples Taken: {}/{}", channel, taken, total);
        }
    }
}

/// "1 Days, 2 Hours, 3 Minutes, 4 Seconds, 5 Milliseconds", leaving
/// out the parts that are zero.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    let (days, hours) = (secs / 86_400, (secs / 3_600) % 24);
    let (minutes, seconds) = ((secs / 60) % 60, secs % 60);
    let millis = u64::from(elapsed.subsec_millis());

    let parts = [
        (days, "Days"),
        (hours, "Hours"),
        (minutes, "Minutes"),
        (seconds, "Seconds"),
        (millis, "Milliseconds"),
    ];
    let text = parts
        .iter()
        .filter(|&&(count, _)| count > 0)
        .map(|&(count, unit)| format!("{} {}", count, unit))
        .join(", ");
    if text.is_empty() {
        "0 Milliseconds".to_string()
    } else {
        text
    }
}
