//! Lightweight performance timing utilities.
//!
//! This module provides simple timing infrastructure for measuring
//! where runtime is being spent. Can be enabled/disabled via environment
//! variable or programmatically.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

static ENABLED: AtomicBool = AtomicBool::new(false);

/// Enable performance timing globally.
pub fn enable_timing() {
    ENABLED.store(true, Ordering::Relaxed);
}

/// Disable performance timing globally.
pub fn disable_timing() {
    ENABLED.store(false, Ordering::Relaxed);
}

/// Check if timing is enabled.
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed) || std::env::var("SW_TIMING").is_ok()
}

/// A simple timer that measures elapsed time.
pub struct Timer {
    label: &'static str,
    start: Instant,
    enabled: bool,
}

impl Timer {
    /// Create and start a new timer with the given label.
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
            enabled: is_enabled(),
        }
    }

    /// Stop the timer and return elapsed time in seconds.
    /// If timing is disabled, returns None.
    pub fn stop(self) -> Option<f64> {
        if self.enabled {
            Some(self.start.elapsed().as_secs_f64())
        } else {
            None
        }
    }

    /// Stop the timer and print the result if enabled.
    pub fn stop_and_print(self) {
        let label = self.label;
        if let Some(elapsed) = self.stop() {
            println!("[TIMING] {}: {:.3}s", label, elapsed);
        }
    }
}

/// Accumulating timer for tracking total time across multiple calls.
pub struct AccumulatingTimer {
    total_ns: AtomicU64,
    count: AtomicU64,
}

impl Default for AccumulatingTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl AccumulatingTimer {
    /// Create a new accumulating timer.
    pub const fn new() -> Self {
        Self {
            total_ns: AtomicU64::new(0),
            count: AtomicU64::new(0),
        }
    }

    /// Record a timing measurement.
    pub fn record(&self, duration_s: f64) {
        let nanos = (duration_s * 1e9) as u64;
        self.total_ns.fetch_add(nanos, Ordering::Relaxed);
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total time spent (in seconds).
    pub fn total_seconds(&self) -> f64 {
        self.total_ns.load(Ordering::Relaxed) as f64 / 1e9
    }

    /// Get number of calls.
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    /// Get average time per call (in seconds).
    pub fn average_seconds(&self) -> f64 {
        let count = self.count();
        if count > 0 {
            self.total_seconds() / count as f64
        } else {
            0.0
        }
    }

    /// Reset the timer.
    pub fn reset(&self) {
        self.total_ns.store(0, Ordering::Relaxed);
        self.count.store(0, Ordering::Relaxed);
    }
}

/// Equation-of-state query timers.
pub mod eos_timing {
    use super::AccumulatingTimer;

    /// Time spent in pure-water delegate backend queries
    pub static WATER_DELEGATE_CALLS: AccumulatingTimer = AccumulatingTimer::new();
    /// Time spent in fast-series pure-water evaluations
    pub static WATER_FAST_CALLS: AccumulatingTimer = AccumulatingTimer::new();
    /// Time spent in saline series evaluations
    pub static SALINE_CALLS: AccumulatingTimer = AccumulatingTimer::new();
    /// Time spent in full state evaluations
    pub static STATE_EVALUATIONS: AccumulatingTimer = AccumulatingTimer::new();

    /// Reset all EOS timers.
    pub fn reset_all() {
        WATER_DELEGATE_CALLS.reset();
        WATER_FAST_CALLS.reset();
        SALINE_CALLS.reset();
        STATE_EVALUATIONS.reset();
    }

    /// Print EOS timing summary.
    pub fn print_summary() {
        use super::is_enabled;
        if !is_enabled() {
            return;
        }

        println!("\n=== EOS Query Breakdown ===");

        let pairs = [
            ("water delegate:", &WATER_DELEGATE_CALLS),
            ("water fast series:", &WATER_FAST_CALLS),
            ("saline series:", &SALINE_CALLS),
            ("state evaluations:", &STATE_EVALUATIONS),
        ];
        for (label, timer) in pairs {
            let count = timer.count();
            if count > 0 {
                println!(
                    "{:<20} {} calls, {:.3}s total, {:.4}ms avg",
                    label,
                    count,
                    timer.total_seconds(),
                    timer.average_seconds() * 1000.0
                );
            }
        }

        println!("===========================\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulating_timer_records() {
        let timer = AccumulatingTimer::new();
        timer.record(0.5);
        timer.record(1.5);
        assert_eq!(timer.count(), 2);
        assert!((timer.total_seconds() - 2.0).abs() < 1e-6);
        assert!((timer.average_seconds() - 1.0).abs() < 1e-6);
        timer.reset();
        assert_eq!(timer.count(), 0);
    }

    #[test]
    fn timer_disabled_returns_none() {
        disable_timing();
        if std::env::var("SW_TIMING").is_err() {
            let t = Timer::start("test");
            assert!(t.stop().is_none());
        }
    }
}
