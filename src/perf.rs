//! Timing utilities.
//!
//! Uploads and dashboard builds are synchronous and bounded by the upload
//! size ceiling, so timing is only used to surface unexpectedly slow runs
//! through `tracing`.
//!
//! ## Usage
//!
//! ```ignore
//! use chartlens::perf::ScopedTimer;
//!
//! fn load() {
//!     let _timer = ScopedTimer::with_default_threshold("load");
//!     // ... work ...
//! }
//! ```

use crate::constants::SLOW_OPERATION_MS;
use std::time::Instant;
use tracing::{debug, warn};

/// RAII timer that logs its scope's duration when dropped.
///
/// Durations above the threshold are logged at `warn`, everything else at
/// `debug`.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    /// Create a timer with a custom slow-operation threshold.
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Create a timer using [`SLOW_OPERATION_MS`].
    pub fn with_default_threshold(name: &'static str) -> Self {
        Self::new(name, SLOW_OPERATION_MS)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow operation"
            );
        } else {
            debug!(operation = self.name, elapsed_ms = format!("{:.2}", elapsed_ms), "Operation finished");
        }
    }
}
