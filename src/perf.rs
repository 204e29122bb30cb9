//! Performance instrumentation.
//!
//! Scoped RAII timers for the interaction hot paths (pointer move, repaint).
//! Compiled out entirely unless the `profiling` feature is enabled:
//!
//! ```ignore
//! fn repaint() {
//!     profile_scope!("repaint");
//!     // ... paint calls ...
//! }
//! ```
//!
//! Timing is reported through `tracing` at TRACE level, with a WARN when a
//! scope overruns its threshold.

#[cfg(feature = "profiling")]
use std::time::Instant;
#[cfg(feature = "profiling")]
use tracing::{trace, warn};

/// Default per-scope warning threshold in milliseconds.
///
/// Pointer handlers and repaints share the event thread with the host, so
/// anything approaching a repaint interval is worth flagging.
pub const DEFAULT_WARN_THRESHOLD_MS: f64 = 8.0;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $crate::perf::DEFAULT_WARN_THRESHOLD_MS);
        #[cfg(not(feature = "profiling"))]
        let _ = $name; // Suppress unused variable warning
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

/// RAII timer that reports its scope's elapsed time when dropped.
#[cfg(feature = "profiling")]
pub struct ScopedTimer {
    name: &'static str,
    threshold_ms: f64,
    start: Instant,
}

#[cfg(feature = "profiling")]
impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            threshold_ms,
            start: Instant::now(),
        }
    }
}

#[cfg(feature = "profiling")]
impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        if elapsed_ms > self.threshold_ms {
            warn!(scope = self.name, elapsed_ms, threshold_ms = self.threshold_ms, "slow scope");
        } else {
            trace!(scope = self.name, elapsed_ms, "scope timing");
        }
    }
}
