//! Progress and log reporting.
//!
//! The solver is a long-running synchronous call; the [`Reporter`] trait
//! is its only outward surface while running. The engine invokes it at a
//! fixed checkpoint interval (not per trial), so the trace volume stays
//! bounded on large inputs. Hosts that need cooperative interleaving —
//! keeping a UI responsive, honoring a timeout, cancelling — do so inside
//! these callbacks: the core has no internal abort flag, and a host that
//! declines to return from a checkpoint effectively stops the search.

/// Callback surface invoked by the solver while it runs.
///
/// Both methods default to no-ops; implement only what the host needs.
/// `progress` values are monotonically non-decreasing within one solve
/// and clamped to at most 95.0 until the result is known — reporting
/// 100% is the host's decision once the call returns.
pub trait Reporter {
    /// Receives one human-readable trace line.
    fn log(&mut self, line: &str) {
        let _ = line;
    }

    /// Receives an estimated completion percentage in `0.0..=95.0`.
    fn progress(&mut self, percent: f64) {
        let _ = percent;
    }
}

/// Reporter that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Reporter that records every line and progress value it receives.
///
/// Useful in tests and for hosts that buffer the trace for later display.
#[derive(Debug, Clone, Default)]
pub struct MemoryReporter {
    /// Trace lines in arrival order.
    pub lines: Vec<String>,
    /// Progress values in arrival order.
    pub percents: Vec<f64>,
}

impl MemoryReporter {
    /// Creates an empty reporter.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for MemoryReporter {
    fn log(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn progress(&mut self, percent: f64) {
        self.percents.push(percent);
    }
}
