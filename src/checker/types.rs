// Standard library
use std::sync::Arc;

// Current module imports
use super::traits::{Locate, Probe, Resolve};

/// The orchestrator: one resolver, one geolocator, one prober, applied to
/// every (hostname, label) pair in turn.
pub struct EdgeCheck {
    pub resolver: Arc<dyn Resolve>,
    pub locator: Arc<dyn Locate>,
    pub prober: Arc<dyn Probe>,
}

/// What happened to a single (hostname, label) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOutcome {
    /// All stages ran (the probe may still have found the edge unreachable).
    Completed,
    /// The DNS server answered with no address records.
    NoAnswer,
}

/// Pair counters for the whole run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub completed: usize,
    pub skipped: usize,
}
