//! Run lifecycle types.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Track;
use crate::policy::Policy;
use crate::scheduler::StepMetrics;

/// Validated parameters for one simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunInput {
    /// Starting head position.
    pub head: Track,
    /// Requests in arrival order (non-numeric tokens already dropped).
    pub requests: Vec<Track>,
    /// Ordering policy.
    pub policy: Policy,
}

impl RunInput {
    /// Creates a run input.
    pub fn new(head: Track, requests: Vec<Track>, policy: Policy) -> Self {
        Self {
            head,
            requests,
            policy,
        }
    }
}

/// Driver lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunState {
    /// No run loaded.
    #[default]
    Idle,
    /// Stepping through the sequence.
    Running,
    /// Stepping halted; sequence and cursor retained.
    Paused,
    /// Sequence fully revealed and recorded.
    Completed,
}

impl RunState {
    /// Whether a run currently owns the driver (Running or Paused).
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, RunState::Running | RunState::Paused)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunState::Idle => "idle",
            RunState::Running => "running",
            RunState::Paused => "paused",
            RunState::Completed => "completed",
        };
        f.write_str(name)
    }
}

/// Snapshot of a completed run, as shown in the history table.
///
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Policy selector name as entered (e.g. `"sstf"`).
    pub policy: String,
    /// Total seek distance over the full sequence.
    pub seek_time: u64,
    /// Average response time, rounded to two decimals.
    pub response_time: f64,
    /// Requests serviced.
    pub throughput: usize,
}

impl RunRecord {
    /// Builds a record from the metrics published at the final step.
    pub fn from_metrics(policy: &Policy, metrics: &StepMetrics) -> Self {
        Self {
            policy: policy.name().to_string(),
            seek_time: metrics.seek_time,
            response_time: metrics.response_time,
            throughput: metrics.throughput,
        }
    }

    /// Policy name as displayed (uppercased).
    pub fn policy_label(&self) -> String {
        self.policy.to_uppercase()
    }

    /// Response time formatted with two decimals.
    pub fn response_label(&self) -> String {
        format!("{:.2}", self.response_time)
    }
}
