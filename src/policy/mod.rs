//! Request-ordering policies.
//!
//! Each policy maps a head position and a request list to the order in
//! which the head visits those requests.
//!
//! # Usage
//!
//! ```
//! use disk_schedule::policy::{Policy, SchedulingPolicy, rules};
//!
//! let order = rules::Sstf.order(53, &[98, 183, 37, 122, 14, 124, 65, 67]);
//! assert_eq!(order[0], 65);
//! assert_eq!(Policy::from_name("c-scan"), Policy::CScan);
//! ```
//!
//! # Fidelity
//!
//! SCAN, C-SCAN and LOOK order pass-through unless [`SweepMode::Directional`]
//! is selected. `ai` sorts ascending; it is a stand-in heuristic, not an
//! optimizer.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 11.2
//! - Denning (1967), "Effects of Scheduling on File Memory Operations"

pub mod rules;

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

use crate::models::Track;

/// An ordering rule over disk requests.
///
/// Implementations are pure: the output must contain exactly the input
/// elements (a permutation), and must not depend on anything but the
/// arguments.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Short rule name (e.g. "SSTF").
    fn name(&self) -> &'static str;

    /// Returns the service order for `requests` starting from `head`.
    fn order(&self, head: Track, requests: &[Track]) -> Vec<Track>;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Sweep direction for SCAN-family policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Toward higher track numbers.
    #[default]
    Up,
    /// Toward lower track numbers.
    Down,
}

/// How SCAN, C-SCAN and LOOK order their requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SweepMode {
    /// Arrival order, identical to FCFS.
    #[default]
    PassThrough,
    /// Real elevator sweeps starting in the given direction.
    Directional(Direction),
}

/// Policy selector, as chosen on the form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Policy {
    /// First-come-first-served.
    #[default]
    Fcfs,
    /// Shortest-seek-time-first.
    Sstf,
    /// Elevator to the disk edge.
    Scan,
    /// Circular elevator.
    CScan,
    /// Elevator reversing at the last request.
    Look,
    /// Ascending sort ("AI" on the form).
    Sorted,
    /// Unrecognized selector; orders pass-through.
    Other(String),
}

impl Policy {
    /// All built-in selectors, in form order.
    pub const BUILT_IN: [Policy; 6] = [
        Policy::Fcfs,
        Policy::Sstf,
        Policy::Scan,
        Policy::CScan,
        Policy::Look,
        Policy::Sorted,
    ];

    /// Parses a selector name (case-insensitive). Never fails.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Policy::Fcfs,
            "sstf" => Policy::Sstf,
            "scan" => Policy::Scan,
            "cscan" | "c-scan" => Policy::CScan,
            "look" => Policy::Look,
            "ai" => Policy::Sorted,
            _ => Policy::Other(name.trim().to_string()),
        }
    }

    /// Selector name, as persisted and recorded in history.
    pub fn name(&self) -> &str {
        match self {
            Policy::Fcfs => "fcfs",
            Policy::Sstf => "sstf",
            Policy::Scan => "scan",
            Policy::CScan => "cscan",
            Policy::Look => "look",
            Policy::Sorted => "ai",
            Policy::Other(name) => name,
        }
    }

    /// Uppercased name for display.
    pub fn label(&self) -> String {
        self.name().to_uppercase()
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Policy::Fcfs => "First-Come First-Served",
            Policy::Sstf => "Shortest Seek Time First",
            Policy::Scan => "Elevator sweep to the disk edge",
            Policy::CScan => "Circular elevator sweep",
            Policy::Look => "Elevator sweep reversing at the last request",
            Policy::Sorted => "Ascending track order (heuristic stand-in)",
            Policy::Other(_) => "Unrecognized policy (arrival order)",
        }
    }

    /// Resolves the selector to its ordering rule.
    pub fn rule(&self, sweep: SweepMode) -> Box<dyn SchedulingPolicy> {
        let direction = match sweep {
            SweepMode::PassThrough => None,
            SweepMode::Directional(direction) => Some(direction),
        };
        match (self, direction) {
            (Policy::Sstf, _) => Box::new(rules::Sstf),
            (Policy::Sorted, _) => Box::new(rules::Ascending),
            (Policy::Scan, Some(direction)) => Box::new(rules::Scan::new(direction)),
            (Policy::CScan, Some(direction)) => Box::new(rules::CScan::new(direction)),
            (Policy::Look, Some(direction)) => Box::new(rules::Look::new(direction)),
            _ => Box::new(rules::Fcfs),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
