//! Seek metrics for a revealed prefix.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Seek time | Σ\|p[i] − p[i−1]\| with p[0] = head |
//! | Response time | seek time / full sequence length, 2 decimals |
//! | Throughput | Requests serviced so far |
//! | Progress | serviced / full sequence length × 100 |

use serde::{Deserialize, Serialize};

use crate::models::Track;

/// Cumulative head travel from `head` through `visited`, in order.
///
/// Returns 0 for an empty slice. Saturates at `u64::MAX`.
pub fn seek_time(head: Track, visited: &[Track]) -> u64 {
    let mut total: u64 = 0;
    let mut current = head;
    for &track in visited {
        total = total.saturating_add(track.abs_diff(current));
        current = track;
    }
    total
}

/// Average response time: `seek / total_len`, rounded to two decimals.
///
/// Returns 0 when `total_len` is 0.
pub fn response_time(seek: u64, total_len: usize) -> f64 {
    if total_len == 0 {
        return 0.0;
    }
    round2(seek as f64 / total_len as f64)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Metrics published at one animation step.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StepMetrics {
    /// Seek distance over the revealed prefix.
    pub seek_time: u64,
    /// Prefix seek distance averaged over the full sequence length.
    pub response_time: f64,
    /// Revealed prefix length.
    pub throughput: usize,
    /// Completion percentage (0.0..=100.0).
    pub progress: f64,
}

impl StepMetrics {
    /// Computes metrics for the first `revealed` entries of `sequence`.
    pub fn for_prefix(head: Track, sequence: &[Track], revealed: usize) -> Self {
        let revealed = revealed.min(sequence.len());
        let seek = seek_time(head, &sequence[..revealed]);
        let progress = if sequence.is_empty() {
            0.0
        } else {
            revealed as f64 / sequence.len() as f64 * 100.0
        };
        Self {
            seek_time: seek,
            response_time: response_time(seek, sequence.len()),
            throughput: revealed,
            progress,
        }
    }

    /// Response time formatted with two decimals.
    pub fn response_label(&self) -> String {
        format!("{:.2}", self.response_time)
    }
}
