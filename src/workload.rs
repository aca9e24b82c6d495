//! Request-list generators for the workload selector.
//!
//! The driver never reads the workload; these only fill the request
//! field with a plausible access pattern.
//!
//! | Workload | Pattern |
//! |----------|---------|
//! | Random | Uniform over `0..=max_track` |
//! | Sequential | Ascending run with small gaps, wrapping at the edge |
//! | Clustered | Tight groups around a few hot spots |

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Track;

const MAX_GAP: Track = 4;
const CLUSTER_SPREAD: Track = 10;

/// Access pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Workload {
    #[default]
    Random,
    Sequential,
    Clustered,
}

impl Workload {
    /// Parses a selector name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "random" => Some(Workload::Random),
            "sequential" => Some(Workload::Sequential),
            "clustered" => Some(Workload::Clustered),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Workload::Random => "random",
            Workload::Sequential => "sequential",
            Workload::Clustered => "clustered",
        }
    }

    /// Generates `count` tracks in `0..=max_track`.
    pub fn generate<R: Rng>(&self, rng: &mut R, count: usize, max_track: Track) -> Vec<Track> {
        let max_track = max_track.max(0);
        match self {
            Workload::Random => (0..count).map(|_| rng.random_range(0..=max_track)).collect(),
            Workload::Sequential => {
                let mut track = rng.random_range(0..=max_track);
                (0..count)
                    .map(|_| {
                        let current = track;
                        track = (track + rng.random_range(1..=MAX_GAP)) % (max_track + 1);
                        current
                    })
                    .collect()
            }
            Workload::Clustered => {
                let hot_spots: Vec<Track> = (0..rng.random_range(2..=3))
                    .map(|_| rng.random_range(0..=max_track))
                    .collect();
                (0..count)
                    .map(|i| {
                        let center = hot_spots[i % hot_spots.len()];
                        let offset = rng.random_range(-CLUSTER_SPREAD..=CLUSTER_SPREAD);
                        (center + offset).clamp(0, max_track)
                    })
                    .collect()
            }
        }
    }
}

/// Formats tracks as comma-separated request text.
pub fn to_request_text(tracks: &[Track]) -> String {
    tracks
        .iter()
        .map(Track::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
