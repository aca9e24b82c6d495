//! Disk-scheduling domain models.
//!
//! # Domain Mappings
//!
//! | disk-schedule | Disk hardware | Textbook term |
//! |---------------|---------------|---------------|
//! | Track | Cylinder number | Request position |
//! | RunInput | Pending I/O queue | Request queue |
//! | Frame | Arm trace so far | Head movement chart |
//! | RunRecord | Benchmark row | Performance summary |

mod frame;
mod run;

pub use frame::Frame;
pub use run::{RunInput, RunRecord, RunState};

/// A track (cylinder) position on the simulated disk.
///
/// Signed so that arbitrary user input survives parsing; the domain does
/// not enforce a track-count bound.
pub type Track = i64;
