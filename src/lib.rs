//! Disk-arm scheduling visualizer.
//!
//! Computes the order in which a simulated disk head services track
//! requests, replays that order one step at a time, and reports seek
//! metrics for each revealed prefix.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Track`, `RunInput`, `RunRecord`, `RunState`, `Frame`
//! - **`validation`**: Parsing of head and request-list text
//! - **`policy`**: Ordering policies (FCFS, SSTF, SCAN, C-SCAN, LOOK, sorted)
//! - **`scheduler`**: Sequence computation and seek metrics
//! - **`animation`**: Step-paced run driver with pause/resume/reset
//! - **`render`**: Plot geometry and drawing onto a plotters surface
//! - **`display`**: Output collaborator interface and SVG / in-memory displays
//! - **`history`**: Append-only log of completed runs
//! - **`config`**: Settings and persisted form values
//! - **`workload`**: Seeded request-list generators
//!
//! # Flow
//!
//! Raw form values → `validation` → `scheduler::schedule_with` → `animation::Driver`
//! ticks, each tick drawing a `Frame` and publishing `StepMetrics` → on completion
//! a `RunRecord` lands in the `HistoryLog`.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11.2
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 5.4.3

pub mod animation;
pub mod config;
pub mod display;
mod error;
pub mod history;
pub mod models;
pub mod policy;
pub mod render;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Error, Result};
