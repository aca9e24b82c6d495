//! Simulation settings and persisted form values.
//!
//! [`Settings`] holds pacing, plot geometry and sweep fidelity. The
//! [`store`] submodule persists the raw form fields between sessions.

pub mod store;

pub use store::{ConfigStore, FileStore, FormState, MemoryStore, SavedConfig};

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::models::Track;
use crate::policy::SweepMode;

/// Default delay between animation steps (ms).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 500;

/// Pacing, plotting and policy settings.
///
/// # Example
///
/// ```
/// use disk_schedule::config::Settings;
///
/// let settings = Settings::default().with_tick_interval_ms(100).with_plot_size(640, 320);
/// assert_eq!(settings.tick_interval().as_millis(), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Delay between animation steps (ms).
    pub tick_interval_ms: u64,
    /// Plot surface width (px).
    pub plot_width: u32,
    /// Plot surface height (px).
    pub plot_height: u32,
    /// Gap between surface edge and axes (px).
    pub margin: u32,
    /// Minimum y-axis maximum; plots never scale below this.
    pub min_scale: Track,
    /// Number of y-axis intervals.
    pub y_ticks: u32,
    /// Point marker radius (px).
    pub marker_radius: u32,
    /// How SCAN-family policies order requests.
    pub sweep_mode: SweepMode,
    /// Highest track a generated workload may request.
    pub max_track: Track,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            plot_width: 800,
            plot_height: 400,
            margin: 50,
            min_scale: 200,
            y_ticks: 5,
            marker_radius: 5,
            sweep_mode: SweepMode::PassThrough,
            max_track: 199,
        }
    }
}

impl Settings {
    /// Delay between animation steps.
    #[inline]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Sets the step delay.
    pub fn with_tick_interval_ms(mut self, ms: u64) -> Self {
        self.tick_interval_ms = ms;
        self
    }

    /// Sets the plot surface size.
    pub fn with_plot_size(mut self, width: u32, height: u32) -> Self {
        self.plot_width = width;
        self.plot_height = height;
        self
    }

    /// Sets the axis margin.
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the sweep mode.
    pub fn with_sweep_mode(mut self, sweep_mode: SweepMode) -> Self {
        self.sweep_mode = sweep_mode;
        self
    }

    /// Sets the highest generated track.
    pub fn with_max_track(mut self, max_track: Track) -> Self {
        self.max_track = max_track;
        self
    }
}
