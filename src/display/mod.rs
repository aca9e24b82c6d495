//! Output collaborator.
//!
//! The [`Display`] trait is what the driver talks to: it shows the
//! selected policy, draws each frame, publishes metrics, clears on reset
//! and surfaces user-facing [`Notice`]s. Displays never fail; they log.
//!
//! | Display | Surface |
//! |---------|---------|
//! | [`SvgDisplay`] | SVG document per step, optional frame files |
//! | [`MemoryDisplay`] | Records every call (headless use, tests) |

mod memory;
mod svg;

pub use memory::{DrawnFrame, MemoryDisplay};
pub use svg::SvgDisplay;

use std::fmt;

use crate::models::Frame;
use crate::scheduler::StepMetrics;

/// Shown in response to a help request.
pub const HELP_TEXT: &str =
    "Set a head position, a comma-separated request list and a policy, then start. \
     Pause, resume or reset at any time; completed runs are listed in the history table.";

/// A user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Start was refused because a run is active.
    RunRejected,
    /// Run input failed validation.
    InvalidInput(String),
    ConfigSaved,
    ConfigLoaded,
    Help,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::RunRejected => f.write_str("A simulation is already running."),
            Notice::InvalidInput(message) => f.write_str(message),
            Notice::ConfigSaved => f.write_str("Configuration saved!"),
            Notice::ConfigLoaded => f.write_str("Configuration loaded!"),
            Notice::Help => f.write_str(HELP_TEXT),
        }
    }
}

/// The metrics panel as the user sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    /// Uppercased policy name, or "None".
    pub policy: String,
    pub seek_time: String,
    pub response_time: String,
    pub throughput: String,
    /// Progress bar fill (0.0..=100.0).
    pub progress: f64,
}

impl Default for Panel {
    fn default() -> Self {
        Self {
            policy: "None".to_string(),
            seek_time: "0".to_string(),
            response_time: "0".to_string(),
            throughput: "0".to_string(),
            progress: 0.0,
        }
    }
}

impl Panel {
    /// Updates the metric fields from a step.
    pub fn publish(&mut self, metrics: &StepMetrics) {
        self.seek_time = metrics.seek_time.to_string();
        self.response_time = metrics.response_label();
        self.throughput = metrics.throughput.to_string();
        self.progress = metrics.progress;
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | seek {} | response {} | throughput {} | {:.0}%",
            self.policy, self.seek_time, self.response_time, self.throughput, self.progress
        )
    }
}

/// Presentation surface driven by the animation driver.
pub trait Display {
    /// Shows the selected policy name (already uppercased).
    fn show_policy(&mut self, label: &str);

    /// Clears and redraws the plot for `frame`.
    fn draw(&mut self, frame: &Frame<'_>);

    /// Publishes metrics for the frame just drawn.
    fn publish(&mut self, metrics: &StepMetrics);

    /// Clears the plot and resets the panel.
    fn clear(&mut self);

    /// Surfaces a user-facing message.
    fn notify(&mut self, notice: Notice);
}
