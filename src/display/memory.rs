//! Recording display.

use super::{Display, Notice, Panel};
use crate::models::{Frame, Track};
use crate::scheduler::StepMetrics;

/// A drawn frame, owned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawnFrame {
    pub head: Track,
    pub sequence: Vec<Track>,
    pub revealed: usize,
}

/// Keeps the panel state and a log of every draw, publish and notice.
///
/// `frames` is a log and survives clears; `visible` is what the plot
/// currently shows.
#[derive(Debug, Clone, Default)]
pub struct MemoryDisplay {
    pub panel: Panel,
    pub visible: Option<DrawnFrame>,
    pub frames: Vec<DrawnFrame>,
    pub published: Vec<StepMetrics>,
    pub notices: Vec<Notice>,
    pub clears: usize,
}

impl MemoryDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Display for MemoryDisplay {
    fn show_policy(&mut self, label: &str) {
        self.panel.policy = label.to_string();
    }

    fn draw(&mut self, frame: &Frame<'_>) {
        let drawn = DrawnFrame {
            head: frame.head(),
            sequence: frame.sequence().to_vec(),
            revealed: frame.revealed(),
        };
        self.frames.push(drawn.clone());
        self.visible = Some(drawn);
    }

    fn publish(&mut self, metrics: &StepMetrics) {
        self.panel.publish(metrics);
        self.published.push(*metrics);
    }

    fn clear(&mut self) {
        self.panel = Panel::default();
        self.visible = None;
        self.clears += 1;
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
