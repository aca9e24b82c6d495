//! SVG display.

use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

use super::{Display, Notice, Panel};
use crate::models::Frame;
use crate::render::Renderer;
use crate::scheduler::StepMetrics;

/// Renders each frame to an SVG document.
///
/// With an output directory set, every frame is also written as
/// `frame-NNN.svg`, numbered from 0 per run.
#[derive(Debug, Clone, Default)]
pub struct SvgDisplay {
    renderer: Renderer,
    out_dir: Option<PathBuf>,
    panel: Panel,
    current: Option<String>,
    frame_index: usize,
}

impl SvgDisplay {
    pub fn new(renderer: Renderer) -> Self {
        Self {
            renderer,
            ..Default::default()
        }
    }

    /// Writes every frame into `dir`.
    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(dir.into());
        self
    }

    /// Current metrics panel.
    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// Latest SVG document; `None` after a clear.
    pub fn current_svg(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Frames drawn since the last clear.
    pub fn frames_drawn(&self) -> usize {
        self.frame_index
    }

    fn write_frame(&self, svg: &str) {
        let Some(dir) = &self.out_dir else {
            return;
        };
        let path = dir.join(format!("frame-{:03}.svg", self.frame_index));
        if let Err(e) = fs::create_dir_all(dir).and_then(|_| fs::write(&path, svg)) {
            warn!(path = %path.display(), error = %e, "failed to write frame");
        }
    }
}

impl Display for SvgDisplay {
    fn show_policy(&mut self, label: &str) {
        self.panel.policy = label.to_string();
        // A new run restarts frame numbering.
        self.frame_index = 0;
    }

    fn draw(&mut self, frame: &Frame<'_>) {
        match self.renderer.render_svg(frame) {
            Ok(svg) => {
                self.write_frame(&svg);
                self.current = Some(svg);
                self.frame_index += 1;
            }
            Err(e) => warn!(error = %e, "frame skipped"),
        }
    }

    fn publish(&mut self, metrics: &StepMetrics) {
        self.panel.publish(metrics);
    }

    fn clear(&mut self) {
        self.panel = Panel::default();
        self.current = None;
        self.frame_index = 0;
    }

    fn notify(&mut self, notice: Notice) {
        info!(%notice, "notice");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_and_clear() {
        let mut display = SvgDisplay::default();
        display.show_policy("FCFS");
        let seq = [10, 20];
        display.draw(&Frame::new(50, &seq, 1));
        assert_eq!(display.frames_drawn(), 1);
        assert!(display.current_svg().unwrap().contains("<circle"));

        display.clear();
        assert!(display.current_svg().is_none());
        assert_eq!(display.panel().policy, "None");
    }

    #[test]
    fn test_frames_written() {
        let dir = std::env::temp_dir().join(format!("disk-schedule-frames-{}", std::process::id()));
        let mut display = SvgDisplay::default().with_out_dir(&dir);
        let seq = [10, 20];
        display.draw(&Frame::new(50, &seq, 1));
        display.draw(&Frame::new(50, &seq, 2));
        assert!(dir.join("frame-000.svg").exists());
        assert!(dir.join("frame-001.svg").exists());
        let _ = fs::remove_dir_all(&dir);
    }
}
