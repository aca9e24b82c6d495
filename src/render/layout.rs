//! Plot geometry.
//!
//! Maps track values and step indices to surface pixels. Kept free of any
//! drawing backend so it can be checked numerically.

use crate::config::Settings;
use crate::models::{Frame, Track};

/// A labelled axis tick at a pixel offset along its axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisTick {
    /// Pixel coordinate along the axis (x for the step axis, y for the track axis).
    pub at: i32,
    pub label: String,
}

/// Pixel mapping for one frame.
///
/// The y-axis runs from 0 at the bottom margin to `max_value` at the top
/// margin; the x-axis spaces `sequence.len() + 1` intervals across the
/// plot width, with the head at step 0.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotLayout {
    pub width: i32,
    pub height: i32,
    pub margin: i32,
    /// Largest plotted value (≥ `min_scale`).
    pub max_value: Track,
    /// Pixels per track.
    pub scale_y: f64,
    /// Pixels per step.
    pub step_x: f64,
    steps: usize,
    y_ticks: u32,
}

impl PlotLayout {
    /// Computes the layout for `frame` on a surface described by `settings`.
    pub fn new(settings: &Settings, frame: &Frame<'_>) -> Self {
        let width = settings.plot_width as i32;
        let height = settings.plot_height as i32;
        let margin = settings.margin as i32;
        let plot_width = f64::from(width - 2 * margin);
        let plot_height = f64::from(height - 2 * margin);
        let max_value = frame.scale_max(settings.min_scale).max(1);
        let steps = frame.sequence().len();

        Self {
            width,
            height,
            margin,
            max_value,
            scale_y: plot_height / max_value as f64,
            step_x: plot_width / (steps + 1) as f64,
            steps,
            y_ticks: settings.y_ticks.max(1),
        }
    }

    /// Plot-area height in pixels.
    #[inline]
    pub fn plot_height(&self) -> f64 {
        f64::from(self.height - 2 * self.margin)
    }

    /// Y pixel of the x-axis.
    #[inline]
    pub fn baseline(&self) -> i32 {
        self.height - self.margin
    }

    /// X pixel for step `index` (0 = head).
    pub fn x_at(&self, index: usize) -> i32 {
        (f64::from(self.margin) + index as f64 * self.step_x).round() as i32
    }

    /// Y pixel for a track value.
    pub fn y_at(&self, value: Track) -> i32 {
        (f64::from(self.baseline()) - value as f64 * self.scale_y).round() as i32
    }

    /// Track-axis ticks, bottom to top, labelled 0..=max.
    pub fn y_axis_ticks(&self) -> Vec<AxisTick> {
        let n = self.y_ticks;
        (0..=n)
            .map(|i| {
                let at = f64::from(self.baseline())
                    - f64::from(i) * self.plot_height() / f64::from(n);
                let value = (f64::from(i) * self.max_value as f64 / f64::from(n)).round() as i64;
                AxisTick {
                    at: at.round() as i32,
                    label: value.to_string(),
                }
            })
            .collect()
    }

    /// Step-axis ticks: "Start", then 1..=len+1.
    pub fn x_axis_ticks(&self) -> Vec<AxisTick> {
        (0..=self.steps + 1)
            .map(|i| AxisTick {
                at: self.x_at(i),
                label: if i == 0 {
                    "Start".to_string()
                } else {
                    i.to_string()
                },
            })
            .collect()
    }

    /// Pixel polyline for head followed by the revealed prefix.
    pub fn trace(&self, frame: &Frame<'_>) -> Vec<(i32, i32)> {
        frame
            .points()
            .enumerate()
            .map(|(i, value)| (self.x_at(i), self.y_at(value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let seq = [10, 20, 30];
        let frame = Frame::new(50, &seq, 3);
        let layout = PlotLayout::new(&Settings::default(), &frame);
        assert_eq!(layout.max_value, 200);
        assert!((layout.step_x - 175.0).abs() < 1e-9);
        assert!((layout.scale_y - 1.5).abs() < 1e-9);
        assert_eq!(layout.baseline(), 350);
        assert_eq!(layout.y_at(50), 275);
        assert_eq!(layout.x_at(0), 50);
        assert_eq!(layout.x_at(4), 750);
    }

    #[test]
    fn test_scale_grows_with_values() {
        let seq = [400];
        let layout = PlotLayout::new(&Settings::default(), &Frame::new(0, &seq, 0));
        assert_eq!(layout.max_value, 400);
        assert_eq!(layout.y_at(400), 50);
    }

    #[test]
    fn test_y_ticks() {
        let seq = [10];
        let layout = PlotLayout::new(&Settings::default(), &Frame::new(0, &seq, 0));
        let ticks = layout.y_axis_ticks();
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["0", "40", "80", "120", "160", "200"]);
        assert_eq!(ticks[0].at, 350);
        assert_eq!(ticks[5].at, 50);
    }

    #[test]
    fn test_x_ticks() {
        let seq = [10, 20];
        let layout = PlotLayout::new(&Settings::default(), &Frame::new(0, &seq, 0));
        let labels: Vec<String> = layout.x_axis_ticks().into_iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["Start", "1", "2", "3"]);
    }

    #[test]
    fn test_trace_follows_revealed_prefix() {
        let seq = [10, 20, 30];
        let frame = Frame::new(50, &seq, 2);
        let layout = PlotLayout::new(&Settings::default(), &frame);
        assert_eq!(layout.trace(&frame), vec![(50, 275), (225, 335), (400, 320)]);
    }
}
