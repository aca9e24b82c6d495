//! Head-movement plot.
//!
//! [`Renderer`] clears the surface and redraws axes, tick labels and the
//! revealed trace on every call; there is no incremental diffing.
//! Drawing goes through a plotters [`DrawingArea`], so any backend works;
//! [`Renderer::render_svg`] is the convenience path used by the displays.

mod layout;

pub use layout::{AxisTick, PlotLayout};

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::models::Frame;

/// Plot colours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: RGBColor,
    pub axis: RGBColor,
    pub trace: RGBColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: RGBColor(0x1e, 0x1e, 0x1e),
            axis: RGBColor(0xe0, 0xe0, 0xe0),
            trace: RGBColor(0x4c, 0xaf, 0x50),
        }
    }
}

const TICK_LEN: i32 = 5;
const FONT_SIZE: i32 = 12;

/// Draws frames onto a fixed-size surface.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    settings: Settings,
    palette: Palette,
}

impl Renderer {
    /// Creates a renderer with the default palette.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            palette: Palette::default(),
        }
    }

    /// Sets the palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Surface size in pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.settings.plot_width, self.settings.plot_height)
    }

    /// Clears `area` and draws `frame`.
    pub fn draw<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        frame: &Frame<'_>,
    ) -> Result<()> {
        let layout = PlotLayout::new(&self.settings, frame);
        let axis = self.palette.axis.stroke_width(1);
        let left = layout.margin;
        let right = layout.width - layout.margin;
        let top = layout.margin;
        let bottom = layout.baseline();

        area.fill(&self.palette.background).map_err(render_error)?;

        area.draw(&PathElement::new(vec![(left, bottom), (right, bottom)], axis))
            .map_err(render_error)?;
        area.draw(&PathElement::new(vec![(left, top), (left, bottom)], axis))
            .map_err(render_error)?;

        let label = ("sans-serif", FONT_SIZE).into_font().color(&self.palette.axis);

        for tick in layout.y_axis_ticks() {
            let mark = vec![(left - TICK_LEN, tick.at), (left, tick.at)];
            area.draw(&PathElement::new(mark, axis))
                .map_err(render_error)?;
            area.draw(&Text::new(
                tick.label,
                (left - 40, tick.at),
                label.pos(Pos::new(HPos::Left, VPos::Center)),
            ))
            .map_err(render_error)?;
        }

        for tick in layout.x_axis_ticks() {
            let mark = vec![(tick.at, bottom), (tick.at, bottom + TICK_LEN)];
            area.draw(&PathElement::new(mark, axis))
                .map_err(render_error)?;
            area.draw(&Text::new(
                tick.label,
                (tick.at, bottom + 2 * TICK_LEN),
                label.pos(Pos::new(HPos::Center, VPos::Top)),
            ))
            .map_err(render_error)?;
        }

        let trace = layout.trace(frame);
        area.draw(&PathElement::new(trace.clone(), self.palette.trace.stroke_width(2)))
            .map_err(render_error)?;
        let radius = self.settings.marker_radius as i32;
        for point in trace {
            area.draw(&Circle::new(point, radius, self.palette.trace.filled()))
                .map_err(render_error)?;
        }

        Ok(())
    }

    /// Renders `frame` to a standalone SVG document.
    pub fn render_svg(&self, frame: &Frame<'_>) -> Result<String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, self.size()).into_drawing_area();
            self.draw(&root, frame)?;
            root.present().map_err(render_error)?;
        }
        Ok(svg)
    }
}

fn render_error<E: std::error::Error + Send + Sync>(e: DrawingAreaErrorKind<E>) -> Error {
    Error::Render(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_has_marker_per_point() {
        let seq = [10, 20, 30];
        let svg = Renderer::default()
            .render_svg(&Frame::new(50, &seq, 2))
            .unwrap();
        assert!(svg.contains("<svg"));
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains("Start"));
    }

    #[test]
    fn test_svg_head_only() {
        let seq = [10, 20, 30];
        let svg = Renderer::default()
            .render_svg(&Frame::new(50, &seq, 0))
            .unwrap();
        assert_eq!(svg.matches("<circle").count(), 1);
    }

    #[test]
    fn test_svg_respects_size() {
        let renderer = Renderer::new(Settings::default().with_plot_size(640, 320));
        let svg = renderer.render_svg(&Frame::new(0, &[5], 1)).unwrap();
        assert!(svg.contains("width=\"640\""));
        assert!(svg.contains("height=\"320\""));
    }
}
