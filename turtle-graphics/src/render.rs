//! Measure-then-rasterize pipeline.
//!
//! A turtle is replayed once onto a [`BoundsCanvas`] to find how large the
//! drawing is, and again onto a [`RasterCanvas`] sized to match.

use crate::bounds::BoundsCanvas;
use crate::error::TurtleResult;
use crate::geometry::{CanvasColor, Extents};
use crate::raster::{RasterCanvas, MAX_DIMENSION};
use crate::style::ColorStyle;
use crate::turtle::Turtle;
use serde::{Deserialize, Serialize};

/// Settings for [`render_turtle`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Height of the output in pixels. Width follows the drawing's aspect ratio.
    /// Both shrink together if either would exceed the raster size limit.
    pub height: u32,
    pub background: CanvasColor,
    /// Stroke color until the turtle sets its own style.
    pub stroke: CanvasColor,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            height: 1000,
            background: CanvasColor::WHITE,
            stroke: CanvasColor::BLACK,
        }
    }
}

impl RenderConfig {
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn with_background(mut self, background: CanvasColor) -> Self {
        self.background = background;
        self
    }

    pub fn with_stroke(mut self, stroke: CanvasColor) -> Self {
        self.stroke = stroke;
        self
    }
}

/// Replay `turtle` onto a raster canvas sized to fit everything it draws.
pub fn render_turtle(turtle: &mut Turtle, config: &RenderConfig) -> TurtleResult<RasterCanvas> {
    let mut bounds = BoundsCanvas::new();
    turtle.render_to_canvas(&mut bounds)?;
    let extents = pad_flat_extents(bounds.extents());

    let aspect_ratio = extents.width() / extents.height();
    let (width, height) = fit_dimensions(config.height, aspect_ratio);
    log::debug!(
        target: "turtle",
        "rendering {} instructions at {}x{}",
        turtle.len(),
        width,
        height
    );

    let mut canvas = RasterCanvas::builder(width, height, extents)
        .with_background(config.background)
        .with_style(ColorStyle::shared(config.stroke))
        .build()?;
    turtle.render_to_canvas(&mut canvas)?;

    if canvas.clipped_pixels() > 0 {
        log::warn!(
            target: "turtle",
            "{} pixels fell outside the measured extents",
            canvas.clipped_pixels()
        );
    }
    Ok(canvas)
}

/// Render `turtle` and encode the result as PNG.
pub fn render_turtle_png(turtle: &mut Turtle, config: &RenderConfig) -> TurtleResult<Vec<u8>> {
    render_turtle(turtle, config)?.to_png()
}

/// Pixel size for a drawing `height` pixels tall with the given aspect ratio,
/// scaled down uniformly when either side would exceed [`MAX_DIMENSION`].
fn fit_dimensions(height: u32, aspect_ratio: f64) -> (u32, u32) {
    let exact_width = f64::from(height) * aspect_ratio;
    let longest = exact_width.max(f64::from(height));
    let limit = f64::from(MAX_DIMENSION);
    if longest <= limit {
        return ((exact_width as u32).max(1), height);
    }
    let scale = limit / longest;
    log::debug!(target: "turtle", "scaling raster by {} to fit {}px", scale, MAX_DIMENSION);
    if exact_width >= f64::from(height) {
        let height = ((f64::from(height) * scale) as u32).max(1);
        (MAX_DIMENSION, height)
    } else {
        let width = ((exact_width * scale) as u32).clamp(1, MAX_DIMENSION);
        (width, MAX_DIMENSION)
    }
}

/// Relative span below which an axis counts as flat. Absorbs the residue of
/// `cos(90)` and similar, which leaves "vertical" lines a hair wide.
const FLAT_AXIS_RATIO: f64 = 1e-9;

/// Give flat axes some room so purely horizontal or vertical drawings,
/// single points, and empty turtles still produce a usable raster.
///
/// A flat axis is padded by half the other axis' span on each side, which
/// centers the drawing in a square image. With both axes flat, each gets
/// half a unit on either side.
fn pad_flat_extents(extents: Extents) -> Extents {
    let (w, h) = (extents.width(), extents.height());
    let (pad_x, pad_y) = match (w <= h * FLAT_AXIS_RATIO, h <= w * FLAT_AXIS_RATIO) {
        (false, false) => return extents,
        (false, true) => (0.0, w / 2.0),
        (true, false) => (h / 2.0, 0.0),
        (true, true) => (0.5, 0.5),
    };
    Extents::new(
        extents.min_x - pad_x,
        extents.min_y - pad_y,
        extents.max_x + pad_x,
        extents.max_y + pad_y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TurtleError;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.height, 1000);
        assert_eq!(config.background, CanvasColor::WHITE);
        assert_eq!(config.stroke, CanvasColor::BLACK);
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: RenderConfig = serde_json::from_str(r#"{"height": 64}"#).unwrap();
        assert_eq!(config, RenderConfig::default().with_height(64));
    }

    #[test]
    fn test_pad_flat_extents() {
        let square = Extents::new(0.0, 0.0, 2.0, 1.0);
        assert_eq!(pad_flat_extents(square), square);
        assert_eq!(
            pad_flat_extents(Extents::new(0.0, 3.0, 4.0, 3.0)),
            Extents::new(0.0, 1.0, 4.0, 5.0)
        );
        assert_eq!(
            pad_flat_extents(Extents::new(1.0, 0.0, 1.0, 2.0)),
            Extents::new(0.0, 0.0, 2.0, 2.0)
        );
        assert_eq!(
            pad_flat_extents(Extents::default()),
            Extents::new(-0.5, -0.5, 0.5, 0.5)
        );
    }

    #[test]
    fn test_width_follows_aspect_ratio() {
        let mut t = Turtle::new();
        t.move_forward(2.0);
        t.turn(90.0);
        t.move_forward(1.0);
        let canvas = render_turtle(&mut t, &RenderConfig::default().with_height(100)).unwrap();
        assert_eq!(canvas.height(), 100);
        // Truncation may shave off one pixel.
        assert!((199..=200).contains(&canvas.width()), "{}", canvas.width());
        assert_eq!(canvas.clipped_pixels(), 0);
    }

    #[test]
    fn test_fit_dimensions() {
        assert_eq!(fit_dimensions(100, 2.0), (200, 100));
        assert_eq!(fit_dimensions(1000, 100.0), (MAX_DIMENSION, 327));
        assert_eq!(fit_dimensions(40000, 0.5), (16383, MAX_DIMENSION));
        // Extreme aspect ratios keep at least one pixel per side.
        assert_eq!(fit_dimensions(1000, 1e12), (MAX_DIMENSION, 1));
        assert_eq!(fit_dimensions(0, 1.0).1, 0);
    }

    #[test]
    fn test_wide_drawing_is_scaled_to_fit() {
        let mut t = Turtle::new();
        t.move_forward(100.0);
        t.turn(90.0);
        t.move_forward(1.0);
        let canvas = render_turtle(&mut t, &RenderConfig::default()).unwrap();
        assert_eq!(canvas.width(), MAX_DIMENSION);
        assert!((326..=328).contains(&canvas.height()), "{}", canvas.height());
        assert_eq!(canvas.clipped_pixels(), 0);
    }

    #[test]
    fn test_horizontal_line_renders() {
        let mut t = Turtle::new();
        t.move_forward(5.0);
        let canvas = render_turtle(&mut t, &RenderConfig::default().with_height(50)).unwrap();
        assert!((49..=50).contains(&canvas.width()), "{}", canvas.width());
        assert_eq!(canvas.clipped_pixels(), 0);
    }

    #[test]
    fn test_vertical_line_gets_square_image() {
        let mut t = Turtle::new();
        t.turn(90.0);
        t.move_forward(3.0);
        let canvas = render_turtle(&mut t, &RenderConfig::default().with_height(40)).unwrap();
        assert!((39..=40).contains(&canvas.width()), "{}", canvas.width());
        assert_eq!(canvas.clipped_pixels(), 0);
    }

    #[test]
    fn test_empty_turtle_renders_blank() {
        let mut t = Turtle::new();
        let canvas = render_turtle(&mut t, &RenderConfig::default().with_height(8)).unwrap();
        assert_eq!(canvas.width(), 8);
        assert!(canvas.image_data().iter().all(|&b| b == 255));
    }

    #[test]
    fn test_replay_error_surfaces() {
        let mut t = Turtle::new();
        t.move_forward(1.0);
        t.pop_position();
        let err = render_turtle(&mut t, &RenderConfig::default()).unwrap_err();
        assert!(matches!(err.root_cause(), TurtleError::StackUnderflow));
    }
}
