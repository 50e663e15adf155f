//! A canvas that draws nothing and only measures.
//!
//! Replay a turtle onto a [`BoundsCanvas`] first to learn how large the
//! drawing is, then size a [`crate::RasterCanvas`] from [`BoundsCanvas::extents`].

use crate::canvas::Canvas;
use crate::error::TurtleResult;
use crate::geometry::{move_degrees, Extents};
use crate::style::StrokeStyle;
use std::sync::Arc;

/// Fraction of each axis span added on every side by [`BoundsCanvas::extents`].
pub const EXTENTS_TOLERANCE: f64 = 0.001;

/// Tracks the axis-aligned box touched by every draw call.
#[derive(Debug, Clone, Default)]
pub struct BoundsCanvas {
    // None until the first point, so all-negative drawings aren't pinned to 0.
    bounds: Option<Extents>,
}

impl BoundsCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if no draw call has been observed yet.
    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    /// The exact box seen so far, without tolerance.
    pub fn raw_extents(&self) -> Extents {
        self.bounds.unwrap_or_default()
    }

    /// The box seen so far, grown by [`EXTENTS_TOLERANCE`] of each axis span
    /// on every side so geometry lying on the edge is not clipped when
    /// rasterized. An empty canvas reports all zeros.
    pub fn extents(&self) -> Extents {
        let raw = self.raw_extents();
        let x_tolerance = raw.width() * EXTENTS_TOLERANCE;
        let y_tolerance = raw.height() * EXTENTS_TOLERANCE;
        Extents::new(
            raw.min_x - x_tolerance,
            raw.min_y - y_tolerance,
            raw.max_x + x_tolerance,
            raw.max_y + y_tolerance,
        )
    }

    fn include(&mut self, x: f64, y: f64) {
        match &mut self.bounds {
            None => self.bounds = Some(Extents::new(x, y, x, y)),
            Some(b) => {
                b.min_x = b.min_x.min(x);
                b.max_x = b.max_x.max(x);
                b.min_y = b.min_y.min(y);
                b.max_y = b.max_y.max(y);
            }
        }
    }
}

impl Canvas for BoundsCanvas {
    fn set_style(&mut self, _style: Arc<dyn StrokeStyle>) -> TurtleResult<()> {
        Ok(())
    }

    fn draw_line(&mut self, x: f64, y: f64, angle: f64, length: f64) -> TurtleResult<()> {
        self.include(x, y);
        let (end_x, end_y) = move_degrees(x, y, angle, length);
        self.include(end_x, end_y);
        Ok(())
    }

    /// Includes the whole circle the arc lies on rather than the arc itself.
    /// Loose, but never smaller than the true extent.
    fn draw_arc(
        &mut self,
        x: f64,
        y: f64,
        angle: f64,
        radius: f64,
        _degrees: f64,
    ) -> TurtleResult<()> {
        let (cx, cy) = move_degrees(x, y, angle + 90.0, radius);
        let r = radius.abs();
        self.include(cx, cy + r);
        self.include(cx, cy - r);
        self.include(cx + r, cy);
        self.include(cx - r, cy);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::turtle::Turtle;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_empty_canvas() {
        let canvas = BoundsCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.extents(), Extents::default());
    }

    #[test]
    fn test_negative_only_drawing() {
        let mut canvas = BoundsCanvas::new();
        canvas.draw_line(-5.0, -5.0, 180.0, 3.0).unwrap();
        let raw = canvas.raw_extents();
        assert!((raw.min_x + 8.0).abs() < EPS);
        assert!((raw.max_x + 5.0).abs() < EPS);
        assert!((raw.min_y + 5.0).abs() < EPS);
        assert!((raw.max_y + 5.0).abs() < EPS);
    }

    #[test]
    fn test_turn_and_forward_extents() {
        let mut t = Turtle::new();
        t.turn(90.0);
        t.move_forward(1.0);
        let mut canvas = BoundsCanvas::new();
        t.render_to_canvas(&mut canvas).unwrap();

        let raw = canvas.raw_extents();
        assert!(raw.min_y <= 0.0);
        assert!((raw.max_y - 1.0).abs() < EPS);

        let ext = canvas.extents();
        assert!((ext.min_y + 0.001).abs() < EPS);
        assert!((ext.max_y - 1.001).abs() < EPS);
    }

    #[test]
    fn test_tolerance_is_proportional_per_axis() {
        let mut canvas = BoundsCanvas::new();
        canvas.draw_line(0.0, 0.0, 0.0, 1000.0).unwrap();
        canvas.draw_line(0.0, 0.0, 90.0, 10.0).unwrap();
        let ext = canvas.extents();
        assert!((ext.min_x + 1.0).abs() < EPS);
        assert!((ext.max_x - 1001.0).abs() < EPS);
        assert!((ext.min_y + 0.01).abs() < EPS);
        assert!((ext.max_y - 10.01).abs() < EPS);
    }

    #[test]
    fn test_arc_includes_full_circle() {
        let mut canvas = BoundsCanvas::new();
        // Center lands at (0, 2) for a turtle at the origin facing east.
        canvas.draw_arc(0.0, 0.0, 0.0, 2.0, 10.0).unwrap();
        let raw = canvas.raw_extents();
        assert!((raw.min_x + 2.0).abs() < EPS);
        assert!((raw.max_x - 2.0).abs() < EPS);
        assert!(raw.min_y.abs() < EPS);
        assert!((raw.max_y - 4.0).abs() < EPS);
    }

    #[test]
    fn test_arc_with_negative_radius() {
        let mut canvas = BoundsCanvas::new();
        canvas.draw_arc(0.0, 0.0, 0.0, -1.0, 90.0).unwrap();
        let raw = canvas.raw_extents();
        assert!((raw.min_y + 2.0).abs() < EPS);
        assert!(raw.max_y.abs() < EPS);
        assert!((raw.min_x + 1.0).abs() < EPS);
        assert!((raw.max_x - 1.0).abs() < EPS);
    }
}
