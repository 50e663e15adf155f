//! The drawing contract shared by every turtle backend.

use crate::error::TurtleResult;
use crate::style::StrokeStyle;
use std::sync::Arc;

/// A target the turtle can draw on.
///
/// Coordinates are in turtle space, never pixel space. For both draw calls,
/// `(x, y, angle)` is the turtle's pose *before* the move; the backend derives
/// the end point itself with [`crate::geometry::move_degrees`].
pub trait Canvas {
    /// Set the style used for subsequent strokes.
    fn set_style(&mut self, style: Arc<dyn StrokeStyle>) -> TurtleResult<()>;

    /// Draw a straight segment of `length` units along `angle` (degrees) from `(x, y)`.
    fn draw_line(&mut self, x: f64, y: f64, angle: f64, length: f64) -> TurtleResult<()>;

    /// Draw an arc travelled by a turtle at `(x, y)` heading `angle`.
    ///
    /// The circle's center lies `radius` units to the turtle's left (a negative
    /// radius puts it to the right), and the turtle moves `degrees` around it.
    fn draw_arc(
        &mut self,
        x: f64,
        y: f64,
        angle: f64,
        radius: f64,
        degrees: f64,
    ) -> TurtleResult<()>;
}
