//! Geometry helpers and plain value types shared by the turtle and every canvas.
//!
//! All turtle geometry flows through [`move_degrees`], so the bounds canvas and
//! the raster canvas compute identical endpoints for the same draw call.

use crate::error::{TurtleError, TurtleResult};
use serde::{Deserialize, Serialize};

/// Advance `(x, y)` by `distance` along the heading `angle` (in degrees).
///
/// Returns the new `(x, y)`. A negative distance moves backwards.
#[inline]
pub fn move_degrees(x: f64, y: f64, angle: f64, distance: f64) -> (f64, f64) {
    let (sin, cos) = angle.to_radians().sin_cos();
    (x + cos * distance, y + sin * distance)
}

/// Fold an angle in degrees into `[0, 360)`.
///
/// Rust's `%` on floats is a truncated remainder whose sign follows the
/// dividend (`-90.0 % 360.0 == -90.0`). This uses the Euclidean remainder
/// instead, so `-90.0` normalizes to `270.0`.
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let folded = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if folded >= 360.0 {
        0.0
    } else {
        folded
    }
}

/// An axis-aligned rectangle in turtle coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extents {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Extents {
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Horizontal span.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical span.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Whether `(x, y)` lies inside the rectangle, edges included.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Check that both axes have a strictly positive, finite span.
    pub fn validate(&self) -> TurtleResult<()> {
        // Negated comparisons so NaN bounds are rejected too.
        if !(self.min_x < self.max_x) || !self.width().is_finite() {
            return Err(TurtleError::InvalidExtents {
                axis: 'x',
                min: self.min_x,
                max: self.max_x,
            });
        }
        if !(self.min_y < self.max_y) || !self.height().is_finite() {
            return Err(TurtleError::InvalidExtents {
                axis: 'y',
                min: self.min_y,
                max: self.max_y,
            });
        }
        Ok(())
    }
}

/// A backend-neutral RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanvasColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl CanvasColor {
    pub const BLACK: CanvasColor = CanvasColor::from_rgba8(0, 0, 0, 255);
    pub const WHITE: CanvasColor = CanvasColor::from_rgba8(255, 255, 255, 255);
    pub const TRANSPARENT: CanvasColor = CanvasColor::from_rgba8(0, 0, 0, 0);

    /// Create a color from 8-bit RGBA components.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit RGB components.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl Default for CanvasColor {
    fn default() -> Self {
        CanvasColor::BLACK
    }
}

impl From<CanvasColor> for tiny_skia::Color {
    fn from(c: CanvasColor) -> Self {
        tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
    }
}

impl From<CanvasColor> for tiny_skia::PremultipliedColorU8 {
    fn from(c: CanvasColor) -> Self {
        tiny_skia::ColorU8::from_rgba(c.r, c.g, c.b, c.a).premultiply()
    }
}

impl From<tiny_skia::PremultipliedColorU8> for CanvasColor {
    fn from(p: tiny_skia::PremultipliedColorU8) -> Self {
        let c = p.demultiply();
        CanvasColor::from_rgba8(c.red(), c.green(), c.blue(), c.alpha())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const EPS: f64 = 1e-9;

    #[rstest]
    #[case(0.0, 1.0, 0.0)]
    #[case(90.0, 0.0, 1.0)]
    #[case(180.0, -1.0, 0.0)]
    #[case(270.0, 0.0, -1.0)]
    #[case(-90.0, 0.0, -1.0)]
    fn test_move_degrees_unit_steps(#[case] angle: f64, #[case] ex: f64, #[case] ey: f64) {
        let (x, y) = move_degrees(0.0, 0.0, angle, 1.0);
        assert!((x - ex).abs() < EPS, "x = {x}");
        assert!((y - ey).abs() < EPS, "y = {y}");
    }

    #[test]
    fn test_move_degrees_negative_distance() {
        let (x, y) = move_degrees(2.0, 3.0, 45.0, -2.0_f64.sqrt());
        assert!((x - 1.0).abs() < EPS);
        assert!((y - 2.0).abs() < EPS);
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(360.0, 0.0)]
    #[case(450.0, 90.0)]
    #[case(-90.0, 270.0)]
    #[case(-720.0, 0.0)]
    #[case(-1e-20, 0.0)]
    fn test_normalize_degrees(#[case] input: f64, #[case] expected: f64) {
        let got = normalize_degrees(input);
        assert!((got - expected).abs() < EPS, "{input} -> {got}");
        assert!((0.0..360.0).contains(&got));
    }

    #[test]
    fn test_extents_validate() {
        assert!(Extents::new(0.0, 0.0, 1.0, 1.0).validate().is_ok());
        assert!(matches!(
            Extents::new(1.0, 0.0, 1.0, 1.0).validate(),
            Err(TurtleError::InvalidExtents { axis: 'x', .. })
        ));
        assert!(matches!(
            Extents::new(0.0, 2.0, 1.0, 1.0).validate(),
            Err(TurtleError::InvalidExtents { axis: 'y', .. })
        ));
        assert!(Extents::new(f64::NAN, 0.0, 1.0, 1.0).validate().is_err());
    }

    #[test]
    fn test_color_premultiply_round_trip_opaque() {
        let c = CanvasColor::from_rgb8(10, 200, 30);
        let p: tiny_skia::PremultipliedColorU8 = c.into();
        assert_eq!(CanvasColor::from(p), c);
    }
}
