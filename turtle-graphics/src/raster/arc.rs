//! Arc rasterization by angular sampling.
//!
//! Arcs are not traced exactly. Points are sampled around the circle densely
//! enough, relative to the rendered radius, that the result looks continuous.
//! The sample count is capped by the grid size, so very large radii can
//! leave gaps.

use crate::geometry::move_degrees;

/// Samples per pixel of rendered radius.
const SAMPLES_PER_RADIUS_PIXEL: usize = 7;

/// Fold a signed sweep into `[0, 360]`.
///
/// Direction and extra turns don't change which pixels an arc covers, so any
/// negative sweep becomes `360 - degrees` and anything larger than a full turn
/// is clamped to one.
pub(crate) fn sweep_degrees(degrees: f64) -> f64 {
    let degrees = if degrees < 0.0 { 360.0 - degrees } else { degrees };
    degrees.min(360.0)
}

/// Number of samples for a circle of `radius` units on a grid whose pixels
/// measure `dx` by `dy` units. Pixels need not be square, so both axes are
/// checked and the larger pixel radius wins. The pixel radius is capped at
/// `max_radius_pixels`.
pub(crate) fn sample_count(radius: f64, dx: f64, dy: f64, max_radius_pixels: u32) -> usize {
    let r = radius.abs();
    let cap = f64::from(max_radius_pixels);
    let radius_pixels = |d: f64| ((r / d).ceil() + 1.0).min(cap);
    let radius_pixels = radius_pixels(dx).max(radius_pixels(dy));
    radius_pixels as usize * SAMPLES_PER_RADIUS_PIXEL
}

/// Evenly spaced points along an arc, in turtle coordinates.
#[derive(Debug, Clone)]
pub(crate) struct ArcSamples {
    center_x: f64,
    center_y: f64,
    radius: f64,
    /// Angle of the next sample as seen from the center.
    current: f64,
    step: f64,
    remaining: usize,
}

impl ArcSamples {
    /// Sample the arc travelled by a turtle at `(x, y)` heading `angle`,
    /// circling a center `radius` units to its left.
    pub(crate) fn new(
        x: f64,
        y: f64,
        angle: f64,
        radius: f64,
        degrees: f64,
        count: usize,
    ) -> Self {
        let (center_x, center_y) = move_degrees(x, y, angle + 90.0, radius);
        let step = if count == 0 {
            0.0
        } else {
            sweep_degrees(degrees) / count as f64
        };
        Self {
            center_x,
            center_y,
            radius,
            // From the center, the turtle starts at `angle - 90`.
            current: angle - 90.0,
            step,
            remaining: count,
        }
    }
}

impl Iterator for ArcSamples {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let point = move_degrees(self.center_x, self.center_y, self.current, self.radius);
        self.current += self.step;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ArcSamples {}
