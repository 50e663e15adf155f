//! Stroke styles handed from instructions to canvases.

use crate::geometry::CanvasColor;
use std::fmt::Debug;
use std::sync::Arc;

/// The minimal style contract every canvas understands.
///
/// Backends with richer drawing models may accept styles that carry more than
/// a color, but all of them can fall back on [`StrokeStyle::color`].
pub trait StrokeStyle: Debug + Send + Sync {
    /// Color of the stroke.
    fn color(&self) -> CanvasColor;
}

/// A style that only specifies a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorStyle {
    pub color: CanvasColor,
}

impl ColorStyle {
    pub const fn new(color: CanvasColor) -> Self {
        Self { color }
    }

    /// Wrap a color into the shared handle that `Turtle::set_style` accepts.
    pub fn shared(color: CanvasColor) -> Arc<dyn StrokeStyle> {
        Arc::new(Self::new(color))
    }
}

impl StrokeStyle for ColorStyle {
    fn color(&self) -> CanvasColor {
        self.color
    }
}

impl StrokeStyle for CanvasColor {
    fn color(&self) -> CanvasColor {
        *self
    }
}
