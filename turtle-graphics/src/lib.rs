//! Turtle graphics with interchangeable canvases.
//!
//! A [`Turtle`] records movement, turn, arc, and style instructions. The
//! recording can be replayed any number of times onto anything implementing
//! [`Canvas`]. Two canvases are provided:
//! - [`BoundsCanvas`] draws nothing and measures the box the path covers
//! - [`RasterCanvas`] plots the path onto a `tiny-skia` pixmap
//!
//! # Example
//!
//! ```rust
//! use turtle_graphics::{BoundsCanvas, CanvasColor, RasterCanvas, Turtle};
//!
//! # fn main() -> turtle_graphics::TurtleResult<()> {
//! let mut turtle = Turtle::new();
//! turtle.turn(90.0);
//! turtle.move_forward(1.0);
//! turtle.move_arc(0.25, 180.0);
//!
//! let mut bounds = BoundsCanvas::new();
//! turtle.render_to_canvas(&mut bounds)?;
//!
//! let mut raster = RasterCanvas::new(400, 400, bounds.extents(), CanvasColor::WHITE)?;
//! turtle.render_to_canvas(&mut raster)?;
//! let png_data = raster.to_png()?;
//! assert_eq!(&png_data[1..4], b"PNG");
//! # Ok(())
//! # }
//! ```

mod bounds;
mod canvas;
mod error;
mod geometry;
mod instruction;
mod raster;
mod render;
mod style;
mod turtle;

// Re-export public API
pub use bounds::{BoundsCanvas, EXTENTS_TOLERANCE};
pub use canvas::Canvas;
pub use error::{TurtleError, TurtleResult};
pub use geometry::{move_degrees, normalize_degrees, CanvasColor, Extents};
pub use instruction::Instruction;
pub use raster::{RasterCanvas, RasterCanvasBuilder};
pub use render::{render_turtle, render_turtle_png, RenderConfig};
pub use style::{ColorStyle, StrokeStyle};
pub use turtle::{Position, Turtle};
