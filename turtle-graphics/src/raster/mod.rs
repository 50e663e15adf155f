//! A canvas that rasterizes turtle paths onto a fixed pixel grid.

mod arc;
mod line;

use crate::canvas::Canvas;
use crate::error::{TurtleError, TurtleResult};
use crate::geometry::{move_degrees, CanvasColor, Extents};
use crate::style::{ColorStyle, StrokeStyle};
use arc::{sample_count, ArcSamples};
use line::{bresenham, ClipRect};
use std::sync::Arc;
use tiny_skia::{Pixmap, PremultipliedColorU8};

/// Maximum raster dimension (same as Chrome's canvas limit).
pub(crate) const MAX_DIMENSION: u32 = 32767;

/// Builder for RasterCanvas.
#[derive(Debug, Clone)]
pub struct RasterCanvasBuilder {
    width: u32,
    height: u32,
    extents: Extents,
    background: CanvasColor,
    style: Arc<dyn StrokeStyle>,
}

impl RasterCanvasBuilder {
    /// Create a builder for a `width` x `height` grid covering `extents`.
    pub fn new(width: u32, height: u32, extents: Extents) -> Self {
        Self {
            width,
            height,
            extents,
            background: CanvasColor::TRANSPARENT,
            style: ColorStyle::shared(CanvasColor::BLACK),
        }
    }

    /// Fill the grid with this color before drawing.
    pub fn with_background(mut self, background: CanvasColor) -> Self {
        self.background = background;
        self
    }

    /// Style used until the first `SetStyle` instruction.
    pub fn with_style(mut self, style: Arc<dyn StrokeStyle>) -> Self {
        self.style = style;
        self
    }

    /// Build the RasterCanvas.
    pub fn build(self) -> TurtleResult<RasterCanvas> {
        RasterCanvas::new_internal(self)
    }
}

/// A pixel grid covering a rectangle of turtle space.
///
/// Row 0 is the top of the image: increasing Y in turtle space moves up.
/// Pixels that land outside the grid are dropped and counted, not reported
/// as errors.
#[derive(Debug)]
pub struct RasterCanvas {
    width: u32,
    height: u32,
    pixmap: Pixmap,
    extents: Extents,
    /// Turtle units per pixel along X.
    dx: f64,
    /// Turtle units per pixel along Y.
    dy: f64,
    style: Arc<dyn StrokeStyle>,
    /// Premultiplied form of the current style's color.
    paint: PremultipliedColorU8,
    clipped: u64,
}

impl RasterCanvas {
    /// Create a `width` x `height` canvas covering `extents`, filled with `background`.
    pub fn new(
        width: u32,
        height: u32,
        extents: Extents,
        background: CanvasColor,
    ) -> TurtleResult<Self> {
        Self::builder(width, height, extents)
            .with_background(background)
            .build()
    }

    /// Create a new builder for more configuration options.
    pub fn builder(width: u32, height: u32, extents: Extents) -> RasterCanvasBuilder {
        RasterCanvasBuilder::new(width, height, extents)
    }

    fn new_internal(builder: RasterCanvasBuilder) -> TurtleResult<Self> {
        let RasterCanvasBuilder {
            width,
            height,
            extents,
            background,
            style,
        } = builder;

        // Validate dimensions
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(TurtleError::InvalidDimensions { width, height });
        }
        extents.validate()?;

        let mut pixmap =
            Pixmap::new(width, height).ok_or(TurtleError::InvalidDimensions { width, height })?;
        pixmap.fill(background.into());

        log::debug!(
            target: "raster",
            "new {}x{} canvas over ({}, {})..({}, {})",
            width, height, extents.min_x, extents.min_y, extents.max_x, extents.max_y
        );

        let paint = style.color().into();
        Ok(Self {
            width,
            height,
            pixmap,
            extents,
            dx: extents.width() / f64::from(width),
            dy: extents.height() / f64::from(height),
            style,
            paint,
            clipped: 0,
        })
    }

    /// Get canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The rectangle of turtle space this canvas covers.
    pub fn extents(&self) -> Extents {
        self.extents
    }

    /// Turtle units per pixel, as `(dx, dy)`.
    pub fn scale(&self) -> (f64, f64) {
        (self.dx, self.dy)
    }

    /// The style strokes are currently drawn with.
    pub fn style(&self) -> &Arc<dyn StrokeStyle> {
        &self.style
    }

    /// Number of pixel writes dropped because they fell outside the grid.
    pub fn clipped_pixels(&self) -> u64 {
        self.clipped
    }

    /// Map a point in turtle space to `(column, row)`.
    ///
    /// Fractions are truncated toward zero. The result may lie outside the
    /// grid, including negative indices.
    pub fn point_to_pixel(&self, x: f64, y: f64) -> (i64, i64) {
        let col = ((x - self.extents.min_x) / self.dx) as i64;
        let rows_up = ((y - self.extents.min_y) / self.dy) as i64;
        (col, (i64::from(self.height) - 1).saturating_sub(rows_up))
    }

    /// Color of the pixel at `(col, row)`, or None outside the grid.
    pub fn pixel(&self, col: u32, row: u32) -> Option<CanvasColor> {
        self.pixmap.pixel(col, row).map(CanvasColor::from)
    }

    /// Get a reference to the underlying pixmap (premultiplied RGBA).
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Non-premultiplied RGBA bytes, row-major from the top-left.
    pub fn image_data(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.pixmap.data().len());
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        data
    }

    /// Export the canvas as PNG data.
    pub fn to_png(&self) -> TurtleResult<Vec<u8>> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.image_data())?;
        }
        Ok(buf)
    }

    fn clip_rect(&self) -> ClipRect {
        ClipRect {
            min_col: 0,
            min_row: 0,
            max_col: i64::from(self.width) - 1,
            max_row: i64::from(self.height) - 1,
        }
    }

    fn plot(&mut self, col: i64, row: i64) {
        if col < 0 || row < 0 || col >= i64::from(self.width) || row >= i64::from(self.height) {
            self.clipped = self.clipped.saturating_add(1);
            log::trace!(target: "raster", "clipped pixel ({}, {})", col, row);
            return;
        }
        let idx = row as usize * self.width as usize + col as usize;
        self.pixmap.pixels_mut()[idx] = self.paint;
    }
}

impl Canvas for RasterCanvas {
    fn set_style(&mut self, style: Arc<dyn StrokeStyle>) -> TurtleResult<()> {
        self.paint = style.color().into();
        self.style = style;
        Ok(())
    }

    fn draw_line(&mut self, x: f64, y: f64, angle: f64, length: f64) -> TurtleResult<()> {
        let (x0, y0) = self.point_to_pixel(x, y);
        let (end_x, end_y) = move_degrees(x, y, angle, length);
        let (x1, y1) = self.point_to_pixel(end_x, end_y);
        let clip = self.clip_rect();
        let outside = bresenham(x0, y0, x1, y1, clip, |col, row| self.plot(col, row));
        if outside > 0 {
            self.clipped = self.clipped.saturating_add(outside);
            log::trace!(target: "raster", "line clipped {} pixels", outside);
        }
        Ok(())
    }

    fn draw_arc(
        &mut self,
        x: f64,
        y: f64,
        angle: f64,
        radius: f64,
        degrees: f64,
    ) -> TurtleResult<()> {
        let count = sample_count(radius, self.dx, self.dy, 2 * (self.width + self.height));
        log::trace!(target: "raster", "arc radius {} sweep {} with {} samples", radius, degrees, count);
        for (px, py) in ArcSamples::new(x, y, angle, radius, degrees, count) {
            let (col, row) = self.point_to_pixel(px, py);
            self.plot(col, row);
        }
        Ok(())
    }
}
