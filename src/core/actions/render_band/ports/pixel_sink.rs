use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::data::point::Point;
use std::ops::Range;

/// Drawing surface a render writes into.
pub trait PixelSink {
    /// Called once at the start of every session.
    fn prepare(&mut self, size: CanvasSize);

    fn set_pixel(&mut self, point: Point, colour: Colour) -> Result<(), PixelBufferError>;

    /// Commits a finished range of rows to whatever displays them.
    fn flush_rows(&mut self, rows: Range<u32>);
}
