use crate::core::actions::render_band::ports::pixel_sink::PixelSink;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;
use std::ops::Range;

const BYTES_PER_PIXEL: usize = 4;

fn canvas_size_to_buffer_size(size: CanvasSize) -> usize {
    size.width() as usize * size.height() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds { pixel: Point, size: CanvasSize },
    BoundsMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds { pixel, size } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} canvas",
                    pixel.x,
                    pixel.y,
                    size.width(),
                    size.height()
                )
            }
            Self::BoundsMismatch { expected, actual } => {
                write!(
                    f,
                    "canvas needs {} bytes but buffer holds {}",
                    expected, actual
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// In-memory RGBA surface, row-major, four bytes per pixel.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    size: CanvasSize,
    buffer: PixelBufferData,
    committed_rows: u32,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(size: CanvasSize) -> Self {
        Self {
            size,
            buffer: vec![0; canvas_size_to_buffer_size(size)],
            committed_rows: 0,
        }
    }

    pub fn from_data(size: CanvasSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let expected = canvas_size_to_buffer_size(size);

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected,
                actual: buffer.len(),
            });
        }

        Ok(Self {
            size,
            buffer,
            committed_rows: size.height(),
        })
    }

    #[must_use]
    pub fn size(&self) -> CanvasSize {
        self.size
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    /// Rows from the top that have been committed by `flush_rows`.
    #[must_use]
    pub fn committed_rows(&self) -> u32 {
        self.committed_rows
    }

    /// Bytes of the given rows, suitable for blitting to a display surface.
    #[must_use]
    pub fn rows(&self, rows: Range<u32>) -> &[u8] {
        let row_bytes = self.size.width() as usize * BYTES_PER_PIXEL;
        let start = rows.start.min(self.size.height()) as usize * row_bytes;
        let end = rows.end.min(self.size.height()) as usize * row_bytes;

        &self.buffer[start..end.max(start)]
    }

    pub fn pixel(&self, point: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(point)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
            a: self.buffer[index + 3],
        })
    }

    fn index_of(&self, point: Point) -> Result<usize, PixelBufferError> {
        if !self.size.contains_point(point) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel: point,
                size: self.size,
            });
        }

        Ok((point.y as usize * self.size.width() as usize + point.x as usize) * BYTES_PER_PIXEL)
    }
}

impl PixelSink for PixelBuffer {
    fn prepare(&mut self, size: CanvasSize) {
        if size != self.size {
            self.size = size;
            self.buffer = vec![0; canvas_size_to_buffer_size(size)];
        }
        self.committed_rows = 0;
    }

    fn set_pixel(&mut self, point: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(point)?;

        self.buffer[index..index + BYTES_PER_PIXEL].copy_from_slice(&colour.to_rgba());

        Ok(())
    }

    fn flush_rows(&mut self, rows: Range<u32>) {
        if rows.start <= self.committed_rows {
            self.committed_rows = self.committed_rows.max(rows.end.min(self.size.height()));
        }
    }
}
