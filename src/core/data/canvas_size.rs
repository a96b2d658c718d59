use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CanvasSizeError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for CanvasSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "canvas size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for CanvasSizeError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CanvasSize {
    width: u32,
    height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasSizeError> {
        if width == 0 || height == 0 {
            return Err(CanvasSizeError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Every pixel of the given rows, left to right then top to bottom.
    pub fn points_in_rows(&self, rows: Range<u32>) -> impl Iterator<Item = Point> + use<> {
        let width = self.width;
        let rows = rows.start.min(self.height)..rows.end.min(self.height);

        rows.flat_map(move |y| (0..width).map(move |x| Point { x, y }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_single_pixel() {
        let size = CanvasSize::new(1, 1).unwrap();

        assert_eq!(size.width(), 1);
        assert_eq!(size.height(), 1);
        assert_eq!(size.pixel_count(), 1);
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        assert_eq!(
            CanvasSize::new(0, 10),
            Err(CanvasSizeError::InvalidSize { width: 0, height: 10 })
        );
        assert_eq!(
            CanvasSize::new(10, 0),
            Err(CanvasSizeError::InvalidSize { width: 10, height: 0 })
        );
    }

    #[test]
    fn pixel_count_does_not_overflow_u32() {
        let size = CanvasSize::new(100_000, 100_000).unwrap();

        assert_eq!(size.pixel_count(), 10_000_000_000);
    }

    #[test]
    fn contains_point_excludes_far_edges() {
        let size = CanvasSize::new(4, 3).unwrap();

        assert!(size.contains_point(Point { x: 0, y: 0 }));
        assert!(size.contains_point(Point { x: 3, y: 2 }));
        assert!(!size.contains_point(Point { x: 4, y: 0 }));
        assert!(!size.contains_point(Point { x: 0, y: 3 }));
    }

    #[test]
    fn points_in_rows_are_row_major() {
        let size = CanvasSize::new(2, 4).unwrap();
        let points: Vec<Point> = size.points_in_rows(1..3).collect();

        assert_eq!(
            points,
            vec![
                Point { x: 0, y: 1 },
                Point { x: 1, y: 1 },
                Point { x: 0, y: 2 },
                Point { x: 1, y: 2 },
            ]
        );
    }

    #[test]
    fn points_in_rows_clips_to_height() {
        let size = CanvasSize::new(3, 2).unwrap();

        assert_eq!(size.points_in_rows(1..10).count(), 3);
    }
}
