use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::render_band::ports::pixel_sink::PixelSink;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::data::render_job::RenderJob;
use std::error::Error;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderBandError {
    /// The token flipped before the band finished; nothing further was written.
    Cancelled(Cancelled),
    Sink(PixelBufferError),
}

impl fmt::Display for RenderBandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::Sink(err) => write!(f, "pixel sink error: {}", err),
        }
    }
}

impl Error for RenderBandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::Sink(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for RenderBandError {
    fn from(err: PixelBufferError) -> Self {
        Self::Sink(err)
    }
}

impl From<Cancelled> for RenderBandError {
    fn from(c: Cancelled) -> Self {
        Self::Cancelled(c)
    }
}

/// Colours every pixel of `rows`, top to bottom, then flushes them.
///
/// The token is checked before each pixel is written, so once it reports
/// cancellation the sink receives no further writes and the band is not
/// flushed. Returns the number of pixels written.
pub fn render_band<S, C>(
    job: &RenderJob,
    rows: Range<u32>,
    sink: &mut S,
    cancel: &C,
) -> Result<u64, RenderBandError>
where
    S: PixelSink + ?Sized,
    C: CancelToken + ?Sized,
{
    let mut written = 0;

    for point in job.viewport.size.points_in_rows(rows.clone()) {
        let colour = job.colour_at(point);

        if cancel.is_cancelled() {
            return Err(Cancelled.into());
        }

        sink.set_pixel(point, colour)?;
        written += 1;
    }

    sink.flush_rows(rows);

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::actions::render_band::ports::escape_time_formula::IterationParams;
    use crate::core::colour_mapping::factory::colour_map_factory;
    use crate::core::colour_mapping::kinds::ColourMapKind;
    use crate::core::data::canvas_size::CanvasSize;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use crate::core::data::point::Point;
    use crate::core::data::viewport::Viewport;
    use crate::core::fractals::kinds::FormulaKind;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct RecordingSink {
        writes: Vec<Point>,
        flushed: Vec<Range<u32>>,
    }

    impl PixelSink for RecordingSink {
        fn prepare(&mut self, _size: CanvasSize) {}

        fn set_pixel(&mut self, point: Point, _colour: Colour) -> Result<(), PixelBufferError> {
            self.writes.push(point);
            Ok(())
        }

        fn flush_rows(&mut self, rows: Range<u32>) {
            self.flushed.push(rows);
        }
    }

    fn job(width: u32, height: u32) -> RenderJob {
        let size = CanvasSize::new(width, height).unwrap();

        RenderJob {
            viewport: Viewport::new(Complex::ZERO, Viewport::default_scale(size), size),
            formula: Arc::new(FormulaKind::Quadratic),
            colour_map: Arc::new(colour_map_factory(ColourMapKind::Rgb)),
            params: IterationParams {
                julia: false,
                max_iterations: 50,
                escape_radius: 2.0,
                smooth: false,
            },
            julia_constant: Complex::ZERO,
        }
    }

    #[test]
    fn writes_band_rows_in_row_major_order() {
        let mut sink = RecordingSink::default();

        let written = render_band(&job(3, 5), 1..3, &mut sink, &NeverCancel).unwrap();

        assert_eq!(written, 6);
        assert_eq!(
            sink.writes,
            vec![
                Point { x: 0, y: 1 },
                Point { x: 1, y: 1 },
                Point { x: 2, y: 1 },
                Point { x: 0, y: 2 },
                Point { x: 1, y: 2 },
                Point { x: 2, y: 2 },
            ]
        );
        assert_eq!(sink.flushed, vec![1..3]);
    }

    #[test]
    fn band_is_clipped_to_canvas_height() {
        let mut sink = RecordingSink::default();

        let written = render_band(&job(2, 4), 3..10, &mut sink, &NeverCancel).unwrap();

        assert_eq!(written, 2);
    }

    #[test]
    fn cancellation_stops_writes_immediately() {
        let mut sink = RecordingSink::default();
        let checks = AtomicUsize::new(0);
        // allow five pixels, then cancel
        let cancel = || checks.fetch_add(1, Ordering::Relaxed) >= 5;

        let result = render_band(&job(4, 4), 0..4, &mut sink, &cancel);

        assert_eq!(result, Err(RenderBandError::Cancelled(Cancelled)));
        assert_eq!(sink.writes.len(), 5);
        assert!(sink.flushed.is_empty());
    }

    #[test]
    fn already_cancelled_band_writes_nothing() {
        let mut sink = RecordingSink::default();

        let result = render_band(&job(4, 4), 0..4, &mut sink, &|| true);

        assert!(matches!(result, Err(RenderBandError::Cancelled(_))));
        assert!(sink.writes.is_empty());
    }

    #[test]
    fn sink_errors_are_propagated() {
        let mut buffer = PixelBuffer::new(CanvasSize::new(2, 2).unwrap());

        let result = render_band(&job(3, 3), 0..1, &mut buffer, &NeverCancel);

        assert!(matches!(
            result,
            Err(RenderBandError::Sink(PixelBufferError::PixelOutsideBounds { .. }))
        ));
    }

    #[test]
    fn pixel_buffer_matches_per_pixel_colours() {
        let job = job(6, 6);
        let mut buffer = PixelBuffer::new(job.viewport.size);

        render_band(&job, 0..6, &mut buffer, &NeverCancel).unwrap();

        for point in job.viewport.size.points_in_rows(0..6) {
            assert_eq!(buffer.pixel(point).unwrap(), job.colour_at(point));
        }
        assert_eq!(buffer.committed_rows(), 6);
    }

    #[test]
    fn token_is_polled_once_per_pixel() {
        let polls = AtomicUsize::new(0);
        let cancel = || {
            polls.fetch_add(1, Ordering::Relaxed);
            false
        };

        render_band(&job(3, 2), 0..2, &mut RecordingSink::default(), &cancel).unwrap();

        assert_eq!(polls.load(Ordering::Relaxed), 6);
    }
}
