use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;

/// Maps canvas pixels onto the complex plane.
///
/// `scale` is the width of one pixel in complex units; the zoom factor is its
/// reciprocal. Pixel centres are sampled, hence the half-pixel offsets, and
/// the imaginary axis is flipped because canvas rows grow downwards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub centre: Complex,
    pub scale: f64,
    pub size: CanvasSize,
}

impl Viewport {
    /// Scale at which the shorter canvas side spans five complex units.
    #[must_use]
    pub fn default_scale(size: CanvasSize) -> f64 {
        5.0 / f64::from(size.width().min(size.height()))
    }

    #[must_use]
    pub fn new(centre: Complex, scale: f64, size: CanvasSize) -> Self {
        Self {
            centre,
            scale,
            size,
        }
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        1.0 / self.scale
    }

    #[must_use]
    pub fn pixel_column_to_real(&self, column: f64) -> f64 {
        (column + 0.5 - f64::from(self.size.width()) / 2.0) * self.scale + self.centre.real
    }

    #[must_use]
    pub fn pixel_row_to_imag(&self, row: f64) -> f64 {
        -(row + 0.5 - f64::from(self.size.height()) / 2.0) * self.scale + self.centre.imag
    }

    #[must_use]
    pub fn real_to_pixel_column(&self, real: f64) -> f64 {
        (real - self.centre.real) / self.scale + f64::from(self.size.width()) / 2.0 - 0.5
    }

    #[must_use]
    pub fn imag_to_pixel_row(&self, imag: f64) -> f64 {
        -(imag - self.centre.imag) / self.scale + f64::from(self.size.height()) / 2.0 - 0.5
    }

    #[must_use]
    pub fn pixel_to_complex(&self, point: Point) -> Complex {
        Complex {
            real: self.pixel_column_to_real(f64::from(point.x)),
            imag: self.pixel_row_to_imag(f64::from(point.y)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(centre: Complex, scale: f64, width: u32, height: u32) -> Viewport {
        Viewport::new(centre, scale, CanvasSize::new(width, height).unwrap())
    }

    #[test]
    fn default_scale_fits_five_units_on_short_side() {
        let size = CanvasSize::new(800, 500).unwrap();

        assert_eq!(Viewport::default_scale(size), 0.01);
    }

    #[test]
    fn pixel_centres_straddle_view_centre() {
        let view = viewport(Complex::ZERO, 1.0, 4, 4);

        let reals: Vec<f64> = (0..4).map(|c| view.pixel_column_to_real(c as f64)).collect();
        let imags: Vec<f64> = (0..4).map(|r| view.pixel_row_to_imag(r as f64)).collect();

        assert_eq!(reals, vec![-1.5, -0.5, 0.5, 1.5]);
        assert_eq!(imags, vec![1.5, 0.5, -0.5, -1.5]);
    }

    #[test]
    fn centre_offset_shifts_plane_coordinates() {
        let view = viewport(Complex::new(-0.5, 0.25), 0.5, 2, 2);

        assert_eq!(
            view.pixel_to_complex(Point { x: 0, y: 0 }),
            Complex::new(-0.75, 0.5)
        );
    }

    #[test]
    fn column_and_row_round_trip() {
        let view = viewport(Complex::new(-0.743, 0.131), 3.7e-5, 640, 480);

        for real in [-0.75, -0.743, -0.7301] {
            let back = view.pixel_column_to_real(view.real_to_pixel_column(real));
            assert!((back - real).abs() < 1e-12, "{} != {}", back, real);
        }

        for imag in [0.12, 0.131, 0.14] {
            let back = view.pixel_row_to_imag(view.imag_to_pixel_row(imag));
            assert!((back - imag).abs() < 1e-12, "{} != {}", back, imag);
        }
    }

    #[test]
    fn zoom_is_reciprocal_of_scale() {
        let view = viewport(Complex::ZERO, 0.25, 10, 10);

        assert_eq!(view.zoom(), 4.0);
    }
}
