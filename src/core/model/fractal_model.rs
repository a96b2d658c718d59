use crate::core::actions::render_band::ports::escape_time_formula::{
    EscapeTimeFormula, IterationParams,
};
use crate::core::colour_mapping::map::ColourMap;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::render_job::RenderJob;
use crate::core::data::viewport::Viewport;
use crate::core::model::catalogue::Catalogue;
use crate::core::model::errors::ConfigurationError;
use std::sync::Arc;

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_ESCAPE_RADIUS: f64 = 2.0;
pub const DEFAULT_JULIA_CONSTANT: Complex = Complex::new(-0.7, 0.27);

/// View state and parameters for the next render.
///
/// Setters only assign; nothing is rendered until the caller asks for a
/// [`RenderJob`] and hands it to a renderer.
#[derive(Debug, Clone)]
pub struct FractalModel {
    catalogue: Arc<Catalogue>,
    viewport: Viewport,
    max_iterations: u32,
    escape_radius: f64,
    julia: bool,
    julia_constant: Complex,
    normalised: bool,
    formula: Arc<dyn EscapeTimeFormula>,
    colour_map: Arc<ColourMap>,
}

impl FractalModel {
    #[must_use]
    pub fn new(catalogue: Arc<Catalogue>, size: CanvasSize) -> Self {
        let formula = Arc::clone(catalogue.default_formula());
        let colour_map = Arc::clone(catalogue.default_colour_map());

        Self {
            catalogue,
            viewport: Viewport::new(Complex::ZERO, Viewport::default_scale(size), size),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
            julia: false,
            julia_constant: DEFAULT_JULIA_CONSTANT,
            normalised: false,
            formula,
            colour_map,
        }
    }

    #[must_use]
    pub fn catalogue(&self) -> &Arc<Catalogue> {
        &self.catalogue
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn centre(&self) -> Complex {
        self.viewport.centre
    }

    /// Complex units per pixel.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.viewport.scale
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.viewport.zoom()
    }

    #[must_use]
    pub fn canvas_size(&self) -> CanvasSize {
        self.viewport.size
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_radius(&self) -> f64 {
        self.escape_radius
    }

    #[must_use]
    pub fn is_julia(&self) -> bool {
        self.julia
    }

    #[must_use]
    pub fn julia_constant(&self) -> Complex {
        self.julia_constant
    }

    #[must_use]
    pub fn is_normalised(&self) -> bool {
        self.normalised
    }

    #[must_use]
    pub fn formula(&self) -> &Arc<dyn EscapeTimeFormula> {
        &self.formula
    }

    #[must_use]
    pub fn colour_map(&self) -> &Arc<ColourMap> {
        &self.colour_map
    }

    pub fn set_centre(&mut self, centre: Complex) -> &mut Self {
        self.viewport.centre = centre;
        self
    }

    pub fn set_scale(&mut self, scale: f64) -> &mut Self {
        self.viewport.scale = scale;
        self
    }

    pub fn set_zoom(&mut self, zoom: f64) -> &mut Self {
        self.viewport.scale = 1.0 / zoom;
        self
    }

    /// Multiplies the zoom factor, so `factor > 1` magnifies.
    pub fn zoom_by(&mut self, factor: f64) -> &mut Self {
        self.viewport.scale /= factor;
        self
    }

    pub fn zoom_in_by(&mut self, factor: f64) -> &mut Self {
        self.zoom_by(factor)
    }

    pub fn zoom_out_by(&mut self, factor: f64) -> &mut Self {
        self.zoom_by(1.0 / factor)
    }

    pub fn set_canvas_size(&mut self, size: CanvasSize) -> &mut Self {
        self.viewport.size = size;
        self
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> &mut Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn set_escape_radius(&mut self, escape_radius: f64) -> &mut Self {
        self.escape_radius = escape_radius;
        self
    }

    pub fn set_julia(&mut self, julia: bool) -> &mut Self {
        self.julia = julia;
        self
    }

    pub fn toggle_julia(&mut self) -> &mut Self {
        self.julia = !self.julia;
        self
    }

    pub fn set_julia_constant(&mut self, constant: Complex) -> &mut Self {
        self.julia_constant = constant;
        self
    }

    /// Takes the current view centre as the Julia constant.
    pub fn use_centre_as_julia_constant(&mut self) -> &mut Self {
        self.julia_constant = self.viewport.centre;
        self
    }

    pub fn set_normalised(&mut self, normalised: bool) -> &mut Self {
        self.normalised = normalised;
        self
    }

    /// Selects a catalogue formula by name, ignoring case. On error the
    /// model is unchanged.
    pub fn select_formula(&mut self, name: &str) -> Result<&mut Self, ConfigurationError> {
        match self.catalogue.formula(name) {
            Ok(formula) => {
                self.formula = Arc::clone(formula);
                Ok(self)
            }
            Err(err) => {
                log::warn!("formula selection rejected: {}", err);
                Err(err)
            }
        }
    }

    /// Selects a catalogue colour map by name, ignoring case. On error the
    /// model is unchanged.
    pub fn select_colour_map(&mut self, name: &str) -> Result<&mut Self, ConfigurationError> {
        match self.catalogue.colour_map(name) {
            Ok(colour_map) => {
                self.colour_map = Arc::clone(colour_map);
                Ok(self)
            }
            Err(err) => {
                log::warn!("colour map selection rejected: {}", err);
                Err(err)
            }
        }
    }

    /// Display form of the active recurrence, e.g. `zₙ₊₁ = zₙ² + z₀`.
    #[must_use]
    pub fn equation(&self) -> String {
        let suffix = match (self.formula.adds_constant(), self.julia) {
            (false, _) => "",
            (true, true) => " + c",
            (true, false) => " + z₀",
        };

        format!("zₙ₊₁ = {}{}", self.formula.equation(), suffix)
    }

    #[must_use]
    pub fn pixel_column_to_real(&self, column: f64) -> f64 {
        self.viewport.pixel_column_to_real(column)
    }

    #[must_use]
    pub fn pixel_row_to_imag(&self, row: f64) -> f64 {
        self.viewport.pixel_row_to_imag(row)
    }

    #[must_use]
    pub fn real_to_pixel_column(&self, real: f64) -> f64 {
        self.viewport.real_to_pixel_column(real)
    }

    #[must_use]
    pub fn imag_to_pixel_row(&self, imag: f64) -> f64 {
        self.viewport.imag_to_pixel_row(imag)
    }

    #[must_use]
    pub fn pixel_to_complex(&self, point: Point) -> Complex {
        self.viewport.pixel_to_complex(point)
    }

    #[must_use]
    pub fn render_job(&self) -> RenderJob {
        RenderJob {
            viewport: self.viewport,
            formula: Arc::clone(&self.formula),
            colour_map: Arc::clone(&self.colour_map),
            params: IterationParams {
                julia: self.julia,
                max_iterations: self.max_iterations,
                escape_radius: self.escape_radius,
                smooth: self.normalised,
            },
            julia_constant: self.julia_constant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(width: u32, height: u32) -> FractalModel {
        FractalModel::new(
            Arc::new(Catalogue::standard()),
            CanvasSize::new(width, height).unwrap(),
        )
    }

    #[test]
    fn new_model_uses_documented_defaults() {
        let model = model(800, 500);

        assert_eq!(model.centre(), Complex::ZERO);
        assert_eq!(model.scale(), 0.01);
        assert_eq!(model.max_iterations(), 100);
        assert_eq!(model.escape_radius(), 2.0);
        assert!(!model.is_julia());
        assert_eq!(model.julia_constant(), Complex::new(-0.7, 0.27));
        assert!(!model.is_normalised());
        assert_eq!(model.formula().name(), "mandelbrot");
        assert_eq!(model.colour_map().name(), "rainbow");
    }

    #[test]
    fn zoom_in_by_divides_scale() {
        let mut model = model(100, 100);
        model.set_scale(0.1).zoom_in_by(4.0);

        assert!((model.scale() - 0.025).abs() < 1e-15);
        assert!((model.zoom() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn zoom_by_magnifies_like_zoom_in_by() {
        let mut model = model(100, 100);
        model.set_scale(0.1).zoom_by(2.0);

        assert!((model.scale() - 0.05).abs() < 1e-15);

        model.zoom_out_by(2.0);

        assert!((model.scale() - 0.1).abs() < 1e-15);
    }

    #[test]
    fn zoom_out_by_undoes_zoom_in_by() {
        let mut model = model(100, 100);
        let before = model.scale();

        model.zoom_in_by(3.0).zoom_out_by(3.0);

        assert!((model.scale() - before).abs() < 1e-15);
    }

    #[test]
    fn set_zoom_is_reciprocal_of_scale() {
        let mut model = model(100, 100);
        model.set_zoom(250.0);

        assert_eq!(model.scale(), 1.0 / 250.0);
    }

    #[test]
    fn transforms_round_trip() {
        let mut model = model(640, 480);
        model
            .set_centre(Complex::new(-0.75, 0.1))
            .set_scale(0.003);

        for column in [0.0, 17.0, 319.5, 639.0] {
            let back = model.real_to_pixel_column(model.pixel_column_to_real(column));
            assert!((back - column).abs() < 1e-9);
        }
        for row in [0.0, 240.0, 479.0] {
            let back = model.imag_to_pixel_row(model.pixel_row_to_imag(row));
            assert!((back - row).abs() < 1e-9);
        }
    }

    #[test]
    fn top_rows_map_to_positive_imaginary_values() {
        let model = model(10, 10);

        assert!(model.pixel_row_to_imag(0.0) > 0.0);
        assert!(model.pixel_row_to_imag(9.0) < 0.0);
    }

    #[test]
    fn select_formula_by_name() {
        let mut model = model(10, 10);

        model.select_formula("Mandelbrot Quartic").unwrap();

        assert_eq!(model.formula().degree(), 4);
    }

    #[test]
    fn failed_selection_leaves_model_unchanged() {
        let mut model = model(10, 10);
        model.select_formula("mandelbrot cubic").unwrap();
        model.select_colour_map("rgb").unwrap();

        assert!(model.select_formula("nope").is_err());
        assert!(model.select_colour_map("nope").is_err());

        assert_eq!(model.formula().name(), "mandelbrot cubic");
        assert_eq!(model.colour_map().name(), "rgb");
    }

    #[test]
    fn equation_appends_start_point_or_constant() {
        let mut model = model(10, 10);

        assert_eq!(model.equation(), "zₙ₊₁ = zₙ² + z₀");

        model.toggle_julia();
        assert_eq!(model.equation(), "zₙ₊₁ = zₙ² + c");
    }

    #[test]
    fn collatz_equation_has_no_additive_term() {
        let mut model = model(10, 10);
        model.select_formula("collatz map (variant 1)").unwrap();
        model.set_julia(true);

        assert_eq!(model.equation(), "zₙ₊₁ = ¼(1 + 4zₙ - (1 + 2zₙ)cos(πzₙ))");
    }

    #[test]
    fn centre_can_become_julia_constant() {
        let mut model = model(10, 10);
        model
            .set_centre(Complex::new(0.285, 0.01))
            .use_centre_as_julia_constant();

        assert_eq!(model.julia_constant(), Complex::new(0.285, 0.01));
    }

    #[test]
    fn render_job_is_a_snapshot() {
        let mut model = model(10, 10);
        model.set_normalised(true).set_max_iterations(42);

        let job = model.render_job();
        model.set_max_iterations(7).set_centre(Complex::new(1.0, 1.0));

        assert_eq!(job.params.max_iterations, 42);
        assert!(job.params.smooth);
        assert_eq!(job.viewport.centre, Complex::ZERO);
    }

    #[test]
    fn canvas_size_change_keeps_scale_and_centre() {
        let mut model = model(10, 10);
        let scale = model.scale();

        model.set_canvas_size(CanvasSize::new(20, 5).unwrap());

        assert_eq!(model.canvas_size().width(), 20);
        assert_eq!(model.scale(), scale);
    }
}
