use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use crate::core::model::errors::ConfigurationError;
use crate::core::model::fractal_model::{DEFAULT_MAX_ITERATIONS, FractalModel};

/// Named view configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// The whole set at the default framing.
    #[default]
    Home,
    /// A miniature Julia-like island deep in the seahorse valley.
    JuliaIsland,
}

impl Preset {
    /// Applies the preset. A preset naming a formula the catalogue lacks
    /// fails without touching the model.
    pub fn apply(self, model: &mut FractalModel) -> Result<(), ConfigurationError> {
        match self {
            Self::Home => {
                let scale = Viewport::default_scale(model.canvas_size());
                model
                    .set_centre(Complex::ZERO)
                    .set_scale(scale)
                    .set_max_iterations(DEFAULT_MAX_ITERATIONS);
            }
            Self::JuliaIsland => {
                model.select_formula("mandelbrot")?;
                let colour_map = model.catalogue().default_colour_map().name().to_owned();
                model.select_colour_map(&colour_map)?;
                model
                    .set_julia(false)
                    .set_normalised(true)
                    .set_centre(Complex::new(-0.743643887037151, 0.131825904205330))
                    .set_max_iterations(5000)
                    .set_scale(1.318989403545856e-13);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_band::ports::escape_time_formula::EscapeTimeFormula;
    use crate::core::colour_mapping::factory::colour_map_factory;
    use crate::core::colour_mapping::kinds::ColourMapKind;
    use crate::core::data::canvas_size::CanvasSize;
    use crate::core::fractals::kinds::FormulaKind;
    use crate::core::model::catalogue::Catalogue;
    use std::sync::Arc;

    fn model() -> FractalModel {
        FractalModel::new(
            Arc::new(Catalogue::standard()),
            CanvasSize::new(400, 200).unwrap(),
        )
    }

    #[test]
    fn home_restores_default_framing() {
        let mut model = model();
        model
            .set_centre(Complex::new(1.0, 1.0))
            .set_scale(1e-6)
            .set_max_iterations(9);

        Preset::Home.apply(&mut model).unwrap();

        assert_eq!(model.centre(), Complex::ZERO);
        assert_eq!(model.scale(), 5.0 / 200.0);
        assert_eq!(model.max_iterations(), 100);
    }

    #[test]
    fn julia_island_sets_deep_zoom_view() {
        let mut model = model();
        model
            .select_formula("mandelbrot quintic")
            .unwrap()
            .select_colour_map("rgb")
            .unwrap()
            .set_julia(true);

        Preset::JuliaIsland.apply(&mut model).unwrap();

        assert_eq!(model.formula().name(), "mandelbrot");
        assert_eq!(model.colour_map().name(), "rainbow");
        assert!(!model.is_julia());
        assert!(model.is_normalised());
        assert_eq!(model.max_iterations(), 5000);
        assert_eq!(model.scale(), 1.318989403545856e-13);
        assert_eq!(model.centre().real, -0.743643887037151);
    }

    #[test]
    fn julia_island_needs_quadratic_formula() {
        let formulas: Vec<Arc<dyn EscapeTimeFormula>> = vec![Arc::new(FormulaKind::Cubic)];
        let catalogue =
            Catalogue::new(formulas, vec![Arc::new(colour_map_factory(ColourMapKind::Rgb))]).unwrap();
        let mut model = FractalModel::new(Arc::new(catalogue), CanvasSize::new(10, 10).unwrap());

        assert!(Preset::JuliaIsland.apply(&mut model).is_err());
        assert_eq!(model.max_iterations(), 100);
    }
}
