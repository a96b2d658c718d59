use crate::core::actions::render_band::ports::escape_time_formula::{
    EscapeTimeFormula, IterationParams,
};
use crate::core::data::complex::Complex;
use crate::core::data::iteration_result::IterationResult;
use crate::core::fractals::collatz;
use crate::core::fractals::escape_time::{Step, escape_time};
use crate::core::fractals::polynomial;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormulaKind {
    #[default]
    Quadratic,
    Cubic,
    Quartic,
    Quintic,
    QuadraticConjugate,
    CubicConjugate,
    QuarticConjugate,
    QuinticConjugate,
    CollatzVariantOne,
    CollatzVariantTwo,
}

impl FormulaKind {
    pub const ALL: &'static [Self] = &[
        Self::Quadratic,
        Self::Cubic,
        Self::Quartic,
        Self::Quintic,
        Self::QuadraticConjugate,
        Self::CubicConjugate,
        Self::QuarticConjugate,
        Self::QuinticConjugate,
        Self::CollatzVariantOne,
        Self::CollatzVariantTwo,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Quadratic => "mandelbrot",
            Self::Cubic => "mandelbrot cubic",
            Self::Quartic => "mandelbrot quartic",
            Self::Quintic => "mandelbrot quintic",
            Self::QuadraticConjugate => "mandelbrot conjugate",
            Self::CubicConjugate => "mandelbrot conjugate cubic",
            Self::QuarticConjugate => "mandelbrot conjugate quartic",
            Self::QuinticConjugate => "mandelbrot conjugate quintic",
            Self::CollatzVariantOne => "collatz map (variant 1)",
            Self::CollatzVariantTwo => "collatz map (variant 2)",
        }
    }

    #[must_use]
    pub const fn equation(self) -> &'static str {
        match self {
            Self::Quadratic => "zₙ²",
            Self::Cubic => "zₙ³",
            Self::Quartic => "zₙ⁴",
            Self::Quintic => "zₙ⁵",
            Self::QuadraticConjugate => "z̄ₙ²",
            Self::CubicConjugate => "z̄ₙ³",
            Self::QuarticConjugate => "z̄ₙ⁴",
            Self::QuinticConjugate => "z̄ₙ⁵",
            Self::CollatzVariantOne => "¼(1 + 4zₙ - (1 + 2zₙ)cos(πzₙ))",
            Self::CollatzVariantTwo => "¼(2 + 7zₙ - (2 + 5zₙ)cos(πzₙ))",
        }
    }

    /// Power used by the smoothing formula. The Collatz maps report 5.
    #[must_use]
    pub const fn degree(self) -> u32 {
        match self {
            Self::Quadratic | Self::QuadraticConjugate => 2,
            Self::Cubic | Self::CubicConjugate => 3,
            Self::Quartic | Self::QuarticConjugate => 4,
            Self::Quintic
            | Self::QuinticConjugate
            | Self::CollatzVariantOne
            | Self::CollatzVariantTwo => 5,
        }
    }

    #[must_use]
    pub const fn adds_constant(self) -> bool {
        !matches!(self, Self::CollatzVariantOne | Self::CollatzVariantTwo)
    }

    fn step(self) -> Step {
        match self {
            Self::Quadratic => polynomial::quadratic,
            Self::Cubic => polynomial::cubic,
            Self::Quartic => polynomial::quartic,
            Self::Quintic => polynomial::quintic,
            Self::QuadraticConjugate => polynomial::quadratic_conjugate,
            Self::CubicConjugate => polynomial::cubic_conjugate,
            Self::QuarticConjugate => polynomial::quartic_conjugate,
            Self::QuinticConjugate => polynomial::quintic_conjugate,
            Self::CollatzVariantOne => collatz::variant_one,
            Self::CollatzVariantTwo => collatz::variant_two,
        }
    }
}

impl EscapeTimeFormula for FormulaKind {
    fn name(&self) -> &str {
        (*self).name()
    }

    fn equation(&self) -> &str {
        (*self).equation()
    }

    fn degree(&self) -> u32 {
        (*self).degree()
    }

    fn adds_constant(&self) -> bool {
        (*self).adds_constant()
    }

    fn iterate(&self, start: Complex, constant: Complex, params: &IterationParams) -> IterationResult {
        let degree = (*self).degree();

        if *self == Self::Quadratic && !params.julia && polynomial::in_main_cardioid_or_bulb(start) {
            return IterationResult::inside(params.max_iterations, degree);
        }

        escape_time(start, constant, params, degree, self.step())
    }
}

impl std::fmt::Display for FormulaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).name())
    }
}
