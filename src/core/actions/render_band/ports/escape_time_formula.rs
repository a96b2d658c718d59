use crate::core::data::complex::Complex;
use crate::core::data::iteration_result::IterationResult;
use std::fmt::Debug;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IterationParams {
    /// Julia mode keeps `constant` fixed; Mandelbrot mode passes the start point.
    pub julia: bool,
    pub max_iterations: u32,
    pub escape_radius: f64,
    /// Record `|z|` at escape so the colour map can smooth the count.
    pub smooth: bool,
}

pub trait EscapeTimeFormula: Debug + Send + Sync {
    /// Stable identifier, used for lookup.
    fn name(&self) -> &str;

    /// Right-hand side of the recurrence, without the additive term.
    fn equation(&self) -> &str;

    fn degree(&self) -> u32;

    /// Whether the recurrence ends in `+ c`.
    fn adds_constant(&self) -> bool {
        true
    }

    fn iterate(&self, start: Complex, constant: Complex, params: &IterationParams) -> IterationResult;
}
