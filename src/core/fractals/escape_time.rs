use crate::core::actions::render_band::ports::escape_time_formula::IterationParams;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_result::IterationResult;

/// One application of a recurrence: current `z`, its squared components, and the additive term.
pub type Step = fn(z: Complex, real_sq: f64, imag_sq: f64, c: Complex) -> Complex;

/// Iterates `step` from `start` until `|z|² > radius²` or the budget runs out.
///
/// The escape test runs before each step, so a start point already outside
/// the radius reports zero iterations.
pub fn escape_time(
    start: Complex,
    constant: Complex,
    params: &IterationParams,
    degree: u32,
    step: Step,
) -> IterationResult {
    let radius_sq = params.escape_radius * params.escape_radius;
    let mut z = start;

    for iteration in 0..params.max_iterations {
        let real_sq = z.real * z.real;
        let imag_sq = z.imag * z.imag;

        if real_sq + imag_sq > radius_sq {
            let last_modulus = if params.smooth {
                (real_sq + imag_sq).sqrt()
            } else {
                0.0
            };

            return IterationResult {
                iterations: iteration,
                last_modulus,
                degree,
            };
        }

        z = step(z, real_sq, imag_sq, constant);
    }

    IterationResult::inside(params.max_iterations, degree)
}
