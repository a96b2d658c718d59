use crate::core::data::iteration_result::IterationResult;

const LOG_COMPRESSION_BASE: f64 = 1.3;

/// How a fractional escape count is derived in normalised mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SmoothingPolicy {
    /// `n + 1 - ln(ln|z|) / ln(degree)`, clamped at zero.
    #[default]
    Renormalised,
    /// The renormalised count passed through `log₁.₃`, so palette entries
    /// cover geometrically growing ranges of iteration counts.
    LogCompressed,
}

impl SmoothingPolicy {
    /// Continuous palette index for an escaped point, never negative.
    #[must_use]
    pub fn smoothed_index(self, result: &IterationResult) -> f64 {
        let renormalised = renormalised_count(result);

        match self {
            Self::Renormalised => renormalised,
            Self::LogCompressed => non_negative(renormalised.log(LOG_COMPRESSION_BASE)),
        }
    }
}

fn renormalised_count(result: &IterationResult) -> f64 {
    let count = f64::from(result.iterations);
    let correction = result.last_modulus.ln().ln() / f64::from(result.degree).ln();

    let smoothed = count + 1.0 - correction;
    if smoothed.is_finite() {
        non_negative(smoothed)
    } else {
        count
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.max(0.0) }
}
