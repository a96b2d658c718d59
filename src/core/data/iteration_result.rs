/// Outcome of iterating one starting point.
///
/// `iterations == max_iterations` means the orbit never escaped and the point
/// is assumed to be inside the set. `last_modulus` is `|z|` at escape and is
/// only filled in when smoothing was requested; otherwise it is `0`.
/// `degree` is the power of the recurrence that produced the result.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IterationResult {
    pub iterations: u32,
    pub last_modulus: f64,
    pub degree: u32,
}

impl IterationResult {
    #[must_use]
    pub const fn inside(max_iterations: u32, degree: u32) -> Self {
        Self {
            iterations: max_iterations,
            last_modulus: 0.0,
            degree,
        }
    }

    #[must_use]
    pub fn is_inside(&self, max_iterations: u32) -> bool {
        self.iterations >= max_iterations
    }
}
