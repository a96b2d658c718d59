//! Complex extensions of the Collatz map. The orbit depends only on the
//! starting point, so the additive constant is ignored.
//!
//! The steps keep the cosine terms at full weight rather than quartering
//! them, so they differ from the `¼(…)` forms shown as their equations.

use crate::core::data::complex::Complex;
use std::f64::consts::PI;

/// `cos(πz)` split into `(cos(πa)·cosh(πb), sin(πa)·sinh(πb))`, so that
/// `cos(πz) = first - second·i`.
fn cos_pi(z: Complex) -> (f64, f64) {
    (
        (PI * z.real).cos() * (PI * z.imag).cosh(),
        (PI * z.real).sin() * (PI * z.imag).sinh(),
    )
}

/// `¼ + z - (1 + 2z)·cos(πz)`
pub fn variant_one(z: Complex, _: f64, _: f64, _: Complex) -> Complex {
    let (c, s) = cos_pi(z);
    let a = 2.0 * z.real + 1.0;

    Complex {
        real: 0.25 + z.real - a * c - 2.0 * z.imag * s,
        imag: (1.0 - 2.0 * c) * z.imag + a * s,
    }
}

/// `½ + 7z/4 - (2 + 5z)·cos(πz)`
pub fn variant_two(z: Complex, _: f64, _: f64, _: Complex) -> Complex {
    let (c, s) = cos_pi(z);

    Complex {
        real: 0.5 + 7.0 * z.real / 4.0 - 2.0 * c - 5.0 * (c * z.real + s * z.imag),
        imag: 7.0 * z.imag / 4.0 + 2.0 * s + 5.0 * (s * z.real - c * z.imag),
    }
}
