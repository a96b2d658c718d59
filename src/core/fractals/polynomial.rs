//! Integer-power recurrences `z ↦ zᵈ + c` and their conjugate ("Mandelbar")
//! forms `z ↦ z̄ᵈ + c`, expanded into real and imaginary parts.

use crate::core::data::complex::Complex;

pub fn quadratic(z: Complex, real_sq: f64, imag_sq: f64, c: Complex) -> Complex {
    Complex {
        real: real_sq - imag_sq + c.real,
        imag: 2.0 * z.real * z.imag + c.imag,
    }
}

pub fn quadratic_conjugate(z: Complex, real_sq: f64, imag_sq: f64, c: Complex) -> Complex {
    Complex {
        real: real_sq - imag_sq + c.real,
        imag: -2.0 * z.real * z.imag + c.imag,
    }
}

pub fn cubic(z: Complex, real_sq: f64, imag_sq: f64, c: Complex) -> Complex {
    Complex {
        real: z.real * (real_sq - 3.0 * imag_sq) + c.real,
        imag: z.imag * (3.0 * real_sq - imag_sq) + c.imag,
    }
}

pub fn cubic_conjugate(z: Complex, real_sq: f64, imag_sq: f64, c: Complex) -> Complex {
    Complex {
        real: z.real * (real_sq - 3.0 * imag_sq) + c.real,
        imag: z.imag * (imag_sq - 3.0 * real_sq) + c.imag,
    }
}

// (a + bi)⁴ = a⁴ + b⁴ - 6a²b² + (4a³b - 4ab³)i
pub fn quartic(z: Complex, real_sq: f64, imag_sq: f64, c: Complex) -> Complex {
    Complex {
        real: real_sq * real_sq + imag_sq * imag_sq - 6.0 * real_sq * imag_sq + c.real,
        imag: 4.0 * real_sq * z.real * z.imag - 4.0 * z.real * imag_sq * z.imag + c.imag,
    }
}

pub fn quartic_conjugate(z: Complex, real_sq: f64, imag_sq: f64, c: Complex) -> Complex {
    let difference = real_sq - imag_sq;
    let product = z.real * z.imag;

    Complex {
        real: difference * difference - 4.0 * product * product + c.real,
        imag: c.imag - 4.0 * product * difference,
    }
}

// (a + bi)⁵ = a(a⁴ - 10a²b² + 5b⁴) + b(5a⁴ - 10a²b² + b⁴)i
pub fn quintic(z: Complex, real_sq: f64, imag_sq: f64, c: Complex) -> Complex {
    Complex {
        real: z.real * (real_sq * (real_sq - imag_sq) - 9.0 * real_sq * imag_sq + 5.0 * imag_sq * imag_sq)
            + c.real,
        imag: z.imag * (imag_sq * (imag_sq - 10.0 * real_sq) + 5.0 * real_sq * real_sq) + c.imag,
    }
}

pub fn quintic_conjugate(z: Complex, real_sq: f64, imag_sq: f64, c: Complex) -> Complex {
    Complex {
        real: z.real * (real_sq * (real_sq - imag_sq) + imag_sq * (5.0 * imag_sq - 9.0 * real_sq))
            + c.real,
        imag: z.imag * (imag_sq * (real_sq - imag_sq) + real_sq * (9.0 * imag_sq - 5.0 * real_sq))
            + c.imag,
    }
}

/// Main cardioid and period-2 bulb of the quadratic Mandelbrot set.
///
/// Only valid in the Mandelbrot parameter plane, never for Julia seeds.
#[must_use]
pub fn in_main_cardioid_or_bulb(point: Complex) -> bool {
    let x = point.real;
    let imag_sq = point.imag * point.imag;

    let q = (x - 0.25) * (x - 0.25) + imag_sq;
    if q * (q + x - 0.25) < imag_sq / 4.0 {
        return true;
    }

    (x + 1.0) * (x + 1.0) + imag_sq < 0.0625
}
