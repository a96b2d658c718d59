#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Colour given to points assumed to be inside the set.
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[must_use]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Component-wise linear blend, `t = 0` giving `self` and `t = 1` giving `other`.
    ///
    /// `t` outside `[0, 1]` is a caller bug: debug builds panic, release builds clamp.
    #[must_use]
    pub fn interpolate(self, other: Self, t: f64) -> Self {
        debug_assert!(
            (0.0..=1.0).contains(&t),
            "interpolation fraction {} outside [0, 1]",
            t
        );
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let blend = |from: u8, to: u8| -> u8 {
            let value = f64::from(from) + (f64::from(to) - f64::from(from)) * t;
            value.round().clamp(0.0, 255.0) as u8
        };

        Self {
            r: blend(self.r, other.r),
            g: blend(self.g, other.g),
            b: blend(self.b, other.b),
            a: blend(self.a, other.a),
        }
    }
}
