use crate::core::colour_mapping::hsv::hsv_to_rgb;
use crate::core::data::colour::Colour;
use std::num::NonZeroU32;

/// How a colour map builds its palette.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PaletteStrategy {
    /// `gradations` evenly spaced hues at fixed saturation and value.
    HueRamp {
        gradations: NonZeroU32,
        saturation: f64,
        value: f64,
    },
    /// Red to green, green to blue, then blue back to red, `gradations` steps
    /// per segment, channels peaking at `max`.
    ThreeWayRamp { gradations: NonZeroU32, max: u8 },
}

impl PaletteStrategy {
    /// Number of colours `generate` produces.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        match self {
            Self::HueRamp { gradations, .. } => gradations.get() as usize,
            Self::ThreeWayRamp { gradations, .. } => gradations.get() as usize * 3,
        }
    }

    #[must_use]
    pub fn generate(&self) -> Vec<Colour> {
        match *self {
            Self::HueRamp {
                gradations,
                saturation,
                value,
            } => {
                let count = gradations.get();

                (0..count)
                    .map(|i| hsv_to_rgb(f64::from(i) / f64::from(count), saturation, value))
                    .collect()
            }
            Self::ThreeWayRamp { gradations, max } => {
                let count = gradations.get();
                let max = f64::from(max);
                let ramp = |i: u32| -> (u8, u8) {
                    let rising = max * f64::from(i) / f64::from(count);
                    ((max - rising).round() as u8, rising.round() as u8)
                };

                let red_to_green = (0..count).map(|i| {
                    let (falling, rising) = ramp(i);
                    Colour::opaque(falling, rising, 0)
                });
                let green_to_blue = (0..count).map(|i| {
                    let (falling, rising) = ramp(i);
                    Colour::opaque(0, falling, rising)
                });
                let blue_to_red = (0..count).map(|i| {
                    let (falling, rising) = ramp(i);
                    Colour::opaque(rising, 0, falling)
                });

                red_to_green.chain(green_to_blue).chain(blue_to_red).collect()
            }
        }
    }
}
