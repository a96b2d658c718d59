use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::colour_mapping::map::ColourMap;
use crate::core::colour_mapping::palette::PaletteStrategy;
use std::num::NonZeroU32;

const RAINBOW_GRADATIONS: NonZeroU32 = NonZeroU32::new(10).unwrap();
const RGB_GRADATIONS: NonZeroU32 = NonZeroU32::new(5).unwrap();
const VIVID_RAINBOW_GRADATIONS: NonZeroU32 = NonZeroU32::new(70).unwrap();
const SMOOTH_RGB_GRADATIONS: NonZeroU32 = NonZeroU32::new(40).unwrap();

#[must_use]
pub fn colour_map_factory(kind: ColourMapKind) -> ColourMap {
    let strategy = match kind {
        ColourMapKind::Rainbow => PaletteStrategy::HueRamp {
            gradations: RAINBOW_GRADATIONS,
            saturation: 0.6,
            value: 0.8,
        },
        ColourMapKind::Rgb => PaletteStrategy::ThreeWayRamp {
            gradations: RGB_GRADATIONS,
            max: 128,
        },
        ColourMapKind::VividRainbow => PaletteStrategy::HueRamp {
            gradations: VIVID_RAINBOW_GRADATIONS,
            saturation: 1.0,
            value: 1.0,
        },
        ColourMapKind::SmoothRgb => PaletteStrategy::ThreeWayRamp {
            gradations: SMOOTH_RGB_GRADATIONS,
            max: 255,
        },
    };

    ColourMap::new(kind.name(), strategy)
}
