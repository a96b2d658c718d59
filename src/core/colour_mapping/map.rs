use crate::core::colour_mapping::palette::PaletteStrategy;
use crate::core::colour_mapping::smoothing::SmoothingPolicy;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_result::IterationResult;
use std::sync::OnceLock;

/// A named palette, cyclically indexed by escape count.
///
/// Each instance owns its palette, which is built on first lookup and kept
/// until [`ColourMap::reset_palette`].
#[derive(Debug)]
pub struct ColourMap {
    name: String,
    strategy: PaletteStrategy,
    smoothing: SmoothingPolicy,
    palette: OnceLock<Vec<Colour>>,
}

impl ColourMap {
    #[must_use]
    pub fn new(name: impl Into<String>, strategy: PaletteStrategy) -> Self {
        Self {
            name: name.into(),
            strategy,
            smoothing: SmoothingPolicy::default(),
            palette: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn with_smoothing(mut self, smoothing: SmoothingPolicy) -> Self {
        self.smoothing = smoothing;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn strategy(&self) -> PaletteStrategy {
        self.strategy
    }

    #[must_use]
    pub fn smoothing(&self) -> SmoothingPolicy {
        self.smoothing
    }

    #[must_use]
    pub fn palette(&self) -> &[Colour] {
        self.palette.get_or_init(|| self.strategy.generate())
    }

    #[must_use]
    pub fn is_generated(&self) -> bool {
        self.palette.get().is_some()
    }

    pub fn reset_palette(&mut self) {
        self.palette = OnceLock::new();
    }

    /// Colour for one escape-time result.
    ///
    /// Points that used the whole iteration budget are black. Otherwise the
    /// count picks a palette entry directly, or, when `normalised`, a smoothed
    /// count blends the two neighbouring entries.
    #[must_use]
    pub fn make_colour(&self, result: &IterationResult, max_iterations: u32, normalised: bool) -> Colour {
        if result.is_inside(max_iterations) {
            return Colour::BLACK;
        }

        let palette = self.palette();
        let len = palette.len();

        if !normalised {
            return palette[result.iterations as usize % len];
        }

        let index = self.smoothing.smoothed_index(result);
        let whole = index.floor();
        let fraction = index - whole;
        let lower = whole as usize % len;

        palette[lower].interpolate(palette[(lower + 1) % len], fraction)
    }
}

impl Clone for ColourMap {
    fn clone(&self) -> Self {
        Self::new(self.name.clone(), self.strategy).with_smoothing(self.smoothing)
    }
}
