use crate::core::actions::render_band::ports::escape_time_formula::{
    EscapeTimeFormula, IterationParams,
};
use crate::core::colour_mapping::map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::sync::Arc;

/// Everything needed to colour any pixel of one frame.
///
/// A job is a snapshot: later model changes never reach a session that is
/// already running.
#[derive(Debug, Clone)]
pub struct RenderJob {
    pub viewport: Viewport,
    pub formula: Arc<dyn EscapeTimeFormula>,
    pub colour_map: Arc<ColourMap>,
    pub params: IterationParams,
    pub julia_constant: Complex,
}

impl RenderJob {
    #[must_use]
    pub fn colour_at(&self, point: Point) -> Colour {
        let start = self.viewport.pixel_to_complex(point);
        let constant = if self.params.julia {
            self.julia_constant
        } else {
            start
        };

        let result = self.formula.iterate(start, constant, &self.params);

        self.colour_map
            .make_colour(&result, self.params.max_iterations, self.params.smooth)
    }
}
