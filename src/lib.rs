pub mod controllers;
pub mod core;

pub use crate::controllers::progressive::{
    NullObserver, ProgressiveRenderer, RenderError, RenderEvent, RenderObserver, RenderStatus,
    SessionToken, StopHandle,
};
pub use crate::core::actions::cancellation::{
    CancelToken, Cancelled, GenerationToken, Generations, NeverCancel,
};
pub use crate::core::actions::render_band::ports::escape_time_formula::{
    EscapeTimeFormula, IterationParams,
};
pub use crate::core::actions::render_band::ports::pixel_sink::PixelSink;
pub use crate::core::colour_mapping::factory::colour_map_factory;
pub use crate::core::colour_mapping::kinds::ColourMapKind;
pub use crate::core::colour_mapping::map::ColourMap;
pub use crate::core::colour_mapping::palette::PaletteStrategy;
pub use crate::core::colour_mapping::smoothing::SmoothingPolicy;
pub use crate::core::data::canvas_size::{CanvasSize, CanvasSizeError};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::iteration_result::IterationResult;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::render_job::RenderJob;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::kinds::FormulaKind;
pub use crate::core::model::catalogue::Catalogue;
pub use crate::core::model::errors::ConfigurationError;
pub use crate::core::model::fractal_model::FractalModel;
pub use crate::core::model::presets::Preset;
