pub mod catalogue;
pub mod errors;
pub mod fractal_model;
pub mod presets;
