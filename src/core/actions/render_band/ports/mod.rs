pub mod escape_time_formula;
pub mod pixel_sink;
