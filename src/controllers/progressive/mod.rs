//! Progressive controller for band-by-band rendering.
//!
//! The renderer owns a pixel sink and renders one band of rows per step, so
//! a host event loop can interleave input handling and repaints between
//! bands.
//!
//! # Architecture
//!
//! - **Input**: `RenderJob` snapshots taken from a `FractalModel`
//! - **Output**: `RenderObserver` receiving `RenderEvent`s, and the
//!   `PixelSink` receiving pixels and committed row ranges
//! - **Core**: the `render_band` action does the per-pixel work

pub mod data;
pub mod errors;
pub mod events;
pub mod ports;
mod renderer;

pub use data::render_session::SessionToken;
pub use errors::render_error::RenderError;
pub use events::render_event::RenderEvent;
pub use ports::observer::{NullObserver, RenderObserver};
pub use renderer::{ProgressiveRenderer, RenderStatus, StopHandle};
