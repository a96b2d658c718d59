//! Port definitions for the progressive renderer.
//!
//! The renderer publishes through [`observer::RenderObserver`] and draws
//! through the core `PixelSink` port; it knows nothing of concrete UIs.

pub mod observer;
