use crate::core::data::canvas_size::CanvasSize;

const MIN_BAND_HEIGHT: u32 = 10;
const MAX_BAND_HEIGHT: u32 = 20;

/// Rows per progressive band: a tenth of the canvas, kept within 10..=20.
pub fn calculate_band_height(size: CanvasSize) -> u32 {
    (size.height() / 10).clamp(MIN_BAND_HEIGHT, MAX_BAND_HEIGHT)
}
