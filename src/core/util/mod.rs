pub mod calculate_band_height;
