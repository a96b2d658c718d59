pub mod factory;
pub mod hsv;
pub mod kinds;
pub mod map;
pub mod palette;
pub mod smoothing;
