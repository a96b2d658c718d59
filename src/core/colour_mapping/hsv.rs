use crate::core::data::colour::Colour;

/// Converts hue, saturation and value, each in `[0, 1]`, to an opaque colour.
/// Hue wraps, so `1.25` is treated as `0.25`.
#[must_use]
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Colour {
    let hue = hue.rem_euclid(1.0) * 6.0;
    let sector = hue.floor();
    let fraction = hue - sector;

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - fraction * saturation);
    let t = value * (1.0 - (1.0 - fraction) * saturation);

    let (r, g, b) = match sector as u8 {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    let channel = |x: f64| (x * 255.0).round().clamp(0.0, 255.0) as u8;

    Colour::opaque(channel(r), channel(g), channel(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_and_secondary_hues() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Colour::opaque(255, 0, 0));
        assert_eq!(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), Colour::opaque(0, 255, 0));
        assert_eq!(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), Colour::opaque(0, 0, 255));
        assert_eq!(hsv_to_rgb(0.5, 1.0, 1.0), Colour::opaque(0, 255, 255));
        assert_eq!(hsv_to_rgb(1.0 / 6.0, 1.0, 1.0), Colour::opaque(255, 255, 0));
    }

    #[test]
    fn zero_saturation_is_grey() {
        assert_eq!(hsv_to_rgb(0.42, 0.0, 0.5), Colour::opaque(128, 128, 128));
    }

    #[test]
    fn hue_wraps_around() {
        assert_eq!(hsv_to_rgb(1.0, 0.6, 0.8), hsv_to_rgb(0.0, 0.6, 0.8));
        assert_eq!(hsv_to_rgb(-0.5, 1.0, 1.0), hsv_to_rgb(0.5, 1.0, 1.0));
    }

    #[test]
    fn muted_red_matches_hand_calculation() {
        // v = 0.8 -> 204, p = 0.8 * 0.4 = 0.32 -> 82
        assert_eq!(hsv_to_rgb(0.0, 0.6, 0.8), Colour::opaque(204, 82, 82));
    }
}
