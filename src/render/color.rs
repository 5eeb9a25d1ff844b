//! Hex colour helpers.

/// Shift every channel of a `#rrggbb` colour by `percent` of 255.
///
/// Channels are clamped to `0..=255`. Input that is not a six-digit hex
/// colour is returned unchanged.
pub fn adjust_brightness(hex: &str, percent: f64) -> String {
    let Some(rgb) = parse_hex(hex) else {
        return hex.to_string();
    };
    // Halves round towards +inf, so -25.5 becomes -25.
    let amount = (2.55 * percent + 0.5).floor() as i32;
    let shift = |channel: u32| (channel as i32 + amount).clamp(0, 255) as u32;

    let r = shift((rgb >> 16) & 0xff);
    let g = shift((rgb >> 8) & 0xff);
    let b = shift(rgb & 0xff);
    format!("#{r:02x}{g:02x}{b:02x}")
}

fn parse_hex(hex: &str) -> Option<u32> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Cycle through brightness `variations` of `base` by `index`.
pub fn variation(base: &str, variations: &[f64], index: usize) -> String {
    match variations.get(index % variations.len().max(1)) {
        Some(percent) if *percent != 0.0 => adjust_brightness(base, *percent),
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("#000000", 40.0, "#666666")]
    #[case("#4A90E2", 0.0, "#4a90e2")]
    #[case("#ffffff", 20.0, "#ffffff")]
    #[case("#101010", -20.0, "#000000")]
    #[case("#FFC107", 15.0, "#ffe72d")]
    fn given_colour_when_adjusting_brightness_then_shifts_and_clamps(
        #[case] input: &str,
        #[case] percent: f64,
        #[case] expected: &str,
    ) {
        assert_eq!(adjust_brightness(input, percent), expected);
    }

    #[test]
    fn given_invalid_colour_when_adjusting_then_returns_input() {
        assert_eq!(adjust_brightness("red", 20.0), "red");
        assert_eq!(adjust_brightness("#12345z", 20.0), "#12345z");
    }

    #[test]
    fn given_variations_when_cycling_then_wraps_around() {
        let variations = [0.0, 20.0];
        assert_eq!(variation("#000000", &variations, 0), "#000000");
        assert_eq!(variation("#000000", &variations, 1), "#333333");
        assert_eq!(variation("#000000", &variations, 2), "#000000");
        assert_eq!(variation("#000000", &[], 3), "#000000");
    }
}
