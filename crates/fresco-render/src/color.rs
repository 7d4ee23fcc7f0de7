//! Hex/RGB conversions and linear color interpolation.
//!
//! These helpers are pure: no surface validation, no logging. They feed
//! the gradient machinery and are usable on their own.

/// RGB triple, one byte per channel.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A hex digit accepted by [`hex_to_rgb`].
///
/// Known defect, kept on purpose: the original matcher's character class
/// accepts `0-9` and `a,b,c,d,f` but not `e`, so otherwise-valid colors
/// containing an `e` digit fail to parse. Callers relying on the defect
/// exist; do not widen this without flagging the behavior change.
#[inline]
fn accepted_digit(b: u8) -> bool {
    matches!(b.to_ascii_lowercase(), b'0'..=b'9' | b'a'..=b'd' | b'f')
}

/// Parses a `#rrggbb` string (leading `#` optional) into an [`Rgb`].
///
/// Returns `None` for anything that is not exactly six accepted digits,
/// including the `e`-digit gap described on [`accepted_digit`].
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let s = hex.strip_prefix('#').unwrap_or(hex);
    let b = s.as_bytes();
    if b.len() != 6 || !b.iter().all(|&d| accepted_digit(d)) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();
    Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Formats three channel bytes as a lowercase `#rrggbb` string.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Per-channel linear interpolation between `start` and `end` at fraction
/// `t`, re-encoded as a hex string.
///
/// Each channel is `round(start + (end − start) · t)`.
pub fn gradient_color(start: Rgb, end: Rgb, t: f32) -> String {
    let lerp = |a: u8, b: u8| -> u8 {
        (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8
    };
    rgb_to_hex(lerp(start.r, end.r), lerp(start.g, end.g), lerp(start.b, end.b))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── hex_to_rgb ────────────────────────────────────────────────────────

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(hex_to_rgb("#ff0000"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(hex_to_rgb("00ff00"), Some(Rgb::new(0, 255, 0)));
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(hex_to_rgb("#AB12CD"), Some(Rgb::new(0xab, 0x12, 0xcd)));
    }

    #[test]
    fn e_digit_is_rejected() {
        // The accepted character class skips `e`; these are valid hex
        // colors elsewhere but fail here.
        assert_eq!(hex_to_rgb("#ee0000"), None);
        assert_eq!(hex_to_rgb("#00e000"), None);
        assert_eq!(hex_to_rgb("#0000fe"), None);
    }

    #[test]
    fn rejects_wrong_lengths_and_digits() {
        assert_eq!(hex_to_rgb("#fff"), None);
        assert_eq!(hex_to_rgb("#ff00000"), None);
        assert_eq!(hex_to_rgb("#gg0000"), None);
        assert_eq!(hex_to_rgb(""), None);
    }

    // ── rgb_to_hex ────────────────────────────────────────────────────────

    #[test]
    fn formats_lowercase_zero_padded() {
        assert_eq!(rgb_to_hex(255, 0, 10), "#ff000a");
        assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
    }

    #[test]
    fn byte_round_trip_over_representable_values() {
        // Bytes whose hex form avoids the rejected `e` digit survive a
        // full encode/decode cycle.
        for (r, g, b) in [(0, 0, 0), (255, 255, 255), (0xab, 0xcd, 0x12), (16, 32, 208)] {
            assert_eq!(hex_to_rgb(&rgb_to_hex(r, g, b)), Some(Rgb::new(r, g, b)));
        }
    }

    #[test]
    fn hex_round_trip_normalizes_case() {
        assert_eq!(
            hex_to_rgb("#AbCdF0").map(|c| rgb_to_hex(c.r, c.g, c.b)),
            Some("#abcdf0".to_owned())
        );
    }

    // ── gradient_color ────────────────────────────────────────────────────

    #[test]
    fn interpolating_a_color_with_itself_is_identity() {
        let c = Rgb::new(40, 80, 120);
        for t in [0.0, 0.25, 0.5, 0.9, 1.0] {
            assert_eq!(gradient_color(c, c, t), "#285078");
        }
    }

    #[test]
    fn endpoints_hit_start_and_end() {
        let c1 = Rgb::new(0, 0, 0);
        let c2 = Rgb::new(200, 100, 50);
        assert_eq!(gradient_color(c1, c2, 0.0), "#000000");
        assert_eq!(gradient_color(c1, c2, 1.0), "#c86432");
    }

    #[test]
    fn midpoint_rounds_per_channel() {
        let c1 = Rgb::new(0, 0, 0);
        let c2 = Rgb::new(200, 101, 51);
        // 100.5 and 25.5 round half-away-from-zero.
        assert_eq!(gradient_color(c1, c2, 0.5), "#64331a");
    }
}
