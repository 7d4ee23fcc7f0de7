use crate::pixmap::Rgba8;

/// Resolved paint value for fill and stroke state.
///
/// Parsed from the same textual forms a canvas style assignment accepts:
/// `#rgb`, `#rrggbb`, `#rrggbbaa`, or a named color. Assignment sites
/// ignore strings that do not parse, keeping the previous style.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Style(pub Rgba8);

impl Style {
    pub const BLACK: Self = Self(Rgba8::opaque(0, 0, 0));

    #[inline]
    pub const fn new(color: Rgba8) -> Self {
        Self(color)
    }

    #[inline]
    pub const fn color(self) -> Rgba8 {
        self.0
    }

    /// Parses a style string. `None` when the string is not a recognized
    /// color form.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).map(Self);
        }
        named_color(s).map(Self)
    }
}

fn parse_hex(hex: &str) -> Option<Rgba8> {
    let digit = |b: u8| -> Option<u8> {
        match b {
            b'0'..=b'9' => Some(b - b'0'),
            b'a'..=b'f' => Some(b - b'a' + 10),
            b'A'..=b'F' => Some(b - b'A' + 10),
            _ => None,
        }
    };
    let byte = |hi: u8, lo: u8| -> Option<u8> { Some(digit(hi)? << 4 | digit(lo)?) };

    let b = hex.as_bytes();
    match b.len() {
        // #rgb: each digit doubled.
        3 => {
            let r = digit(b[0])?;
            let g = digit(b[1])?;
            let bl = digit(b[2])?;
            Some(Rgba8::opaque(r << 4 | r, g << 4 | g, bl << 4 | bl))
        }
        6 => Some(Rgba8::opaque(
            byte(b[0], b[1])?,
            byte(b[2], b[3])?,
            byte(b[4], b[5])?,
        )),
        8 => Some(Rgba8::new(
            byte(b[0], b[1])?,
            byte(b[2], b[3])?,
            byte(b[4], b[5])?,
            byte(b[6], b[7])?,
        )),
        _ => None,
    }
}

fn named_color(name: &str) -> Option<Rgba8> {
    let c = match name.to_ascii_lowercase().as_str() {
        "black" => Rgba8::opaque(0, 0, 0),
        "white" => Rgba8::opaque(255, 255, 255),
        "red" => Rgba8::opaque(255, 0, 0),
        "green" => Rgba8::opaque(0, 128, 0),
        "lime" => Rgba8::opaque(0, 255, 0),
        "blue" => Rgba8::opaque(0, 0, 255),
        "yellow" => Rgba8::opaque(255, 255, 0),
        "cyan" | "aqua" => Rgba8::opaque(0, 255, 255),
        "magenta" | "fuchsia" => Rgba8::opaque(255, 0, 255),
        "gray" | "grey" => Rgba8::opaque(128, 128, 128),
        "silver" => Rgba8::opaque(192, 192, 192),
        "maroon" => Rgba8::opaque(128, 0, 0),
        "olive" => Rgba8::opaque(128, 128, 0),
        "navy" => Rgba8::opaque(0, 0, 128),
        "teal" => Rgba8::opaque(0, 128, 128),
        "purple" => Rgba8::opaque(128, 0, 128),
        "orange" => Rgba8::opaque(255, 165, 0),
        "brown" => Rgba8::opaque(165, 42, 42),
        "pink" => Rgba8::opaque(255, 192, 203),
        "transparent" => Rgba8::TRANSPARENT,
        _ => return None,
    };
    Some(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(Style::parse("#ff8000"), Some(Style(Rgba8::opaque(255, 128, 0))));
    }

    #[test]
    fn parses_short_hex() {
        assert_eq!(Style::parse("#f0a"), Some(Style(Rgba8::opaque(0xff, 0x00, 0xaa))));
    }

    #[test]
    fn parses_hex_with_alpha() {
        assert_eq!(
            Style::parse("#10203040"),
            Some(Style(Rgba8::new(0x10, 0x20, 0x30, 0x40)))
        );
    }

    #[test]
    fn parses_named_colors_case_insensitively() {
        assert_eq!(Style::parse("RED"), Some(Style(Rgba8::opaque(255, 0, 0))));
        assert_eq!(Style::parse("grey"), Style::parse("gray"));
    }

    #[test]
    fn rejects_malformed_strings() {
        assert_eq!(Style::parse("#12345"), None);
        assert_eq!(Style::parse("#gg0000"), None);
        assert_eq!(Style::parse("not-a-color"), None);
        assert_eq!(Style::parse(""), None);
    }
}
