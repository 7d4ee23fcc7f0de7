use crate::color::Rgb;

/// Gradient descriptor: both endpoint colors plus the axis flag.
///
/// `height_wise` selects row strips (the color varies along the height);
/// otherwise column strips.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GradientSpec {
    pub start: Rgb,
    pub end: Rgb,
    pub height_wise: bool,
}

impl GradientSpec {
    #[inline]
    pub const fn new(start: Rgb, end: Rgb, height_wise: bool) -> Self {
        Self { start, end, height_wise }
    }
}

/// Fill argument accepted by rectangle drawing: either a flat style
/// string or a gradient descriptor.
///
/// The two cases are an explicit tagged variant so the dispatch in
/// `draw_rect` is visible at the call boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    /// A style string the context's fill accepts (named color, hex).
    Flat(String),
    Gradient(GradientSpec),
}

impl From<&str> for Fill {
    #[inline]
    fn from(style: &str) -> Self {
        Fill::Flat(style.to_owned())
    }
}

impl From<String> for Fill {
    #[inline]
    fn from(style: String) -> Self {
        Fill::Flat(style)
    }
}

impl From<GradientSpec> for Fill {
    #[inline]
    fn from(spec: GradientSpec) -> Self {
        Fill::Gradient(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_become_flat_fills() {
        assert_eq!(Fill::from("#ff0000"), Fill::Flat("#ff0000".to_owned()));
    }

    #[test]
    fn specs_become_gradient_fills() {
        let spec = GradientSpec::new(Rgb::new(0, 0, 0), Rgb::new(9, 9, 9), true);
        assert_eq!(Fill::from(spec), Fill::Gradient(spec));
    }
}
