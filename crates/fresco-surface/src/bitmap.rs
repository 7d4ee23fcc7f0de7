use crate::pixmap::Rgba8;

/// Decoded image data, the source type accepted by the context's blit.
///
/// Straight-alpha RGBA8, row-major. Construction validates that the byte
/// length matches the dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Bitmap {
    /// Wraps raw RGBA bytes. `None` when the length does not match
    /// `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() != width as usize * height as usize * 4 {
            return None;
        }
        Some(Self { width, height, data })
    }

    /// Single-color bitmap, mostly useful for tests.
    pub fn solid(width: u32, height: u32, color: Rgba8) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for _ in 0..width as usize * height as usize {
            data.extend_from_slice(&[color.r, color.g, color.b, color.a]);
        }
        Self { width, height, data }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reads the texel at `(x, y)`, clamping to the bitmap edge.
    ///
    /// A zero-dimension bitmap has no edge to clamp to; it reads as
    /// transparent.
    pub fn texel_clamped(&self, x: i64, y: i64) -> Rgba8 {
        if self.is_empty() {
            return Rgba8::TRANSPARENT;
        }
        let x = x.clamp(0, self.width as i64 - 1) as usize;
        let y = y.clamp(0, self.height as i64 - 1) as usize;
        let i = (y * self.width as usize + x) * 4;
        Rgba8::new(self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3])
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgba8_validates_length() {
        assert!(Bitmap::from_rgba8(2, 2, vec![0; 16]).is_some());
        assert!(Bitmap::from_rgba8(2, 2, vec![0; 15]).is_none());
    }

    #[test]
    fn empty_bitmap_reads_transparent() {
        let bmp = Bitmap::from_rgba8(0, 0, Vec::new()).unwrap();
        assert!(bmp.is_empty());
        assert_eq!(bmp.texel_clamped(0, 0), Rgba8::TRANSPARENT);
        let wide = Bitmap::from_rgba8(0, 3, Vec::new()).unwrap();
        assert_eq!(wide.texel_clamped(1, 1), Rgba8::TRANSPARENT);
    }

    #[test]
    fn texel_reads_clamp_to_edges() {
        let bmp = Bitmap::solid(2, 2, Rgba8::opaque(7, 8, 9));
        assert_eq!(bmp.texel_clamped(-5, 0), Rgba8::opaque(7, 8, 9));
        assert_eq!(bmp.texel_clamped(10, 10), Rgba8::opaque(7, 8, 9));
    }
}
