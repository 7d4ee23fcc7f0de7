use bytemuck::{Pod, Zeroable};

/// Straight-alpha sRGB pixel as stored in a [`Pixmap`].
///
/// `Pod` so pixel rows can be reinterpreted from the raw byte buffer
/// without copying.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

/// CPU pixel store: straight-alpha RGBA8, row-major, top-left origin.
///
/// All write operations clip silently against the pixmap bounds; there is
/// no out-of-bounds failure mode, matching raster-canvas semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    /// Creates a fully transparent pixmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA byte buffer (for encoding / export).
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Pixel view of the buffer.
    #[inline]
    pub fn pixels(&self) -> &[Rgba8] {
        bytemuck::cast_slice(&self.data)
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgba8] {
        bytemuck::cast_slice_mut(&mut self.data)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            None
        } else {
            Some(y as usize * self.width as usize + x as usize)
        }
    }

    /// Reads the pixel at `(x, y)`, or `None` when out of bounds.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba8> {
        self.index(x, y).map(|i| self.pixels()[i])
    }

    /// Overwrites the pixel at `(x, y)` without blending. Clipped.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, px: Rgba8) {
        if let Some(i) = self.index(x, y) {
            self.pixels_mut()[i] = px;
        }
    }

    /// Source-over blend of `src` onto the pixel at `(x, y)`. Clipped.
    pub fn blend_pixel(&mut self, x: i32, y: i32, src: Rgba8) {
        let Some(i) = self.index(x, y) else { return };
        if src.a == 0 {
            return;
        }
        if src.a == 255 {
            self.pixels_mut()[i] = src;
            return;
        }

        let dst = self.pixels()[i];
        let sa = src.a as f32 / 255.0;
        let da = dst.a as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            self.pixels_mut()[i] = Rgba8::TRANSPARENT;
            return;
        }

        let blend = |s: u8, d: u8| -> u8 {
            let s = s as f32 / 255.0;
            let d = d as f32 / 255.0;
            let c = (s * sa + d * da * (1.0 - sa)) / out_a;
            (c * 255.0).round().clamp(0.0, 255.0) as u8
        };

        self.pixels_mut()[i] = Rgba8::new(
            blend(src.r, dst.r),
            blend(src.g, dst.g),
            blend(src.b, dst.b),
            (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
        );
    }

    /// Source-over fills an axis-aligned pixel rectangle. Clipped.
    pub fn blend_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, src: Rgba8) {
        let (x0, y0, x1, y1) = self.clip_span(x0, y0, x1, y1);
        if src.a == 255 {
            // Opaque fast path: straight row overwrite.
            let w = self.width as usize;
            let pixels = self.pixels_mut();
            for y in y0..y1 {
                pixels[y as usize * w + x0 as usize..y as usize * w + x1 as usize].fill(src);
            }
            return;
        }
        for y in y0..y1 {
            for x in x0..x1 {
                self.blend_pixel(x, y, src);
            }
        }
    }

    /// Resets an axis-aligned pixel rectangle to transparent. Clipped.
    pub fn clear_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let (x0, y0, x1, y1) = self.clip_span(x0, y0, x1, y1);
        let w = self.width as usize;
        let pixels = self.pixels_mut();
        for y in y0..y1 {
            pixels[y as usize * w + x0 as usize..y as usize * w + x1 as usize]
                .fill(Rgba8::TRANSPARENT);
        }
    }

    /// Clamps a half-open pixel span to the buffer, normalizing inverted
    /// edges to empty.
    fn clip_span(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> (i32, i32, i32, i32) {
        let x0 = x0.clamp(0, self.width as i32);
        let y0 = y0.clamp(0, self.height as i32);
        let x1 = x1.clamp(x0, self.width as i32);
        let y1 = y1.clamp(y0, self.height as i32);
        (x0, y0, x1, y1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pixmap_is_transparent() {
        let pm = Pixmap::new(4, 4);
        assert_eq!(pm.pixel(0, 0), Some(Rgba8::TRANSPARENT));
        assert_eq!(pm.pixel(3, 3), Some(Rgba8::TRANSPARENT));
    }

    #[test]
    fn out_of_bounds_reads_are_none() {
        let pm = Pixmap::new(4, 4);
        assert_eq!(pm.pixel(-1, 0), None);
        assert_eq!(pm.pixel(4, 0), None);
        assert_eq!(pm.pixel(0, 4), None);
    }

    #[test]
    fn out_of_bounds_writes_are_clipped() {
        let mut pm = Pixmap::new(2, 2);
        pm.blend_pixel(-1, 0, Rgba8::opaque(255, 0, 0));
        pm.blend_pixel(2, 2, Rgba8::opaque(255, 0, 0));
        assert!(pm.pixels().iter().all(|p| *p == Rgba8::TRANSPARENT));
    }

    #[test]
    fn opaque_blend_overwrites_exactly() {
        let mut pm = Pixmap::new(2, 2);
        pm.blend_pixel(1, 1, Rgba8::opaque(10, 20, 30));
        assert_eq!(pm.pixel(1, 1), Some(Rgba8::opaque(10, 20, 30)));
    }

    #[test]
    fn half_alpha_over_transparent_keeps_color() {
        let mut pm = Pixmap::new(1, 1);
        pm.blend_pixel(0, 0, Rgba8::new(100, 50, 200, 128));
        let px = pm.pixel(0, 0).unwrap();
        assert_eq!((px.r, px.g, px.b, px.a), (100, 50, 200, 128));
    }

    #[test]
    fn blend_rect_clips_and_fills() {
        let mut pm = Pixmap::new(4, 4);
        pm.blend_rect(2, 2, 6, 6, Rgba8::opaque(1, 2, 3));
        assert_eq!(pm.pixel(1, 1), Some(Rgba8::TRANSPARENT));
        assert_eq!(pm.pixel(2, 2), Some(Rgba8::opaque(1, 2, 3)));
        assert_eq!(pm.pixel(3, 3), Some(Rgba8::opaque(1, 2, 3)));
    }

    #[test]
    fn clear_rect_resets_pixels() {
        let mut pm = Pixmap::new(4, 4);
        pm.blend_rect(0, 0, 4, 4, Rgba8::opaque(9, 9, 9));
        pm.clear_rect(1, 1, 3, 3);
        assert_eq!(pm.pixel(0, 0), Some(Rgba8::opaque(9, 9, 9)));
        assert_eq!(pm.pixel(1, 1), Some(Rgba8::TRANSPARENT));
        assert_eq!(pm.pixel(2, 2), Some(Rgba8::TRANSPARENT));
        assert_eq!(pm.pixel(3, 3), Some(Rgba8::opaque(9, 9, 9)));
    }
}
