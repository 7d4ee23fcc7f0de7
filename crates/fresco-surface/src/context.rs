use crate::bitmap::Bitmap;
use crate::path::{Path, PathCmd};
use crate::pixmap::{Pixmap, Rgba8};
use crate::style::Style;
use crate::text::{DEFAULT_FAMILY, FontLoadError, FontSpec, FontStore};

/// Stateful 2D paint API over a [`Pixmap`].
///
/// State follows canvas conventions: fill/stroke styles and the font are
/// assigned as strings, and assignments that do not parse are ignored,
/// keeping the previous value. Geometry is given in logical pixels with a
/// top-left origin; axis-aligned fills snap edges to the pixel grid, while
/// strokes and glyphs are rasterized with edge coverage.
///
/// The smoothing flag only affects [`draw_bitmap`](Self::draw_bitmap)
/// (nearest vs. bilinear sampling), as with a canvas's image-smoothing
/// toggle.
pub struct Context2d {
    pixmap: Pixmap,
    fill_style: Style,
    stroke_style: Style,
    line_width: f32,
    font: Option<FontSpec>,
    smoothing: bool,
    fonts: FontStore,
    path: Path,
}

impl Context2d {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixmap: Pixmap::new(width, height),
            fill_style: Style::BLACK,
            stroke_style: Style::BLACK,
            line_width: 1.0,
            // Canvas default: 10px in the default family.
            font: Some(FontSpec { size: 10.0, family: DEFAULT_FAMILY.to_owned() }),
            smoothing: true,
            fonts: FontStore::new(),
            path: Path::new(),
        }
    }

    #[inline]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    // ── paint state ───────────────────────────────────────────────────────

    /// Assigns the fill style from a style string. Invalid strings are
    /// ignored and the previous style kept.
    pub fn set_fill_style(&mut self, style: &str) {
        match Style::parse(style) {
            Some(s) => self.fill_style = s,
            None => log::debug!("ignoring invalid fill style {style:?}"),
        }
    }

    /// Assigns the stroke style from a style string. Invalid strings are
    /// ignored.
    pub fn set_stroke_style(&mut self, style: &str) {
        match Style::parse(style) {
            Some(s) => self.stroke_style = s,
            None => log::debug!("ignoring invalid stroke style {style:?}"),
        }
    }

    /// Sets the stroke width. Non-finite or non-positive values are
    /// ignored.
    pub fn set_line_width(&mut self, width: f32) {
        if width.is_finite() && width > 0.0 {
            self.line_width = width;
        }
    }

    /// Sets the stroke width from its textual form.
    ///
    /// The line-width attribute is text-bearing in this binding: callers
    /// hand over the number already formatted as a string. Strings that do
    /// not parse to a finite positive number are ignored.
    pub fn set_line_width_text(&mut self, width: &str) {
        match width.trim().parse::<f32>() {
            Ok(w) => self.set_line_width(w),
            Err(_) => log::debug!("ignoring invalid line width {width:?}"),
        }
    }

    #[inline]
    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    #[inline]
    pub fn set_smoothing(&mut self, on: bool) {
        self.smoothing = on;
    }

    #[inline]
    pub fn smoothing(&self) -> bool {
        self.smoothing
    }

    /// Assigns the font from a `"<size>px <family>"` description string.
    /// Invalid strings are ignored.
    pub fn set_font(&mut self, font: &str) {
        match FontSpec::parse(font) {
            Some(spec) => self.font = Some(spec),
            None => log::debug!("ignoring invalid font description {font:?}"),
        }
    }

    /// Loads a font face into this context's store under `family`.
    pub fn load_font(&mut self, family: &str, bytes: &[u8]) -> Result<(), FontLoadError> {
        self.fonts.load_font(family, bytes)
    }

    // ── rectangles ────────────────────────────────────────────────────────

    /// Fills an axis-aligned rectangle with the current fill style.
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let (x0, y0, x1, y1) = snap_rect(x, y, w, h);
        self.pixmap.blend_rect(x0, y0, x1, y1, self.fill_style.color());
    }

    /// Strokes an axis-aligned rectangle border with the current stroke
    /// style and line width. The stroke is centered on the border.
    pub fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        for (x1, y1, x2, y2) in rect_edges(x, y, w, h) {
            self.stroke_segment(x1, y1, x2, y2);
        }
    }

    /// Resets an axis-aligned rectangle to transparent.
    pub fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let (x0, y0, x1, y1) = snap_rect(x, y, w, h);
        self.pixmap.clear_rect(x0, y0, x1, y1);
    }

    // ── paths ─────────────────────────────────────────────────────────────

    pub fn begin_path(&mut self) {
        self.path.clear();
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.path.push(PathCmd::MoveTo(x, y));
    }

    pub fn line_to(&mut self, x: f32, y: f32) {
        self.path.push(PathCmd::LineTo(x, y));
    }

    /// Appends a closed rectangle subpath.
    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.path.push(PathCmd::Rect(x, y, w, h));
    }

    /// Strokes the current path with the current stroke style and line
    /// width. The path is kept, as with a canvas (only `begin_path`
    /// clears it).
    pub fn stroke(&mut self) {
        for (x1, y1, x2, y2) in self.path.segments() {
            self.stroke_segment(x1, y1, x2, y2);
        }
    }

    /// Rasterizes one stroked segment by distance-to-segment coverage.
    fn stroke_segment(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let color = self.stroke_style.color();
        if color.a == 0 {
            return;
        }
        let half = self.line_width * 0.5;
        let pad = half + 1.0;
        let px0 = (x1.min(x2) - pad).floor() as i32;
        let py0 = (y1.min(y2) - pad).floor() as i32;
        let px1 = (x1.max(x2) + pad).ceil() as i32;
        let py1 = (y1.max(y2) + pad).ceil() as i32;

        for py in py0..py1 {
            for px in px0..px1 {
                let d = dist_to_segment(px as f32 + 0.5, py as f32 + 0.5, x1, y1, x2, y2);
                let coverage = (half + 0.5 - d).clamp(0.0, 1.0);
                if coverage <= 0.0 {
                    continue;
                }
                let a = (coverage * color.a as f32).round() as u8;
                self.pixmap
                    .blend_pixel(px, py, Rgba8::new(color.r, color.g, color.b, a));
            }
        }
    }

    // ── blits ─────────────────────────────────────────────────────────────

    /// Blits `bmp` scaled into the destination rectangle.
    ///
    /// Sampling is bilinear while smoothing is enabled, nearest-neighbor
    /// otherwise (pixel-art path).
    pub fn draw_bitmap(&mut self, bmp: &Bitmap, x: f32, y: f32, w: f32, h: f32) {
        if bmp.is_empty() {
            return;
        }
        let (x0, y0, x1, y1) = snap_rect(x, y, w, h);
        let dw = (x1 - x0) as f32;
        let dh = (y1 - y0) as f32;
        if dw <= 0.0 || dh <= 0.0 {
            return;
        }
        let sx = bmp.width() as f32 / dw;
        let sy = bmp.height() as f32 / dh;

        for dy in y0..y1 {
            for dx in x0..x1 {
                let u = (dx - x0) as f32 + 0.5;
                let v = (dy - y0) as f32 + 0.5;
                let src = if self.smoothing {
                    sample_bilinear(bmp, u * sx - 0.5, v * sy - 0.5)
                } else {
                    bmp.texel_clamped((u * sx).floor() as i64, (v * sy).floor() as i64)
                };
                self.pixmap.blend_pixel(dx, dy, src);
            }
        }
    }

    // ── text ──────────────────────────────────────────────────────────────

    /// Fills glyph outlines with the current fill style. Baseline at
    /// `(x, y)`.
    ///
    /// Families without a loaded face resolve to the built-in default
    /// face, so this paints on a fresh context with no fonts loaded.
    pub fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        let Some(spec) = self.font.clone() else {
            log::debug!("fill_text: no font set");
            return;
        };
        let Some(font) = self.fonts.get(&spec.family) else {
            log::debug!("fill_text: font family {:?} not loaded", spec.family);
            return;
        };
        let color = self.fill_style.color();
        let mut pen = x;

        for ch in text.chars() {
            let (metrics, coverage) = font.rasterize(ch, spec.size);
            let left = (pen + metrics.xmin as f32).round() as i32;
            let top = (y - (metrics.height as i32 + metrics.ymin) as f32).round() as i32;
            for gy in 0..metrics.height {
                for gx in 0..metrics.width {
                    let cov = coverage[gy * metrics.width + gx];
                    if cov == 0 {
                        continue;
                    }
                    let a = (cov as f32 * color.a as f32 / 255.0).round() as u8;
                    self.pixmap.blend_pixel(
                        left + gx as i32,
                        top + gy as i32,
                        Rgba8::new(color.r, color.g, color.b, a),
                    );
                }
            }
            pen += metrics.advance_width;
        }
    }

    /// Strokes glyph outlines with the current stroke style and line
    /// width. Baseline at `(x, y)`.
    ///
    /// The outline is the morphological edge of the glyph coverage mask:
    /// a covered cell is on the outline when any cell within the stroke
    /// radius is uncovered.
    pub fn stroke_text(&mut self, text: &str, x: f32, y: f32) {
        let Some(spec) = self.font.clone() else {
            log::debug!("stroke_text: no font set");
            return;
        };
        let Some(font) = self.fonts.get(&spec.family) else {
            log::debug!("stroke_text: font family {:?} not loaded", spec.family);
            return;
        };
        let color = self.stroke_style.color();
        let radius = ((self.line_width * 0.5).ceil() as i32).max(1);
        let mut pen = x;

        for ch in text.chars() {
            let (metrics, coverage) = font.rasterize(ch, spec.size);
            let left = (pen + metrics.xmin as f32).round() as i32;
            let top = (y - (metrics.height as i32 + metrics.ymin) as f32).round() as i32;
            let covered = |gx: i32, gy: i32| -> bool {
                gx >= 0
                    && gy >= 0
                    && (gx as usize) < metrics.width
                    && (gy as usize) < metrics.height
                    && coverage[gy as usize * metrics.width + gx as usize] >= 128
            };
            for gy in 0..metrics.height as i32 {
                for gx in 0..metrics.width as i32 {
                    if !covered(gx, gy) {
                        continue;
                    }
                    let mut on_edge = false;
                    'scan: for ny in gy - radius..=gy + radius {
                        for nx in gx - radius..=gx + radius {
                            if !covered(nx, ny) {
                                on_edge = true;
                                break 'scan;
                            }
                        }
                    }
                    if on_edge {
                        self.pixmap.blend_pixel(left + gx, top + gy, color);
                    }
                }
            }
            pen += metrics.advance_width;
        }
    }
}

/// Rounds a geometric rectangle to a half-open pixel span.
fn snap_rect(x: f32, y: f32, w: f32, h: f32) -> (i32, i32, i32, i32) {
    (
        x.round() as i32,
        y.round() as i32,
        (x + w).round() as i32,
        (y + h).round() as i32,
    )
}

fn rect_edges(x: f32, y: f32, w: f32, h: f32) -> [(f32, f32, f32, f32); 4] {
    [
        (x, y, x + w, y),
        (x + w, y, x + w, y + h),
        (x + w, y + h, x, y + h),
        (x, y + h, x, y),
    ]
}

fn dist_to_segment(px: f32, py: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let len2 = dx * dx + dy * dy;
    let t = if len2 <= f32::EPSILON {
        0.0
    } else {
        (((px - x1) * dx + (py - y1) * dy) / len2).clamp(0.0, 1.0)
    };
    let cx = x1 + t * dx;
    let cy = y1 + t * dy;
    ((px - cx) * (px - cx) + (py - cy) * (py - cy)).sqrt()
}

fn sample_bilinear(bmp: &Bitmap, fx: f32, fy: f32) -> Rgba8 {
    let x0 = fx.floor();
    let y0 = fy.floor();
    let tx = fx - x0;
    let ty = fy - y0;
    let x0 = x0 as i64;
    let y0 = y0 as i64;

    let t00 = bmp.texel_clamped(x0, y0);
    let t10 = bmp.texel_clamped(x0 + 1, y0);
    let t01 = bmp.texel_clamped(x0, y0 + 1);
    let t11 = bmp.texel_clamped(x0 + 1, y0 + 1);

    let lerp2 = |a: u8, b: u8, c: u8, d: u8| -> u8 {
        let top = a as f32 + (b as f32 - a as f32) * tx;
        let bot = c as f32 + (d as f32 - c as f32) * tx;
        (top + (bot - top) * ty).round().clamp(0.0, 255.0) as u8
    };

    Rgba8::new(
        lerp2(t00.r, t10.r, t01.r, t11.r),
        lerp2(t00.g, t10.g, t01.g, t11.g),
        lerp2(t00.b, t10.b, t01.b, t11.b),
        lerp2(t00.a, t10.a, t01.a, t11.a),
    )
}

/// Host drawing surface: readable dimensions plus an optional paint
/// context.
///
/// [`detached`](Self::detached) builds a surface whose context acquisition
/// fails, for exercising caller-side validation paths.
pub struct Canvas {
    width: u32,
    height: u32,
    context: Option<Context2d>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            context: Some(Context2d::new(width, height)),
        }
    }

    /// A surface with no acquirable context.
    pub fn detached(width: u32, height: u32) -> Self {
        Self { width, height, context: None }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn context(&self) -> Option<&Context2d> {
        self.context.as_ref()
    }

    #[inline]
    pub fn context_mut(&mut self) -> Option<&mut Context2d> {
        self.context.as_mut()
    }

    /// Pixel readback through the context, `None` when detached or out of
    /// bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba8> {
        self.context.as_ref().and_then(|c| c.pixmap().pixel(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── paint state ───────────────────────────────────────────────────────

    #[test]
    fn invalid_fill_style_is_ignored() {
        let mut ctx = Context2d::new(4, 4);
        ctx.set_fill_style("#0000ff");
        ctx.set_fill_style("definitely-not-a-color");
        ctx.fill_rect(0.0, 0.0, 4.0, 4.0);
        assert_eq!(ctx.pixmap().pixel(1, 1), Some(Rgba8::opaque(0, 0, 255)));
    }

    #[test]
    fn invalid_line_width_text_is_ignored() {
        let mut ctx = Context2d::new(4, 4);
        ctx.set_line_width_text("3");
        assert_eq!(ctx.line_width(), 3.0);
        ctx.set_line_width_text("wide");
        assert_eq!(ctx.line_width(), 3.0);
        ctx.set_line_width_text("-2");
        assert_eq!(ctx.line_width(), 3.0);
    }

    // ── rectangles ────────────────────────────────────────────────────────

    #[test]
    fn fill_rect_covers_exact_pixel_span() {
        let mut ctx = Context2d::new(8, 8);
        ctx.set_fill_style("#ff0000");
        ctx.fill_rect(2.0, 2.0, 3.0, 3.0);
        assert_eq!(ctx.pixmap().pixel(1, 1), Some(Rgba8::TRANSPARENT));
        assert_eq!(ctx.pixmap().pixel(2, 2), Some(Rgba8::opaque(255, 0, 0)));
        assert_eq!(ctx.pixmap().pixel(4, 4), Some(Rgba8::opaque(255, 0, 0)));
        assert_eq!(ctx.pixmap().pixel(5, 5), Some(Rgba8::TRANSPARENT));
    }

    #[test]
    fn clear_rect_erases_fill() {
        let mut ctx = Context2d::new(4, 4);
        ctx.set_fill_style("white");
        ctx.fill_rect(0.0, 0.0, 4.0, 4.0);
        ctx.clear_rect(1.0, 1.0, 2.0, 2.0);
        assert_eq!(ctx.pixmap().pixel(0, 0), Some(Rgba8::opaque(255, 255, 255)));
        assert_eq!(ctx.pixmap().pixel(1, 1), Some(Rgba8::TRANSPARENT));
    }

    // ── strokes ───────────────────────────────────────────────────────────

    #[test]
    fn stroked_horizontal_line_covers_center_rows() {
        let mut ctx = Context2d::new(10, 10);
        ctx.set_stroke_style("#ff0000");
        ctx.set_line_width(3.0);
        ctx.begin_path();
        ctx.move_to(0.0, 5.0);
        ctx.line_to(9.0, 5.0);
        ctx.stroke();
        // Geometric line at y=5 with width 3 covers rows 4 and 5 fully.
        assert_eq!(ctx.pixmap().pixel(4, 4), Some(Rgba8::opaque(255, 0, 0)));
        assert_eq!(ctx.pixmap().pixel(4, 5), Some(Rgba8::opaque(255, 0, 0)));
        assert_eq!(ctx.pixmap().pixel(4, 8), Some(Rgba8::TRANSPARENT));
    }

    #[test]
    fn stroke_rect_touches_all_edges() {
        let mut ctx = Context2d::new(12, 12);
        ctx.set_stroke_style("lime");
        ctx.set_line_width(2.0);
        ctx.stroke_rect(2.0, 2.0, 8.0, 8.0);
        let lim = Rgba8::opaque(0, 255, 0);
        assert_eq!(ctx.pixmap().pixel(6, 2), Some(lim)); // top edge
        assert_eq!(ctx.pixmap().pixel(6, 9), Some(lim)); // bottom edge
        assert_eq!(ctx.pixmap().pixel(2, 6), Some(lim)); // left edge
        assert_eq!(ctx.pixmap().pixel(9, 6), Some(lim)); // right edge
        assert_eq!(ctx.pixmap().pixel(6, 6), Some(Rgba8::TRANSPARENT)); // interior
    }

    // ── blits ─────────────────────────────────────────────────────────────

    #[test]
    fn nearest_blit_scales_quadrants() {
        let mut data = Vec::new();
        for color in [
            Rgba8::opaque(255, 0, 0),
            Rgba8::opaque(0, 255, 0),
            Rgba8::opaque(0, 0, 255),
            Rgba8::opaque(255, 255, 255),
        ] {
            data.extend_from_slice(&[color.r, color.g, color.b, color.a]);
        }
        let bmp = Bitmap::from_rgba8(2, 2, data).unwrap();

        let mut ctx = Context2d::new(4, 4);
        ctx.set_smoothing(false);
        ctx.draw_bitmap(&bmp, 0.0, 0.0, 4.0, 4.0);
        assert_eq!(ctx.pixmap().pixel(0, 0), Some(Rgba8::opaque(255, 0, 0)));
        assert_eq!(ctx.pixmap().pixel(3, 0), Some(Rgba8::opaque(0, 255, 0)));
        assert_eq!(ctx.pixmap().pixel(0, 3), Some(Rgba8::opaque(0, 0, 255)));
        assert_eq!(ctx.pixmap().pixel(3, 3), Some(Rgba8::opaque(255, 255, 255)));
    }

    #[test]
    fn bilinear_blit_keeps_corner_colors() {
        let bmp = Bitmap::solid(2, 2, Rgba8::opaque(40, 80, 120));
        let mut ctx = Context2d::new(4, 4);
        ctx.draw_bitmap(&bmp, 0.0, 0.0, 4.0, 4.0);
        assert_eq!(ctx.pixmap().pixel(0, 0), Some(Rgba8::opaque(40, 80, 120)));
        assert_eq!(ctx.pixmap().pixel(3, 3), Some(Rgba8::opaque(40, 80, 120)));
    }

    // ── text ──────────────────────────────────────────────────────────────

    #[test]
    fn fill_text_paints_with_builtin_face() {
        let mut ctx = Context2d::new(32, 32);
        ctx.set_font("16px sans-serif");
        ctx.set_fill_style("white");
        ctx.fill_text("hi", 2.0, 24.0);
        assert!(ctx.pixmap().pixels().iter().any(|p| p.a > 0));
    }

    #[test]
    fn unloaded_family_falls_back_to_builtin_face() {
        let mut ctx = Context2d::new(32, 32);
        ctx.set_font("16px mono");
        ctx.set_stroke_style("white");
        ctx.stroke_text("hi", 2.0, 24.0);
        assert!(ctx.pixmap().pixels().iter().any(|p| p.a > 0));
    }

    // ── canvas ────────────────────────────────────────────────────────────

    #[test]
    fn detached_canvas_has_no_context_but_keeps_dimensions() {
        let canvas = Canvas::detached(64, 32);
        assert!(canvas.context().is_none());
        assert_eq!(canvas.width(), 64);
        assert_eq!(canvas.height(), 32);
        assert_eq!(canvas.pixel(0, 0), None);
    }
}
