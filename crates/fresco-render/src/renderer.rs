use std::path::Path;

use fresco_surface::{Canvas, Context2d};

use crate::attempt::Attempt;
use crate::color::{self, Rgb, hex_to_rgb};
use crate::fill::{Fill, GradientSpec};
use crate::texture::Texture;

/// Thin drawing wrapper over a [`Canvas`].
///
/// Owns the surface for its whole life; every drawing operation re-checks
/// that the surface and its context are present before touching the
/// context, and reports its outcome as an [`Attempt`] instead of raising.
/// A renderer constructed without a surface is valid to hold; all of its
/// drawing operations simply fail.
///
/// With `pixel_perfect`, image smoothing is disabled at construction so
/// scaled pixel art stays crisp.
pub struct Renderer {
    canvas: Option<Canvas>,
    pixel_perfect: bool,
}

impl Renderer {
    /// Binds the surface. Construction cannot fail visibly: a missing
    /// surface yields a renderer whose [`validate`](Self::validate) fails.
    pub fn new(canvas: Option<Canvas>, pixel_perfect: bool) -> Self {
        let mut renderer = Self { canvas, pixel_perfect };
        if pixel_perfect {
            if let Some(ctx) = renderer.context_mut() {
                ctx.set_smoothing(false);
            }
        }
        renderer
    }

    #[inline]
    pub fn pixel_perfect(&self) -> bool {
        self.pixel_perfect
    }

    #[inline]
    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    #[inline]
    pub fn canvas_mut(&mut self) -> Option<&mut Canvas> {
        self.canvas.as_mut()
    }

    #[inline]
    fn context_mut(&mut self) -> Option<&mut Context2d> {
        self.canvas.as_mut().and_then(Canvas::context_mut)
    }

    /// Checks that the surface and its context are both present.
    ///
    /// Called at the top of every drawing operation; exposed so callers
    /// can pre-check, though they never have to.
    pub fn validate(&self) -> Attempt {
        let Some(canvas) = self.canvas.as_ref() else {
            log::error!("no canvas present for drawing");
            return Attempt::Fail;
        };
        if canvas.context().is_none() {
            log::error!("no context present for drawing");
            return Attempt::Fail;
        }
        Attempt::Success
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Erases the full surface area.
    pub fn clear(&mut self) -> Attempt {
        if self.validate().is_fail() {
            return Attempt::Fail;
        }
        let Some(canvas) = self.canvas.as_mut() else {
            return Attempt::Fail;
        };
        let (w, h) = (canvas.width() as f32, canvas.height() as f32);
        let Some(ctx) = canvas.context_mut() else {
            return Attempt::Fail;
        };
        ctx.clear_rect(0.0, 0.0, w, h);
        Attempt::Success
    }

    /// Fills a single pixel at `(x, y)` with a style-string color.
    pub fn draw_pixel(&mut self, x: i32, y: i32, color: &str) -> Attempt {
        if self.validate().is_fail() {
            return Attempt::Fail;
        }
        let Some(ctx) = self.context_mut() else {
            return Attempt::Fail;
        };
        ctx.set_fill_style(color);
        ctx.fill_rect(x as f32, y as f32, 1.0, 1.0);
        Attempt::Success
    }

    /// Fills a `w × h` rectangle.
    ///
    /// A [`Fill::Gradient`] argument delegates to
    /// [`draw_gradient`](Self::draw_gradient) instead of filling flat.
    pub fn draw_rect(&mut self, x: i32, y: i32, w: u32, h: u32, fill: impl Into<Fill>) -> Attempt {
        if self.validate().is_fail() {
            return Attempt::Fail;
        }
        match fill.into() {
            Fill::Gradient(spec) => {
                self.draw_gradient(x, y, w, h, spec.start, spec.end, spec.height_wise)
            }
            Fill::Flat(style) => {
                let Some(ctx) = self.context_mut() else {
                    return Attempt::Fail;
                };
                ctx.set_fill_style(&style);
                ctx.fill_rect(x as f32, y as f32, w as f32, h as f32);
                Attempt::Success
            }
        }
    }

    /// Fakes a linear gradient as `a − 1` one-pixel strips across the long
    /// axis `a` (rows when `height_wise`, columns otherwise), strip `i`
    /// colored at interpolation fraction `i / a`.
    ///
    /// The final strip (index `a − 1`) is never drawn, leaving one edge of
    /// the rectangle unfilled. Long-standing observable behavior; callers
    /// compensate, so it stays.
    ///
    /// The result is the AND over all strip outcomes; strips already drawn
    /// stay visible even when the overall outcome is `Fail`.
    pub fn draw_gradient(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        start: Rgb,
        end: Rgb,
        height_wise: bool,
    ) -> Attempt {
        if self.validate().is_fail() {
            return Attempt::Fail;
        }
        let a = if height_wise { h } else { w };
        let (strip_w, strip_h) = if height_wise { (w, 1) } else { (1, h) };

        let mut result = Attempt::Success;
        for i in 0..a.saturating_sub(1) {
            let t = i as f32 / a as f32;
            let col = color::gradient_color(start, end, t);
            let (sx, sy) = if height_wise {
                (x, y + i as i32)
            } else {
                (x + i as i32, y)
            };
            result = result.and(self.draw_rect(sx, sy, strip_w, strip_h, col.as_str()));
        }
        result
    }

    /// Strokes a straight segment between the two points.
    ///
    /// The width travels to the context in its textual form; the
    /// line-width attribute is text-bearing in this binding.
    pub fn draw_line(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        color: &str,
    ) -> Attempt {
        if self.validate().is_fail() {
            return Attempt::Fail;
        }
        let Some(ctx) = self.context_mut() else {
            return Attempt::Fail;
        };
        ctx.begin_path();
        ctx.move_to(x1, y1);
        ctx.line_to(x2, y2);
        ctx.set_line_width_text(&width.to_string());
        ctx.set_stroke_style(color);
        ctx.stroke();
        Attempt::Success
    }

    /// Strokes a rectangle border only.
    pub fn draw_outline(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        stroke_width: f32,
        color: &str,
    ) -> Attempt {
        if self.validate().is_fail() {
            return Attempt::Fail;
        }
        let Some(ctx) = self.context_mut() else {
            return Attempt::Fail;
        };
        ctx.set_stroke_style(color);
        ctx.set_line_width(stroke_width);
        ctx.begin_path();
        ctx.rect(x as f32, y as f32, w as f32, h as f32);
        ctx.stroke();
        Attempt::Success
    }

    /// Draws the texture scaled into the target rectangle.
    ///
    /// A handle whose load has not finished (or failed) blits nothing;
    /// readiness is the caller's coordination problem and is not
    /// validated here. The operation still reports `Success`.
    pub fn draw_texture(&mut self, x: i32, y: i32, w: u32, h: u32, texture: &Texture) -> Attempt {
        if self.validate().is_fail() {
            return Attempt::Fail;
        }
        let Some(bmp) = texture.bitmap() else {
            return Attempt::Success;
        };
        let Some(ctx) = self.context_mut() else {
            return Attempt::Fail;
        };
        ctx.draw_bitmap(bmp, x as f32, y as f32, w as f32, h as f32);
        Attempt::Success
    }

    /// Fills glyph outlines at baseline `(x, y)`.
    ///
    /// `font` is a `"<size>px <family>"` description string.
    pub fn draw_text(&mut self, x: f32, y: f32, text: &str, font: &str, color: &str) -> Attempt {
        if self.validate().is_fail() {
            return Attempt::Fail;
        }
        let Some(ctx) = self.context_mut() else {
            return Attempt::Fail;
        };
        ctx.set_font(font);
        ctx.set_fill_style(color);
        ctx.fill_text(text, x, y);
        Attempt::Success
    }

    /// Strokes glyph outlines instead of filling.
    pub fn draw_text_outline(
        &mut self,
        x: f32,
        y: f32,
        stroke_width: f32,
        text: &str,
        font: &str,
        color: &str,
    ) -> Attempt {
        if self.validate().is_fail() {
            return Attempt::Fail;
        }
        let Some(ctx) = self.context_mut() else {
            return Attempt::Fail;
        };
        ctx.set_font(font);
        ctx.set_stroke_style(color);
        ctx.set_line_width(stroke_width);
        ctx.stroke_text(text, x, y);
        Attempt::Success
    }

    // ── resource & color helpers (no validation gate) ─────────────────────

    /// Allocates a texture handle and begins the background load; returns
    /// before the load completes.
    pub fn create_texture(path: impl AsRef<Path>) -> Texture {
        Texture::load(path)
    }

    /// Decodes both hex endpoints into a gradient fill.
    ///
    /// `None` when either string fails [`hex_to_rgb`]; typed channels
    /// cannot carry a half-decoded descriptor.
    pub fn create_gradient(hex_start: &str, hex_end: &str, height_wise: bool) -> Option<Fill> {
        Some(Fill::Gradient(GradientSpec::new(
            hex_to_rgb(hex_start)?,
            hex_to_rgb(hex_end)?,
            height_wise,
        )))
    }
}
