//! Test-card demo: draws one of everything through the renderer and
//! writes the result to `fresco-testcard.png`.
//!
//! Usage: `fresco-studio [font.ttf] [texture.png]`
//!
//! Both arguments are optional: text falls back to the built-in face and
//! the texture blit falls back to a generated checkerboard.

use anyhow::{Context as _, Result};
use fresco_render::logging::{LoggingConfig, init_logging};
use fresco_render::{Attempt, Renderer, Rgb, Texture};
use fresco_surface::{Bitmap, Canvas, Rgba8};

const WIDTH: u32 = 320;
const HEIGHT: u32 = 200;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let font_path = std::env::args().nth(1);
    let texture_path = std::env::args().nth(2);

    let mut canvas = Canvas::new(WIDTH, HEIGHT);
    let mut family = "sans-serif";
    if let Some(path) = &font_path {
        let bytes = std::fs::read(path).with_context(|| format!("reading font {path}"))?;
        canvas
            .context_mut()
            .context("canvas has no context")?
            .load_font("body", &bytes)
            .map_err(|e| anyhow::anyhow!("{e}"))?;
        family = "body";
        log::info!("loaded font {path} as family \"body\"");
    }

    let texture = match &texture_path {
        Some(path) => Renderer::create_texture(path),
        None => Texture::from_bitmap(checkerboard(8, 5, 8)),
    };

    let mut renderer = Renderer::new(Some(canvas), true);
    let mut outcome = Attempt::Success;

    // Background wash: sky gradient down the full card.
    outcome = outcome.and(renderer.draw_gradient(
        0,
        0,
        WIDTH,
        HEIGHT,
        Rgb::new(16, 24, 48),
        Rgb::new(96, 144, 192),
        true,
    ));

    // Color bars.
    for (i, color) in ["#ff0000", "#00ff00", "#0000ff", "#ffff00", "#00ffff", "#ff00ff"]
        .iter()
        .enumerate()
    {
        outcome = outcome.and(renderer.draw_rect(16 + i as i32 * 48, 16, 40, 40, *color));
    }

    // A gradient fill routed through the rectangle call.
    if let Some(fill) = Renderer::create_gradient("#202020", "#d0d0d0", false) {
        outcome = outcome.and(renderer.draw_rect(16, 72, 288, 24, fill));
    }

    // Outline, diagonal line, and a dotted row of single pixels.
    outcome = outcome.and(renderer.draw_outline(16, 108, 288, 56, 2.0, "white"));
    outcome = outcome.and(renderer.draw_line(20.0, 160.0, 220.0, 112.0, 3.0, "orange"));
    for x in (20..300).step_by(8) {
        outcome = outcome.and(renderer.draw_pixel(x, 172, "#ffffff"));
    }

    // Fire-and-forget load: readiness is our problem, not the renderer's,
    // so poll briefly before drawing. The generated fallback is ready
    // immediately.
    for _ in 0..100 {
        if texture.is_loaded() {
            break;
        }
        std::thread::sleep(std::time::Duration::from_millis(10));
    }
    if texture.is_loaded() {
        outcome = outcome.and(renderer.draw_texture(232, 116, 64, 40, &texture));
    } else {
        log::warn!("texture never became ready, skipping blit");
    }

    let font = format!("24px {family}");
    outcome = outcome.and(renderer.draw_text(24.0, 150.0, "fresco", &font, "#ffffff"));
    outcome = outcome.and(renderer.draw_text_outline(120.0, 150.0, 1.0, "test card", &font, "yellow"));

    if outcome.is_fail() {
        log::warn!("some draw calls reported failure");
    }

    let canvas = renderer.canvas().context("renderer lost its canvas")?;
    let pixmap = canvas.context().context("canvas has no context")?.pixmap();
    let img = image::RgbaImage::from_raw(WIDTH, HEIGHT, pixmap.data().to_vec())
        .context("pixmap buffer size mismatch")?;
    img.save("fresco-testcard.png")?;
    log::info!("wrote fresco-testcard.png ({WIDTH}x{HEIGHT})");

    Ok(())
}

/// Magenta/black checkerboard used when no texture file is supplied.
fn checkerboard(cols: u32, rows: u32, cell: u32) -> Bitmap {
    let w = cols * cell;
    let h = rows * cell;
    let mut data = Vec::with_capacity((w * h * 4) as usize);
    for y in 0..h {
        for x in 0..w {
            let on = (x / cell + y / cell) % 2 == 0;
            let px = if on { Rgba8::opaque(255, 0, 255) } else { Rgba8::opaque(20, 20, 20) };
            data.extend_from_slice(&[px.r, px.g, px.b, px.a]);
        }
    }
    Bitmap::from_rgba8(w, h, data).unwrap_or_else(|| Bitmap::solid(w, h, Rgba8::opaque(255, 0, 255)))
}
