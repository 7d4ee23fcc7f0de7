//! Fresco renderer crate.
//!
//! A thin convenience layer over a [`fresco_surface::Canvas`]: primitive
//! drawing operations guarded by a uniform surface-validity check, small
//! color-space helpers, and fire-and-forget texture loading. Every drawing
//! operation maps onto a single context call and reports its outcome as an
//! [`Attempt`] sentinel instead of raising.

pub mod attempt;
pub mod color;
pub mod fill;
pub mod layer;
pub mod logging;
pub mod renderer;
pub mod texture;

pub use attempt::Attempt;
pub use color::{Rgb, gradient_color, hex_to_rgb, rgb_to_hex};
pub use fill::{Fill, GradientSpec};
pub use layer::Layer;
pub use renderer::Renderer;
pub use texture::Texture;
