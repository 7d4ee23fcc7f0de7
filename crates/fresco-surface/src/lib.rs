//! Fresco surface crate.
//!
//! This crate owns the host drawing surface the renderer layer draws on:
//! a CPU pixel store, canvas-style paint values, path state, font
//! rasterization, and the stateful [`Context2d`] paint API wrapped by
//! [`Canvas`].

pub mod bitmap;
pub mod context;
pub mod path;
pub mod pixmap;
pub mod style;
pub mod text;

pub use bitmap::Bitmap;
pub use context::{Canvas, Context2d};
pub use pixmap::{Pixmap, Rgba8};
pub use style::Style;
pub use text::{DEFAULT_FAMILY, FontLoadError, FontSpec, FontStore};
