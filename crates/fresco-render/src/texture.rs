use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use std::thread;

use fresco_surface::Bitmap;

/// Opaque handle to an image resource loading in the background.
///
/// [`Texture::load`] returns immediately; the pixel data becomes available
/// at some later point, or never (decode failure is logged and leaves the
/// handle permanently empty). There is no completion signal; callers that
/// need readiness must poll [`is_loaded`](Self::is_loaded) themselves
/// before drawing.
#[derive(Debug, Clone)]
pub struct Texture {
    path: PathBuf,
    slot: Arc<OnceLock<Bitmap>>,
}

impl Texture {
    /// Starts a background decode of the image at `path` and returns the
    /// handle immediately.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_owned();
        let slot = Arc::new(OnceLock::new());

        let thread_slot = Arc::clone(&slot);
        let thread_path = path.clone();
        thread::spawn(move || match image::open(&thread_path) {
            Ok(img) => {
                let rgba = img.to_rgba8();
                let (w, h) = rgba.dimensions();
                if let Some(bmp) = Bitmap::from_rgba8(w, h, rgba.into_raw()) {
                    let _ = thread_slot.set(bmp);
                }
            }
            Err(e) => log::warn!("texture decode failed for {}: {e}", thread_path.display()),
        });

        Self { path, slot }
    }

    /// A handle that is already loaded, bypassing the background decode.
    /// Mostly useful for tests and generated images.
    pub fn from_bitmap(bmp: Bitmap) -> Self {
        let slot = Arc::new(OnceLock::new());
        let _ = slot.set(bmp);
        Self { path: PathBuf::new(), slot }
    }

    /// The source path the handle was bound to at creation.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the pixel data has arrived yet.
    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.slot.get().is_some()
    }

    /// The decoded bitmap, `None` while the load is still in flight or
    /// after it failed.
    #[inline]
    pub fn bitmap(&self) -> Option<&Bitmap> {
        self.slot.get()
    }
}
