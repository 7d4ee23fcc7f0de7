use std::fmt;
use std::sync::OnceLock;

/// Family name the built-in face is registered under.
pub const DEFAULT_FAMILY: &str = "sans-serif";

// DejaVu Sans Mono, Bitstream Vera license (see assets/LICENSE-DejaVu.txt).
static DEFAULT_FACE_BYTES: &[u8] = include_bytes!("../assets/DejaVuSansMono.ttf");
static DEFAULT_FACE: OnceLock<Option<fontdue::Font>> = OnceLock::new();

/// The bundled default face, parsed once on first use.
fn default_face() -> Option<&'static fontdue::Font> {
    DEFAULT_FACE
        .get_or_init(|| {
            match fontdue::Font::from_bytes(DEFAULT_FACE_BYTES, fontdue::FontSettings::default()) {
                Ok(font) => Some(font),
                Err(e) => {
                    log::warn!("built-in font face failed to parse: {e}");
                    None
                }
            }
        })
        .as_ref()
}

/// Error returned by [`FontStore::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Parsed font-description string, `"<size>px <family>"`.
///
/// This is the syntax the context's font attribute accepts; assignments
/// that do not parse are ignored, keeping the previous font.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub size: f32,
    pub family: String,
}

impl FontSpec {
    /// Parses e.g. `"16px mono"` or `"12.5px Fira Sans"`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let (size_part, family) = s.split_once(char::is_whitespace)?;
        let size: f32 = size_part.strip_suffix("px")?.parse().ok()?;
        if !size.is_finite() || size <= 0.0 {
            return None;
        }
        let family = family.trim();
        if family.is_empty() {
            return None;
        }
        Some(Self { size, family: family.to_owned() })
    }
}

/// Owns the fonts available to a drawing context, keyed by family name.
///
/// Fonts are immutable after loading. Text operations look families up
/// here at draw time; a family with no loaded face resolves to the
/// built-in [`DEFAULT_FAMILY`] face, so text always renders with
/// something, matching canvas font-matching behavior.
#[derive(Default)]
pub struct FontStore {
    fonts: Vec<(String, fontdue::Font)>,
}

impl FontStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes under
    /// `family`. Reloading an existing family replaces it.
    pub fn load_font(&mut self, family: &str, bytes: &[u8]) -> Result<(), FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        if let Some(slot) = self.fonts.iter_mut().find(|(f, _)| f == family) {
            slot.1 = font;
        } else {
            self.fonts.push((family.to_owned(), font));
        }
        Ok(())
    }

    /// Resolves a family to a face, falling back to the built-in default
    /// face when the family has no loaded font.
    pub(crate) fn get(&self, family: &str) -> Option<&fontdue::Font> {
        self.fonts
            .iter()
            .find(|(f, _)| f == family)
            .map(|(_, f)| f)
            .or_else(|| default_face())
    }

    /// Whether any face has been loaded explicitly. The built-in default
    /// face does not count.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}
