// Format-agnostic repository of textures decoded by the (out-of-scope)
// asset loader. The renderer and world logic interact through
// `TextureId` only.

use std::collections::HashMap;

use crate::pixel::{Rgba, rgba};

/// Runtime handle for a texture in this bank.
///
/// *Guaranteed* to remain stable for the lifetime of the bank.
pub type TextureId = u16;

/// `TextureId` whose pixels are the magenta "missing asset" fallback.
/// Always = 0 because `TextureBank::new()` inserts it first.
pub const NO_TEXTURE: TextureId = 0;

/// CPU-side storage: packed RGBA8 (see [`crate::pixel`]) in row-major order.
/// The loader fills the pixel vector; a `Tile::Textured`/sprite only ever
/// stores the [`TextureId`], never a copy of the pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    pub w: usize,
    pub h: usize,
    pub pixels: Vec<Rgba>,
}

/// Things that can go wrong when using the bank.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextureError {
    /// Attempted to insert a second texture with an existing name.
    #[error("texture name `{0}` already present in bank")]
    Duplicate(String),

    /// Requested ID is outside `0 .. bank.len()`.
    #[error("texture id {0} out of range")]
    BadId(TextureId),
}

/// A palette-agnostic, format-agnostic cache of textures.
///
/// * Does **not** know about PNG, the filesystem, or the network — that's
///   the (out-of-scope) asset loader's job.
/// * Stores exactly one copy of every name.
/// * ID **0** is always the magenta "missing" checkerboard, the
///   substitute used whenever an asset-load failure must not crash a
///   frame.
///
/// **Thread-safety:** access `TextureBank` from a single thread or wrap it
/// in `RwLock`; the struct itself is not `Sync`.
pub struct TextureBank {
    by_name: HashMap<String, TextureId>,
    data: Vec<Texture>,
}

impl TextureBank {
    /// Create an empty bank with a mandatory *missing* texture used as
    /// fallback, inserted under the fixed name `"MISSING"` with handle **0**.
    pub fn new(missing_tex: Texture) -> Self {
        let mut by_name = HashMap::new();
        by_name.insert("MISSING".into(), NO_TEXTURE);
        Self {
            by_name,
            data: vec![missing_tex],
        }
    }

    /// Convenience magenta/black checkerboard, 8x8, used when no asset
    /// loader is wired up (tests, the scenario fixtures in `tests/`).
    pub fn default_with_checker() -> Self {
        let mut pix = vec![0 as Rgba; 8 * 8];
        for y in 0..8 {
            for x in 0..8 {
                pix[y * 8 + x] = if (x ^ y) & 1 == 0 {
                    rgba(255, 0, 255, 255)
                } else {
                    rgba(20, 20, 20, 255)
                };
            }
        }
        Self::new(Texture {
            w: 8,
            h: 8,
            pixels: pix,
        })
    }

    /// Number of textures stored (including the "missing" one).
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.len() == 1
    }

    /// Obtain the id for a *loaded* texture by name.
    pub fn id(&self, name: &str) -> Option<TextureId> {
        self.by_name.get(name).copied()
    }

    /// Fallback-safe query: unknown names resolve to the checkerboard id.
    pub fn id_or_missing(&self, name: &str) -> TextureId {
        self.id(name).unwrap_or(NO_TEXTURE)
    }

    /// Borrow a texture by id, with bounds-checking.
    pub fn texture(&self, id: TextureId) -> Result<&Texture, TextureError> {
        self.data.get(id as usize).ok_or(TextureError::BadId(id))
    }

    /// Mutable borrow (e.g. for post-load mip-generation).
    pub fn texture_mut(&mut self, id: TextureId) -> Result<&mut Texture, TextureError> {
        self.data
            .get_mut(id as usize)
            .ok_or(TextureError::BadId(id))
    }

    /// Insert a texture under `name`, returning its newly assigned id, or
    /// `Duplicate` if the name is already taken.
    pub fn insert<S: Into<String>>(
        &mut self,
        name: S,
        tex: Texture,
    ) -> Result<TextureId, TextureError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(TextureError::Duplicate(name));
        }
        let id = self.data.len() as TextureId;
        self.data.push(tex);
        self.by_name.insert(name, id);
        Ok(id)
    }

    /// Resolve `id`, logging and substituting the "missing" texture on a
    /// bad handle instead of propagating the error — used by render paths
    /// that must never fail a frame.
    pub fn texture_or_missing(&self, id: TextureId) -> &Texture {
        self.texture(id).unwrap_or_else(|_| {
            log::warn!("texture id {id} missing from bank, substituting fallback");
            self.texture(NO_TEXTURE).expect("NO_TEXTURE always present")
        })
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_tex(color: Rgba) -> Texture {
        Texture {
            w: 2,
            h: 2,
            pixels: vec![color; 4],
        }
    }

    #[test]
    fn insert_and_lookup() {
        let mut bank = TextureBank::default_with_checker();
        let red = bank.insert("RED", dummy_tex(rgba(255, 0, 0, 255))).unwrap();
        let blue = bank.insert("BLUE", dummy_tex(rgba(0, 0, 255, 255))).unwrap();

        assert_ne!(red, NO_TEXTURE);
        assert_ne!(blue, red);
        assert_eq!(bank.id("RED"), Some(red));
        assert_eq!(bank.id("BLUE"), Some(blue));
        assert_eq!(bank.id("NOPE"), None);
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut bank = TextureBank::default_with_checker();
        bank.insert("WOOD", dummy_tex(1)).unwrap();
        let err = bank.insert("WOOD", dummy_tex(2)).unwrap_err();
        assert_eq!(err, TextureError::Duplicate("WOOD".into()));
        assert_eq!(bank.len(), 2);
    }

    #[test]
    fn bad_id_guard() {
        let bank = TextureBank::default_with_checker();
        let bad = TextureId::MAX;
        assert_eq!(bank.texture(bad).unwrap_err(), TextureError::BadId(bad));
        assert_eq!(bank.texture_or_missing(bad), bank.texture(NO_TEXTURE).unwrap());
    }
}
