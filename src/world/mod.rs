mod scene;
mod tile;
mod texture;

pub use scene::{Scene, SceneError};
pub use tile::{Tile, CEILING1, CEILING2, FLOOR1, FLOOR2, ceiling_color_at, floor_color_at};
pub use texture::{NO_TEXTURE, Texture, TextureBank, TextureError, TextureId};
