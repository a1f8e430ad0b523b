//! The rendering pipeline: ray caster, framebuffer, the three draw passes
//! (planes, walls, sprites), the minimap overlay, and the per-frame
//! driver that sequences them.

pub mod framebuffer;
pub mod frame;
pub mod minimap;
pub mod planes;
pub mod raycast;
pub mod sprites;
pub mod walls;

pub use framebuffer::Display;
pub use frame::{FrameClock, render_frame};
pub use minimap::draw_minimap;
pub use planes::draw_planes;
pub use sprites::{Sprite, SpriteImage, SpritePool, draw_sprites};
pub use walls::draw_walls;
