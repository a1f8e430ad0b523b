//! The sprite pipeline: billboards pushed by gameplay code each frame are
//! culled, projected onto the near plane, depth-sorted back-to-front and
//! alpha-blended against the z-buffer the wall pass already filled.

use crate::consts::{FAR, FOV, NEAR};
use crate::engine::framebuffer::Display;
use crate::pixel::{Rgba, blend, rgba_f, shade};
use crate::sim::player::Player;
use crate::vecmath::Vector2;
use crate::world::{TextureBank, TextureId};

/// What a sprite's billboard samples from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpriteImage {
    SolidColor { r: f64, g: f64, b: f64, a: f64 },
    Textured(TextureId),
}

/// A transient per-frame billboard record. `pdist`/`t` start at zero and
/// are filled in by [`cull_and_project`] — gameplay code only sets the
/// first four fields via [`SpritePool::push`].
#[derive(Clone, Copy, Debug)]
pub struct Sprite {
    pub image: SpriteImage,
    pub position: Vector2,
    pub z: f64,
    pub scale: f64,
    pub pdist: f64,
    pub t: f64,
}

/// Reset every frame; gameplay pushes records, the renderer drains them.
/// Reusing the backing `Vec`'s capacity across frames avoids allocating
/// in the hot per-frame path.
#[derive(Default)]
pub struct SpritePool {
    sprites: Vec<Sprite>,
}

impl SpritePool {
    pub fn clear(&mut self) {
        self.sprites.clear();
    }

    pub fn push(&mut self, image: SpriteImage, position: Vector2, z: f64, scale: f64) {
        self.sprites.push(Sprite { image, position, z, scale, pdist: 0.0, t: 0.0 });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sprite> {
        self.sprites.iter()
    }
}

/// Cull sprites outside the view frustum/near-far band and project the
/// survivors onto the near plane, filling in `pdist` and `t`.
fn cull_and_project(pool: &SpritePool, player: &Player) -> Vec<Sprite> {
    let d = player.facing();
    let cos_half_fov = (FOV * 0.5).cos();
    let fov_span = player.fov_left.distance_to(player.fov_right);

    pool.iter()
        .filter_map(|s| {
            let sp = s.position - player.position;
            let spl = sp.length();
            if spl <= NEAR || spl >= FAR {
                return None;
            }
            let dot = sp.dot(d) / spl;
            if dot < cos_half_fov {
                return None;
            }
            let pdist = sp.dot(d);
            if pdist < NEAR || pdist >= FAR {
                return None;
            }
            let projected = player.position + sp.normalized() * (NEAR / dot);
            let t = player.fov_left.distance_to(projected) / fov_span;
            Some(Sprite { pdist, t, ..*s })
        })
        .collect()
}

/// Run the full pipeline: cull, project, sort back-to-front, rasterize
/// against the z-buffer [`Display::begin_frame`]/the wall pass filled.
pub fn draw_sprites(display: &mut Display, pool: &SpritePool, player: &Player, bank: &TextureBank) {
    let mut visible = cull_and_project(pool, player);
    visible.sort_by(|a, b| b.pdist.partial_cmp(&a.pdist).unwrap_or(std::cmp::Ordering::Equal));

    let w = display.width() as f64;
    let h = display.height() as f64;

    for sprite in &visible {
        let cx = w * sprite.t;
        let cy = h * 0.5;
        let max_size = h / sprite.pdist;
        let size = max_size * sprite.scale;

        // Unclipped rectangle extents: texel coordinates are measured
        // against these, not the on-screen clipped range, so a sprite
        // partially off-screen still samples the correct crop of its
        // texture instead of a stretched slice of the visible remainder.
        let x_left = cx - size * 0.5;
        let y_top = cy + max_size * 0.5 - max_size * sprite.z;

        let x0 = x_left.floor().max(0.0) as i64;
        let x1 = (x_left + size).ceil().min(w - 1.0) as i64;
        let y0 = y_top.floor().max(0.0) as i64;
        let y1 = (y_top + max_size).ceil().min(h - 1.0) as i64;
        if x0 > x1 || y0 > y1 {
            continue;
        }

        for x in x0..=x1 {
            if sprite.pdist >= display.depth(x as usize) {
                continue; // occluded by a nearer wall in this column
            }
            let u = ((x as f64 + 0.5 - x_left) / size).clamp(0.0, 0.999_999);
            for y in y0..=y1 {
                let v = ((y as f64 + 0.5 - y_top) / max_size).clamp(0.0, 0.999_999);
                if let Some(src) = sample(sprite, bank, u, v) {
                    let dst = display.get(x as usize, y as usize);
                    display.set(x as usize, y as usize, blend(dst, src));
                }
            }
        }
    }
}

/// Nearest-neighbor sample of the sprite's source image at `(u, v)`.
fn sample(sprite: &Sprite, bank: &TextureBank, u: f64, v: f64) -> Option<Rgba> {
    match sprite.image {
        SpriteImage::SolidColor { r, g, b, a } => Some(rgba_f(r, g, b, a)),
        SpriteImage::Textured(id) => {
            let tex = bank.texture_or_missing(id);
            let tx = ((u * tex.w as f64) as usize).min(tex.w - 1);
            let ty = ((v * tex.h as f64) as usize).min(tex.h - 1);
            let px = tex.pixels[ty * tex.w + tx];
            // Routed through `shade` with a flat shadow of 1.0: sprites get
            // no distance shading, only the occlusion/blend already applied.
            Some(shade(px, 1.0))
        }
    }
}
