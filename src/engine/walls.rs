//! Per-column wall rasterizer: casts one ray per screen column, shades
//! and texture-maps the resulting strip, and records the perpendicular
//! depth every later pass (sprites) reads back.

use crate::consts::FAR;
use crate::engine::framebuffer::Display;
use crate::engine::raycast::cast_ray;
use crate::pixel::{Rgba, rgba_f, shade};
use crate::sim::player::Player;
use crate::vecmath::{EPSILON, Vector2};
use crate::world::{Scene, Tile, TextureBank};

/// Paint every column `0..display.width()` and leave `display`'s z-buffer
/// holding the perpendicular wall distance for each.
pub fn draw_walls(display: &mut Display, scene: &Scene, player: &Player, bank: &TextureBank) {
    let w = display.width();
    let h = display.height();
    let dir = player.facing();

    for x in 0..w {
        let t = x as f64 / w as f64;
        let mut ray_target = player.fov_left;
        ray_target.lerp(player.fov_right, t);

        let hit = cast_ray(scene, player.position, ray_target, FAR);
        let v = hit - player.position;
        let depth = v.dot(dir);
        display.set_depth(x, depth);

        let tile = scene.get_tile(hit);
        if !tile.is_wall() {
            continue;
        }

        let strip_h = h as f64 / depth;
        let y_top_f = (h as f64 * 0.5 - strip_h * 0.5).max(0.0);
        let y_bot_f = (h as f64 * 0.5 + strip_h * 0.5).min(h as f64 - 1.0);
        let y_top = y_top_f as usize;
        let y_bot = y_bot_f as usize;

        let shadow = (2.0 / depth).min(1.0);

        match tile {
            Tile::Empty => unreachable!("checked above"),
            Tile::SolidColor { r, g, b, a } => {
                let px = shade(rgba_f(r, g, b, a), shadow);
                for y in y_top..=y_bot {
                    display.set(x, y, px);
                }
            }
            Tile::Textured(id) => {
                let tex = bank.texture_or_missing(id);
                let u = texel_u(hit);
                let tx = ((u * tex.w as f64) as usize).min(tex.w - 1);
                for y in y_top..=y_bot {
                    let ty = (((y as f64 - y_top_f) * tex.h as f64) / strip_h.ceil().max(1.0))
                        as usize
                        % tex.h.max(1);
                    let src: Rgba = tex.pixels[ty * tex.w + tx];
                    display.set(x, y, shade(src, shadow));
                }
            }
        }
    }
}

/// Horizontal texel coordinate from the fractional hit position within
/// its cell, picking whichever cell edge the ray actually crossed.
fn texel_u(hit: Vector2) -> f64 {
    let (cx, cy) = hit.floor_cell();
    let tx = hit.x - cx as f64;
    let ty = hit.y - cy as f64;

    if tx.abs() < EPSILON && ty > 0.0 {
        ty
    } else if (tx - 1.0).abs() < EPSILON && ty > 0.0 {
        1.0 - ty
    } else if ty.abs() < EPSILON && tx > 0.0 {
        1.0 - tx
    } else {
        tx
    }
}
