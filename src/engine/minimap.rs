//! Top-down debug overlay: world grid, player, FOV wedge, and optionally
//! sprite dots, scaled and translated onto a corner of the framebuffer.

use crate::consts::{MINIMAP_PLAYER_SIZE, MINIMAP_SCALE};
use crate::engine::framebuffer::Display;
use crate::engine::sprites::SpritePool;
use crate::pixel::rgba;
use crate::sim::player::Player;
use crate::vecmath::Vector2;
use crate::world::{Scene, Tile};

const BACKGROUND: u32 = 0x18_18_18;
const GRID_LINE: u32 = 0x30_30_30;
const MARKER: u32 = 0xFF_00_FF;

fn rgb24_to_rgba(hex: u32) -> crate::pixel::Rgba {
    rgba((hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 255)
}

/// World point to on-screen pixel, scaled by `cell_size = display.width()
/// * MINIMAP_SCALE` and offset the same amount from the top-left corner.
fn to_screen(display: &Display, cell_size: f64, p: Vector2) -> (i64, i64) {
    let ox = display.width() as f64 * MINIMAP_SCALE;
    let oy = display.height() as f64 * MINIMAP_SCALE;
    ((ox + p.x * cell_size).round() as i64, (oy + p.y * cell_size).round() as i64)
}

fn draw_line(display: &mut Display, p0: (i64, i64), p1: (i64, i64), px: crate::pixel::Rgba) {
    let (x0, y0) = p0;
    let (x1, y1) = p1;
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);
    loop {
        if x >= 0 && y >= 0 {
            display.set(x as usize, y as usize, px);
        }
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Draw the minimap into `display`'s top-left corner: colored cell fills
/// for `SolidColor` tiles, a grid, the player, its FOV wedge, and
/// optionally dots for every currently visible sprite.
pub fn draw_minimap(display: &mut Display, scene: &Scene, player: &Player, sprites: Option<&SpritePool>) {
    let cell_size = display.width() as f64 * MINIMAP_SCALE;

    for cy in 0..scene.height() {
        for cx in 0..scene.width() {
            let tile = scene.tile_at(cx as i64, cy as i64);
            if let Tile::SolidColor { r, g, b, .. } = tile {
                let top_left = to_screen(display, cell_size, Vector2::new(cx as f64, cy as f64));
                let px = crate::pixel::rgba_f(r, g, b, 1.0);
                let w = cell_size.ceil() as i64;
                for yy in 0..w {
                    for xx in 0..w {
                        let (sx, sy) = (top_left.0 + xx, top_left.1 + yy);
                        if sx >= 0 && sy >= 0 {
                            display.set(sx as usize, sy as usize, px);
                        }
                    }
                }
            } else {
                let top_left = to_screen(display, cell_size, Vector2::new(cx as f64, cy as f64));
                let w = cell_size.ceil() as i64;
                for yy in 0..w {
                    for xx in 0..w {
                        let (sx, sy) = (top_left.0 + xx, top_left.1 + yy);
                        if sx >= 0 && sy >= 0 {
                            display.set(sx as usize, sy as usize, rgb24_to_rgba(BACKGROUND));
                        }
                    }
                }
            }
        }
    }

    for i in 0..=scene.width() {
        let top = to_screen(display, cell_size, Vector2::new(i as f64, 0.0));
        let bot = to_screen(display, cell_size, Vector2::new(i as f64, scene.height() as f64));
        draw_line(display, top, bot, rgb24_to_rgba(GRID_LINE));
    }
    for j in 0..=scene.height() {
        let left = to_screen(display, cell_size, Vector2::new(0.0, j as f64));
        let right = to_screen(display, cell_size, Vector2::new(scene.width() as f64, j as f64));
        draw_line(display, left, right, rgb24_to_rgba(GRID_LINE));
    }

    let marker = rgb24_to_rgba(MARKER);
    draw_line(display, to_screen(display, cell_size, player.fov_left), to_screen(display, cell_size, player.fov_right), marker);
    draw_line(display, to_screen(display, cell_size, player.position), to_screen(display, cell_size, player.fov_left), marker);
    draw_line(display, to_screen(display, cell_size, player.position), to_screen(display, cell_size, player.fov_right), marker);

    let half = MINIMAP_PLAYER_SIZE * 0.5;
    let p0 = to_screen(display, cell_size, Vector2::new(player.position.x - half, player.position.y - half));
    let p1 = to_screen(display, cell_size, Vector2::new(player.position.x + half, player.position.y + half));
    for y in p0.1.min(p1.1)..=p0.1.max(p1.1) {
        for x in p0.0.min(p1.0)..=p0.0.max(p1.0) {
            if x >= 0 && y >= 0 {
                display.set(x as usize, y as usize, marker);
            }
        }
    }

    if let Some(pool) = sprites {
        for sprite in pool.iter() {
            let (x, y) = to_screen(display, cell_size, sprite.position);
            if x >= 0 && y >= 0 {
                display.set(x as usize, y as usize, marker);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        let mut rows = vec![vec![Tile::Empty; 7]; 7];
        rows[0][2] = Tile::SolidColor { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
        Scene::new(rows)
    }

    #[test]
    fn draws_something_into_the_corner() {
        let scene = scene();
        let player = Player::new(Vector2::new(3.5, 3.5), 0.0);
        let mut display = Display::new(64, 64);
        display.begin_frame(0);
        draw_minimap(&mut display, &scene, &player, None);
        let any_written = (0..64 * 64).any(|i| display.get(i % 64, i / 64) != 0);
        assert!(any_written);
    }

    #[test]
    fn player_marker_lands_near_scaled_position() {
        let scene = scene();
        let player = Player::new(Vector2::new(3.5, 3.5), 0.0);
        let mut display = Display::new(64, 64);
        display.begin_frame(0);
        draw_minimap(&mut display, &scene, &player, None);
        let cell_size = display.width() as f64 * MINIMAP_SCALE;
        let (x, y) = to_screen(&display, cell_size, player.position);
        assert_eq!(display.get(x as usize, y as usize), rgb24_to_rgba(MARKER));
    }
}
