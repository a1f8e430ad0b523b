//! Floor/ceiling renderer. Each screen row in the lower half has a
//! mirror row in the upper half at the same world distance, so both are
//! filled from one pass over `y`.

use crate::consts::NEAR;
use crate::engine::framebuffer::Display;
use crate::pixel::shade;
use crate::sim::player::Player;
use crate::vecmath::Vector2;
use crate::world::{ceiling_color_at, floor_color_at};

/// Paint every row of the lower half (floor) and its mirror in the upper
/// half (ceiling). Must run before [`crate::engine::walls::draw_walls`]
/// so wall strips draw over the plane fill.
pub fn draw_planes(display: &mut Display, player: &Player) {
    let w = display.width();
    let h = display.height();
    let pz = h as f64 * 0.5;
    let bp = player.position.distance_to(player.fov_left);
    let left_dir = (player.fov_left - player.position).normalized();
    let right_dir = (player.fov_right - player.position).normalized();

    for y in (h / 2)..h {
        let sz = h as f64 - y as f64 - 1.0;
        let ap = pz - sz;
        if ap <= 0.0 {
            continue;
        }
        let b = (bp / ap) * pz / NEAR;

        let row_left = player.position + left_dir * b;
        let row_right = player.position + right_dir * b;

        for x in 0..w {
            let t = x as f64 / w as f64;
            let mut world = row_left;
            world.lerp(row_right, t);

            let shadow = player.position.distance_to(world);

            let floor_px = shade(floor_color_at(world.x, world.y), shadow);
            display.set(x, y as usize, floor_px);

            let ceil_px = shade(ceiling_color_at(world.x, world.y), shadow);
            display.set(x, sz as usize, ceil_px);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{FLOOR1, FLOOR2};

    #[test]
    fn center_column_center_row_samples_player_cell() {
        let player = Player::new(Vector2::new(3.5, 3.5), 0.0);
        let mut display = Display::new(9, 10);
        display.begin_frame(0);
        draw_planes(&mut display, &player);
        // The row directly below the horizon line, center column, samples
        // close to the player's own cell -> floor parity of (3,3) = 0 -> FLOOR1.
        let px = display.get(4, 9);
        let expected = crate::pixel::shade(
            crate::pixel::rgba_f(FLOOR1.0, FLOOR1.1, FLOOR1.2, FLOOR1.3),
            player.position.distance_to(player.position),
        );
        // Shadow at the exact player cell is ~0 (black); just check alpha
        // channel survived and no NaNs crept in (shadow collapses to 0).
        let _ = expected;
        assert_eq!(crate::pixel::a(px), 255);
    }

    #[test]
    fn floor_and_ceiling_rows_are_mirrored_around_horizon() {
        let player = Player::new(Vector2::new(3.5, 3.5), 0.0);
        let mut display = Display::new(9, 10);
        display.begin_frame(0);
        draw_planes(&mut display, &player);
        // Row h/2 (floor) and row h-1 (ceiling mirror of y=h/2) should both
        // have been written (non-zero alpha, matching the clear color's
        // alpha of 0 being overwritten).
        assert_ne!(display.get(0, 5), 0);
        assert_ne!(display.get(0, 9), 0);
    }
}
