//! Integration tests for the six concrete scenarios: a 7x7 grid with a
//! wall row at `y=0`, `x in {2,3,4}`, everything else empty, no textures
//! or bombs — chosen for determinism.

use gridcaster::audio::NullAudioSink;
use gridcaster::consts::{BOMB_LIFETIME, BOMB_PARTICLE_COUNT, PARTICLE_POOL_SIZE};
use gridcaster::engine::sprites::{SpriteImage, SpritePool};
use gridcaster::sim::player::InputState;
use gridcaster::sim::{ItemPool, Player, World};
use gridcaster::vecmath::Vector2;
use gridcaster::world::{Scene, Tile, TextureBank};
use gridcaster::{Display, FrameClock, render_frame};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::f64::consts::FRAC_PI_2;

fn wall_row_scene() -> Scene {
    let mut rows = vec![vec![Tile::Empty; 7]; 7];
    let wall = Tile::SolidColor { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
    rows[0][2] = wall;
    rows[0][3] = wall;
    rows[0][4] = wall;
    Scene::new(rows)
}

fn test_world(player: Player) -> World {
    World::new(
        wall_row_scene(),
        player,
        TextureBank::default_with_checker(),
        ItemPool::new(vec![]),
        Box::new(NullAudioSink),
        StdRng::seed_from_u64(1),
    )
}

/// Scenario 1: player at (3.5, 3.5) facing east, nothing between it and
/// the open east edge — the center column's depth should sit near FAR.
#[test]
fn scenario_1_open_east_corridor_reaches_far_clip() {
    let mut world = test_world(Player::new(Vector2::new(3.5, 3.5), 0.0));
    let mut display = Display::new(64, 36);
    let mut clock = FrameClock::default();
    render_frame(&mut display, 0.0, 0.0, &mut world, &mut clock, false);
    let center = display.depth(display.width() / 2);
    assert!(center > 3.0, "expected the ray to clear several open cells, got {center}");
}

/// Scenario 2: player at (3.5, 1.5) facing due north directly into the
/// wall row. The wall face is perpendicular to the view direction, so
/// perpendicular depth is the *same* constant (0.5) for every column —
/// the defining property perpendicular-distance projection exists to
/// guarantee (it removes fisheye distortion for a flat wall face).
#[test]
fn scenario_2_facing_wall_gives_constant_perpendicular_depth() {
    let mut world = test_world(Player::new(Vector2::new(3.5, 1.5), -FRAC_PI_2));
    let mut display = Display::new(64, 36);
    let mut clock = FrameClock::default();
    render_frame(&mut display, 0.0, 0.0, &mut world, &mut clock, false);
    for x in 0..display.width() {
        let d = display.depth(x);
        assert!((d - 0.5).abs() < 1e-6, "col {x} depth {d}");
    }
}

/// Scenario 3: a sprite sitting behind the wall from the player's
/// perspective must never appear — its perpendicular distance exceeds
/// the wall's z-buffer entry for every central column.
#[test]
fn scenario_3_sprite_behind_wall_is_occluded() {
    let mut world = test_world(Player::new(Vector2::new(3.5, 1.5), -FRAC_PI_2));
    let mut display = Display::new(64, 36);
    let mut clock = FrameClock::default();

    // Render once with no sprite to capture the occluded baseline.
    render_frame(&mut display, 0.0, 0.0, &mut world, &mut clock, false);
    let baseline: Vec<_> = (0..display.width()).map(|x| display.get(x, display.height() / 2)).collect();

    let mut pool = SpritePool::default();
    pool.push(SpriteImage::SolidColor { r: 1.0, g: 0.0, b: 0.0, a: 1.0 }, Vector2::new(3.5, 0.5), 0.5, 1.0);
    gridcaster::engine::sprites::draw_sprites(&mut display, &pool, &world.player, &world.bank);
    let after: Vec<_> = (0..display.width()).map(|x| display.get(x, display.height() / 2)).collect();

    assert_eq!(baseline, after, "a sprite behind the wall must not alter any pixel");
}

/// Scenario 4: the same sprite moved strictly between the player (y=1.5)
/// and the wall face (y=1.0) — at y=1.3, pdist=0.2 is nearer than the
/// wall's recorded depth of 0.5 — is visible and centered near the
/// middle columns.
#[test]
fn scenario_4_sprite_in_front_of_wall_is_visible_and_centered() {
    let mut world = test_world(Player::new(Vector2::new(3.5, 1.5), -FRAC_PI_2));
    let mut display = Display::new(64, 36);
    let mut clock = FrameClock::default();
    render_frame(&mut display, 0.0, 0.0, &mut world, &mut clock, false);

    let mut pool = SpritePool::default();
    pool.push(SpriteImage::SolidColor { r: 1.0, g: 0.0, b: 0.0, a: 1.0 }, Vector2::new(3.5, 1.3), 0.1, 1.0);
    gridcaster::engine::sprites::draw_sprites(&mut display, &pool, &world.player, &world.bank);

    let center_row = display.height() / 2;
    let center_col = display.width() / 2;
    let mut painted_near_center = false;
    for x in center_col.saturating_sub(2)..=(center_col + 2).min(display.width() - 1) {
        if display.get(x, center_row) == gridcaster::pixel::rgba(255, 0, 0, 255) {
            painted_near_center = true;
        }
    }
    assert!(painted_near_center, "visible sprite should paint red near the center column");
}

/// Scenario 5: a thrown bomb expires after ~2s and emits particles.
#[test]
fn scenario_5_bomb_expires_and_emits_particles() {
    let mut world = test_world(Player::new(Vector2::new(3.5, 3.5), 0.0));
    world.bombs.throw(world.player.position, world.player.direction);
    assert_eq!(world.bombs.iter().count(), 1);

    let dt = 1.0 / 60.0;
    let ticks = (BOMB_LIFETIME / dt) as usize + 5;
    for _ in 0..ticks {
        world.update(dt);
    }

    assert_eq!(world.bombs.iter().count(), 0, "bomb should have expired");
    let spawned = world.particles.iter().count();
    // The pool starts empty, so the free-slot count at emission time is
    // just the pool's full capacity: expect exactly min(50, capacity).
    let expected = BOMB_PARTICLE_COUNT.min(PARTICLE_POOL_SIZE);
    assert_eq!(spawned, expected, "expected {expected} particles to have become active");
}

/// Scenario 6: walking north into the wall row stops at the collision
/// box boundary instead of tunneling through.
#[test]
fn scenario_6_collision_stops_player_at_box_boundary() {
    let mut world = test_world(Player::new(Vector2::new(3.5, 0.51), -FRAC_PI_2));
    world.player.input = InputState::FORWARD;
    for _ in 0..600 {
        world.update(1.0 / 60.0);
    }
    assert!(world.player.position.y >= 0.5 - 1e-9, "pos.y={}", world.player.position.y);
}
