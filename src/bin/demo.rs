//! Application bootstrap — not part of the library's testable surface.
//! Wires a `minifb` window, keyboard edges and a built-in demo scene
//! into [`gridcaster::render_frame`].

use std::time::Instant;

use clap::Parser;
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use rand::SeedableRng;
use rand::rngs::StdRng;

use gridcaster::audio::LoggingAudioSink;
use gridcaster::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use gridcaster::render_frame;
use gridcaster::sim::{InputState, Item, ItemKind, ItemPool, Player, World};
use gridcaster::vecmath::Vector2;
use gridcaster::world::{Scene, Tile, TextureBank};

/// Real-time grid raycasting demo.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Window width scale relative to the internal framebuffer.
    #[arg(long, default_value_t = 2)]
    scale: usize,

    /// Draw the top-down debug minimap overlay.
    #[arg(long, default_value_t = false)]
    minimap: bool,
}

fn demo_scene() -> Scene {
    let wall = Tile::SolidColor { r: 0.7, g: 0.3, b: 0.3, a: 1.0 };
    let mut rows = vec![vec![Tile::Empty; 16]; 16];
    for x in 0..16 {
        rows[0][x] = wall;
        rows[15][x] = wall;
    }
    for y in 0..16 {
        rows[y][0] = wall;
        rows[y][15] = wall;
    }
    rows[4][8] = wall;
    rows[5][8] = wall;
    rows[6][8] = wall;
    Scene::new(rows)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opts = Opts::parse();

    let scene = demo_scene();
    let player = Player::new(Vector2::new(2.5, 2.5), 0.0);
    let items = ItemPool::new(vec![
        Item::new(ItemKind::Key, Vector2::new(10.5, 10.5)),
        Item::new(ItemKind::Bomb, Vector2::new(12.5, 3.5)),
    ]);
    let mut world = World::new(
        scene,
        player,
        TextureBank::default_with_checker(),
        items,
        Box::new(LoggingAudioSink),
        StdRng::seed_from_u64(0xC0FFEE),
    );

    let mut display = gridcaster::Display::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    let mut clock = gridcaster::FrameClock::default();

    let win_w = SCREEN_WIDTH * opts.scale.max(1);
    let win_h = SCREEN_HEIGHT * opts.scale.max(1);
    let mut win = Window::new("gridcaster demo", win_w, win_h, WindowOptions::default())?;
    win.set_target_fps(60);

    let mut last = Instant::now();
    let mut argb_scratch = vec![0u32; SCREEN_WIDTH * SCREEN_HEIGHT];

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let now = Instant::now();
        let dt = (now - last).as_secs_f64();
        last = now;

        let mut input = InputState::empty();
        if win.is_key_down(Key::Up) || win.is_key_down(Key::W) {
            input |= InputState::FORWARD;
        }
        if win.is_key_down(Key::Down) || win.is_key_down(Key::S) {
            input |= InputState::BACK;
        }
        if win.is_key_down(Key::Left) || win.is_key_down(Key::A) {
            input |= InputState::LEFT;
        }
        if win.is_key_down(Key::Right) || win.is_key_down(Key::D) {
            input |= InputState::RIGHT;
        }
        if win.is_key_pressed(Key::Space, KeyRepeat::No) {
            input |= InputState::THROW;
        }
        world.player.input = input;

        render_frame(&mut display, dt, now.elapsed().as_secs_f64(), &mut world, &mut clock, opts.minimap);

        // minifb wants packed 0x00RRGGBB words; the engine's back buffer
        // is RGBA8 little-endian, so repack per pixel for the window only.
        let rgba8 = display.as_rgba8();
        for (i, px) in argb_scratch.iter_mut().enumerate() {
            let base = i * 4;
            let (r, g, b) = (rgba8[base] as u32, rgba8[base + 1] as u32, rgba8[base + 2] as u32);
            *px = (r << 16) | (g << 8) | b;
        }
        win.update_with_buffer(&argb_scratch, SCREEN_WIDTH, SCREEN_HEIGHT)?;

        if clock.fps() > 0 {
            log::trace!("fps={}", clock.fps());
        }
    }

    Ok(())
}
