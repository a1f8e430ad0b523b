//! The fixed per-frame sequence: clamp `Δt`, update gameplay, then paint
//! planes → walls → sprites → minimap, in that order, and track a
//! rolling FPS estimate.

use crate::consts::{FPS_SAMPLE_WINDOW, MAX_FRAME_DT};
use crate::engine::framebuffer::Display;
use crate::engine::minimap::draw_minimap;
use crate::engine::planes::draw_planes;
use crate::engine::sprites::draw_sprites;
use crate::engine::walls::draw_walls;
use crate::sim::state::World;

/// Rolling average of the last [`FPS_SAMPLE_WINDOW`] `Δt` samples.
#[derive(Debug)]
pub struct FrameClock {
    samples: Vec<f64>,
    next: usize,
    filled: usize,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self { samples: vec![0.0; FPS_SAMPLE_WINDOW], next: 0, filled: 0 }
    }
}

impl FrameClock {
    pub fn push(&mut self, dt: f64) {
        self.samples[self.next] = dt;
        self.next = (self.next + 1) % self.samples.len();
        self.filled = (self.filled + 1).min(self.samples.len());
    }

    /// `⌊1/avg⌋`, or `0` before any sample with a positive `Δt` has landed.
    pub fn fps(&self) -> u32 {
        if self.filled == 0 {
            return 0;
        }
        let sum: f64 = self.samples[..self.filled].iter().sum();
        let avg = sum / self.filled as f64;
        if avg <= 0.0 { 0 } else { (1.0 / avg).floor() as u32 }
    }
}

/// Run one frame: clamp `Δt`, advance simulation, paint the back buffer
/// in the floor/ceiling-then-walls-then-sprites order the z-buffer
/// occlusion test depends on, then overlay the minimap. `now` is accepted
/// for interface parity with the caller's own clock but this engine
/// derives no behavior from it beyond the caller's own `Δt` bookkeeping.
pub fn render_frame(display: &mut Display, dt: f64, _now: f64, world: &mut World, clock: &mut FrameClock, show_minimap: bool) {
    let dt = if dt > MAX_FRAME_DT {
        log::warn!("frame Δt={dt:.3}s exceeded MAX_FRAME_DT, clamping to {MAX_FRAME_DT:.3}s");
        MAX_FRAME_DT
    } else {
        dt
    };
    clock.push(dt);

    world.update(dt);

    display.begin_frame(crate::pixel::rgba(0, 0, 0, 255));
    draw_planes(display, &world.player);
    draw_walls(display, &world.scene, &world.player, &world.bank);
    draw_sprites(display, &world.sprites, &world.player, &world.bank);

    if show_minimap {
        draw_minimap(display, &world.scene, &world.player, Some(&world.sprites));
    }
}
