//! Bundles everything a frame needs to update and render: the scene,
//! player, texture bank, gameplay pools, audio sink and RNG. `render_frame`
//! in [`crate::engine::frame`] takes one of these plus `Δt`/`now`.

use rand::rngs::StdRng;

use crate::audio::AudioSink;
use crate::engine::sprites::SpritePool;
use crate::sim::entities::{BombPool, ItemPool, ParticlePool};
use crate::sim::player::{InputState, Player};
use crate::world::{Scene, TextureBank};

pub struct World {
    pub scene: Scene,
    pub player: Player,
    pub bank: TextureBank,
    pub sprites: SpritePool,
    pub items: ItemPool,
    pub bombs: BombPool,
    pub particles: ParticlePool,
    pub audio: Box<dyn AudioSink>,
    pub rng: StdRng,
    /// Accumulated wall-clock seconds, used by the item bob animation.
    pub time: f64,
}

impl World {
    pub fn new(scene: Scene, player: Player, bank: TextureBank, items: ItemPool, audio: Box<dyn AudioSink>, rng: StdRng) -> Self {
        Self {
            scene,
            player,
            bank,
            sprites: SpritePool::default(),
            items,
            bombs: BombPool::default(),
            particles: ParticlePool::default(),
            audio,
            rng,
            time: 0.0,
        }
    }

    /// Advance player kinematics and the item/bomb/particle pools by `dt`,
    /// leaving `self.sprites` populated with this frame's billboards. Does
    /// not touch the framebuffer — that's
    /// [`crate::engine::frame::render_frame`]'s job.
    pub fn update(&mut self, dt: f64) {
        self.time += dt;
        self.player.update(&self.scene, dt);

        if self.player.input.contains(InputState::THROW) {
            self.bombs.throw(self.player.position, self.player.direction);
        }

        self.sprites.clear();
        self.items.update(self.player.position, self.time, &mut self.sprites, self.audio.as_mut());
        self.bombs.update(&self.scene, dt, &mut self.particles, &mut self.rng, &mut self.sprites, self.audio.as_mut());
        self.particles.update(&self.scene, dt, &mut self.sprites);
    }
}
