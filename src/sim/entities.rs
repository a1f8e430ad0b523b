//! Items, bombs and particles: the three gameplay pools that share the
//! same axis-aligned ballistic bounce against the scene grid.

use rand::Rng;

use crate::audio::{AudioSink, SoundId};
use crate::consts::*;
use crate::engine::sprites::{SpriteImage, SpritePool};
use crate::vecmath::{Vector2, Vector3};
use crate::world::Scene;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Key,
    Bomb,
}

impl ItemKind {
    fn image(self) -> SpriteImage {
        match self {
            ItemKind::Key => SpriteImage::SolidColor { r: 1.0, g: 0.9, b: 0.2, a: 1.0 },
            ItemKind::Bomb => SpriteImage::SolidColor { r: 0.3, g: 0.3, b: 0.3, a: 1.0 },
        }
    }
}

/// A walk-through pickup. Once `alive` flips to `false` it stays false —
/// there is no respawn path in this engine.
#[derive(Clone, Copy, Debug)]
pub struct Item {
    pub kind: ItemKind,
    pub alive: bool,
    pub position: Vector2,
}

impl Item {
    pub fn new(kind: ItemKind, position: Vector2) -> Self {
        Self { kind, alive: true, position }
    }
}

/// Fixed set of items placed when the scene is built. Unlike bombs/particles
/// this pool is sized to the level, not a reusable-by-index ring.
pub struct ItemPool {
    items: Vec<Item>,
}

impl ItemPool {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Pick up anything within `PLAYER_RADIUS`, push a bobbing sprite for
    /// everything still alive.
    pub fn update(
        &mut self,
        player_pos: Vector2,
        time: f64,
        sprites: &mut SpritePool,
        audio: &mut dyn AudioSink,
    ) {
        for item in &mut self.items {
            if !item.alive {
                continue;
            }
            if player_pos.sqr_distance_to(item.position) < PLAYER_RADIUS * PLAYER_RADIUS {
                item.alive = false;
                audio.play(SoundId::Pickup, pickup_volume(player_pos, item.position));
                continue;
            }
            let bob = ITEM_BOB_AMPLITUDE
                * (ITEM_BOB_FREQUENCY * std::f64::consts::PI * time + item.position.x + item.position.y)
                    .sin();
            let z = ITEM_BASE_Z + ITEM_BOB_AMPLITUDE - bob;
            sprites.push(item.kind.image(), item.position, z, ITEM_SPRITE_SCALE);
        }
    }
}

/// `1/distance` clamped to `[0, 1]` — defensive so a pickup at distance
/// zero never divides by zero or exceeds full volume.
fn pickup_volume(a: Vector2, b: Vector2) -> f32 {
    let d = a.distance_to(b);
    if d <= f64::EPSILON {
        1.0
    } else {
        (1.0 / d).clamp(0.0, 1.0) as f32
    }
}

/// Whether `RICOCHET_CHECK_POST_DAMP` checks the pre- or post-damp speed
/// for "was this bounce loud enough to play a sound".
#[inline]
fn ricochet_speed(pre: f64, post: f64) -> f64 {
    if RICOCHET_CHECK_POST_DAMP { post } else { pre }
}

/// One axis-separated bounce step shared by bombs and particles: gravity,
/// horizontal wall bounce, vertical floor/ceiling bounce. Returns the
/// ricochet-check speed if a bounce happened on either axis this tick,
/// or `None` if the tick was bounce-free.
fn step_ballistic(
    position: &mut Vector3,
    velocity: &mut Vector3,
    scene: &Scene,
    dt: f64,
    gravity: f64,
    damp: f64,
    floor_z: f64,
) -> Option<f64> {
    velocity.z -= gravity * dt;
    let mut loudest: Option<f64> = None;

    let old_cell = position.xy().floor_cell();
    let nx = position.x + velocity.x * dt;
    let ny = position.y + velocity.y * dt;
    let new_cell = Vector2::new(nx, ny).floor_cell();
    if scene.tile_at(new_cell.0, new_cell.1).is_wall() {
        let pre = velocity.length();
        if new_cell.0 != old_cell.0 {
            velocity.x = -velocity.x;
        }
        if new_cell.1 != old_cell.1 {
            velocity.y = -velocity.y;
        }
        velocity.scale(damp);
        loudest = Some(ricochet_speed(pre, velocity.length()));
    } else {
        position.x = nx;
        position.y = ny;
    }

    let nz = position.z + velocity.z * dt;
    if nz < floor_z || nz > 1.0 {
        let pre = velocity.length();
        velocity.z = -velocity.z;
        velocity.scale(damp);
        let speed = ricochet_speed(pre, velocity.length());
        loudest = Some(loudest.map_or(speed, |l: f64| l.max(speed)));
    } else {
        position.z = nz;
    }

    loudest
}

#[derive(Clone, Copy, Debug)]
pub struct Bomb {
    pub position: Vector3,
    pub velocity: Vector3,
    pub lifetime: f64,
}

impl Bomb {
    #[inline]
    pub fn active(&self) -> bool {
        self.lifetime > 0.0
    }
}

/// Fixed-capacity ring of bombs: pools never shrink, slots are reused by index.
pub struct BombPool {
    bombs: Vec<Bomb>,
}

impl Default for BombPool {
    fn default() -> Self {
        Self {
            bombs: vec![Bomb { position: Vector3::ZERO, velocity: Vector3::ZERO, lifetime: 0.0 }; BOMB_POOL_SIZE],
        }
    }
}

impl BombPool {
    pub fn iter(&self) -> impl Iterator<Item = &Bomb> {
        self.bombs.iter().filter(|b| b.active())
    }

    /// Claim the first inactive slot, or drop the throw silently: running
    /// out of bomb slots is a gameplay limit, not an error.
    pub fn throw(&mut self, origin: Vector2, direction: f64) {
        match self.bombs.iter_mut().find(|b| !b.active()) {
            Some(slot) => {
                let facing = Vector2::new(direction.cos(), direction.sin());
                slot.position = origin.to_vec3(BOMB_THROW_Z);
                slot.velocity = Vector3::new(facing.x, facing.y, BOMB_THROW_VZ_FACTOR).normalized()
                    * BOMB_THROW_VELOCITY;
                slot.lifetime = BOMB_LIFETIME;
            }
            None => log::debug!("bomb pool exhausted, throw dropped"),
        }
    }

    pub fn update(
        &mut self,
        scene: &Scene,
        dt: f64,
        particles: &mut ParticlePool,
        rng: &mut impl Rng,
        sprites: &mut SpritePool,
        audio: &mut dyn AudioSink,
    ) {
        for bomb in &mut self.bombs {
            if !bomb.active() {
                continue;
            }
            bomb.lifetime -= dt;

            let loud = step_ballistic(
                &mut bomb.position,
                &mut bomb.velocity,
                scene,
                dt,
                BOMB_GRAVITY,
                BOMB_DAMP,
                BOMB_SCALE,
            );
            if let Some(speed) = loud {
                if speed > 1.0 {
                    audio.play(SoundId::Ricochet, speed.min(1.0) as f32);
                }
            }

            if bomb.lifetime <= 0.0 {
                audio.play(SoundId::Blast, 1.0);
                particles.emit(bomb.position, BOMB_PARTICLE_COUNT, rng);
            } else {
                sprites.push(
                    SpriteImage::SolidColor { r: 0.2, g: 0.2, b: 0.2, a: 1.0 },
                    bomb.position.xy(),
                    bomb.position.z,
                    BOMB_SCALE,
                );
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub position: Vector3,
    pub velocity: Vector3,
    pub lifetime: f64,
}

impl Particle {
    #[inline]
    pub fn active(&self) -> bool {
        self.lifetime > 0.0
    }
}

/// Fixed-capacity ring of blast debris, reused by index like `BombPool`.
pub struct ParticlePool {
    particles: Vec<Particle>,
}

impl Default for ParticlePool {
    fn default() -> Self {
        Self {
            particles: vec![
                Particle { position: Vector3::ZERO, velocity: Vector3::ZERO, lifetime: 0.0 };
                PARTICLE_POOL_SIZE
            ],
        }
    }
}

impl ParticlePool {
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter().filter(|p| p.active())
    }

    /// Spawn up to `count` particles from `origin`, truncating (not
    /// erroring) if fewer free slots remain.
    pub fn emit(&mut self, origin: Vector3, count: usize, rng: &mut impl Rng) {
        let mut spawned = 0usize;
        for slot in &mut self.particles {
            if spawned >= count {
                break;
            }
            if slot.active() {
                continue;
            }
            let angle = rng.gen_range(0.0..std::f64::consts::TAU);
            let vz = rng.gen_range(PARTICLE_VZ_MIN..PARTICLE_VZ_MAX);
            let speed = PARTICLE_MAX_SPEED * rng.gen::<f64>();
            slot.position = origin;
            slot.velocity = Vector3::new(angle.cos(), angle.sin(), vz).normalized() * speed;
            slot.lifetime = PARTICLE_LIFETIME;
            spawned += 1;
        }
        if spawned < count {
            log::debug!("particle pool exhausted: spawned {spawned}/{count}");
        }
    }

    pub fn update(&mut self, scene: &Scene, dt: f64, sprites: &mut SpritePool) {
        for particle in &mut self.particles {
            if !particle.active() {
                continue;
            }
            particle.lifetime -= dt;
            step_ballistic(
                &mut particle.position,
                &mut particle.velocity,
                scene,
                dt,
                PARTICLE_GRAVITY,
                PARTICLE_DAMP,
                PARTICLE_SCALE,
            );
            if particle.lifetime > 0.0 {
                sprites.push(
                    SpriteImage::SolidColor { r: 1.0, g: 0.5, b: 0.15, a: 1.0 },
                    particle.position.xy(),
                    particle.position.z,
                    PARTICLE_SCALE,
                );
            }
        }
    }
}
