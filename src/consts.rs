//! Tunable constants for the renderer and simulation, grouped here
//! instead of scattered across modules so the numbers stay easy to
//! audit in one read.

use std::f64::consts::PI;

pub const SCREEN_WIDTH: usize = 480;
pub const SCREEN_HEIGHT: usize = 270;

pub const FOV: f64 = PI / 2.0;
pub const NEAR: f64 = 0.1;
pub const FAR: f64 = 10.0;

pub const PLAYER_SPEED: f64 = 2.0;
pub const PLAYER_RADIUS: f64 = 0.5;
pub const PLAYER_COLLISION_BOX: f64 = 0.5;
pub const TURN_RATE: f64 = 0.75 * PI;

pub const MAX_FRAME_DT: f64 = 0.1;
pub const FPS_SAMPLE_WINDOW: usize = 60;

pub const ITEM_BOB_AMPLITUDE: f64 = 0.07;
pub const ITEM_BOB_FREQUENCY: f64 = 0.7;
pub const ITEM_BASE_Z: f64 = 0.25;
pub const ITEM_SPRITE_SCALE: f64 = 0.25;

pub const BOMB_POOL_SIZE: usize = 10;
pub const BOMB_THROW_VELOCITY: f64 = 5.0;
pub const BOMB_LIFETIME: f64 = 2.0;
pub const BOMB_GRAVITY: f64 = 10.0;
pub const BOMB_DAMP: f64 = 0.8;
pub const BOMB_SCALE: f64 = 0.25;
pub const BOMB_THROW_Z: f64 = 0.6;
pub const BOMB_THROW_VZ_FACTOR: f64 = 0.5;

pub const PARTICLE_POOL_SIZE: usize = 1000;
pub const PARTICLE_GRAVITY: f64 = 10.0;
pub const PARTICLE_DAMP: f64 = 0.8;
pub const PARTICLE_SCALE: f64 = 0.1;
pub const PARTICLE_LIFETIME: f64 = 1.0;
pub const PARTICLE_MAX_SPEED: f64 = 8.0;
pub const PARTICLE_VZ_MIN: f64 = 0.5;
pub const PARTICLE_VZ_MAX: f64 = 1.0;
pub const BOMB_PARTICLE_COUNT: usize = 50;

/// Bounce-loudness check order: `true` checks `velocity.length() > 1.0`
/// *after* the damping multiply (quieter bounces stay quiet); flip to
/// `false` to check pre-damp speed instead.
pub const RICOCHET_CHECK_POST_DAMP: bool = true;

pub const MINIMAP_SCALE: f64 = 0.03;
pub const MINIMAP_PLAYER_SIZE: f64 = 0.5;
