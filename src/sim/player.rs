//! Player kinematics: input-driven velocity, axis-separated swept
//! collision, and the FOV endpoints the wall/floor/sprite passes read.

use bitflags::bitflags;

use crate::consts::{FOV, NEAR, PLAYER_COLLISION_BOX, PLAYER_SPEED, TURN_RATE};
use crate::vecmath::Vector2;
use crate::world::Scene;

bitflags! {
    /// Movement edges the host reports each frame, plus the edge-triggered
    /// throw action, as a single flag set rather than four loose `bool`
    /// fields.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
    pub struct InputState: u8 {
        const FORWARD = 0b0000_0001;
        const BACK    = 0b0000_0010;
        const LEFT    = 0b0000_0100;
        const RIGHT   = 0b0000_1000;
        const THROW   = 0b0001_0000;
    }
}

/// World-space player state: position, heading, velocity and the two
/// near-plane FOV endpoints recomputed every frame from the first two.
#[derive(Clone, Copy, Debug)]
pub struct Player {
    pub position: Vector2,
    pub direction: f64,
    pub velocity: Vector2,
    pub fov_left: Vector2,
    pub fov_right: Vector2,
    pub input: InputState,
}

impl Player {
    pub fn new(position: Vector2, direction: f64) -> Self {
        let mut p = Self {
            position,
            direction,
            velocity: Vector2::ZERO,
            fov_left: Vector2::ZERO,
            fov_right: Vector2::ZERO,
            input: InputState::empty(),
        };
        p.recompute_fov();
        p
    }

    /// Unit vector the player currently faces.
    #[inline]
    pub fn facing(&self) -> Vector2 {
        Vector2::new(self.direction.cos(), self.direction.sin())
    }

    /// Advance heading, velocity and position by `dt` seconds, sliding
    /// along walls via axis-separated collision.
    pub fn update(&mut self, scene: &Scene, dt: f64) {
        let turn = (self.input.contains(InputState::RIGHT) as i32 as f64)
            - (self.input.contains(InputState::LEFT) as i32 as f64);
        self.direction += turn * TURN_RATE * dt;

        let dir = self.facing();
        let fwd = (self.input.contains(InputState::FORWARD) as i32 as f64)
            - (self.input.contains(InputState::BACK) as i32 as f64);
        self.velocity = dir * (fwd * PLAYER_SPEED);

        let nx = self.position.x + self.velocity.x * dt;
        if scene.can_rectangle_fit_here(
            Vector2::new(nx, self.position.y),
            PLAYER_COLLISION_BOX,
            PLAYER_COLLISION_BOX,
        ) {
            self.position.x = nx;
        }

        let ny = self.position.y + self.velocity.y * dt;
        if scene.can_rectangle_fit_here(
            Vector2::new(self.position.x, ny),
            PLAYER_COLLISION_BOX,
            PLAYER_COLLISION_BOX,
        ) {
            self.position.y = ny;
        }

        self.recompute_fov();
    }

    fn recompute_fov(&mut self) {
        let half_fov = FOV * 0.5;
        let fov_len = NEAR / half_fov.cos();
        self.fov_left = self.position
            + Vector2::new((self.direction - half_fov).cos(), (self.direction - half_fov).sin())
                * fov_len;
        self.fov_right = self.position
            + Vector2::new((self.direction + half_fov).cos(), (self.direction + half_fov).sin())
                * fov_len;
    }
}
