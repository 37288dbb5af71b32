//! Physics module - fixed-step kinematics against world bounds
//!
//! One call to [`PhysicsEngine::advance`] moves a sprite forward by exactly one
//! time step:
//!
//! 1. Clamp to the left/right walls, bouncing or stopping
//! 2. Airborne sprites pick up gravity; grounded ones feel friction and are
//!    clamped to the floor (bouncing or stopping)
//! 3. Integrate velocity, then position
//!
//! # Sign convention
//!
//! Velocity and gravity are upward-positive, while screen rows grow downward.
//! Position integration therefore *subtracts* on the y axis and adds on the x
//! axis. Gravity is negative, so a falling sprite has negative `velocity.y`
//! and an increasing `position.y`.
//!
//! Parameters are trusted: a non-positive time step yields meaningless numbers
//! rather than an error.

use crate::sprite::Sprite;
use crate::types::{
    Vector2, DEFAULT_FRICTION, DEFAULT_GRAVITY, DEFAULT_RESTITUTION, DEFAULT_TIME_STEP,
    DEFAULT_WORLD_HEIGHT, DEFAULT_WORLD_WIDTH, STOP_THRESHOLD,
};

/// Construction parameters for [`PhysicsEngine`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConfig {
    pub gravity: f64,
    pub time_step: f64,
    pub friction: f64,
    pub bounds: Vector2,
    pub restitution: Vector2,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            time_step: DEFAULT_TIME_STEP,
            friction: DEFAULT_FRICTION,
            bounds: Vector2::new(DEFAULT_WORLD_WIDTH, DEFAULT_WORLD_HEIGHT),
            restitution: Vector2::new(DEFAULT_RESTITUTION, DEFAULT_RESTITUTION),
        }
    }
}

impl PhysicsConfig {
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn with_friction(mut self, friction: f64) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_bounds(mut self, width: f64, height: f64) -> Self {
        self.bounds = Vector2::new(width, height);
        self
    }

    pub fn with_restitution(mut self, x: f64, y: f64) -> Self {
        self.restitution = Vector2::new(x, y);
        self
    }
}

/// Fixed-step integrator for gravity, friction and wall/floor collisions.
#[derive(Debug, Clone)]
pub struct PhysicsEngine {
    gravity: f64,
    time_step: f64,
    friction: f64,
    bounds: Vector2,
    restitution: Vector2,
    /// Scratch accumulator, reset at the start of every advance.
    acc: Vector2,
}

impl Default for PhysicsEngine {
    fn default() -> Self {
        Self::new(PhysicsConfig::default())
    }
}

impl PhysicsEngine {
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            gravity: config.gravity,
            time_step: config.time_step,
            friction: config.friction,
            bounds: config.bounds,
            restitution: config.restitution,
            acc: Vector2::ZERO,
        }
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn bounds(&self) -> Vector2 {
        self.bounds
    }

    /// Acceleration applied during the most recent advance.
    pub fn frame_acceleration(&self) -> Vector2 {
        self.acc
    }

    /// Resize the world (typically to the viewport's `(cols, rows)`).
    pub fn set_bounds(&mut self, width: f64, height: f64) {
        if self.bounds != Vector2::new(width, height) {
            log::debug!("world bounds {}x{} -> {}x{}", self.bounds.x, self.bounds.y, width, height);
        }
        self.bounds = Vector2::new(width, height);
    }

    /// Boundary hits slower than this come to rest instead of bouncing.
    pub fn stopping_threshold(&self) -> f64 {
        STOP_THRESHOLD / self.time_step
    }

    /// Whether the sprite's bottom edge is strictly above the floor.
    pub fn is_airborne(&self, sprite: &Sprite) -> bool {
        sprite.bottom() < self.bounds.y
    }

    /// Advance `sprite` by one time step.
    pub fn advance(&mut self, sprite: &mut Sprite) {
        let dt = self.time_step;
        self.acc = Vector2::ZERO;

        self.resolve_walls(sprite);

        if self.is_airborne(sprite) {
            self.acc.y += self.gravity;
        } else {
            self.apply_friction(sprite);
            self.resolve_floor(sprite);
        }

        let acc = self.acc;
        let vel = sprite.velocity_mut();
        vel.y += acc.y * dt;
        vel.x += acc.x * dt;
        let vel = *vel;

        let pos = sprite.position_mut();
        pos.y -= vel.y * dt + 0.5 * acc.y * dt * dt;
        pos.x += vel.x * dt + 0.5 * acc.x * dt * dt;
    }

    /// Clamp to the left/right walls and bounce or stop horizontally.
    ///
    /// Does nothing when the sprite is within bounds.
    pub fn resolve_walls(&self, sprite: &mut Sprite) {
        let x = sprite.position().x;
        let width = sprite.width();
        if x >= 0.0 && x + width <= self.bounds.x {
            return;
        }

        let clamped = if x < 0.0 { 0.0 } else { self.bounds.x - width };
        let threshold = self.stopping_threshold();
        let restitution = self.restitution.x;
        sprite.position_mut().x = clamped;
        let vel = sprite.velocity_mut();
        vel.x = bounce(vel.x, threshold, restitution);
    }

    /// Clamp a sprite that sank below the floor and bounce or stop vertically.
    pub fn resolve_floor(&self, sprite: &mut Sprite) {
        if sprite.bottom() <= self.bounds.y {
            return;
        }

        let height = sprite.height();
        let threshold = self.stopping_threshold();
        let restitution = self.restitution.y;
        sprite.position_mut().y = self.bounds.y - height;
        let vel = sprite.velocity_mut();
        vel.y = bounce(vel.y, threshold, restitution);
    }

    /// Oppose horizontal motion. Never decelerates past zero within one step.
    fn apply_friction(&mut self, sprite: &Sprite) {
        let vx = sprite.velocity().x;
        if vx == 0.0 {
            return;
        }
        let magnitude = (vx.abs() / self.time_step).min((self.gravity * self.friction).abs());
        self.acc.x -= vx.signum() * magnitude;
    }
}

#[inline]
fn bounce(v: f64, threshold: f64, restitution: f64) -> f64 {
    if v.abs() < threshold {
        0.0
    } else {
        v * -restitution
    }
}
