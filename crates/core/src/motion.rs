//! Movement commands: a fixed delta captured at creation, applied later.
//!
//! Key bindings hold these instead of closures so the delta is visible (and
//! comparable) data rather than hidden captured state.

use crate::sprite::Sprite;
use crate::types::{Vector2, VectorUpdate};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// `position += delta`
    Move(Vector2),
    /// `velocity += delta`
    Accelerate(Vector2),
    /// Replace position, fully or per axis.
    SetPosition(VectorUpdate),
    /// Replace velocity, fully or per axis.
    SetVelocity(VectorUpdate),
}

impl Motion {
    pub fn shift(dx: f64, dy: f64) -> Self {
        Motion::Move(Vector2::new(dx, dy))
    }

    pub fn push(dvx: f64, dvy: f64) -> Self {
        Motion::Accelerate(Vector2::new(dvx, dvy))
    }

    pub fn apply(&self, sprite: &mut Sprite) {
        match *self {
            Motion::Move(delta) => sprite.move_by(delta),
            Motion::Accelerate(delta) => sprite.accelerate(delta),
            Motion::SetPosition(update) => sprite.set_position(update),
            Motion::SetVelocity(update) => sprite.set_velocity(update),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_is_fixed_at_creation() {
        let cmd = Motion::shift(-1.0, 0.0);
        let mut s = Sprite::new("x");
        cmd.apply(&mut s);
        cmd.apply(&mut s);
        assert_eq!(s.position(), Vector2::new(-2.0, 0.0));
    }

    #[test]
    fn accelerate_and_override() {
        let mut s = Sprite::new("x").with_velocity(Vector2::new(1.0, -3.0));
        Motion::push(0.0, 10.0).apply(&mut s);
        assert_eq!(s.velocity(), Vector2::new(1.0, 7.0));

        Motion::SetVelocity(VectorUpdate::x(-5.0)).apply(&mut s);
        assert_eq!(s.velocity(), Vector2::new(-5.0, 7.0));

        Motion::SetPosition(VectorUpdate::y(2.0)).apply(&mut s);
        assert_eq!(s.position(), Vector2::new(0.0, 2.0));
    }
}
