//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, rendering, input dispatch).
//!
//! # Coordinates
//!
//! Positions and velocities are continuous `f64` pairs. They are only snapped to
//! the character grid at render time.
//!
//! - **x** grows to the right (columns)
//! - **y** grows downward on screen (rows), while velocity and gravity follow an
//!   upward-positive convention (see the physics engine)
//!
//! # Tuning Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_GRAVITY` | -10.0 | Vertical acceleration (upward-positive) |
//! | `DEFAULT_TIME_STEP` | 0.05 | Fixed integration step in seconds |
//! | `DEFAULT_FRICTION` | 0.4 | Kinetic friction coefficient |
//! | `DEFAULT_WORLD_WIDTH` | 170.0 | World bounds before the first resize |
//! | `DEFAULT_WORLD_HEIGHT` | 50.0 | World bounds before the first resize |
//! | `DEFAULT_RESTITUTION` | 0.5 | Bounce coefficient on both axes |
//! | `STOP_THRESHOLD` | 0.5 | Numerator of the `0.5 / dt` stopping threshold |
//!
//! # Examples
//!
//! ```
//! use tui_arcade_types::{Key, StateId, Vector2, VectorUpdate};
//!
//! let p = Vector2::new(1.0, 2.0) + Vector2::new(0.5, -1.0);
//! assert_eq!(p, Vector2::new(1.5, 1.0));
//!
//! let mut v = Vector2::new(3.0, 4.0);
//! VectorUpdate::x(5.0).apply_to(&mut v);
//! assert_eq!(v, Vector2::new(5.0, 4.0));
//!
//! assert_eq!(Key::from('q'), Key::Char('q'));
//! assert_eq!(StateId::INITIAL, StateId(0));
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

/// Default gravity (upward-positive, so negative pulls down).
pub const DEFAULT_GRAVITY: f64 = -10.0;

/// Default fixed time step in seconds.
pub const DEFAULT_TIME_STEP: f64 = 0.05;

/// Default kinetic friction coefficient.
pub const DEFAULT_FRICTION: f64 = 0.4;

/// World width used until the first viewport sync.
pub const DEFAULT_WORLD_WIDTH: f64 = 170.0;

/// World height used until the first viewport sync.
pub const DEFAULT_WORLD_HEIGHT: f64 = 50.0;

/// Default restitution on each axis.
pub const DEFAULT_RESTITUTION: f64 = 0.5;

/// A boundary hit slower than `STOP_THRESHOLD / dt` stops instead of bouncing.
pub const STOP_THRESHOLD: f64 = 0.5;

/// 2D vector with component-wise arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Per-axis replacement for a vector.
///
/// Axes left as `None` keep their current value. Used for control overrides
/// such as "set horizontal speed, keep falling".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VectorUpdate {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl VectorUpdate {
    pub const fn x(x: f64) -> Self {
        Self {
            x: Some(x),
            y: None,
        }
    }

    pub const fn y(y: f64) -> Self {
        Self {
            x: None,
            y: Some(y),
        }
    }

    pub fn apply_to(self, target: &mut Vector2) {
        if let Some(x) = self.x {
            target.x = x;
        }
        if let Some(y) = self.y {
            target.y = y;
        }
    }
}

impl From<Vector2> for VectorUpdate {
    fn from(v: Vector2) -> Self {
        Self {
            x: Some(v.x),
            y: Some(v.y),
        }
    }
}

impl From<(Option<f64>, Option<f64>)> for VectorUpdate {
    fn from((x, y): (Option<f64>, Option<f64>)) -> Self {
        Self { x, y }
    }
}

/// Input code delivered by the terminal driver.
///
/// Printable characters are carried as-is; named special codes pass through
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Enter,
    Esc,
    Backspace,
    Tab,
    /// Ctrl-C. Raw mode swallows the signal, so it arrives as a key.
    Interrupt,
    /// The viewport changed size.
    Resize,
}

impl From<char> for Key {
    fn from(ch: char) -> Self {
        Key::Char(ch)
    }
}

/// Opaque application state id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct StateId(pub u16);

impl StateId {
    /// State the driver starts in and returns to on reset.
    pub const INITIAL: StateId = StateId(0);
}

impl From<u16> for StateId {
    fn from(id: u16) -> Self {
        StateId(id)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Value returned by a state handler; selects a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Signal(pub u16);

impl Signal {
    /// "Nothing to report": never matched by a transition unless chained explicitly.
    pub const NONE: Signal = Signal(0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_addition_is_component_wise() {
        let a = Vector2::new(1.0, -2.0);
        let b = Vector2::new(0.25, 4.0);
        assert_eq!(a + b, Vector2::new(1.25, 2.0));

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
        assert_eq!((a + b) - b, a);
        assert_eq!(a * 2.0, Vector2::new(2.0, -4.0));
    }

    #[test]
    fn vector_update_touches_only_supplied_axes() {
        let mut v = Vector2::new(3.0, 4.0);
        VectorUpdate::y(-1.0).apply_to(&mut v);
        assert_eq!(v, Vector2::new(3.0, -1.0));

        VectorUpdate::from((None, None)).apply_to(&mut v);
        assert_eq!(v, Vector2::new(3.0, -1.0));

        VectorUpdate::from(Vector2::new(7.0, 8.0)).apply_to(&mut v);
        assert_eq!(v, Vector2::new(7.0, 8.0));
    }

    #[test]
    fn chars_convert_to_char_keys() {
        assert_eq!(Key::from(' '), Key::Char(' '));
        assert_ne!(Key::from('r'), Key::Resize);
    }

    #[test]
    fn default_tuning() {
        assert_eq!(DEFAULT_GRAVITY, -10.0);
        assert_eq!(DEFAULT_TIME_STEP, 0.05);
        assert_eq!(DEFAULT_FRICTION, 0.4);
        assert_eq!(DEFAULT_RESTITUTION, 0.5);
        assert_eq!(STOP_THRESHOLD, 0.5);
    }
}
