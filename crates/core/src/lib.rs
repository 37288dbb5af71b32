//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains sprites, composite sprite chains and the fixed-step
//! physics integrator. It has **no dependencies** on terminals or input
//! handling: sprites draw into anything implementing [`Surface`].
//!
//! - **Deterministic**: identical inputs produce identical trajectories
//! - **Testable**: drawing targets are plain in-memory grids in tests
//!
//! # Module Structure
//!
//! - [`surface`]: the drawing target capability and its out-of-range error
//! - [`sprite`]: character art, grid snapping and viewport clipping
//! - [`composite`]: sprite chains with back-to-front drawing and trail propagation
//! - [`motion`]: movement commands with a delta fixed at creation
//! - [`physics`]: gravity, friction and wall/floor collision per time step
//! - [`rng`]: seeded LCG for reproducible world setup
//!
//! # Example
//!
//! ```
//! use tui_arcade_core::{PhysicsConfig, PhysicsEngine, Sprite};
//! use tui_arcade_types::Vector2;
//!
//! let mut physics = PhysicsEngine::new(PhysicsConfig::default().with_bounds(80.0, 24.0));
//! let mut ball = Sprite::new("o").with_position(Vector2::new(10.0, 2.0));
//!
//! physics.advance(&mut ball);
//! assert!(ball.velocity().y < 0.0); // falling (upward-positive velocity)
//! assert!(ball.position().y > 2.0); // moving down the screen
//! ```

pub mod composite;
pub mod motion;
pub mod physics;
pub mod rng;
pub mod sprite;
pub mod surface;

pub use tui_arcade_types as types;

// Re-export commonly used types for convenience
pub use composite::{CompositeSprite, Drawable, Segments, SpriteNode};
pub use motion::Motion;
pub use physics::{PhysicsConfig, PhysicsEngine};
pub use rng::SimpleRng;
pub use sprite::{snap, Image, Sprite};
pub use surface::{CellOutOfRange, Surface};
