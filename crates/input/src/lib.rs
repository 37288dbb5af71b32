//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any game. It maps `crossterm`
//! events into [`crate::types::Key`] codes and provides a registry binding
//! keys to shared actions.

pub mod bindings;
pub mod map;

pub use tui_arcade_types as types;

pub use bindings::KeyBindings;
pub use map::{map_event, map_key_code};
