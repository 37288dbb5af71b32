//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! Sprites draw into a character framebuffer which a [`Terminal`] backend
//! flushes to the screen.
//!
//! - [`TerminalRenderer`]: crossterm raw mode, diff-based flushing
//! - [`HeadlessTerminal`]: scripted input and captured frames, no I/O

pub mod fb;
pub mod headless;
pub mod renderer;
pub mod terminal;

pub use tui_arcade_core as core;
pub use tui_arcade_input as input;
pub use tui_arcade_types as types;

pub use fb::FrameBuffer;
pub use headless::{HeadlessTerminal, Scripted};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use terminal::Terminal;
