//! TUI Arcade (workspace facade crate).
//!
//! This package exposes the `tui_arcade::{core,engine,input,term,types}` public
//! API while the implementation lives in dedicated crates under `crates/`, plus
//! the [`demo`] game shipped as the default binary.

pub mod demo;

pub use tui_arcade_core as core;
pub use tui_arcade_engine as engine;
pub use tui_arcade_input as input;
pub use tui_arcade_term as term;
pub use tui_arcade_types as types;
