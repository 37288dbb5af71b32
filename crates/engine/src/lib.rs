//! Engine module - the state-machine application driver
//!
//! A game is a value `G` plus a [`StateMachine<G>`] whose states are bound to
//! handlers. Each handler receives the game and a [`Frame`] giving access to
//! input dispatch, state changes, key rebinding, drawing and frame pacing.
//!
//! # Frame order
//!
//! Handlers are expected to run one frame in a fixed order so that identical
//! input produces identical trajectories:
//!
//! 1. poll input (at most one key)
//! 2. propagate trails
//! 3. advance physics for every sprite
//! 4. state-dependent key rebinding
//! 5. render
//! 6. wait
//!
//! # Example
//!
//! ```
//! use tui_arcade_engine::{Frame, Signal, StateId, StateMachine};
//! use tui_arcade_term::{HeadlessTerminal, Terminal};
//!
//! let mut machine: StateMachine<u32> = StateMachine::new();
//! machine.bind_key('q', |_: &mut u32, frame: &mut Frame<'_, u32>| {
//!     frame.quit();
//!     Ok(())
//! });
//! machine.bind(StateId::INITIAL, |frames: &mut u32, frame: &mut Frame<'_, u32>| {
//!     *frames += 1;
//!     frame.poll_input(frames)?;
//!     frame.wait(50);
//!     Ok(Signal::NONE)
//! });
//!
//! let mut term = HeadlessTerminal::new(80, 24);
//! term.push_idle(2).push_key('q');
//!
//! let mut frames = 0;
//! machine.run(&mut frames, &mut term).unwrap();
//! assert_eq!(frames, 3);
//! assert_eq!(term.slept_ms(), 150);
//! assert!(!term.is_raw());
//! ```

pub mod action;
pub mod error;
pub mod frame;
pub mod machine;

pub use tui_arcade_core as core;
pub use tui_arcade_input as input;
pub use tui_arcade_term as term;
pub use tui_arcade_types as types;

pub use action::{Action, SpriteCommand};
pub use error::EngineError;
pub use frame::Frame;
pub use machine::StateMachine;
pub use types::{Key, Signal, StateId};
