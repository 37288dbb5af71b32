//! Per-invocation view of the driver handed to state handlers and key actions.

use std::rc::Rc;

use anyhow::{Context, Result};

use crate::action::Action;
use crate::core::{CellOutOfRange, Surface};
use crate::input::KeyBindings;
use crate::term::Terminal;
use crate::types::{Key, StateId};

/// Driver state a handler may mutate: current state, run flag, key bindings.
pub(crate) struct Control<G> {
    pub(crate) state: StateId,
    pub(crate) running: bool,
    pub(crate) keys: KeyBindings<dyn Action<G>>,
}

impl<G> Control<G> {
    pub(crate) fn new() -> Self {
        Self {
            state: StateId::INITIAL,
            running: true,
            keys: KeyBindings::new(),
        }
    }

    pub(crate) fn set_state(&mut self, state: StateId) {
        if self.state != state {
            log::debug!("state {} -> {}", self.state, state);
        }
        self.state = state;
    }
}

/// Everything a handler can reach besides its game: driver state, key
/// bindings and the terminal.
///
/// A frame is also a [`Surface`], so sprites draw straight into it.
pub struct Frame<'a, G> {
    ctl: &'a mut Control<G>,
    term: &'a mut dyn Terminal,
}

impl<'a, G> Frame<'a, G> {
    pub(crate) fn new(ctl: &'a mut Control<G>, term: &'a mut dyn Terminal) -> Self {
        Self { ctl, term }
    }

    /// Read at most one pending key and run its action, if any.
    ///
    /// Unbound keys are discarded. Returns the key that was read.
    pub fn poll_input(&mut self, game: &mut G) -> Result<Option<Key>> {
        let Some(key) = self.term.read_key()? else {
            return Ok(None);
        };
        match self.ctl.keys.get(key) {
            Some(action) => {
                log::trace!("dispatch {:?}", key);
                action
                    .invoke(game, self)
                    .with_context(|| format!("action bound to {key:?} failed"))?;
            }
            None => log::trace!("discard unbound {:?}", key),
        }
        Ok(Some(key))
    }

    /// Block for roughly `ms` milliseconds.
    pub fn wait(&mut self, ms: u64) {
        self.term.sleep(ms);
    }

    pub fn state(&self) -> StateId {
        self.ctl.state
    }

    pub fn set_state(&mut self, state: StateId) {
        self.ctl.set_state(state);
    }

    /// Return to [`StateId::INITIAL`].
    pub fn reset(&mut self) {
        self.ctl.set_state(StateId::INITIAL);
    }

    /// Stop the driver once the current handler returns.
    pub fn quit(&mut self) {
        log::debug!("quit requested in state {}", self.ctl.state);
        self.ctl.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.ctl.running
    }

    pub fn bind_key<F>(&mut self, key: impl Into<Key>, action: F)
    where
        F: Fn(&mut G, &mut Frame<'_, G>) -> Result<()> + 'static,
    {
        self.ctl.keys.bind(key, Rc::new(action));
    }

    pub fn bind_action<A>(&mut self, key: impl Into<Key>, action: A)
    where
        A: Action<G> + 'static,
    {
        self.ctl.keys.bind(key, Rc::new(action));
    }

    pub fn unbind_key(&mut self, key: impl Into<Key>) {
        self.ctl.keys.unbind(key);
    }

    pub fn is_key_bound(&self, key: impl Into<Key>) -> bool {
        self.ctl.keys.contains(key)
    }

    /// Viewport extent as `(rows, cols)`.
    pub fn viewport_size(&self) -> (i32, i32) {
        self.term.extent()
    }

    /// Re-query the terminal size and return the new `(rows, cols)`.
    pub fn refresh_size(&mut self) -> Result<(i32, i32)> {
        self.term.refresh_size()
    }

    /// Blank the back buffer.
    pub fn clear(&mut self) {
        self.term.clear();
    }

    /// Show the back buffer and park the cursor at home.
    pub fn present(&mut self) -> Result<()> {
        self.term.present()
    }

    pub fn terminal(&mut self) -> &mut dyn Terminal {
        &mut *self.term
    }
}

impl<G> Surface for Frame<'_, G> {
    fn extent(&self) -> (i32, i32) {
        self.term.extent()
    }

    fn write_cell(&mut self, row: i32, col: i32, ch: char) -> Result<(), CellOutOfRange> {
        self.term.write_cell(row, col, ch)
    }
}
