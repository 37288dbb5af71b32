//! StateMachine: the application driver.
//!
//! Each state id is bound to one handler. `run` repeatedly invokes the handler
//! of the current state until a handler (or key action) quits. Handlers may
//! change state directly through their [`Frame`], or declaratively by returning
//! a [`Signal`] that the transition table maps to a next state.

use std::collections::HashMap;
use std::rc::Rc;

use anyhow::Result;

use crate::action::Action;
use crate::error::EngineError;
use crate::frame::{Control, Frame};
use crate::term::Terminal;
use crate::types::{Key, Signal, StateId};

type Handler<G> = Box<dyn FnMut(&mut G, &mut Frame<'_, G>) -> Result<Signal>>;

/// Finite-state application driver over a game `G`.
pub struct StateMachine<G> {
    ctl: Control<G>,
    handlers: HashMap<StateId, Handler<G>>,
    transitions: HashMap<(StateId, Signal), StateId>,
}

impl<G> Default for StateMachine<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> StateMachine<G> {
    /// Start in [`StateId::INITIAL`], running, with nothing bound.
    pub fn new() -> Self {
        Self {
            ctl: Control::new(),
            handlers: HashMap::new(),
            transitions: HashMap::new(),
        }
    }

    /// Bind `handler` to `state`, replacing any previous handler.
    pub fn bind<F>(&mut self, state: StateId, handler: F)
    where
        F: FnMut(&mut G, &mut Frame<'_, G>) -> Result<Signal> + 'static,
    {
        self.handlers.insert(state, Box::new(handler));
    }

    pub fn unbind(&mut self, state: StateId) {
        self.handlers.remove(&state);
    }

    pub fn is_bound(&self, state: StateId) -> bool {
        self.handlers.contains_key(&state)
    }

    /// After the handler for `state` returns `signal`, move to `next`.
    pub fn chain(&mut self, state: StateId, signal: Signal, next: StateId) {
        self.transitions.insert((state, signal), next);
    }

    pub fn unchain(&mut self, state: StateId, signal: Signal) {
        self.transitions.remove(&(state, signal));
    }

    /// Bind a self-contained state: run `handler` until it returns `signal`,
    /// then continue in `next`.
    pub fn bind_chained<F>(
        &mut self,
        state: StateId,
        signal: Signal,
        next: StateId,
        handler: F,
    ) where
        F: FnMut(&mut G, &mut Frame<'_, G>) -> Result<Signal> + 'static,
    {
        self.bind(state, handler);
        self.chain(state, signal, next);
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

    pub fn is_running(&self) -> bool {
        self.ctl.running
    }

    /// Stop before the next handler invocation.
    pub fn quit(&mut self) {
        self.ctl.running = false;
    }

    /// Drive `game` on `term` until quit.
    ///
    /// The terminal is entered before the first handler runs and restored
    /// before this returns, whether the loop ended normally, a handler failed,
    /// or a handler panicked.
    pub fn run<T: Terminal>(&mut self, game: &mut G, term: &mut T) -> Result<(), EngineError> {
        let mut session = Session::open(term)?;
        log::debug!("run loop entered in state {}", self.ctl.state);

        while self.ctl.running {
            let state = self.ctl.state;
            let handler = self
                .handlers
                .get_mut(&state)
                .ok_or(EngineError::UnboundState(state))?;

            let mut frame = Frame::new(&mut self.ctl, session.terminal());
            let signal =
                handler(game, &mut frame).map_err(|source| EngineError::Handler { state, source })?;

            if let Some(&next) = self.transitions.get(&(state, signal)) {
                self.ctl.set_state(next);
            }
        }

        log::debug!("run loop left in state {}", self.ctl.state);
        session.close()
    }
}

/// Scoped terminal acquisition: entered on open, restored on close or drop.
struct Session<'t, T: Terminal> {
    term: &'t mut T,
    open: bool,
}

impl<'t, T: Terminal> Session<'t, T> {
    fn open(term: &'t mut T) -> Result<Self, EngineError> {
        if let Err(err) = term.enter() {
            // Partially entered modes still need undoing.
            let _ = term.exit();
            return Err(EngineError::Terminal(err));
        }
        Ok(Self { term, open: true })
    }

    fn terminal(&mut self) -> &mut dyn Terminal {
        &mut *self.term
    }

    fn close(mut self) -> Result<(), EngineError> {
        self.open = false;
        self.term.exit().map_err(EngineError::Terminal)
    }
}

impl<T: Terminal> Drop for Session<'_, T> {
    fn drop(&mut self) {
        if self.open {
            if let Err(err) = self.term.exit() {
                log::warn!("failed to restore terminal: {err:#}");
            }
        }
    }
}
