//! Key binding registry.
//!
//! Actions are stored behind `Rc` so a dispatcher can clone the handle out,
//! release the registry, and let the action rebind keys while it runs.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::types::Key;

/// Maps key codes to shared actions.
pub struct KeyBindings<A: ?Sized> {
    map: HashMap<Key, Rc<A>>,
}

impl<A: ?Sized> KeyBindings<A> {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Bind `action` to `key`, replacing any previous binding.
    pub fn bind(&mut self, key: impl Into<Key>, action: Rc<A>) {
        let key = key.into();
        log::trace!("bind {:?}", key);
        self.map.insert(key, action);
    }

    /// Remove the binding for `key`. Unbinding an unbound key is a no-op.
    pub fn unbind(&mut self, key: impl Into<Key>) -> Option<Rc<A>> {
        self.map.remove(&key.into())
    }

    /// Shared handle to the action bound to `key`.
    pub fn get(&self, key: impl Into<Key>) -> Option<Rc<A>> {
        self.map.get(&key.into()).cloned()
    }

    pub fn contains(&self, key: impl Into<Key>) -> bool {
        self.map.contains_key(&key.into())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }
}

impl<A: ?Sized> Default for KeyBindings<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized> fmt::Debug for KeyBindings<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.map.keys().collect();
        keys.sort_by_key(|k| format!("{:?}", k));
        f.debug_struct("KeyBindings").field("keys", &keys).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    type Action = dyn Fn(&Cell<i32>);

    #[test]
    fn bind_and_dispatch() {
        let mut keys: KeyBindings<Action> = KeyBindings::new();
        keys.bind('a', Rc::new(|c: &Cell<i32>| c.set(c.get() - 1)));
        keys.bind(Key::Right, Rc::new(|c: &Cell<i32>| c.set(c.get() + 1)));

        let counter = Cell::new(0);
        if let Some(action) = keys.get('a') {
            action(&counter);
        }
        if let Some(action) = keys.get(Key::Right) {
            action(&counter);
            action(&counter);
        }
        assert_eq!(counter.get(), 1);
        assert!(keys.get('z').is_none());
    }

    #[test]
    fn rebinding_replaces() {
        let mut keys: KeyBindings<Action> = KeyBindings::new();
        keys.bind('w', Rc::new(|c: &Cell<i32>| c.set(1)));
        keys.bind('w', Rc::new(|c: &Cell<i32>| c.set(2)));
        assert_eq!(keys.len(), 1);

        let counter = Cell::new(0);
        if let Some(action) = keys.get('w') {
            action(&counter);
        }
        assert_eq!(counter.get(), 2);
    }

    #[test]
    fn unbind_is_idempotent() {
        let mut keys: KeyBindings<Action> = KeyBindings::new();
        keys.bind('s', Rc::new(|_: &Cell<i32>| {}));
        assert!(keys.unbind('s').is_some());
        assert!(keys.unbind('s').is_none());
        assert!(!keys.contains('s'));
        assert!(keys.is_empty());
    }

    #[test]
    fn handle_outlives_unbind() {
        let mut keys: KeyBindings<Action> = KeyBindings::new();
        keys.bind(' ', Rc::new(|c: &Cell<i32>| c.set(7)));

        let handle = keys.get(' ');
        keys.clear();
        let counter = Cell::new(0);
        if let Some(action) = handle {
            action(&counter);
        }
        assert_eq!(counter.get(), 7);
    }
}
