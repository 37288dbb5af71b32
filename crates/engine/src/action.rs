//! Key actions: closures or data-carrying command objects.

use anyhow::Result;

use crate::core::{Motion, Sprite};
use crate::frame::Frame;

/// Zero-argument (from the dispatcher's point of view) action bound to a key.
///
/// A failing action aborts the handler that polled it.
pub trait Action<G> {
    fn invoke(&self, game: &mut G, frame: &mut Frame<'_, G>) -> Result<()>;
}

impl<G, F> Action<G> for F
where
    F: Fn(&mut G, &mut Frame<'_, G>) -> Result<()>,
{
    fn invoke(&self, game: &mut G, frame: &mut Frame<'_, G>) -> Result<()> {
        self(game, frame)
    }
}

/// A [`Motion`] aimed at one sprite of the game.
///
/// `target` selects the sprite; the motion's delta was fixed when the command
/// was built.
pub struct SpriteCommand<G> {
    target: fn(&mut G) -> &mut Sprite,
    motion: Motion,
}

impl<G> SpriteCommand<G> {
    pub fn new(target: fn(&mut G) -> &mut Sprite, motion: Motion) -> Self {
        Self { target, motion }
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }
}

impl<G> Clone for SpriteCommand<G> {
    fn clone(&self) -> Self {
        Self {
            target: self.target,
            motion: self.motion,
        }
    }
}

impl<G> Action<G> for SpriteCommand<G> {
    fn invoke(&self, game: &mut G, _frame: &mut Frame<'_, G>) -> Result<()> {
        self.motion.apply((self.target)(game));
        Ok(())
    }
}
