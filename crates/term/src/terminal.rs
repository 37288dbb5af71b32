//! Terminal driver capability used by the engine.

use anyhow::Result;

use crate::core::Surface;
use crate::types::Key;

/// Everything the engine needs from a terminal.
///
/// The [`Surface`] half is the back buffer: sprites draw into it and
/// [`Terminal::present`] makes it visible.
pub trait Terminal: Surface {
    /// Switch to raw, non-echoing, non-blocking input.
    fn enter(&mut self) -> Result<()>;

    /// Restore the mode saved by [`Terminal::enter`].
    fn exit(&mut self) -> Result<()>;

    /// Whether raw mode is currently active.
    fn is_raw(&self) -> bool;

    /// Read at most one pending key without blocking.
    fn read_key(&mut self) -> Result<Option<Key>>;

    /// Re-read the device size, resizing the back buffer if it changed.
    /// Returns the extent as `(rows, cols)`.
    fn refresh_size(&mut self) -> Result<(i32, i32)>;

    /// Blank the back buffer.
    fn clear(&mut self);

    /// Flush the back buffer and park the cursor at the home position.
    fn present(&mut self) -> Result<()>;

    /// Block for roughly `ms` milliseconds.
    fn sleep(&mut self, ms: u64);
}
