//! Drawing target abstraction shared by sprites and terminal backends.

use thiserror::Error;

/// A cell write landed outside the drawable area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cell ({row}, {col}) is outside the {rows}x{cols} surface")]
pub struct CellOutOfRange {
    pub row: i32,
    pub col: i32,
    pub rows: i32,
    pub cols: i32,
}

/// A grid of character cells that sprites can draw into.
pub trait Surface {
    /// Drawable extent as `(rows, cols)`.
    fn extent(&self) -> (i32, i32);

    /// Write one character cell.
    ///
    /// Implementations must report out-of-range coordinates as an error rather
    /// than panicking; callers treat that error as ignorable.
    fn write_cell(&mut self, row: i32, col: i32, ch: char) -> Result<(), CellOutOfRange>;
}
