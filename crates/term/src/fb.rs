//! Framebuffer: the in-memory character grid sprites draw into.

use crate::core::{CellOutOfRange, Surface};

/// 2D framebuffer of character cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![' '; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer, blanking its contents.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.clear();
        self.cells.resize(len, ' ');
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, ch: char) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = ch;
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(' ');
    }

    /// Row `y` as a string (empty when out of range).
    pub fn row_string(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = (y as usize) * (self.width as usize);
        self.cells[start..start + self.width as usize].iter().collect()
    }

    /// Whole frame, rows separated by `\n`.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for y in 0..self.height {
            if y > 0 {
                out.push('\n');
            }
            out.push_str(&self.row_string(y));
        }
        out
    }
}

impl Surface for FrameBuffer {
    fn extent(&self) -> (i32, i32) {
        (self.height as i32, self.width as i32)
    }

    fn write_cell(&mut self, row: i32, col: i32, ch: char) -> Result<(), CellOutOfRange> {
        let out_of_range = || CellOutOfRange {
            row,
            col,
            rows: self.height as i32,
            cols: self.width as i32,
        };
        let x = u16::try_from(col).map_err(|_| out_of_range())?;
        let y = u16::try_from(row).map_err(|_| out_of_range())?;
        let i = self.idx(x, y).ok_or_else(out_of_range)?;
        self.cells[i] = ch;
        Ok(())
    }
}
