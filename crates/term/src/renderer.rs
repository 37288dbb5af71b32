//! TerminalRenderer: the crossterm-backed [`Terminal`].
//!
//! Sprites draw into a back buffer; `present` diffs it against the last flushed
//! frame and only writes the changed runs.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;

use crossterm::{
    cursor,
    event::{self, Event},
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::core::{CellOutOfRange, Surface};
use crate::fb::FrameBuffer;
use crate::input::map_event;
use crate::terminal::Terminal;
use crate::types::Key;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    back: FrameBuffer,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    raw: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        let (w, h) = terminal::size().unwrap_or((80, 24));
        Self {
            stdout: io::stdout(),
            back: FrameBuffer::new(w, h),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
            raw: false,
        }
    }

    /// Force the next present to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn back_buffer(&self) -> &FrameBuffer {
        &self.back
    }

    fn queue_restore(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for TerminalRenderer {
    fn extent(&self) -> (i32, i32) {
        self.back.extent()
    }

    fn write_cell(&mut self, row: i32, col: i32, ch: char) -> Result<(), CellOutOfRange> {
        self.back.write_cell(row, col, ch)
    }
}

impl Terminal for TerminalRenderer {
    fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.raw = true;
        let (w, h) = terminal::size()?;
        self.back.resize(w, h);
        self.invalidate();

        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        log::debug!("terminal entered raw mode at {}x{}", w, h);
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        let screen = self.queue_restore().and_then(|()| self.flush_buf());
        let restored = restore_in_order(screen, terminal::disable_raw_mode);
        self.raw = false;
        restored?;
        log::debug!("terminal restored");
        Ok(())
    }

    fn is_raw(&self) -> bool {
        self.raw
    }

    fn read_key(&mut self) -> Result<Option<Key>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        let ev = event::read()?;
        if let Event::Resize(w, h) = ev {
            self.back.resize(w, h);
            self.invalidate();
        }
        Ok(map_event(&ev))
    }

    fn refresh_size(&mut self) -> Result<(i32, i32)> {
        let (w, h) = terminal::size()?;
        if (self.back.width(), self.back.height()) != (w, h) {
            log::debug!("terminal resized to {}x{}", w, h);
            self.back.resize(w, h);
            self.invalidate();
        }
        Ok(self.back.extent())
    }

    fn clear(&mut self) {
        self.back.clear();
    }

    fn present(&mut self) -> Result<()> {
        self.buf.clear();
        let same_size = self
            .last
            .as_ref()
            .is_some_and(|prev| prev.width() == self.back.width() && prev.height() == self.back.height());
        if same_size {
            if let Some(prev) = self.last.as_mut() {
                encode_diff_into(prev, &self.back, &mut self.buf)?;
                prev.clone_from(&self.back);
            }
        } else {
            encode_full_into(&self.back, &mut self.buf)?;
            self.last = Some(self.back.clone());
        }
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.flush_buf()
    }

    fn sleep(&mut self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }
}

/// Leave raw mode even when restoring the screen failed.
///
/// Returns the first error.
fn restore_in_order(screen: Result<()>, cooked: impl FnOnce() -> io::Result<()>) -> Result<()> {
    let cooked = cooked();
    screen?;
    cooked?;
    Ok(())
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    for y in 0..fb.height() {
        out.queue(Print(fb.row_string(y)))?;
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            out.queue(Print(next.get(x + dx, y).unwrap_or(' ')))?;
        }
        Ok(())
    })
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_run_iterator_coalesces_adjacent_cells() {
        let a = FrameBuffer::new(5, 1);
        let mut b = FrameBuffer::new(5, 1);

        // Change cells [1..=3] into X.
        for x in 1..=3 {
            b.set(x, 0, 'X');
        }

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(1, 0, 3)]);
    }

    #[test]
    fn changed_runs_split_on_unchanged_cells() {
        let a = FrameBuffer::new(6, 2);
        let mut b = FrameBuffer::new(6, 2);
        b.set(0, 0, '#');
        b.set(2, 0, '#');
        b.set(5, 1, '#');

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(0, 0, 1), (2, 0, 1), (5, 1, 1)]);
    }

    #[test]
    fn identical_frames_encode_nothing() {
        let mut fb = FrameBuffer::new(4, 2);
        fb.set(1, 1, 'o');
        let mut out = Vec::new();
        encode_diff_into(&fb.clone(), &fb, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn full_encode_contains_every_row() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.set(0, 0, 'a');
        fb.set(2, 1, 'z');
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("a  "));
        assert!(text.contains("  z"));
    }

    #[test]
    fn raw_mode_is_left_even_if_the_screen_write_failed() {
        let mut left_raw = false;
        let result = restore_in_order(Err(anyhow::anyhow!("broken pipe")), || {
            left_raw = true;
            Ok(())
        });
        assert!(left_raw);
        assert_eq!(result.unwrap_err().to_string(), "broken pipe");
    }

    #[test]
    fn screen_error_wins_over_raw_mode_error() {
        let result = restore_in_order(Err(anyhow::anyhow!("screen")), || {
            Err(io::Error::other("cooked"))
        });
        assert_eq!(result.unwrap_err().to_string(), "screen");

        let result = restore_in_order(Ok(()), || Err(io::Error::other("cooked")));
        assert_eq!(result.unwrap_err().to_string(), "cooked");
        assert!(restore_in_order(Ok(()), || Ok(())).is_ok());
    }
}
