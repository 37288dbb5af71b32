//! HeadlessTerminal: an in-memory [`Terminal`] for tests and replays.
//!
//! Input comes from a script, presented frames are captured as text, and
//! sleeps are counted instead of slept.

use std::collections::VecDeque;

use anyhow::Result;

use crate::core::{CellOutOfRange, Surface};
use crate::fb::FrameBuffer;
use crate::terminal::Terminal;
use crate::types::Key;

/// One scripted input poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scripted {
    /// Nothing pending this poll.
    Idle,
    Key(Key),
    /// The viewport becomes `width x height`, reported as [`Key::Resize`].
    Resize(u16, u16),
}

#[derive(Debug, Clone)]
pub struct HeadlessTerminal {
    back: FrameBuffer,
    /// Size the "device" has now; the back buffer catches up on resize events
    /// or [`Terminal::refresh_size`].
    physical: (u16, u16),
    script: VecDeque<Scripted>,
    frames: Vec<String>,
    raw: bool,
    enters: usize,
    exits: usize,
    slept_ms: u64,
}

impl HeadlessTerminal {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            back: FrameBuffer::new(width, height),
            physical: (width, height),
            script: VecDeque::new(),
            frames: Vec::new(),
            raw: false,
            enters: 0,
            exits: 0,
            slept_ms: 0,
        }
    }

    /// Queue a key press for a future poll.
    pub fn push_key(&mut self, key: impl Into<Key>) -> &mut Self {
        self.script.push_back(Scripted::Key(key.into()));
        self
    }

    /// Queue `polls` empty polls.
    pub fn push_idle(&mut self, polls: usize) -> &mut Self {
        self.script
            .extend(std::iter::repeat(Scripted::Idle).take(polls));
        self
    }

    pub fn push_resize(&mut self, width: u16, height: u16) -> &mut Self {
        self.script.push_back(Scripted::Resize(width, height));
        self
    }

    /// Change the device size without queueing a resize event.
    pub fn set_physical_size(&mut self, width: u16, height: u16) -> &mut Self {
        self.physical = (width, height);
        self
    }

    pub fn pending_input(&self) -> usize {
        self.script.len()
    }

    pub fn back_buffer(&self) -> &FrameBuffer {
        &self.back
    }

    /// Every presented frame, oldest first.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    pub fn enter_count(&self) -> usize {
        self.enters
    }

    pub fn exit_count(&self) -> usize {
        self.exits
    }

    /// Total milliseconds requested through [`Terminal::sleep`].
    pub fn slept_ms(&self) -> u64 {
        self.slept_ms
    }
}

impl Surface for HeadlessTerminal {
    fn extent(&self) -> (i32, i32) {
        self.back.extent()
    }

    fn write_cell(&mut self, row: i32, col: i32, ch: char) -> Result<(), CellOutOfRange> {
        self.back.write_cell(row, col, ch)
    }
}

impl Terminal for HeadlessTerminal {
    fn enter(&mut self) -> Result<()> {
        self.raw = true;
        self.enters += 1;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.raw = false;
        self.exits += 1;
        Ok(())
    }

    fn is_raw(&self) -> bool {
        self.raw
    }

    fn read_key(&mut self) -> Result<Option<Key>> {
        Ok(match self.script.pop_front() {
            None | Some(Scripted::Idle) => None,
            Some(Scripted::Key(key)) => Some(key),
            Some(Scripted::Resize(w, h)) => {
                self.physical = (w, h);
                self.back.resize(w, h);
                Some(Key::Resize)
            }
        })
    }

    fn refresh_size(&mut self) -> Result<(i32, i32)> {
        let (w, h) = self.physical;
        if (self.back.width(), self.back.height()) != (w, h) {
            self.back.resize(w, h);
        }
        Ok(self.back.extent())
    }

    fn clear(&mut self) {
        self.back.clear();
    }

    fn present(&mut self) -> Result<()> {
        self.frames.push(self.back.to_text());
        Ok(())
    }

    fn sleep(&mut self, ms: u64) {
        self.slept_ms += ms;
    }
}
