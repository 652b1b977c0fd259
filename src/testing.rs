//! Recording terminal double for unit tests.

use std::collections::VecDeque;
use std::io;

use crate::terminal::Terminal;

/// Bit set by [`FakeTerminal::blank_mode`] so applied modes are recognizable.
pub const BLANK_BIT: u32 = 0x8000;

/// Observable side effects, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Write(Vec<u8>),
    SetAttributes(u32),
    Read,
}

/// A scripted terminal that records what the blanker does to it.
#[derive(Debug)]
pub struct FakeTerminal {
    pub tty: bool,
    pub attrs: u32,
    pub fail_attributes: bool,
    pub fail_first_set: bool,
    pub fail_set_attributes: bool,
    /// Number of writes that succeed before every further write fails.
    pub fail_writes_after: Option<usize>,
    pub input: VecDeque<u8>,
    pub read_error: Option<io::ErrorKind>,
    pub events: Vec<Event>,
    sets: usize,
    writes: usize,
}

impl FakeTerminal {
    pub fn new() -> Self {
        Self {
            tty: true,
            attrs: 0o644,
            fail_attributes: false,
            fail_first_set: false,
            fail_set_attributes: false,
            fail_writes_after: None,
            input: VecDeque::new(),
            read_error: None,
            events: Vec::new(),
            sets: 0,
            writes: 0,
        }
    }

    pub fn with_input(bytes: &[u8]) -> Self {
        let mut term = Self::new();
        term.input.extend(bytes);
        term
    }

    /// All bytes successfully written, concatenated.
    pub fn output(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Write(b) => Some(b.as_slice()),
                _ => None,
            })
            .flatten()
            .copied()
            .collect()
    }
}

impl Terminal for FakeTerminal {
    type Attributes = u32;

    fn is_terminal(&self) -> bool {
        self.tty
    }

    fn attributes(&self) -> io::Result<u32> {
        if self.fail_attributes {
            return Err(io::Error::from_raw_os_error(9));
        }
        Ok(self.attrs)
    }

    fn set_attributes(&mut self, attrs: &u32) -> io::Result<()> {
        self.sets += 1;
        if self.fail_set_attributes || (self.fail_first_set && self.sets == 1) {
            return Err(io::Error::from_raw_os_error(5));
        }
        self.attrs = *attrs;
        self.events.push(Event::SetAttributes(*attrs));
        Ok(())
    }

    fn blank_mode(&self, saved: &u32) -> u32 {
        saved | BLANK_BIT
    }

    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        if let Some(limit) = self.fail_writes_after {
            if self.writes >= limit {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "output closed"));
            }
        }
        self.writes += 1;
        self.events.push(Event::Write(bytes.to_vec()));
        Ok(())
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        self.events.push(Event::Read);
        if let Some(kind) = self.read_error {
            return Err(io::Error::new(kind, "read failed"));
        }
        Ok(self.input.pop_front())
    }
}
