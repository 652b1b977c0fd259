//! Real tty backend built on termios.

use std::io::{self, IsTerminal, Read, Stdin, Stdout, Write};
use std::os::fd::AsFd;

use nix::sys::termios::{tcgetattr, tcsetattr, SetArg, Termios};
use nix::unistd;

use super::{mode, Terminal};

/// A terminal made of a controlled descriptor plus input and output streams.
///
/// `fd` is the descriptor whose attributes are read and changed. Input and
/// output are kept separate so callers can point them elsewhere.
pub struct Tty<F, R, W> {
    fd: F,
    input: R,
    output: W,
}

/// Unbuffered stream over a descriptor. Each call is exactly one syscall.
///
/// The std handles are not used directly: `Stdin` reads ahead into its own
/// buffer and `Stdout` reports success when fd 1 is closed.
#[derive(Debug)]
pub struct FdStream<F>(F);

impl<F: AsFd> FdStream<F> {
    pub fn new(fd: F) -> Self {
        Self(fd)
    }
}

impl<F: AsFd> Read for FdStream<F> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        unistd::read(self.0.as_fd(), buf).map_err(io::Error::from)
    }
}

impl<F: AsFd> Write for FdStream<F> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        unistd::write(self.0.as_fd(), buf).map_err(io::Error::from)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// The process's own terminal: attributes and input on stdin, output on stdout.
pub type Stdio = Tty<Stdin, FdStream<Stdin>, FdStream<Stdout>>;

impl Tty<Stdin, FdStream<Stdin>, FdStream<Stdout>> {
    /// Build the tty backed by descriptors 0 and 1.
    pub fn stdio() -> Stdio {
        Tty::new(
            io::stdin(),
            FdStream::new(io::stdin()),
            FdStream::new(io::stdout()),
        )
    }
}

impl<F, R, W> Tty<F, R, W>
where
    F: AsFd,
    R: Read,
    W: Write,
{
    /// Create a tty from its parts.
    pub fn new(fd: F, input: R, output: W) -> Self {
        Self { fd, input, output }
    }
}

impl<F, R, W> Terminal for Tty<F, R, W>
where
    F: AsFd,
    R: Read,
    W: Write,
{
    type Attributes = Termios;

    fn is_terminal(&self) -> bool {
        self.fd.as_fd().is_terminal()
    }

    fn attributes(&self) -> io::Result<Termios> {
        tcgetattr(self.fd.as_fd()).map_err(io::Error::from)
    }

    fn set_attributes(&mut self, attrs: &Termios) -> io::Result<()> {
        tcsetattr(self.fd.as_fd(), SetArg::TCSAFLUSH, attrs).map_err(io::Error::from)
    }

    fn blank_mode(&self, saved: &Termios) -> Termios {
        mode::blank_mode(saved)
    }

    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.output.write_all(bytes)?;
        self.output.flush()
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        match self.input.read(&mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(buf[0])),
        }
    }
}
