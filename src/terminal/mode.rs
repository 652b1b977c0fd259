//! Non-interactive input mode derivation.

use nix::sys::termios::{
    ControlFlags, InputFlags, LocalFlags, OutputFlags, SpecialCharacterIndices, Termios,
};

/// Build the blanking mode from a saved snapshot.
///
/// Line buffering, echo, signal characters and extended input processing are
/// turned off, as are flow control, CR/NL translation, parity checks,
/// stripping and break signals. Frames are forced to 8 bits, output
/// post-processing is disabled, and reads return after exactly one byte with
/// no timeout. Every other bit is carried over unchanged.
pub fn blank_mode(saved: &Termios) -> Termios {
    let mut raw = saved.clone();

    raw.local_flags
        .remove(LocalFlags::ICANON | LocalFlags::ECHO | LocalFlags::ISIG | LocalFlags::IEXTEN);
    raw.input_flags.remove(
        InputFlags::IXON
            | InputFlags::IXOFF
            | InputFlags::ICRNL
            | InputFlags::INPCK
            | InputFlags::ISTRIP
            | InputFlags::BRKINT,
    );
    raw.control_flags.insert(ControlFlags::CS8);
    raw.output_flags.remove(OutputFlags::OPOST);

    raw.control_chars[SpecialCharacterIndices::VMIN as usize] = 1;
    raw.control_chars[SpecialCharacterIndices::VTIME as usize] = 0;

    raw
}
