//! ANSI escape sequences written to the output stream.

/// Clears the entire screen.
pub const CLEAR_SCREEN: &[u8] = b"\x1b[2J";

/// Moves the cursor to row 1, column 1.
pub const CURSOR_HOME: &[u8] = b"\x1b[H";

/// Hides the cursor.
pub const HIDE_CURSOR: &[u8] = b"\x1b[?25l";

/// Shows the cursor.
pub const SHOW_CURSOR: &[u8] = b"\x1b[?25h";

/// Sequences that blank the display, in write order, with their labels.
pub const BLANK_SEQUENCE: [(&str, &[u8]); 3] = [
    ("clear screen", CLEAR_SCREEN),
    ("cursor home", CURSOR_HOME),
    ("hide cursor", HIDE_CURSOR),
];
