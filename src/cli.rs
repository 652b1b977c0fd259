//! Command-line interface for ttyblank.
//!
//! There are no operational flags; only help and version are recognized.
//! Uses lexopt for minimal binary size overhead.

use std::ffi::OsString;

/// Command-line arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    /// Show version and exit.
    pub version: bool,
    /// Show help and exit.
    pub help: bool,
}

/// Parse command-line arguments.
pub fn parse_args() -> Result<Args, ArgsError> {
    parse_args_from(std::env::args_os())
}

/// Parse arguments from an iterator (for testing).
pub fn parse_args_from<I>(args: I) -> Result<Args, ArgsError>
where
    I: IntoIterator<Item = OsString>,
{
    use lexopt::prelude::*;

    let mut result = Args::default();
    let mut parser = lexopt::Parser::from_iter(args);

    while let Some(arg) = parser.next()? {
        match arg {
            Short('h') | Long("help") => {
                result.help = true;
            }
            Short('V') | Long("version") => {
                result.version = true;
            }
            Value(val) => {
                return Err(ArgsError::UnexpectedArgument(val.to_string_lossy().into()));
            }
            _ => return Err(arg.unexpected().into()),
        }
    }

    Ok(result)
}

/// Print help message.
pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        r#"ttyblank {version}
Blank the terminal and wait for a keypress

USAGE:
    ttyblank [OPTIONS]

Clears the screen and hides the cursor, then waits for a single key.
The terminal mode and cursor are restored on exit. Standard input must
be a terminal.

OPTIONS:
    -h, --help              Print help
    -V, --version           Print version

ENVIRONMENT VARIABLES:
    RUST_LOG                Log filter for diagnostics on stderr [default: ttyblank=warn]

EXIT STATUS:
    0    a key was read
    1    not a terminal, or a terminal operation failed

EXAMPLES:
    # Blank the current terminal
    ttyblank

    # Run on a virtual console from /etc/inittab instead of a getty
    tty2::respawn:/usr/local/bin/ttyblank
"#
    );
}

/// Print version.
pub fn print_version() {
    println!("ttyblank {}", env!("CARGO_PKG_VERSION"));
}

/// Argument parsing errors.
#[derive(Debug)]
pub enum ArgsError {
    /// Lexopt parsing error.
    Lexopt(lexopt::Error),
    /// Unexpected positional argument.
    UnexpectedArgument(String),
}

impl std::fmt::Display for ArgsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexopt(e) => write!(f, "{}", e),
            Self::UnexpectedArgument(arg) => {
                write!(f, "unexpected argument: '{}'", arg)
            }
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<lexopt::Error> for ArgsError {
    fn from(e: lexopt::Error) -> Self {
        Self::Lexopt(e)
    }
}
