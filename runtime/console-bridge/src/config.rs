//! Console configuration
//!
//! The defaults are selected at compile time through cargo features:
//! - `crlf`: terminate lines with `"\r\n"` (serial-style terminals)
//! - otherwise lines end with a bare `"\n"`
//!
//! Hosts that need a different setup at runtime build a `ConsoleConfig`
//! explicitly and pass it to the writer.

/// Text used for an absent opaque value unless configured otherwise
pub const DEFAULT_ABSENT_TEXT: &str = "null";

/// Line ending appended by the line-print operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTerminator {
    /// `"\n"`
    Lf,
    /// `"\r\n"`
    CrLf,
}

impl LineTerminator {
    /// Characters of the terminator, in emission order
    pub const fn chars(self) -> &'static [char] {
        match self {
            LineTerminator::Lf => &['\n'],
            LineTerminator::CrLf => &['\r', '\n'],
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            LineTerminator::Lf => "\n",
            LineTerminator::CrLf => "\r\n",
        }
    }
}

#[cfg(feature = "crlf")]
const DEFAULT_TERMINATOR: LineTerminator = LineTerminator::CrLf;

#[cfg(not(feature = "crlf"))]
const DEFAULT_TERMINATOR: LineTerminator = LineTerminator::Lf;

/// Console writer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Line ending for `println` and `newline`
    pub terminator: LineTerminator,

    /// Rendering of an absent opaque value
    pub absent_text: &'static str,
}

impl ConsoleConfig {
    /// Compile-time default configuration
    pub const fn new() -> Self {
        Self {
            terminator: DEFAULT_TERMINATOR,
            absent_text: DEFAULT_ABSENT_TEXT,
        }
    }

    pub const fn with_terminator(mut self, terminator: LineTerminator) -> Self {
        self.terminator = terminator;
        self
    }

    pub const fn with_absent_text(mut self, absent_text: &'static str) -> Self {
        self.absent_text = absent_text;
        self
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::new()
    }
}
