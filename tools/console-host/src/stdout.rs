//! Stdout-backed host primitives
//!
//! Two ways to hand stdout to the console:
//! - [`StdoutBoundary`]: implements the boundary trait directly
//! - [`stdout_primitives`]: C function-pointer table, the shape an embedding
//!   host written in another language would provide
//!
//! Write errors are dropped. The boundary contract has no error channel.

use std::io::{self, Write};

use beans_console::boundary::host_text;
use beans_console::{HostPrimitives, PrimitiveBoundary};

/// Boundary writing UTF-8 to the process's stdout
pub struct StdoutBoundary {
    out: io::Stdout,
}

impl StdoutBoundary {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl PrimitiveBoundary for StdoutBoundary {
    fn emit_char(&self, code_point: u32) {
        write_char(&mut self.out.lock(), code_point);
    }

    fn emit_string(&self, text: &str) {
        let _ = self.out.lock().write_all(text.as_bytes());
    }
}

fn write_char(out: &mut impl Write, code_point: u32) {
    let c = char::from_u32(code_point).unwrap_or(char::REPLACEMENT_CHARACTER);
    let mut buf = [0u8; 4];
    let _ = out.write_all(c.encode_utf8(&mut buf).as_bytes());
}

unsafe extern "C" fn stdout_emit_char(code_point: u32) {
    write_char(&mut io::stdout().lock(), code_point);
}

unsafe extern "C" fn stdout_emit_string(text: *const u8, len: usize) {
    let _ = io::stdout().lock().write_all(host_text(text, len).as_bytes());
}

/// Primitive table backed by stdout
pub fn stdout_primitives() -> HostPrimitives {
    HostPrimitives {
        emit_char: Some(stdout_emit_char),
        emit_string: Some(stdout_emit_string),
    }
}

/// Flush anything stdout is still holding
pub fn flush() -> io::Result<()> {
    io::stdout().flush()
}
