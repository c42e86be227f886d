//! Primitive boundary trait
//!
//! The host runtime supplies exactly two output operations: emit one
//! character and emit a string. This is NOT a stream - there is no
//! buffering, no flush and no error reporting. The console writer is
//! built on top of whatever implements this trait.
//!
//! Implementations:
//! - [`HostBoundary`]: C function-pointer table handed over by the host
//! - [`NullBoundary`]: discards everything
//! - `mock::RecordingBoundary`: records calls for tests

use alloc::boxed::Box;
use alloc::sync::Arc;
use core::slice;

use crate::{ConsoleError, Result};

/// Host-supplied output primitives
///
/// Both operations are synchronous and never fail. Implementations must be
/// shareable between threads; the console writer serializes the calls.
pub trait PrimitiveBoundary: Send + Sync {
    /// Write a single character to the host console
    ///
    /// # Arguments
    /// * `code_point` - Unicode code point of the character
    fn emit_char(&self, code_point: u32);

    /// Write a string to the host console
    ///
    /// Default implementation writes character by character.
    /// Can be overridden when the host has a native string primitive.
    fn emit_string(&self, text: &str) {
        for c in text.chars() {
            self.emit_char(c as u32);
        }
    }
}

impl<T: PrimitiveBoundary + ?Sized> PrimitiveBoundary for &T {
    fn emit_char(&self, code_point: u32) {
        (**self).emit_char(code_point)
    }

    fn emit_string(&self, text: &str) {
        (**self).emit_string(text)
    }
}

impl<T: PrimitiveBoundary + ?Sized> PrimitiveBoundary for Box<T> {
    fn emit_char(&self, code_point: u32) {
        (**self).emit_char(code_point)
    }

    fn emit_string(&self, text: &str) {
        (**self).emit_string(text)
    }
}

impl<T: PrimitiveBoundary + ?Sized> PrimitiveBoundary for Arc<T> {
    fn emit_char(&self, code_point: u32) {
        (**self).emit_char(code_point)
    }

    fn emit_string(&self, text: &str) {
        (**self).emit_string(text)
    }
}

/// Host primitive table (C ABI)
///
/// Filled in by the embedding host before the runtime starts. A null entry
/// means the host did not provide that primitive.
#[repr(C)]
#[derive(Clone, Copy, Default)]
pub struct HostPrimitives {
    /// Emit one Unicode code point
    pub emit_char: Option<unsafe extern "C" fn(code_point: u32)>,

    /// Emit `len` bytes of UTF-8 text starting at `text`
    pub emit_string: Option<unsafe extern "C" fn(text: *const u8, len: usize)>,
}

/// Boundary backed by a validated [`HostPrimitives`] table
#[derive(Clone, Copy)]
pub struct HostBoundary {
    emit_char: unsafe extern "C" fn(u32),
    emit_string: unsafe extern "C" fn(*const u8, usize),
}

impl HostBoundary {
    /// Bind to the host's primitive table
    ///
    /// # Errors
    /// Returns `MissingPrimitive` if either entry is null
    ///
    /// # Safety
    /// Both function pointers must remain callable from any thread for as
    /// long as the returned boundary (or any writer built on it) is alive.
    /// `emit_string` must only read `len` bytes from `text`.
    pub unsafe fn from_primitives(primitives: HostPrimitives) -> Result<Self> {
        let emit_char = primitives
            .emit_char
            .ok_or(ConsoleError::MissingPrimitive { name: "emit_char" })?;
        let emit_string = primitives
            .emit_string
            .ok_or(ConsoleError::MissingPrimitive { name: "emit_string" })?;

        Ok(Self {
            emit_char,
            emit_string,
        })
    }
}

impl PrimitiveBoundary for HostBoundary {
    fn emit_char(&self, code_point: u32) {
        // SAFETY: validity guaranteed by `from_primitives` caller
        unsafe { (self.emit_char)(code_point) }
    }

    fn emit_string(&self, text: &str) {
        let bytes = text.as_bytes();
        // SAFETY: pointer and length describe a live, initialized slice
        unsafe { (self.emit_string)(bytes.as_ptr(), bytes.len()) }
    }
}

/// Null boundary (no output)
///
/// Used when the host has no console attached, and for benchmarks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBoundary;

impl PrimitiveBoundary for NullBoundary {
    #[inline(always)]
    fn emit_char(&self, _code_point: u32) {}

    #[inline(always)]
    fn emit_string(&self, _text: &str) {}
}

/// Reassemble the text handed to a C `emit_string` primitive
///
/// Helper for host implementations written in Rust.
///
/// # Safety
/// `text` must point to `len` initialized bytes that stay valid for `'a`.
pub unsafe fn host_text<'a>(text: *const u8, len: usize) -> &'a str {
    if text.is_null() || len == 0 {
        return "";
    }
    let bytes = slice::from_raw_parts(text, len);
    // The writer only ever passes `&str` data across the boundary
    core::str::from_utf8(bytes).unwrap_or("\u{FFFD}")
}
