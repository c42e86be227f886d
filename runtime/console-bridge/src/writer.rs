//! Console writer - synchronized facade over the primitive boundary
//!
//! Every operation takes the writer's lock for its full duration: the value
//! is converted and all of its boundary calls are made before the lock is
//! released. Output of one call is therefore contiguous, and at most one
//! sequence of boundary calls is in flight at any time.
//!
//! The writer owns no buffer. Each call goes straight to the boundary.

use spin::Mutex;
use static_assertions::assert_impl_all;

use crate::boundary::{HostBoundary, HostPrimitives, NullBoundary, PrimitiveBoundary};
use crate::config::ConsoleConfig;
use crate::convert::{canonical_text, Value};
use crate::{ConsoleError, Result};

/// Synchronized console writer
///
/// # Deadlocks
/// The lock is not reentrant. An opaque value whose `Display` prints to the
/// same writer will spin forever.
pub struct ConsoleWriter<B: PrimitiveBoundary> {
    boundary: Mutex<B>,
    config: ConsoleConfig,
}

assert_impl_all!(ConsoleWriter<NullBoundary>: Send, Sync);
assert_impl_all!(ConsoleWriter<HostBoundary>: Send, Sync);

impl<B: PrimitiveBoundary> ConsoleWriter<B> {
    /// Create a writer with the compile-time default configuration
    pub fn new(boundary: B) -> Self {
        Self::with_config(boundary, ConsoleConfig::default())
    }

    pub fn with_config(boundary: B, config: ConsoleConfig) -> Self {
        log::debug!(
            "console writer bound to boundary (terminator {:?})",
            config.terminator
        );
        Self {
            boundary: Mutex::new(boundary),
            config,
        }
    }

    /// Start building a writer whose boundary may not be available yet
    pub fn builder() -> ConsoleBuilder<B> {
        ConsoleBuilder::new()
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Emit the canonical text of `value`, with no terminator
    pub fn print<'a>(&self, value: impl Into<Value<'a>>) {
        let value = value.into();
        let boundary = self.boundary.lock();
        self.emit_value(&*boundary, &value);
    }

    /// Emit the canonical text of `value` followed by one line terminator
    ///
    /// Text and terminator are emitted under a single lock acquisition.
    pub fn println<'a>(&self, value: impl Into<Value<'a>>) {
        let value = value.into();
        let boundary = self.boundary.lock();
        self.emit_value(&*boundary, &value);
        self.emit_terminator(&*boundary);
    }

    /// Emit exactly one line terminator
    pub fn newline(&self) {
        let boundary = self.boundary.lock();
        self.emit_terminator(&*boundary);
    }

    /// Emit one character whose code is the low 8 bits of `code`
    ///
    /// Bits above bit 7 are discarded, so `write_byte(321)` emits `'A'`.
    pub fn write_byte(&self, code: i32) {
        let boundary = self.boundary.lock();
        boundary.emit_char((code & 0xFF) as u32);
    }

    fn emit_value(&self, boundary: &B, value: &Value<'_>) {
        match *value {
            Value::Char(c) => boundary.emit_char(c as u32),
            _ => boundary.emit_string(&canonical_text(value, self.config.absent_text)),
        }
    }

    fn emit_terminator(&self, boundary: &B) {
        for &c in self.config.terminator.chars() {
            boundary.emit_char(c as u32);
        }
    }
}

impl ConsoleWriter<HostBoundary> {
    /// Create a writer bound to the host's primitive table
    ///
    /// # Errors
    /// Returns `MissingPrimitive` if the table has a null entry. Nothing is
    /// emitted in that case.
    ///
    /// # Safety
    /// Same contract as [`HostBoundary::from_primitives`].
    pub unsafe fn from_host(primitives: HostPrimitives, config: ConsoleConfig) -> Result<Self> {
        match HostBoundary::from_primitives(primitives) {
            Ok(boundary) => Ok(Self::with_config(boundary, config)),
            Err(err) => {
                log::error!("console construction failed: {}", err);
                Err(err)
            }
        }
    }
}

/// Builder for [`ConsoleWriter`]
pub struct ConsoleBuilder<B> {
    boundary: Option<B>,
    config: ConsoleConfig,
}

impl<B: PrimitiveBoundary> ConsoleBuilder<B> {
    pub fn new() -> Self {
        Self {
            boundary: None,
            config: ConsoleConfig::default(),
        }
    }

    pub fn boundary(mut self, boundary: B) -> Self {
        self.boundary = Some(boundary);
        self
    }

    pub fn config(mut self, config: ConsoleConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the writer
    ///
    /// # Errors
    /// Returns `MissingBoundary` if no boundary was supplied
    pub fn build(self) -> Result<ConsoleWriter<B>> {
        let Some(boundary) = self.boundary else {
            log::error!("console construction failed: no primitive boundary");
            return Err(ConsoleError::MissingBoundary);
        };
        Ok(ConsoleWriter::with_config(boundary, self.config))
    }
}

impl<B: PrimitiveBoundary> Default for ConsoleBuilder<B> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LineTerminator;
    use crate::mock::{Emission, RecordingBoundary};
    use alloc::string::String;
    use alloc::vec;

    fn lf() -> ConsoleConfig {
        ConsoleConfig::new().with_terminator(LineTerminator::Lf)
    }

    #[test]
    fn test_print_emits_text_only() {
        let recorder = RecordingBoundary::new();
        let console = ConsoleWriter::with_config(&recorder, lf());

        console.print(true);
        console.print(false);
        console.print(-12i32);
        console.print(9_000_000_000i64);
        console.print(2.5f32);
        console.print(1e7f64);
        console.print("str");

        assert_eq!(recorder.output(), "truefalse-1290000000002.51.0E7str");
    }

    #[test]
    fn test_char_goes_through_emit_char() {
        let recorder = RecordingBoundary::new();
        let console = ConsoleWriter::with_config(&recorder, lf());

        console.print('A');
        console.println('A');

        assert_eq!(
            recorder.emissions(),
            vec![
                Emission::Char('A' as u32),
                Emission::Char('A' as u32),
                Emission::Char('\n' as u32),
            ]
        );
    }

    #[test]
    fn test_println_appends_one_terminator() {
        let recorder = RecordingBoundary::new();
        let console = ConsoleWriter::with_config(&recorder, lf());

        console.println(42i32);

        assert_eq!(
            recorder.emissions(),
            vec![Emission::Str(String::from("42")), Emission::Char('\n' as u32)]
        );
    }

    #[test]
    fn test_newline_emits_only_terminator() {
        let recorder = RecordingBoundary::new();
        let console = ConsoleWriter::with_config(&recorder, lf());

        console.newline();

        assert_eq!(recorder.output(), "\n");
        assert_eq!(recorder.emissions().len(), 1);
    }

    #[test]
    fn test_crlf_terminator() {
        let recorder = RecordingBoundary::new();
        let config = ConsoleConfig::new().with_terminator(LineTerminator::CrLf);
        let console = ConsoleWriter::with_config(&recorder, config);

        console.println("a");
        console.newline();

        assert_eq!(recorder.output(), "a\r\n\r\n");
    }

    #[test]
    fn test_write_byte_truncates_to_low_bits() {
        let recorder = RecordingBoundary::new();
        let console = ConsoleWriter::with_config(&recorder, lf());

        console.write_byte(65);
        console.write_byte(321);
        console.write_byte(65 - 256);
        console.write_byte(65 + 256 * 1000);

        assert_eq!(recorder.output(), "AAAA");
        assert!(recorder
            .emissions()
            .iter()
            .all(|e| *e == Emission::Char('A' as u32)));
    }

    #[test]
    fn test_absent_opaque_uses_configured_text() {
        let recorder = RecordingBoundary::new();
        let console =
            ConsoleWriter::with_config(&recorder, lf().with_absent_text("<absent>"));

        console.println(Value::ABSENT);
        console.print(Value::display(&17u64));

        assert_eq!(recorder.output(), "<absent>\n17");
    }

    #[test]
    fn test_chars_render_as_one_string() {
        let recorder = RecordingBoundary::new();
        let console = ConsoleWriter::with_config(&recorder, lf());
        let chars = ['o', 'k'];

        console.print(&chars[..]);

        assert_eq!(recorder.emissions(), vec![Emission::Str(String::from("ok"))]);
    }

    #[test]
    fn test_builder_requires_boundary() {
        let result = ConsoleWriter::<NullBoundary>::builder().build();
        assert_eq!(result.err(), Some(ConsoleError::MissingBoundary));

        let console = ConsoleBuilder::new()
            .boundary(NullBoundary)
            .config(lf())
            .build()
            .expect("boundary supplied");
        assert_eq!(console.config().terminator, LineTerminator::Lf);
    }

    #[test]
    fn test_from_host_missing_primitive_emits_nothing() {
        static CALLS: Mutex<usize> = Mutex::new(0);

        unsafe extern "C" fn count_char(_code_point: u32) {
            *CALLS.lock() += 1;
        }

        let result = unsafe {
            ConsoleWriter::from_host(
                HostPrimitives {
                    emit_char: Some(count_char),
                    emit_string: None,
                },
                lf(),
            )
        };

        assert_eq!(
            result.err(),
            Some(ConsoleError::MissingPrimitive { name: "emit_string" })
        );
        assert_eq!(*CALLS.lock(), 0);
    }
}
