//! Recording boundary for tests and host bring-up
//!
//! Stands in for the host console. Every boundary call is recorded in
//! order, so tests can check both the text that came out and which
//! primitive produced it.

use alloc::string::String;
use alloc::vec::Vec;
use spin::Mutex;

use crate::boundary::PrimitiveBoundary;

/// One recorded boundary call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emission {
    /// `emit_char` with this code point
    Char(u32),
    /// `emit_string` with this text
    Str(String),
}

impl Emission {
    fn push_to(&self, out: &mut String) {
        match self {
            Emission::Char(code_point) => {
                out.push(char::from_u32(*code_point).unwrap_or(char::REPLACEMENT_CHARACTER))
            }
            Emission::Str(text) => out.push_str(text),
        }
    }
}

/// Boundary that records every call
#[derive(Debug, Default)]
pub struct RecordingBoundary {
    emissions: Mutex<Vec<Emission>>,
}

impl RecordingBoundary {
    pub const fn new() -> Self {
        Self {
            emissions: Mutex::new(Vec::new()),
        }
    }

    /// All recorded calls, oldest first
    pub fn emissions(&self) -> Vec<Emission> {
        self.emissions.lock().clone()
    }

    /// Recorded output flattened to text
    pub fn output(&self) -> String {
        let mut out = String::new();
        for emission in self.emissions.lock().iter() {
            emission.push_to(&mut out);
        }
        out
    }

    pub fn clear(&self) {
        self.emissions.lock().clear();
    }
}

impl PrimitiveBoundary for RecordingBoundary {
    fn emit_char(&self, code_point: u32) {
        self.emissions.lock().push(Emission::Char(code_point));
    }

    fn emit_string(&self, text: &str) {
        self.emissions.lock().push(Emission::Str(String::from(text)));
    }
}
