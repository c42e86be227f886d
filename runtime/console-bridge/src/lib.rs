//! Beans Console - text output for the managed runtime
//!
//! # Purpose
//! The runtime has no operating-system stream to write to. Its host hands
//! over two bare primitives instead: emit one character, emit one string.
//! This crate turns them into a thread-safe console with one print
//! operation per supported value kind.
//!
//! # Integration Points
//! - Depends on: host-supplied emit primitives ([`PrimitiveBoundary`])
//! - Provides to: runtime library code that prints (`print`, `println`,
//!   `newline`, `write_byte`)
//!
//! # Architecture
//! - `boundary`: the injected host primitives and their adapters
//! - `convert`: canonical text for each value kind
//! - `writer`: the synchronized [`ConsoleWriter`] facade
//! - `global`: process-wide installation of one writer
//! - `config`: terminator and absent-value text
//!
//! # Testing Strategy
//! - Unit tests: conversion rules, dispatch, terminators, byte truncation
//! - Integration tests: concurrent callers against a recording boundary,
//!   process-wide installation

#![no_std]

#[cfg(test)]
extern crate std;

extern crate alloc;

pub mod boundary;
pub mod config;
pub mod convert;
mod error;
pub mod global;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod writer;

pub use boundary::{HostBoundary, HostPrimitives, NullBoundary, PrimitiveBoundary};
pub use config::{ConsoleConfig, LineTerminator};
pub use convert::{canonical_text, Value};
pub use error::{ConsoleError, Result};
pub use global::{console, install, install_boundary, SystemConsole};
pub use writer::{ConsoleBuilder, ConsoleWriter};
