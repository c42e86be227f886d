//! Process-wide system console
//!
//! The runtime installs exactly one console writer at startup and hands the
//! returned `&'static` reference to whoever needs to print. There is no
//! teardown: the writer lives until the process exits.

use alloc::boxed::Box;
use spin::Once;
use static_assertions::assert_impl_all;

use crate::boundary::PrimitiveBoundary;
use crate::writer::ConsoleWriter;
use crate::{ConsoleError, Result};

/// Type-erased boundary used by the system console
pub type DynBoundary = Box<dyn PrimitiveBoundary>;

/// The console writer installed for the whole process
pub type SystemConsole = ConsoleWriter<DynBoundary>;

assert_impl_all!(SystemConsole: Send, Sync);

static SYSTEM_CONSOLE: Once<SystemConsole> = Once::new();

/// Install the process-wide console
///
/// Must be called once, early in runtime startup, before any output.
///
/// # Errors
/// Returns `AlreadyInstalled` if a console is already in place. The
/// rejected writer is dropped without emitting anything.
pub fn install(writer: SystemConsole) -> Result<&'static SystemConsole> {
    let mut installed = false;
    let console = SYSTEM_CONSOLE.call_once(|| {
        installed = true;
        writer
    });

    if installed {
        log::info!(
            "system console installed (terminator {:?})",
            console.config().terminator
        );
        Ok(console)
    } else {
        log::warn!("system console already installed; ignoring new writer");
        Err(ConsoleError::AlreadyInstalled)
    }
}

/// Install a console over `boundary` with the default configuration
pub fn install_boundary<B: PrimitiveBoundary + 'static>(
    boundary: B,
) -> Result<&'static SystemConsole> {
    let boundary: DynBoundary = Box::new(boundary);
    install(ConsoleWriter::new(boundary))
}

/// Get the installed system console, if any
pub fn console() -> Option<&'static SystemConsole> {
    SYSTEM_CONSOLE.get()
}
