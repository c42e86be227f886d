//! Beans Console Host
//!
//! Plays the role of the embedding host: binds stdout as the console's
//! primitive boundary, installs the system console and runs a demo
//! workload through it.
//!
//! Usage:
//!   beans-console-host [--crlf] [--abi] [--threads N] [--lines N]
//!
//! Logs go to stderr (`RUST_LOG`), console output to stdout.

mod demo;
mod stdout;

use anyhow::{Context, Result};
use clap::Parser;

use beans_console::global::DynBoundary;
use beans_console::{ConsoleConfig, ConsoleWriter, HostBoundary, LineTerminator};

use crate::stdout::{stdout_primitives, StdoutBoundary};

#[derive(Parser, Debug)]
#[command(name = "beans-console-host")]
#[command(about = "Run the Beans console over stdout")]
struct Args {
    /// Terminate lines with "\r\n" instead of "\n"
    #[arg(long, env = "BEANS_CONSOLE_CRLF")]
    crlf: bool,

    /// Bind through the C primitive table instead of the Rust trait
    #[arg(long)]
    abi: bool,

    /// Number of concurrent printing threads
    #[arg(long, default_value_t = 4, env = "BEANS_CONSOLE_THREADS")]
    threads: usize,

    /// Lines printed by each thread
    #[arg(long, default_value_t = 3, env = "BEANS_CONSOLE_LINES")]
    lines: usize,

    /// Text printed for an absent opaque value
    #[arg(long, default_value = "null", env = "BEANS_CONSOLE_ABSENT_TEXT")]
    absent_text: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let terminator = if args.crlf {
        LineTerminator::CrLf
    } else {
        LineTerminator::Lf
    };
    // Lives for the rest of the process, like the console itself
    let absent_text: &'static str = Box::leak(args.absent_text.into_boxed_str());
    let config = ConsoleConfig::new()
        .with_terminator(terminator)
        .with_absent_text(absent_text);

    log::info!("Configuration:");
    log::info!("  Terminator:  {:?}", config.terminator);
    log::info!("  Absent text: {:?}", config.absent_text);
    log::info!("  Binding:     {}", if args.abi { "C primitive table" } else { "trait" });
    log::info!("  Workers:     {} x {} lines", args.threads, args.lines);

    let boundary: DynBoundary = if args.abi {
        // SAFETY: the stdout primitives are plain functions valid for the whole process
        let host = unsafe { HostBoundary::from_primitives(stdout_primitives()) }
            .context("Failed to bind host primitives")?;
        Box::new(host)
    } else {
        Box::new(StdoutBoundary::new())
    };

    let console = beans_console::install(ConsoleWriter::with_config(boundary, config))
        .context("Failed to install system console")?;

    demo::print_samples(console);
    demo::run_threads(console, args.threads, args.lines);

    stdout::flush().context("Failed to flush stdout")?;
    log::info!("Done");

    Ok(())
}
