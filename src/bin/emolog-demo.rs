#![deny(unsafe_code)]

use mimalloc::MiMalloc;

/// High-performance memory allocator for improved allocation throughput.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[path = "demo.rs"]
mod demo;

use std::{env, io, process::ExitCode};

fn main() -> ExitCode {
    let mut stdout = io::stdout();
    let mut stderr = io::stderr().lock();
    demo::run_with(env::args_os(), &mut stdout, &mut stderr)
}
