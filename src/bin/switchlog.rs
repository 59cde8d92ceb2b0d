#![deny(unsafe_code)]

use mimalloc::MiMalloc;

/// High-performance memory allocator for improved allocation throughput.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::{env, io, process::ExitCode};

fn main() -> ExitCode {
    cli::init_diagnostics();

    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    let code = cli::run(env::args_os(), &mut stdout, &mut stderr);
    ExitCode::from(u8::try_from(code).unwrap_or(u8::MAX))
}
