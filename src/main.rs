use std::env;
use std::process::ExitCode;

mod cli;
mod pass;
mod rng;

fn main() -> ExitCode {
    // Generated secrets must never land in a core dump.
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };

    let args: Vec<String> = env::args().collect();
    cli::run(&args)
}
