//! Command-line front-end: flag parsing, validation, logging, and output.

mod flags;
mod parse;

pub use flags::CliFlags;
pub use parse::{parse, ParseError};

use std::io;
use std::process::ExitCode;

use log::debug;

use crate::pass;
use crate::rng::OsSource;

/// Run the CLI. Usage errors exit 2, runtime failures exit 1.
pub fn run(args: &[String]) -> ExitCode {
    let flags = match parse(args) {
        Ok(flags) => flags,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Try 'passgen --help' for usage.");
            return ExitCode::from(2);
        }
    };

    if flags.help {
        print_help();
        return ExitCode::SUCCESS;
    }
    if flags.version {
        println!("passgen {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    init_logging(flags.debug);
    debug!("parsed flags: {:?}", flags);

    let mut rng = OsSource;
    let stdout = io::stdout();
    let result = pass::write_batch(
        &mut rng,
        stdout.lock(),
        flags.length,
        !flags.no_specials,
        flags.count,
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(debug: bool) {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new().filter_level(level).init();
}

fn print_help() {
    println!("passgen - password generator with guaranteed class coverage");
    println!();
    println!("Every password contains at least one lowercase letter, one");
    println!("uppercase letter, one digit, and (unless disabled) one special");
    println!("symbol from !$%^()_-+=");
    println!();
    println!("USAGE:");
    println!("  passgen [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -n, --length <N>       Password length, >= 4 (default: 8)");
    println!("      --dontUseSpecials  Exclude special symbols");
    println!("  -c, --count <N>        Passwords to generate, >= 1 (default: 1)");
    println!("  -v, --debug            Enable debug logging");
    println!("  -h, --help             Display this help message");
    println!("      --version          Display version");
    println!();
    println!("EXAMPLES:");
    println!("  passgen                      One 8-character password");
    println!("  passgen -n 16                One password, 16 characters");
    println!("  passgen -n 20 -c 3           Three passwords, 20 characters each");
    println!("  passgen --dontUseSpecials    Alphanumeric only");
}
