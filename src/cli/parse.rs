use std::fmt;

use super::CliFlags;

/// Uniform floor for `--length`, applied regardless of the specials mode.
pub const MIN_LENGTH: i64 = 4;
pub const MIN_COUNT: i64 = 1;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    UnknownArg(String),
    MissingValue(&'static str),
    InvalidNumber(String),
    LengthOutOfRange(i64),
    CountOutOfRange(i64),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
            ParseError::MissingValue(flag) => write!(f, "Missing value for {}", flag),
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::LengthOutOfRange(n) => {
                write!(f, "Value {} is out of range. Must be >= {}", n, MIN_LENGTH)
            }
            ParseError::CountOutOfRange(n) => {
                write!(f, "Value {} is out of range. Must be >= {}", n, MIN_COUNT)
            }
        }
    }
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "--version" => flags.version = true,
            "-v" | "--debug" => flags.debug = true,
            "--dontUseSpecials" => flags.no_specials = true,
            "-n" | "--length" => {
                i += 1;
                let n = numeric("--length", args.get(i))?;
                if n < MIN_LENGTH {
                    return Err(ParseError::LengthOutOfRange(n));
                }
                flags.length = n as usize;
            }
            "-c" | "--count" => {
                i += 1;
                let n = numeric("--count", args.get(i))?;
                if n < MIN_COUNT {
                    return Err(ParseError::CountOutOfRange(n));
                }
                flags.count = n as usize;
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn numeric(flag: &'static str, value: Option<&String>) -> Result<i64, ParseError> {
    let value = value.ok_or(ParseError::MissingValue(flag))?;
    value
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.clone()))
}
