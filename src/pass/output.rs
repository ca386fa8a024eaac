//! Batch password output.

use std::fmt;
use std::io::{self, Write};

use zeroize::Zeroize;

use crate::rng::RandomSource;

use super::compose::{compose, UnderflowError};
use super::SecureBufWriter;

#[derive(Debug)]
pub enum OutputError {
    Underflow(UnderflowError),
    Io(io::Error),
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::Underflow(e) => write!(f, "{}", e),
            OutputError::Io(e) => write!(f, "failed to write output: {}", e),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::Underflow(e) => Some(e),
            OutputError::Io(e) => Some(e),
        }
    }
}

impl From<UnderflowError> for OutputError {
    fn from(e: UnderflowError) -> Self {
        OutputError::Underflow(e)
    }
}

impl From<io::Error> for OutputError {
    fn from(e: io::Error) -> Self {
        OutputError::Io(e)
    }
}

/// Compose `count` passwords and write each on its own line, in call order.
/// Every call is an independent draw; duplicates across lines are possible.
/// Each password buffer is zeroized once written.
pub fn write_batch<R: RandomSource, W: Write>(
    rng: &mut R,
    out: W,
    length: usize,
    use_specials: bool,
    count: usize,
) -> Result<(), OutputError> {
    let mut out = SecureBufWriter::new(out);

    for _ in 0..count {
        let mut pass = compose(rng, length, use_specials)?;
        pass.push('\n');
        out.write_all(pass.as_bytes())?;
        pass.zeroize();
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::charset;
    use crate::rng::OsSource;

    #[test]
    fn batch_writes_one_password_per_line() {
        let mut rng = OsSource;
        let mut sink: Vec<u8> = Vec::new();
        write_batch(&mut rng, &mut sink, 8, true, 3).unwrap();

        let text = String::from_utf8(sink).unwrap();
        assert!(text.ends_with('\n'));

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            assert_eq!(line.len(), 8);
            assert!(line.bytes().any(|c| charset::LOWERCASE.contains(&c)));
            assert!(line.bytes().any(|c| charset::UPPERCASE.contains(&c)));
            assert!(line.bytes().any(|c| charset::DIGITS.contains(&c)));
            assert!(line.bytes().any(|c| charset::SPECIALS.contains(&c)));
        }
    }

    #[test]
    fn batch_surfaces_underflow_instead_of_truncating() {
        let mut rng = OsSource;
        let mut sink: Vec<u8> = Vec::new();
        let err = write_batch(&mut rng, &mut sink, 2, true, 1).unwrap_err();
        assert!(matches!(err, OutputError::Underflow(_)));
        assert!(sink.is_empty());
    }
}
