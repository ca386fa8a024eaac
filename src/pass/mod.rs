//! Password composition and output.

pub mod charset;
mod compose;
pub mod output;

pub use compose::{compose, UnderflowError};
pub use output::{write_batch, OutputError};

use std::io::{self, Write};

use zeroize::Zeroize;

const BUF_CAPACITY: usize = 8 * 1024;

/// Buffered writer that zeroizes its buffer on every flush and on drop,
/// so password bytes do not linger in freed memory.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(BUF_CAPACITY),
        }
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        // Flush ahead of a would-be realloc: growing would leave a stale
        // copy of the buffer behind that nothing ever zeroizes.
        if self.buf.len() + data.len() > BUF_CAPACITY {
            self.flush()?;
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            let res = self.inner.write_all(&self.buf);
            self.buf.zeroize();
            res?;
        }
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
