//! Byte I/O for the `print` and `read` builtins.
//!
//! Output can be directed to different destinations:
//! - stdout (the `output` command)
//! - a buffer, for embedding and tests
//! - nowhere: `result` mode, where `print` becomes a pure no-op
//!
//! Input comes from a reader (stdin), a buffer, or nothing (always end of
//! input). End of input is permanent for every source.
//!
//! Enum dispatch is used for both sides; there is a fixed, small set of
//! destinations.

use std::collections::VecDeque;
use std::io::{self, Read, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Where printed bytes go.
pub enum OutputHandler {
    Stdout,
    /// Captures to a buffer.
    Buffer(Mutex<Vec<u8>>),
    /// Discards output; printing is not an observable effect.
    Silent,
}

impl OutputHandler {
    pub fn buffer() -> Self {
        OutputHandler::Buffer(Mutex::new(Vec::new()))
    }

    /// Write one byte.
    pub fn write_byte(&self, byte: u8) -> io::Result<()> {
        match self {
            OutputHandler::Stdout => io::stdout().lock().write_all(&[byte]),
            OutputHandler::Buffer(buffer) => {
                buffer.lock().push(byte);
                Ok(())
            }
            OutputHandler::Silent => Ok(()),
        }
    }

    /// Flush buffered stdout output. No-op for the other handlers.
    pub fn flush(&self) -> io::Result<()> {
        match self {
            OutputHandler::Stdout => io::stdout().lock().flush(),
            OutputHandler::Buffer(_) | OutputHandler::Silent => Ok(()),
        }
    }

    pub fn is_silent(&self) -> bool {
        matches!(self, OutputHandler::Silent)
    }

    /// All captured bytes.
    ///
    /// Empty for handlers that don't capture (stdout, silent).
    pub fn captured(&self) -> Vec<u8> {
        match self {
            OutputHandler::Buffer(buffer) => buffer.lock().clone(),
            OutputHandler::Stdout | OutputHandler::Silent => Vec::new(),
        }
    }
}

/// Where read bytes come from.
pub enum InputSource {
    /// A byte reader such as stdin.
    Reader(Mutex<LatchedReader>),
    Buffer(Mutex<VecDeque<u8>>),
    /// Always at end of input.
    Empty,
}

impl InputSource {
    pub fn stdin() -> Self {
        InputSource::reader(io::stdin())
    }

    pub fn reader(reader: impl Read + Send + 'static) -> Self {
        InputSource::Reader(Mutex::new(LatchedReader::new(reader)))
    }

    pub fn buffer(bytes: impl Into<Vec<u8>>) -> Self {
        InputSource::Buffer(Mutex::new(bytes.into().into()))
    }

    /// Read one byte, `None` at end of input.
    ///
    /// Once `None` has been returned, every later call returns `None` too.
    pub fn read_byte(&self) -> io::Result<Option<u8>> {
        match self {
            InputSource::Reader(reader) => reader.lock().read_byte(),
            InputSource::Buffer(bytes) => Ok(bytes.lock().pop_front()),
            InputSource::Empty => Ok(None),
        }
    }
}

/// A reader whose end of input is permanent.
///
/// After the first end of input the reader is never polled again, so a
/// terminal that delivers bytes after Ctrl-D still reads as ended.
pub struct LatchedReader {
    reader: Box<dyn Read + Send>,
    at_end: bool,
}

impl LatchedReader {
    fn new(reader: impl Read + Send + 'static) -> Self {
        LatchedReader {
            reader: Box::new(reader),
            at_end: false,
        }
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        if self.at_end {
            return Ok(None);
        }
        let mut byte = [0u8];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => {
                    self.at_end = true;
                    return Ok(None);
                }
                Ok(_) => return Ok(Some(byte[0])),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
    }
}

/// Both ends of a program's byte I/O.
pub struct ByteIo {
    pub output: OutputHandler,
    pub input: InputSource,
}

/// Shared handle given to the builtins.
pub type SharedByteIo = Arc<ByteIo>;

impl ByteIo {
    pub fn new(output: OutputHandler, input: InputSource) -> SharedByteIo {
        Arc::new(ByteIo { output, input })
    }
}

/// stdout and stdin.
pub fn stdio() -> SharedByteIo {
    ByteIo::new(OutputHandler::Stdout, InputSource::stdin())
}

/// Output discarded, input from stdin.
pub fn silent_stdin() -> SharedByteIo {
    ByteIo::new(OutputHandler::Silent, InputSource::stdin())
}

/// Output captured, input served from `input`.
pub fn captured(input: impl Into<Vec<u8>>) -> SharedByteIo {
    ByteIo::new(OutputHandler::buffer(), InputSource::buffer(input))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
