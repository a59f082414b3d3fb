//! Output destinations for formatted text.
//!
//! The formatters only ever append complete pieces of text (a header line or
//! a finished value line), so a sink needs a single operation. Errors are the
//! sink's own and are passed back to the caller untouched.

use std::convert::Infallible;
use std::io::Write;

/// A destination that formatted IRAP text is appended to.
pub trait TextSink {
    /// Error produced when appending fails.
    type Error;

    /// Append `text` to the sink.
    fn put(&mut self, text: &str) -> Result<(), Self::Error>;
}

/// In-memory destination. Appending to a `String` cannot fail.
impl TextSink for String {
    type Error = Infallible;

    fn put(&mut self, text: &str) -> Result<(), Self::Error> {
        self.push_str(text);
        Ok(())
    }
}

/// Adapter that lets any [`std::io::Write`] receive formatted text.
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
}

impl<W: Write> IoSink<W> {
    /// Wrap a writer.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Get a mutable reference to the wrapped writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> TextSink for IoSink<W> {
    type Error = std::io::Error;

    fn put(&mut self, text: &str) -> Result<(), Self::Error> {
        self.inner.write_all(text.as_bytes())
    }
}
