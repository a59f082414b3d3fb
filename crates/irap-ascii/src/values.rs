//! IRAP ASCII value stream.
//!
//! Values are written row by row (all columns of row 0, then row 1, ...),
//! each as a fixed-point token with 4 decimals, and wrapped after a fixed
//! number of tokens regardless of where rows end. Undefined samples are
//! written as the 4-decimal rendering of [`UNDEF_MAP_IRAP_ASCII`].
//!
//! Rounding follows Rust's fixed-precision float formatting: the exact
//! binary value is rounded, ties to even. `0.12345_f32` is stored as
//! `0.1234500035...` and is written `0.1235`.

use std::fmt::{self, Write};

use once_cell::sync::Lazy;

use crate::sink::TextSink;
use crate::types::SurfaceView;
use crate::{MAX_PER_LINE, UNDEF_MAP_IRAP_ASCII};

/// Decimals written for every value token.
const VALUE_PRECISION: usize = 4;

/// Capacity of the stack buffer used by the fast formatting path.
/// The widest finite `f32` token is 45 bytes (`-3402823...0.0000`).
const FAST_BUF_LEN: usize = 64;

/// Token written for undefined samples.
static UNDEF_TOKEN: Lazy<String> =
    Lazy::new(|| format!("{:.*}", VALUE_PRECISION, UNDEF_MAP_IRAP_ASCII));

/// The token written for undefined samples (`9999900.0000`).
pub fn undef_token() -> &'static str {
    UNDEF_TOKEN.as_str()
}

/// Counters for one written value stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteStats {
    /// Tokens written.
    pub values: usize,
    /// Lines written, including a trailing partial line.
    pub lines: usize,
    /// Infinite samples written as the undefined token.
    pub replaced_non_finite: usize,
}

/// Fixed-capacity, non-allocating `fmt::Write` target.
struct StackBuf<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> StackBuf<N> {
    fn new() -> Self {
        Self {
            buf: [0; N],
            len: 0,
        }
    }

    fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.buf[..self.len]).ok()
    }
}

impl<const N: usize> fmt::Write for StackBuf<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        if end > N {
            return Err(fmt::Error);
        }
        self.buf[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

/// Format `value` into a stack buffer of `N` bytes and append it to `line`.
/// Returns false, leaving `line` untouched, when the token does not fit.
fn append_fast<const N: usize>(line: &mut String, value: f32) -> bool {
    let mut buf = StackBuf::<N>::new();
    if write!(buf, "{:.*}", VALUE_PRECISION, value).is_err() {
        return false;
    }
    match buf.as_str() {
        Some(token) => {
            line.push_str(token);
            true
        }
        None => false,
    }
}

/// Heap formatting of the widened value. Widening `f32` to `f64` is exact,
/// so the token is identical to the fast path's.
fn append_fallback(line: &mut String, value: f32) {
    line.push_str(&format!("{:.*}", VALUE_PRECISION, f64::from(value)));
}

fn append_fixed_4<const N: usize>(line: &mut String, value: f32) {
    if !value.is_finite() {
        line.push_str(undef_token());
        return;
    }

    if !append_fast::<N>(line, value) {
        append_fallback(line, value);
    }
}

/// Append the token for `value` to `line`.
///
/// NaN and infinite values produce the undefined token.
pub fn format_value_into(line: &mut String, value: f32) {
    append_fixed_4::<FAST_BUF_LEN>(line, value);
}

/// The token for a single value.
pub fn format_value(value: f32) -> String {
    let mut token = String::new();
    format_value_into(&mut token, value);
    token
}

/// Write the value stream with `values_per_line` tokens per line.
pub(crate) fn write_values_wrapped<S: TextSink>(
    view: &SurfaceView<'_>,
    sink: &mut S,
    values_per_line: usize,
) -> Result<WriteStats, S::Error> {
    debug_assert!(values_per_line > 0, "values_per_line must be > 0");
    let values_per_line = values_per_line.max(1);

    let mut stats = WriteStats::default();
    let mut remaining_on_line = values_per_line;
    let mut line = String::with_capacity(values_per_line * 16);

    for row in 0..view.rows() {
        for column in 0..view.columns() {
            let value = view.at(column, row);
            if value.is_infinite() {
                stats.replaced_non_finite += 1;
            }
            format_value_into(&mut line, value);
            stats.values += 1;

            remaining_on_line -= 1;
            if remaining_on_line > 0 {
                line.push(' ');
            } else {
                line.push('\n');
                sink.put(&line)?;
                stats.lines += 1;
                line.clear();
                remaining_on_line = values_per_line;
            }
        }
    }

    if !line.is_empty() {
        sink.put(&line)?;
        stats.lines += 1;
    }

    Ok(stats)
}

/// Append every value of `view` to `sink`, [`MAX_PER_LINE`] per line.
pub fn write_values<S: TextSink>(view: &SurfaceView<'_>, sink: &mut S) -> Result<(), S::Error> {
    write_values_wrapped(view, sink, MAX_PER_LINE).map(|_| ())
}
