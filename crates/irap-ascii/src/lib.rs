//! Writer for the IRAP classic ASCII surface grid format.
//!
//! IRAP ASCII is a plain-text interchange format for regular 2D surface
//! grids (depth/elevation/property maps). Downstream readers parse it
//! positionally, so this crate reproduces the layout exactly:
//!
//! - **Header**: four fixed lines of geometry with 6-decimal floats
//! - **Values**: 4-decimal tokens, a fixed number per line
//! - **Undefined**: NaN samples are written as `9999900.0000`
//!
//! # Architecture
//!
//! ```text
//! to_ascii_file / to_ascii_string
//!      │
//!      ├─► write_header(header, sink)     (4 lines, once)
//!      │
//!      └─► write_values(view, sink)       (streamed, line by line)
//!               │
//!               ├─► row 0: column 0..ncol
//!               ├─► row 1: column 0..ncol
//!               └─► ...wrapped every `values_per_line` tokens
//! ```
//!
//! # Example
//!
//! ```
//! use irap_ascii::{IrapHeader, IrapSurface};
//!
//! let header = IrapHeader::new(2, 2, 0.0, 0.0, 25.0, 25.0, 0.0);
//! let surface = IrapSurface::new(header, vec![1.0, 2.0, 3.0, f32::NAN])?;
//!
//! let text = irap_ascii::surface_to_ascii_string(&surface);
//! assert!(text.starts_with("-996 2 25.000000 25.000000\n"));
//! assert!(text.ends_with("1.0000 3.0000 2.0000 9999900.0000 "));
//! # Ok::<(), irap_ascii::IrapError>(())
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod header;
pub mod sink;
pub mod types;
pub mod values;

pub use config::AsciiWriterConfig;
pub use error::{IrapError, Result};
pub use export::{
    surface_to_ascii_file, surface_to_ascii_string, to_ascii_file, to_ascii_string, AsciiWriter,
};
pub use header::{format_header, write_header};
pub use sink::{IoSink, TextSink};
pub use types::{IrapHeader, IrapSurface, SurfaceView};
pub use values::{format_value, format_value_into, undef_token, write_values, WriteStats};

/// Format identifier written at the start of every IRAP ASCII file.
pub const IRAP_ASCII_ID: i32 = -996;

/// Value written in place of undefined (NaN) samples.
pub const UNDEF_MAP_IRAP_ASCII: f32 = 9_999_900.0;

/// Default number of value tokens per line.
pub const MAX_PER_LINE: usize = 9;
