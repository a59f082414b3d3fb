//! IRAP ASCII header block.
//!
//! The header is four lines:
//!
//! ```text
//! -996 <nrow> <xinc> <yinc>
//! <xori> <xmax> <yori> <ymax>
//! <ncol> <rot> <xrot> <yrot>
//! 0 0 0 0 0 0 0
//! ```
//!
//! Counts are plain integers; every float is fixed-point with 6 decimals.

use once_cell::sync::Lazy;

use crate::sink::TextSink;
use crate::types::IrapHeader;
use crate::IRAP_ASCII_ID;

/// Format identifier followed by its separator.
static ID_TOKEN: Lazy<String> = Lazy::new(|| format!("{} ", IRAP_ASCII_ID));

/// Reserved trailing header line.
const RESERVED_LINE: &str = "0 0 0 0 0 0 0\n";

/// Render the four header lines into a single string.
pub fn format_header(header: &IrapHeader) -> String {
    format!(
        "{id}{nrow} {xinc:.6} {yinc:.6}\n\
         {xori:.6} {xmax:.6} {yori:.6} {ymax:.6}\n\
         {ncol} {rot:.6} {xrot:.6} {yrot:.6}\n\
         {reserved}",
        id = ID_TOKEN.as_str(),
        nrow = header.nrow,
        xinc = header.xinc,
        yinc = header.yinc,
        xori = header.xori,
        xmax = header.xmax,
        yori = header.yori,
        ymax = header.ymax,
        ncol = header.ncol,
        rot = header.rot,
        xrot = header.xrot,
        yrot = header.yrot,
        reserved = RESERVED_LINE,
    )
}

/// Append the header block to `sink`.
pub fn write_header<S: TextSink>(header: &IrapHeader, sink: &mut S) -> Result<(), S::Error> {
    sink.put(&format_header(header))
}
