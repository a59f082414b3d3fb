//! Shared helpers for irap-ascii integration tests.

#![allow(dead_code)]

use irap_ascii::{IrapHeader, IrapSurface};
use test_utils::fixtures::header::HeaderSpec;

/// Build a library header from a fixture geometry.
pub fn header_from(spec: &HeaderSpec) -> IrapHeader {
    IrapHeader::new(
        spec.ncol, spec.nrow, spec.xori, spec.yori, spec.xinc, spec.yinc, spec.rot,
    )
}

/// Build a surface from a fixture geometry and a column-major buffer.
pub fn surface_from(spec: &HeaderSpec, values: Vec<f32>) -> IrapSurface {
    IrapSurface::new(header_from(spec), values).expect("fixture shape")
}

/// The value section of a document (everything after the 4 header lines).
pub fn value_section(document: &str) -> &str {
    let mut offset = 0;
    for _ in 0..4 {
        let end = document[offset..]
            .find('\n')
            .expect("document has a 4 line header");
        offset += end + 1;
    }
    &document[offset..]
}

/// All value tokens of a document, in written order.
pub fn value_tokens(document: &str) -> Vec<&str> {
    value_section(document).split_whitespace().collect()
}
