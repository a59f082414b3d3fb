//! File and in-memory export of IRAP ASCII surfaces.
//!
//! Every entry point writes the header once, then the full value stream.
//! File exports create (or truncate) the destination; on failure the
//! partially written file is left in place.

use std::convert::Infallible;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::AsciiWriterConfig;
use crate::error::{IrapError, Result};
use crate::sink::{IoSink, TextSink};
use crate::types::{IrapHeader, IrapSurface, SurfaceView};
use crate::values::{self, WriteStats};

/// Writer for IRAP ASCII documents.
#[derive(Debug, Clone, Default)]
pub struct AsciiWriter {
    config: AsciiWriterConfig,
}

impl AsciiWriter {
    /// Create a writer with the given configuration.
    pub fn new(config: AsciiWriterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The writer configuration.
    pub fn config(&self) -> &AsciiWriterConfig {
        &self.config
    }

    /// Append the four header lines to `sink`.
    pub fn write_header<S: TextSink>(
        &self,
        header: &IrapHeader,
        sink: &mut S,
    ) -> std::result::Result<(), S::Error> {
        crate::header::write_header(header, sink)
    }

    /// Append the wrapped value stream of `view` to `sink`.
    pub fn write_values<S: TextSink>(
        &self,
        view: &SurfaceView<'_>,
        sink: &mut S,
    ) -> std::result::Result<WriteStats, S::Error> {
        values::write_values_wrapped(view, sink, self.config.values_per_line)
    }

    /// Write a complete document (header, then values) to `sink`.
    pub fn write_document<S: TextSink>(
        &self,
        header: &IrapHeader,
        view: &SurfaceView<'_>,
        sink: &mut S,
    ) -> std::result::Result<WriteStats, S::Error> {
        if view.columns() != header.ncol || view.rows() != header.nrow {
            tracing::warn!(
                header_ncol = header.ncol,
                header_nrow = header.nrow,
                view_columns = view.columns(),
                view_rows = view.rows(),
                "View shape does not match header"
            );
        }

        self.write_header(header, sink)?;
        let stats = self.write_values(view, sink)?;

        if stats.replaced_non_finite > 0 {
            tracing::warn!(
                count = stats.replaced_non_finite,
                "Infinite values written as undefined"
            );
        }

        Ok(stats)
    }

    /// Write a complete document to any [`std::io::Write`], flushing at the end.
    pub fn to_writer<W: Write>(
        &self,
        header: &IrapHeader,
        view: &SurfaceView<'_>,
        writer: W,
    ) -> std::io::Result<WriteStats> {
        let mut sink = IoSink::new(writer);
        let stats = self.write_document(header, view, &mut sink)?;
        sink.get_mut().flush()?;
        Ok(stats)
    }

    /// Export to a file, creating or truncating it.
    ///
    /// Fails with [`IrapError::ShapeMismatch`], before touching the file, when
    /// the view's dimensions differ from the header's.
    pub fn to_file(
        &self,
        path: impl AsRef<Path>,
        header: &IrapHeader,
        view: &SurfaceView<'_>,
    ) -> Result<WriteStats> {
        let path = path.as_ref();

        if view.columns() != header.ncol || view.rows() != header.nrow {
            return Err(IrapError::shape_mismatch(
                header.ncol,
                header.nrow,
                view.len(),
            ));
        }

        tracing::debug!(
            path = %path.display(),
            ncol = header.ncol,
            nrow = header.nrow,
            "Writing IRAP ASCII surface"
        );

        let file = File::create(path).map_err(|e| IrapError::create_failed(path, e))?;
        let stats = self
            .to_writer(header, view, BufWriter::new(file))
            .map_err(|e| IrapError::write_failed(path, e))?;

        tracing::debug!(
            path = %path.display(),
            values = stats.values,
            lines = stats.lines,
            "Wrote IRAP ASCII surface"
        );

        Ok(stats)
    }

    /// Export to an in-memory string.
    pub fn to_ascii_string(&self, header: &IrapHeader, view: &SurfaceView<'_>) -> String {
        let mut out = String::with_capacity(estimated_len(view, self.config.values_per_line));
        let result: std::result::Result<WriteStats, Infallible> =
            self.write_document(header, view, &mut out);
        match result {
            Ok(_) => out,
            Err(never) => match never {},
        }
    }

    /// Export a surface to a file, viewing its values through its own header.
    pub fn surface_to_file(
        &self,
        path: impl AsRef<Path>,
        surface: &IrapSurface,
    ) -> Result<WriteStats> {
        self.to_file(path, surface.header(), &surface.view())
    }

    /// Export a surface to an in-memory string.
    pub fn surface_to_ascii_string(&self, surface: &IrapSurface) -> String {
        self.to_ascii_string(surface.header(), &surface.view())
    }
}

/// Rough output size: header plus ~14 bytes per token.
fn estimated_len(view: &SurfaceView<'_>, values_per_line: usize) -> usize {
    let lines = view.len() / values_per_line.max(1) + 1;
    256 + view.len() * 14 + lines
}

/// Export `header` and `view` to `path` with the default line width.
pub fn to_ascii_file(
    path: impl AsRef<Path>,
    header: &IrapHeader,
    view: &SurfaceView<'_>,
) -> Result<()> {
    AsciiWriter::default().to_file(path, header, view).map(|_| ())
}

/// Export a surface to `path` with the default line width.
pub fn surface_to_ascii_file(path: impl AsRef<Path>, surface: &IrapSurface) -> Result<()> {
    AsciiWriter::default().surface_to_file(path, surface).map(|_| ())
}

/// Render `header` and `view` as an IRAP ASCII document.
pub fn to_ascii_string(header: &IrapHeader, view: &SurfaceView<'_>) -> String {
    AsciiWriter::default().to_ascii_string(header, view)
}

/// Render a surface as an IRAP ASCII document.
pub fn surface_to_ascii_string(surface: &IrapSurface) -> String {
    AsciiWriter::default().surface_to_ascii_string(surface)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_rejects_invalid_config() {
        let err = AsciiWriter::new(AsciiWriterConfig::with_values_per_line(0)).unwrap_err();
        assert!(matches!(err, IrapError::InvalidConfig(_)));
    }

    #[test]
    fn test_header_precedes_values() {
        let header = IrapHeader::new(1, 2, 0.0, 0.0, 1.0, 1.0, 0.0);
        let values = [5.0, 6.0];
        let view = SurfaceView::new(&values, 1, 2).unwrap();

        let text = to_ascii_string(&header, &view);
        assert_eq!(
            text,
            "-996 2 1.000000 1.000000\n\
             0.000000 0.000000 0.000000 1.000000\n\
             1 0.000000 0.000000 0.000000\n\
             0 0 0 0 0 0 0\n\
             5.0000 6.0000 "
        );
    }

    /// Writer whose every write fails.
    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk on fire"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Writer that accepts data but fails on flush.
    struct FailingFlush(Vec<u8>);

    impl Write for FailingFlush {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "flush failed"))
        }
    }

    #[test]
    fn test_to_writer_propagates_write_error() {
        let header = IrapHeader::new(2, 2, 0.0, 0.0, 1.0, 1.0, 0.0);
        let values = [1.0; 4];
        let view = SurfaceView::new(&values, 2, 2).unwrap();

        let err = AsciiWriter::default()
            .to_writer(&header, &view, FailingWriter)
            .unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::Other);
        assert_eq!(err.to_string(), "disk on fire");
    }

    #[test]
    fn test_to_writer_propagates_flush_error() {
        let header = IrapHeader::new(1, 1, 0.0, 0.0, 1.0, 1.0, 0.0);
        let values = [1.0];
        let view = SurfaceView::new(&values, 1, 1).unwrap();

        let err = AsciiWriter::default()
            .to_writer(&header, &view, FailingFlush(Vec::new()))
            .unwrap_err();
        assert_eq!(err.to_string(), "flush failed");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_to_file_reports_write_failure() {
        let path = Path::new("/dev/full");
        if !path.exists() {
            eprintln!("SKIPPED: /dev/full not available");
            return;
        }

        let header = IrapHeader::new(2, 2, 0.0, 0.0, 1.0, 1.0, 0.0);
        let values = [1.0; 4];
        let view = SurfaceView::new(&values, 2, 2).unwrap();

        let err = AsciiWriter::default()
            .to_file(path, &header, &view)
            .unwrap_err();
        match err {
            IrapError::WriteFailed { path: failed, source } => {
                assert_eq!(failed, path);
                assert_eq!(source.raw_os_error(), Some(28)); // ENOSPC
            }
            other => panic!("expected WriteFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_to_file_rejects_mismatched_view() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mismatch.irap");
        let header = IrapHeader::new(3, 2, 0.0, 0.0, 1.0, 1.0, 0.0);
        let values = [1.0; 4];
        let view = SurfaceView::new(&values, 2, 2).unwrap();

        let err = AsciiWriter::default()
            .to_file(&path, &header, &view)
            .unwrap_err();
        assert!(matches!(
            err,
            IrapError::ShapeMismatch {
                columns: 3,
                rows: 2,
                len: 4
            }
        ));
        assert!(!path.exists());

        // In-memory export still writes what it was given
        let text = to_ascii_string(&header, &view);
        assert!(text.starts_with("-996 2 "));
    }

    #[test]
    fn test_to_writer_reports_stats() {
        let header = IrapHeader::new(3, 3, 0.0, 0.0, 1.0, 1.0, 0.0);
        let values = [1.0; 9];
        let view = SurfaceView::new(&values, 3, 3).unwrap();
        let writer = AsciiWriter::new(AsciiWriterConfig::with_values_per_line(4)).unwrap();

        let mut bytes = Vec::new();
        let stats = writer.to_writer(&header, &view, &mut bytes).unwrap();
        assert_eq!(stats.values, 9);
        assert_eq!(stats.lines, 3);
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            writer.to_ascii_string(&header, &view)
        );
    }
}
