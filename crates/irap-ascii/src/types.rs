//! Core types for IRAP surfaces.

use serde::{Deserialize, Serialize};

use crate::error::{IrapError, Result};

/// Geometry of a regular IRAP surface grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrapHeader {
    /// Number of columns (points along X).
    pub ncol: usize,
    /// Number of rows (points along Y).
    pub nrow: usize,
    /// X coordinate of the origin.
    pub xori: f64,
    /// Y coordinate of the origin.
    pub yori: f64,
    /// Grid increment along X.
    pub xinc: f64,
    /// Grid increment along Y.
    pub yinc: f64,
    /// Maximum X extent.
    pub xmax: f64,
    /// Maximum Y extent.
    pub ymax: f64,
    /// Rotation angle in degrees.
    pub rot: f64,
    /// X coordinate of the rotation origin.
    pub xrot: f64,
    /// Y coordinate of the rotation origin.
    pub yrot: f64,
}

impl IrapHeader {
    /// Create a header rotated about its own origin.
    ///
    /// `xmax`/`ymax` are derived from the origin, increments and counts.
    pub fn new(
        ncol: usize,
        nrow: usize,
        xori: f64,
        yori: f64,
        xinc: f64,
        yinc: f64,
        rot: f64,
    ) -> Self {
        Self {
            ncol,
            nrow,
            xori,
            yori,
            xinc,
            yinc,
            xmax: xori + ncol.saturating_sub(1) as f64 * xinc,
            ymax: yori + nrow.saturating_sub(1) as f64 * yinc,
            rot,
            xrot: xori,
            yrot: yori,
        }
    }

    /// Total number of grid nodes.
    pub fn len(&self) -> usize {
        self.ncol * self.nrow
    }

    /// Check if the grid has no nodes.
    pub fn is_empty(&self) -> bool {
        self.ncol == 0 || self.nrow == 0
    }
}

/// Borrowed 2D view over a flat buffer of surface values.
///
/// Extent 0 is the column count and extent 1 the row count. Columns vary
/// slowest in memory: node `(col, row)` lives at `col * rows + row`.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceView<'a> {
    values: &'a [f32],
    columns: usize,
    rows: usize,
}

impl<'a> SurfaceView<'a> {
    /// Create a view, checking the buffer holds exactly `columns * rows` values.
    pub fn new(values: &'a [f32], columns: usize, rows: usize) -> Result<Self> {
        if columns.checked_mul(rows) != Some(values.len()) {
            return Err(IrapError::shape_mismatch(columns, rows, values.len()));
        }

        Ok(Self {
            values,
            columns,
            rows,
        })
    }

    /// Size of the view along `dim` (0 = columns, 1 = rows).
    ///
    /// # Panics
    ///
    /// Panics if `dim` is not 0 or 1.
    pub fn extent(&self, dim: usize) -> usize {
        match dim {
            0 => self.columns,
            1 => self.rows,
            _ => panic!("SurfaceView has 2 extents, got dim {dim}"),
        }
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Value at `(column, row)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn at(&self, column: usize, row: usize) -> f32 {
        assert!(
            column < self.columns && row < self.rows,
            "({column}, {row}) out of range for {} x {} view",
            self.columns,
            self.rows
        );
        self.values[column * self.rows + row]
    }

    /// Value at `(column, row)`, or `None` if out of range.
    pub fn get(&self, column: usize, row: usize) -> Option<f32> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.values.get(column * self.rows + row).copied()
    }

    /// The underlying flat buffer.
    pub fn as_slice(&self) -> &'a [f32] {
        self.values
    }

    /// Total number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the view is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A header together with the values it describes.
///
/// The header is read-only once the surface exists, so its dimensions
/// always match the buffer:
///
/// ```compile_fail
/// use irap_ascii::{IrapHeader, IrapSurface};
///
/// let header = IrapHeader::new(2, 2, 0.0, 0.0, 1.0, 1.0, 0.0);
/// let mut surface = IrapSurface::new(header, vec![0.0; 4]).unwrap();
/// surface.header.ncol = 3;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IrapSurface {
    header: IrapHeader,
    values: Vec<f32>,
}

impl IrapSurface {
    /// Create a surface, checking the buffer length against the header.
    ///
    /// `values` must be laid out the way [`SurfaceView`] reads them.
    pub fn new(header: IrapHeader, values: Vec<f32>) -> Result<Self> {
        if header.ncol.checked_mul(header.nrow) != Some(values.len()) {
            return Err(IrapError::shape_mismatch(
                header.ncol,
                header.nrow,
                values.len(),
            ));
        }

        Ok(Self { header, values })
    }

    /// The surface geometry.
    pub fn header(&self) -> &IrapHeader {
        &self.header
    }

    /// Borrow the values as a view shaped by the header.
    pub fn view(&self) -> SurfaceView<'_> {
        SurfaceView {
            values: &self.values,
            columns: self.header.ncol,
            rows: self.header.nrow,
        }
    }

    /// The flat value buffer.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Take ownership of the value buffer.
    pub fn into_values(self) -> Vec<f32> {
        self.values
    }

    /// Split into header and value buffer.
    pub fn into_parts(self) -> (IrapHeader, Vec<f32>) {
        (self.header, self.values)
    }
}
