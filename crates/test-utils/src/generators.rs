//! Test data generators for creating synthetic surface values.
//!
//! IRAP surfaces keep columns slowest in memory: node `(col, row)` lives at
//! `col * height + row`. Every generator here returns data in that layout.

/// Flat index of `(col, row)` in a column-major buffer with `height` rows.
pub fn column_major_index(col: usize, row: usize, height: usize) -> usize {
    col * height + row
}

/// Creates a test surface with predictable values.
///
/// Each node value is calculated as: `col * 1000 + row`
///
/// # Example
///
/// ```
/// use test_utils::create_test_surface;
///
/// let values = create_test_surface(10, 5);
/// assert_eq!(values.len(), 50);   // 10 * 5
/// assert_eq!(values[0], 0.0);     // col=0, row=0
/// assert_eq!(values[1], 1.0);     // col=0, row=1
/// assert_eq!(values[5], 1000.0);  // col=1, row=0
/// ```
pub fn create_test_surface(width: usize, height: usize) -> Vec<f32> {
    let mut data = vec![0.0; width * height];
    for col in 0..width {
        for row in 0..height {
            data[column_major_index(col, row, height)] = (col * 1000 + row) as f32;
        }
    }
    data
}

/// Creates a depth-like surface in metres.
///
/// Values dip from ~1500 m at the edges to ~1800 m in the middle, with
/// fractional parts so that 4-decimal rounding is exercised.
pub fn create_depth_surface(width: usize, height: usize) -> Vec<f32> {
    let mut data = vec![0.0; width * height];
    let cx = width.saturating_sub(1) as f32 / 2.0;
    let cy = height.saturating_sub(1) as f32 / 2.0;
    let max_r = (cx * cx + cy * cy).sqrt().max(1.0);
    for col in 0..width {
        for row in 0..height {
            let dx = col as f32 - cx;
            let dy = row as f32 - cy;
            let r = (dx * dx + dy * dy).sqrt() / max_r;
            data[column_major_index(col, row, height)] = 1800.0 - 300.0 * r + 0.123_45 * col as f32;
        }
    }
    data
}

/// Creates a surface filled with a constant value.
pub fn create_constant_surface(width: usize, height: usize, value: f32) -> Vec<f32> {
    vec![value; width * height]
}

/// Creates a surface with NaN (undefined) values at the given positions.
///
/// # Arguments
///
/// * `width` - Number of columns
/// * `height` - Number of rows
/// * `nan_positions` - List of (col, row) positions that should be NaN
///
/// # Returns
///
/// A `Vec<f32>` with NaN at specified positions, zeros elsewhere.
pub fn create_surface_with_nans(
    width: usize,
    height: usize,
    nan_positions: &[(usize, usize)],
) -> Vec<f32> {
    let mut data = vec![0.0f32; width * height];
    for &(col, row) in nan_positions {
        if col < width && row < height {
            data[column_major_index(col, row, height)] = f32::NAN;
        }
    }
    data
}

/// Lays out values given in output order (row by row) as a column-major buffer.
///
/// Lets tests state the expected token sequence directly.
///
/// # Panics
///
/// Panics if `row_major.len() != width * height`.
pub fn from_row_major(row_major: &[f32], width: usize, height: usize) -> Vec<f32> {
    assert_eq!(row_major.len(), width * height, "length must be width * height");
    let mut data = vec![0.0; width * height];
    for row in 0..height {
        for col in 0..width {
            data[column_major_index(col, row, height)] = row_major[row * width + col];
        }
    }
    data
}
