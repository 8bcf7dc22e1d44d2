//! Raw network output tensors.
//!
//! Every output tensor is a 2D table with one row per anchor/cell:
//!
//! ```text
//! [center_x, center_y, width, height, class_score_0, class_score_1, ...]
//! ```
//!
//! Geometry is expressed as fractions of the network input resolution.
//! A network with several detection scales returns several tensors; they
//! all share the same row layout.

pub mod io_json;

use ndarray::Array2;

use crate::error::DetectError;

/// One raw output tensor (rows × columns).
pub type RawOutput = Array2<f32>;

/// Number of leading geometry columns in every row.
pub const GEOMETRY_COLUMNS: usize = 4;

/// Returns the column count shared by all non-empty tensors.
///
/// Zero-row tensors are ignored. Returns `Ok(None)` when every tensor is
/// empty.
///
/// # Errors
/// Returns [`DetectError::InvalidInput`] if non-empty tensors disagree on
/// their column count, or if rows are too short to hold the geometry.
pub fn row_width(outputs: &[RawOutput]) -> Result<Option<usize>, DetectError> {
    let mut width: Option<(usize, usize)> = None;

    for (idx, tensor) in outputs.iter().enumerate() {
        if tensor.nrows() == 0 {
            continue;
        }

        let cols = tensor.ncols();
        if cols < GEOMETRY_COLUMNS {
            return Err(DetectError::invalid_input(format!(
                "output tensor {} has {} column(s); rows need at least {} geometry fields",
                idx, cols, GEOMETRY_COLUMNS
            )));
        }

        match width {
            None => width = Some((idx, cols)),
            Some((first_idx, first_cols)) if first_cols != cols => {
                return Err(DetectError::invalid_input(format!(
                    "output tensor {} has {} column(s) but tensor {} has {}",
                    idx, cols, first_idx, first_cols
                )));
            }
            Some(_) => {}
        }
    }

    Ok(width.map(|(_, cols)| cols))
}

/// Checks that rows carry a score for every class in the class table.
///
/// # Errors
/// Returns [`DetectError::InvalidInput`] if any non-empty tensor has fewer
/// than `4 + num_classes` columns.
pub fn check_layout(outputs: &[RawOutput], num_classes: usize) -> Result<(), DetectError> {
    let expected = GEOMETRY_COLUMNS + num_classes;

    for (idx, tensor) in outputs.iter().enumerate() {
        if tensor.nrows() > 0 && tensor.ncols() < expected {
            return Err(DetectError::invalid_input(format!(
                "output tensor {} rows have {} field(s), expected at least {} ({} geometry + {} classes)",
                idx,
                tensor.ncols(),
                expected,
                GEOMETRY_COLUMNS,
                num_classes
            )));
        }
    }

    Ok(())
}
