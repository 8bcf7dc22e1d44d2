//! JSON serialization for raw network outputs.
//!
//! The format is a JSON array of tensors, each tensor an array of rows:
//!
//! ```json
//! [
//!   [[0.5, 0.5, 0.2, 0.2, 0.9, 0.1]],
//!   []
//! ]
//! ```
//!
//! This is how captured inference results are fed to the CLI, and how the
//! fuzz target and benches build inputs without an inference backend.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use ndarray::Array2;

use super::RawOutput;
use crate::error::DetectError;

type NestedRows = Vec<Vec<Vec<f32>>>;

/// Reads raw output tensors from a JSON file.
///
/// # Errors
/// Returns [`DetectError::RawOutputRead`] if the file cannot be opened,
/// [`DetectError::RawOutputParse`] if it is not valid JSON of
/// the expected shape, or [`DetectError::InvalidInput`] if a tensor has
/// rows of different lengths.
pub fn read_raw_outputs(path: &Path) -> Result<Vec<RawOutput>, DetectError> {
    let file = File::open(path).map_err(|source| DetectError::RawOutputRead {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let nested: NestedRows =
        serde_json::from_reader(reader).map_err(|source| DetectError::RawOutputParse {
            path: path.to_path_buf(),
            source,
        })?;
    into_tensors(nested)
}

/// Writes raw output tensors to a JSON file.
pub fn write_raw_outputs(path: &Path, outputs: &[RawOutput]) -> Result<(), DetectError> {
    let file = File::create(path).map_err(|source| DetectError::RawOutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    let writer = BufWriter::new(file);

    serde_json::to_writer(writer, &to_nested(outputs)).map_err(DetectError::ReportWrite)
}

/// Parses raw output tensors from a JSON string.
///
/// Useful for testing without file I/O.
pub fn from_json_str(json: &str) -> Result<Vec<RawOutput>, DetectError> {
    from_json_slice(json.as_bytes())
}

/// Parses raw output tensors from raw bytes.
pub fn from_json_slice(data: &[u8]) -> Result<Vec<RawOutput>, DetectError> {
    let nested: NestedRows =
        serde_json::from_slice(data).map_err(|source| DetectError::RawOutputParse {
            path: "<memory>".into(),
            source,
        })?;
    into_tensors(nested)
}

/// Serializes raw output tensors to a JSON string.
pub fn to_json_string(outputs: &[RawOutput]) -> Result<String, DetectError> {
    serde_json::to_string(&to_nested(outputs)).map_err(DetectError::ReportWrite)
}

fn into_tensors(nested: NestedRows) -> Result<Vec<RawOutput>, DetectError> {
    nested
        .into_iter()
        .enumerate()
        .map(|(idx, rows)| rows_to_tensor(idx, rows))
        .collect()
}

fn rows_to_tensor(tensor_idx: usize, rows: Vec<Vec<f32>>) -> Result<RawOutput, DetectError> {
    let nrows = rows.len();
    let ncols = rows.first().map(Vec::len).unwrap_or(0);

    let mut flat = Vec::with_capacity(nrows * ncols);
    for (row_idx, row) in rows.into_iter().enumerate() {
        if row.len() != ncols {
            return Err(DetectError::invalid_input(format!(
                "output tensor {} row {} has {} field(s), expected {} like row 0",
                tensor_idx,
                row_idx,
                row.len(),
                ncols
            )));
        }
        flat.extend(row);
    }

    Array2::from_shape_vec((nrows, ncols), flat).map_err(|e| {
        DetectError::invalid_input(format!("output tensor {}: {}", tensor_idx, e))
    })
}

fn to_nested(outputs: &[RawOutput]) -> NestedRows {
    outputs
        .iter()
        .map(|tensor| tensor.rows().into_iter().map(|row| row.to_vec()).collect())
        .collect()
}

/// Fuzz-only entrypoint: parse and decode with the default configuration.
#[cfg(feature = "fuzzing")]
pub fn fuzz_decode_json(data: &[u8]) -> Result<(), DetectError> {
    let outputs = from_json_slice(data)?;
    let config = crate::config::DetectorConfig::default();
    let _ = crate::decode::decode(
        &outputs,
        config.input_size(),
        config.confidence_threshold(),
    )?;
    Ok(())
}
