//! Decoding raw output rows into pixel-space candidates.

use ndarray::{s, ArrayView1};
use tracing::debug;

use crate::config::InputSize;
use crate::error::DetectError;
use crate::geom::{BBoxXYXY, Pixel};
use crate::tensor::{self, RawOutput, GEOMETRY_COLUMNS};

/// A decoded detection prior to suppression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    /// Index into the class table.
    pub class_id: usize,
    /// The row's maximum class score.
    pub confidence: f32,
    /// Box in network-input pixel space, built from truncated integers.
    pub bbox: BBoxXYXY<Pixel>,
}

/// Decodes every row of every output tensor into candidates.
///
/// A row becomes a candidate only when its best class score is strictly
/// greater than `confidence_threshold`; everything else is dropped. Rows
/// without any class scores are skipped, and NaN scores never win the
/// argmax. Candidates are returned in row order, tensor by tensor.
///
/// # Errors
/// Returns [`DetectError::InvalidInput`] if tensors disagree on their row
/// width, rows are too short for the geometry, or a row that passes the
/// threshold carries non-finite geometry.
pub fn decode(
    outputs: &[RawOutput],
    input_size: InputSize,
    confidence_threshold: f32,
) -> Result<Vec<Candidate>, DetectError> {
    let Some(width) = tensor::row_width(outputs)? else {
        debug!(tensors = outputs.len(), "no rows to decode");
        return Ok(Vec::new());
    };
    if width == GEOMETRY_COLUMNS {
        debug!("rows carry no class scores; nothing to decode");
        return Ok(Vec::new());
    }

    let mut candidates = Vec::new();
    let mut rows_scanned = 0usize;

    for (tensor_idx, tensor) in outputs.iter().enumerate() {
        for (row_idx, row) in tensor.rows().into_iter().enumerate() {
            rows_scanned += 1;

            let Some((class_id, confidence)) = best_class(row.slice(s![GEOMETRY_COLUMNS..])) else {
                continue;
            };
            if confidence.is_nan() || confidence <= confidence_threshold {
                continue;
            }

            let bbox = row_box(row, input_size).ok_or_else(|| {
                DetectError::invalid_input(format!(
                    "output tensor {} row {} has non-finite box geometry",
                    tensor_idx, row_idx
                ))
            })?;

            candidates.push(Candidate {
                class_id,
                confidence,
                bbox,
            });
        }
    }

    debug!(
        rows = rows_scanned,
        candidates = candidates.len(),
        threshold = confidence_threshold,
        "decoded raw outputs"
    );
    Ok(candidates)
}

/// Index and value of the highest score. The first maximum wins on ties.
///
/// NaN scores are skipped. Returns `None` when no score is a number.
fn best_class(scores: ArrayView1<'_, f32>) -> Option<(usize, f32)> {
    scores
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, score)| !score.is_nan())
        .fold(None, |best, (idx, score)| match best {
            Some((_, best_score)) if score <= best_score => best,
            _ => Some((idx, score)),
        })
}

/// Converts a row's fractional center/size into a truncated pixel box.
fn row_box(row: ArrayView1<'_, f32>, input_size: InputSize) -> Option<BBoxXYXY<Pixel>> {
    let (input_w, input_h) = input_size.as_f32();

    let center_x = (row[0] * input_w).trunc();
    let center_y = (row[1] * input_h).trunc();
    let width = (row[2] * input_w).trunc();
    let height = (row[3] * input_h).trunc();
    let left = (center_x - width / 2.0).trunc();
    let top = (center_y - height / 2.0).trunc();

    let bbox = BBoxXYXY::from_xywh(left, top, width, height);
    bbox.is_finite().then_some(bbox)
}
