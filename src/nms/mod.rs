//! Greedy non-maximum suppression.
//!
//! Suppression is class-agnostic: a confident box suppresses any
//! overlapping box, whatever its class.

use tracing::debug;

use crate::decode::Candidate;

/// Runs greedy NMS and returns the indices of the kept candidates.
///
/// Candidates not strictly above `confidence_threshold` never make it into
/// the kept set. The rest are visited by descending confidence (ties keep
/// their original index order); each visited candidate is kept unless a
/// previously kept box overlaps it with IoU `>= iou_threshold`. Boxes that
/// do not overlap at all (IoU 0) never suppress each other.
///
/// The returned indices are in visiting order, i.e. descending confidence.
pub fn suppress(candidates: &[Candidate], confidence_threshold: f32, iou_threshold: f32) -> Vec<usize> {
    let mut order: Vec<usize> = (0..candidates.len())
        .filter(|&idx| candidates[idx].confidence > confidence_threshold)
        .collect();
    order.sort_by(|&a, &b| {
        candidates[b]
            .confidence
            .total_cmp(&candidates[a].confidence)
    });

    let mut kept: Vec<usize> = Vec::with_capacity(order.len());
    for idx in order {
        let bbox = &candidates[idx].bbox;
        let overlapped = kept.iter().any(|&k| {
            let iou = candidates[k].bbox.iou(bbox);
            iou > 0.0 && iou >= iou_threshold
        });

        if !overlapped {
            kept.push(idx);
        }
    }

    debug!(
        candidates = candidates.len(),
        kept = kept.len(),
        iou_threshold,
        "suppressed overlapping candidates"
    );
    kept
}
