//! Pixel-space to frame-relative coordinates.

use crate::config::InputSize;
use crate::geom::{BBoxXYXY, Normalized, Pixel};

/// Maps a pixel box into unit coordinates relative to `reference`.
///
/// `x1 = left / ref_w`, `x2 = (left + width) / ref_w`, likewise for y.
/// Results are clamped into `[0, 1]` (boxes reaching past the network
/// input are cut at its edge) and ordered so `x1 <= x2` and `y1 <= y2`.
pub fn normalize(bbox: &BBoxXYXY<Pixel>, reference: InputSize) -> BBoxXYXY<Normalized> {
    let (ref_w, ref_h) = reference.as_f32();
    bbox.to_normalized(ref_w, ref_h).clamp_unit()
}
