//! Assembly of final detection records.
//!
//! Turns the candidates that survived suppression into [`Detection`]
//! records: labels resolved from the optional class table, coordinates
//! normalized to the reference resolution, and every number rounded to
//! three decimals.

mod report;

pub use report::DetectionReport;

use std::fmt;

use serde::Serialize;

use crate::classes::{resolve_label, ClassTable};
use crate::config::InputSize;
use crate::decode::Candidate;
use crate::normalize::normalize;

/// A final detection, in frame-relative unit coordinates.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Detection {
    /// Class name, or `"Unknown"`.
    pub label: String,
    /// Confidence in `[0, 1]`, rounded to 3 decimals.
    pub confidence: f32,
    pub relative_x1: f32,
    pub relative_y1: f32,
    pub relative_x2: f32,
    pub relative_y2: f32,
    /// `relative_x2 - relative_x1`, rounded to 3 decimals.
    pub width: f32,
    /// `relative_y2 - relative_y1`, rounded to 3 decimals.
    pub height: f32,
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.3} [{:.3}, {:.3}, {:.3}, {:.3}]",
            self.label,
            self.confidence,
            self.relative_x1,
            self.relative_y1,
            self.relative_x2,
            self.relative_y2
        )
    }
}

/// Builds detection records from kept candidates, preserving their order.
///
/// `reference` is the resolution the candidate boxes were decoded against.
/// Width and height are derived from the unrounded coordinates.
pub fn assemble<'a, I>(kept: I, class_table: Option<&ClassTable>, reference: InputSize) -> Vec<Detection>
where
    I: IntoIterator<Item = &'a Candidate>,
{
    kept.into_iter()
        .map(|candidate| {
            let unit = normalize(&candidate.bbox, reference);
            Detection {
                label: resolve_label(class_table, candidate.class_id).to_string(),
                confidence: round3(candidate.confidence.clamp(0.0, 1.0)),
                relative_x1: round3(unit.xmin()),
                relative_y1: round3(unit.ymin()),
                relative_x2: round3(unit.xmax()),
                relative_y2: round3(unit.ymax()),
                width: round3(unit.width()),
                height: round3(unit.height()),
            }
        })
        .collect()
}

/// Rounds to three decimal places.
#[inline]
pub(crate) fn round3(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}
