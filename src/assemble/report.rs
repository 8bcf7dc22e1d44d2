//! Per-frame detection report.

use std::fmt;

use serde::Serialize;

use super::Detection;

/// The result of post-processing one frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DetectionReport {
    /// Number of decoded candidates above the confidence threshold, before
    /// suppression.
    pub candidate_count: usize,

    /// Final detections, in suppression order (descending confidence).
    pub detections: Vec<Detection>,
}

impl DetectionReport {
    pub fn new(candidate_count: usize, detections: Vec<Detection>) -> Self {
        Self {
            candidate_count,
            detections,
        }
    }

    /// Number of candidates removed by suppression.
    pub fn suppressed_count(&self) -> usize {
        self.candidate_count.saturating_sub(self.detections.len())
    }

    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }
}

impl fmt::Display for DetectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.detections.is_empty() {
            return writeln!(
                f,
                "No detections ({} candidate(s) above threshold)",
                self.candidate_count
            );
        }

        writeln!(
            f,
            "{} detection(s) from {} candidate(s), {} suppressed:",
            self.detections.len(),
            self.candidate_count,
            self.suppressed_count()
        )?;
        for detection in &self.detections {
            writeln!(f, "  {}", detection)?;
        }

        Ok(())
    }
}
