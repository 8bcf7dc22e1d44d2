//! The per-frame detection pipeline.
//!
//! A [`Detector`] owns the immutable state (configuration, optional class
//! table, preprocessing options) and runs
//! prepare → inference → decode → suppress → assemble for each frame.
//! It holds no per-frame state, so one detector can be shared by
//! reference across threads.

use std::time::Instant;

use image::RgbImage;
use ndarray::Array4;
use tracing::{debug, info};

use crate::assemble::{assemble, DetectionReport};
use crate::classes::ClassTable;
use crate::config::DetectorConfig;
use crate::decode::decode;
use crate::error::DetectError;
use crate::nms::suppress;
use crate::preprocess::{prepare, PrepareOptions};
use crate::tensor::{check_layout, RawOutput};

/// Runs the network forward pass.
///
/// Implementations receive a `(1, 3, H, W)` tensor with values in `[0, 1]`
/// (for the default scale) and return one or more output tensors in the
/// row layout described in [`crate::tensor`].
pub trait InferenceProvider {
    type Error: std::error::Error + Send + Sync + 'static;

    fn infer(&self, input: &Array4<f32>) -> Result<Vec<RawOutput>, Self::Error>;
}

/// Immutable detection pipeline for one model.
#[derive(Clone, Debug)]
pub struct Detector {
    config: DetectorConfig,
    class_table: Option<ClassTable>,
    prepare_options: PrepareOptions,
}

impl Detector {
    pub fn new(config: DetectorConfig, class_table: Option<ClassTable>) -> Self {
        Self {
            config,
            class_table,
            prepare_options: PrepareOptions::default(),
        }
    }

    /// Replaces the preprocessing options (intensity scale, channel order).
    pub fn with_prepare_options(mut self, options: PrepareOptions) -> Self {
        self.prepare_options = options;
        self
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn class_table(&self) -> Option<&ClassTable> {
        self.class_table.as_ref()
    }

    /// Turns raw network outputs into detections.
    ///
    /// When a class table is present, rows must carry a score for each of
    /// its classes.
    ///
    /// # Errors
    /// Returns [`DetectError::InvalidInput`] for malformed output tensors.
    pub fn postprocess(&self, outputs: &[RawOutput]) -> Result<DetectionReport, DetectError> {
        if let Some(table) = &self.class_table {
            check_layout(outputs, table.len())?;
        }

        let threshold = self.config.confidence_threshold();
        let candidates = decode(outputs, self.config.input_size(), threshold)?;
        let kept = suppress(&candidates, threshold, self.config.iou_threshold());

        let detections = assemble(
            kept.iter().map(|&idx| &candidates[idx]),
            self.class_table(),
            self.config.input_size(),
        );

        Ok(DetectionReport::new(candidates.len(), detections))
    }

    /// Runs the whole pipeline on one image.
    ///
    /// The image is prepared at the configured input size, so the tensor
    /// the provider sees and the resolution used for decoding always agree.
    ///
    /// # Errors
    /// Returns [`DetectError::InvalidInput`] for empty images or malformed
    /// outputs, and [`DetectError::Inference`] if the provider fails.
    pub fn detect<P>(&self, image: &RgbImage, provider: &P) -> Result<DetectionReport, DetectError>
    where
        P: InferenceProvider + ?Sized,
    {
        let started = Instant::now();

        let input = prepare(image, self.config.input_size(), &self.prepare_options)?;
        debug!(shape = ?input.shape(), "prepared input tensor");

        let outputs = provider
            .infer(&input)
            .map_err(|e| DetectError::Inference(Box::new(e)))?;
        debug!(tensors = outputs.len(), "inference returned");

        let report = self.postprocess(&outputs)?;

        let elapsed = started.elapsed();
        let fps = 1.0 / elapsed.as_secs_f64().max(f64::EPSILON);
        info!(
            detections = report.detections.len(),
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            fps = (fps * 10.0).round() / 10.0,
            "processed frame"
        );

        Ok(report)
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new(DetectorConfig::default(), None)
    }
}
