//! Detector configuration.
//!
//! A [`DetectorConfig`] is validated once at construction and is immutable
//! afterwards, so every per-frame call can trust its values.

use std::fmt;

use crate::error::DetectError;

/// Default confidence threshold.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.5;
/// Default NMS IoU threshold.
pub const DEFAULT_IOU_THRESHOLD: f32 = 0.4;
/// Default network input side length.
pub const DEFAULT_INPUT_SIDE: u32 = 416;

/// The fixed resolution of the network input tensor.
///
/// The same size is used to build the input tensor, to turn fractional
/// box geometry into pixels, and as the reference for normalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InputSize {
    pub width: u32,
    pub height: u32,
}

impl InputSize {
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width and height as floats, for geometry math.
    #[inline]
    pub fn as_f32(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }
}

impl Default for InputSize {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_SIDE, DEFAULT_INPUT_SIDE)
    }
}

impl fmt::Display for InputSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Parameters for one detector instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectorConfig {
    confidence_threshold: f32,
    iou_threshold: f32,
    input_size: InputSize,
}

impl DetectorConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    /// Returns [`DetectError::Configuration`] if either threshold is not a
    /// finite value in `[0, 1]` or if either input dimension is zero.
    pub fn new(
        confidence_threshold: f32,
        iou_threshold: f32,
        input_size: InputSize,
    ) -> Result<Self, DetectError> {
        check_unit_interval("confidence threshold", confidence_threshold)?;
        check_unit_interval("NMS IoU threshold", iou_threshold)?;

        if input_size.width == 0 || input_size.height == 0 {
            return Err(DetectError::configuration(format!(
                "input resolution must be positive, got {}",
                input_size
            )));
        }

        Ok(Self {
            confidence_threshold,
            iou_threshold,
            input_size,
        })
    }

    pub fn confidence_threshold(&self) -> f32 {
        self.confidence_threshold
    }

    pub fn iou_threshold(&self) -> f32 {
        self.iou_threshold
    }

    pub fn input_size(&self) -> InputSize {
        self.input_size
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            iou_threshold: DEFAULT_IOU_THRESHOLD,
            input_size: InputSize::default(),
        }
    }
}

fn check_unit_interval(name: &str, value: f32) -> Result<(), DetectError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(DetectError::configuration(format!(
            "{} must be within [0, 1], got {}",
            name, value
        )))
    }
}
