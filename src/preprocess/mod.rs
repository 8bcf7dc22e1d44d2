//! Image preprocessing into the network input tensor.
//!
//! The tensor layout is `NCHW` with shape `(1, 3, height, width)`, planes in
//! RGB order, each intensity multiplied by [`PrepareOptions::scale`]. The
//! image is stretched to the target size; aspect ratio is not preserved and
//! nothing is cropped.

use image::imageops::{self, FilterType};
use image::RgbImage;
use ndarray::Array4;

use crate::config::InputSize;
use crate::error::DetectError;

/// Default intensity scale (maps `0..=255` to `0.0..=1.0`).
pub const DEFAULT_SCALE: f32 = 1.0 / 255.0;

const CHANNELS: usize = 3;

/// Channel order of the source pixel buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChannelOrder {
    /// Red, green, blue (what the `image` crate decodes to).
    #[default]
    Rgb,
    /// Blue, green, red (what most capture backends deliver).
    Bgr,
}

/// Preprocessing parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrepareOptions {
    /// Factor applied to every 8-bit intensity.
    pub scale: f32,
    /// Channel order of the input buffer. The tensor is always RGB.
    pub source_order: ChannelOrder,
}

impl Default for PrepareOptions {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            source_order: ChannelOrder::Rgb,
        }
    }
}

/// Resizes, scales and reorders an image into the network input tensor.
///
/// # Errors
/// Returns [`DetectError::InvalidInput`] if the image or the target has a
/// zero dimension.
pub fn prepare(
    image: &RgbImage,
    target: InputSize,
    options: &PrepareOptions,
) -> Result<Array4<f32>, DetectError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(DetectError::invalid_input(format!(
            "image has zero dimension ({}x{})",
            image.width(),
            image.height()
        )));
    }
    if target.width == 0 || target.height == 0 {
        return Err(DetectError::invalid_input(format!(
            "target resolution has zero dimension ({})",
            target
        )));
    }

    let resized;
    let source = if image.dimensions() == (target.width, target.height) {
        image
    } else {
        resized = imageops::resize(image, target.width, target.height, FilterType::Triangle);
        &resized
    };

    let (red, blue) = match options.source_order {
        ChannelOrder::Rgb => (0, 2),
        ChannelOrder::Bgr => (2, 0),
    };

    let shape = (1, CHANNELS, target.height as usize, target.width as usize);
    let mut tensor = Array4::<f32>::zeros(shape);
    for (x, y, pixel) in source.enumerate_pixels() {
        let (x, y) = (x as usize, y as usize);
        let channels = pixel.0;
        tensor[[0, 0, y, x]] = channels[red] as f32 * options.scale;
        tensor[[0, 1, y, x]] = channels[1] as f32 * options.scale;
        tensor[[0, 2, y, x]] = channels[blue] as f32 * options.scale;
    }

    Ok(tensor)
}

/// Like [`prepare`], for a packed 3-channel buffer (`width * height * 3`
/// bytes, row-major) as delivered by a frame grabber.
///
/// # Errors
/// Returns [`DetectError::InvalidInput`] if the buffer length does not match
/// the stated dimensions, or any dimension is zero.
pub fn prepare_raw(
    data: &[u8],
    width: u32,
    height: u32,
    target: InputSize,
    options: &PrepareOptions,
) -> Result<Array4<f32>, DetectError> {
    let expected = width as usize * height as usize * CHANNELS;
    if data.len() != expected {
        return Err(DetectError::invalid_input(format!(
            "pixel buffer has {} byte(s), expected {} for {}x{}x{}",
            data.len(),
            expected,
            width,
            height,
            CHANNELS
        )));
    }

    let image = RgbImage::from_raw(width, height, data.to_vec()).ok_or_else(|| {
        DetectError::invalid_input(format!("cannot view buffer as {}x{} RGB", width, height))
    })?;
    prepare(&image, target, options)
}
