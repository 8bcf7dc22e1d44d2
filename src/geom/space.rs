//! Coordinate space marker types.
//!
//! Zero-sized types used as type parameters so that pixel-space boxes
//! coming out of the decoder can never be handed to code that expects
//! frame-relative boxes, or vice versa.

use std::fmt;

/// Marker for absolute pixel coordinates in the network input frame.
///
/// The origin is the top-left corner of the `input_width × input_height`
/// image the network saw.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {}

/// Marker for unit coordinates, expressed as fractions (0.0 to 1.0) of
/// the reference resolution.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Normalized {}

impl fmt::Debug for Pixel {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl fmt::Debug for Normalized {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}
