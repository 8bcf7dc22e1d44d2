//! Box geometry shared by the decoder, the suppressor and the normalizer.
//!
//! Boxes carry a marker type for their coordinate space so pixel-space
//! candidates cannot be mixed up with frame-relative detections:
//!
//! ```
//! use yolopost::geom::{BBoxXYXY, Pixel};
//!
//! let a = BBoxXYXY::<Pixel>::from_xywh(0.0, 0.0, 100.0, 100.0);
//! let b = BBoxXYXY::<Pixel>::from_xywh(0.0, 0.0, 100.0, 80.0);
//! assert!((a.iou(&b) - 0.8).abs() < 1e-6);
//!
//! let unit = a.to_normalized(416.0, 416.0).clamp_unit();
//! assert!(unit.xmax() <= 1.0);
//! ```

mod bbox;
mod coord;
mod space;

pub use bbox::BBoxXYXY;
pub use coord::Coord;
pub use space::{Normalized, Pixel};
