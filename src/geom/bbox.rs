//! Axis-aligned boxes in XYXY form and the overlap measures NMS relies on.

use super::coord::Coord;
use super::{Normalized, Pixel};

/// An axis-aligned bounding box stored as (xmin, ymin, xmax, ymax).
///
/// Construction does not enforce `min <= max`; a network can emit a
/// negative width and the box should still be representable. Overlap
/// measures treat such boxes as empty.
#[derive(Clone, Copy, PartialEq)]
pub struct BBoxXYXY<TSpace> {
    pub min: Coord<TSpace>,
    pub max: Coord<TSpace>,
}

impl<TSpace> BBoxXYXY<TSpace> {
    #[inline]
    pub fn new(min: Coord<TSpace>, max: Coord<TSpace>) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn from_xyxy(xmin: f32, ymin: f32, xmax: f32, ymax: f32) -> Self {
        Self {
            min: Coord::new(xmin, ymin),
            max: Coord::new(xmax, ymax),
        }
    }

    /// Builds a box from its top-left corner and size.
    #[inline]
    pub fn from_xywh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self::from_xyxy(left, top, left + width, top + height)
    }

    /// Returns `(left, top, width, height)`.
    #[inline]
    pub fn to_xywh(&self) -> (f32, f32, f32, f32) {
        (self.xmin(), self.ymin(), self.width(), self.height())
    }

    #[inline]
    pub fn xmin(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn ymin(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn xmax(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn ymax(&self) -> f32 {
        self.max.y
    }

    /// May be negative if the box is malformed (xmax < xmin).
    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// May be negative if the box is malformed (ymax < ymin).
    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Area of a well-formed box; zero for degenerate or malformed boxes.
    #[inline]
    pub fn area(&self) -> f32 {
        if self.has_positive_area() {
            self.width() * self.height()
        } else {
            0.0
        }
    }

    #[inline]
    pub fn has_positive_area(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Area shared by `self` and `other`, zero when they do not overlap.
    pub fn intersection_area(&self, other: &Self) -> f32 {
        let left = self.xmin().max(other.xmin());
        let top = self.ymin().max(other.ymin());
        let right = self.xmax().min(other.xmax());
        let bottom = self.ymax().min(other.ymax());

        let w = (right - left).max(0.0);
        let h = (bottom - top).max(0.0);
        w * h
    }

    /// Intersection-over-union of two boxes.
    ///
    /// Returns 0.0 if either box has no positive area or the union is not
    /// positive, so callers never divide by zero.
    pub fn iou(&self, other: &Self) -> f32 {
        if !self.has_positive_area() || !other.has_positive_area() {
            return 0.0;
        }

        let intersection = self.intersection_area(other);
        let union = self.area() + other.area() - intersection;
        if union > 0.0 {
            intersection / union
        } else {
            0.0
        }
    }
}

impl<TSpace> std::fmt::Debug for BBoxXYXY<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BBoxXYXY")
            .field("xmin", &self.min.x)
            .field("ymin", &self.min.y)
            .field("xmax", &self.max.x)
            .field("ymax", &self.max.y)
            .finish()
    }
}

impl BBoxXYXY<Pixel> {
    /// Divides every coordinate by the reference resolution.
    ///
    /// No clamping happens here; see [`BBoxXYXY::<Normalized>::clamp_unit`].
    pub fn to_normalized(&self, ref_width: f32, ref_height: f32) -> BBoxXYXY<Normalized> {
        BBoxXYXY::from_xyxy(
            self.min.x / ref_width,
            self.min.y / ref_height,
            self.max.x / ref_width,
            self.max.y / ref_height,
        )
    }
}

impl BBoxXYXY<Normalized> {
    /// Clamps every coordinate into `[0, 1]` and orders the corners so that
    /// `min <= max` on both axes.
    ///
    /// Non-finite coordinates collapse to 0.
    pub fn clamp_unit(&self) -> Self {
        let unit = |v: f32| if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 };
        let a: Coord<Normalized> = Coord::new(unit(self.min.x), unit(self.min.y));
        let b: Coord<Normalized> = Coord::new(unit(self.max.x), unit(self.max.y));
        Self::new(a.min(b), a.max(b))
    }
}
