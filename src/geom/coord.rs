//! Typed 2D points.

use std::marker::PhantomData;

/// A point tagged with the coordinate space it lives in.
///
/// `TSpace` is [`Pixel`](super::Pixel) or [`Normalized`](super::Normalized).
#[derive(Clone, Copy, PartialEq)]
pub struct Coord<TSpace> {
    pub x: f32,
    pub y: f32,
    _space: PhantomData<TSpace>,
}

impl<TSpace> Coord<TSpace> {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            _space: PhantomData,
        }
    }

    /// Returns true if neither component is NaN or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }
}

impl<TSpace> std::fmt::Debug for Coord<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Coord").field(&self.x).field(&self.y).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Pixel;

    #[test]
    fn min_and_max_are_component_wise() {
        let a: Coord<Pixel> = Coord::new(10.0, 40.0);
        let b: Coord<Pixel> = Coord::new(30.0, 20.0);

        assert_eq!(a.min(b), Coord::new(10.0, 20.0));
        assert_eq!(a.max(b), Coord::new(30.0, 40.0));
    }

    #[test]
    fn nan_is_not_finite() {
        let nan: Coord<Pixel> = Coord::new(f32::NAN, 0.0);
        assert!(!nan.is_finite());
        assert!(Coord::<Pixel>::new(1.0, 2.0).is_finite());
    }
}
