//! Rectangle scaling with saturating arithmetic.
//!
//! Used to convert window-space rectangles between logical and physical
//! pixels. Scale factors reported by the windowing layer are `f64`, while
//! rectangles are stored as `f32`, so the factor is clamped into the `f32`
//! range first and every product saturates instead of overflowing.

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle described by its origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at the origin
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns this rectangle scaled by `scale`. See [`scale_rect`].
    #[must_use]
    pub fn scale(self, scale: f64) -> Self {
        scale_rect(self, scale)
    }
}

impl From<bevy::math::Rect> for Rect {
    fn from(rect: bevy::math::Rect) -> Self {
        Self::new(rect.min.x, rect.min.y, rect.width(), rect.height())
    }
}

/// Bevy rects are stored as min/max corners, so a negative width or height
/// comes back from the round trip as the same area with positive size.
impl From<Rect> for bevy::math::Rect {
    fn from(rect: Rect) -> Self {
        bevy::math::Rect::from_corners(
            Vec2::new(rect.x, rect.y),
            Vec2::new(rect.right(), rect.bottom()),
        )
    }
}

/// Clamps an `f64` into the finite `f32` range.
///
/// NaN maps to `0.0`; infinities map to `f32::MIN` / `f32::MAX`.
pub fn clamp_to_f32(value: f64) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(f32::MIN as f64, f32::MAX as f64) as f32
}

/// Multiplies two `f32` values, saturating at the finite `f32` range.
///
/// The product is computed in `f64`, where it is exact for any pair of
/// finite `f32` inputs. A NaN product (`inf * 0`, NaN operands) yields `0.0`.
pub fn saturating_mul(lhs: f32, rhs: f32) -> f32 {
    clamp_to_f32(lhs as f64 * rhs as f64)
}

/// Scales every field of `rect` by `scale`.
///
/// Never fails: extreme factors and fields saturate to finite values.
/// Infinite fields therefore come back as `f32::MIN` / `f32::MAX` even at a
/// scale of `1.0`; only finite rects are returned unchanged.
pub fn scale_rect(rect: Rect, scale: f64) -> Rect {
    let scale = clamp_to_f32(scale);
    Rect {
        x: saturating_mul(rect.x, scale),
        y: saturating_mul(rect.y, scale),
        width: saturating_mul(rect.width, scale),
        height: saturating_mul(rect.height, scale),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_finite(rect: Rect) -> bool {
        rect.x.is_finite() && rect.y.is_finite() && rect.width.is_finite() && rect.height.is_finite()
    }

    #[test]
    fn test_scale_rect_doubles_fields() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(scale_rect(rect, 2.0), Rect::new(20.0, 40.0, 200.0, 100.0));
    }

    #[test]
    fn test_scale_rect_identity() {
        let rects = [
            Rect::new(10.0, 20.0, 100.0, 50.0),
            Rect::new(-3.25, 0.5, 1e-30, 7.0),
            Rect::new(f32::MAX, f32::MIN, f32::MIN_POSITIVE, -0.0),
        ];
        for rect in rects {
            assert_eq!(scale_rect(rect, 1.0), rect);
        }
    }

    #[test]
    fn test_scale_rect_by_zero() {
        let rect = Rect::new(-12.0, 900.0, f32::MAX, 3.5);
        let scaled = scale_rect(rect, 0.0);
        assert_eq!(scaled, Rect::default());
    }

    #[test]
    fn test_scale_rect_fractional() {
        let rect = Rect::new(300.0, 150.0, 1920.0, 1080.0);
        assert_eq!(scale_rect(rect, 1.5), Rect::new(450.0, 225.0, 2880.0, 1620.0));
        assert_eq!(scale_rect(rect, 0.5), Rect::new(150.0, 75.0, 960.0, 540.0));
    }

    #[test]
    fn test_scale_rect_negative_factor() {
        let rect = Rect::new(1.0, -2.0, 3.0, 4.0);
        assert_eq!(scale_rect(rect, -2.0), Rect::new(-2.0, 4.0, -6.0, -8.0));
    }

    #[test]
    fn test_scale_rect_huge_factor_saturates() {
        let rect = Rect::new(1.0, -1.0, 100.0, 0.0);
        let scaled = scale_rect(rect, 1e300);
        assert!(all_finite(scaled));
        assert_eq!(scaled.x, f32::MAX);
        assert_eq!(scaled.y, f32::MIN);
        assert_eq!(scaled.width, f32::MAX);
        assert_eq!(scaled.height, 0.0);
    }

    #[test]
    fn test_scale_rect_infinite_factor_saturates() {
        let rect = Rect::new(2.0, 2.0, 2.0, 2.0);
        let up = scale_rect(rect, f64::INFINITY);
        let down = scale_rect(rect, f64::NEG_INFINITY);
        assert!(all_finite(up));
        assert!(all_finite(down));
        assert_eq!(up.width, f32::MAX);
        assert_eq!(down.width, f32::MIN);
    }

    #[test]
    fn test_scale_rect_nan_factor_is_zero() {
        let rect = Rect::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(scale_rect(rect, f64::NAN), Rect::default());
    }

    #[test]
    fn test_scale_rect_large_fields_saturate() {
        let rect = Rect::new(f32::MAX, f32::MIN, f32::MAX / 2.0, 1.0);
        let scaled = scale_rect(rect, 4.0);
        assert_eq!(scaled.x, f32::MAX);
        assert_eq!(scaled.y, f32::MIN);
        assert_eq!(scaled.width, f32::MAX);
        assert_eq!(scaled.height, 4.0);
    }

    #[test]
    fn test_scale_rect_infinite_field() {
        let rect = Rect::new(f32::INFINITY, f32::NEG_INFINITY, 1.0, 1.0);
        let scaled = scale_rect(rect, 2.0);
        assert_eq!(scaled.x, f32::MAX);
        assert_eq!(scaled.y, f32::MIN);

        let zeroed = scale_rect(rect, 0.0);
        assert_eq!(zeroed.x, 0.0);
        assert_eq!(zeroed.y, 0.0);
    }

    #[test]
    fn test_scale_rect_identity_saturates_infinite_fields() {
        let rect = Rect::new(f32::INFINITY, 5.0, f32::NEG_INFINITY, 2.0);
        let scaled = scale_rect(rect, 1.0);
        assert_eq!(scaled, Rect::new(f32::MAX, 5.0, f32::MIN, 2.0));
        assert_ne!(scaled, rect);
    }

    #[test]
    fn test_clamp_to_f32() {
        assert_eq!(clamp_to_f32(1.25), 1.25);
        assert_eq!(clamp_to_f32(1e40), f32::MAX);
        assert_eq!(clamp_to_f32(-1e40), f32::MIN);
        assert_eq!(clamp_to_f32(f64::NAN), 0.0);
    }

    #[test]
    fn test_saturating_mul() {
        assert_eq!(saturating_mul(3.0, 4.0), 12.0);
        assert_eq!(saturating_mul(f32::MAX, 2.0), f32::MAX);
        assert_eq!(saturating_mul(f32::MAX, -2.0), f32::MIN);
        assert_eq!(saturating_mul(f32::NAN, 1.0), 0.0);
    }

    #[test]
    fn test_rect_method_matches_free_function() {
        let rect = Rect::new(4.0, 8.0, 16.0, 32.0);
        assert_eq!(rect.scale(1.25), scale_rect(rect, 1.25));
    }

    #[test]
    fn test_bevy_rect_conversion() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        let bevy_rect: bevy::math::Rect = rect.into();
        assert_eq!(bevy_rect.min, Vec2::new(10.0, 20.0));
        assert_eq!(bevy_rect.max, Vec2::new(40.0, 60.0));

        let back = Rect::from(bevy_rect);
        assert_eq!(back, rect);
    }

    #[test]
    fn test_bevy_rect_conversion_normalizes_negative_size() {
        let rect = Rect::new(10.0, 10.0, -4.0, -6.0);
        let bevy_rect: bevy::math::Rect = rect.into();
        assert_eq!(bevy_rect.min, Vec2::new(6.0, 4.0));
        assert_eq!(bevy_rect.max, Vec2::new(10.0, 10.0));

        assert_eq!(Rect::from(bevy_rect), Rect::new(6.0, 4.0, 4.0, 6.0));
    }

    #[test]
    fn test_edges() {
        let rect = Rect::from_size(800.0, 600.0);
        assert_eq!(rect.right(), 800.0);
        assert_eq!(rect.bottom(), 600.0);
    }
}
