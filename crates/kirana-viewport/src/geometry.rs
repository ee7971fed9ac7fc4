/// Size in toolkit (logical) units.
///
/// Always non-negative and finite: construction clamps anything else to zero.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct LogicalSize {
    pub width: f64,
    pub height: f64,
}

impl LogicalSize {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: clamp_dim(width),
            height: clamp_dim(height),
        }
    }

    /// Physical pixel size at the given scale factor.
    #[inline]
    pub fn to_pixels(self, dpi_scale: f64) -> PixelSize {
        PixelSize {
            width: round_px(self.width * dpi_scale),
            height: round_px(self.height * dpi_scale),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

/// Size in physical pixels.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn as_tuple(self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[inline]
fn clamp_dim(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

#[inline]
fn round_px(v: f64) -> u32 {
    // `as` saturates and maps NaN to 0.
    v.round() as u32
}

/// Validated scale factor, `None` when negative or non-finite.
///
/// Zero is kept: it collapses the pixel resolution to 0x0.
#[inline]
pub fn sanitize_scale(scale: f64) -> Option<f64> {
    (scale.is_finite() && scale >= 0.0).then_some(scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_and_non_finite_clamp_to_zero() {
        let s = LogicalSize::new(-5.0, f64::NAN);
        assert_eq!(s, LogicalSize::new(0.0, 0.0));
        assert!(s.is_empty());

        let s = LogicalSize::new(f64::INFINITY, 10.0);
        assert_eq!(s.width, 0.0);
        assert_eq!(s.height, 10.0);
    }

    #[test]
    fn pixels_round_half_away_from_zero() {
        let s = LogicalSize::new(100.5, 33.3);
        assert_eq!(s.to_pixels(1.0), PixelSize::new(101, 33));
        assert_eq!(LogicalSize::new(801.0, 601.0).to_pixels(1.25), PixelSize::new(1001, 751));
    }

    #[test]
    fn huge_sizes_saturate() {
        let s = LogicalSize::new(1e300, 1.0);
        assert_eq!(s.to_pixels(2.0).width, u32::MAX);
    }

    #[test]
    fn scale_validation() {
        assert_eq!(sanitize_scale(2.0), Some(2.0));
        assert_eq!(sanitize_scale(0.0), Some(0.0));
        assert_eq!(sanitize_scale(-1.0), None);
        assert_eq!(sanitize_scale(f64::NAN), None);
        assert_eq!(sanitize_scale(f64::INFINITY), None);
    }
}
