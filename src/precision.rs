//! Fixed-point precision parameters and the decay coefficient.
//!
//! `aprec` is the number of fractional bits of the decay coefficient
//! `alpha`, `zprec` the number of fractional bits the per-line accumulator
//! carries beyond the 8 bits of a sample.

use crate::error::BlurError;

/// Default number of fractional bits in `alpha`.
pub const DEFAULT_APREC: u32 = 16;
/// Default number of extra fractional bits in the accumulator.
pub const DEFAULT_ZPREC: u32 = 7;
/// Largest accepted `aprec`.
pub const MAX_APREC: u32 = 16;
/// Largest accepted `zprec`.
pub const MAX_ZPREC: u32 = 8;

/// Calibration constant, approximately `-ln(0.1)`: about 90% of the kernel
/// mass falls within `radius` pixels.
const KERNEL_MASS_LOG: f64 = 2.3;

/// Validated pair of fixed-point precisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    aprec: u32,
    zprec: u32,
}

impl Precision {
    /// Create a precision pair, rejecting values outside `1..=16` / `0..=8`.
    pub fn new(aprec: u32, zprec: u32) -> Result<Self, BlurError> {
        if aprec == 0 || aprec > MAX_APREC {
            return Err(BlurError::AlphaPrecision(aprec));
        }
        if zprec > MAX_ZPREC {
            return Err(BlurError::StatePrecision(zprec));
        }
        Ok(Self { aprec, zprec })
    }

    #[inline]
    pub fn aprec(&self) -> u32 {
        self.aprec
    }

    #[inline]
    pub fn zprec(&self) -> u32 {
        self.zprec
    }

    /// Decay coefficient for `radius` at this precision's `aprec`.
    #[inline]
    pub fn alpha(&self, radius: f64) -> u32 {
        blur_alpha(radius, self.aprec)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            aprec: DEFAULT_APREC,
            zprec: DEFAULT_ZPREC,
        }
    }
}

/// Derive the fixed-point decay coefficient from a blur radius.
///
/// `alpha = floor(2^aprec * (1 - exp(-2.3 / (radius + 1))))`
///
/// The result lies in `[0, 2^aprec)` for any `radius >= 0`. Larger radii give
/// smaller coefficients and therefore slower decay.
pub fn blur_alpha(radius: f64, aprec: u32) -> u32 {
    let one = (1u32 << aprec) as f64;
    (one * (1.0 - (-KERNEL_MASS_LOG / (radius + 1.0)).exp())).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_precision() {
        let p = Precision::default();
        assert_eq!(p.aprec(), 16);
        assert_eq!(p.zprec(), 7);
    }

    #[test]
    fn test_precision_ranges() {
        assert!(Precision::new(1, 0).is_ok());
        assert!(Precision::new(16, 8).is_ok());
        assert_eq!(Precision::new(0, 7), Err(BlurError::AlphaPrecision(0)));
        assert_eq!(Precision::new(17, 7), Err(BlurError::AlphaPrecision(17)));
        assert_eq!(Precision::new(16, 9), Err(BlurError::StatePrecision(9)));
    }

    #[test]
    fn test_alpha_radius_5() {
        // floor(65536 * (1 - exp(-2.3 / 6)))
        assert_eq!(blur_alpha(5.0, 16), 20867);
    }

    #[test]
    fn test_alpha_known_values() {
        assert_eq!(blur_alpha(1.0, 16), 44784);
        assert_eq!(blur_alpha(3.0, 16), 28658);
        assert_eq!(blur_alpha(10.0, 16), 12365);
        assert_eq!(blur_alpha(5.0, 8), 81);
    }

    #[test]
    fn test_alpha_decreases_with_radius() {
        let mut prev = u32::MAX;
        for r in 1..50 {
            let a = blur_alpha(r as f64, 16);
            assert!(a < prev, "alpha should shrink as radius grows (r={r})");
            assert!(a < 1 << 16);
            prev = a;
        }
    }

    #[test]
    fn test_alpha_infinite_radius() {
        assert_eq!(blur_alpha(f64::INFINITY, 16), 0);
    }
}
