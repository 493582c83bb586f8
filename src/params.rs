//! Per-call blur parameters.

use crate::error::BlurError;
use crate::precision::{Precision, DEFAULT_APREC, DEFAULT_ZPREC};

/// Radius used when a caller leaves it unspecified.
pub const DEFAULT_RADIUS: f64 = 5.0;

/// Radius and precision for one blur call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlurParams {
    /// Nominal blur radius in pixels. Values below 1 disable the blur.
    pub radius: f64,
    pub precision: Precision,
}

impl BlurParams {
    pub fn new(radius: f64, precision: Precision) -> Self {
        Self { radius, precision }
    }

    /// Default precision with the given radius.
    pub fn with_radius(radius: f64) -> Self {
        Self::new(radius, Precision::default())
    }

    /// Build parameters from optional caller values.
    ///
    /// Missing values take their defaults (radius 5, aprec 16, zprec 7).
    /// An explicit radius of 0 is kept and turns the blur into a no-op.
    pub fn from_options(
        radius: Option<f64>,
        aprec: Option<u32>,
        zprec: Option<u32>,
    ) -> Result<Self, BlurError> {
        let radius = radius.unwrap_or(DEFAULT_RADIUS);
        if radius.is_nan() {
            return Err(BlurError::InvalidRadius);
        }
        let precision = Precision::new(
            aprec.unwrap_or(DEFAULT_APREC),
            zprec.unwrap_or(DEFAULT_ZPREC),
        )?;
        Ok(Self { radius, precision })
    }

    /// Whether this radius leaves the image unchanged.
    #[inline]
    pub fn is_noop(&self) -> bool {
        !(self.radius >= 1.0)
    }
}

impl Default for BlurParams {
    fn default() -> Self {
        Self::with_radius(DEFAULT_RADIUS)
    }
}
