//! Error type for blur calls that violate the buffer or parameter contract.
//!
//! The filter itself cannot fail; every variant here describes a caller
//! mistake detected before the buffer is touched.

use core::fmt;

/// Error returned when a blur call is given inconsistent arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlurError {
    /// Width or height is zero, or `width * height * 4` overflows `usize`.
    InvalidDimensions { width: u32, height: u32 },
    /// Buffer length does not match `width * height * 4`.
    BufferLength { expected: usize, actual: usize },
    /// `aprec` outside `1..=MAX_APREC`.
    AlphaPrecision(u32),
    /// `zprec` outside `0..=MAX_ZPREC`.
    StatePrecision(u32),
    /// Radius is NaN.
    InvalidRadius,
}

impl fmt::Display for BlurError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlurError::InvalidDimensions { width, height } => {
                write!(f, "invalid image dimensions {}x{}", width, height)
            }
            BlurError::BufferLength { expected, actual } => write!(
                f,
                "pixel buffer holds {} bytes, expected {} (width * height * 4)",
                actual, expected
            ),
            BlurError::AlphaPrecision(aprec) => write!(
                f,
                "alpha precision {} out of range 1..={}",
                aprec,
                crate::precision::MAX_APREC
            ),
            BlurError::StatePrecision(zprec) => write!(
                f,
                "state precision {} out of range 0..={}",
                zprec,
                crate::precision::MAX_ZPREC
            ),
            BlurError::InvalidRadius => write!(f, "blur radius is NaN"),
        }
    }
}

impl std::error::Error for BlurError {}

/// Byte length of a `width` x `height` RGBA8 image.
pub(crate) fn rgba32_len(width: u32, height: u32) -> Result<usize, BlurError> {
    if width == 0 || height == 0 {
        return Err(BlurError::InvalidDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or(BlurError::InvalidDimensions { width, height })
}

/// Check that `len` bytes describe a `width` x `height` RGBA8 image.
pub(crate) fn check_rgba32_len(width: u32, height: u32, len: usize) -> Result<(), BlurError> {
    let expected = rgba32_len(width, height)?;
    if len != expected {
        return Err(BlurError::BufferLength {
            expected,
            actual: len,
        });
    }
    Ok(())
}
