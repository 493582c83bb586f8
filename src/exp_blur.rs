//! Exponential blur for RGBA32 buffers.
//!
//! Separable 2D blur built from two 1D passes: every row is swept first,
//! then every column of the row-blurred result. The decay coefficient is
//! derived once per call from the radius and shared by all lines.
//!
//! Buffers are tightly packed RGBA8, row-major, `width * height * 4` bytes.
//! Component order: R=0, G=1, B=2, A=3.

use log::{debug, trace};

use crate::error::{check_rgba32_len, BlurError};
use crate::line_sweep::{sweep_line, Line};
use crate::params::BlurParams;
use crate::precision::Precision;

// ============================================================================
// Public entry points
// ============================================================================

/// Apply exponential blur to an RGBA32 buffer in place.
///
/// A radius below 1 leaves the buffer unchanged. The buffer is validated
/// before anything is written.
pub fn exp_blur_rgba32(
    pixels: &mut [u8],
    width: u32,
    height: u32,
    params: &BlurParams,
) -> Result<(), BlurError> {
    exp_blur_rgba32_xy(
        pixels,
        width,
        height,
        params.radius,
        params.radius,
        params.precision,
    )
}

/// Apply exponential blur with independent horizontal and vertical radii.
///
/// The row pass runs only when `rx >= 1`, the column pass only when
/// `ry >= 1`. Columns always see the result of the row pass.
pub fn exp_blur_rgba32_xy(
    pixels: &mut [u8],
    width: u32,
    height: u32,
    rx: f64,
    ry: f64,
    prec: Precision,
) -> Result<(), BlurError> {
    check_rgba32_len(width, height, pixels.len())?;
    check_radius(rx)?;
    check_radius(ry)?;

    debug!(
        "exp_blur: {}x{} rx={} ry={} aprec={} zprec={}",
        width,
        height,
        rx,
        ry,
        prec.aprec(),
        prec.zprec()
    );

    if rx >= 1.0 {
        blur_rows(pixels, width as usize, height as usize, prec.alpha(rx), prec);
    } else {
        trace!("exp_blur: rx={} below 1, row pass skipped", rx);
    }
    if ry >= 1.0 {
        blur_columns(pixels, width as usize, height as usize, prec.alpha(ry), prec);
    } else {
        trace!("exp_blur: ry={} below 1, column pass skipped", ry);
    }
    Ok(())
}

/// Horizontal pass only.
pub fn exp_blur_rgba32_x(
    pixels: &mut [u8],
    width: u32,
    height: u32,
    radius: f64,
    prec: Precision,
) -> Result<(), BlurError> {
    exp_blur_rgba32_xy(pixels, width, height, radius, 0.0, prec)
}

/// Vertical pass only.
pub fn exp_blur_rgba32_y(
    pixels: &mut [u8],
    width: u32,
    height: u32,
    radius: f64,
    prec: Precision,
) -> Result<(), BlurError> {
    exp_blur_rgba32_xy(pixels, width, height, 0.0, radius, prec)
}

fn check_radius(radius: f64) -> Result<(), BlurError> {
    if radius.is_nan() {
        Err(BlurError::InvalidRadius)
    } else {
        Ok(())
    }
}

// ============================================================================
// Passes
// ============================================================================

#[cfg(not(feature = "multithreading"))]
fn blur_rows(pixels: &mut [u8], width: usize, height: usize, alpha: u32, prec: Precision) {
    trace!("exp_blur: row pass, alpha={}", alpha);
    for y in 0..height {
        sweep_line(pixels, Line::row(y, width), alpha, prec);
    }
}

#[cfg(feature = "multithreading")]
fn blur_rows(pixels: &mut [u8], width: usize, _height: usize, alpha: u32, prec: Precision) {
    use rayon::prelude::*;

    trace!("exp_blur: parallel row pass, alpha={}", alpha);
    pixels
        .par_chunks_mut(width * 4)
        .for_each(|row| sweep_line(row, Line::row(0, width), alpha, prec));
}

fn blur_columns(pixels: &mut [u8], width: usize, height: usize, alpha: u32, prec: Precision) {
    trace!("exp_blur: column pass, alpha={}", alpha);
    for x in 0..width {
        sweep_line(pixels, Line::column(x, width, height), alpha, prec);
    }
}
