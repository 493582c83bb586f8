//! # exp-blur
//!
//! Exponential blur for RGBA8 pixel buffers: a cheap approximation to
//! Gaussian blur built from first-order IIR filters in fixed-point
//! arithmetic, using O(1) memory per line.
//!
//! ## Architecture
//!
//! The filter is three layers applied in strict sequence:
//!
//! 1. **Accumulator**: moves a per-channel fixed-point state a fraction
//!    `alpha / 2^aprec` toward one pixel and writes the result back
//! 2. **Line sweep**: runs the accumulator forward then backward along one
//!    row or column, giving a symmetric exponential kernel
//! 3. **Orchestrator**: derives `alpha` from the radius, sweeps every row,
//!    then every column of the row-blurred result
//!
//! ```
//! use exp_blur::{exp_blur_rgba32, BlurParams};
//!
//! let mut pixels = vec![0u8; 16 * 16 * 4];
//! pixels[(8 * 16 + 8) * 4] = 255;
//! exp_blur_rgba32(&mut pixels, 16, 16, &BlurParams::with_radius(3.0)).unwrap();
//! assert!(pixels[(8 * 16 + 7) * 4] > 0);
//! ```

pub mod accumulator;
pub mod error;
pub mod exp_blur;
pub mod line_sweep;
pub mod params;
pub mod pixel_buffer;
pub mod precision;

pub use error::BlurError;
pub use exp_blur::{exp_blur_rgba32, exp_blur_rgba32_x, exp_blur_rgba32_xy, exp_blur_rgba32_y};
pub use params::{BlurParams, DEFAULT_RADIUS};
pub use pixel_buffer::PixelBuffer;
pub use precision::{blur_alpha, Precision, DEFAULT_APREC, DEFAULT_ZPREC, MAX_APREC, MAX_ZPREC};
