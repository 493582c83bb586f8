//! Forward/backward IIR sweep over one row or column.
//!
//! A single one-sided pass is causal; running it back over the filtered
//! line with the same state makes the response symmetric. Rows and columns
//! differ only in the byte distance between consecutive pixels.

use crate::accumulator::ExpBlurAccumulator;
use crate::precision::Precision;

const CHANNELS: usize = 4;

/// One row or column of an RGBA32 buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    /// Byte offset of the first pixel.
    pub start: usize,
    /// Bytes between consecutive pixels.
    pub stride: usize,
    /// Number of pixels.
    pub len: usize,
}

impl Line {
    /// Row `y` of a `width`-pixel wide image.
    pub fn row(y: usize, width: usize) -> Self {
        Self {
            start: y * width * CHANNELS,
            stride: CHANNELS,
            len: width,
        }
    }

    /// Column `x` of a `width` x `height` image.
    pub fn column(x: usize, width: usize, height: usize) -> Self {
        Self {
            start: x * CHANNELS,
            stride: width * CHANNELS,
            len: height,
        }
    }

    #[inline]
    fn offset(&self, index: usize) -> usize {
        self.start + index * self.stride
    }
}

/// Blur one line in place: seed from its first pixel, sweep forward over
/// `0..=len-2`, then backward over `len-2..=0` without reseeding.
///
/// Lines shorter than two pixels are left as they are.
pub fn sweep_line(pixels: &mut [u8], line: Line, alpha: u32, prec: Precision) {
    if line.len < 2 {
        return;
    }
    let mut z = forward_pass(pixels, line, alpha, prec);
    for index in (0..line.len - 1).rev() {
        let off = line.offset(index);
        z.apply(&mut pixels[off..off + CHANNELS], alpha, prec);
    }
}

/// Seed and run the forward half of [`sweep_line`], returning the state the
/// backward half continues from.
pub(crate) fn forward_pass(
    pixels: &mut [u8],
    line: Line,
    alpha: u32,
    prec: Precision,
) -> ExpBlurAccumulator {
    let first = line.offset(0);
    let mut z = ExpBlurAccumulator::from_pix(&pixels[first..first + CHANNELS], prec.zprec());
    for index in 0..line.len.saturating_sub(1) {
        let off = line.offset(index);
        z.apply(&mut pixels[off..off + CHANNELS], alpha, prec);
    }
    z
}
