//! Per-line fixed-point accumulator for the exponential blur.
//!
//! Each channel holds a sample scaled by `2^zprec` plus a fractional
//! remainder. One step moves the state `alpha / 2^aprec` of the way toward
//! the current pixel and writes the truncated value back.

use crate::precision::Precision;

/// Running RGBA state of one line sweep.
///
/// Channels are `i32`: a sample shifted by at most 8 bits fits in 16 bits.
/// The update product `alpha * (sample - z)` needs up to 33 bits, so it is
/// formed in `i64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpBlurAccumulator {
    pub r: i32,
    pub g: i32,
    pub b: i32,
    pub a: i32,
}

impl ExpBlurAccumulator {
    /// Seed the state from a boundary pixel (`px[0..4]` = R, G, B, A).
    #[inline]
    pub fn from_pix(px: &[u8], zprec: u32) -> Self {
        Self {
            r: (px[0] as i32) << zprec,
            g: (px[1] as i32) << zprec,
            b: (px[2] as i32) << zprec,
            a: (px[3] as i32) << zprec,
        }
    }

    /// Advance the state toward `px` and overwrite `px` with the result.
    #[inline]
    pub fn apply(&mut self, px: &mut [u8], alpha: u32, prec: Precision) {
        let alpha = alpha as i64;
        let (aprec, zprec) = (prec.aprec(), prec.zprec());

        self.r = step(self.r, px[0], alpha, aprec, zprec);
        self.g = step(self.g, px[1], alpha, aprec, zprec);
        self.b = step(self.b, px[2], alpha, aprec, zprec);
        self.a = step(self.a, px[3], alpha, aprec, zprec);

        px[0] = (self.r >> zprec) as u8;
        px[1] = (self.g >> zprec) as u8;
        px[2] = (self.b >> zprec) as u8;
        px[3] = (self.a >> zprec) as u8;
    }
}

#[inline]
fn step(z: i32, sample: u8, alpha: i64, aprec: u32, zprec: u32) -> i32 {
    let target = ((sample as i32) << zprec) as i64;
    z + ((alpha * (target - z as i64)) >> aprec) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_scales_by_zprec() {
        let acc = ExpBlurAccumulator::from_pix(&[1, 2, 3, 255], 7);
        assert_eq!(acc, ExpBlurAccumulator { r: 128, g: 256, b: 384, a: 255 << 7 });
    }

    #[test]
    fn test_apply_at_fixed_point_is_identity() {
        let prec = Precision::default();
        let mut px = [10u8, 20, 30, 40];
        let mut acc = ExpBlurAccumulator::from_pix(&px, prec.zprec());
        let seed = acc;
        acc.apply(&mut px, 20867, prec);
        assert_eq!(px, [10, 20, 30, 40]);
        assert_eq!(acc, seed);
    }

    #[test]
    fn test_apply_moves_toward_sample() {
        let prec = Precision::default();
        // z = 0, sample 255: z += (20867 * 32640) >> 16 = 10392, out = 81
        let mut acc = ExpBlurAccumulator::default();
        let mut px = [255u8, 0, 0, 255];
        acc.apply(&mut px, 20867, prec);
        assert_eq!(acc.r, 10392);
        assert_eq!(px[0], 81);
        assert_eq!(px[1], 0);
        assert_eq!(px[3], 81);
    }

    #[test]
    fn test_apply_downward_uses_flooring_shift() {
        let prec = Precision::default();
        // z = 255 << 7, sample 0: z += (20867 * -32640) >> 16 = -10393
        let mut acc = ExpBlurAccumulator::from_pix(&[255, 255, 255, 255], 7);
        let mut px = [0u8, 0, 0, 0];
        acc.apply(&mut px, 20867, prec);
        assert_eq!(acc.r, 32640 - 10393);
        assert_eq!(px[0], ((32640 - 10393) >> 7) as u8);
    }

    #[test]
    fn test_apply_widest_precision_does_not_overflow() {
        let prec = Precision::new(16, 8).unwrap();
        let mut acc = ExpBlurAccumulator::default();
        let mut px = [255u8; 4];
        acc.apply(&mut px, (1 << 16) - 1, prec);
        assert_eq!(px, [254; 4]);
        assert!(acc.r > 0);
    }
}
