//! Owned RGBA8 image with validated dimensions.
//!
//! The by-value [`PixelBuffer::exp_blur`] suits callers that hand a whole
//! buffer across a boundary and take a whole buffer back.

use crate::error::{check_rgba32_len, rgba32_len, BlurError};
use crate::exp_blur::exp_blur_rgba32;
use crate::params::BlurParams;

/// An RGBA pixel buffer with dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    /// RGBA pixel data, row-major, top-to-bottom. Length = width * height * 4.
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Transparent black image.
    pub fn new(width: u32, height: u32) -> Result<Self, BlurError> {
        let len = rgba32_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0u8; len],
        })
    }

    /// Wrap existing RGBA data; fails if `data.len() != width * height * 4`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self, BlurError> {
        check_rgba32_len(width, height, data.len())?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Pixel at (x, y). Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// Overwrite the pixel at (x, y). Panics when out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, px: [u8; 4]) {
        let i = self.offset(x, y);
        self.data[i..i + 4].copy_from_slice(&px);
    }

    /// Blur in place.
    pub fn exp_blur_in_place(&mut self, params: &BlurParams) -> Result<(), BlurError> {
        exp_blur_rgba32(&mut self.data, self.width, self.height, params)
    }

    /// Blur and return the buffer.
    pub fn exp_blur(mut self, params: &BlurParams) -> Result<Self, BlurError> {
        self.exp_blur_in_place(params)?;
        Ok(self)
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{}",
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let buf = PixelBuffer::new(3, 2).unwrap();
        assert_eq!(buf.data().len(), 24);
        assert!(buf.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_new_rejects_zero_width() {
        assert_eq!(
            PixelBuffer::new(0, 4),
            Err(BlurError::InvalidDimensions {
                width: 0,
                height: 4
            })
        );
    }

    #[test]
    fn test_from_vec_checks_length() {
        assert!(PixelBuffer::from_vec(2, 2, vec![0; 16]).is_ok());
        assert_eq!(
            PixelBuffer::from_vec(2, 2, vec![0; 12]),
            Err(BlurError::BufferLength {
                expected: 16,
                actual: 12
            })
        );
    }

    #[test]
    fn test_pixel_roundtrip() {
        let mut buf = PixelBuffer::new(4, 3).unwrap();
        buf.set_pixel(3, 2, [1, 2, 3, 4]);
        assert_eq!(buf.pixel(3, 2), [1, 2, 3, 4]);
        assert_eq!(&buf.data()[44..48], &[1, 2, 3, 4]);
    }

    #[test]
    #[should_panic]
    fn test_pixel_out_of_bounds() {
        let buf = PixelBuffer::new(4, 3).unwrap();
        buf.pixel(4, 0);
    }

    #[test]
    fn test_exp_blur_by_value_matches_in_place() {
        let mut a = PixelBuffer::new(9, 9).unwrap();
        a.set_pixel(4, 4, [255, 128, 0, 255]);
        let b = a.clone();

        a.exp_blur_in_place(&BlurParams::with_radius(2.0)).unwrap();
        let b = b.exp_blur(&BlurParams::with_radius(2.0)).unwrap();
        assert_eq!(a, b);
        assert_ne!(b.pixel(3, 4), [0, 0, 0, 0]);
    }
}
