use exp_blur::{exp_blur_rgba32, BlurParams};
use log::debug;
use wasm_bindgen::prelude::*;

/// Blur an RGBA pixel buffer and hand it back.
///
/// `pixels` is width * height * 4 bytes (RGBA order). Missing `radius`,
/// `aprec` or `zprec` take their defaults (5, 16, 7); a radius below 1
/// returns the pixels unchanged.
#[wasm_bindgen]
pub fn apply_blur(
    mut pixels: Vec<u8>,
    width: u32,
    height: u32,
    radius: Option<f64>,
    aprec: Option<u32>,
    zprec: Option<u32>,
) -> Result<Vec<u8>, JsError> {
    let params = BlurParams::from_options(radius, aprec, zprec)?;
    debug!("apply_blur: {}x{} {:?}", width, height, params);
    exp_blur_rgba32(&mut pixels, width, height, &params)?;
    Ok(pixels)
}

/// Same as [`apply_blur`] for canvas `ImageData.data`.
///
/// Returns a new `Uint8ClampedArray`; the input array is not modified.
#[wasm_bindgen]
pub fn blur_image_data(
    data: &js_sys::Uint8ClampedArray,
    width: u32,
    height: u32,
    radius: Option<f64>,
    aprec: Option<u32>,
    zprec: Option<u32>,
) -> Result<js_sys::Uint8ClampedArray, JsError> {
    let out = apply_blur(data.to_vec(), width, height, radius, aprec, zprec)?;
    Ok(js_sys::Uint8ClampedArray::from(&out[..]))
}

/// Default parameters as `[radius, aprec, zprec]`.
#[wasm_bindgen]
pub fn default_params() -> Vec<f64> {
    let p = BlurParams::default();
    vec![
        p.radius,
        p.precision.aprec() as f64,
        p.precision.zprec() as f64,
    ]
}

/// Get the library version string.
#[wasm_bindgen]
pub fn version() -> String {
    format!("exp-blur {}", env!("CARGO_PKG_VERSION"))
}
