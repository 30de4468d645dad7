//! Raster canvas primitives - fitting and letterboxing
//!
//! Everything here works on in-memory RGB buffers:
//! - `fit_scale` / `fit_dimensions` compute a downscale that never enlarges
//! - `fit_to_box` resizes with a high-quality filter
//! - `letterbox` centres content on a solid square canvas

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

/// Scale that fits `src` inside `max`, capped at 1.0 so content is never enlarged
pub fn fit_scale(src_w: u32, src_h: u32, max_w: u32, max_h: u32) -> f64 {
    if src_w == 0 || src_h == 0 {
        return 1.0;
    }
    let sx = max_w as f64 / src_w as f64;
    let sy = max_h as f64 / src_h as f64;
    sx.min(sy).min(1.0)
}

/// Target dimensions after applying `fit_scale`, at least 1px per side
pub fn fit_dimensions(src_w: u32, src_h: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    let scale = fit_scale(src_w, src_h, max_w, max_h);
    let w = ((src_w as f64 * scale) as u32).max(1);
    let h = ((src_h as f64 * scale) as u32).max(1);
    (w, h)
}

/// Resize `image` to fit inside `max_w` x `max_h` without upscaling (Lanczos3)
pub fn fit_to_box(image: &RgbImage, max_w: u32, max_h: u32) -> RgbImage {
    let (src_w, src_h) = image.dimensions();
    if src_w == 0 || src_h == 0 {
        return image.clone();
    }
    let (w, h) = fit_dimensions(src_w, src_h, max_w, max_h);
    if (w, h) == (src_w, src_h) {
        return image.clone();
    }
    imageops::resize(image, w, h, FilterType::Lanczos3)
}

/// Centre `content` on a `size` x `size` canvas filled with `background`.
///
/// Content larger than the canvas is clipped; callers fit it first.
pub fn letterbox(content: &RgbImage, size: u32, background: Rgb<u8>) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(size, size, background);
    let x = (size as i64 - content.width() as i64) / 2;
    let y = (size as i64 - content.height() as i64) / 2;
    imageops::replace(&mut canvas, content, x, y);
    canvas
}
