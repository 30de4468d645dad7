//! Source image decoding and colour normalisation.
//!
//! Images are decoded with their embedded orientation applied, then reduced
//! to 8-bit RGB. Transparency cannot be represented in a flattened page, so
//! any alpha (including palette transparency, which the decoder expands to
//! RGBA) is composited onto opaque white.

use crate::error::{StudioError, StudioResult};
use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageReader, Rgb, RgbImage};
use std::path::Path;

/// Decode `path` and apply its EXIF orientation
pub fn open_oriented(path: &Path) -> StudioResult<DynamicImage> {
    let reader = ImageReader::open(path)
        .map_err(|e| StudioError::unreadable(path, e))?
        .with_guessed_format()
        .map_err(|e| StudioError::unreadable(path, e))?;
    let mut decoder = reader
        .into_decoder()
        .map_err(|e| StudioError::unreadable(path, e))?;
    let orientation = decoder.orientation().unwrap_or(Orientation::NoTransforms);
    let mut image =
        DynamicImage::from_decoder(decoder).map_err(|e| StudioError::unreadable(path, e))?;
    image.apply_orientation(orientation);
    Ok(image)
}

/// Reduce any colour model to opaque 8-bit RGB, compositing alpha onto white
pub fn flatten_to_rgb(image: DynamicImage) -> RgbImage {
    if !image.color().has_alpha() {
        return image.into_rgb8();
    }

    let rgba = image.into_rgba8();
    let mut flat = RgbImage::new(rgba.width(), rgba.height());
    for (dst, src) in flat.pixels_mut().zip(rgba.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = Rgb([over_white(r, a), over_white(g, a), over_white(b, a)]);
    }
    flat
}

/// Decode `path` straight to a page-ready RGB raster
pub fn load_page_raster(path: &Path) -> StudioResult<RgbImage> {
    open_oriented(path).map(flatten_to_rgb)
}

fn over_white(channel: u8, alpha: u8) -> u8 {
    let c = channel as u16;
    let a = alpha as u16;
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}
