//! Thumbnail generation for the page list.
//!
//! Every thumbnail is exactly `size` x `size`: the source is fitted (never
//! enlarged) into the padded content box and centred on a solid canvas.
//! PDF pages are rasterized at a fixed low scale regardless of `size`.

use crate::constants::SLOW_RENDER_MS;
use crate::error::StudioResult;
use crate::pdf::PageRasterizer;
use crate::perf::ScopedTimer;
use crate::render::canvas::{fit_to_box, letterbox};
use crate::render::source::load_page_raster;
use crate::types::PageEntry;
use image::{Rgb, RgbImage};

/// Parameters for thumbnail rendering
#[derive(Clone, Debug, PartialEq)]
pub struct ThumbnailConfig {
    /// Edge length of the square output
    pub size: u32,
    /// Total padding between content and canvas edge
    pub padding: u32,
    pub background: Rgb<u8>,
    /// Rasterization factor for PDF pages
    pub pdf_scale: f32,
}

impl ThumbnailConfig {
    fn content_box(&self) -> u32 {
        self.size.saturating_sub(self.padding).max(1)
    }
}

/// Render the thumbnail for a single entry
pub fn render_thumbnail(
    entry: &PageEntry,
    config: &ThumbnailConfig,
    rasterizer: &dyn PageRasterizer,
) -> StudioResult<RgbImage> {
    let _timer = ScopedTimer::new("render_thumbnail", SLOW_RENDER_MS);
    let raster = match entry {
        PageEntry::Image(image) => load_page_raster(&image.path)?,
        PageEntry::PdfPage(page) => {
            rasterizer.rasterize(&page.path, page.page_index, config.pdf_scale)?
        }
    };
    Ok(thumbnail_from_raster(&raster, config))
}

/// Fit an already-decoded raster into the thumbnail canvas
pub fn thumbnail_from_raster(raster: &RgbImage, config: &ThumbnailConfig) -> RgbImage {
    let content = config.content_box();
    let fitted = fit_to_box(raster, content, content);
    letterbox(&fitted, config.size, config.background)
}
