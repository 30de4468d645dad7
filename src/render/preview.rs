//! On-demand preview of the selected page.
//!
//! Rendered at a higher PDF scale than thumbnails and fitted into the
//! viewport without upscaling. Failure is an explicit `Preview::Unavailable`
//! so the UI shows a placeholder instead of blank content.

use crate::constants::SLOW_RENDER_MS;
use crate::error::StudioResult;
use crate::pdf::PageRasterizer;
use crate::perf::ScopedTimer;
use crate::render::canvas::fit_to_box;
use crate::render::source::load_page_raster;
use crate::types::PageEntry;
use image::RgbImage;

/// Parameters for preview rendering
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewConfig {
    pub max_width: u32,
    pub max_height: u32,
    /// Rasterization factor for PDF pages
    pub pdf_scale: f32,
}

/// Outcome of a preview render
#[derive(Clone, Debug)]
pub enum Preview {
    Ready(RgbImage),
    /// Nothing to show; `message` is displayed in place of the image
    Unavailable { message: String },
}

impl Preview {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Preview::Unavailable {
            message: message.into(),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Preview::Ready(_))
    }

    pub fn image(&self) -> Option<&RgbImage> {
        match self {
            Preview::Ready(image) => Some(image),
            Preview::Unavailable { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Preview::Ready(_) => None,
            Preview::Unavailable { message } => Some(message),
        }
    }
}

/// Render `entry` for the preview panel
pub fn render_preview(
    entry: &PageEntry,
    config: &PreviewConfig,
    rasterizer: &dyn PageRasterizer,
) -> Preview {
    match try_render_preview(entry, config, rasterizer) {
        Ok(image) => Preview::Ready(image),
        Err(e) => {
            tracing::warn!(path = %entry.source_path().display(), "Preview failed: {}", e);
            Preview::unavailable(format!("Could not load preview\n{}", e))
        }
    }
}

fn try_render_preview(
    entry: &PageEntry,
    config: &PreviewConfig,
    rasterizer: &dyn PageRasterizer,
) -> StudioResult<RgbImage> {
    let _timer = ScopedTimer::new("render_preview", SLOW_RENDER_MS);
    let raster = match entry {
        PageEntry::Image(image) => load_page_raster(&image.path)?,
        PageEntry::PdfPage(page) => {
            rasterizer.rasterize(&page.path, page.page_index, config.pdf_scale)?
        }
    };
    Ok(fit_to_box(&raster, config.max_width, config.max_height))
}
