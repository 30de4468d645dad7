//! PDF page rasterization.
//!
//! `PageRasterizer` is the seam between the renderers and whatever turns a
//! PDF page into pixels. The production implementation is backed by PDFium;
//! `UnavailableRasterizer` stands in when the library cannot be loaded so
//! the image pipeline keeps working.

use crate::error::{StudioError, StudioResult};
use crate::pdf::PdfiumLoader;
use image::RgbImage;
use pdfium_render::prelude::*;
use std::path::Path;

/// Turns PDF pages into RGB rasters at a given scale factor (1.0 = 72 dpi)
pub trait PageRasterizer {
    /// Number of pages in the PDF at `path`
    fn page_count(&self, path: &Path) -> StudioResult<usize>;

    /// Rasterize one page, opaque, at `scale`
    fn rasterize(&self, path: &Path, page_index: usize, scale: f32) -> StudioResult<RgbImage>;

    /// Rasterize every page of `path`.
    ///
    /// The outer error means the document itself could not be opened; inner
    /// errors are per page so one bad page does not hide the others.
    fn rasterize_document(&self, path: &Path, scale: f32) -> StudioResult<Vec<StudioResult<RgbImage>>> {
        let count = self.page_count(path)?;
        Ok((0..count)
            .map(|index| self.rasterize(path, index, scale))
            .collect())
    }
}

/// PDFium-backed rasterizer
pub struct PdfiumRasterizer {
    pdfium: Pdfium,
}

impl PdfiumRasterizer {
    pub fn new(pdfium: Pdfium) -> Self {
        Self { pdfium }
    }

    /// Bind PDFium, preferring `library_override` when given
    pub fn load(library_override: Option<&Path>) -> StudioResult<Self> {
        PdfiumLoader::load(library_override).map(Self::new)
    }

    fn open<'a>(&'a self, path: &Path) -> StudioResult<PdfDocument<'a>> {
        self.pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| StudioError::unreadable(path, format!("{:?}", e)))
    }
}

fn render_page(page: &PdfPage, path: &Path, scale: f32) -> StudioResult<RgbImage> {
    let config = PdfRenderConfig::new().scale_page_by_factor(scale);
    let bitmap = page
        .render_with_config(&config)
        .map_err(|e| StudioError::unreadable(path, format!("{:?}", e)))?;
    Ok(bitmap.as_image().into_rgb8())
}

impl PageRasterizer for PdfiumRasterizer {
    fn page_count(&self, path: &Path) -> StudioResult<usize> {
        let document = self.open(path)?;
        let count = document.pages().len() as usize;
        Ok(count)
    }

    fn rasterize(&self, path: &Path, page_index: usize, scale: f32) -> StudioResult<RgbImage> {
        let document = self.open(path)?;
        let page_count = document.pages().len() as usize;
        let out_of_range = || StudioError::PageIndexOutOfRange {
            path: path.to_path_buf(),
            index: page_index,
            page_count,
        };
        let index = u16::try_from(page_index).map_err(|_| out_of_range())?;
        if page_index >= page_count {
            return Err(out_of_range());
        }
        let page = document
            .pages()
            .get(index)
            .map_err(|e| StudioError::unreadable(path, format!("{:?}", e)))?;
        render_page(&page, path, scale)
    }

    fn rasterize_document(&self, path: &Path, scale: f32) -> StudioResult<Vec<StudioResult<RgbImage>>> {
        let document = self.open(path)?;
        let rasters = document
            .pages()
            .iter()
            .map(|page| render_page(&page, path, scale))
            .collect();
        Ok(rasters)
    }
}

/// Rasterizer used when PDFium is missing; every call reports why
pub struct UnavailableRasterizer {
    reason: String,
}

impl UnavailableRasterizer {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl PageRasterizer for UnavailableRasterizer {
    fn page_count(&self, _path: &Path) -> StudioResult<usize> {
        Err(StudioError::RasterizerUnavailable(self.reason.clone()))
    }

    fn rasterize(&self, _path: &Path, _page_index: usize, _scale: f32) -> StudioResult<RgbImage> {
        Err(StudioError::RasterizerUnavailable(self.reason.clone()))
    }
}

/// Load PDFium, falling back to an `UnavailableRasterizer` that carries the reason
pub fn load_default_rasterizer(library_override: Option<&Path>) -> Box<dyn PageRasterizer> {
    match PdfiumRasterizer::load(library_override) {
        Ok(rasterizer) => Box::new(rasterizer),
        Err(e) => {
            tracing::warn!("PDF page rendering disabled: {}", e);
            Box::new(UnavailableRasterizer::new(e.to_string()))
        }
    }
}
