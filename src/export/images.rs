//! Image sequence to PDF: one page per image, sized to the image.

use crate::constants::SLOW_EXPORT_MS;
use crate::error::{StudioError, StudioResult};
use crate::export::document::OutputDocument;
use crate::export::{ExportSummary, write_document};
use crate::perf::ScopedTimer;
use crate::render::source::load_page_raster;
use crate::types::ImageSource;
use std::path::Path;

/// Build a PDF at `output` from `sources` in order
///
/// Every image is decoded before the destination is touched, so one
/// unreadable source fails the whole export and writes nothing.
pub fn export_images(sources: &[ImageSource], output: &Path) -> StudioResult<ExportSummary> {
    if sources.is_empty() {
        return Err(StudioError::EmptyInput);
    }
    let _timer = ScopedTimer::new("export_images", SLOW_EXPORT_MS);

    let mut document = OutputDocument::new();
    for source in sources {
        append_image(&mut document, source)?;
    }
    write_document(document, 0, output)
}

pub(crate) fn append_image(document: &mut OutputDocument, source: &ImageSource) -> StudioResult<()> {
    let raster = load_page_raster(&source.path)?;
    document.add_image_page(&raster)?;
    Ok(())
}
