//! Page-copy merge: selected pages of existing PDFs into one document.
//!
//! Pages are copied structurally, never rasterized, so text and vector
//! content survive. Each source is parsed once per export however many of
//! its pages are selected.

use crate::constants::SLOW_EXPORT_MS;
use crate::error::{StudioError, StudioResult};
use crate::export::document::OutputDocument;
use crate::export::{ExportSummary, write_document};
use crate::pdf::SourceDocumentCache;
use crate::perf::ScopedTimer;
use crate::types::PdfPageRef;
use std::path::Path;

/// Merge `pages` into a new PDF at `output`, preserving their order
pub fn export_merge(pages: &[PdfPageRef], output: &Path) -> StudioResult<ExportSummary> {
    if pages.is_empty() {
        return Err(StudioError::EmptyInput);
    }
    let _timer = ScopedTimer::new("export_merge", SLOW_EXPORT_MS);

    let mut cache = SourceDocumentCache::new();
    let mut document = OutputDocument::new();
    for page in pages {
        document.add_pdf_page(&mut cache, page)?;
    }
    write_document(document, cache.opened(), output)
}
