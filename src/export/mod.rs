//! Export assembly.
//!
//! - `images` - Image sequence to PDF
//! - `merge` - Page-copy merge of existing PDFs
//! - `document` - Output document builder shared by both
//! - `atomic` - Temp-file-and-rename destination writes
//!
//! Every export builds the whole document in memory first. The destination
//! is only written once all sources have been read and all pages placed.

pub mod atomic;
pub mod document;
mod images;
mod merge;

pub use document::OutputDocument;
pub use images::export_images;
pub use merge::export_merge;

use crate::constants::SLOW_EXPORT_MS;
use crate::error::{StudioError, StudioResult};
use crate::pdf::SourceDocumentCache;
use crate::perf::ScopedTimer;
use crate::types::PageEntry;
use std::io;
use std::path::Path;

/// What an export wrote
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExportSummary {
    /// Pages in the output document
    pub pages: usize,
    /// Distinct source PDFs parsed
    pub sources_opened: usize,
}

/// Export a mixed sequence of image and PDF page entries in order
pub fn export_entries(entries: &[PageEntry], output: &Path) -> StudioResult<ExportSummary> {
    if entries.is_empty() {
        return Err(StudioError::EmptyInput);
    }
    let _timer = ScopedTimer::new("export_entries", SLOW_EXPORT_MS);

    let mut cache = SourceDocumentCache::new();
    let mut document = OutputDocument::new();
    for entry in entries {
        match entry {
            PageEntry::Image(image) => images::append_image(&mut document, image)?,
            PageEntry::PdfPage(page) => {
                document.add_pdf_page(&mut cache, page)?;
            }
        }
    }
    write_document(document, cache.opened(), output)
}

pub(crate) fn write_document(
    document: OutputDocument,
    sources_opened: usize,
    output: &Path,
) -> StudioResult<ExportSummary> {
    let summary = ExportSummary {
        pages: document.page_count(),
        sources_opened,
    };
    let mut document = document.finish();
    atomic::write_atomically(output, |writer| {
        document.save_to(writer).map_err(io::Error::other)
    })?;

    tracing::info!(
        path = %output.display(),
        pages = summary.pages,
        sources = summary.sources_opened,
        "Exported PDF"
    );
    Ok(summary)
}
