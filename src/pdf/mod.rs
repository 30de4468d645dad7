//! PDF handling: rasterization via pdfium, structural page copy via lopdf.
//!
//! - `pdfium_loader` - Shared PDFium library loading logic
//! - `rasterizer` - `PageRasterizer` trait and its pdfium implementation
//! - `source_cache` - Export-scoped cache of parsed source documents
//! - `copier` - Deep copy of a page and everything it references

mod copier;
mod pdfium_loader;
mod rasterizer;
mod source_cache;

pub use copier::PageCopier;
pub use pdfium_loader::PdfiumLoader;
pub use rasterizer::{load_default_rasterizer, PageRasterizer, PdfiumRasterizer, UnavailableRasterizer};
pub use source_cache::{CachedSource, SourceDocumentCache};
