//! Core types for the page-assembly engine.
//!
//! This module defines the page entries that make up an output document,
//! the registry element that pairs an entry with its thumbnail, and helpers
//! for source-kind detection.

use crate::constants::{IMAGE_EXTENSIONS, PDF_EXTENSIONS};
use image::RgbImage;
use std::path::{Path, PathBuf};

// ============================================================================
// Source Kinds
// ============================================================================

/// The two kinds of file a page can come from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Image,
    Pdf,
}

impl SourceKind {
    /// Lowercase extensions (without the dot) accepted for this kind
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            SourceKind::Image => IMAGE_EXTENSIONS,
            SourceKind::Pdf => PDF_EXTENSIONS,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|s| s.to_str())?.to_lowercase();
        match ext.as_str() {
            "png" | "jpg" | "jpeg" | "bmp" | "tif" | "tiff" | "webp" => Some(SourceKind::Image),
            "pdf" => Some(SourceKind::Pdf),
            _ => None,
        }
    }
}

// ============================================================================
// Page Entries
// ============================================================================

/// A whole image file; always contributes exactly one output page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSource {
    pub path: PathBuf,
}

impl ImageSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// One page, by zero-based index, of an existing PDF file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PdfPageRef {
    pub path: PathBuf,
    pub page_index: usize,
}

impl PdfPageRef {
    pub fn new(path: impl Into<PathBuf>, page_index: usize) -> Self {
        Self {
            path: path.into(),
            page_index,
        }
    }
}

/// One unit of output-page content.
///
/// Entries may repeat: the same PDF page can be referenced twice and the
/// registry tells them apart by position only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageEntry {
    Image(ImageSource),
    PdfPage(PdfPageRef),
}

impl PageEntry {
    pub fn image(path: impl Into<PathBuf>) -> Self {
        PageEntry::Image(ImageSource::new(path))
    }

    pub fn pdf_page(path: impl Into<PathBuf>, page_index: usize) -> Self {
        PageEntry::PdfPage(PdfPageRef::new(path, page_index))
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            PageEntry::Image(_) => SourceKind::Image,
            PageEntry::PdfPage(_) => SourceKind::Pdf,
        }
    }

    pub fn source_path(&self) -> &Path {
        match self {
            PageEntry::Image(image) => &image.path,
            PageEntry::PdfPage(page) => &page.path,
        }
    }

    /// Zero-based page index for PDF pages, `None` for images
    pub fn page_index(&self) -> Option<usize> {
        match self {
            PageEntry::Image(_) => None,
            PageEntry::PdfPage(page) => Some(page.page_index),
        }
    }

    pub fn as_image(&self) -> Option<&ImageSource> {
        match self {
            PageEntry::Image(image) => Some(image),
            PageEntry::PdfPage(_) => None,
        }
    }

    pub fn as_pdf_page(&self) -> Option<&PdfPageRef> {
        match self {
            PageEntry::PdfPage(page) => Some(page),
            PageEntry::Image(_) => None,
        }
    }

    /// Display label: the file name, plus the one-based page number for PDF pages
    pub fn label(&self) -> String {
        let name = file_name(self.source_path());
        match self {
            PageEntry::Image(_) => name,
            PageEntry::PdfPage(page) => format!("{} | p. {}", name, page.page_index + 1),
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

// ============================================================================
// Registry Items
// ============================================================================

/// A page entry together with the thumbnail rendered when it was inserted.
///
/// The thumbnail is owned by the item and released with it.
#[derive(Clone, Debug)]
pub struct PageItem {
    pub entry: PageEntry,
    pub thumbnail: RgbImage,
}

impl PageItem {
    pub fn new(entry: PageEntry, thumbnail: RgbImage) -> Self {
        Self { entry, thumbnail }
    }
}
