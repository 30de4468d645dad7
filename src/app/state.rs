//! Studio state - the PageStudio struct definition and its view types.

use crate::constants::{IMAGE_EXTENSIONS, PDF_EXTENSIONS};
use crate::notifications::ToastManager;
use crate::pdf::PageRasterizer;
use crate::registry::PageRegistry;
use crate::render::{PreviewConfig, ThumbnailConfig};
use image::RgbImage;

/// Which assembly pipeline a studio drives
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StudioMode {
    /// Image files, one page each, exported as an image sequence
    Images,
    /// Pages of existing PDFs, exported by page copy
    Merge,
}

impl StudioMode {
    pub fn allowed_extensions(&self) -> &'static [&'static str] {
        match self {
            StudioMode::Images => IMAGE_EXTENSIONS,
            StudioMode::Merge => PDF_EXTENSIONS,
        }
    }

    /// Count string for `count` entries, e.g. "3 images"
    pub fn count_label(&self, count: usize) -> String {
        let noun = match self {
            StudioMode::Images => "image",
            StudioMode::Merge => "page",
        };
        if count == 1 {
            format!("1 {}", noun)
        } else {
            format!("{} {}s", count, noun)
        }
    }

    pub(crate) fn placeholder(&self) -> &'static str {
        match self {
            StudioMode::Images => "Select an image",
            StudioMode::Merge => "Select a page",
        }
    }

    pub(crate) fn empty_drop_message(&self) -> &'static str {
        match self {
            StudioMode::Images => "No valid files. Drop images (png, jpg, webp, etc.).",
            StudioMode::Merge => "No valid files. Drop PDF files.",
        }
    }

    pub(crate) fn empty_export_message(&self) -> &'static str {
        match self {
            StudioMode::Images => "Add images first.",
            StudioMode::Merge => "Add PDF(s) first.",
        }
    }

    pub(crate) fn export_failure_message(&self) -> &'static str {
        match self {
            StudioMode::Images => "Could not build PDF.",
            StudioMode::Merge => "Could not merge PDF.",
        }
    }
}

/// One row of the page list as shown to the user
#[derive(Clone, Debug)]
pub struct PageRow {
    /// One-based, zero-padded position plus the entry label
    pub label: String,
    pub thumbnail: RgbImage,
    pub selected: bool,
}

/// One assembly panel: an ordered page list, its selection and the
/// collaborators needed to render and export it.
pub struct PageStudio {
    pub(crate) mode: StudioMode,
    pub(crate) registry: PageRegistry,
    pub(crate) selection: Option<usize>,
    pub(crate) rasterizer: Box<dyn PageRasterizer>,
    pub(crate) thumbnail_config: ThumbnailConfig,
    pub(crate) preview_config: PreviewConfig,
    pub(crate) toasts: ToastManager,
}
