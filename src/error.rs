//! Error types for page assembly
//!
//! Provides unified error handling for resolving, rendering and exporting pages.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while building or exporting a page sequence
#[derive(Error, Debug)]
pub enum StudioError {
    /// A source image or PDF could not be opened, decoded or parsed
    #[error("Cannot read {}: {reason}", path.display())]
    UnreadableSource { path: PathBuf, reason: String },

    /// A registry position outside `0..len`
    #[error("Index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Export attempted with nothing to export
    #[error("No pages to export")]
    EmptyInput,

    /// A referenced page no longer exists in its source document
    #[error("Page {} does not exist in {} ({page_count} pages)", index + 1, path.display())]
    PageIndexOutOfRange {
        path: PathBuf,
        index: usize,
        page_count: usize,
    },

    /// The export destination could not be created or written
    #[error("Cannot write {}: {source}", path.display())]
    DestinationWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The PDFium library could not be loaded, so PDF pages cannot be rasterized
    #[error("PDF rendering unavailable: {0}")]
    RasterizerUnavailable(String),

    /// Pixel data could not be compressed for embedding
    #[error("Image compression failed: {0}")]
    Compression(#[source] std::io::Error),

    /// Structural failure while assembling the output document
    #[error("PDF structure error: {0}")]
    Pdf(#[from] lopdf::Error),
}

/// Result type alias for page assembly operations
pub type StudioResult<T> = Result<T, StudioError>;

impl StudioError {
    pub fn unreadable(path: &Path, reason: impl ToString) -> Self {
        StudioError::UnreadableSource {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub fn destination(path: &Path, source: std::io::Error) -> Self {
        StudioError::DestinationWriteFailure {
            path: path.to_path_buf(),
            source,
        }
    }

    /// True when the failure came from reading a source rather than writing output
    pub fn is_source_failure(&self) -> bool {
        matches!(
            self,
            StudioError::UnreadableSource { .. }
                | StudioError::PageIndexOutOfRange { .. }
                | StudioError::RasterizerUnavailable(_)
        )
    }

    pub fn is_destination_failure(&self) -> bool {
        matches!(self, StudioError::DestinationWriteFailure { .. })
    }
}
