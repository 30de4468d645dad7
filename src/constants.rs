//! Application-wide constants.
//!
//! Centralizes magic numbers for rendering and export so the settings
//! defaults, renderers and tests agree on one set of values.

// ============================================================================
// Accepted Sources
// ============================================================================

/// Raster image extensions accepted by the image pipeline (lowercase, no dot)
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tif", "tiff", "webp"];

/// Extensions accepted by the page-merge pipeline
pub const PDF_EXTENSIONS: &[&str] = &["pdf"];

// ============================================================================
// Thumbnails
// ============================================================================

/// Edge length of the square thumbnail canvas in pixels
pub const THUMBNAIL_SIZE: u32 = 76;

/// Total padding between the thumbnail content and the canvas edge
pub const THUMBNAIL_PADDING: u32 = 8;

/// Thumbnail canvas fill colour
pub const THUMBNAIL_BACKGROUND: &str = "#1d2433";

/// Rasterization factor for PDF page thumbnails (fast, low quality)
pub const THUMBNAIL_PDF_SCALE: f32 = 0.30;

// ============================================================================
// Preview Panel
// ============================================================================

/// Maximum preview width in pixels
pub const PREVIEW_MAX_WIDTH: u32 = 760;

/// Maximum preview height in pixels
pub const PREVIEW_MAX_HEIGHT: u32 = 560;

/// Rasterization factor for the selected PDF page preview
pub const PREVIEW_PDF_SCALE: f32 = 1.4;

// ============================================================================
// Export
// ============================================================================

/// PDF version written for assembled documents
pub const OUTPUT_PDF_VERSION: &str = "1.5";

/// Resource name of the single image drawn on an image page
pub const IMAGE_XOBJECT_NAME: &str = "Im0";

/// Page attributes a page may inherit from its ancestors in the page tree
pub const INHERITABLE_PAGE_KEYS: &[&[u8]] = &[b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

// ============================================================================
// Notifications
// ============================================================================

/// Toasts kept by a studio; older ones are dropped first
pub const MAX_TOASTS: usize = 8;

// ============================================================================
// Performance Thresholds (milliseconds)
// ============================================================================

/// A single thumbnail or preview render slower than this is logged
pub const SLOW_RENDER_MS: f64 = 250.0;

/// Adding one dropped file (decode plus thumbnails of every page) slower than this is logged
pub const SLOW_ADD_SOURCE_MS: f64 = 1_000.0;

/// An export slower than this is logged
pub const SLOW_EXPORT_MS: f64 = 2_000.0;
