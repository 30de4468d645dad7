//! Rendering of page entries to rasters.
//!
//! - `canvas` - Fit and letterbox primitives
//! - `source` - Image decoding, orientation and colour normalisation
//! - `thumbnail` - Fixed-size list thumbnails
//! - `preview` - Selected-page preview

pub mod canvas;
pub mod preview;
pub mod source;
pub mod thumbnail;

pub use preview::{render_preview, Preview, PreviewConfig};
pub use thumbnail::{render_thumbnail, thumbnail_from_raster, ThumbnailConfig};
