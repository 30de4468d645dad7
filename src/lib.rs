//! pdf-studio: assemble one PDF from ordered images and pages of existing PDFs.
//!
//! The engine is UI-agnostic. A front end hands it resolved paths and
//! reorder commands through [`app::PageStudio`] and renders the rows,
//! preview and toasts it exposes.

pub mod app;
pub mod constants;
pub mod error;
pub mod export;
pub mod logging;
pub mod notifications;
pub mod pdf;
pub mod perf;
pub mod registry;
pub mod render;
pub mod resolver;
pub mod settings;
pub mod types;

pub use app::{PageRow, PageStudio, StudioMode};
pub use error::{StudioError, StudioResult};
