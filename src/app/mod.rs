//! Studio module - one page-assembly panel driven by already-resolved UI actions.
//!
//! This module is organized into several submodules:
//! - `state` - The PageStudio struct, its mode and row types
//! - `lifecycle` - Construction from settings
//! - `page_list` - Adding, reordering, removing and selecting pages
//! - `export_handlers` - Export of the current page list

mod export_handlers;
mod lifecycle;
mod page_list;
mod state;

pub use state::{PageRow, PageStudio, StudioMode};
