//! PDFium library loader with platform-specific search paths.
//!
//! This module centralizes the logic for locating and loading the PDFium
//! dynamic library across different deployment scenarios.

use crate::error::{StudioError, StudioResult};
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};

pub struct PdfiumLoader;

impl PdfiumLoader {
    /// Load the PDFium library from known search paths or the system library.
    ///
    /// Search order:
    /// 1. `library_override` (from settings), if given
    /// 2. `lib/` in the current working directory (development)
    /// 3. `lib/` next to the executable
    /// 4. `Resources/lib/` in a macOS bundle
    /// 5. System library fallback
    pub fn load(library_override: Option<&Path>) -> StudioResult<Pdfium> {
        let candidates = library_override
            .map(Path::to_path_buf)
            .into_iter()
            .chain(Self::search_paths());

        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Pdfium::bind_to_library(&path) {
                Ok(bindings) => {
                    tracing::debug!(path = %path.display(), "Loaded pdfium");
                    return Ok(Pdfium::new(bindings));
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), "Failed to bind pdfium: {:?}", e);
                }
            }
        }

        Pdfium::bind_to_system_library()
            .map(Pdfium::new)
            .map_err(|e| StudioError::RasterizerUnavailable(format!("{:?}", e)))
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut dirs = Vec::new();

        // Current working directory (development)
        if let Ok(cwd) = std::env::current_dir() {
            dirs.push(cwd.join("lib"));
        }

        // Executable-relative path
        if let Ok(exe) = std::env::current_exe() {
            if let Some(parent) = exe.parent() {
                dirs.push(parent.join("lib"));

                // macOS bundle path
                if let Some(grandparent) = parent.parent() {
                    dirs.push(grandparent.join("Resources/lib"));
                }
            }
        }

        dirs.into_iter()
            .map(|dir| Pdfium::pdfium_platform_library_name_at_path(&dir))
            .collect()
    }
}
