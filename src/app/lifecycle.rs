//! Studio lifecycle - construction from settings.

use super::{PageStudio, StudioMode};
use crate::notifications::ToastManager;
use crate::pdf::{PageRasterizer, load_default_rasterizer};
use crate::registry::PageRegistry;
use crate::settings::Settings;

impl PageStudio {
    /// Create a studio, binding PDFium as configured in `settings`
    ///
    /// If PDFium cannot be loaded the studio still works for images; PDF
    /// entries then fail to thumbnail and preview with an explicit message.
    pub fn new(mode: StudioMode, settings: &Settings) -> Self {
        let rasterizer = load_default_rasterizer(settings.pdfium_library_path.as_deref());
        Self::with_rasterizer(mode, settings, rasterizer)
    }

    pub fn with_rasterizer(
        mode: StudioMode,
        settings: &Settings,
        rasterizer: Box<dyn PageRasterizer>,
    ) -> Self {
        tracing::debug!(?mode, "Creating page studio");
        Self {
            mode,
            registry: PageRegistry::new(),
            selection: None,
            rasterizer,
            thumbnail_config: settings.thumbnail_config(),
            preview_config: settings.preview_config(),
            toasts: ToastManager::new(),
        }
    }

    pub fn mode(&self) -> StudioMode {
        self.mode
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut ToastManager {
        &mut self.toasts
    }
}
