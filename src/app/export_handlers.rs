//! Export handler - runs the mode's assembler on a snapshot of the page list.

use super::{PageStudio, StudioMode};
use crate::error::StudioResult;
use crate::export::{ExportSummary, export_images, export_merge};
use crate::notifications::Toast;
use crate::types::PageEntry;
use std::path::Path;

impl PageStudio {
    /// Export the current page list to `destination`.
    ///
    /// The entries are copied before any I/O so the list may be edited again
    /// as soon as this returns, whatever the outcome.
    pub fn export(&mut self, destination: &Path) -> Toast {
        if self.registry.is_empty() {
            return self.toasts.push(Toast::warning(self.mode.empty_export_message()));
        }

        let entries = self.entries();
        match run_export(self.mode, &entries, destination) {
            Ok(summary) => self.toasts.push(Toast::success(format!(
                "PDF created ({}):\n{}",
                self.mode.count_label(summary.pages),
                destination.display()
            ))),
            Err(e) => self.toasts.push(Toast::error(format!(
                "{}\n\n{}",
                self.mode.export_failure_message(),
                e
            ))),
        }
    }
}

fn run_export(
    mode: StudioMode,
    entries: &[PageEntry],
    destination: &Path,
) -> StudioResult<ExportSummary> {
    match mode {
        StudioMode::Images => {
            let images: Vec<_> = entries
                .iter()
                .filter_map(|e| e.as_image().cloned())
                .collect();
            export_images(&images, destination)
        }
        StudioMode::Merge => {
            let pages: Vec<_> = entries
                .iter()
                .filter_map(|e| e.as_pdf_page().cloned())
                .collect();
            export_merge(&pages, destination)
        }
    }
}
