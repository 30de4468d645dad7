//! Page list handlers - add, reorder, remove, select, and the list view.
//!
//! Every structural handler re-derives the selection with `clamp_selection`
//! from the registry's new length, so the selection is always a valid index
//! or `None` for an empty list.

use super::{PageRow, PageStudio, StudioMode};
use crate::constants::SLOW_ADD_SOURCE_MS;
use crate::error::StudioResult;
use crate::notifications::Toast;
use crate::perf::measure_and_log;
use crate::registry::{Direction, clamp_selection};
use crate::render::{Preview, render_preview, render_thumbnail, thumbnail_from_raster};
use crate::resolver::resolve;
use crate::types::{PageEntry, PageItem};
use std::path::{Path, PathBuf};

impl PageStudio {
    /// Add dropped or picked paths (files or folders).
    ///
    /// Files that cannot be opened and PDF pages that fail to render are
    /// skipped and counted in the returned toast; the rest of the batch is
    /// still added. The last added entry becomes the selection.
    pub fn add_paths(&mut self, paths: &[PathBuf]) -> Toast {
        let files = resolve(paths, self.mode.allowed_extensions());
        if files.is_empty() {
            return self.toasts.push(Toast::warning(self.mode.empty_drop_message()));
        }

        let before = self.registry.len();
        let mut failed_files = 0;
        let mut failed_pages = 0;
        for file in &files {
            let outcome = measure_and_log("add_source", SLOW_ADD_SOURCE_MS, || match self.mode {
                StudioMode::Images => self.add_image(file).then_some(0),
                StudioMode::Merge => self.add_pdf(file),
            });
            match outcome {
                Some(pages) => failed_pages += pages,
                None => failed_files += 1,
            }
        }

        let added = self.registry.len() - before;
        if added == 0 {
            return self.toasts.push(Toast::warning(format!(
                "Could not open any of the {} selected file(s).",
                files.len()
            )));
        }

        self.selection = clamp_selection(self.registry.len() - 1, self.registry.len());
        let mut message = format!("Added {}", self.mode.count_label(added));
        let mut skipped = Vec::new();
        if failed_files > 0 {
            skipped.push(format!("{} unreadable file(s)", failed_files));
        }
        if failed_pages > 0 {
            skipped.push(format!("{} unreadable page(s)", failed_pages));
        }
        if !skipped.is_empty() {
            message.push_str(&format!(", skipped {}", skipped.join(" and ")));
            return self.toasts.push(Toast::warning(message));
        }
        self.toasts.push(Toast::success(message))
    }

    fn add_image(&mut self, path: &Path) -> bool {
        let entry = PageEntry::image(path);
        match render_thumbnail(&entry, &self.thumbnail_config, self.rasterizer.as_ref()) {
            Ok(thumbnail) => {
                self.registry.append(PageItem::new(entry, thumbnail));
                true
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "Skipping image: {}", e);
                false
            }
        }
    }

    /// Add one entry per page; pages that fail to render are skipped individually.
    ///
    /// Returns the number of skipped pages, or `None` when the file itself
    /// could not be opened.
    fn add_pdf(&mut self, path: &Path) -> Option<usize> {
        let rasters = match self
            .rasterizer
            .rasterize_document(path, self.thumbnail_config.pdf_scale)
        {
            Ok(rasters) => rasters,
            Err(e) => {
                tracing::warn!(path = %path.display(), "Skipping PDF: {}", e);
                self.toasts
                    .push(Toast::warning(format!("Could not open:\n{}\n\n{}", path.display(), e)));
                return None;
            }
        };

        let mut skipped = 0;
        for (index, raster) in rasters.into_iter().enumerate() {
            match raster {
                Ok(raster) => {
                    let thumbnail = thumbnail_from_raster(&raster, &self.thumbnail_config);
                    self.registry
                        .append(PageItem::new(PageEntry::pdf_page(path, index), thumbnail));
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), page = index, "Skipping page: {}", e);
                    skipped += 1;
                }
            }
        }
        Some(skipped)
    }

    /// Drag-to-reorder: the entry at `from` now occupies slot `to`
    pub fn reorder(&mut self, from: usize, to: usize) -> StudioResult<usize> {
        self.registry.move_to(from, to)?;
        self.selection = clamp_selection(to, self.registry.len());
        Ok(self.registry.len())
    }

    /// Remove the entry at `index` and select the one before it
    pub fn remove(&mut self, index: usize) -> StudioResult<usize> {
        self.registry.remove_at(index)?;
        self.selection = clamp_selection(index.saturating_sub(1), self.registry.len());
        Ok(self.registry.len())
    }

    pub fn move_up(&mut self, index: usize) -> StudioResult<usize> {
        self.step(index, Direction::Up)
    }

    pub fn move_down(&mut self, index: usize) -> StudioResult<usize> {
        self.step(index, Direction::Down)
    }

    fn step(&mut self, index: usize, direction: Direction) -> StudioResult<usize> {
        let moved_to = self.registry.swap_neighbors(index, direction)?;
        self.selection = clamp_selection(moved_to, self.registry.len());
        Ok(self.registry.len())
    }

    pub fn clear(&mut self) {
        self.registry.clear();
        self.selection = None;
    }

    /// Select `index`, clamped into the list; returns the resulting selection
    pub fn select(&mut self, index: usize) -> Option<usize> {
        self.selection = clamp_selection(index, self.registry.len());
        self.selection
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Entries in output order
    pub fn entries(&self) -> Vec<PageEntry> {
        self.registry.iter().map(|item| item.entry.clone()).collect()
    }

    pub fn rows(&self) -> Vec<PageRow> {
        self.registry
            .iter()
            .enumerate()
            .map(|(i, item)| PageRow {
                label: format!("{:03}. {}", i + 1, item.entry.label()),
                thumbnail: item.thumbnail.clone(),
                selected: self.selection == Some(i),
            })
            .collect()
    }

    pub fn count_label(&self) -> String {
        self.mode.count_label(self.registry.len())
    }

    /// Preview of the selected entry, or a placeholder when nothing is selected
    pub fn preview(&self) -> Preview {
        let Some(item) = self.selection.and_then(|i| self.registry.get(i)) else {
            return Preview::unavailable(self.mode.placeholder());
        };
        render_preview(&item.entry, &self.preview_config, self.rasterizer.as_ref())
    }
}
