//! Export-scoped cache of parsed source PDFs.
//!
//! Each distinct source path is parsed at most once per export, however
//! many pages reference it. The cache lives for one export call and is
//! dropped with it, so repeated exports never observe stale documents.

use crate::error::{StudioError, StudioResult};
use crate::pdf::PageCopier;
use lopdf::{Document, ObjectId};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};

/// A parsed source PDF plus the bookkeeping needed to copy its pages
pub struct CachedSource {
    path: PathBuf,
    document: Document,
    /// Page object ids in page order
    pages: Vec<ObjectId>,
    /// Source object id -> id already copied into the output document
    copied: HashMap<ObjectId, ObjectId>,
}

impl CachedSource {
    /// Parse the PDF at `path`
    pub fn open(path: &Path) -> StudioResult<Self> {
        let document = Document::load(path).map_err(|e| StudioError::unreadable(path, e))?;
        let pages = document.get_pages().into_values().collect();
        Ok(Self {
            path: path.to_path_buf(),
            document,
            pages,
            copied: HashMap::new(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Object id of the page at zero-based `index`
    pub fn page_id(&self, index: usize) -> StudioResult<ObjectId> {
        self.pages
            .get(index)
            .copied()
            .ok_or_else(|| StudioError::PageIndexOutOfRange {
                path: self.path.clone(),
                index,
                page_count: self.pages.len(),
            })
    }

    /// Copy page `index` into `target` under the page-tree node `parent`
    pub fn copy_page_into(
        &mut self,
        index: usize,
        target: &mut Document,
        parent: ObjectId,
    ) -> StudioResult<ObjectId> {
        let page_id = self.page_id(index)?;
        let mut copier = PageCopier::new(&self.document, target, &mut self.copied);
        Ok(copier.copy_page(page_id, parent)?)
    }
}

/// Mapping from source path to its parsed document, scoped to one export
#[derive(Default)]
pub struct SourceDocumentCache {
    sources: HashMap<PathBuf, CachedSource>,
}

impl SourceDocumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached document for `path`, parsing it on first use
    pub fn get_or_open(&mut self, path: &Path) -> StudioResult<&mut CachedSource> {
        match self.sources.entry(path.to_path_buf()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                tracing::debug!(path = %path.display(), "Parsing source PDF");
                Ok(entry.insert(CachedSource::open(path)?))
            }
        }
    }

    /// Number of distinct sources parsed so far
    pub fn opened(&self) -> usize {
        self.sources.len()
    }
}
