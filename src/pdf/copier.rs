//! Structural page copy between lopdf documents.
//!
//! A page is copied as a fresh page dictionary whose referenced objects
//! (content streams, resources, fonts, images) are deep-copied into the
//! target. The source-to-target id map is owned by the caller and reused
//! across copies from the same source, so shared objects are copied once
//! even when many of its pages, or the same page twice, are exported.
//! Annotations are the exception: every page copy gets its own.
//!
//! Page-tree nodes are never followed: a reference to another page or to a
//! `/Pages` node (link destinations, `/Parent`) would otherwise pull the
//! whole source tree into the output. Such references become `null`.

use crate::constants::INHERITABLE_PAGE_KEYS;
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::HashMap;

/// Upper bound on page-tree depth when resolving inherited attributes
const MAX_TREE_DEPTH: usize = 64;

pub struct PageCopier<'a> {
    source: &'a Document,
    target: &'a mut Document,
    id_map: &'a mut HashMap<ObjectId, ObjectId>,
}

impl<'a> PageCopier<'a> {
    pub fn new(
        source: &'a Document,
        target: &'a mut Document,
        id_map: &'a mut HashMap<ObjectId, ObjectId>,
    ) -> Self {
        Self {
            source,
            target,
            id_map,
        }
    }

    /// Copy the page `page_id` into the target under `parent`; returns the new page id.
    pub fn copy_page(&mut self, page_id: ObjectId, parent: ObjectId) -> Result<ObjectId, lopdf::Error> {
        let mut dict = self.source.get_dictionary(page_id)?.clone();
        dict.remove(b"Parent");
        for key in INHERITABLE_PAGE_KEYS {
            if !dict.has(key) {
                if let Some(value) = self.inherited(page_id, key) {
                    dict.set(key.to_vec(), value);
                }
            }
        }

        // Back-references to this page (e.g. annotation /P) resolve to the new copy,
        // and annotations are copied afresh so each one belongs to a single page.
        let new_id = self.target.new_object_id();
        let mut scoped = vec![(page_id, self.id_map.insert(page_id, new_id))];
        for id in annotation_ids(self.source, &dict) {
            scoped.push((id, self.id_map.remove(&id)));
        }
        let remapped = self.remap_dictionary(dict);
        for (id, previous) in scoped.into_iter().rev() {
            match previous {
                Some(target_id) => self.id_map.insert(id, target_id),
                None => self.id_map.remove(&id),
            };
        }

        let mut dict = remapped?;
        dict.set("Parent", Object::Reference(parent));
        self.target.objects.insert(new_id, Object::Dictionary(dict));
        Ok(new_id)
    }

    /// Nearest ancestor value of an inheritable attribute
    fn inherited(&self, page_id: ObjectId, key: &[u8]) -> Option<Object> {
        let mut current = parent_of(self.source, page_id);
        for _ in 0..MAX_TREE_DEPTH {
            let node_id = current?;
            let node = self.source.get_dictionary(node_id).ok()?;
            if let Ok(value) = node.get(key) {
                return Some(value.clone());
            }
            current = parent_of(self.source, node_id);
        }
        None
    }

    /// Deep copy `source_id`; `None` when it is a page-tree node that must not be followed.
    fn copy_object(&mut self, source_id: ObjectId) -> Result<Option<ObjectId>, lopdf::Error> {
        if let Some(target_id) = self.id_map.get(&source_id) {
            return Ok(Some(*target_id));
        }

        let object = match self.source.get_object(source_id) {
            Ok(object) if is_page_tree_node(object) => {
                return Ok(None);
            }
            Ok(object) => object.clone(),
            // Dangling references are legal in PDF and read as null.
            Err(_) => return Ok(None),
        };

        // Reserve the id before recursing so reference cycles terminate.
        let new_id = self.target.add_object(Object::Null);
        self.id_map.insert(source_id, new_id);

        let copied = self.remap(object)?;
        self.target.objects.insert(new_id, copied);
        Ok(Some(new_id))
    }

    fn remap(&mut self, object: Object) -> Result<Object, lopdf::Error> {
        match object {
            Object::Reference(id) => Ok(self
                .copy_object(id)?
                .map(Object::Reference)
                .unwrap_or(Object::Null)),
            Object::Array(items) => {
                let items = items
                    .into_iter()
                    .map(|o| self.remap(o))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Object::Array(items))
            }
            Object::Dictionary(dict) => Ok(Object::Dictionary(self.remap_dictionary(dict)?)),
            Object::Stream(mut stream) => {
                stream.dict = self.remap_dictionary(stream.dict)?;
                Ok(Object::Stream(stream))
            }
            other => Ok(other),
        }
    }

    fn remap_dictionary(&mut self, mut dict: Dictionary) -> Result<Dictionary, lopdf::Error> {
        for (_, value) in dict.iter_mut() {
            *value = self.remap(value.clone())?;
        }
        Ok(dict)
    }
}

/// Ids of the page's `/Annots` array (when indirect) and of every annotation in it
fn annotation_ids(document: &Document, page: &Dictionary) -> Vec<ObjectId> {
    let Ok(annots) = page.get(b"Annots") else {
        return Vec::new();
    };
    let mut ids = Vec::new();
    let items = match annots {
        Object::Reference(id) => {
            ids.push(*id);
            document.get_object(*id).and_then(Object::as_array)
        }
        other => other.as_array(),
    };
    if let Ok(items) = items {
        ids.extend(items.iter().filter_map(|item| item.as_reference().ok()));
    }
    ids
}

fn is_page_tree_node(object: &Object) -> bool {
    let dict = match object {
        Object::Dictionary(dict) => dict,
        _ => return false,
    };
    matches!(
        dict.get(b"Type").and_then(Object::as_name),
        Ok(b"Page") | Ok(b"Pages")
    )
}

fn parent_of(document: &Document, id: ObjectId) -> Option<ObjectId> {
    document
        .get_dictionary(id)
        .ok()?
        .get(b"Parent")
        .and_then(Object::as_reference)
        .ok()
}
