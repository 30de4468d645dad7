//! Ordered page registry.
//!
//! An arena addressed by dense integer index. Order is output order; an
//! element is identified by its position, never by value. Reordering is a
//! remove-then-insert splice, so the index space stays `0..len` with no gaps
//! after every call.

use crate::error::{StudioError, StudioResult};
use crate::types::PageItem;

/// Direction for a one-step neighbour swap
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Ordered collection of pages defining the output order
#[derive(Clone, Debug)]
pub struct PageRegistry<T = PageItem> {
    items: Vec<T>,
}

impl<T> Default for PageRegistry<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> PageRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Add at the end; returns the new length
    pub fn append(&mut self, item: T) -> usize {
        self.items.push(item);
        self.items.len()
    }

    /// Remove the element at `index`, shifting later elements left
    pub fn remove_at(&mut self, index: usize) -> StudioResult<T> {
        self.check(index)?;
        Ok(self.items.remove(index))
    }

    /// Move the element at `from` so that it occupies slot `to` afterwards.
    ///
    /// `to` is interpreted in the resulting index space (splice, not swap).
    /// Moving an element onto its own slot is a no-op.
    pub fn move_to(&mut self, from: usize, to: usize) -> StudioResult<()> {
        self.check(from)?;
        self.check(to)?;
        if from != to {
            let item = self.items.remove(from);
            self.items.insert(to, item);
        }
        Ok(())
    }

    /// Swap the element at `index` with its neighbour; returns its new index.
    ///
    /// Moving the first element up or the last element down is a no-op.
    pub fn swap_neighbors(&mut self, index: usize, direction: Direction) -> StudioResult<usize> {
        self.check(index)?;
        let target = match direction {
            Direction::Up if index > 0 => index - 1,
            Direction::Down if index + 1 < self.items.len() => index + 1,
            _ => return Ok(index),
        };
        self.items.swap(index, target);
        Ok(target)
    }

    /// Empty the registry, dropping every element (and its thumbnail)
    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn check(&self, index: usize) -> StudioResult<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(StudioError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }
}

impl<T: Clone> PageRegistry<T> {
    /// Copy of the ordered sequence, decoupled from later mutation
    pub fn snapshot(&self) -> Vec<T> {
        self.items.clone()
    }
}

/// Clamp a wanted selection into `0..len`; `None` when there is nothing to select.
pub fn clamp_selection(index: usize, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(index.min(len - 1))
    }
}
