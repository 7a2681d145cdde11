//! The host-owned ordered collection, as seen by the reorder engine.

use crate::error::{ReorderError, ReorderResult};
use crate::slot::Slot;

/// An ordered collection of items, either a single list or a list of sections.
///
/// The shape is fixed for the lifetime of a drag session. A flat collection is
/// addressed as section `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderedCollection<T> {
    Flat(Vec<T>),
    Sectioned(Vec<Vec<T>>),
}

impl<T> OrderedCollection<T> {
    pub fn is_sectioned(&self) -> bool {
        matches!(self, Self::Sectioned(_))
    }

    pub fn section_count(&self) -> usize {
        match self {
            Self::Flat(_) => 1,
            Self::Sectioned(sections) => sections.len(),
        }
    }

    /// Number of items in `section`, or `None` if the section does not exist.
    pub fn section_len(&self, section: usize) -> Option<usize> {
        self.section(section).map(<[T]>::len)
    }

    pub fn section(&self, section: usize) -> Option<&[T]> {
        match self {
            Self::Flat(items) if section == 0 => Some(items),
            Self::Flat(_) => None,
            Self::Sectioned(sections) => sections.get(section).map(Vec::as_slice),
        }
    }

    pub(crate) fn section_mut(&mut self, section: usize) -> Option<&mut Vec<T>> {
        match self {
            Self::Flat(items) if section == 0 => Some(items),
            Self::Flat(_) => None,
            Self::Sectioned(sections) => sections.get_mut(section),
        }
    }

    /// Total number of items across all sections.
    pub fn len(&self) -> usize {
        match self {
            Self::Flat(items) => items.len(),
            Self::Sectioned(sections) => sections.iter().map(Vec::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, slot: Slot) -> Option<&T> {
        self.section(slot.section)?.get(slot.index)
    }

    /// Whether `slot` addresses an existing item.
    pub fn contains(&self, slot: Slot) -> bool {
        self.get(slot).is_some()
    }

    /// Check that `slot` addresses an existing item.
    pub fn check_item(&self, slot: Slot) -> ReorderResult<()> {
        let len = self.check_section(slot.section)?;
        if slot.index < len {
            Ok(())
        } else {
            Err(ReorderError::IndexOutOfBounds { slot, len })
        }
    }

    /// Check that `section` exists and return its length.
    pub fn check_section(&self, section: usize) -> ReorderResult<usize> {
        self.section_len(section)
            .ok_or(ReorderError::SectionOutOfBounds {
                section,
                section_count: self.section_count(),
            })
    }

    /// Iterate every occupied slot in row-major order.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        (0..self.section_count()).flat_map(move |section| {
            let len = self.section_len(section).unwrap_or(0);
            (0..len).map(move |index| Slot::new(section, index))
        })
    }
}

impl<T> From<Vec<T>> for OrderedCollection<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Flat(items)
    }
}

impl<T> From<Vec<Vec<T>>> for OrderedCollection<T> {
    fn from(sections: Vec<Vec<T>>) -> Self {
        Self::Sectioned(sections)
    }
}
