use std::fmt;

use static_assertions::assert_impl_all;

/// Address of an item inside an [`OrderedCollection`](crate::OrderedCollection).
///
/// Slots are positional: after any reorder the same item may live at a
/// different slot, so slots are never cached across ticks. Ordering is
/// row-major (section first, then index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Slot {
    pub section: usize,
    pub index: usize,
}

assert_impl_all!(Slot: Copy, Send, Sync, Ord, std::hash::Hash);

impl Slot {
    pub const fn new(section: usize, index: usize) -> Self {
        Self { section, index }
    }

    /// Slot in the single section of a flat collection.
    pub const fn flat(index: usize) -> Self {
        Self { section: 0, index }
    }

    pub fn same_section(&self, other: Slot) -> bool {
        self.section == other.section
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.section, self.index)
    }
}

impl From<(usize, usize)> for Slot {
    fn from((section, index): (usize, usize)) -> Self {
        Self { section, index }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_order() {
        let mut slots = vec![Slot::new(1, 0), Slot::new(0, 5), Slot::new(0, 1)];
        slots.sort();
        assert_eq!(slots, vec![Slot::new(0, 1), Slot::new(0, 5), Slot::new(1, 0)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Slot::new(2, 7).to_string(), "(2, 7)");
    }
}
