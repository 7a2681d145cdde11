//! Reorder engine: turns a (source, target) slot pair into a new collection
//! plus exactly one layout move.

use dragcell_core::profiling::profile_function;

use crate::collection::OrderedCollection;
use crate::error::{ReorderError, ReorderResult};
use crate::slot::Slot;

/// Instruction for the host's layout engine to animate one item between slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMove {
    pub from: Slot,
    pub to: Slot,
}

/// Output of [`apply_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reorder<T> {
    /// The collection after the move (unchanged for a no-op).
    pub collection: OrderedCollection<T>,
    /// The single layout move realizing the change, `None` for a no-op.
    pub layout_move: Option<LayoutMove>,
}

impl<T> Reorder<T> {
    /// Slot the moved item now occupies, if anything moved.
    pub fn landing_slot(&self) -> Option<Slot> {
        self.layout_move.map(|m| m.to)
    }
}

/// Move the item at `source` to `target`.
///
/// Within a section the item travels by adjacent swaps, shifting every item in
/// between by one toward the vacated end. Across sections the item is removed
/// from its section and inserted at `target.index` in the destination, clamped
/// to the destination length so an empty or shorter section can be targeted.
///
/// The collection is taken by value: the caller pulls a fresh copy from the
/// host and pushes the returned one back whole.
///
/// # Example
///
/// ```
/// use dragcell::{OrderedCollection, Slot, apply_move};
///
/// let items = OrderedCollection::Flat(vec!['A', 'B', 'C', 'D', 'E']);
/// let reorder = apply_move(items, Slot::flat(1), Slot::flat(3)).unwrap();
/// assert_eq!(reorder.collection, OrderedCollection::Flat(vec!['A', 'C', 'D', 'B', 'E']));
/// ```
pub fn apply_move<T>(
    mut collection: OrderedCollection<T>,
    source: Slot,
    target: Slot,
) -> ReorderResult<Reorder<T>> {
    profile_function!();

    collection.check_item(source)?;
    if source == target {
        return Ok(Reorder {
            collection,
            layout_move: None,
        });
    }

    let to = if source.same_section(target) {
        collection.check_item(target)?;
        let section = section_mut(&mut collection, source.section)?;
        swap_chain(section, source.index, target.index);
        target
    } else {
        let dest_len = collection.check_section(target.section)?;
        let insert_at = target.index.min(dest_len);

        let item = section_mut(&mut collection, source.section)?.remove(source.index);
        section_mut(&mut collection, target.section)?.insert(insert_at, item);
        Slot::new(target.section, insert_at)
    };

    Ok(Reorder {
        collection,
        layout_move: Some(LayoutMove { from: source, to }),
    })
}

fn section_mut<T>(collection: &mut OrderedCollection<T>, section: usize) -> ReorderResult<&mut Vec<T>> {
    let section_count = collection.section_count();
    collection
        .section_mut(section)
        .ok_or(ReorderError::SectionOutOfBounds {
            section,
            section_count,
        })
}

fn swap_chain<T>(items: &mut [T], from: usize, to: usize) {
    if from < to {
        for i in from..to {
            items.swap(i, i + 1);
        }
    } else {
        for i in (to..from).rev() {
            items.swap(i, i + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(items: &str) -> OrderedCollection<char> {
        OrderedCollection::Flat(items.chars().collect())
    }

    fn sections(sections: &[&str]) -> OrderedCollection<char> {
        OrderedCollection::Sectioned(sections.iter().map(|s| s.chars().collect()).collect())
    }

    #[test]
    fn test_forward_move_shifts_items_back() {
        let reorder = apply_move(flat("ABCDE"), Slot::flat(1), Slot::flat(3)).unwrap();
        assert_eq!(reorder.collection, flat("ACDBE"));
        assert_eq!(
            reorder.layout_move,
            Some(LayoutMove {
                from: Slot::flat(1),
                to: Slot::flat(3)
            })
        );
    }

    #[test]
    fn test_backward_move_shifts_items_forward() {
        let reorder = apply_move(flat("ABCDE"), Slot::flat(3), Slot::flat(1)).unwrap();
        assert_eq!(reorder.collection, flat("ADBCE"));
    }

    #[test]
    fn test_move_to_ends() {
        let reorder = apply_move(flat("ABCDE"), Slot::flat(0), Slot::flat(4)).unwrap();
        assert_eq!(reorder.collection, flat("BCDEA"));
        let reorder = apply_move(flat("ABCDE"), Slot::flat(4), Slot::flat(0)).unwrap();
        assert_eq!(reorder.collection, flat("EABCD"));
    }

    #[test]
    fn test_cross_section_move() {
        let reorder = apply_move(sections(&["AB", "CD"]), Slot::new(0, 0), Slot::new(1, 1)).unwrap();
        assert_eq!(reorder.collection, sections(&["B", "CAD"]));
        assert_eq!(reorder.landing_slot(), Some(Slot::new(1, 1)));
    }

    #[test]
    fn test_cross_section_into_empty_section_clamps() {
        let reorder = apply_move(sections(&["AB", ""]), Slot::new(0, 1), Slot::new(1, 3)).unwrap();
        assert_eq!(reorder.collection, sections(&["A", "B"]));
        assert_eq!(reorder.landing_slot(), Some(Slot::new(1, 0)));
    }

    #[test]
    fn test_same_slot_is_noop() {
        let reorder = apply_move(flat("ABC"), Slot::flat(1), Slot::flat(1)).unwrap();
        assert_eq!(reorder.collection, flat("ABC"));
        assert!(reorder.layout_move.is_none());
    }

    #[test]
    fn test_out_of_bounds_is_error() {
        assert_eq!(
            apply_move(flat("ABC"), Slot::flat(3), Slot::flat(0)),
            Err(ReorderError::IndexOutOfBounds {
                slot: Slot::flat(3),
                len: 3
            })
        );
        assert_eq!(
            apply_move(flat("ABC"), Slot::flat(0), Slot::flat(5)),
            Err(ReorderError::IndexOutOfBounds {
                slot: Slot::flat(5),
                len: 3
            })
        );
        assert_eq!(
            apply_move(flat("ABC"), Slot::flat(0), Slot::new(1, 0)),
            Err(ReorderError::SectionOutOfBounds {
                section: 1,
                section_count: 1
            })
        );
    }

    #[test]
    fn test_landing_slot_stays_in_bounds() {
        let mut collection = sections(&["ABC", "DE", ""]);
        let mut source = Slot::new(0, 0);
        for target in [
            Slot::new(0, 2),
            Slot::new(1, 5),
            Slot::new(2, 0),
            Slot::new(1, 0),
            Slot::new(0, 0),
        ] {
            let reorder = apply_move(collection, source, target).unwrap();
            source = reorder.landing_slot().unwrap_or(source);
            collection = reorder.collection;
            assert!(collection.contains(source), "{source} escaped the collection");
            assert_eq!(collection.get(source), Some(&'A'));
        }
        assert_eq!(collection.len(), 5);
    }
}
