//! Geometry resolver: which slot should receive the dragged item.

use dragcell_core::geometry::Rect;
use dragcell_core::math::Vec2;

use crate::slot::Slot;

/// The rectangles of the currently visible items, keyed by slot.
///
/// Cells are kept in row-major slot order regardless of the order the host
/// reports them in, so nearest-cell ties and border hits resolve the same way
/// no matter how the host pools or enumerates its views.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisibleCells {
    cells: Vec<(Slot, Rect)>,
}

impl VisibleCells {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Slot, Rect)> + '_ {
        self.cells.iter().copied()
    }

    pub fn rect(&self, slot: Slot) -> Option<Rect> {
        self.cells
            .binary_search_by_key(&slot, |(s, _)| *s)
            .ok()
            .map(|i| self.cells[i].1)
    }

    /// First cell (in slot order) whose rectangle contains `point`.
    pub fn cell_at(&self, point: Vec2) -> Option<Slot> {
        self.cells
            .iter()
            .find(|(_, rect)| rect.contains(point))
            .map(|(slot, _)| *slot)
    }

    /// Cell whose center is closest to `point`; the lowest slot wins ties.
    pub fn nearest(&self, point: Vec2) -> Option<Slot> {
        let mut best: Option<(Slot, f32)> = None;
        for (slot, rect) in &self.cells {
            let distance = rect.center().distance_squared(point);
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((*slot, distance));
            }
        }
        best.map(|(slot, _)| slot)
    }
}

impl FromIterator<(Slot, Rect)> for VisibleCells {
    fn from_iter<I: IntoIterator<Item = (Slot, Rect)>>(iter: I) -> Self {
        let mut cells: Vec<_> = iter.into_iter().collect();
        cells.sort_by_key(|(slot, _)| *slot);
        cells.dedup_by_key(|(slot, _)| *slot);
        Self { cells }
    }
}

/// Resolve the slot the dragged item should move to.
///
/// A pointer inside a visible cell picks that cell. Otherwise the cell nearest
/// to the overlay's center is chosen. Landing on `source` (the dragged item's
/// own slot) yields `None`, as does an empty set of cells.
pub fn resolve_target_slot(
    pointer: Vec2,
    overlay_center: Vec2,
    cells: &VisibleCells,
    source: Slot,
) -> Option<Slot> {
    let candidate = cells
        .cell_at(pointer)
        .or_else(|| cells.nearest(overlay_center))?;
    (candidate != source).then_some(candidate)
}

/// Section under `point`, falling back to the section of the nearest cell.
pub fn section_at(point: Vec2, cells: &VisibleCells) -> Option<usize> {
    cells
        .cell_at(point)
        .or_else(|| cells.nearest(point))
        .map(|slot| slot.section)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Three 100x100 cells in a row with 20px gaps.
    fn row() -> VisibleCells {
        (0..3)
            .map(|i| {
                (
                    Slot::flat(i),
                    Rect::new(i as f32 * 120.0, 0.0, 100.0, 100.0),
                )
            })
            .collect()
    }

    #[test]
    fn test_pointer_inside_cell_wins() {
        let target = resolve_target_slot(
            Vec2::new(250.0, 50.0),
            Vec2::new(10.0, 10.0),
            &row(),
            Slot::flat(0),
        );
        assert_eq!(target, Some(Slot::flat(2)));
    }

    #[test]
    fn test_pointer_in_source_is_noop() {
        // The overlay center is near another cell, but the pointer is in the source.
        let target = resolve_target_slot(
            Vec2::new(130.0, 50.0),
            Vec2::new(240.0, 50.0),
            &row(),
            Slot::flat(1),
        );
        assert_eq!(target, None);
    }

    #[test]
    fn test_gap_uses_overlay_center() {
        let target = resolve_target_slot(
            Vec2::new(110.0, 50.0),
            Vec2::new(250.0, 50.0),
            &row(),
            Slot::flat(0),
        );
        assert_eq!(target, Some(Slot::flat(2)));
    }

    #[test]
    fn test_nearest_source_is_noop() {
        let target = resolve_target_slot(
            Vec2::new(110.0, 50.0),
            Vec2::new(55.0, 50.0),
            &row(),
            Slot::flat(0),
        );
        assert_eq!(target, None);
    }

    #[test]
    fn test_empty_cells_resolve_nothing() {
        let target = resolve_target_slot(Vec2::ZERO, Vec2::ZERO, &VisibleCells::new(), Slot::flat(0));
        assert_eq!(target, None);
    }

    #[test]
    fn test_tie_break_is_slot_order() {
        // Host reports cells out of order; (0, 0) and (0, 1) are equidistant.
        let cells: VisibleCells = [
            (Slot::flat(1), Rect::new(120.0, 0.0, 100.0, 100.0)),
            (Slot::flat(0), Rect::new(0.0, 0.0, 100.0, 100.0)),
        ]
        .into_iter()
        .collect();
        assert_eq!(cells.nearest(Vec2::new(110.0, 50.0)), Some(Slot::flat(0)));
    }

    #[test]
    fn test_section_at_falls_back_to_nearest() {
        let cells: VisibleCells = [
            (Slot::new(0, 0), Rect::new(0.0, 0.0, 100.0, 100.0)),
            (Slot::new(1, 0), Rect::new(0.0, 200.0, 100.0, 100.0)),
        ]
        .into_iter()
        .collect();
        assert_eq!(section_at(Vec2::new(50.0, 230.0), &cells), Some(1));
        assert_eq!(section_at(Vec2::new(50.0, 160.0), &cells), Some(1));
        assert_eq!(cells.rect(Slot::new(1, 0)), Some(Rect::new(0.0, 200.0, 100.0, 100.0)));
    }
}
