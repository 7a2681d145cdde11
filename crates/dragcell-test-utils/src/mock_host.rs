//! Mock host for driving a [`DragController`](dragcell::DragController) in tests.
//!
//! [`MockHost`] keeps its collection in memory, lays it out with a fixed
//! [`GridLayout`] and records every host call so tests can assert on them.

use dragcell::{
    DragDataSource, DragDelegate, DragLayout, OrderedCollection, Rect, Slot, Vec2, Viewport,
    VisibleCells,
};
use dragcell_core::alloc::HashSet;
use parking_lot::Mutex;

/// Records a host call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    CollectionPulled,
    CollectionPushed,
    Snapshot { slot: Slot },
    LayoutMove { from: Slot, to: Slot },
    Rerender { slots: Vec<Slot> },
    ScrollTo { offset: Vec2 },
    InteractionEnabled(bool),
    ShouldBeginMove { slot: Slot },
    ShouldBeginExchange { source: Slot, target: Slot },
    ShouldAutoHandle { point: Vec2, section: Option<usize>, slot: Slot },
    DragBegan { point: Vec2, slot: Slot },
    DragChanged { point: Vec2, slot: Slot },
    DragEnded { point: Vec2, slot: Slot },
    DragSettled,
}

/// Snapshot handed out by [`MockHost::snapshot_visual`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockVisual {
    pub id: u64,
    pub slot: Slot,
}

/// Fixed-size grid layout. Sections are stacked vertically.
///
/// A list is a grid with one column. With `item_size` 100x40 and `spacing` 10
/// item `i` of a single-section list sits at `y = i * 50`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub columns: usize,
    pub item_size: Vec2,
    pub spacing: f32,
    /// Extra vertical space between sections.
    pub section_gap: f32,
}

impl GridLayout {
    pub fn list(item_size: Vec2, spacing: f32) -> Self {
        Self::grid(1, item_size, spacing)
    }

    pub fn grid(columns: usize, item_size: Vec2, spacing: f32) -> Self {
        Self {
            columns: columns.max(1),
            item_size,
            spacing,
            section_gap: 0.0,
        }
    }

    pub fn section_gap(mut self, gap: f32) -> Self {
        self.section_gap = gap;
        self
    }

    fn pitch(&self) -> Vec2 {
        self.item_size + Vec2::splat(self.spacing)
    }

    fn section_height(&self, len: usize) -> f32 {
        let rows = len.div_ceil(self.columns);
        if rows == 0 {
            0.0
        } else {
            rows as f32 * self.pitch().y - self.spacing
        }
    }

    fn section_top(&self, lens: &[usize], section: usize) -> f32 {
        lens.iter()
            .take(section)
            .map(|&len| self.section_height(len) + self.spacing + self.section_gap)
            .sum()
    }

    /// Rectangle of `slot` for sections of the given lengths.
    pub fn rect_for(&self, lens: &[usize], slot: Slot) -> Option<Rect> {
        let len = *lens.get(slot.section)?;
        if slot.index >= len {
            return None;
        }
        let row = slot.index / self.columns;
        let column = slot.index % self.columns;
        let pitch = self.pitch();
        Some(Rect::new(
            column as f32 * pitch.x,
            self.section_top(lens, slot.section) + row as f32 * pitch.y,
            self.item_size.x,
            self.item_size.y,
        ))
    }

    /// Total content extent for sections of the given lengths.
    pub fn content_size(&self, lens: &[usize]) -> Vec2 {
        let columns = lens
            .iter()
            .map(|&len| len.min(self.columns))
            .max()
            .unwrap_or(0);
        let width = if columns == 0 {
            0.0
        } else {
            columns as f32 * self.pitch().x - self.spacing
        };
        let height = match lens.len() {
            0 => 0.0,
            n => self.section_top(lens, n - 1) + self.section_height(lens[n - 1]),
        };
        Vec2::new(width, height)
    }
}

/// Mock implementation of the drag host traits.
///
/// Every trait method records a [`HostCall`]. Delegate answers are
/// configurable with the builder-style knobs.
///
/// # Example
///
/// ```rust
/// use dragcell::{DragLayout, Slot, Vec2};
/// use dragcell_test_utils::{GridLayout, HostCall, MockHost};
///
/// let mut host = MockHost::flat(vec!['a', 'b', 'c'], GridLayout::list(Vec2::new(100.0, 40.0), 10.0));
/// host.perform_layout_move(Slot::flat(0), Slot::flat(2));
///
/// assert_eq!(host.layout_moves(), vec![(Slot::flat(0), Slot::flat(2))]);
/// assert_eq!(host.calls().len(), 1);
/// ```
pub struct MockHost<T> {
    collection: OrderedCollection<T>,
    layout: GridLayout,
    viewport_size: Vec2,
    scroll_offset: Vec2,
    interaction_enabled: bool,

    snapshots_fail: bool,
    locked: HashSet<Slot>,
    exchanges_allowed: bool,
    auto_handle_end: bool,
    next_visual_id: u64,

    /// Recorded calls for verification
    calls: Mutex<Vec<HostCall>>,
}

impl<T: Clone> MockHost<T> {
    pub fn new(collection: OrderedCollection<T>, layout: GridLayout) -> Self {
        Self {
            collection,
            layout,
            viewport_size: Vec2::new(1000.0, 1000.0),
            scroll_offset: Vec2::ZERO,
            interaction_enabled: true,
            snapshots_fail: false,
            locked: HashSet::new(),
            exchanges_allowed: true,
            auto_handle_end: true,
            next_visual_id: 0,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn flat(items: Vec<T>, layout: GridLayout) -> Self {
        Self::new(OrderedCollection::Flat(items), layout)
    }

    pub fn sectioned(sections: Vec<Vec<T>>, layout: GridLayout) -> Self {
        Self::new(OrderedCollection::Sectioned(sections), layout)
    }

    /// Size of the visible area (default 1000x1000).
    pub fn with_viewport(mut self, size: Vec2) -> Self {
        self.viewport_size = size;
        self
    }

    /// Make every snapshot request fail.
    pub fn fail_snapshots(mut self, fail: bool) -> Self {
        self.snapshots_fail = fail;
        self
    }

    /// Refuse to start a drag on `slot`.
    pub fn lock_slot(mut self, slot: Slot) -> Self {
        self.locked.insert(slot);
        self
    }

    /// Answer for `should_begin_exchange` (default true).
    pub fn allow_exchanges(mut self, allowed: bool) -> Self {
        self.exchanges_allowed = allowed;
        self
    }

    /// Answer for `should_auto_handle_end_of_drag` (default true).
    pub fn auto_handle_end(mut self, auto: bool) -> Self {
        self.auto_handle_end = auto;
        self
    }

    pub fn items(&self) -> &OrderedCollection<T> {
        &self.collection
    }

    pub fn scroll_offset(&self) -> Vec2 {
        self.scroll_offset
    }

    pub fn is_interaction_enabled(&self) -> bool {
        self.interaction_enabled
    }

    fn section_lens(&self) -> Vec<usize> {
        (0..self.collection.section_count())
            .map(|section| self.collection.section_len(section).unwrap_or(0))
            .collect()
    }

    fn record(&self, call: HostCall) {
        self.calls.lock().push(call);
    }

    /// Get a copy of all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    /// Count recorded calls matching `predicate`.
    pub fn count_calls(&self, predicate: impl Fn(&HostCall) -> bool) -> usize {
        self.calls.lock().iter().filter(|call| predicate(call)).count()
    }

    /// Layout moves in the order they were performed.
    pub fn layout_moves(&self) -> Vec<(Slot, Slot)> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                HostCall::LayoutMove { from, to } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    /// Slots of every re-render request, flattened in order.
    pub fn rerendered_slots(&self) -> Vec<Slot> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                HostCall::Rerender { slots } => Some(slots.clone()),
                _ => None,
            })
            .flatten()
            .collect()
    }

    /// Delegate notifications only (began, changed, ended, settled).
    pub fn notifications(&self) -> Vec<HostCall> {
        self.calls
            .lock()
            .iter()
            .filter(|call| {
                matches!(
                    call,
                    HostCall::DragBegan { .. }
                        | HostCall::DragChanged { .. }
                        | HostCall::DragEnded { .. }
                        | HostCall::DragSettled
                )
            })
            .cloned()
            .collect()
    }
}

impl<T: Clone> DragDataSource for MockHost<T> {
    type Item = T;

    fn collection(&self) -> OrderedCollection<T> {
        self.record(HostCall::CollectionPulled);
        self.collection.clone()
    }

    fn set_collection(&mut self, collection: OrderedCollection<T>) {
        self.record(HostCall::CollectionPushed);
        self.collection = collection;
    }
}

impl<T: Clone> DragLayout for MockHost<T> {
    type Visual = MockVisual;

    fn rect_for_slot(&self, slot: Slot) -> Option<Rect> {
        self.layout.rect_for(&self.section_lens(), slot)
    }

    fn visible_cells(&self) -> VisibleCells {
        let visible = self.viewport().visible_rect();
        let lens = self.section_lens();
        self.collection
            .slots()
            .filter_map(|slot| self.layout.rect_for(&lens, slot).map(|rect| (slot, rect)))
            .filter(|(_, rect)| rect.intersects(&visible))
            .collect()
    }

    fn snapshot_visual(&mut self, slot: Slot) -> Option<MockVisual> {
        self.record(HostCall::Snapshot { slot });
        if self.snapshots_fail {
            return None;
        }
        self.next_visual_id += 1;
        Some(MockVisual {
            id: self.next_visual_id,
            slot,
        })
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(
            self.scroll_offset,
            self.viewport_size,
            self.layout.content_size(&self.section_lens()),
        )
    }

    fn set_scroll_offset(&mut self, offset: Vec2) {
        self.record(HostCall::ScrollTo { offset });
        self.scroll_offset = offset;
    }

    fn perform_layout_move(&mut self, from: Slot, to: Slot) {
        self.record(HostCall::LayoutMove { from, to });
    }

    fn request_rerender(&mut self, slots: &[Slot]) {
        self.record(HostCall::Rerender {
            slots: slots.to_vec(),
        });
    }

    fn set_interaction_enabled(&mut self, enabled: bool) {
        self.record(HostCall::InteractionEnabled(enabled));
        self.interaction_enabled = enabled;
    }
}

impl<T: Clone> DragDelegate for MockHost<T> {
    fn should_begin_move(&mut self, slot: Slot) -> bool {
        self.record(HostCall::ShouldBeginMove { slot });
        !self.locked.contains(&slot)
    }

    fn should_begin_exchange(&mut self, source: Slot, target: Slot) -> bool {
        self.record(HostCall::ShouldBeginExchange { source, target });
        self.exchanges_allowed
    }

    fn should_auto_handle_end_of_drag(
        &mut self,
        point: Vec2,
        section: Option<usize>,
        slot: Slot,
    ) -> bool {
        self.record(HostCall::ShouldAutoHandle {
            point,
            section,
            slot,
        });
        self.auto_handle_end
    }

    fn drag_began(&mut self, point: Vec2, slot: Slot) {
        self.record(HostCall::DragBegan { point, slot });
    }

    fn drag_changed(&mut self, point: Vec2, slot: Slot) {
        self.record(HostCall::DragChanged { point, slot });
    }

    fn drag_ended(&mut self, point: Vec2, slot: Slot) {
        self.record(HostCall::DragEnded { point, slot });
    }

    fn drag_settled(&mut self) {
        self.record(HostCall::DragSettled);
    }
}
