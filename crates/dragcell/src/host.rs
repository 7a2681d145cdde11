//! Traits the host application implements to plug into a [`DragController`].
//!
//! The host owns the collection, its rendered items and the layout engine.
//! The controller reaches them only through these traits, and only for the
//! duration of a call.
//!
//! [`DragController`]: crate::DragController

use dragcell_core::geometry::Rect;
use dragcell_core::math::Vec2;

use crate::auto_scroll::Viewport;
use crate::collection::OrderedCollection;
use crate::resolver::VisibleCells;
use crate::slot::Slot;

/// Pull/push access to the ordered collection being reordered.
pub trait DragDataSource {
    type Item: Clone;

    /// Current collection. Called once per mutation.
    fn collection(&self) -> OrderedCollection<Self::Item>;

    /// Replace the collection. Called once per mutation with the whole new
    /// collection; the host must apply it before the next event.
    fn set_collection(&mut self, collection: OrderedCollection<Self::Item>);
}

/// Geometry, scrolling and visual hooks of the host's layout.
pub trait DragLayout {
    /// Opaque visual proxy (snapshot) of an item.
    type Visual;

    /// Rectangle of the item at `slot`, if it is laid out.
    fn rect_for_slot(&self, slot: Slot) -> Option<Rect>;

    /// Rectangles of all currently visible items.
    fn visible_cells(&self) -> VisibleCells;

    /// Capture a visual proxy of the item at `slot`. `None` aborts the drag.
    fn snapshot_visual(&mut self, slot: Slot) -> Option<Self::Visual>;

    /// Current scroll state.
    fn viewport(&self) -> Viewport;

    fn set_scroll_offset(&mut self, offset: Vec2);

    /// Animate the item at `from` into `to`.
    ///
    /// `to` is the slot the item actually landed in. For a move into another
    /// section it may differ from the resolved target: the index is clamped
    /// to the destination section's length.
    fn perform_layout_move(&mut self, from: Slot, to: Slot);

    /// Re-render these slots; their hidden state may have changed.
    fn request_rerender(&mut self, slots: &[Slot]);

    /// Suspend or resume user interaction with the control.
    fn set_interaction_enabled(&mut self, _enabled: bool) {}
}

/// Notifications and veto points of a drag. Every method has a default, so
/// hosts implement only what they need.
pub trait DragDelegate {
    /// May the item at `slot` be dragged?
    fn should_begin_move(&mut self, _slot: Slot) -> bool {
        true
    }

    /// May the dragged item at `source` be exchanged into `target`?
    fn should_begin_exchange(&mut self, _source: Slot, _target: Slot) -> bool {
        true
    }

    /// Should the controller finish the drag itself?
    ///
    /// `section` is the section under the release point. Returning `false`
    /// leaves the drag parked until the host calls
    /// [`DragController::move_item_to`](crate::DragController::move_item_to)
    /// or [`DragController::cancel`](crate::DragController::cancel).
    fn should_auto_handle_end_of_drag(
        &mut self,
        _point: Vec2,
        _section: Option<usize>,
        _slot: Slot,
    ) -> bool {
        true
    }

    fn drag_began(&mut self, _point: Vec2, _slot: Slot) {}

    fn drag_changed(&mut self, _point: Vec2, _slot: Slot) {}

    fn drag_ended(&mut self, _point: Vec2, _slot: Slot) {}

    /// The release animation finished and the session is gone.
    fn drag_settled(&mut self) {}
}

/// Everything a [`DragController`](crate::DragController) needs from its host.
pub trait DragHost: DragDataSource + DragLayout + DragDelegate {}

impl<T: DragDataSource + DragLayout + DragDelegate> DragHost for T {}
