use dragcell_core::math::Vec2;

use crate::auto_scroll::EdgeScroller;
use crate::overlay::Overlay;
use crate::slot::Slot;

/// Phase of the drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No drag in progress.
    #[default]
    Idle,
    /// A long press was recognized and is being checked against the items.
    Pressed,
    /// An item is being dragged.
    Dragging,
    /// The overlay is settling after release; input is suspended.
    Releasing,
}

/// State of one drag, from a successful begin until the release settles.
#[derive(Debug)]
pub struct DragSession<V> {
    pub(crate) source_slot: Slot,
    pub(crate) current_slot: Slot,
    pub(crate) anchor_point: Vec2,
    pub(crate) last_pointer_point: Vec2,
    pub(crate) overlay: Overlay<V>,
    pub(crate) edge_scroller: EdgeScroller,
    pub(crate) active: bool,
    pub(crate) awaiting_host_move: bool,
}

impl<V> DragSession<V> {
    pub(crate) fn new(slot: Slot, point: Vec2, overlay: Overlay<V>) -> Self {
        let mut edge_scroller = EdgeScroller::new();
        edge_scroller.start();
        Self {
            source_slot: slot,
            current_slot: slot,
            anchor_point: point,
            last_pointer_point: point,
            overlay,
            edge_scroller,
            active: true,
            awaiting_host_move: false,
        }
    }

    /// Slot the dragged item currently occupies in the collection.
    pub fn source_slot(&self) -> Slot {
        self.source_slot
    }

    /// Last slot resolved as an exchange target.
    pub fn current_slot(&self) -> Slot {
        self.current_slot
    }

    /// Pointer position at the start of the drag.
    pub fn anchor_point(&self) -> Vec2 {
        self.anchor_point
    }

    pub fn last_pointer_point(&self) -> Vec2 {
        self.last_pointer_point
    }

    pub fn overlay(&self) -> &Overlay<V> {
        &self.overlay
    }

    pub fn edge_scroller(&self) -> &EdgeScroller {
        &self.edge_scroller
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The pointer was released and the host chose to finish the move itself.
    pub fn is_awaiting_host_move(&self) -> bool {
        self.awaiting_host_move
    }

    /// Whether the item rendered at `slot` should be hidden behind the overlay.
    pub fn hides(&self, slot: Slot) -> bool {
        self.active && slot == self.source_slot
    }
}
