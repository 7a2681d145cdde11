//! The drag state machine.
//!
//! [`DragController`] consumes pointer (or gesture) events and frame ticks from
//! the host and drives one drag at a time through
//! `Idle -> Pressed -> Dragging -> Releasing -> Idle`:
//!
//! ```text
//!            long press           item + may move         release / cancel
//!   Idle ──────────────> Pressed ───────────────> Dragging ───────────────> Releasing
//!    ^                      │ no item / vetoed       │ ▲ pointer move,          │
//!    │                      │ (cooldown)             └─┘ edge scroll ticks      │
//!    └──────────────────────┴───────────────────────────────────────────────────┘
//!                                                   release animation finished
//! ```
//!
//! Everything runs on the host's UI thread. Pointer events, [`DragController::update`]
//! and the host callbacks are strictly sequential, so the controller holds no locks;
//! the `Releasing` phase doubles as the re-entrancy guard.

use dragcell_core::math::Vec2;
use dragcell_core::profiling::profile_function;
use tracing::{debug, trace, warn};

use crate::config::{DragConfig, REJECTED_PRESS_COOLDOWN};
use crate::error::ReorderResult;
use crate::gesture::{GestureEvent, LongPressRecognizer, PointerEvent};
use crate::host::DragHost;
use crate::overlay::{Overlay, OverlayPose, TransitionKind};
use crate::reorder::{LayoutMove, apply_move};
use crate::resolver::{resolve_target_slot, section_at};
use crate::session::{DragPhase, DragSession};
use crate::slot::Slot;

/// Drives long-press drag-to-reorder for one grid or list control.
///
/// `V` is the host's overlay visual type (see [`DragLayout::Visual`](crate::DragLayout::Visual)).
///
/// # Example
///
/// ```ignore
/// let mut drag = DragController::new(DragConfig::default());
///
/// // Input:
/// drag.handle_pointer(&mut host, PointerEvent::down(point));
///
/// // Every frame:
/// drag.update(&mut host, dt);
///
/// // While rendering items:
/// let hidden = drag.is_slot_hidden(slot);
/// // ...and draw `drag.overlay()` on top, using its frame and alpha.
/// ```
#[derive(Debug)]
pub struct DragController<V> {
    config: DragConfig,
    phase: DragPhase,
    recognizer: LongPressRecognizer,
    session: Option<DragSession<V>>,
}

impl<V> Default for DragController<V> {
    fn default() -> Self {
        Self::new(DragConfig::default())
    }
}

impl<V> DragController<V> {
    pub fn new(config: DragConfig) -> Self {
        let recognizer = LongPressRecognizer::new(config.long_press_duration, config.allowable_movement);
        Self {
            config,
            phase: DragPhase::Idle,
            recognizer,
            session: None,
        }
    }

    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn session(&self) -> Option<&DragSession<V>> {
        self.session.as_ref()
    }

    pub fn overlay(&self) -> Option<&Overlay<V>> {
        self.session.as_ref().map(DragSession::overlay)
    }

    pub fn recognizer(&self) -> &LongPressRecognizer {
        &self.recognizer
    }

    /// True from a successful drag begin until the release animation finishes.
    pub fn is_active(&self) -> bool {
        self.session.as_ref().is_some_and(DragSession::is_active)
    }

    pub fn is_drag_enabled(&self) -> bool {
        self.config.drag_enabled
    }

    /// Enable or disable dragging. A drag already in progress is not affected.
    pub fn set_drag_enabled(&mut self, enabled: bool) {
        self.config.drag_enabled = enabled;
        if !enabled && self.phase == DragPhase::Idle {
            self.recognizer.reset();
        }
    }

    pub fn set_long_press_duration(&mut self, seconds: f32) {
        self.config.long_press_duration = seconds;
        self.recognizer.set_min_duration(seconds);
    }

    /// Whether the host should hide the item rendered at `slot`.
    ///
    /// Evaluate this at render time instead of storing a hidden flag on
    /// reusable views.
    pub fn is_slot_hidden(&self, slot: Slot) -> bool {
        self.session.as_ref().is_some_and(|s| s.hides(slot))
    }

    /// Feed a raw pointer event through the long-press recognizer.
    pub fn handle_pointer<H>(&mut self, host: &mut H, event: PointerEvent)
    where
        H: DragHost<Visual = V>,
    {
        profile_function!();
        if self.phase == DragPhase::Releasing {
            // Interaction is suspended while the overlay settles.
            self.recognizer.reset();
            return;
        }
        if let Some(gesture) = self.recognizer.handle_pointer(event) {
            self.handle_gesture(host, gesture);
        }
    }

    /// Feed an already recognized long-press gesture event.
    pub fn handle_gesture<H>(&mut self, host: &mut H, gesture: GestureEvent)
    where
        H: DragHost<Visual = V>,
    {
        match gesture {
            GestureEvent::Began(point) => self.begin_drag(host, point),
            GestureEvent::Changed(point) => self.drag_moved(host, point),
            GestureEvent::Ended(point) | GestureEvent::Cancelled(point) => self.end_drag(host, point),
        }
    }

    /// Advance one display frame: long-press timing, overlay animation,
    /// release completion and edge auto-scroll.
    pub fn update<H>(&mut self, host: &mut H, dt: f32)
    where
        H: DragHost<Visual = V>,
    {
        profile_function!();

        if let Some(gesture) = self.recognizer.update(dt) {
            self.handle_gesture(host, gesture);
        }

        if let Some(session) = self.session.as_mut() {
            if let Some(kind) = session.overlay.update(dt) {
                trace!(?kind, "overlay transition finished");
            }
        }

        match self.phase {
            DragPhase::Releasing => {
                if self.overlay().is_none_or(|overlay| !overlay.is_animating()) {
                    self.settle(host);
                }
            }
            DragPhase::Dragging => self.edge_scroll_tick(host),
            DragPhase::Idle | DragPhase::Pressed => {}
        }
    }

    /// Move the dragged item to `target` on the host's behalf and release.
    ///
    /// Used when the host overrides where a drag ends, for example to drop an
    /// item into a group that is not visually adjacent. Performs the reorder,
    /// the layout move and the release animation of a normal drag end, and
    /// stops further pointer-driven updates.
    ///
    /// Returns `Ok(false)` without doing anything when no drag is active or a
    /// release is already in progress.
    pub fn move_item_to<H>(&mut self, host: &mut H, target: Slot) -> ReorderResult<bool>
    where
        H: DragHost<Visual = V>,
    {
        if self.phase != DragPhase::Dragging {
            debug!(phase = ?self.phase, %target, "programmatic move ignored");
            return Ok(false);
        }
        let Some(session) = self.session.as_mut().filter(|s| s.active) else {
            return Ok(false);
        };

        let reorder = apply_move(host.collection(), session.source_slot, target)?;
        if let Some(layout_move) = reorder.layout_move {
            host.set_collection(reorder.collection);
            commit_layout_move(session, host, layout_move);
        }
        debug!(slot = %session.source_slot, "programmatic move");
        if !session.awaiting_host_move {
            host.drag_ended(session.last_pointer_point, session.source_slot);
        }

        self.recognizer.reset();
        self.begin_release(host);
        Ok(true)
    }

    /// Tear the drag down immediately, without the release animation.
    ///
    /// Safe to call at any time; does nothing when idle.
    pub fn cancel<H>(&mut self, host: &mut H)
    where
        H: DragHost<Visual = V>,
    {
        self.recognizer.reset();
        let Some(session) = self.session.as_mut() else {
            self.phase = DragPhase::Idle;
            return;
        };

        session.edge_scroller.stop();
        if self.phase == DragPhase::Dragging && !session.awaiting_host_move {
            host.drag_ended(session.last_pointer_point, session.source_slot);
        }
        debug!(slot = %session.source_slot, "drag cancelled");
        self.settle(host);
    }

    fn begin_drag<H>(&mut self, host: &mut H, point: Vec2)
    where
        H: DragHost<Visual = V>,
    {
        if self.phase != DragPhase::Idle {
            trace!(phase = ?self.phase, "long press ignored");
            return;
        }
        if !self.config.drag_enabled {
            self.recognizer.reset();
            return;
        }
        self.phase = DragPhase::Pressed;

        let cells = host.visible_cells();
        let Some(slot) = cells.cell_at(point) else {
            self.reject_press(point, "no item under press");
            return;
        };
        if !host.should_begin_move(slot) {
            self.reject_press(point, "item may not move");
            return;
        }

        let Some(frame) = host.rect_for_slot(slot).or_else(|| cells.rect(slot)) else {
            warn!(%slot, "no rect for pressed item, drag aborted");
            self.abort_press();
            return;
        };
        let Some(visual) = host.snapshot_visual(slot) else {
            warn!(%slot, "host could not snapshot item, drag aborted");
            self.abort_press();
            return;
        };

        let mut overlay = Overlay::new(visual, frame);
        overlay.animate(
            TransitionKind::Lift,
            OverlayPose {
                center: point,
                scale: self.config.overlay_scale,
                alpha: self.config.overlay_alpha,
            },
            self.config.lift_duration,
            self.config.easing,
        );
        self.session = Some(DragSession::new(slot, point, overlay));
        self.phase = DragPhase::Dragging;
        debug!(%slot, ?point, "drag began");

        host.request_rerender(&[slot]);
        host.drag_began(point, slot);
    }

    fn drag_moved<H>(&mut self, host: &mut H, point: Vec2)
    where
        H: DragHost<Visual = V>,
    {
        if self.phase != DragPhase::Dragging {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.awaiting_host_move {
            return;
        }

        session.last_pointer_point = point;
        session.overlay.animate_center(
            TransitionKind::Follow,
            point,
            self.config.follow_duration,
            self.config.easing,
        );
        exchange_toward_pointer(session, host);
        host.drag_changed(point, session.source_slot);
    }

    fn end_drag<H>(&mut self, host: &mut H, point: Vec2)
    where
        H: DragHost<Visual = V>,
    {
        if self.phase != DragPhase::Dragging {
            trace!(phase = ?self.phase, "release without an active drag");
            return;
        }
        let Some(session) = self.session.as_mut() else {
            self.phase = DragPhase::Idle;
            return;
        };
        if session.awaiting_host_move {
            return;
        }

        session.edge_scroller.stop();
        session.last_pointer_point = point;
        let slot = session.source_slot;
        debug!(%slot, ?point, "drag ended");
        host.drag_ended(point, slot);

        let section = section_at(point, &host.visible_cells());
        if host.should_auto_handle_end_of_drag(point, section, slot) {
            self.begin_release(host);
        } else {
            debug!(%slot, ?section, "waiting for host to finish the move");
            session.awaiting_host_move = true;
        }
    }

    fn begin_release<H>(&mut self, host: &mut H)
    where
        H: DragHost<Visual = V>,
    {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.edge_scroller.stop();
        session.awaiting_host_move = false;

        let home = host
            .rect_for_slot(session.source_slot)
            .map(|rect| rect.center())
            .unwrap_or(session.anchor_point);
        session.overlay.animate(
            TransitionKind::Release,
            OverlayPose {
                center: home,
                scale: 1.0,
                alpha: 1.0,
            },
            self.config.release_duration,
            self.config.easing,
        );
        self.phase = DragPhase::Releasing;
        host.set_interaction_enabled(false);
    }

    fn settle<H>(&mut self, host: &mut H)
    where
        H: DragHost<Visual = V>,
    {
        self.phase = DragPhase::Idle;
        let Some(mut session) = self.session.take() else {
            return;
        };
        session.edge_scroller.stop();
        session.active = false;
        let slot = session.source_slot;
        drop(session);
        debug!(%slot, "drag settled");

        host.request_rerender(&[slot]);
        host.set_interaction_enabled(true);
        host.drag_settled();
    }

    fn reject_press(&mut self, point: Vec2, reason: &str) {
        debug!(?point, reason, "long press rejected");
        self.recognizer.disable_for(REJECTED_PRESS_COOLDOWN);
        self.phase = DragPhase::Idle;
    }

    fn abort_press(&mut self) {
        self.recognizer.reset();
        self.phase = DragPhase::Idle;
    }

    fn edge_scroll_tick<H>(&mut self, host: &mut H)
    where
        H: DragHost<Visual = V>,
    {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.awaiting_host_move {
            return;
        }

        let viewport = host.viewport();
        let Some(step) = session.edge_scroller.tick(session.overlay.target_bounds(), &viewport) else {
            return;
        };
        trace!(direction = ?step.direction, offset = ?step.offset, "edge scroll");
        host.set_scroll_offset(step.offset);
        session.overlay.translate(step.delta);
        session.last_pointer_point += step.delta;

        if exchange_toward_pointer(session, host).is_some() {
            host.drag_changed(session.last_pointer_point, session.source_slot);
        }
    }
}

/// Resolve a target for the session's pointer and, if the host allows it,
/// move the dragged item there.
fn exchange_toward_pointer<V, H>(session: &mut DragSession<V>, host: &mut H) -> Option<LayoutMove>
where
    H: DragHost<Visual = V>,
{
    let cells = host.visible_cells();
    let source = session.source_slot;
    // Measure from where the overlay is heading; its pose trails the pointer.
    let target = resolve_target_slot(
        session.last_pointer_point,
        session.overlay.target_center(),
        &cells,
        source,
    )?;

    if !host.should_begin_exchange(source, target) {
        trace!(%source, %target, "exchange vetoed by host");
        return None;
    }

    let reorder = match apply_move(host.collection(), source, target) {
        Ok(reorder) => reorder,
        Err(err) => {
            warn!(%err, %source, %target, "exchange skipped");
            return None;
        }
    };
    let layout_move = reorder.layout_move?;
    host.set_collection(reorder.collection);
    commit_layout_move(session, host, layout_move);
    Some(layout_move)
}

fn commit_layout_move<V, H>(session: &mut DragSession<V>, host: &mut H, layout_move: LayoutMove)
where
    H: DragHost<Visual = V>,
{
    trace!(from = %layout_move.from, to = %layout_move.to, "layout move");
    host.perform_layout_move(layout_move.from, layout_move.to);
    session.source_slot = layout_move.to;
    session.current_slot = layout_move.to;
    // The vacated slot now shows a neighbour and the landing slot is hidden.
    host.request_rerender(&[layout_move.from, layout_move.to]);
}
