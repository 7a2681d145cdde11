//! Dragcell - long-press drag-to-reorder for grid and list controls
//!
//! This crate provides the headless part of drag-to-reorder:
//! - Long-press recognition from raw pointer events
//! - Target slot resolution from the visible item rectangles
//! - Flat and sectioned reorder with one layout move per exchange
//! - Edge auto-scroll while the dragged item sits near a viewport edge
//! - An animated overlay pose for the dragged item
//!
//! The host owns the collection, its views and the layout engine, and plugs
//! them in through the [`DragHost`] traits. Rendering the overlay and hiding the
//! dragged item's original view stay with the host.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dragcell::{DragConfig, DragController, PointerEvent};
//!
//! let mut drag = DragController::new(DragConfig::default().overlay_scale(1.1));
//!
//! // Input:
//! drag.handle_pointer(&mut host, PointerEvent::down(point));
//!
//! // In the frame loop:
//! drag.update(&mut host, delta_time);
//!
//! // While rendering:
//! // skip or fade items where drag.is_slot_hidden(slot)
//! // draw drag.overlay() at overlay.frame() with overlay.alpha()
//! ```
//!
//! All points are in content coordinates.

pub mod auto_scroll;
pub mod collection;
pub mod config;
pub mod controller;
pub mod easing;
pub mod error;
pub mod gesture;
pub mod host;
pub mod overlay;
pub mod reorder;
pub mod resolver;
pub mod session;
pub mod slot;

pub use auto_scroll::{EdgeScroller, ScrollDirection, ScrollStep, Viewport};
pub use collection::OrderedCollection;
pub use config::DragConfig;
pub use controller::DragController;
pub use easing::EasingFunction;
pub use error::{ReorderError, ReorderResult};
pub use gesture::{GestureEvent, LongPressRecognizer, PointerEvent, PointerPhase};
pub use host::{DragDataSource, DragDelegate, DragHost, DragLayout};
pub use overlay::{Overlay, OverlayPose, TransitionKind};
pub use reorder::{LayoutMove, Reorder, apply_move};
pub use resolver::{VisibleCells, resolve_target_slot, section_at};
pub use session::{DragPhase, DragSession};
pub use slot::Slot;

// Re-export the shared value types hosts need to implement the traits.
pub use dragcell_core::geometry::Rect;
pub use dragcell_core::math::{Vec2, vec2};
