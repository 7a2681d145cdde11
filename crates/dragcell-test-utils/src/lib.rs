//! Test utilities for the dragcell reorder component.
//!
//! The main component is [`MockHost`], an in-memory host that implements the
//! drag host traits over a fixed [`GridLayout`] and records every call.
//!
//! # Example
//!
//! ```rust
//! use dragcell::{DragConfig, DragController, PointerEvent, Vec2};
//! use dragcell_test_utils::{GridLayout, MockHost};
//!
//! let layout = GridLayout::list(Vec2::new(100.0, 40.0), 10.0);
//! let mut host = MockHost::flat(vec![0, 1, 2, 3], layout);
//! let mut drag = DragController::new(DragConfig::default());
//!
//! drag.handle_pointer(&mut host, PointerEvent::down(Vec2::new(50.0, 20.0)));
//! drag.update(&mut host, 0.5);
//! assert!(drag.is_active());
//! ```
//!
//! Mock calls are recorded through a `parking_lot::Mutex` so that `&self`
//! trait methods such as `collection()` can be observed as well.

pub mod mock_host;

pub use mock_host::*;
