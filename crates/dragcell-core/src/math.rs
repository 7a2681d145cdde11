//! Vector math re-exported from [`glam`].
//!
//! Points, offsets and sizes are all plain [`Vec2`] values in content
//! coordinates (the coordinate space of the scrollable content, not the screen).
//!
//! ```
//! use dragcell_core::math::Vec2;
//!
//! let pointer = Vec2::new(10.0, 20.0);
//! let scrolled = pointer + Vec2::new(0.0, 4.0);
//! assert_eq!(scrolled.y, 24.0);
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::{Vec2, vec2};
