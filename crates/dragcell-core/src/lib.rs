//! Dragcell Core
//!
//! Shared math, geometry, collection, logging and profiling helpers used by the
//! dragcell crates.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
