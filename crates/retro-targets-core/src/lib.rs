//! Core geometric types for retroreflective vision-target pairing.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! depend on any concrete contour extractor or image type: the vision
//! frontend hands over minimum-area rectangles and everything here is
//! plain arithmetic on them.

mod logger;
mod rect;

pub use rect::{filter_by_min_area, format_rects, Facing, OrientedRect};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::{init_with_level, FrameScope};
