//! Left/right strip pairing and PnP point ordering for two-strip
//! retroreflective vision targets.
//!
//! The vision frontend (color masking + contour extraction, out of
//! scope here) hands over a frame's minimum-area rectangles. This crate
//! classifies each as left- or right-facing, matches adjacent
//! left→right transitions into at most two pairs, orders a matched
//! pair's corner points into the six-point sequence a PnP pose solver
//! expects, and derives the angle-offset and height-error values the
//! control loop consumes.
//!
//! Everything is per-frame and pure: no cross-frame state, nothing to
//! lock, and failure is a value (`found = false` from the scan, a
//! [`PairDetectError`] from the facade), never a panic.

mod detector;
mod metrics;
mod pairer;
mod pnp_order;
mod types;

pub use detector::{PairDetectError, TargetPairDetector};
pub use metrics::{angle_offset, height_error};
pub use pairer::pair_rectangles;
pub use pnp_order::{center_from_points, order_points, PnpPoints};
pub use types::{
    CameraParams, DetectorParams, PairScan, RectPair, TargetObservation, TargetPairDetection,
    WantedTargets,
};
