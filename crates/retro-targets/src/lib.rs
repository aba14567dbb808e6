//! Facade crate for the `retro-targets-*` workspace.
//!
//! This crate provides stable, convenient re-exports of the underlying
//! crates:
//! - `retro_targets::core`: oriented rectangles, facing classification,
//!   corner extraction, the area gate, and the workspace logger.
//! - `retro_targets::pair`: the pairing scan, PnP point ordering,
//!   control-loop metrics, and the [`TargetPairDetector`] facade.
//!
//! ## Quickstart
//!
//! ```
//! use nalgebra::Point2;
//! use retro_targets::{DetectorParams, OrientedRect, TargetPairDetector};
//!
//! // Rectangles as produced by the vision frontend for one frame.
//! let rects = [
//!     OrientedRect::new(Point2::new(61.2, 241.3), 81.3, 28.5, -71.6),
//!     OrientedRect::new(Point2::new(221.1, 246.6), 30.2, 80.7, -10.3),
//! ];
//!
//! let detector = TargetPairDetector::new(DetectorParams::default());
//! let detection = detector.detect(&rects).expect("target in frame");
//! let target = detection.primary().expect("at least one target");
//! println!("six PnP points: {:?}", target.points.as_slice());
//! ```

pub use retro_targets_core as core;
pub use retro_targets_pair as pair;

pub use retro_targets_core::{filter_by_min_area, Facing, OrientedRect};
pub use retro_targets_pair::{
    pair_rectangles, CameraParams, DetectorParams, PairDetectError, PairScan, PnpPoints, RectPair,
    TargetObservation, TargetPairDetection, TargetPairDetector, WantedTargets,
};
