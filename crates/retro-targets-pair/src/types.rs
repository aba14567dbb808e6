use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use retro_targets_core::OrientedRect;

use crate::pnp_order::PnpPoints;

/// A matched left/right strip pair representing one physical target.
///
/// Ordering comes from the x-sort in the pairing scan: `left.center.x <
/// right.center.x` holds by construction and is not re-checked.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RectPair {
    pub left: OrientedRect,
    pub right: OrientedRect,
}

impl RectPair {
    /// Corner points of the two members, left first.
    pub fn corner_points(&self) -> ([Point2<f32>; 4], [Point2<f32>; 4]) {
        (self.left.corner_points(), self.right.corner_points())
    }
}

/// How many targets the caller wants out of one scan.
///
/// The scan supports at most two; further valid adjacencies in a frame
/// are dropped regardless of this setting.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum WantedTargets {
    #[default]
    One,
    Two,
}

/// Result of one pairing scan over a frame's rectangles.
///
/// `found` mirrors `pair1.is_some()`; `pair2` can only be filled after
/// `pair1`. A failed scan is the canonical "none" value, never a panic.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PairScan {
    pub found: bool,
    pub pair1: Option<RectPair>,
    pub pair2: Option<RectPair>,
}

impl PairScan {
    /// The canonical not-found result.
    pub fn none() -> Self {
        Self {
            found: false,
            pair1: None,
            pair2: None,
        }
    }

    pub fn pairs(&self) -> impl Iterator<Item = RectPair> + '_ {
        self.pair1.into_iter().chain(self.pair2)
    }
}

/// Camera/deployment calibration values.
///
/// These are lens- and mount-specific and must come from configuration,
/// not code. The defaults match the 640×480 Raspberry Pi camera setup
/// the reference measurements were taken on.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraParams {
    /// Frame width in pixels.
    pub frame_width: f32,
    /// Tuned horizontal field of view in degrees. Note this is a tuning
    /// value for the pixel-to-degree ratio, not the spec-sheet FOV.
    pub fov_deg: f32,
    /// Pixel height of the target at the wanted standoff distance.
    pub target_px_height: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            frame_width: 640.0,
            fov_deg: 45.0,
            target_px_height: 89.0,
        }
    }
}

/// Parameters for [`crate::TargetPairDetector`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectorParams {
    #[serde(default)]
    pub wanted_targets: WantedTargets,
    /// Rectangles at or below this area (px²) are discarded before pairing.
    pub min_area: f32,
    #[serde(default)]
    pub camera: CameraParams,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            wanted_targets: WantedTargets::One,
            min_area: 200.0,
            camera: CameraParams::default(),
        }
    }
}

/// Everything derived from one matched pair: the PnP-ready points plus
/// the quantities the control loop consumes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetObservation {
    pub pair: RectPair,
    pub points: PnpPoints,
    /// Estimated target center in image coordinates.
    pub center: Point2<f32>,
    /// Degrees off the frame center, negative left, positive right.
    pub angle_offset_deg: f32,
    /// Measured-over-wanted pixel-height ratio; 1.0 means "arrived".
    pub height_error: f32,
}

/// Detection result for one frame: at most two observed targets,
/// leftmost first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetPairDetection {
    pub targets: Vec<TargetObservation>,
}

impl TargetPairDetection {
    /// The primary (leftmost) target.
    pub fn primary(&self) -> Option<&TargetObservation> {
        self.targets.first()
    }
}
