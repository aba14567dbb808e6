use log::debug;

use retro_targets_core::{filter_by_min_area, format_rects, FrameScope, OrientedRect};

use crate::metrics::{angle_offset, height_error};
use crate::pairer::pair_rectangles;
use crate::pnp_order::{center_from_points, order_points};
use crate::types::{DetectorParams, RectPair, TargetObservation, TargetPairDetection};

/// Errors returned by the pair detector.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PairDetectError {
    #[error("not enough rectangles to form a pair (got {count})")]
    NotEnoughRects { count: usize },
    #[error("no valid left/right pair found")]
    NoValidPair,
}

/// End-to-end per-frame detector: area gate, pairing scan, PnP point
/// ordering, and control-loop metrics in one call.
pub struct TargetPairDetector {
    params: DetectorParams,
}

impl TargetPairDetector {
    pub fn new(params: DetectorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    /// Run one frame's rectangles through the full pipeline.
    ///
    /// `rects` is what the vision frontend produced for this frame, in
    /// any order. On success the detection holds one observation per
    /// matched pair (at most two, leftmost first). A frame with no
    /// target is an `Err`, and the caller simply tries again on the
    /// next frame.
    pub fn detect(&self, rects: &[OrientedRect]) -> Result<TargetPairDetection, PairDetectError> {
        let _scope = FrameScope::new("pair-detect");
        let sized = filter_by_min_area(rects, self.params.min_area);
        debug!(
            "area gate kept {}/{} rects: {}",
            sized.len(),
            rects.len(),
            format_rects(&sized)
        );
        if sized.len() < 2 {
            return Err(PairDetectError::NotEnoughRects { count: sized.len() });
        }

        let scan = pair_rectangles(&sized, self.params.wanted_targets);
        if !scan.found {
            return Err(PairDetectError::NoValidPair);
        }

        let targets = scan.pairs().map(|pair| self.observe(pair)).collect();
        Ok(TargetPairDetection { targets })
    }

    fn observe(&self, pair: RectPair) -> TargetObservation {
        let (left_corners, right_corners) = pair.corner_points();
        let points = order_points(left_corners, right_corners);
        let center = center_from_points(&points);
        let measured_height =
            (pair.left.pixel_height() + pair.right.pixel_height()) * 0.5;

        TargetObservation {
            pair,
            points,
            center,
            angle_offset_deg: angle_offset(
                self.params.camera.frame_width,
                center.x,
                self.params.camera.fov_deg,
            ),
            height_error: height_error(measured_height, self.params.camera.target_px_height),
        }
    }
}
