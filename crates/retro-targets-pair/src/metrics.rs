//! Derived quantities for the control loop.
//!
//! Small pure maps from pixel measurements to the values a steering /
//! distance loop consumes. Calibration inputs (frame width, FOV, wanted
//! pixel height) are deployment-specific and come from
//! [`crate::CameraParams`], never from constants here.

/// Degrees between the frame center and `center_x`.
///
/// Linear pixel-to-degree map with the half-frame point as the origin:
/// negative when the target is left of center, positive right of it,
/// zero at exact center. `fov_deg` is the tuned horizontal field of
/// view setting the `frame_width / fov_deg` scale.
pub fn angle_offset(frame_width: f32, center_x: f32, fov_deg: f32) -> f32 {
    let px_per_deg = frame_width / fov_deg;
    (center_x - frame_width * 0.5) / px_per_deg
}

/// Ratio of measured to wanted target pixel height.
///
/// The wanted height corresponds to a calibrated standoff distance, so
/// the distance loop drives this towards 1.0.
pub fn height_error(measured_px: f32, target_px: f32) -> f32 {
    measured_px / target_px
}
