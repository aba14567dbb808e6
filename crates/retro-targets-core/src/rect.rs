use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Which physical half of a two-strip target a rectangle belongs to.
///
/// The strips of a retroreflective goal marker are angled towards each
/// other, so the minimum-area fit of the left strip leans one way and
/// the right strip the other. The class is derived from the corrected
/// angle being `<= 90` ([`Facing::Left`]) or `> 90` ([`Facing::Right`]).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

/// An oriented (rotated) rectangle fitted to a detected contour.
///
/// Matches the minimum-area-rectangle description produced by the vision
/// frontend: center point, side lengths, and rotation angle in degrees.
/// Which side is reported as `width` is ambiguous in that convention;
/// [`OrientedRect::corrected_angle`] folds both readings onto one scale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrientedRect {
    pub center: Point2<f32>,
    pub width: f32,
    pub height: f32,
    pub angle_deg: f32,
}

impl OrientedRect {
    pub fn new(center: Point2<f32>, width: f32, height: f32, angle_deg: f32) -> Self {
        Self {
            center,
            width,
            height,
            angle_deg,
        }
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Fold the frontend's ambiguous angle convention onto a single scale.
    ///
    /// The minimum-area fit may report either strip side as `width`; adding
    /// 180 when `width < height` and 90 otherwise maps both conventions onto
    /// one comparable range where values `<= 90` mean a left-leaning strip.
    pub fn corrected_angle(&self) -> f32 {
        if self.width < self.height {
            self.angle_deg + 180.0
        } else {
            self.angle_deg + 90.0
        }
    }

    /// Classify this rectangle by its corrected angle.
    pub fn facing(&self) -> Facing {
        if self.corrected_angle() <= 90.0 {
            Facing::Left
        } else {
            Facing::Right
        }
    }

    /// The 4 corner points, rotated by `angle_deg` about the center.
    ///
    /// Same corner order as OpenCV's `boxPoints`: starts at the corner
    /// with the lowest y for an unrotated rectangle and walks the
    /// perimeter.
    pub fn corner_points(&self) -> [Point2<f32>; 4] {
        let rad = self.angle_deg.to_radians();
        let b = rad.cos() * 0.5;
        let a = rad.sin() * 0.5;
        let (cx, cy) = (self.center.x, self.center.y);
        let p0 = Point2::new(
            cx - a * self.height - b * self.width,
            cy + b * self.height - a * self.width,
        );
        let p1 = Point2::new(
            cx + a * self.height - b * self.width,
            cy - b * self.height - a * self.width,
        );
        let p2 = Point2::new(2.0 * cx - p0.x, 2.0 * cy - p0.y);
        let p3 = Point2::new(2.0 * cx - p1.x, 2.0 * cy - p1.y);
        [p0, p1, p2, p3]
    }

    /// Vertical pixel span: topmost corner y to bottommost corner y.
    pub fn pixel_height(&self) -> f32 {
        let corners = self.corner_points();
        let mut min_y = f32::INFINITY;
        let mut max_y = f32::NEG_INFINITY;
        for p in corners {
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        max_y - min_y
    }
}

/// Keep only rectangles whose area exceeds `min_area` (in px²).
///
/// The frontend's contour fit produces plenty of small noise rects; this
/// is the size gate applied before any pairing is attempted.
pub fn filter_by_min_area(rects: &[OrientedRect], min_area: f32) -> Vec<OrientedRect> {
    rects.iter().copied().filter(|r| r.area() > min_area).collect()
}

/// One-line list rendering for log messages.
pub fn format_rects(rects: &[OrientedRect]) -> String {
    use std::fmt::Write;

    let mut out = String::from("[ ");
    for r in rects {
        let _ = write!(
            out,
            "(({:.2}, {:.2}), ({:.2}, {:.2}), {:.1}), ",
            r.center.x, r.center.y, r.width, r.height, r.angle_deg
        );
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rect(cx: f32, cy: f32, w: f32, h: f32, angle: f32) -> OrientedRect {
        OrientedRect::new(Point2::new(cx, cy), w, h, angle)
    }

    #[test]
    fn corrected_angle_adds_90_when_width_dominates() {
        let r = rect(61.25, 241.25, 81.27, 28.46, -71.565);
        assert_relative_eq!(r.corrected_angle(), 18.435, epsilon = 1e-3);
    }

    #[test]
    fn corrected_angle_adds_180_when_height_dominates() {
        let r = rect(221.11, 246.62, 30.23, 80.68, -10.305);
        assert_relative_eq!(r.corrected_angle(), 169.695, epsilon = 1e-3);
    }

    #[test]
    fn facing_agrees_across_swapped_axis_reports() {
        // The same physical strip reported with either side as "width"
        // must land in the same class.
        let as_wide = rect(0.0, 0.0, 10.0, 5.0, -80.0); // corrected: 10
        let as_tall = rect(0.0, 0.0, 5.0, 10.0, -170.0); // corrected: 10
        assert_eq!(as_wide.facing(), Facing::Left);
        assert_eq!(as_tall.facing(), Facing::Left);

        let as_wide = rect(0.0, 0.0, 10.0, 5.0, 80.0); // corrected: 170
        let as_tall = rect(0.0, 0.0, 5.0, 10.0, -10.0); // corrected: 170
        assert_eq!(as_wide.facing(), Facing::Right);
        assert_eq!(as_tall.facing(), Facing::Right);
    }

    #[test]
    fn corner_points_of_axis_aligned_rect() {
        let r = rect(10.0, 20.0, 6.0, 4.0, 0.0);
        let corners = r.corner_points();
        let xs: Vec<f32> = corners.iter().map(|p| p.x).collect();
        let ys: Vec<f32> = corners.iter().map(|p| p.y).collect();
        assert!(xs.iter().any(|&x| (x - 7.0).abs() < 1e-5));
        assert!(xs.iter().any(|&x| (x - 13.0).abs() < 1e-5));
        assert!(ys.iter().any(|&y| (y - 18.0).abs() < 1e-5));
        assert!(ys.iter().any(|&y| (y - 22.0).abs() < 1e-5));
    }

    #[test]
    fn pixel_height_follows_rotation() {
        let upright = rect(0.0, 0.0, 4.0, 10.0, 0.0);
        assert_relative_eq!(upright.pixel_height(), 10.0, epsilon = 1e-5);

        // Rotated a quarter turn, the long side lies along x.
        let sideways = rect(0.0, 0.0, 4.0, 10.0, 90.0);
        assert_relative_eq!(sideways.pixel_height(), 4.0, epsilon = 1e-4);
    }

    #[test]
    fn min_area_filter_drops_small_rects() {
        let rects = [
            rect(0.0, 0.0, 30.0, 80.0, 0.0),
            rect(5.0, 5.0, 10.0, 10.0, 0.0),
        ];
        let kept = filter_by_min_area(&rects, 200.0);
        assert_eq!(kept.len(), 1);
        assert_relative_eq!(kept[0].width, 30.0);
    }

    #[test]
    fn rect_and_facing_round_trip_through_json() {
        let r = rect(61.25, 241.25, 81.27, 28.46, -71.565);
        let json = serde_json::to_string(&r).expect("serialize");
        let back: OrientedRect = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, r);

        let facing: Facing = serde_json::from_str("\"Left\"").expect("facing");
        assert_eq!(facing, Facing::Left);
    }

    #[test]
    fn format_rects_is_stable() {
        let rects = [rect(20.0, 5.0, 10.0, 5.0, -89.0)];
        assert_eq!(
            format_rects(&rects),
            "[ ((20.00, 5.00), (10.00, 5.00), -89.0), ]"
        );
    }
}
