//! Canonical PnP point ordering.
//!
//! A pose solver needs the 2D image points in a fixed order matching its
//! 3D model points. For a two-strip target the convention is six points:
//! three from the left strip, three from the right.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// The six target points in canonical PnP order.
///
/// Index layout (see the associated constants):
///
/// ```text
///     0-------1         3-------4
///             |         |
///             |         |
///             2         5
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PnpPoints(pub [Point2<f32>; 6]);

impl PnpPoints {
    pub const LEFT_TOP_LEFT: usize = 0;
    pub const LEFT_TOP_RIGHT: usize = 1;
    pub const LEFT_BOTTOM_RIGHT: usize = 2;
    pub const RIGHT_TOP_LEFT: usize = 3;
    pub const RIGHT_TOP_RIGHT: usize = 4;
    pub const RIGHT_BOTTOM_LEFT: usize = 5;

    pub fn as_slice(&self) -> &[Point2<f32>] {
        &self.0
    }
}

fn sort_by_y(points: &mut [Point2<f32>]) {
    points.sort_by(|a, b| a.y.total_cmp(&b.y));
}

fn sort_by_x(points: &mut [Point2<f32>]) {
    points.sort_by(|a, b| a.x.total_cmp(&b.x));
}

/// Order a matched pair's corner points into canonical PnP order.
///
/// Each side's four corners are split into a top and a bottom pair by y,
/// each pair is sorted by x, and six of the eight points are emitted:
/// the left strip's top-left, top-right and bottom-right, then the right
/// strip's top-left, top-right and bottom-left. Exact y (or x) ties
/// within a side fall back to the stable sort's order.
pub fn order_points(left: [Point2<f32>; 4], right: [Point2<f32>; 4]) -> PnpPoints {
    let mut left = left;
    let mut right = right;
    sort_by_y(&mut left);
    sort_by_y(&mut right);

    let (top_l, bot_l) = left.split_at_mut(2);
    let (top_r, bot_r) = right.split_at_mut(2);
    sort_by_x(top_l);
    sort_by_x(bot_l);
    sort_by_x(top_r);
    sort_by_x(bot_r);

    PnpPoints([top_l[0], top_l[1], bot_l[1], top_r[0], top_r[1], bot_r[0]])
}

/// Estimate the target center from PnP-ordered points.
///
/// Takes the x midpoint between the left strip's top-right corner and
/// the right strip's top-left corner, at the former's y. Known
/// limitation: drifts when the target is rotated relative to the camera.
pub fn center_from_points(points: &PnpPoints) -> Point2<f32> {
    let l_top_right = points.0[PnpPoints::LEFT_TOP_RIGHT];
    let r_top_left = points.0[PnpPoints::RIGHT_TOP_LEFT];
    Point2::new((l_top_right.x + r_top_left.x) * 0.5, l_top_right.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pts(raw: [(f32, f32); 4]) -> [Point2<f32>; 4] {
        raw.map(|(x, y)| Point2::new(x, y))
    }

    #[test]
    fn orders_reference_corners() {
        let left = pts([(2.0, 1.0), (2.0, 4.0), (1.0, 3.0), (3.0, 2.0)]);
        let right = pts([(7.0, 1.0), (8.0, 3.0), (6.0, 2.0), (7.0, 4.0)]);
        let ordered = order_points(left, right);
        let expected = [
            (2.0, 1.0),
            (3.0, 2.0),
            (2.0, 4.0),
            (6.0, 2.0),
            (7.0, 1.0),
            (7.0, 4.0),
        ];
        for (got, want) in ordered.0.iter().zip(expected) {
            assert_relative_eq!(got.x, want.0);
            assert_relative_eq!(got.y, want.1);
        }
    }

    #[test]
    fn always_emits_six_points() {
        let left = pts([(0.0, 0.0), (1.0, 0.1), (0.1, 2.0), (1.1, 2.1)]);
        let right = pts([(5.0, 0.2), (6.0, 0.0), (5.1, 2.2), (6.1, 2.0)]);
        assert_eq!(order_points(left, right).as_slice().len(), 6);
    }

    #[test]
    fn center_sits_between_inner_top_corners() {
        let left = pts([(2.0, 1.0), (2.0, 4.0), (1.0, 3.0), (3.0, 2.0)]);
        let right = pts([(7.0, 1.0), (8.0, 3.0), (6.0, 2.0), (7.0, 4.0)]);
        let ordered = order_points(left, right);
        let center = center_from_points(&ordered);
        // inner corners are (3,2) and (6,2)
        assert_relative_eq!(center.x, 4.5);
        assert_relative_eq!(center.y, 2.0);
    }
}
