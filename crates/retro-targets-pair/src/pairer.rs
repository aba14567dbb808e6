//! The pairing scan.
//!
//! A two-strip target shows up as a left-leaning rectangle followed (in
//! x) by a right-leaning one. The scan sorts the frame's rectangles by
//! center x and walks adjacent indices looking for that left→right
//! transition, keeping at most two matches.

use log::debug;

use retro_targets_core::{format_rects, Facing, OrientedRect};

use crate::types::{PairScan, RectPair, WantedTargets};

/// Scan `rects` for left/right strip pairs.
///
/// Returns at most two pairs, leftmost first. `pair2` is only filled
/// when `wanted_targets` is [`WantedTargets::Two`]; valid transitions
/// beyond the second are dropped. Input order does not matter — the
/// stable x-sort normalizes it. All failure paths yield
/// [`PairScan::none`]; nothing here panics.
pub fn pair_rectangles(rects: &[OrientedRect], wanted_targets: WantedTargets) -> PairScan {
    if rects.len() < 2 {
        debug!("not enough rects to form a pair: {}", rects.len());
        return PairScan::none();
    }

    let mut sorted: Vec<OrientedRect> = rects.to_vec();
    // Stable, so equal-x rects keep their input order.
    sorted.sort_by(|a, b| a.center.x.total_cmp(&b.center.x));
    debug!("x-sorted rects: {}", format_rects(&sorted));

    let mut pair1: Option<RectPair> = None;
    let mut pair2: Option<RectPair> = None;

    // A right-facing rect is never a scan origin; it can only close a
    // pair anchored at the left-facing rect before it.
    for i in 0..sorted.len() - 1 {
        if sorted[i].facing() != Facing::Left {
            continue;
        }
        debug!(
            "left rect at index {i}, corrected angle {:.1}; next has {:.1}",
            sorted[i].corrected_angle(),
            sorted[i + 1].corrected_angle()
        );
        if sorted[i + 1].facing() != Facing::Right {
            debug!("rect following the left rect at index {i} is not a right rect");
            continue;
        }

        debug!("valid rect pair at index {i}");
        let pair = RectPair {
            left: sorted[i],
            right: sorted[i + 1],
        };
        if pair1.is_none() {
            pair1 = Some(pair);
        } else if wanted_targets == WantedTargets::Two && pair2.is_none() {
            pair2 = Some(pair);
        }
    }

    match pair1 {
        None => PairScan::none(),
        Some(_) => {
            debug!("pair1: {pair1:?}, pair2: {pair2:?}");
            PairScan {
                found: true,
                pair1,
                pair2,
            }
        }
    }
}
