//! Ray/bound intersection
//!
//! Solves the two-line parametric intersection with the 2x2 determinant
//! (cross product) method. For ray `p1 -> p2` and bound `p3 -> p4`:
//!
//! ```text
//! r = p2 - p1, s = p4 - p3
//! denominator = r x s
//! t = ((p3 - p1) x s) / denominator   (along the ray)
//! u = ((p3 - p1) x r) / denominator   (along the bound)
//! ```
//!
//! A hit requires both parameters in `[0, 1]`, inclusive, with no epsilon.

use super::segment::Segment;

/// Raw `(t, u)` parameters of the intersection of the two supporting lines
///
/// Returns `None` when the lines are parallel or collinear (zero
/// denominator). The parameters are not range checked.
#[inline]
pub fn intersect_params(ray: &Segment, bound: &Segment) -> Option<(f32, f32)> {
    let r = ray.delta();
    let s = bound.delta();

    let denominator = r.perp_dot(s);
    if denominator == 0.0 {
        return None;
    }

    let q = bound.a - ray.a;
    let t = q.perp_dot(s) / denominator;
    let u = q.perp_dot(r) / denominator;
    Some((t, u))
}

/// Distance from the ray origin to where it crosses `bound`
///
/// `None` if the segments are parallel, or the crossing lies outside either
/// segment (including behind the ray origin).
pub fn intersect_distance(ray: &Segment, bound: &Segment) -> Option<f32> {
    let (t, u) = intersect_params(ray, bound)?;

    if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
        return None;
    }

    Some(ray.a.distance(ray.point_at(t)))
}
