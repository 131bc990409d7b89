//! Ray fan casting
//!
//! Casts `resolution` rays evenly spaced over a full turn from one origin and
//! clips each to the nearest obstacle it crosses.

use glam::Vec2;
use std::f32::consts::TAU;

use super::intersect::intersect_distance;
use super::segment::Segment;
use crate::polar_to_cartesian;

/// Direction angle (radians) of ray `index` in a fan of `resolution` rays
#[inline]
pub fn ray_angle(index: usize, resolution: usize) -> f32 {
    TAU * (index as f32 / resolution as f32)
}

/// Nearest distance along `probe` to any bound, capped at `max_distance`
///
/// A candidate replaces the running best only when it is strictly positive
/// and strictly smaller, so the first of two equidistant bounds wins and a
/// bound passing through the origin is ignored.
pub fn nearest_hit(bounds: &[Segment], probe: &Segment, max_distance: f32) -> f32 {
    let mut min_distance = max_distance;
    for bound in bounds {
        if let Some(distance) = intersect_distance(probe, bound) {
            if distance < min_distance && distance > 0.0 {
                min_distance = distance;
            }
        }
    }
    min_distance
}

/// Cast a full fan of rays from `origin` against `bounds`
///
/// Ray 0 points along +x; angles increase with the index (clockwise on a
/// y-down screen). Returns exactly `resolution` rays, in index order, each
/// starting at `origin`.
pub fn cast_fan(
    bounds: &[Segment],
    origin: Vec2,
    resolution: usize,
    max_distance: f32,
) -> Vec<Segment> {
    let mut rays = Vec::with_capacity(resolution);

    for i in 0..resolution {
        let dir = ray_angle(i, resolution);
        let probe = Segment::new(origin, origin + polar_to_cartesian(max_distance, dir));
        let distance = nearest_hit(bounds, &probe, max_distance);
        rays.push(Segment::new(origin, origin + polar_to_cartesian(distance, dir)));
    }

    rays
}
