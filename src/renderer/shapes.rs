//! Rasterization for 2D primitives

use glam::Vec2;

/// Clip the line `from -> to` to the box `[0, max.x] x [0, max.y]`
/// (Liang-Barsky). Returns `None` if nothing of the line is inside.
pub fn clip_line(from: Vec2, to: Vec2, max: Vec2) -> Option<(Vec2, Vec2)> {
    let d = to - from;
    let mut t0 = 0.0f32;
    let mut t1 = 1.0f32;

    let edges = [
        (-d.x, from.x),
        (d.x, max.x - from.x),
        (-d.y, from.y),
        (d.y, max.y - from.y),
    ];

    for (p, q) in edges {
        if p == 0.0 {
            // Parallel to this edge and outside it
            if q < 0.0 {
                return None;
            }
            continue;
        }

        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((from + d * t0, from + d * t1))
}

/// Visit every pixel of the integer line `(x0, y0) -> (x1, y1)`, both ends
/// included (Bresenham)
pub fn for_each_line_pixel(x0: i32, y0: i32, x1: i32, y1: i32, mut plot: impl FnMut(i32, i32)) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    let (mut x, mut y) = (x0, y0);
    let mut err = dx + dy;

    loop {
        plot(x, y);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixels(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for_each_line_pixel(x0, y0, x1, y1, |x, y| out.push((x, y)));
        out
    }

    #[test]
    fn test_horizontal_line() {
        assert_eq!(pixels(2, 5, 6, 5), vec![(2, 5), (3, 5), (4, 5), (5, 5), (6, 5)]);
    }

    #[test]
    fn test_reversed_vertical_line() {
        assert_eq!(pixels(1, 3, 1, 0), vec![(1, 3), (1, 2), (1, 1), (1, 0)]);
    }

    #[test]
    fn test_diagonal_line() {
        assert_eq!(pixels(0, 0, 3, 3), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_single_point() {
        assert_eq!(pixels(4, 4, 4, 4), vec![(4, 4)]);
    }

    #[test]
    fn test_steep_line_is_connected() {
        let line = pixels(0, 0, 3, 10);
        assert_eq!(line.len(), 11);
        for pair in line.windows(2) {
            assert!((pair[1].0 - pair[0].0).abs() <= 1);
            assert_eq!(pair[1].1 - pair[0].1, 1);
        }
    }

    #[test]
    fn test_clip_inside_is_unchanged() {
        let max = Vec2::new(99.0, 99.0);
        let (a, b) = clip_line(Vec2::new(10.0, 10.0), Vec2::new(50.0, 60.0), max).unwrap();
        assert_eq!(a, Vec2::new(10.0, 10.0));
        assert_eq!(b, Vec2::new(50.0, 60.0));
    }

    #[test]
    fn test_clip_long_ray() {
        let max = Vec2::new(99.0, 99.0);
        let (a, b) = clip_line(Vec2::new(50.0, 50.0), Vec2::new(3050.0, 50.0), max).unwrap();
        assert_eq!(a, Vec2::new(50.0, 50.0));
        assert!((b.x - 99.0).abs() < 1e-3);
        assert!((b.y - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_clip_outside_is_none() {
        let max = Vec2::new(99.0, 99.0);
        assert!(clip_line(Vec2::new(-50.0, -10.0), Vec2::new(200.0, -10.0), max).is_none());
        assert!(clip_line(Vec2::new(150.0, 0.0), Vec2::new(300.0, 90.0), max).is_none());
    }
}
