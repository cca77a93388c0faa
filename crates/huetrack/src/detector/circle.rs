//! Minimal enclosing circle via Welzl's move-to-front construction.

use imageproc::point::Point;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Containment slack for accumulated floating-point error.
const EPS: f64 = 1e-7;

/// Fixed shuffle seed so identical contours give identical circles.
const SHUFFLE_SEED: u64 = 0x00c0_ffee;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Circle {
    pub center: [f64; 2],
    pub radius: f64,
}

impl Circle {
    fn from_point(p: [f64; 2]) -> Self {
        Self {
            center: p,
            radius: 0.0,
        }
    }

    fn from_two(a: [f64; 2], b: [f64; 2]) -> Self {
        let center = [(a[0] + b[0]) / 2.0, (a[1] + b[1]) / 2.0];
        Self {
            center,
            radius: dist(center, a),
        }
    }

    /// Circumcircle of a non-degenerate triangle.
    fn circumscribed(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> Option<Self> {
        let d = 2.0 * (a[0] * (b[1] - c[1]) + b[0] * (c[1] - a[1]) + c[0] * (a[1] - b[1]));
        if d.abs() < 1e-12 {
            return None;
        }
        let a2 = a[0] * a[0] + a[1] * a[1];
        let b2 = b[0] * b[0] + b[1] * b[1];
        let c2 = c[0] * c[0] + c[1] * c[1];
        let center = [
            (a2 * (b[1] - c[1]) + b2 * (c[1] - a[1]) + c2 * (a[1] - b[1])) / d,
            (a2 * (c[0] - b[0]) + b2 * (a[0] - c[0]) + c2 * (b[0] - a[0])) / d,
        ];
        Some(Self {
            center,
            radius: dist(center, a),
        })
    }

    fn contains(&self, p: [f64; 2]) -> bool {
        dist(self.center, p) <= self.radius + EPS
    }
}

fn dist(a: [f64; 2], b: [f64; 2]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    (dx * dx + dy * dy).sqrt()
}

/// Fallback for collinear triples: the circle over the farthest pair.
fn widest_pair_circle(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> Circle {
    let pairs = [(a, b), (a, c), (b, c)];
    let (p, q) = pairs
        .into_iter()
        .max_by(|(p1, q1), (p2, q2)| dist(*p1, *q1).total_cmp(&dist(*p2, *q2)))
        .expect("three candidate pairs");
    Circle::from_two(p, q)
}

/// Minimal enclosing circle over integer contour points.
///
/// Expected linear time in the number of points thanks to the seeded
/// shuffle; an empty input yields a zero circle at the origin.
pub(crate) fn min_enclosing_circle(points: &[Point<i32>]) -> Circle {
    let mut pts: Vec<[f64; 2]> = points.iter().map(|p| [p.x as f64, p.y as f64]).collect();
    if pts.is_empty() {
        return Circle {
            center: [0.0, 0.0],
            radius: 0.0,
        };
    }
    let mut rng = StdRng::seed_from_u64(SHUFFLE_SEED);
    pts.shuffle(&mut rng);

    let mut circle = Circle::from_point(pts[0]);
    for i in 1..pts.len() {
        if circle.contains(pts[i]) {
            continue;
        }
        circle = Circle::from_point(pts[i]);
        for j in 0..i {
            if circle.contains(pts[j]) {
                continue;
            }
            circle = Circle::from_two(pts[i], pts[j]);
            for k in 0..j {
                if circle.contains(pts[k]) {
                    continue;
                }
                circle = Circle::circumscribed(pts[i], pts[j], pts[k])
                    .unwrap_or_else(|| widest_pair_circle(pts[i], pts[j], pts[k]));
            }
        }
    }
    circle
}
