//! Epsilon-robust primitives for wall segments.

use crate::{Point, Segment};

/// A point where two segments meet, with its parameter along each of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    pub point: Point,
    pub t_a: f64,
    pub t_b: f64,
}

/// Intersections between `seg_a` and `seg_b`.
///
/// Crossing segments meet at most once. Parallel or collinear segments
/// (determinant below `eps`) only meet where an endpoint of one lies on the
/// other, so an overlapping collinear pair can report up to four hits.
pub fn segment_intersections(seg_a: &Segment, seg_b: &Segment, eps: f64) -> Vec<SegmentHit> {
    let (x1, y1) = (seg_a.a.x, seg_a.a.y);
    let (x3, y3) = (seg_b.a.x, seg_b.a.y);

    let (dx1, dy1) = (seg_a.b.x - x1, seg_a.b.y - y1);
    let (dx2, dy2) = (seg_b.b.x - x3, seg_b.b.y - y3);
    let denom = dx1 * dy2 - dy1 * dx2;

    if denom.abs() < eps {
        return endpoint_touches(seg_a, seg_b, eps);
    }

    let t = ((x3 - x1) * dy2 - (y3 - y1) * dx2) / denom;
    let u = ((x3 - x1) * dy1 - (y3 - y1) * dx1) / denom;

    let range = -eps..=1.0 + eps;
    if !range.contains(&t) || !range.contains(&u) {
        return Vec::new();
    }

    let t = t.clamp(0.0, 1.0);
    let u = u.clamp(0.0, 1.0);
    vec![SegmentHit {
        point: Point::new(x1 + t * dx1, y1 + t * dy1),
        t_a: t,
        t_b: u,
    }]
}

fn endpoint_touches(seg_a: &Segment, seg_b: &Segment, eps: f64) -> Vec<SegmentHit> {
    let mut hits = Vec::new();

    for (point, t_b) in [(seg_b.a, 0.0), (seg_b.b, 1.0)] {
        if point_on_segment(&point, seg_a, eps) {
            hits.push(SegmentHit {
                point,
                t_a: project_param(seg_a, &point),
                t_b,
            });
        }
    }
    for (point, t_a) in [(seg_a.a, 0.0), (seg_a.b, 1.0)] {
        if point_on_segment(&point, seg_b, eps) {
            hits.push(SegmentHit {
                point,
                t_a,
                t_b: project_param(seg_b, &point),
            });
        }
    }

    hits
}

/// True when `point` lies on `seg` within `eps`.
///
/// The perpendicular distance to the supporting line must be within `eps`,
/// and the point must fall between the endpoints (dot product of the vectors
/// towards both endpoints is not positive beyond `eps`).
pub fn point_on_segment(point: &Point, seg: &Segment, eps: f64) -> bool {
    let (x1, y1) = (seg.a.x, seg.a.y);
    let (x2, y2) = (seg.b.x, seg.b.y);
    let (px, py) = (point.x, point.y);

    let length = seg.length();
    if length <= f64::EPSILON {
        return point.coincides(&seg.a, eps);
    }

    let cross = (px - x1) * (y2 - y1) - (py - y1) * (x2 - x1);
    if cross.abs() / length > eps {
        return false;
    }

    let dot = (px - x1) * (px - x2) + (py - y1) * (py - y2);
    dot <= eps
}

/// Parameter of the orthogonal projection of `point` onto `seg`, unclamped.
pub fn project_param(seg: &Segment, point: &Point) -> f64 {
    let dx = seg.b.x - seg.a.x;
    let dy = seg.b.y - seg.a.y;
    let denom = dx * dx + dy * dy;
    if denom == 0.0 {
        return 0.0;
    }
    ((point.x - seg.a.x) * dx + (point.y - seg.a.y) * dy) / denom
}
