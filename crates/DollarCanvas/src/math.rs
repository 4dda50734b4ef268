//! Point-to-segment geometry backing the hit tester.

use glam::Vec2;

/// Projects `p` onto the infinite line through `a` and `b` and returns the
/// line parameter `t` (`0.0` at `a`, `1.0` at `b`) when the projection falls
/// within the segment's span.
///
/// A degenerate segment (`a == b`) has no usable projection; the zero-length
/// case must never divide, so it reports `None` exactly like an off-span
/// projection.
pub fn project_onto_segment(p: Vec2, a: Vec2, b: Vec2) -> Option<f32> {
    let seg = b - a;
    let len_sq = seg.length_squared();
    if len_sq == 0.0 {
        return None;
    }
    let t = (p - a).dot(seg) / len_sq;
    (0.0..=1.0).contains(&t).then_some(t)
}

/// Perpendicular distance from `p` to the segment `a..b`.
///
/// `None` when the projection falls off the span: the pair is then not a
/// candidate at all, rather than being measured to the closest endpoint.
pub fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> Option<f32> {
    let t = project_onto_segment(p, a, b)?;
    let closest = a + (b - a) * t;
    Some(p.distance(closest))
}
