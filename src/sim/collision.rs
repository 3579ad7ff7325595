//! Circle overlap and surface bounds

use glam::Vec2;

/// Whether two circles overlap. Touching circles (distance exactly equal
/// to the sum of radii) do not.
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// Keep a circle of `radius` inside `[radius, size - radius]` on both axes.
///
/// On a surface narrower than the circle the upper bound wins, matching a
/// max-then-min clamp rather than panicking like `f32::clamp`.
#[inline]
pub fn clamp_to_surface(pos: Vec2, radius: f32, surface: Vec2) -> Vec2 {
    Vec2::new(
        pos.x.max(radius).min(surface.x - radius),
        pos.y.max(radius).min(surface.y - radius),
    )
}
