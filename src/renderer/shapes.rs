//! Shape generation for 2D primitives
//!
//! Every emitter appends triangle-list vertices in court space to `out`.

use glam::Vec2;

use super::vertex::{Color, Vertex, with_alpha};
use crate::sim::Trail;

/// Fan triangles per circle, one per whole degree
pub const CIRCLE_STEPS: u32 = 360;

/// Axis-aligned box as two counter-clockwise triangles
pub fn rectangle(out: &mut Vec<Vertex>, center: Vec2, radius: Vec2, color: Color) {
    let min = center - radius;
    let max = center + radius;

    out.push(Vertex::new(min.x, min.y, color));
    out.push(Vertex::new(max.x, min.y, color));
    out.push(Vertex::new(max.x, max.y, color));

    out.push(Vertex::new(min.x, min.y, color));
    out.push(Vertex::new(max.x, max.y, color));
    out.push(Vertex::new(min.x, max.y, color));
}

/// Filled circle as a triangle fan; nothing is emitted for `radius <= 0`
pub fn circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: Color) {
    if radius <= 0.0 {
        return;
    }
    out.reserve((CIRCLE_STEPS * 3) as usize);

    for degree in 0..CIRCLE_STEPS {
        let theta1 = (degree as f32).to_radians();
        let theta2 = ((degree + 1) as f32).to_radians();

        out.push(Vertex::new(center.x, center.y, color));
        out.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        out.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }
}

/// Ball trail as a ribbon that thins and fades with sample age
pub fn trail(out: &mut Vec<Vertex>, trail: &Trail, ball_radius: Vec2, color: Color) {
    let length = trail.length();
    let freshness = |age: f32| {
        if length > 0.0 {
            (1.0 - age / length).clamp(0.0, 1.0)
        } else {
            0.0
        }
    };

    let samples: Vec<_> = trail.iter().copied().collect();
    for pair in samples.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);
        let f1 = freshness(p1.age);
        let f2 = freshness(p2.age);
        if f1 <= 0.0 && f2 <= 0.0 {
            continue;
        }

        let dir = (p2.pos - p1.pos).normalize_or_zero();
        if dir == Vec2::ZERO {
            continue;
        }
        // Perpendicular for width
        let perp = Vec2::new(-dir.y, dir.x);
        // Ball extent along `perp`, exact for a round ball
        let weights = perp.abs();
        let half_width = weights.dot(ball_radius) / weights.element_sum();

        let color1 = with_alpha(color, (f1 * 255.0).round() as u8);
        let color2 = with_alpha(color, (f2 * 255.0).round() as u8);

        let v1a = p1.pos + perp * half_width * f1;
        let v1b = p1.pos - perp * half_width * f1;
        let v2a = p2.pos + perp * half_width * f2;
        let v2b = p2.pos - perp * half_width * f2;

        out.push(Vertex::new(v1a.x, v1a.y, color1));
        out.push(Vertex::new(v1b.x, v1b.y, color1));
        out.push(Vertex::new(v2a.x, v2a.y, color2));

        out.push(Vertex::new(v2a.x, v2a.y, color2));
        out.push(Vertex::new(v1b.x, v1b.y, color1));
        out.push(Vertex::new(v2b.x, v2b.y, color2));
    }
}
