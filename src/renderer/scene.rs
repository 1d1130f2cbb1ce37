//! Per-frame scene assembly: game state in, court-space triangles out

use glam::{Mat4, Vec2};

use super::shapes::{circle, rectangle, trail};
use super::transform::ViewTransform;
use super::vertex::{Color, Vertex, colors};
use crate::consts::{SCORE_RADIUS, SHADOW_OFFSET, WALL_RADIUS};
use crate::sim::{GameState, Target, TargetKey};

/// Everything the host needs to put one frame on screen
#[derive(Debug, Clone)]
pub struct Frame {
    /// Triangle list in court space, in draw order
    pub vertices: Vec<Vertex>,
    pub court_to_clip: Mat4,
    pub clear_color: Color,
}

/// Court walls as (center, half-extents): left, right, bottom, top
fn walls(court_radius: Vec2) -> [(Vec2, Vec2); 4] {
    let side = Vec2::new(WALL_RADIUS, court_radius.y + 2.0 * WALL_RADIUS);
    let floor = Vec2::new(court_radius.x, WALL_RADIUS);
    [
        (Vec2::new(-court_radius.x - WALL_RADIUS, 0.0), side),
        (Vec2::new(court_radius.x + WALL_RADIUS, 0.0), side),
        (Vec2::new(0.0, -court_radius.y - WALL_RADIUS), floor),
        (Vec2::new(0.0, court_radius.y + WALL_RADIUS), floor),
    ]
}

/// Rainbow disc with a background-colored hole
fn target_ring(out: &mut Vec<Vertex>, key: &TargetKey, target: &Target) {
    let r = target.radius.x;
    if r <= 0.0 {
        return;
    }
    circle(out, key.pos, 2.0 * r, colors::rainbow(target.color));
    circle(out, key.pos, r, colors::BACKGROUND);
}

/// Center of score pip `index`, counted inward from the left or right edge
pub fn score_pip_center(court_radius: Vec2, index: u32, right: bool) -> Vec2 {
    let dx = (2.0 + 3.0 * index as f32) * SCORE_RADIUS.x;
    let x = if right {
        court_radius.x - dx
    } else {
        -court_radius.x + dx
    };
    Vec2::new(x, court_radius.y + 2.0 * WALL_RADIUS + 2.0 * SCORE_RADIUS.y)
}

/// Build the frame's vertex list back to front
pub fn build_frame(state: &GameState, court_radius: Vec2, view: &ViewTransform) -> Frame {
    let mut vertices = Vec::new();

    for (key, target) in state.targets.growing() {
        target_ring(&mut vertices, key, target);
    }
    for (key, target) in state.targets.disappearing() {
        target_ring(&mut vertices, key, target);
    }

    let walls = walls(court_radius);

    let s = Vec2::new(0.0, -SHADOW_OFFSET);
    for (center, radius) in walls {
        rectangle(&mut vertices, center + s, radius, colors::SHADOW);
    }
    rectangle(&mut vertices, state.paddle.pos + s, state.paddle.radius, colors::SHADOW);
    circle(&mut vertices, state.ball.pos + s, state.ball.radius.x, colors::SHADOW);

    for (center, radius) in walls {
        rectangle(&mut vertices, center, radius, colors::FOREGROUND);
    }

    rectangle(&mut vertices, state.paddle.pos, state.paddle.radius, colors::BALL);

    trail(&mut vertices, &state.trail, state.ball.radius, colors::BALL);

    circle(&mut vertices, state.ball.pos, state.ball.radius.x, colors::BALL);

    for i in 0..state.scores.left {
        let center = score_pip_center(court_radius, i, false);
        rectangle(&mut vertices, center, SCORE_RADIUS, colors::FOREGROUND);
    }
    for i in 0..state.scores.right {
        let center = score_pip_center(court_radius, i, true);
        rectangle(&mut vertices, center, SCORE_RADIUS, colors::FOREGROUND);
    }

    Frame {
        vertices,
        court_to_clip: view.court_to_clip,
        clear_color: colors::BACKGROUND,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::renderer::shapes::CIRCLE_STEPS;
    use glam::UVec2;

    const CIRCLE: usize = CIRCLE_STEPS as usize * 3;
    const RECT: usize = 6;

    fn fresh() -> (GameState, Tuning, ViewTransform) {
        let tuning = Tuning::default();
        let state = GameState::new(&tuning);
        let view = ViewTransform::for_window(UVec2::new(800, 600), tuning.court_radius);
        (state, tuning, view)
    }

    #[test]
    fn test_empty_court_frame() {
        let (state, tuning, view) = fresh();
        let frame = build_frame(&state, tuning.court_radius, &view);
        // 4 wall shadows + paddle shadow + ball shadow + 4 walls + paddle + ball
        assert_eq!(frame.vertices.len(), 10 * RECT + 2 * CIRCLE);
        assert_eq!(frame.clear_color, colors::BACKGROUND);
        assert_eq!(frame.court_to_clip, view.court_to_clip);

        // Shadows come first and sit below their solids
        assert_eq!(frame.vertices[0].color, colors::SHADOW);
        let last = frame.vertices.last().map(|v| v.color);
        assert_eq!(last, Some(colors::BALL));
    }

    #[test]
    fn test_targets_drawn_first_as_rings() {
        let (mut state, tuning, view) = fresh();
        let key = state.targets.spawn(Vec2::new(1.0, 1.0), 3);
        assert!(state.targets.set_growing_radius(&key, 0.25));
        // Zero radius target draws nothing
        state.targets.spawn(Vec2::new(-1.0, 1.0), 4);

        let frame = build_frame(&state, tuning.court_radius, &view);
        assert_eq!(frame.vertices.len(), 10 * RECT + 4 * CIRCLE);
        assert_eq!(frame.vertices[0].color, colors::rainbow(3));
        assert_eq!(frame.vertices[CIRCLE].color, colors::BACKGROUND);
        assert_eq!(frame.vertices[2 * CIRCLE].color, colors::SHADOW);

        // Outer edge of the ring at twice the radius
        let edge = frame.vertices[1];
        let d = Vec2::new(edge.position[0], edge.position[1]) - key.pos;
        assert!((d.length() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_score_pips() {
        let (mut state, tuning, view) = fresh();
        state.scores.left = 2;
        state.scores.right = 1;
        let frame = build_frame(&state, tuning.court_radius, &view);
        assert_eq!(frame.vertices.len(), 13 * RECT + 2 * CIRCLE);

        let pip = score_pip_center(tuning.court_radius, 1, false);
        assert!((pip - Vec2::new(-7.0 + 0.5, 5.0 + 0.1 + 0.2)).abs().max_element() < 1e-5);
        let pip = score_pip_center(tuning.court_radius, 0, true);
        assert!((pip - Vec2::new(7.0 - 0.2, 5.3)).abs().max_element() < 1e-5);
    }

    #[test]
    fn test_walls_frame_court() {
        let close = |a: Vec2, b: Vec2| (a - b).abs().max_element() < 1e-5;
        let w = walls(Vec2::new(7.0, 5.0));
        assert!(close(w[0].0, Vec2::new(-7.05, 0.0)));
        assert!(close(w[1].1, Vec2::new(0.05, 5.1)));
        assert!(close(w[3].0, Vec2::new(0.0, 5.05)));
        assert!(close(w[2].1, Vec2::new(7.0, 0.05)));
    }
}
