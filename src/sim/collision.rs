//! Collision detection and response for the paddle and court walls
//!
//! Everything is axis-aligned: the ball, the paddle and the walls are boxes.
//! Responses push the ball out along one axis and fix the sign of the matching
//! velocity component.

use glam::Vec2;

use super::state::{Ball, Paddle};
use crate::consts::{PADDLE_SPIN_BLEND, TOP_WALL_RELAUNCH_VY};
use crate::mix;

/// Which way the ball left the paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleBounce {
    /// Overlap wider than tall: pushed off the top or bottom face
    Vertical,
    /// Overlap taller than wide: pushed off a side face, with spin
    Horizontal,
}

/// Court wall the ball crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Top,
    Bottom,
    Right,
    Left,
}

/// Resolve ball vs paddle overlap
///
/// Returns `None` if the boxes do not overlap.
pub fn ball_paddle_collision(ball: &mut Ball, paddle: &Paddle) -> Option<PaddleBounce> {
    let overlap = paddle.bounds().intersection(&ball.bounds())?;
    let size = overlap.size();
    let reach = paddle.radius + ball.radius;

    if size.x > size.y {
        if ball.pos.y > paddle.pos.y {
            ball.pos.y = paddle.pos.y + paddle.radius.y + ball.radius.y;
            ball.vel.y = ball.vel.y.abs();
        } else {
            ball.pos.y = paddle.pos.y - paddle.radius.y - ball.radius.y;
            ball.vel.y = -ball.vel.y.abs();
        }
        Some(PaddleBounce::Vertical)
    } else {
        if ball.pos.x > paddle.pos.x {
            ball.pos.x = paddle.pos.x + paddle.radius.x + ball.radius.x;
            ball.vel.x = ball.vel.x.abs();
        } else {
            ball.pos.x = paddle.pos.x - paddle.radius.x - ball.radius.x;
            ball.vel.x = -ball.vel.x.abs();
        }
        // Steer vertical velocity by where on the paddle face the ball landed
        let offset = (ball.pos.y - paddle.pos.y) / reach.y;
        ball.vel.y = mix(ball.vel.y, offset, PADDLE_SPIN_BLEND);
        Some(PaddleBounce::Horizontal)
    }
}

/// Resolve ball vs court walls; at most one wall per tick, checked
/// top, bottom, right, left.
///
/// Crossing the top or bottom wraps the ball to the opposite side. The top
/// relaunches it upward; the bottom leaves it with no vertical speed.
pub fn ball_wall_collision(ball: &mut Ball, court_radius: Vec2) -> Option<Wall> {
    if ball.pos.y > court_radius.y {
        ball.pos.y = -court_radius.y + ball.radius.y;
        ball.vel.y = TOP_WALL_RELAUNCH_VY;
        Some(Wall::Top)
    } else if ball.pos.y < -court_radius.y {
        ball.pos.y = court_radius.y - ball.radius.y;
        ball.vel.y = 0.0;
        Some(Wall::Bottom)
    } else if ball.pos.x > court_radius.x - ball.radius.x {
        ball.pos.x = court_radius.x - ball.radius.x;
        if ball.vel.x > 0.0 {
            ball.vel.x = -ball.vel.x;
        }
        Some(Wall::Right)
    } else if ball.pos.x < -court_radius.x + ball.radius.x {
        ball.pos.x = -court_radius.x + ball.radius.x;
        if ball.vel.x < 0.0 {
            ball.vel.x = -ball.vel.x;
        }
        Some(Wall::Left)
    } else {
        None
    }
}
