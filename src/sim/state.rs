//! Game state and core simulation types

use glam::Vec2;

use super::targets::TargetField;
use super::trail::Trail;
use crate::Aabb;
use crate::consts::*;
use crate::tuning::Tuning;

/// The ball: the only body allowed to leave the court between collision passes
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    /// Direction-bearing velocity; the speed multiplier scales it each tick
    pub vel: Vec2,
    /// Half-extents
    pub radius: Vec2,
}

impl Ball {
    pub fn new(radius: Vec2) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: BALL_START_VELOCITY,
            radius,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.radius)
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub pos: Vec2,
    /// Half-extents
    pub radius: Vec2,
}

impl Paddle {
    pub fn new(pos: Vec2, radius: Vec2) -> Self {
        Self { pos, radius }
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.radius)
    }

    /// Keep the paddle inside the court's vertical range
    pub fn clamp_y(&mut self, min_y: f32, max_y: f32) {
        self.pos.y = self.pos.y.max(min_y).min(max_y);
    }
}

/// Points scored by each side; never reset within a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scores {
    pub left: u32,
    pub right: u32,
}

impl Scores {
    pub fn total(&self) -> u32 {
        self.left + self.right
    }
}

/// Everything the simulation mutates between frames
#[derive(Debug, Clone)]
pub struct GameState {
    pub paddle: Paddle,
    pub ball: Ball,
    pub scores: Scores,
    pub targets: TargetField,
    pub trail: Trail,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh session: ball at rest in the middle, paddle near the left wall
    pub fn new(tuning: &Tuning) -> Self {
        let ball = Ball::new(tuning.ball_radius);
        let trail = Trail::new(ball.pos, tuning.trail_length);
        Self {
            paddle: Paddle::new(tuning.paddle_start(), tuning.paddle_radius),
            ball,
            scores: Scores::default(),
            targets: TargetField::new(),
            trail,
            time_ticks: 0,
        }
    }
}
