//! Target Pong - a single-paddle court where the ball pops growing targets
//!
//! Core modules:
//! - `sim`: Simulation (paddle, ball, walls, targets, trail)
//! - `renderer`: Vertex generation, view transforms and the wgpu pipeline
//! - `tuning`: Data-driven game balance
//! - `game`: Frame orchestrator tying input, update and draw together

pub mod game;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::{Game, InputEvent};
pub use renderer::Frame;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Court half-extents (walls sit just outside)
    pub const COURT_RADIUS: Vec2 = Vec2::new(7.0, 5.0);
    /// Paddle half-extents
    pub const PADDLE_RADIUS: Vec2 = Vec2::new(0.2, 1.0);
    /// Gap between the left wall and the paddle center at spawn
    pub const PADDLE_INSET: f32 = 0.5;
    /// Ball half-extents
    pub const BALL_RADIUS: Vec2 = Vec2::new(0.2, 0.2);
    /// Ball velocity at session start
    pub const BALL_START_VELOCITY: Vec2 = Vec2::new(-1.0, 0.0);

    /// Seconds a trail sample stays visible
    pub const TRAIL_LENGTH: f32 = 1.3;

    /// Fully grown target radius (also the half-size of its hit square)
    pub const TARGET_RADIUS_MAX: f32 = 0.3;
    /// Seconds for a target to grow from nothing to full size
    pub const TARGET_GROW_DURATION: f32 = 2.0;
    /// Seconds for a popped target to shrink away
    pub const TARGET_DECAY_DURATION: f32 = 0.5;
    /// Live targets kept on the court
    pub const TARGET_COUNT_MAX: u32 = 3;
    /// Half-extents of the rectangle targets spawn in
    pub const TARGET_SPAWN_RADIUS: Vec2 = Vec2::new(5.5, 3.5);

    /// Base speed multiplier at zero points
    pub const SPEED_BASE: f32 = 4.0;
    /// Combined points needed to double the speed
    pub const SPEED_DOUBLING_POINTS: f32 = 4.0;
    /// Velocity cap (higher multipliers let the ball pass through the paddle)
    pub const SPEED_MULTIPLIER_MAX: f32 = 10.0;

    /// Downward velocity change per second
    pub const GRAVITY: f32 = 2.0;
    /// Vertical velocity given to a ball wrapping past the top wall
    pub const TOP_WALL_RELAUNCH_VY: f32 = 2.0;
    /// Velocity of a ball respawned after popping a target
    pub const RESPAWN_VELOCITY: Vec2 = Vec2::new(0.5, 0.0);
    /// How strongly a side hit steers vertical velocity toward the hit offset
    pub const PADDLE_SPIN_BLEND: f32 = 0.75;

    /// Number of entries in the rainbow palette
    pub const PALETTE_SIZE: u32 = 10;

    // Drawing
    /// Wall half-thickness
    pub const WALL_RADIUS: f32 = 0.05;
    /// Drop shadow displacement below each solid
    pub const SHADOW_OFFSET: f32 = 0.07;
    /// Margin between the walls and the window edge
    pub const SCENE_PADDING: f32 = 0.14;
    /// Half-extents of a score pip
    pub const SCORE_RADIUS: Vec2 = Vec2::new(0.1, 0.1);
}

/// Axis-aligned box given by center and half-extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    #[inline]
    pub fn from_center(center: Vec2, radius: Vec2) -> Self {
        Self {
            min: center - radius,
            max: center + radius,
        }
    }

    /// Overlap rectangle, or `None` when the boxes are apart.
    /// Touching edges count as overlap (zero-width).
    pub fn intersection(&self, other: &Aabb) -> Option<Aabb> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        if min.x > max.x || min.y > max.y {
            return None;
        }
        Some(Aabb { min, max })
    }

    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.intersection(other).is_some()
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Linear blend, `a` at t=0 and `b` at t=1
#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
