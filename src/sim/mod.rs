//! Simulation module
//!
//! All gameplay logic lives here:
//! - Variable timestep driven by the host's frame clock
//! - Injectable random source
//! - Stable iteration order (targets by spawn position)
//! - No rendering or platform dependencies

pub mod collision;
pub mod random;
pub mod state;
pub mod targets;
pub mod tick;
pub mod trail;

pub use collision::{PaddleBounce, Wall, ball_paddle_collision, ball_wall_collision};
pub use random::{RandomSource, SeededRandom};
pub use state::{Ball, GameState, Paddle, Scores};
pub use targets::{Target, TargetField, TargetHit, TargetKey};
pub use tick::{TickEvents, speed_multiplier, tick};
pub use trail::{Trail, TrailSample};
