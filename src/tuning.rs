//! Game balance parameters
//!
//! Defaults come from [`crate::consts`]; a JSON file can override any subset.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable court, paddle, ball and target parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Court half-extents
    pub court_radius: Vec2,
    /// Paddle half-extents
    pub paddle_radius: Vec2,
    /// Ball half-extents
    pub ball_radius: Vec2,
    /// Seconds a trail sample stays visible
    pub trail_length: f32,
    /// Fully grown target radius
    pub target_radius_max: f32,
    /// Seconds from spawn to fully grown
    pub target_grow_duration: f32,
    /// Seconds from pop to gone
    pub target_decay_duration: f32,
    /// Live targets kept on the court
    pub target_count_max: u32,
    /// Half-extents of the target spawn rectangle
    pub target_spawn_radius: Vec2,
    /// Pointer motion also moves the paddle horizontally
    pub paddle_tracks_pointer_x: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            court_radius: COURT_RADIUS,
            paddle_radius: PADDLE_RADIUS,
            ball_radius: BALL_RADIUS,
            trail_length: TRAIL_LENGTH,
            target_radius_max: TARGET_RADIUS_MAX,
            target_grow_duration: TARGET_GROW_DURATION,
            target_decay_duration: TARGET_DECAY_DURATION,
            target_count_max: TARGET_COUNT_MAX,
            target_spawn_radius: TARGET_SPAWN_RADIUS,
            paddle_tracks_pointer_x: true,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load tuning from a JSON file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    return tuning;
                }
                Err(e) => log::warn!("Invalid tuning file {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read tuning file {}: {}", path.display(), e),
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Vertical range the paddle center may occupy
    pub fn paddle_y_range(&self) -> (f32, f32) {
        (
            -self.court_radius.y + self.paddle_radius.y,
            self.court_radius.y - self.paddle_radius.y,
        )
    }

    /// Paddle center at session start
    pub fn paddle_start(&self) -> Vec2 {
        Vec2::new(-self.court_radius.x + PADDLE_INSET, 0.0)
    }

    /// Radius change per second while growing
    pub fn grow_rate(&self) -> f32 {
        self.target_radius_max / self.target_grow_duration
    }

    /// Radius change per second while disappearing
    pub fn decay_rate(&self) -> f32 {
        self.target_radius_max / self.target_decay_duration
    }
}
