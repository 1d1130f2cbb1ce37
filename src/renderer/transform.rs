//! Court <-> clip space mapping
//!
//! The court is letterboxed into the window: the scene box (court, walls,
//! padding and the score row above the top wall) is scaled uniformly to fit
//! and centered.

use glam::{Affine2, Mat2, Mat4, UVec2, Vec2, Vec3};

use crate::Aabb;
use crate::consts::{SCENE_PADDING, SCORE_RADIUS, WALL_RADIUS};

/// Transform pair computed for one window size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub court_to_clip: Mat4,
    pub clip_to_court: Affine2,
    /// Window size the pair was computed for
    pub window_size: UVec2,
}

/// Box that must stay visible: court, walls, padding and the score row
pub fn scene_bounds(court_radius: Vec2) -> Aabb {
    let margin = 2.0 * WALL_RADIUS + SCENE_PADDING;
    Aabb {
        min: -court_radius - Vec2::splat(margin),
        max: court_radius + Vec2::splat(margin) + Vec2::new(0.0, 3.0 * SCORE_RADIUS.y),
    }
}

impl ViewTransform {
    /// A zero window dimension is treated as one pixel
    pub fn for_window(window_size: UVec2, court_radius: Vec2) -> Self {
        let size = window_size.max(UVec2::ONE).as_vec2();
        let aspect = size.x / size.y;

        let scene = scene_bounds(court_radius);
        let extent = scene.size();
        let center = (scene.min + scene.max) * 0.5;
        let scale = (2.0 * aspect / extent.x).min(2.0 / extent.y);

        let court_to_clip = Mat4::from_translation(Vec3::new(
            -center.x * scale / aspect,
            -center.y * scale,
            0.0,
        )) * Mat4::from_scale(Vec3::new(scale / aspect, scale, 1.0));

        let clip_to_court = Affine2::from_mat2_translation(
            Mat2::from_diagonal(Vec2::new(aspect / scale, 1.0 / scale)),
            center,
        );

        Self {
            court_to_clip,
            clip_to_court,
            window_size,
        }
    }

    pub fn court_to_clip_point(&self, p: Vec2) -> Vec2 {
        self.court_to_clip.transform_point3(p.extend(0.0)).truncate()
    }

    pub fn clip_to_court_point(&self, p: Vec2) -> Vec2 {
        self.clip_to_court.transform_point2(p)
    }

    /// Window pixel (top-left origin, y down) to court space
    pub fn window_to_court(&self, window_pos: Vec2) -> Vec2 {
        self.clip_to_court_point(window_to_clip(window_pos, self.window_size))
    }
}

/// Window pixel to clip space, sampling the pixel center
pub fn window_to_clip(window_pos: Vec2, window_size: UVec2) -> Vec2 {
    let size = window_size.max(UVec2::ONE).as_vec2();
    Vec2::new(
        (window_pos.x + 0.5) / size.x * 2.0 - 1.0,
        (window_pos.y + 0.5) / size.y * -2.0 + 1.0,
    )
}
