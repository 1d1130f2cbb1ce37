//! Frame orchestrator
//!
//! The host calls `handle_input` for each event, `update` once per frame with
//! the elapsed time, then `draw` with the current window size.

use glam::{UVec2, Vec2};

use crate::renderer::{Frame, ViewTransform, build_frame, window_to_clip};
use crate::sim::{GameState, RandomSource, SeededRandom, TickEvents, tick};
use crate::tuning::Tuning;

/// Input events the game reacts to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer position in window pixels, top-left origin, y down
    PointerMoved { x: f32, y: f32 },
    /// Anything else the host forwards
    Other,
}

/// One game session
pub struct Game {
    state: GameState,
    tuning: Tuning,
    rng: Box<dyn RandomSource>,
    /// Transform used by the most recent draw
    view: Option<ViewTransform>,
}

impl Game {
    /// New session seeded from process entropy
    pub fn new(tuning: Tuning) -> Self {
        let rng = SeededRandom::from_entropy();
        log::info!("New game, seed {}", rng.seed());
        Self::with_random(tuning, Box::new(rng))
    }

    /// New session drawing randomness from `rng`
    pub fn with_random(tuning: Tuning, rng: Box<dyn RandomSource>) -> Self {
        Self {
            state: GameState::new(&tuning),
            tuning,
            rng,
            view: None,
        }
    }

    /// React to one input event. Never consumes the event.
    pub fn handle_input(&mut self, event: &InputEvent, window_size: UVec2) -> bool {
        if let InputEvent::PointerMoved { x, y } = *event {
            let view = match self.view {
                Some(view) => view,
                None => ViewTransform::for_window(window_size, self.tuning.court_radius),
            };
            let clip = window_to_clip(Vec2::new(x, y), window_size);
            let court = view.clip_to_court_point(clip);

            self.state.paddle.pos.y = court.y;
            if self.tuning.paddle_tracks_pointer_x {
                self.state.paddle.pos.x = court.x;
            }
        }
        false
    }

    /// Advance the simulation by `elapsed` seconds
    pub fn update(&mut self, elapsed: f32) -> TickEvents {
        let events = tick(&mut self.state, &self.tuning, self.rng.as_mut(), elapsed);
        for hit in &events.hits {
            log::debug!(
                "Target {} popped, total score {}",
                hit.key.serial,
                self.state.scores.total()
            );
        }
        events
    }

    /// Build this frame's vertices and remember the transform for input mapping
    pub fn draw(&mut self, window_size: UVec2) -> Frame {
        let view = ViewTransform::for_window(window_size, self.tuning.court_radius);
        self.view = Some(view);
        build_frame(&self.state, self.tuning.court_radius, &view)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Transform recorded by the last `draw`, if any
    pub fn view(&self) -> Option<&ViewTransform> {
        self.view.as_ref()
    }
}
