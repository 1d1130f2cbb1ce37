//! Per-frame simulation step
//!
//! Order matters and is fixed: paddle clamp, ball advance, paddle, walls,
//! target hits, gravity, target spawn, target grow, target decay, trail.

use glam::Vec2;

use super::collision::{PaddleBounce, Wall, ball_paddle_collision, ball_wall_collision};
use super::random::RandomSource;
use super::state::{Ball, GameState, Scores};
use super::targets::{TargetHit, TargetKey};
use crate::consts::*;
use crate::tuning::Tuning;

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickEvents {
    pub paddle: Option<PaddleBounce>,
    pub wall: Option<Wall>,
    /// Targets popped this tick, in processing order
    pub hits: Vec<TargetHit>,
    pub spawned: Option<TargetKey>,
}

/// Ball speed scale: doubles every four combined points, capped so the ball
/// cannot skip over the paddle in one tick
pub fn speed_multiplier(scores: &Scores) -> f32 {
    let doublings = scores.total() as f32 / SPEED_DOUBLING_POINTS;
    (SPEED_BASE * 2.0_f32.powf(doublings)).min(SPEED_MULTIPLIER_MAX)
}

/// Put the ball back at the top of the court at a random x between the walls
fn respawn_ball(ball: &mut Ball, court_radius: Vec2, rng: &mut dyn RandomSource) {
    let reach = court_radius.x - ball.radius.x;
    ball.pos = Vec2::new(
        -reach + rng.unit() * 2.0 * reach,
        court_radius.y - ball.radius.y,
    );
    ball.vel = RESPAWN_VELOCITY;
}

/// Advance the game state by `dt` seconds
pub fn tick(
    state: &mut GameState,
    tuning: &Tuning,
    rng: &mut dyn RandomSource,
    dt: f32,
) -> TickEvents {
    let mut events = TickEvents::default();
    state.time_ticks += 1;

    let (min_y, max_y) = tuning.paddle_y_range();
    state.paddle.clamp_y(min_y, max_y);

    let speed = speed_multiplier(&state.scores);
    state.ball.pos += dt * speed * state.ball.vel;

    events.paddle = ball_paddle_collision(&mut state.ball, &state.paddle);
    events.wall = ball_wall_collision(&mut state.ball, tuning.court_radius);

    // Every popped target respawns the ball, so later targets in the scan are
    // tested against the new position
    let mut after = None;
    while let Some(hit) =
        state
            .targets
            .pop_next_hit(&state.ball.bounds(), tuning.target_radius_max, after)
    {
        state.scores.left += 1;
        respawn_ball(&mut state.ball, tuning.court_radius, rng);
        log::debug!(
            "Score {}:{}, ball respawned at x={:.2}",
            state.scores.left,
            state.scores.right,
            state.ball.pos.x
        );
        after = Some(hit.key);
        events.hits.push(hit);
    }

    state.ball.vel.y -= GRAVITY * dt;

    if state.targets.live_count() < tuning.target_count_max {
        let spawn = tuning.target_spawn_radius;
        let pos = Vec2::new(
            -spawn.x + rng.unit() * 2.0 * spawn.x,
            -spawn.y + rng.unit() * 2.0 * spawn.y,
        );
        let color = rng.below(PALETTE_SIZE) as u8;
        events.spawned = Some(state.targets.spawn(pos, color));
    }

    state
        .targets
        .grow(dt, tuning.grow_rate(), tuning.target_radius_max);
    state.targets.decay(dt, tuning.decay_rate());

    state.trail.record(state.ball.pos, dt);

    log::trace!(
        "tick {}: ball=({:.3}, {:.3}) vel=({:.3}, {:.3}) x{:.2}",
        state.time_ticks,
        state.ball.pos.x,
        state.ball.pos.y,
        state.ball.vel.x,
        state.ball.vel.y,
        speed
    );

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::SeededRandom;
    use crate::sim::random::testing::ScriptedRandom;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    fn small_tuning() -> Tuning {
        Tuning {
            paddle_radius: Vec2::new(0.2, 0.2),
            ball_radius: Vec2::new(0.1, 0.1),
            ..Tuning::default()
        }
    }

    #[test]
    fn test_speed_multiplier_curve() {
        assert_eq!(speed_multiplier(&Scores { left: 0, right: 0 }), 4.0);
        assert_eq!(speed_multiplier(&Scores { left: 4, right: 0 }), 8.0);
        assert_eq!(speed_multiplier(&Scores { left: 2, right: 2 }), 8.0);
        assert_eq!(speed_multiplier(&Scores { left: 8, right: 0 }), 10.0);
        assert_eq!(speed_multiplier(&Scores { left: 500, right: 500 }), 10.0);
    }

    #[test]
    fn test_paddle_bounce_scenario() {
        let tuning = small_tuning();
        let mut state = GameState::new(&tuning);
        let mut rng = SeededRandom::new(1);
        state.paddle.pos = Vec2::new(0.0, 1.0);
        state.ball.pos = Vec2::new(0.0, 1.25);
        state.ball.vel = Vec2::new(0.0, -1.0);

        let events = tick(&mut state, &tuning, &mut rng, 0.01);

        assert_eq!(events.paddle, Some(PaddleBounce::Vertical));
        assert!(state.ball.vel.y > 0.0);
        assert_eq!(
            state.ball.pos.y,
            state.paddle.pos.y + tuning.paddle_radius.y + tuning.ball_radius.y
        );
    }

    #[test]
    fn test_top_wall_scenario_in_tick() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        let mut rng = SeededRandom::new(2);
        state.ball.pos = Vec2::new(0.0, tuning.court_radius.y - 0.01);
        state.ball.vel = Vec2::new(0.0, 5.0);

        let events = tick(&mut state, &tuning, &mut rng, DT);

        assert_eq!(events.wall, Some(Wall::Top));
        assert_eq!(
            state.ball.pos.y,
            -tuning.court_radius.y + tuning.ball_radius.y
        );
        // Relaunch speed minus one tick of gravity
        assert!((state.ball.vel.y - (2.0 - GRAVITY * DT)).abs() < 1e-6);
    }

    #[test]
    fn test_spawn_scenario() {
        let tuning = Tuning {
            target_count_max: 1,
            ..Tuning::default()
        };
        let mut state = GameState::new(&tuning);
        let mut rng = ScriptedRandom::new(&[0.5, 0.25], &[7]);

        let events = tick(&mut state, &tuning, &mut rng, DT);

        assert_eq!(state.targets.live_count(), 1);
        assert_eq!(state.targets.growing_len(), 1);
        let (key, target) = state.targets.growing().next().unwrap();
        assert_eq!(Some(*key), events.spawned);
        assert_eq!(key.pos, Vec2::new(0.0, -tuning.target_spawn_radius.y * 0.5));
        assert_eq!(target.color, 7);
        let expected = DT * tuning.grow_rate();
        assert!((target.radius.x - expected).abs() < 1e-7);
        assert_eq!(target.radius.x, target.radius.y);

        // At the maximum, nothing more spawns
        let events = tick(&mut state, &tuning, &mut rng, DT);
        assert_eq!(events.spawned, None);
        assert_eq!(state.targets.growing_len(), 1);
    }

    #[test]
    fn test_hit_scores_and_respawns() {
        let tuning = Tuning {
            target_count_max: 1,
            ..Tuning::default()
        };
        let mut state = GameState::new(&tuning);
        let key = state.targets.spawn(Vec2::new(2.0, 1.0), 5);
        state
            .targets
            .set_growing_radius(&key, tuning.target_radius_max);
        state.ball.pos = Vec2::new(2.0, 1.0);
        state.ball.vel = Vec2::ZERO;
        let mut rng = ScriptedRandom::new(&[0.5], &[0]);

        let events = tick(&mut state, &tuning, &mut rng, DT);

        assert_eq!(events.hits.len(), 1);
        assert_eq!(events.hits[0].key, key);
        assert_eq!(state.scores.left, 1);
        assert_eq!(state.scores.right, 0);
        assert!(!state.targets.is_growing(&key));
        assert!(state.targets.is_disappearing(&key));
        let (_, twin) = state
            .targets
            .disappearing()
            .find(|(k, _)| **k == key)
            .unwrap();
        assert_eq!(twin.color, 5);

        // Respawned at the top, centered by the scripted draw
        let court = tuning.court_radius;
        assert_eq!(state.ball.pos.y, court.y - tuning.ball_radius.y);
        assert!(state.ball.pos.x.abs() < 1e-6);
        assert_eq!(state.ball.vel.x, RESPAWN_VELOCITY.x);
        assert!((state.ball.vel.y - (-GRAVITY * DT)).abs() < 1e-6);

        // The freed slot is refilled in the same tick
        assert_eq!(state.targets.live_count(), 1);
        assert!(events.spawned.is_some());
    }

    #[test]
    fn test_hit_decrements_live_count() {
        let tuning = Tuning {
            target_count_max: 0,
            ..Tuning::default()
        };
        let mut state = GameState::new(&tuning);
        let key = state.targets.spawn(Vec2::new(-1.0, -1.0), 2);
        state
            .targets
            .set_growing_radius(&key, tuning.target_radius_max);
        state.ball.pos = Vec2::new(-1.0, -1.0);
        state.ball.vel = Vec2::ZERO;
        let mut rng = SeededRandom::new(3);

        assert_eq!(state.targets.live_count(), 1);
        tick(&mut state, &tuning, &mut rng, DT);
        assert_eq!(state.targets.live_count(), 0);
        assert_eq!(state.scores.left, 1);
    }

    #[test]
    fn test_growing_target_not_hit() {
        let tuning = Tuning {
            target_count_max: 0,
            ..Tuning::default()
        };
        let mut state = GameState::new(&tuning);
        let key = state.targets.spawn(Vec2::new(1.0, 1.0), 0);
        state
            .targets
            .set_growing_radius(&key, tuning.target_radius_max * 0.5);
        state.ball.pos = Vec2::new(1.0, 1.0);
        state.ball.vel = Vec2::ZERO;
        let mut rng = SeededRandom::new(4);

        let events = tick(&mut state, &tuning, &mut rng, DT);
        assert!(events.hits.is_empty());
        assert_eq!(state.scores.left, 0);
        assert!(state.targets.is_growing(&key));
    }

    #[test]
    fn test_simultaneous_hits_in_key_order() {
        let tuning = Tuning {
            target_count_max: 0,
            ..Tuning::default()
        };
        let mut state = GameState::new(&tuning);
        let right = state.targets.spawn(Vec2::new(0.2, -3.0), 0);
        let left = state.targets.spawn(Vec2::new(-0.2, -3.0), 1);
        // A target right under the respawn point at x=0
        let top = state.targets.spawn(
            Vec2::new(0.5, tuning.court_radius.y - tuning.ball_radius.y),
            2,
        );
        for key in [right, left, top] {
            state
                .targets
                .set_growing_radius(&key, tuning.target_radius_max);
        }
        state.ball.pos = Vec2::new(0.0, -3.0);
        state.ball.vel = Vec2::ZERO;
        // Respawns land at x = -6.8 + u * 13.6
        let mut rng = ScriptedRandom::new(&[7.3 / 13.6, 0.0], &[0]);

        let events = tick(&mut state, &tuning, &mut rng, DT);

        let order: Vec<TargetKey> = events.hits.iter().map(|h| h.key).collect();
        // `left` is hit first; the respawned ball is far from `right`, but
        // lands on `top`, which comes later in key order
        assert_eq!(order, vec![left, top]);
        assert_eq!(state.scores.left, 2);
        assert!(state.targets.is_growing(&right));
    }

    #[test]
    fn test_gravity_always_applies() {
        let tuning = Tuning {
            target_count_max: 0,
            ..Tuning::default()
        };
        let mut state = GameState::new(&tuning);
        state.ball.vel = Vec2::new(0.0, 0.0);
        let mut rng = SeededRandom::new(5);
        tick(&mut state, &tuning, &mut rng, 0.5);
        assert_eq!(state.ball.vel.y, -1.0);
    }

    #[test]
    fn test_trail_follows_ball() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        let mut rng = SeededRandom::new(6);
        for _ in 0..10 {
            tick(&mut state, &tuning, &mut rng, DT);
            assert_eq!(state.trail.newest().unwrap().pos, state.ball.pos);
        }
        assert!(state.trail.len() >= 2);
    }

    proptest! {
        #[test]
        fn paddle_always_clamped(
            seed in 0u64..1000,
            inputs in proptest::collection::vec(-50.0f32..50.0, 1..60),
            dt in 0.001f32..0.05
        ) {
            let tuning = Tuning::default();
            let mut state = GameState::new(&tuning);
            let mut rng = SeededRandom::new(seed);
            let (lo, hi) = tuning.paddle_y_range();
            for &y in &inputs {
                state.paddle.pos.y = y;
                tick(&mut state, &tuning, &mut rng, dt);
                prop_assert!(state.paddle.pos.y >= lo && state.paddle.pos.y <= hi);
            }
        }

        #[test]
        fn speed_multiplier_monotonic(a in 0u32..200, b in 0u32..200) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let m_lo = speed_multiplier(&Scores { left: lo, right: 0 });
            let m_hi = speed_multiplier(&Scores { left: hi, right: 0 });
            prop_assert!(m_lo <= m_hi);
            prop_assert!(m_hi <= SPEED_MULTIPLIER_MAX);
        }

        #[test]
        fn ball_returns_to_court(seed in 0u64..500, frames in 1usize..600) {
            let tuning = Tuning::default();
            let mut state = GameState::new(&tuning);
            let mut rng = SeededRandom::new(seed);
            let court = tuning.court_radius;
            let r = tuning.ball_radius;
            let mut outside_streak = 0;
            for _ in 0..frames {
                tick(&mut state, &tuning, &mut rng, 1.0 / 60.0);
                let p = state.ball.pos;
                let outside = p.x > court.x - r.x + 1e-4
                    || p.x < -court.x + r.x - 1e-4
                    || p.y > court.y
                    || p.y < -court.y;
                outside_streak = if outside { outside_streak + 1 } else { 0 };
                prop_assert!(outside_streak <= 1);
            }
        }
    }
}
