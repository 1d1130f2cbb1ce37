//! Target lifecycle: spawn, grow, pop, shrink away
//!
//! Targets live in one of two ordered sets. Iteration order is by spawn
//! position (x, then y), which decides who is processed first when the ball
//! touches several fully grown targets in the same tick.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::ops::Bound;

use glam::Vec2;

use crate::Aabb;
use crate::consts::PALETTE_SIZE;

/// Ordering key: spawn position, with the spawn serial as identity
#[derive(Debug, Clone, Copy)]
pub struct TargetKey {
    pub pos: Vec2,
    pub serial: u64,
}

impl PartialEq for TargetKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TargetKey {}

impl PartialOrd for TargetKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TargetKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pos
            .x
            .total_cmp(&other.pos.x)
            .then_with(|| self.pos.y.total_cmp(&other.pos.y))
            .then_with(|| self.serial.cmp(&other.serial))
    }
}

/// Per-target state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    /// Current radius; always isotropic (x == y)
    pub radius: Vec2,
    /// Rainbow palette index in [0, PALETTE_SIZE)
    pub color: u8,
}

/// A target moved to the disappearing set this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetHit {
    pub key: TargetKey,
    pub target: Target,
}

/// Growing and disappearing target populations
#[derive(Debug, Clone, Default)]
pub struct TargetField {
    growing: BTreeMap<TargetKey, Target>,
    disappearing: BTreeMap<TargetKey, Target>,
    /// Targets counted against the live maximum
    live: u32,
    next_serial: u64,
}

impl TargetField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a zero-radius target to the growing set
    pub fn spawn(&mut self, pos: Vec2, color: u8) -> TargetKey {
        assert!(
            u32::from(color) < PALETTE_SIZE,
            "target color index {color} out of palette range"
        );
        let key = TargetKey {
            pos,
            serial: self.next_serial,
        };
        self.next_serial += 1;
        self.growing.insert(
            key,
            Target {
                radius: Vec2::ZERO,
                color,
            },
        );
        self.live += 1;
        log::debug!("Spawned target #{} at ({:.2}, {:.2})", key.serial, pos.x, pos.y);
        key
    }

    /// Scan fully grown targets in key order and pop the first one `ball`
    /// overlaps, starting strictly after `after`.
    ///
    /// The caller moves the ball between calls, so each hit is tested against
    /// the ball position produced by the previous one.
    pub fn pop_next_hit(
        &mut self,
        ball: &Aabb,
        radius_max: f32,
        after: Option<TargetKey>,
    ) -> Option<TargetHit> {
        let lower = match after {
            Some(key) => Bound::Excluded(key),
            None => Bound::Unbounded,
        };

        let key = self
            .growing
            .range((lower, Bound::Unbounded))
            .filter(|(_, target)| target.radius.x >= radius_max)
            .find(|(key, _)| {
                let hit_box = Aabb::from_center(key.pos, Vec2::splat(radius_max));
                hit_box.overlaps(ball)
            })
            .map(|(key, _)| *key)?;

        let target = self.growing.remove(&key)?;
        self.disappearing.insert(key, target);
        self.live = self.live.saturating_sub(1);
        log::debug!(
            "Target #{} popped at ({:.2}, {:.2})",
            key.serial,
            key.pos.x,
            key.pos.y
        );
        Some(TargetHit { key, target })
    }

    /// Advance growing radii toward `radius_max`
    pub fn grow(&mut self, dt: f32, rate: f32, radius_max: f32) {
        let step = dt * rate;
        for target in self.growing.values_mut() {
            if target.radius.x >= radius_max {
                continue;
            }
            let r = (target.radius.x + step).min(radius_max);
            target.radius = Vec2::splat(r);
        }
    }

    /// Shrink disappearing radii toward zero; entries that were already
    /// inert at the start of the pass are dropped.
    pub fn decay(&mut self, dt: f32, rate: f32) {
        let step = dt * rate;
        self.disappearing.retain(|_, target| {
            if target.radius.x <= 0.0 {
                return false;
            }
            let r = (target.radius.x - step).max(0.0);
            target.radius = Vec2::splat(r);
            true
        });
    }

    /// Growing targets in key order
    pub fn growing(&self) -> impl Iterator<Item = (&TargetKey, &Target)> {
        self.growing.iter()
    }

    /// Disappearing targets in key order
    pub fn disappearing(&self) -> impl Iterator<Item = (&TargetKey, &Target)> {
        self.disappearing.iter()
    }

    pub fn live_count(&self) -> u32 {
        self.live
    }

    pub fn growing_len(&self) -> usize {
        self.growing.len()
    }

    pub fn disappearing_len(&self) -> usize {
        self.disappearing.len()
    }

    pub fn is_growing(&self, key: &TargetKey) -> bool {
        self.growing.contains_key(key)
    }

    pub fn is_disappearing(&self, key: &TargetKey) -> bool {
        self.disappearing.contains_key(key)
    }

    /// Force a growing target to a radius (used to stage scenarios)
    pub fn set_growing_radius(&mut self, key: &TargetKey, radius: f32) -> bool {
        match self.growing.get_mut(key) {
            Some(target) => {
                target.radius = Vec2::splat(radius);
                true
            }
            None => false,
        }
    }
}
