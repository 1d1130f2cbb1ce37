//! Ball trail history
//!
//! Samples are stored oldest first. The renderer interpolates between
//! neighbours, so the buffer never shrinks below two samples.

use std::collections::VecDeque;

use glam::Vec2;

/// Trail point: where the ball was and how long ago
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSample {
    pub pos: Vec2,
    /// Seconds since capture
    pub age: f32,
}

/// Time-ordered ball positions with age-based eviction
#[derive(Debug, Clone)]
pub struct Trail {
    samples: VecDeque<TrailSample>,
    /// Seconds a sample stays relevant
    length: f32,
}

impl Trail {
    /// Trail seeded as if the ball had been resting at `pos` forever
    pub fn new(pos: Vec2, length: f32) -> Self {
        let mut samples = VecDeque::with_capacity(128);
        samples.push_back(TrailSample { pos, age: length });
        samples.push_back(TrailSample { pos, age: 0.0 });
        Self { samples, length }
    }

    /// Age every sample by `dt`, record `pos`, then trim from the front.
    ///
    /// The front sample is only dropped once the *second* sample is too old,
    /// so the oldest retained sample may itself be past `length`.
    pub fn record(&mut self, pos: Vec2, dt: f32) {
        for sample in self.samples.iter_mut() {
            sample.age += dt;
        }
        self.samples.push_back(TrailSample { pos, age: 0.0 });

        while self.samples.len() >= 2 && self.samples[1].age > self.length {
            self.samples.pop_front();
        }
    }

    /// Samples oldest first
    pub fn iter(&self) -> impl Iterator<Item = &TrailSample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    /// Most recent sample
    pub fn newest(&self) -> Option<&TrailSample> {
        self.samples.back()
    }
}
