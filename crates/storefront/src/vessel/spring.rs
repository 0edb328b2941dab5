//! Damped spring used to smooth the scroll-driven rotation.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Integration step. Frame deltas are split into steps no longer than this.
const MAX_STEP: f32 = 1.0 / 240.0;

/// Frame deltas longer than this (tab in background, debugger pause) are
/// treated as this long.
const MAX_FRAME: f32 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// The spring snaps to its target once closer than this...
    pub rest_delta: f32,
    /// ...and slower than this.
    pub rest_speed: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 40.0,
            damping: 20.0,
            mass: 1.0,
            rest_delta: 0.01,
            rest_speed: 0.01,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn is_at_rest(&self, target: f32) -> bool {
        (target - self.value).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
    }

    /// Advances the spring towards `target` by `dt` and returns the new value.
    pub fn step(&mut self, target: f32, dt: Duration) -> f32 {
        if !target.is_finite() {
            return self.value;
        }

        let mut remaining = dt.as_secs_f32().min(MAX_FRAME);
        let SpringConfig {
            stiffness,
            damping,
            mass,
            ..
        } = self.config;
        let mass = mass.max(f32::EPSILON);

        // Semi-implicit Euler
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            let accel = (-stiffness * (self.value - target) - damping * self.velocity) / mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if self.is_at_rest(target) {
            self.value = target;
            self.velocity = 0.0;
        }
        self.value
    }
}
