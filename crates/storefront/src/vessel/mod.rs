//! # Scroll vessel
//!
//! Maps scroll progress and pointer position to the hero mesh's transform.
//!
//! Everything here is presentation-only. [`vessel_transform`] is a pure
//! function of its inputs; [`ScrollVessel`] adds the one piece of state the
//! mapping needs (the rotation spring) and is meant to be called once per
//! rendered frame, not once per input event.
//!
//! | Output | Formula |
//! |--------|---------|
//! | rotation target | `progress * rotation_span` (4π by default) |
//! | rotation y | `spring(rotation target) + pointer.x * tilt` |
//! | rotation x | `pointer.y * tilt` |
//! | scale | piecewise-linear over `[0, 0.5, 1]` |

pub mod spring;

pub use spring::*;

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VesselConfig {
    /// Radians of rotation across the full scroll range.
    pub rotation_span: f32,
    /// Pointer-induced tilt, in radians at the viewport edge.
    pub tilt: f32,
    pub spring: SpringConfig,
    /// Viewports narrower than this use `small_scale`.
    pub small_viewport_width: f32,
    pub scale_breakpoints: [f32; 3],
    pub regular_scale: [f32; 3],
    pub small_scale: [f32; 3],
    /// Scroll progress at which the hero title has fully faded out.
    pub hero_fade_end: f32,
}

impl Default for VesselConfig {
    fn default() -> Self {
        Self {
            rotation_span: 4.0 * PI,
            tilt: 0.4,
            spring: SpringConfig::default(),
            small_viewport_width: 768.0,
            scale_breakpoints: [0.0, 0.5, 1.0],
            regular_scale: [1.7, 2.4, 1.9],
            small_scale: [1.2, 1.6, 1.4],
            hero_fade_end: 0.15,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewportClass {
    Small,
    Regular,
}

impl ViewportClass {
    pub fn from_width(width: f32, config: &VesselConfig) -> Self {
        if width < config.small_viewport_width {
            ViewportClass::Small
        } else {
            ViewportClass::Regular
        }
    }
}

/// Normalized cursor position, `[-1, 1]` on both axes with y pointing up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    pub const CENTER: Pointer = Pointer { x: 0.0, y: 0.0 };

    /// Clamps both axes into `[-1, 1]`; non-finite values become 0.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: clamp_unit(x),
            y: clamp_unit(y),
        }
    }

    /// Converts client (pixel) coordinates within a `width` x `height`
    /// viewport. The top-left corner maps to `(-1, 1)`.
    pub fn from_client(client_x: f32, client_y: f32, width: f32, height: f32) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::CENTER;
        }
        Self::new(client_x / width * 2.0 - 1.0, -(client_y / height) * 2.0 + 1.0)
    }
}

/// The mesh transform for one frame. Scale applies to all three axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub scale: f32,
}

/// How far the page has been scrolled, in `[0, 1]`. A page that does not
/// scroll reports 0.
pub fn scroll_progress(scroll_top: f32, scroll_height: f32, viewport_height: f32) -> f32 {
    let range = scroll_height - viewport_height;
    if range.is_nan() || range <= 0.0 {
        return 0.0;
    }
    clamp01(scroll_top / range)
}

/// Piecewise-linear interpolation through three control points. `t` outside
/// the breakpoints is clamped to the end values.
pub fn lerp3(t: f32, breakpoints: [f32; 3], values: [f32; 3]) -> f32 {
    let [b0, b1, b2] = breakpoints;
    let [v0, v1, v2] = values;
    if t.is_nan() || t <= b0 {
        return v0;
    }
    if t >= b2 {
        return v2;
    }
    if t <= b1 {
        v0 + (v1 - v0) * segment(t, b0, b1)
    } else {
        v1 + (v2 - v1) * segment(t, b1, b2)
    }
}

fn segment(t: f32, from: f32, to: f32) -> f32 {
    if to > from {
        (t - from) / (to - from)
    } else {
        1.0
    }
}

pub fn rotation_target(progress: f32, config: &VesselConfig) -> f32 {
    clamp01(progress) * config.rotation_span
}

pub fn vessel_scale(progress: f32, viewport: ViewportClass, config: &VesselConfig) -> f32 {
    let values = match viewport {
        ViewportClass::Small => config.small_scale,
        ViewportClass::Regular => config.regular_scale,
    };
    lerp3(clamp01(progress), config.scale_breakpoints, values)
}

/// Hero title opacity: 1 at the top of the page, 0 from `hero_fade_end` on.
pub fn hero_opacity(progress: f32, config: &VesselConfig) -> f32 {
    let progress = clamp01(progress);
    if config.hero_fade_end.is_nan() || config.hero_fade_end <= 0.0 {
        return if progress > 0.0 { 0.0 } else { 1.0 };
    }
    1.0 - (progress / config.hero_fade_end).min(1.0)
}

/// Combines the smoothed rotation with the pointer tilt and the scroll scale.
pub fn vessel_transform(
    smoothed_rotation: f32,
    progress: f32,
    pointer: Pointer,
    viewport: ViewportClass,
    config: &VesselConfig,
) -> Transform {
    Transform {
        rotation_x: pointer.y * config.tilt,
        rotation_y: smoothed_rotation + pointer.x * config.tilt,
        scale: vessel_scale(progress, viewport, config),
    }
}

/// Per-frame driver for the hero mesh.
#[derive(Debug, Clone)]
pub struct ScrollVessel {
    config: VesselConfig,
    rotation: Spring,
}

impl ScrollVessel {
    pub fn new(config: VesselConfig) -> Self {
        let rotation = Spring::new(config.spring, 0.0);
        Self { config, rotation }
    }

    pub fn config(&self) -> &VesselConfig {
        &self.config
    }

    pub fn smoothed_rotation(&self) -> f32 {
        self.rotation.value()
    }

    /// Evaluates one animation frame `dt` after the previous one.
    pub fn frame(
        &mut self,
        progress: f32,
        pointer: Pointer,
        viewport: ViewportClass,
        dt: Duration,
    ) -> Transform {
        let target = rotation_target(progress, &self.config);
        let smoothed = self.rotation.step(target, dt);
        vessel_transform(smoothed, progress, pointer, viewport, &self.config)
    }
}

fn clamp01(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}
