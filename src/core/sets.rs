//! Core domain: system set ordering for one simulation tick.

use bevy::prelude::*;

/// Per-tick phases, chained in this order. The lock is enforced before any
/// state transition, transitions before forces, and exposure runs after the
/// physics-facing systems have written velocities.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimSet {
    /// Sample raw device input into per-character intents
    Input,
    /// Global movement lock enforcement
    Lock,
    /// Ground sensing
    Sensors,
    /// Locomotion mode transitions (glide, grapple attach/release)
    Transitions,
    /// Velocity and gravity writes for the physics step
    Forces,
    /// Zone classification and health drain/regen
    Exposure,
}
