//! Exposure domain: brightness override zones and per-character rates.

use bevy::prelude::*;

/// What an override zone forces for every point it covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneForce {
    Bright,
    Dark,
}

/// Axis-aligned brightness override region, centered on the entity's
/// translation. Zones are owned by the level and read-only to characters.
#[derive(Component, Debug, Clone)]
pub struct Zone {
    pub half_extents: Vec2,
    pub force: ZoneForce,
}

impl Zone {
    pub fn contains(&self, center: Vec2, point: Vec2) -> bool {
        (point.x - center.x).abs() <= self.half_extents.x
            && (point.y - center.y).abs() <= self.half_extents.y
    }
}

/// Continuous health rates applied by the exposure resolver, per second.
#[derive(Component, Debug, Clone)]
pub struct ExposureRates {
    pub heal_per_second: f32,
    pub damage_per_second: f32,
}

impl Default for ExposureRates {
    fn default() -> Self {
        Self {
            heal_per_second: 5.0,
            damage_per_second: 10.0,
        }
    }
}
