//! Grapple domain: tuning resource.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct GrappleTuning {
    /// Anchor scan radius, px
    pub max_distance: f32,
    /// Ceiling for the player-pumped tangential force, px/s²
    pub swing_impulse_force: f32,
    /// Charge ramp rate while the ability button is held, px/s² per second;
    /// decay runs at half this rate
    pub force_charge_rate: f32,
    /// Floor added to the charge whenever a direction is held, px/s²
    pub min_rebound_force: f32,
    /// Total swing arc measured about the anchor, degrees
    pub max_swing_angle: f32,
    /// Downward braking force at full proximity to the arc limit, px/s²
    pub braking_force: f32,
    /// Exponent shaping the brake ramp near the limit
    pub braking_smoothness: f32,
    /// Fraction of velocity kept on attach (soft catch)
    pub catch_retention: f32,
}

impl Default for GrappleTuning {
    fn default() -> Self {
        Self {
            max_distance: 450.0,
            swing_impulse_force: 1200.0,
            force_charge_rate: 2400.0,
            min_rebound_force: 600.0,
            max_swing_angle: 200.0,
            braking_force: 1600.0,
            braking_smoothness: 3.0,
            catch_retention: 0.1,
        }
    }
}
