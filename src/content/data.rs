//! Data definitions for the RON tuning file.
//!
//! These structs mirror the structure in assets/data/tuning.ron. Every
//! section is optional; a missing section keeps the compiled defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TuningFile {
    pub schema_version: u32,
    #[serde(default)]
    pub movement: Option<MovementDef>,
    #[serde(default)]
    pub grapple: Option<GrappleDef>,
    #[serde(default)]
    pub exposure: Option<ExposureDef>,
    #[serde(default)]
    pub respawn: Option<RespawnDef>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovementDef {
    pub move_speed: f32,
    pub jump_height: f32,
    pub time_to_apex: f32,
    pub low_jump_multiplier: f32,
    pub fall_speed_multiplier: f32,
    pub max_fall_speed: f32,
    pub glide_gravity_scale: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GrappleDef {
    pub max_distance: f32,
    pub swing_impulse_force: f32,
    pub force_charge_rate: f32,
    pub min_rebound_force: f32,
    pub max_swing_angle: f32,
    pub braking_force: f32,
    pub braking_smoothness: f32,
    pub catch_retention: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExposureDef {
    pub heal_per_second: f32,
    pub damage_per_second: f32,
    /// Zero disables the automatic day/night alternation
    pub day_night_swap_seconds: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RespawnDef {
    pub respawn_delay: f32,
}
