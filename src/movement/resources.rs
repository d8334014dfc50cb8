//! Movement domain: tuning resource and the jump model.

use bevy::prelude::*;

use crate::movement::Mode;

/// World gravity constant in px/s². Derived gravity scales are expressed
/// relative to this, mirroring how per-body gravity scale works in the
/// physics backend.
pub const WORLD_GRAVITY: f32 = 981.0;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub move_speed: f32,
    /// Designer-facing apex height in px; gravity and launch speed derive
    /// from this and `time_to_apex`
    pub jump_height: f32,
    /// Designer-facing time to reach the apex, in seconds
    pub time_to_apex: f32,
    /// Extra gravity while ascending with the jump button already released
    pub low_jump_multiplier: f32,
    /// Extra gravity while descending
    pub fall_speed_multiplier: f32,
    /// Terminal fall speed, px/s
    pub max_fall_speed: f32,
    /// Absolute gravity scale while gliding
    pub glide_gravity_scale: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 300.0,
            jump_height: 220.0,
            time_to_apex: 0.35,
            low_jump_multiplier: 2.0,
            fall_speed_multiplier: 2.0,
            max_fall_speed: 900.0,
            glide_gravity_scale: 0.3,
        }
    }
}

impl MovementTuning {
    /// Derive the current jump profile. Always recomputed from the designer
    /// parameters rather than cached, so edits can never desync.
    pub fn jump_profile(&self) -> JumpProfile {
        JumpProfile::derive(self.jump_height, self.time_to_apex)
    }
}

/// Values derived from (apex height, time to apex):
/// `gravity = 2h/t²`, `launch_speed = gravity·t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpProfile {
    pub gravity: f32,
    pub launch_speed: f32,
    pub gravity_scale: f32,
}

impl JumpProfile {
    pub fn derive(jump_height: f32, time_to_apex: f32) -> Self {
        // Floors keep degenerate tuning values finite
        let h = jump_height.max(0.1);
        let t = time_to_apex.max(0.05);
        let gravity = 2.0 * h / (t * t);
        Self {
            gravity,
            launch_speed: gravity * t,
            gravity_scale: gravity / WORLD_GRAVITY,
        }
    }
}

/// Per-tick gravity scale selection. The rope pins gravity to the
/// unmultiplied base while grappling; gliding uses its own absolute scale;
/// otherwise fast-fall and low-jump multipliers shape the arc.
pub fn select_gravity_scale(
    profile: &JumpProfile,
    tuning: &MovementTuning,
    mode: Mode,
    vertical_speed: f32,
    jump_held: bool,
) -> f32 {
    match mode {
        Mode::Grappling => profile.gravity_scale,
        Mode::Gliding => tuning.glide_gravity_scale,
        _ => {
            let mut scale = profile.gravity_scale;
            if vertical_speed < 0.0 {
                scale *= tuning.fall_speed_multiplier;
            } else if vertical_speed > 0.0 && !jump_held {
                scale *= tuning.low_jump_multiplier;
            }
            scale
        }
    }
}

/// Clamp vertical speed to the configured terminal velocity. Gliding caps
/// the fall at a third of terminal.
pub fn clamp_fall_speed(vertical_speed: f32, mode: Mode, tuning: &MovementTuning) -> f32 {
    let floor = match mode {
        Mode::Gliding => -tuning.max_fall_speed / 3.0,
        _ => -tuning.max_fall_speed,
    };
    vertical_speed.max(floor)
}
