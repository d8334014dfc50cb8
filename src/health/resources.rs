//! Health domain: respawn scheduling.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct RespawnTuning {
    /// Delay between a death and the co-op respawn, seconds
    pub respawn_delay: f32,
}

impl Default for RespawnTuning {
    fn default() -> Self {
        Self { respawn_delay: 2.0 }
    }
}

/// Pending respawn as a ticked timer rather than suspended control flow;
/// the rest of the simulation continues normally while it counts down.
#[derive(Resource, Debug, Default)]
pub struct RespawnSchedule {
    pub pending: Option<Timer>,
}

impl RespawnSchedule {
    pub fn schedule(&mut self, delay: f32) {
        if self.pending.is_none() {
            self.pending = Some(Timer::from_seconds(delay, TimerMode::Once));
        }
    }
}
