//! Health domain: damage ledger, instant death hazards, co-op respawn,
//! and the interact command boundary.

pub(crate) mod components;
pub(crate) mod events;
pub(crate) mod resources;
pub(crate) mod systems;


pub use components::{
    Health, InstantDeathZone, InteractChannel, Interactable, LedgerChange, SpawnPoint,
};
pub use events::{DeathEvent, HealthChangedEvent, InteractEvent};
pub use resources::{RespawnSchedule, RespawnTuning};

use bevy::prelude::*;

use crate::core::{SimSet, movement_unlocked};

pub struct HealthPlugin;

impl Plugin for HealthPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RespawnTuning>()
            .init_resource::<RespawnSchedule>()
            .add_message::<HealthChangedEvent>()
            .add_message::<DeathEvent>()
            .add_message::<InteractEvent>()
            .add_systems(
                Update,
                systems::handle_interact
                    .in_set(SimSet::Transitions)
                    .run_if(movement_unlocked),
            )
            .add_systems(
                Update,
                (
                    systems::arm_death_zones,
                    systems::apply_death_zones,
                    systems::schedule_respawn,
                    systems::tick_respawn,
                )
                    .chain()
                    .in_set(SimSet::Exposure),
            );
    }
}
