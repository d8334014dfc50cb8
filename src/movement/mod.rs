//! Movement domain: locomotion state machine, jump model, ground sensor,
//! and glide, plus per-character input plumbing.

mod components;
mod events;
mod resources;
mod systems;


pub use components::{
    Character, CharacterInput, Facing, GameLayer, Ground, InputBindings, Mode, MovementState,
    Polarity,
};
pub use events::GlideStateChangedEvent;
pub use resources::{
    JumpProfile, MovementTuning, WORLD_GRAVITY, clamp_fall_speed, select_gravity_scale,
};

use bevy::prelude::*;

use crate::core::{SimSet, movement_unlocked};
use crate::movement::systems::{
    apply_gravity, apply_horizontal_movement, apply_jump, detect_ground, enforce_movement_lock,
    read_character_input, update_mode_transitions,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .add_message::<GlideStateChangedEvent>()
            .add_systems(Update, read_character_input.in_set(SimSet::Input))
            .add_systems(Update, enforce_movement_lock.in_set(SimSet::Lock))
            .add_systems(Update, detect_ground.in_set(SimSet::Sensors))
            .add_systems(
                Update,
                update_mode_transitions
                    .in_set(SimSet::Transitions)
                    .run_if(movement_unlocked),
            )
            .add_systems(
                Update,
                (
                    (apply_horizontal_movement, apply_jump)
                        .chain()
                        .run_if(movement_unlocked),
                    apply_gravity,
                )
                    .chain()
                    .in_set(SimSet::Forces),
            );
    }
}
