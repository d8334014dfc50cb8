//! Grapple domain: anchor targeting and the swing controller.

mod components;
mod events;
mod resources;
mod swing;
mod targeting;

#[cfg(test)]
mod tests;

pub use components::{GrappleAnchor, SwingState};
pub use events::{GrappleAttachedEvent, GrappleReleasedEvent};
pub use resources::GrappleTuning;

use bevy::prelude::*;

use crate::core::{SimSet, movement_unlocked};
use crate::grapple::swing::{apply_angle_brake, constrain_rope, update_lean, update_swing_forces};
use crate::grapple::targeting::{attempt_grapple, handle_grapple_release};

pub struct GrapplePlugin;

impl Plugin for GrapplePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GrappleTuning>()
            .add_message::<GrappleAttachedEvent>()
            .add_message::<GrappleReleasedEvent>()
            .add_systems(
                Update,
                (attempt_grapple, handle_grapple_release)
                    .chain()
                    .in_set(SimSet::Transitions)
                    .run_if(movement_unlocked),
            )
            .add_systems(
                Update,
                (
                    update_swing_forces,
                    apply_angle_brake,
                    constrain_rope,
                    update_lean,
                )
                    .chain()
                    .in_set(SimSet::Forces),
            );
    }
}
