//! Core domain: simulation ordering, global movement lock, and camera.

mod resources;
mod sets;
mod systems;

pub use resources::{MovementLock, movement_unlocked};
pub use sets::SimSet;

use bevy::prelude::*;

use crate::core::systems::setup_camera;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementLock>()
            .configure_sets(
                Update,
                (
                    SimSet::Input,
                    SimSet::Lock,
                    SimSet::Sensors,
                    SimSet::Transitions,
                    SimSet::Forces,
                    SimSet::Exposure,
                )
                    .chain(),
            )
            .add_systems(Startup, setup_camera);
    }
}
