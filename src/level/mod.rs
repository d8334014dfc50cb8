//! Level domain: demo level geometry, hazards, and character placement.

mod spawn;

use bevy::prelude::*;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn::spawn_level, spawn::spawn_characters));
    }
}
