//! UI domain: thin HUD over the simulation's published state.

mod hud;

use bevy::prelude::*;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, hud::spawn_health_bars)
            .add_systems(Update, hud::update_health_bars);
    }
}
