//! Designer tuning loaded from RON at startup.
//!
//! A missing or malformed file is logged and the compiled defaults stand;
//! tuning can never fail the app.

pub(crate) mod data;
pub(crate) mod loader;

#[cfg(test)]
mod tests;

pub use data::TuningFile;
pub use loader::{TuningLoadError, load_tuning_file};

use bevy::prelude::*;
use std::path::Path;

use crate::exposure::{DayNight, DefaultExposureRates};
use crate::grapple::GrappleTuning;
use crate::health::RespawnTuning;
use crate::movement::MovementTuning;

const TUNING_PATH: &str = "assets/data/tuning.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, apply_tuning);
    }
}

fn apply_tuning(
    mut movement: ResMut<MovementTuning>,
    mut grapple: ResMut<GrappleTuning>,
    mut respawn: ResMut<RespawnTuning>,
    mut exposure: ResMut<DefaultExposureRates>,
    mut day_night: ResMut<DayNight>,
) {
    let file = match load_tuning_file(Path::new(TUNING_PATH)) {
        Ok(file) => file,
        Err(e) => {
            warn!("{e}; keeping compiled defaults");
            return;
        }
    };

    apply_tuning_file(
        &file,
        &mut movement,
        &mut grapple,
        &mut respawn,
        &mut exposure,
        &mut day_night,
    );
    info!("applied tuning from {TUNING_PATH}");
}

pub(crate) fn apply_tuning_file(
    file: &TuningFile,
    movement: &mut MovementTuning,
    grapple: &mut GrappleTuning,
    respawn: &mut RespawnTuning,
    exposure: &mut DefaultExposureRates,
    day_night: &mut DayNight,
) {
    if let Some(def) = &file.movement {
        movement.move_speed = def.move_speed;
        movement.jump_height = def.jump_height;
        movement.time_to_apex = def.time_to_apex;
        movement.low_jump_multiplier = def.low_jump_multiplier;
        movement.fall_speed_multiplier = def.fall_speed_multiplier;
        movement.max_fall_speed = def.max_fall_speed;
        movement.glide_gravity_scale = def.glide_gravity_scale;
    }

    if let Some(def) = &file.grapple {
        grapple.max_distance = def.max_distance;
        grapple.swing_impulse_force = def.swing_impulse_force;
        grapple.force_charge_rate = def.force_charge_rate;
        grapple.min_rebound_force = def.min_rebound_force;
        grapple.max_swing_angle = def.max_swing_angle;
        grapple.braking_force = def.braking_force;
        grapple.braking_smoothness = def.braking_smoothness;
        grapple.catch_retention = def.catch_retention;
    }

    if let Some(def) = &file.respawn {
        respawn.respawn_delay = def.respawn_delay;
    }

    if let Some(def) = &file.exposure {
        exposure.0.heal_per_second = def.heal_per_second;
        exposure.0.damage_per_second = def.damage_per_second;
        day_night.swap_timer = if def.day_night_swap_seconds > 0.0 {
            Some(Timer::from_seconds(
                def.day_night_swap_seconds,
                TimerMode::Repeating,
            ))
        } else {
            None
        };
    }
}
