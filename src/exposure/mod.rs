//! Exposure domain: zone-based brightness and the health drain/regen loop.

mod components;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{ExposureRates, Zone, ZoneForce};
pub use resources::{DayNight, DayNightMode, DefaultExposureRates};
pub use systems::{classify_brightness, exposure_rate};

use bevy::prelude::*;

use crate::core::SimSet;
use crate::exposure::systems::{apply_exposure, tick_day_night};

pub struct ExposurePlugin;

impl Plugin for ExposurePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DayNight>()
            .init_resource::<DefaultExposureRates>()
            .add_systems(Update, tick_day_night)
            .add_systems(Update, apply_exposure.in_set(SimSet::Exposure));
    }
}
