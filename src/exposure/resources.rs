//! Exposure domain: global day/night state.

use bevy::prelude::*;

use crate::exposure::components::ExposureRates;

/// Spawn-time default for per-character [`ExposureRates`]. Characters copy
/// this when they are placed; later tuning edits do not retrofit.
#[derive(Resource, Debug, Clone, Default)]
pub struct DefaultExposureRates(pub ExposureRates);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayNightMode {
    #[default]
    Day,
    Night,
}

/// Global default brightness, optionally alternating on a fixed interval.
#[derive(Resource, Debug)]
pub struct DayNight {
    pub mode: DayNightMode,
    /// None disables automatic alternation
    pub swap_timer: Option<Timer>,
}

impl Default for DayNight {
    fn default() -> Self {
        Self {
            mode: DayNightMode::Day,
            swap_timer: Some(Timer::from_seconds(15.0, TimerMode::Repeating)),
        }
    }
}

impl DayNight {
    pub fn is_day(&self) -> bool {
        self.mode == DayNightMode::Day
    }

    pub fn toggle(&mut self) {
        self.mode = match self.mode {
            DayNightMode::Day => DayNightMode::Night,
            DayNightMode::Night => DayNightMode::Day,
        };
    }
}
