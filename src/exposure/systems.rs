//! Exposure domain: brightness classification and the health drain/regen loop.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::exposure::{DayNight, ExposureRates, Zone, ZoneForce};
use crate::health::{DeathEvent, Health, HealthChangedEvent};
use crate::movement::{Character, Polarity};

/// Whether a world point is currently bright. Precedence is explicit and
/// order-independent: any overlapping forces-dark zone makes the point dark,
/// otherwise any forces-bright zone makes it bright, otherwise the global
/// flag decides.
pub fn classify_brightness<'a>(
    point: Vec2,
    zones: impl IntoIterator<Item = (Vec2, &'a Zone)>,
    global_day: bool,
) -> bool {
    let mut forced_bright = false;
    for (center, zone) in zones {
        if !zone.contains(center, point) {
            continue;
        }
        match zone.force {
            ZoneForce::Dark => return false,
            ZoneForce::Bright => forced_bright = true,
        }
    }
    forced_bright || global_day
}

/// Signed health rate per second for a polarity in the given brightness.
pub fn exposure_rate(polarity: Polarity, bright: bool, rates: &ExposureRates) -> f32 {
    let matches_polarity = match polarity {
        Polarity::Light => bright,
        Polarity::Night => !bright,
    };
    if matches_polarity {
        rates.heal_per_second
    } else {
        -rates.damage_per_second
    }
}

pub(crate) fn tick_day_night(time: Res<Time>, mut day_night: ResMut<DayNight>) {
    let Some(timer) = day_night.swap_timer.as_mut() else {
        return;
    };
    timer.tick(time.delta());
    if timer.just_finished() {
        day_night.toggle();
        info!("day/night flipped: now {:?}", day_night.mode);
    }
}

/// Once per frame per living character: zone brightness becomes a continuous
/// health delta, scaled by elapsed frame time so the behavior is
/// frame-rate independent.
pub(crate) fn apply_exposure(
    time: Res<Time>,
    day_night: Res<DayNight>,
    zones: Query<(&Transform, &Zone)>,
    mut health_events: MessageWriter<HealthChangedEvent>,
    mut death_events: MessageWriter<DeathEvent>,
    mut characters: Query<(Entity, &Transform, &Polarity, &ExposureRates, &mut Health), With<Character>>,
) {
    let dt = time.delta_secs();

    for (entity, transform, polarity, rates, mut health) in &mut characters {
        if !health.alive {
            continue;
        }

        let point = transform.translation.truncate();
        let bright = classify_brightness(
            point,
            zones
                .iter()
                .map(|(zone_transform, zone)| (zone_transform.translation.truncate(), zone)),
            day_night.is_day(),
        );

        let rate = exposure_rate(*polarity, bright, rates);
        let change = if rate >= 0.0 {
            health.heal(rate * dt)
        } else {
            health.take_damage(-rate * dt)
        };

        if change.changed {
            health_events.write(HealthChangedEvent {
                entity,
                current: health.current,
                max: health.max,
            });
        }
        if change.died {
            death_events.write(DeathEvent { entity });
        }
    }
}
