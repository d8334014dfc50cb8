//! Health domain: hazards, delayed co-op respawn, and interaction presses.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::grapple::{GrappleReleasedEvent, SwingState};
use crate::health::components::{
    Health, InstantDeathZone, InteractChannel, Interactable, SpawnPoint,
};
use crate::health::events::{DeathEvent, HealthChangedEvent, InteractEvent};
use crate::health::resources::{RespawnSchedule, RespawnTuning};
use crate::movement::{
    Character, CharacterInput, GlideStateChangedEvent, Mode, MovementState, Polarity,
};

pub(crate) fn arm_death_zones(time: Res<Time>, mut zones: Query<&mut InstantDeathZone>) {
    let dt = time.delta_secs();
    for mut zone in &mut zones {
        if zone.armed {
            continue;
        }
        zone.timer += dt;
        if zone.timer >= zone.arm_delay {
            zone.armed = true;
        }
    }
}

pub(crate) fn apply_death_zones(
    zones: Query<(&Transform, &InstantDeathZone)>,
    mut health_events: MessageWriter<HealthChangedEvent>,
    mut death_events: MessageWriter<DeathEvent>,
    mut characters: Query<(Entity, &Transform, &mut Health), With<Character>>,
) {
    for (entity, transform, mut health) in &mut characters {
        if !health.alive {
            continue;
        }
        let point = transform.translation.truncate();

        for (zone_transform, zone) in &zones {
            if !zone.armed || !zone.contains(zone_transform.translation.truncate(), point) {
                continue;
            }

            let change = health.kill_instantly();
            if change.changed {
                health_events.write(HealthChangedEvent {
                    entity,
                    current: health.current,
                    max: health.max,
                });
            }
            if change.died {
                info!("instant death zone killed {entity}");
                death_events.write(DeathEvent { entity });
            }
            break;
        }
    }
}

/// Any death schedules one co-op respawn of all characters.
pub(crate) fn schedule_respawn(
    tuning: Res<RespawnTuning>,
    mut deaths: MessageReader<DeathEvent>,
    mut schedule: ResMut<RespawnSchedule>,
) {
    for death in deaths.read() {
        info!("death of {}: respawn in {}s", death.entity, tuning.respawn_delay);
        schedule.schedule(tuning.respawn_delay);
    }
}

pub(crate) fn tick_respawn(
    time: Res<Time>,
    mut schedule: ResMut<RespawnSchedule>,
    mut commands: Commands,
    mut glide_events: MessageWriter<GlideStateChangedEvent>,
    mut release_events: MessageWriter<GrappleReleasedEvent>,
    mut health_events: MessageWriter<HealthChangedEvent>,
    mut characters: Query<
        (
            Entity,
            &SpawnPoint,
            &mut Transform,
            &mut LinearVelocity,
            &mut MovementState,
            &mut Health,
        ),
        With<Character>,
    >,
) {
    let Some(timer) = schedule.pending.as_mut() else {
        return;
    };
    timer.tick(time.delta());
    if !timer.is_finished() {
        return;
    }
    schedule.pending = None;

    for (entity, spawn, mut transform, mut velocity, mut state, mut health) in &mut characters {
        transform.translation.x = spawn.0.x;
        transform.translation.y = spawn.0.y;
        transform.rotation = Quat::IDENTITY;
        velocity.0 = Vec2::ZERO;

        match state.mode {
            Mode::Grappling => {
                commands.entity(entity).remove::<SwingState>();
                release_events.write(GrappleReleasedEvent { character: entity });
            }
            Mode::Gliding => {
                glide_events.write(GlideStateChangedEvent {
                    character: entity,
                    gliding: false,
                });
            }
            _ => {}
        }
        state.mode = Mode::Grounded;
        state.glide_queued = false;

        health.reset();
        health_events.write(HealthChangedEvent {
            entity,
            current: health.current,
            max: health.max,
        });
    }

    info!("respawned all characters");
}

pub(crate) fn handle_interact(
    interactables: Query<(Entity, &Transform, &Interactable)>,
    mut interact_events: MessageWriter<InteractEvent>,
    characters: Query<(Entity, &Transform, &Polarity, &CharacterInput), With<Character>>,
) {
    for (character, transform, polarity, input) in &characters {
        if !input.interact_just_pressed {
            continue;
        }
        let point = transform.translation.truncate();

        for (interactable, interactable_transform, shape) in &interactables {
            if !shape.contains(interactable_transform.translation.truncate(), point) {
                continue;
            }
            let channel = match polarity {
                Polarity::Light => InteractChannel::Platform,
                Polarity::Night => InteractChannel::Vine,
            };
            interact_events.write(InteractEvent {
                character,
                interactable,
                channel,
            });
        }
    }
}
