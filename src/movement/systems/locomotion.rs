//! Movement domain: mode transitions, lock enforcement, and force writes.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::MovementLock;
use crate::grapple::GrappleReleasedEvent;
use crate::movement::events::GlideStateChangedEvent;
use crate::movement::resources::{clamp_fall_speed, select_gravity_scale};
use crate::movement::{
    Character, CharacterInput, Facing, Mode, MovementState, MovementTuning, Polarity,
};

pub(crate) struct LockOutcome {
    pub released_grapple: bool,
    pub stopped_glide: bool,
}

/// The lock's per-character effects: input cleared, horizontal velocity
/// zeroed, grapple and glide retired. There is no partial-cancel state.
pub(crate) fn apply_lock(
    input: &mut CharacterInput,
    state: &mut MovementState,
    velocity: &mut LinearVelocity,
) -> LockOutcome {
    input.clear();
    velocity.x = 0.0;

    let released_grapple = state.mode == Mode::Grappling;
    let stopped_glide = state.mode == Mode::Gliding;
    state.glide_queued = false;
    if released_grapple || stopped_glide {
        state.mode = Mode::Airborne;
    }

    LockOutcome {
        released_grapple,
        stopped_glide,
    }
}

/// Runs every tick before all other transitions, with no exceptions.
pub(crate) fn enforce_movement_lock(
    lock: Res<MovementLock>,
    mut commands: Commands,
    mut glide_events: MessageWriter<GlideStateChangedEvent>,
    mut release_events: MessageWriter<GrappleReleasedEvent>,
    mut query: Query<
        (
            Entity,
            &mut CharacterInput,
            &mut MovementState,
            &mut LinearVelocity,
            &mut Transform,
        ),
        With<Character>,
    >,
) {
    if !lock.locked {
        return;
    }

    for (entity, mut input, mut state, mut velocity, mut transform) in &mut query {
        let outcome = apply_lock(&mut input, &mut state, &mut velocity);
        if outcome.released_grapple {
            commands
                .entity(entity)
                .remove::<crate::grapple::SwingState>();
            transform.rotation = Quat::IDENTITY;
            release_events.write(GrappleReleasedEvent { character: entity });
            debug!("movement lock released grapple for {entity}");
        }
        if outcome.stopped_glide {
            glide_events.write(GlideStateChangedEvent {
                character: entity,
                gliding: false,
            });
            debug!("movement lock stopped glide for {entity}");
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TransitionOutcome {
    pub glide_started: bool,
    pub glide_stopped: bool,
}

/// Grounded/airborne resolution and the glide half of the ability button
/// for one character. A press while grounded or still ascending queues the
/// glide until the first falling airborne tick; landing forces the glide
/// off even with no release event.
pub(crate) fn resolve_transitions(
    polarity: Polarity,
    input: &CharacterInput,
    state: &mut MovementState,
    vertical_speed: f32,
) -> TransitionOutcome {
    let mut outcome = TransitionOutcome::default();

    if state.on_ground && state.mode != Mode::Grappling {
        if state.mode == Mode::Gliding {
            outcome.glide_stopped = true;
        }
        state.glide_queued = false;
        state.mode = Mode::Grounded;
    } else if !state.on_ground && state.mode == Mode::Grounded {
        state.mode = Mode::Airborne;
    }

    if polarity.is_light() {
        return outcome;
    }

    if input.ability_just_pressed {
        if state.on_ground || vertical_speed > 0.0 {
            state.glide_queued = true;
        } else if state.mode == Mode::Airborne {
            state.mode = Mode::Gliding;
            outcome.glide_started = true;
        }
    }

    if input.ability_just_released {
        state.glide_queued = false;
        if state.mode == Mode::Gliding {
            state.mode = Mode::Airborne;
            outcome.glide_stopped = true;
        }
    }

    if state.glide_queued && !state.on_ground && vertical_speed <= 0.0 {
        state.glide_queued = false;
        state.mode = Mode::Gliding;
        outcome.glide_started = true;
    }

    outcome
}

/// Ground sensor has already run this tick. Grapple attach/release for the
/// Light character is handled in the grapple domain.
pub(crate) fn update_mode_transitions(
    mut glide_events: MessageWriter<GlideStateChangedEvent>,
    mut query: Query<
        (
            Entity,
            &Polarity,
            &CharacterInput,
            &mut MovementState,
            &LinearVelocity,
        ),
        With<Character>,
    >,
) {
    for (entity, polarity, input, mut state, velocity) in &mut query {
        let outcome = resolve_transitions(*polarity, input, &mut state, velocity.y);

        if outcome.glide_started {
            glide_events.write(GlideStateChangedEvent {
                character: entity,
                gliding: true,
            });
        }
        if outcome.glide_stopped {
            glide_events.write(GlideStateChangedEvent {
                character: entity,
                gliding: false,
            });
        }
    }
}

pub(crate) fn apply_horizontal_movement(
    tuning: Res<MovementTuning>,
    mut query: Query<(&CharacterInput, &mut MovementState, &mut LinearVelocity), With<Character>>,
) {
    for (input, mut state, mut velocity) in &mut query {
        // The rope, not direct control, governs horizontal motion
        if state.mode == Mode::Grappling {
            continue;
        }

        velocity.x = input.axis.x * tuning.move_speed;

        if input.axis.x.abs() > 0.1 {
            state.facing = Facing::from_sign(input.axis.x.signum());
        }
    }
}

pub(crate) fn apply_jump(
    tuning: Res<MovementTuning>,
    mut query: Query<(&CharacterInput, &mut MovementState, &mut LinearVelocity), With<Character>>,
) {
    let profile = tuning.jump_profile();

    for (input, mut state, mut velocity) in &mut query {
        state.jump_held = input.jump_held;

        // Grapple jump-cancel is resolved by the grapple domain before this
        if input.jump_just_pressed && state.on_ground && state.mode != Mode::Grappling {
            velocity.y = profile.launch_speed;
            debug!("jump: launch_speed={}", profile.launch_speed);
        }
    }
}

/// Writes the per-tick gravity scale and clamps to terminal fall speed.
pub(crate) fn apply_gravity(
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &mut GravityScale, &mut LinearVelocity), With<Character>>,
) {
    let profile = tuning.jump_profile();

    for (state, mut gravity_scale, mut velocity) in &mut query {
        gravity_scale.0 =
            select_gravity_scale(&profile, &tuning, state.mode, velocity.y, state.jump_held);
        velocity.y = clamp_fall_speed(velocity.y, state.mode, &tuning);
    }
}
