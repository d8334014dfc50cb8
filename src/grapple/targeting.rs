//! Grapple domain: anchor acquisition and release paths.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::grapple::events::{GrappleAttachedEvent, GrappleReleasedEvent};
use crate::grapple::{GrappleAnchor, GrappleTuning, SwingState};
use crate::movement::{
    Character, CharacterInput, Facing, GameLayer, JumpProfile, Mode, MovementState, MovementTuning,
    Polarity,
};

/// Offset along the aim direction for the line-of-sight ray start, so the
/// ray cannot begin inside the character's own collider.
pub const LOS_OFFSET: f32 = 10.0;

/// Vertical boost applied when a jump input doubles as a grapple release
pub const JUMP_CANCEL_VERTICAL_BOOST: f32 = 1.2;
/// Horizontal boost applied on jump-cancel
pub const JUMP_CANCEL_HORIZONTAL_BOOST: f32 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPick {
    pub entity: Entity,
    pub position: Vec2,
    pub distance: f32,
}

/// Scan candidate anchors and pick the closest eligible one. An anchor is
/// rejected when out of range, at or below the character's height (the rope
/// only arcs upward), or when the visibility check reports an obstruction.
/// Returning `None` is a normal outcome, not an error.
pub fn select_anchor(
    origin: Vec2,
    candidates: impl IntoIterator<Item = (Entity, Vec2)>,
    max_distance: f32,
    mut is_obstructed: impl FnMut(Vec2, Vec2, f32) -> bool,
) -> Option<AnchorPick> {
    let mut best: Option<AnchorPick> = None;

    for (entity, position) in candidates {
        let distance = origin.distance(position);
        if distance > max_distance || distance <= LOS_OFFSET {
            continue;
        }
        if position.y <= origin.y {
            continue;
        }

        let direction = (position - origin) / distance;
        let start = origin + direction * LOS_OFFSET;
        if is_obstructed(start, direction, distance - LOS_OFFSET) {
            continue;
        }

        if best.map(|b| distance < b.distance).unwrap_or(true) {
            best = Some(AnchorPick {
                entity,
                position,
                distance,
            });
        }
    }

    best
}

/// Velocity after a jump-cancel release: full launch with a vertical and
/// horizontal boost, letting a grapple release double as a jump.
pub fn jump_cancel_velocity(profile: &JumpProfile, velocity: Vec2) -> Vec2 {
    Vec2::new(
        velocity.x * JUMP_CANCEL_HORIZONTAL_BOOST,
        profile.launch_speed * JUMP_CANCEL_VERTICAL_BOOST,
    )
}

/// Ability press by a Light character while not already grappling. Targeting
/// failure leaves the character in its prior state.
pub(crate) fn attempt_grapple(
    mut commands: Commands,
    tuning: Res<GrappleTuning>,
    spatial_query: SpatialQuery,
    anchors: Query<(Entity, &Transform), With<GrappleAnchor>>,
    mut attached_events: MessageWriter<GrappleAttachedEvent>,
    mut query: Query<
        (
            Entity,
            &Transform,
            &Polarity,
            &CharacterInput,
            &mut MovementState,
            &mut LinearVelocity,
        ),
        With<Character>,
    >,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (entity, transform, polarity, input, mut state, mut velocity) in &mut query {
        if !polarity.is_light() || !input.ability_just_pressed {
            continue;
        }
        // Re-press while attached is a no-op
        if state.mode == Mode::Grappling {
            continue;
        }

        let origin = transform.translation.truncate();
        let candidates = anchors
            .iter()
            .map(|(anchor, anchor_transform)| (anchor, anchor_transform.translation.truncate()));

        let pick = select_anchor(origin, candidates, tuning.max_distance, |start, dir, dist| {
            match Dir2::new(dir) {
                Ok(direction) => spatial_query
                    .cast_ray(start, direction, dist, true, &ground_filter)
                    .is_some(),
                Err(_) => true,
            }
        });

        let Some(pick) = pick else {
            debug!("grapple targeting: no eligible anchor for {entity}");
            continue;
        };

        // Soft catch: keep only a fraction of the current velocity
        velocity.0 *= tuning.catch_retention;

        let locked_direction = if pick.position.x > origin.x { 1.0 } else { -1.0 };
        state.mode = Mode::Grappling;
        state.facing = Facing::from_sign(locked_direction);

        commands.entity(entity).insert(SwingState {
            anchor: pick.entity,
            anchor_pos: pick.position,
            rope_length: pick.distance,
            charge_force: 0.0,
            locked_direction,
        });
        attached_events.write(GrappleAttachedEvent {
            character: entity,
            anchor: pick.entity,
            rope_length: pick.distance,
        });
        debug!(
            "grapple attached: character={entity}, rope_length={}",
            pick.distance
        );
    }
}

/// Ability release and jump-cancel. The global-lock release path lives in
/// the movement lock enforcement.
pub(crate) fn handle_grapple_release(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    mut release_events: MessageWriter<GrappleReleasedEvent>,
    mut query: Query<
        (
            Entity,
            &CharacterInput,
            &mut MovementState,
            &mut LinearVelocity,
            &mut Transform,
        ),
        (With<Character>, With<SwingState>),
    >,
) {
    let profile = tuning.jump_profile();

    for (entity, input, mut state, mut velocity, mut transform) in &mut query {
        let jump_cancel = input.jump_just_pressed;
        if !jump_cancel && !input.ability_just_released {
            continue;
        }

        commands.entity(entity).remove::<SwingState>();
        state.mode = Mode::Airborne;
        transform.rotation = Quat::IDENTITY;

        if jump_cancel {
            velocity.0 = jump_cancel_velocity(&profile, velocity.0);
        }

        release_events.write(GrappleReleasedEvent { character: entity });
        debug!("grapple released: character={entity}, jump_cancel={jump_cancel}");
    }
}
