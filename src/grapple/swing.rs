//! Grapple domain: pendulum math and per-tick swing systems.

use avian2d::prelude::*;
use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::grapple::{GrappleTuning, SwingState};
use crate::movement::{Character, CharacterInput};

/// Brake engages once proximity to the arc limit exceeds this floor
const BRAKE_PROXIMITY_FLOOR: f32 = 0.05;
/// Proportional velocity damping per reference tick at full proximity
const BRAKE_DAMPING: f32 = 0.05;
/// Tick rate the damping constant is tuned against, Hz
const BRAKE_REFERENCE_RATE: f32 = 60.0;
/// Lean interpolation rate toward the rope direction, per second
const LEAN_RATE: f32 = 10.0;

pub fn move_toward(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}

fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if a == b {
        return 0.0;
    }
    ((value - a) / (b - a)).clamp(0.0, 1.0)
}

/// Perpendicular to the rope vector (character -> anchor): the pendulum's
/// instantaneous swing direction.
pub fn swing_tangent(rope_vec: Vec2) -> Vec2 {
    Vec2::new(-rope_vec.y, rope_vec.x).normalize_or_zero()
}

/// Flip the tangent if it does not already point the held direction.
pub fn orient_tangent(tangent: Vec2, desired_direction: f32) -> Vec2 {
    if tangent.x.signum() != desired_direction.signum() {
        -tangent
    } else {
        tangent
    }
}

/// One step of the charge ramp: toward the maximum while the ability button
/// is held, decaying toward zero at half that rate when released.
pub fn charge_step(current: f32, max: f32, charge_rate: f32, held: bool, dt: f32) -> f32 {
    if held {
        move_toward(current, max, charge_rate * dt)
    } else {
        move_toward(current, 0.0, charge_rate * dt * 0.5)
    }
}

/// Signed angle in degrees of the character-from-anchor vector, measured
/// from the positive X axis. 90 is directly above the anchor; values in
/// (0, 180) mean the character is above anchor height.
pub fn rope_angle_degrees(anchor: Vec2, character: Vec2) -> f32 {
    let dir = character - anchor;
    dir.y.atan2(dir.x).to_degrees()
}

/// Proximity to the configured arc limit, 0..=1. The limits sit
/// `(max_arc - 180) / 2` degrees past horizontal on each side; proximity
/// ramps from zero at the top of the swing and saturates at the limit, so
/// the brake stays engaged even if the character overshoots.
pub fn brake_proximity(angle_deg: f32, max_arc_deg: f32) -> f32 {
    let margin = (max_arc_deg - 180.0) / 2.0;
    let top_limit = 180.0 - margin;
    let bottom_limit = margin;

    // Below anchor height: free swing
    if angle_deg <= 0.0 || angle_deg >= 180.0 {
        return 0.0;
    }

    if angle_deg > 90.0 {
        inverse_lerp(90.0, top_limit, angle_deg)
    } else {
        inverse_lerp(90.0, bottom_limit, angle_deg)
    }
}

/// Multiplicative velocity damp for one step near the arc limit. The
/// per-tick constant is exponentiated by elapsed time, so subdividing a
/// frame into smaller steps yields the same total damping.
pub fn brake_damp_factor(proximity: f32, dt: f32) -> f32 {
    (1.0 - BRAKE_DAMPING * proximity)
        .max(0.0)
        .powf(dt * BRAKE_REFERENCE_RATE)
}

/// Taut-rope constraint: when the character is at or past the rope's reach,
/// project it back onto the rope circle and remove the outward radial
/// velocity component. A slack rope constrains nothing.
pub fn constrain_to_rope(
    position: Vec2,
    velocity: Vec2,
    anchor: Vec2,
    rope_length: f32,
) -> (Vec2, Vec2) {
    let offset = position - anchor;
    let distance = offset.length();
    if distance < f32::EPSILON || distance < rope_length {
        return (position, velocity);
    }

    let radial = offset / distance;
    let constrained_pos = anchor + radial * rope_length;
    let radial_speed = velocity.dot(radial);
    let constrained_vel = if radial_speed > 0.0 {
        velocity - radial * radial_speed
    } else {
        velocity
    };
    (constrained_pos, constrained_vel)
}

/// Charge ramp plus player-driven tangential force. With no horizontal
/// input the character coasts on the existing pendulum motion.
pub(crate) fn update_swing_forces(
    time: Res<Time>,
    tuning: Res<GrappleTuning>,
    mut query: Query<
        (
            &Transform,
            &CharacterInput,
            &mut SwingState,
            &mut LinearVelocity,
        ),
        With<Character>,
    >,
) {
    let dt = time.delta_secs();

    for (transform, input, mut swing, mut velocity) in &mut query {
        swing.charge_force = charge_step(
            swing.charge_force,
            tuning.swing_impulse_force,
            tuning.force_charge_rate,
            input.ability_held,
            dt,
        );

        if input.axis.x.abs() <= 0.1 {
            continue;
        }
        swing.locked_direction = input.axis.x.signum();

        let rope_vec = swing.anchor_pos - transform.translation.truncate();
        let tangent = orient_tangent(swing_tangent(rope_vec), swing.locked_direction);
        let force = swing.charge_force + tuning.min_rebound_force;
        velocity.0 += tangent * force * dt;
    }
}

/// Soft deceleration near the arc limits: a downward force shaped by
/// `proximity^smoothness` plus proportional damping, only while the
/// character is still moving upward.
pub(crate) fn apply_angle_brake(
    time: Res<Time>,
    tuning: Res<GrappleTuning>,
    mut query: Query<(&Transform, &SwingState, &mut LinearVelocity), With<Character>>,
) {
    let dt = time.delta_secs();

    for (transform, swing, mut velocity) in &mut query {
        let angle = rope_angle_degrees(swing.anchor_pos, transform.translation.truncate());
        let proximity = brake_proximity(angle, tuning.max_swing_angle);

        if proximity > BRAKE_PROXIMITY_FLOOR && velocity.y > 0.0 {
            let intensity = proximity.powf(tuning.braking_smoothness);
            velocity.y -= intensity * tuning.braking_force * dt;
            velocity.0 *= brake_damp_factor(proximity, dt);
        }
    }
}

/// Keeps the rope taut after the physics step has moved the character.
pub(crate) fn constrain_rope(
    mut query: Query<(&mut Transform, &SwingState, &mut LinearVelocity), With<Character>>,
) {
    for (mut transform, swing, mut velocity) in &mut query {
        let position = transform.translation.truncate();
        let (constrained_pos, constrained_vel) =
            constrain_to_rope(position, velocity.0, swing.anchor_pos, swing.rope_length);
        transform.translation.x = constrained_pos.x;
        transform.translation.y = constrained_pos.y;
        velocity.0 = constrained_vel;
    }
}

/// Leans the sprite toward the rope while swinging, back upright otherwise.
pub(crate) fn update_lean(
    time: Res<Time>,
    mut query: Query<(&mut Transform, Option<&SwingState>), With<Character>>,
) {
    let t = (time.delta_secs() * LEAN_RATE).min(1.0);

    for (mut transform, swing) in &mut query {
        let target = match swing {
            Some(swing) => {
                let dir = swing.anchor_pos - transform.translation.truncate();
                Quat::from_rotation_z(dir.y.atan2(dir.x) - FRAC_PI_2)
            }
            None => Quat::IDENTITY,
        };
        transform.rotation = transform.rotation.slerp(target, t);
    }
}
