//! Movement domain: system modules for locomotion updates.

pub(crate) mod input;
pub(crate) mod locomotion;
pub(crate) mod sensors;

pub(crate) use input::read_character_input;
pub(crate) use locomotion::{
    apply_gravity, apply_horizontal_movement, apply_jump, enforce_movement_lock,
    update_mode_transitions,
};
pub(crate) use sensors::detect_ground;
