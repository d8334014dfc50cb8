//! Movement domain: per-character keyboard sampling.

use bevy::prelude::*;

use crate::movement::{CharacterInput, InputBindings};

pub(crate) fn read_character_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<(&InputBindings, &mut CharacterInput)>,
) {
    for (bindings, mut input) in &mut query {
        let mut x = 0.0;
        if keyboard.pressed(bindings.left) {
            x -= 1.0;
        }
        if keyboard.pressed(bindings.right) {
            x += 1.0;
        }

        input.axis = Vec2::new(x, 0.0);
        input.jump_just_pressed = keyboard.just_pressed(bindings.jump);
        input.jump_held = keyboard.pressed(bindings.jump);
        input.ability_just_pressed = keyboard.just_pressed(bindings.ability);
        input.ability_just_released = keyboard.just_released(bindings.ability);
        input.ability_held = keyboard.pressed(bindings.ability);
        input.interact_just_pressed = keyboard.just_pressed(bindings.interact);
    }
}
