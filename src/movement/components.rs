//! Movement domain: character components and physics layers.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms); also blocks grapple sight lines
    Ground,
    /// Playable characters
    Character,
}

/// Marker for playable characters
#[derive(Component, Debug)]
pub struct Character;

/// A character's fixed alignment. Immutable after spawn: determines which
/// zone brightness heals vs. harms it and which ability the character has
/// (Light grapples, Night glides).
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Light,
    Night,
}

impl Polarity {
    pub fn is_light(self) -> bool {
        matches!(self, Polarity::Light)
    }
}

/// Active locomotion mode. Transitions are evaluated every tick, ground
/// sensor first; `Grounded` is the initial mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Grounded,
    Airborne,
    Gliding,
    Grappling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn from_sign(sign: f32) -> Self {
        if sign < 0.0 { Facing::Left } else { Facing::Right }
    }
}

#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub mode: Mode,
    pub on_ground: bool,
    pub facing: Facing,
    /// Jump button currently held (low-jump gravity cutoff)
    pub jump_held: bool,
    /// Glide requested while ascending or grounded; activates on the first
    /// tick the character is both airborne and falling
    pub glide_queued: bool,
}

impl MovementState {
    pub fn is_gliding(&self) -> bool {
        self.mode == Mode::Gliding
    }

    pub fn is_grappling(&self) -> bool {
        self.mode == Mode::Grappling
    }
}

/// Per-character intents sampled from the keyboard each tick and cleared by
/// the global lock. Consuming transitions reset the one-shot flags.
#[derive(Component, Debug, Default, Clone)]
pub struct CharacterInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
    pub ability_just_pressed: bool,
    pub ability_just_released: bool,
    pub ability_held: bool,
    pub interact_just_pressed: bool,
}

impl CharacterInput {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Keyboard map for one local player
#[derive(Component, Debug, Clone)]
pub struct InputBindings {
    pub left: KeyCode,
    pub right: KeyCode,
    pub jump: KeyCode,
    pub ability: KeyCode,
    pub interact: KeyCode,
}

impl InputBindings {
    /// Left-hand cluster for the Light character
    pub fn light_default() -> Self {
        Self {
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            jump: KeyCode::Space,
            ability: KeyCode::KeyJ,
            interact: KeyCode::KeyE,
        }
    }

    /// Arrow cluster for the Night character
    pub fn night_default() -> Self {
        Self {
            left: KeyCode::ArrowLeft,
            right: KeyCode::ArrowRight,
            jump: KeyCode::Enter,
            ability: KeyCode::Period,
            interact: KeyCode::Comma,
        }
    }
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;
