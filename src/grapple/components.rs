//! Grapple domain: anchors and per-character swing state.

use bevy::prelude::*;

/// Static world point a grapple can attach to. Owned by the level; the
/// character only ever keeps a position snapshot.
#[derive(Component, Debug)]
pub struct GrappleAnchor;

/// Present on a character only while its mode is Grappling. Created on
/// successful targeting, removed on release, jump-cancel, or global lock.
#[derive(Component, Debug, Clone)]
pub struct SwingState {
    /// Anchor entity at attach time, kept for validity checks only
    pub anchor: Entity,
    /// Anchor position snapshot; anchors never move
    pub anchor_pos: Vec2,
    /// Fixed at attach time, never auto-recomputed
    pub rope_length: f32,
    /// Player-pumped swing energy, 0..=swing_impulse_force
    pub charge_force: f32,
    /// Last nonzero horizontal intent, seeded toward the anchor
    pub locked_direction: f32,
}
