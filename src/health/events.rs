//! Health domain: events published at the core's boundary.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::health::InteractChannel;

#[derive(Debug)]
pub struct HealthChangedEvent {
    pub entity: Entity,
    pub current: f32,
    pub max: f32,
}

impl Message for HealthChangedEvent {}

/// Fired exactly once per life, on the alive -> dead edge.
#[derive(Debug)]
pub struct DeathEvent {
    pub entity: Entity,
}

impl Message for DeathEvent {}

/// An interact press on an overlapping interactable.
#[derive(Debug)]
pub struct InteractEvent {
    pub character: Entity,
    pub interactable: Entity,
    pub channel: InteractChannel,
}

impl Message for InteractEvent {}
