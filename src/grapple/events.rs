//! Grapple domain: boundary events for audio/FX collaborators.

use bevy::ecs::message::Message;
use bevy::prelude::*;

#[derive(Debug)]
pub struct GrappleAttachedEvent {
    pub character: Entity,
    pub anchor: Entity,
    pub rope_length: f32,
}

impl Message for GrappleAttachedEvent {}

#[derive(Debug)]
pub struct GrappleReleasedEvent {
    pub character: Entity,
}

impl Message for GrappleReleasedEvent {}
