//! Movement domain: boundary events published to UI/audio collaborators.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Emitted when a character starts or stops gliding
#[derive(Debug)]
pub struct GlideStateChangedEvent {
    pub character: Entity,
    pub gliding: bool,
}

impl Message for GlideStateChangedEvent {}
