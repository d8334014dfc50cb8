//! Core domain: global movement lock shared with external sequencers.

use bevy::prelude::*;

/// Resource set by external collaborators (cinematics, interactions) to
/// suspend all character control. While locked: input is cleared, horizontal
/// velocity is zeroed, and any active grapple or glide is retired.
#[derive(Resource, Debug, Default)]
pub struct MovementLock {
    pub locked: bool,
}

impl MovementLock {
    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }
}

/// Run condition: returns true only while movement is not globally locked
pub fn movement_unlocked(lock: Res<MovementLock>) -> bool {
    !lock.locked
}
